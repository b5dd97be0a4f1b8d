//! Game session - the falling piece, the board, scoring and both cadences
//!
//! A session owns everything that changes during a game. Hosts drive it two
//! ways:
//!
//! - **Intents** ([`Session::move_piece`], [`Session::rotate`],
//!   [`Session::hard_drop`], or [`Session::apply_action`]) run immediately.
//!   Illegal intents are silently rejected and report `false`.
//! - **Time** ([`Session::advance`]) fires the gravity cadence and the faster
//!   animation cadence, each guarded against pile-up.
//!
//! # Commit
//!
//! Only a downward move commits. When [`Board::should_commit`] says the next
//! step down would rest the piece on the stack or the floor, the piece is
//! merged into the board where it is and the queued piece spawns.
//!
//! # Clearing
//!
//! Full rows are not removed when a piece commits. The animation cadence
//! notices them, blinks them, and only when the blink cycle finishes are they
//! folded into the board and scored.

use std::mem;

use tracing::{debug, info, warn};

use crate::animation::{AnimationStep, ClearAnimation};
use crate::blueprint::PieceGenerator;
use crate::board::Board;
use crate::config::{ConfigError, SessionConfig};
use crate::piece::Piece;
use crate::schedule::Cadence;
use crate::scoring::Score;
use crate::types::{Direction, GameAction, PieceKind};

/// Cadences that fired during one [`Session::advance`] call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Advance {
    /// Gravity ran (the piece moved down or committed).
    pub gravity: bool,
    /// Result of the animation tick, if one ran.
    pub animation: Option<AnimationStep>,
}

impl Advance {
    pub fn fired(&self) -> bool {
        self.gravity || self.animation.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    generator: PieceGenerator,
    current: Piece,
    next: Piece,
    score: Score,
    lines: u32,
    animation: ClearAnimation,
    board_cadence: Cadence,
    animation_cadence: Cadence,
    game_over: bool,
}

impl Session {
    /// Start a session; the clock starts at `0` ms.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let board = Board::new(config.cols, config.rows).with_clear_rule(config.clear_rule);
        let mut generator =
            PieceGenerator::new(config.seed, config.piece_rule, config.color_count);
        let first = generator.create_piece();
        let next = generator.create_piece();
        let score = Score::new();

        let mut session = Self {
            current: first,
            next,
            board,
            generator,
            lines: 0,
            animation: ClearAnimation::new(),
            board_cadence: Cadence::new(score.drop_interval_ms(), 0),
            animation_cadence: Cadence::new(config.animation_interval_ms, 0),
            score,
            game_over: false,
            config,
        };
        session.spawn_current();
        Ok(session)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for hosts that set up positions.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current_piece(&self) -> &Piece {
        &self.current
    }

    /// Replace the falling piece. No legality check.
    pub fn set_current_piece(&mut self, piece: Piece) {
        self.current = piece;
    }

    /// The queued piece, still at its blueprint position.
    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    /// Where the falling piece would land.
    pub fn ghost(&self) -> Piece {
        self.board.landing(&self.current)
    }

    pub fn clear_animation(&self) -> &ClearAnimation {
        &self.animation
    }

    pub fn score(&self) -> u32 {
        self.score.score()
    }

    pub fn level(&self) -> u32 {
        self.score.level()
    }

    pub fn speed(&self) -> u32 {
        self.score.speed()
    }

    /// Total rows cleared this session.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Current gravity interval.
    pub fn drop_interval_ms(&self) -> u32 {
        self.board_cadence.interval_ms()
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Queue a fresh piece and return the previously queued one, centered.
    pub fn generate_piece(&mut self) -> Piece {
        let fresh = self.generator.create_piece();
        let mut piece = mem::replace(&mut self.next, fresh);
        self.center(&mut piece);
        piece
    }

    fn center(&self, piece: &mut Piece) {
        let fix = if piece.kind() == PieceKind::O { 1 } else { 2 };
        let shift = self.board.center_x() - fix;
        piece.move_by(Direction::Right, shift);
    }

    fn spawn_current(&mut self) {
        let mut piece = self.current.clone();
        self.center(&mut piece);
        self.current = piece;
    }

    /// Move the falling piece one cell, committing it if a downward step
    /// would rest it on the stack or the floor.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }
        if direction == Direction::Down && self.board.should_commit(&self.current, direction) {
            self.commit();
            return true;
        }
        if !self.board.can_move(&self.current, direction) {
            return false;
        }
        self.current.shift(direction);
        true
    }

    /// Rotate the falling piece, resolving kicks.
    pub fn rotate(&mut self, clockwise: bool) -> bool {
        if self.game_over {
            return false;
        }
        self.board.attempt_kick(&mut self.current, clockwise)
    }

    /// Drop the falling piece to its landing position and commit it.
    pub fn hard_drop(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let landed = self.board.landing(&self.current);
        let distance = landed.pivot().y - self.current.pivot().y;
        debug!(kind = ?landed.kind(), distance, "hard drop");
        self.current = landed;
        self.commit();
        true
    }

    /// Apply a player intent. Returns whether it had an effect.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.move_piece(direction),
            GameAction::RotateCw => self.rotate(true),
            GameAction::RotateCcw => self.rotate(false),
            GameAction::HardDrop => self.hard_drop(),
        }
    }

    fn commit(&mut self) {
        let spawned = self.generate_piece();
        let placed = mem::replace(&mut self.current, spawned);
        let inside = self.board.add_shape(&placed);
        debug!(kind = ?placed.kind(), pivot_y = placed.pivot().y, "piece committed");

        if !inside || self.board.shape_overlaps_stack(&self.current) {
            self.game_over = true;
            warn!(
                score = self.score.score(),
                lines = self.lines,
                lock_out = !inside,
                "game over"
            );
        }
    }

    /// One gravity step.
    pub fn board_tick(&mut self) -> bool {
        self.move_piece(Direction::Down)
    }

    /// One animation step. Folds finished clears into the board.
    pub fn animation_tick(&mut self) -> AnimationStep {
        let rows = if self.animation.is_idle() {
            self.board.full_rows()
        } else {
            Vec::new()
        };
        let step = self.animation.step(&rows, &self.board);
        if let AnimationStep::Finished { rows } = &step {
            self.fold_clear(rows);
        }
        step
    }

    fn fold_clear(&mut self, rows: &[usize]) {
        self.board.delete_full_rows(rows);
        self.lines = self.lines.saturating_add(rows.len() as u32);
        let points = self.add_points(rows.len());
        info!(rows = rows.len(), points, score = self.score.score(), "rows cleared");
        self.level_up();

        // The stack may have fallen into a piece hanging in a cave.
        while self.board.shape_overlaps_stack(&self.current) {
            self.current.shift(Direction::Up);
        }
    }

    /// Award points for a clear of `cleared_rows` rows.
    pub fn add_points(&mut self, cleared_rows: usize) -> u32 {
        self.score.add_points(cleared_rows)
    }

    /// Recompute level and speed from the score and retune gravity.
    pub fn level_up(&mut self) -> bool {
        let changed = self.score.level_up();
        if changed {
            info!(level = self.score.level(), "level up");
            self.board_cadence.set_interval(self.score.drop_interval_ms());
        }
        changed
    }

    /// Run whichever cadences are due at `now_ms` (milliseconds since the
    /// session started).
    pub fn advance(&mut self, now_ms: u64) -> Advance {
        let mut out = Advance::default();

        if self.animation_cadence.poll(now_ms) {
            out.animation = Some(self.animation_tick());
            self.animation_cadence.complete(now_ms);
        }

        if !self.game_over && self.board_cadence.poll(now_ms) {
            out.gravity = self.board_tick();
            self.board_cadence.complete(now_ms);
        }

        out
    }
}
