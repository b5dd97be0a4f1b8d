//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Dimensions are chosen once
//! per session and never change afterwards.
//!
//! - **Columns**: indexed `0..cols` left to right
//! - **Rows**: indexed `0..rows` top to bottom (y grows downward)
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Host polling interval (~60 FPS) |
//! | `ANIMATION_TICK_MS` | 100 | Blink step interval for row clears |
//! | `DROP_INTERVALS` | 1000..160 | Gravity interval by speed 1..=9 |
//! | `DROP_INTERVAL_FLOOR_MS` | 120 | Gravity interval beyond the table |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Direction, GameAction, PieceKind, Rotation};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::West.index(), 3);
//!
//! let action = GameAction::from_str("moveLeft").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Left));
//! ```

/// Default board width in cells (10 columns)
pub const DEFAULT_COLS: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_ROWS: u8 = 20;

/// Smallest board width a session accepts (an I piece lying flat).
pub const MIN_COLS: u8 = 4;

/// Smallest board height a session accepts.
pub const MIN_ROWS: u8 = 4;

/// Widest board a session accepts. Cell coordinates are `i16` and the
/// terminal view works in `u16` columns, so dimensions stay within a byte.
pub const MAX_COLS: u8 = u8::MAX;

/// Tallest board a session accepts.
pub const MAX_ROWS: u8 = u8::MAX;

/// Host polling interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Interval between blink steps of the row-clear animation
pub const ANIMATION_TICK_MS: u32 = 100;

/// Gravity intervals by speed (milliseconds per row)
///
/// Index 0 = speed 1, index 8 = speed 9.
pub const DROP_INTERVALS: [u32; 9] = [1000, 800, 650, 500, 400, 320, 250, 200, 160];

/// Gravity interval once speed runs past the table (120ms)
pub const DROP_INTERVAL_FLOOR_MS: u32 = 120;

/// Line clear scoring table (classic curve)
///
/// Points for clearing N rows in a single clear cycle:
/// - 0 rows: 0 points
/// - 1 row: 40 points
/// - 2 rows: 100 points
/// - 3 rows: 300 points
/// - 4 rows: 1200 points
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Points per level; level = score / POINTS_PER_LEVEL + 1.
pub const POINTS_PER_LEVEL: u32 = 100;

/// The seven tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    J,
    L,
    S,
    T,
    Z,
    I,
    O,
}

impl PieceKind {
    /// Every kind, in blueprint order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::O,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            _ => None,
        }
    }

    /// Convert to uppercase letter
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
            PieceKind::I => "I",
            PieceKind::O => "O",
        }
    }
}

/// Rotation state of a piece
///
/// - **North**: Spawn orientation (state 0)
/// - **East**: One clockwise quarter turn (state 1)
/// - **South**: Half turn (state 2)
/// - **West**: One counter-clockwise quarter turn (state 3)
///
/// The rotation cycle goes: North → East → South → West → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Step one quarter turn in the given direction.
    pub fn step(&self, clockwise: bool) -> Self {
        if clockwise {
            self.rotate_cw()
        } else {
            self.rotate_ccw()
        }
    }

    /// Rotation state index in `0..=3`.
    pub fn index(&self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }
}

/// Unit movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)`; y grows downward.
    pub fn delta(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Color classification of a grid cell
///
/// `Empty` marks a free cell; every other group is a fill color. Pieces are
/// colored from [`PIECE_PALETTE`], the clear animation blinks through
/// [`BLINK_PALETTE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorGroup {
    #[default]
    Empty,
    Red,
    Green,
    Blue,
    Orange,
    Black,
}

impl ColorGroup {
    pub fn is_empty(&self) -> bool {
        matches!(self, ColorGroup::Empty)
    }

    /// Single-character code used by board fixtures and debug output.
    pub fn as_char(&self) -> char {
        match self {
            ColorGroup::Empty => '.',
            ColorGroup::Red => 'R',
            ColorGroup::Green => 'G',
            ColorGroup::Blue => 'B',
            ColorGroup::Orange => 'O',
            ColorGroup::Black => 'K',
        }
    }

    /// Inverse of [`ColorGroup::as_char`].
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(ColorGroup::Empty),
            'R' => Some(ColorGroup::Red),
            'G' => Some(ColorGroup::Green),
            'B' => Some(ColorGroup::Blue),
            'O' => Some(ColorGroup::Orange),
            'K' => Some(ColorGroup::Black),
            _ => None,
        }
    }
}

/// Colors a freshly generated piece can take.
pub const PIECE_PALETTE: [ColorGroup; 3] = [ColorGroup::Red, ColorGroup::Green, ColorGroup::Blue];

/// Colors the row-clear animation alternates between.
pub const BLINK_PALETTE: [ColorGroup; 2] = [ColorGroup::Orange, ColorGroup::Black];

/// Player intents forwarded into a session
///
/// These are produced by the input layer (or any other host) and applied
/// synchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the falling piece one cell
    Move(Direction),
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Drop piece to its landing position and commit it
    HardDrop,
}

impl GameAction {
    /// Parse action from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveDown"), Some(GameAction::Move(Direction::Down)));
    /// assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
    /// assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
    /// assert_eq!(GameAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "harddrop" => Some(GameAction::HardDrop),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::HardDrop => "hardDrop",
        }
    }
}
