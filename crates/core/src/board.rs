//! Board module - manages the committed grid
//!
//! The board is a `rows x cols` grid of [`Cell`]s, stored row-major as one
//! vector per row. Every cell's coordinates mirror its index
//! (`grid[y][x].x == x && grid[y][x].y == y`).
//!
//! Coordinates: (x, y) where x grows to the right and y grows downward.
//! There is no upper bound on y for falling pieces: a piece may hang above
//! row 0 until it settles.
//!
//! The board never holds a falling piece. All move/rotation checks run on a
//! copy of the piece; only [`Board::add_shape`] and
//! [`Board::delete_full_rows`] mutate the grid.

use std::fmt;

use thiserror::Error;
use tracing::debug;

use crate::cell::Cell;
use crate::kicks::{self, Offset};
use crate::piece::Piece;
use crate::types::{ColorGroup, Direction, MAX_COLS, MAX_ROWS};

/// Which rows count as full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearRule {
    /// Every cell filled, all with one color group.
    #[default]
    SameColor,
    /// Every cell filled, colors may mix.
    AnyColor,
}

/// Error building a board from a text fixture.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("fixture has no rows")]
    Empty,
    #[error("row {row} has {got} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    #[error("unknown color {ch:?} at row {row}, column {col}")]
    UnknownColor { ch: char, row: usize, col: usize },
    #[error("fixture is {cols}x{rows}, larger than {max_cols}x{max_rows}")]
    TooLarge {
        cols: usize,
        rows: usize,
        max_cols: u8,
        max_rows: u8,
    },
}

/// The committed stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Vec<Vec<Cell>>,
    cols: u8,
    rows: u8,
    clear_rule: ClearRule,
}

fn empty_row(y: i16, cols: u8) -> Vec<Cell> {
    (0..i16::from(cols)).map(|x| Cell::empty(x, y)).collect()
}

impl Board {
    /// Create an empty board.
    ///
    /// Dimensions are capped at [`MAX_COLS`] x [`MAX_ROWS`];
    /// [`SessionConfig::validate`](crate::SessionConfig::validate) rejects
    /// anything larger before a session builds its board.
    pub fn new(cols: usize, rows: usize) -> Self {
        debug_assert!(
            cols <= usize::from(MAX_COLS) && rows <= usize::from(MAX_ROWS),
            "board {cols}x{rows} exceeds {MAX_COLS}x{MAX_ROWS}"
        );
        let cols = u8::try_from(cols).unwrap_or(MAX_COLS);
        let rows = u8::try_from(rows).unwrap_or(MAX_ROWS);
        Self {
            grid: (0..i16::from(rows)).map(|y| empty_row(y, cols)).collect(),
            cols,
            rows,
            clear_rule: ClearRule::default(),
        }
    }

    pub fn with_clear_rule(mut self, clear_rule: ClearRule) -> Self {
        self.clear_rule = clear_rule;
        self
    }

    /// Build a board from a text picture, top row first.
    ///
    /// `.` is empty; `R`, `G`, `B`, `O`, `K` are colors.
    ///
    /// ```
    /// use blockfall_core::Board;
    ///
    /// let board = Board::from_rows(&["..R", "GGG"]).unwrap();
    /// assert_eq!(board.cols(), 3);
    /// assert_eq!(board.full_rows(), vec![1]);
    /// ```
    pub fn from_rows(picture: &[&str]) -> Result<Self, FixtureError> {
        let cols = picture.first().ok_or(FixtureError::Empty)?.chars().count();
        if cols > usize::from(MAX_COLS) || picture.len() > usize::from(MAX_ROWS) {
            return Err(FixtureError::TooLarge {
                cols,
                rows: picture.len(),
                max_cols: MAX_COLS,
                max_rows: MAX_ROWS,
            });
        }
        let mut board = Self::new(cols, picture.len());
        for (y, line) in picture.iter().enumerate() {
            let got = line.chars().count();
            if got != cols {
                return Err(FixtureError::RaggedRow {
                    row: y,
                    expected: cols,
                    got,
                });
            }
            for (x, ch) in line.chars().enumerate() {
                board.grid[y][x].group = ColorGroup::from_char(ch).ok_or(
                    FixtureError::UnknownColor { ch, row: y, col: x },
                )?;
            }
        }
        Ok(board)
    }

    pub fn cols(&self) -> usize {
        usize::from(self.cols)
    }

    pub fn rows(&self) -> usize {
        usize::from(self.rows)
    }

    /// Column a new piece is centred on.
    pub fn center_x(&self) -> i16 {
        i16::from(self.cols / 2)
    }

    pub fn clear_rule(&self) -> ClearRule {
        self.clear_rule
    }

    /// Read-only view of the grid, row-major.
    pub fn grid(&self) -> &[Vec<Cell>] {
        &self.grid
    }

    /// Grid indices for `(x, y)`, or `None` when outside the grid.
    #[inline]
    fn index(&self, x: i16, y: i16) -> Option<(usize, usize)> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        (x < self.cols() && y < self.rows()).then_some((x, y))
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn cell(&self, x: i16, y: i16) -> Option<&Cell> {
        self.index(x, y).map(|(x, y)| &self.grid[y][x])
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i16, y: i16) -> bool {
        self.cell(x, y).is_some_and(|c| !c.is_empty())
    }

    /// Number of filled cells in the grid.
    pub fn occupied_count(&self) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .count()
    }

    /// True if any cell is past a side wall or below the last row.
    ///
    /// Cells above row 0 are allowed.
    pub fn is_outside_boundaries(&self, piece: &Piece) -> bool {
        let (cols, rows) = (i16::from(self.cols), i16::from(self.rows));
        piece
            .cells()
            .iter()
            .any(|c| c.x < 0 || c.x >= cols || c.y >= rows)
    }

    /// True if any piece cell coincides with a filled grid cell.
    pub fn shape_overlaps_stack(&self, piece: &Piece) -> bool {
        piece.cells().iter().any(|c| self.is_occupied(c.x, c.y))
    }

    /// A position is legal when it is in bounds and clear of the stack.
    pub fn fits(&self, piece: &Piece) -> bool {
        !self.shape_overlaps_stack(piece) && !self.is_outside_boundaries(piece)
    }

    /// Whether moving one cell in `direction` stays legal.
    pub fn can_move(&self, piece: &Piece, direction: Direction) -> bool {
        self.fits(&piece.shifted(direction))
    }

    /// Find the first kick attempt that makes the rotation legal.
    ///
    /// Returns the attempt index and translation; the piece is not touched.
    pub fn resolve_kick(&self, piece: &Piece, clockwise: bool) -> Option<(usize, Offset)> {
        let mut rotated = piece.clone();
        rotated.rotate(clockwise);

        (0..kicks::attempts(piece.kind())).find_map(|attempt| {
            let (dx, dy) =
                kicks::kick_translation(piece.kind(), piece.rotation(), clockwise, attempt)?;
            let mut trial = rotated.clone();
            trial.translate(dx, dy);
            self.fits(&trial).then_some((attempt, (dx, dy)))
        })
    }

    /// Rotate `piece` using the kick tables.
    ///
    /// On success the piece is rotated, its rotation state advanced and the
    /// winning translation applied. When every attempt collides the piece is
    /// left unchanged and `false` is returned.
    pub fn attempt_kick(&self, piece: &mut Piece, clockwise: bool) -> bool {
        let Some((attempt, (dx, dy))) = self.resolve_kick(piece, clockwise) else {
            return false;
        };

        if attempt > 0 {
            debug!(kind = ?piece.kind(), attempt, dx, dy, "rotation resolved by kick");
        }
        piece.rotate(clockwise);
        piece.update_rotation_state(clockwise);
        piece.translate(dx, dy);
        true
    }

    /// Where `piece` would come to rest if dropped straight down.
    pub fn landing(&self, piece: &Piece) -> Piece {
        let mut landed = piece.clone();
        // Terminates: the floor rejects the piece once its lowest cell passes the last row.
        loop {
            let next = landed.shifted(Direction::Down);
            if !self.fits(&next) {
                return landed;
            }
            landed = next;
        }
    }

    /// Move `piece` down until blocked. Returns the distance dropped.
    pub fn hard_drop(&self, piece: &mut Piece) -> i16 {
        let landed = self.landing(piece);
        let distance = landed.pivot().y - piece.pivot().y;
        *piece = landed;
        distance
    }

    /// Whether moving in `direction` would put the piece onto the stack or
    /// past the floor, meaning it should be committed where it is.
    ///
    /// Only surface cells count: filled cells whose neighbour above is empty
    /// (the space above row 0 is empty).
    pub fn should_commit(&self, piece: &Piece, direction: Direction) -> bool {
        let moved = piece.shifted(direction);
        moved.cells().iter().any(|c| {
            if c.y >= i16::from(self.rows) {
                return true;
            }
            if !self.is_occupied(c.x, c.y) {
                return false;
            }
            c.y == 0 || !self.is_occupied(c.x, c.y - 1)
        })
    }

    /// Write the piece's colors into the grid.
    ///
    /// Returns `false` if any cell fell outside the grid (such cells are
    /// dropped); the in-bounds cells are still written.
    pub fn add_shape(&mut self, piece: &Piece) -> bool {
        let mut all_inside = true;
        for c in piece.cells() {
            match self.index(c.x, c.y) {
                Some((x, y)) => self.grid[y][x].group = c.group,
                None => all_inside = false,
            }
        }
        all_inside
    }

    /// Check if a row qualifies for clearing under the board's rule
    pub fn is_row_full(&self, y: usize) -> bool {
        let Some(row) = self.grid.get(y) else {
            return false;
        };
        let Some(first) = row.first() else {
            return false;
        };
        match self.clear_rule {
            ClearRule::SameColor => {
                !first.is_empty() && row.iter().all(|c| c.group == first.group)
            }
            ClearRule::AnyColor => row.iter().all(|c| !c.is_empty()),
        }
    }

    /// Indices of every full row, top to bottom.
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.rows()).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the named rows and let everything above fall.
    ///
    /// The new grid is built aside and swapped in, with fresh empty rows on
    /// top and every cell's coordinates reset to its new slot. Indices outside
    /// the grid are ignored; duplicates count once.
    pub fn delete_full_rows(&mut self, rows: &[usize]) {
        debug_assert!(
            rows.iter().all(|&y| y < self.rows()),
            "row index out of range: {rows:?}"
        );

        let removed = (0..self.rows()).filter(|y| rows.contains(y)).count();
        if removed == 0 {
            return;
        }

        let mut next: Vec<Vec<Cell>> = Vec::with_capacity(self.rows());
        next.extend((0..removed).map(|_| empty_row(0, self.cols)));
        next.extend(
            std::mem::take(&mut self.grid)
                .into_iter()
                .enumerate()
                .filter(|(y, _)| !rows.contains(y))
                .map(|(_, row)| row),
        );

        for (y, row) in (0..).zip(next.iter_mut()) {
            for (x, cell) in (0..).zip(row.iter_mut()) {
                cell.x = x;
                cell.y = y;
            }
        }

        self.grid = next;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.grid.iter().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.group.as_char())?;
            }
        }
        Ok(())
    }
}
