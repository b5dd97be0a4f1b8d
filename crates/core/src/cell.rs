//! Grid cell - a coordinate plus its color classification.

use crate::types::ColorGroup;

/// One square of the playfield or of a falling piece.
///
/// Committed cells always carry in-bounds coordinates that mirror their grid
/// index. Cells of a falling piece may sit outside the grid (above the top
/// row, or past a wall while a rotation is being resolved).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i16,
    pub y: i16,
    pub group: ColorGroup,
}

impl Cell {
    pub fn new(x: i16, y: i16, group: ColorGroup) -> Self {
        Self { x, y, group }
    }

    pub fn empty(x: i16, y: i16) -> Self {
        Self::new(x, y, ColorGroup::Empty)
    }

    pub fn is_empty(&self) -> bool {
        self.group.is_empty()
    }

    /// Shift the coordinates in place.
    #[inline]
    pub fn offset(&mut self, dx: i16, dy: i16) {
        self.x += dx;
        self.y += dy;
    }

    /// Whether the cell sits at `(x, y)`.
    #[inline]
    pub fn is_at(&self, x: i16, y: i16) -> bool {
        self.x == x && self.y == y
    }
}
