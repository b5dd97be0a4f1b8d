//! Piece module - a falling tetromino and its rotation about a pivot cell
//!
//! A piece is four cells plus the index of its pivot. Translation and rotation
//! never validate against the board; callers simulate on a clone, ask the
//! [`Board`](crate::board::Board) whether the result is legal, and only then
//! mutate the live piece.
//!
//! Rotation is integer-only in effect: each non-pivot cell is located on a
//! sampled ring of lattice points around the pivot (radius = Chebyshev
//! distance) and moved to the ring point a quarter turn away. The ring is
//! symmetric under quarter turns, so four rotations in one direction always
//! return every cell to where it started.

use std::f64::consts::FRAC_PI_4;

use arrayvec::ArrayVec;

use crate::cell::Cell;
use crate::types::{ColorGroup, Direction, PieceKind, Rotation};

/// Number of cells in every tetromino.
pub const PIECE_CELLS: usize = 4;

/// Cell storage for a piece.
pub type PieceCells = ArrayVec<Cell, PIECE_CELLS>;

/// A free-floating tetromino owned by the session until it is committed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    cells: PieceCells,
    pivot: usize,
    kind: PieceKind,
    rotation: Rotation,
}

impl Piece {
    /// Build a piece from its cells (in blueprint order) and pivot index.
    pub fn new(kind: PieceKind, cells: PieceCells, pivot: usize) -> Self {
        debug_assert!(pivot < cells.len(), "pivot index {pivot} out of range");
        Self {
            cells,
            pivot,
            kind,
            rotation: Rotation::North,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Rotation-state counter, advanced only by successful rotations.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn pivot_index(&self) -> usize {
        self.pivot
    }

    pub fn pivot(&self) -> Cell {
        self.cells[self.pivot]
    }

    /// Fill color shared by every cell.
    pub fn group(&self) -> ColorGroup {
        self.cells
            .first()
            .map(|c| c.group)
            .unwrap_or(ColorGroup::Empty)
    }

    /// Translate every cell by `(dx, dy)`.
    pub fn translate(&mut self, dx: i16, dy: i16) {
        for cell in &mut self.cells {
            cell.offset(dx, dy);
        }
    }

    /// Move `distance` cells in `direction`. No validation.
    pub fn move_by(&mut self, direction: Direction, distance: i16) {
        let (dx, dy) = direction.delta();
        self.translate(dx * distance, dy * distance);
    }

    /// Move one cell in `direction`. No validation.
    pub fn shift(&mut self, direction: Direction) {
        self.move_by(direction, 1);
    }

    /// A copy moved one cell in `direction`.
    pub fn shifted(&self, direction: Direction) -> Self {
        let mut trial = self.clone();
        trial.shift(direction);
        trial
    }

    /// Rotate every non-pivot cell a quarter turn about the pivot.
    ///
    /// Does not touch the rotation-state counter and does not resolve kicks.
    pub fn rotate(&mut self, clockwise: bool) {
        let Cell { x: px, y: py, .. } = self.pivot();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if i == self.pivot {
                continue;
            }
            let (dx, dy) = rotate_delta(cell.x - px, cell.y - py, clockwise);
            cell.x = px + dx;
            cell.y = py + dy;
        }
    }

    /// Advance the rotation-state counter one step.
    pub fn update_rotation_state(&mut self, clockwise: bool) {
        self.rotation = self.rotation.step(clockwise);
    }

    /// Leftmost, rightmost and lowest occupied coordinates.
    pub fn extent(&self) -> (i16, i16, i16) {
        self.cells.iter().fold(
            (i16::MAX, i16::MIN, i16::MIN),
            |(min_x, max_x, max_y), c| (min_x.min(c.x), max_x.max(c.x), max_y.max(c.y)),
        )
    }

    /// Whether any cell sits at `(x, y)`.
    pub fn occupies(&self, x: i16, y: i16) -> bool {
        self.cells.iter().any(|c| c.is_at(x, y))
    }
}

/// Sample `k` of the `8 * radius` point ring around the origin.
fn ring_point(radius: i16, k: i16) -> (i16, i16) {
    let step = FRAC_PI_4 / f64::from(radius);
    let angle = step * f64::from(k);
    let r = f64::from(radius);
    ((angle.cos() * r).round() as i16, (angle.sin() * r).round() as i16)
}

/// Map a pivot-relative vector to the lattice point a quarter turn away on the
/// same ring. Screen coordinates: clockwise sends right to down.
fn rotate_delta(dx: i16, dy: i16, clockwise: bool) -> (i16, i16) {
    let radius = dx.abs().max(dy.abs());
    if radius == 0 {
        return (0, 0);
    }

    let samples = 8 * radius;
    let quarter = 2 * radius;
    for k in 0..samples {
        if ring_point(radius, k) == (dx, dy) {
            let target = if clockwise {
                (k + quarter) % samples
            } else {
                (k + samples - quarter) % samples
            };
            return ring_point(radius, target);
        }
    }

    // Tetromino cells sit within Chebyshev distance 2 of their pivot, where
    // every vector lies on the sampled ring.
    debug_assert!(false, "vector ({dx}, {dy}) is not on the rotation ring");
    if clockwise {
        (-dy, dx)
    } else {
        (dy, -dx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t_piece() -> Piece {
        // _#_
        // #@#
        let g = ColorGroup::Green;
        let cells: PieceCells = [
            Cell::new(1, 0, g),
            Cell::new(0, 1, g),
            Cell::new(1, 1, g),
            Cell::new(2, 1, g),
        ]
        .into_iter()
        .collect();
        Piece::new(PieceKind::T, cells, 2)
    }

    #[test]
    fn ring_covers_all_neighbours() {
        let ring: Vec<_> = (0..8).map(|k| ring_point(1, k)).collect();
        for v in [(1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1), (0, -1), (1, -1)] {
            assert!(ring.contains(&v), "missing {v:?}");
        }
    }

    #[test]
    fn rotate_delta_is_a_quarter_turn() {
        assert_eq!(rotate_delta(1, 0, true), (0, 1));
        assert_eq!(rotate_delta(0, 1, true), (-1, 0));
        assert_eq!(rotate_delta(1, -1, true), (1, 1));
        assert_eq!(rotate_delta(2, 0, true), (0, 2));
        assert_eq!(rotate_delta(-2, 0, false), (0, 2));
        assert_eq!(rotate_delta(0, 0, true), (0, 0));
    }

    #[test]
    fn rotate_clockwise_points_t_right() {
        let mut piece = t_piece();
        piece.rotate(true);
        let coords: Vec<_> = piece.cells().iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(2, 1), (1, 0), (1, 1), (1, 2)]);
        // bookkeeping is the caller's job
        assert_eq!(piece.rotation(), Rotation::North);
    }

    #[test]
    fn rotate_then_counter_rotate_is_identity() {
        let original = t_piece();
        let mut piece = original.clone();
        piece.rotate(true);
        piece.rotate(false);
        assert_eq!(piece, original);
    }

    #[test]
    fn move_by_scales_direction() {
        let mut piece = t_piece();
        piece.move_by(Direction::Right, 3);
        assert_eq!(piece.pivot(), Cell::new(4, 1, ColorGroup::Green));
        piece.move_by(Direction::Up, 2);
        assert_eq!(piece.pivot(), Cell::new(4, -1, ColorGroup::Green));
    }

    #[test]
    fn shifted_leaves_original_untouched() {
        let piece = t_piece();
        let moved = piece.shifted(Direction::Down);
        assert_eq!(piece.pivot().y, 1);
        assert_eq!(moved.pivot().y, 2);
    }

    #[test]
    fn rotation_state_wraps() {
        let mut piece = t_piece();
        piece.update_rotation_state(false);
        assert_eq!(piece.rotation(), Rotation::West);
        piece.update_rotation_state(true);
        piece.update_rotation_state(true);
        assert_eq!(piece.rotation(), Rotation::East);
    }

    #[test]
    fn extent_spans_cells() {
        assert_eq!(t_piece().extent(), (0, 2, 1));
    }
}
