//! Blueprints and the piece generator
//!
//! Each tetromino is described by a small character grid: `#` marks a body
//! cell, `@` marks the pivot cell, anything else is blank. The generator picks
//! a kind and a color and instantiates a fresh [`Piece`] from the grid, with
//! the grid's top-left corner at the board origin.

use crate::cell::Cell;
use crate::piece::{Piece, PieceCells};
use crate::rng::{KindSource, PieceRule, SimpleRng};
use crate::types::{ColorGroup, PieceKind, PIECE_PALETTE};

/// Character grid for a piece kind, top row first.
pub fn blueprint(kind: PieceKind) -> &'static [&'static str] {
    match kind {
        PieceKind::J => &["#__", "#@#"],
        PieceKind::L => &["__#", "#@#"],
        PieceKind::S => &["_##", "#@_"],
        PieceKind::T => &["_#_", "#@#"],
        PieceKind::Z => &["##_", "_@#"],
        PieceKind::I => &["#@##"],
        PieceKind::O => &["##", "@#"],
    }
}

/// Instantiate `kind` at the origin, every cell colored `group`.
pub fn build_piece(kind: PieceKind, group: ColorGroup) -> Piece {
    let mut cells = PieceCells::new();
    let mut pivot = 0;
    for (y, row) in blueprint(kind).iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let (x, y) = (x as i16, y as i16);
            match ch {
                '#' => cells.push(Cell::new(x, y, group)),
                '@' => {
                    pivot = cells.len();
                    cells.push(Cell::new(x, y, group));
                }
                _ => {}
            }
        }
    }
    Piece::new(kind, cells, pivot)
}

/// Infinite source of fresh pieces.
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: SimpleRng,
    kinds: KindSource,
    color_count: usize,
}

impl PieceGenerator {
    /// `color_count` limits colors to the first entries of [`PIECE_PALETTE`].
    pub fn new(seed: u32, rule: PieceRule, color_count: usize) -> Self {
        debug_assert!((1..=PIECE_PALETTE.len()).contains(&color_count));
        Self {
            rng: SimpleRng::new(seed),
            kinds: KindSource::new(rule),
            color_count: color_count.clamp(1, PIECE_PALETTE.len()),
        }
    }

    /// Create the next piece, independent of every earlier one.
    pub fn create_piece(&mut self) -> Piece {
        let kind = self.kinds.draw(&mut self.rng);
        let color = self.rng.next_range(self.color_count as u32) as usize;
        build_piece(kind, PIECE_PALETTE[color])
    }
}

impl Iterator for PieceGenerator {
    type Item = Piece;

    fn next(&mut self) -> Option<Piece> {
        Some(self.create_piece())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_blueprint_has_four_cells_and_one_pivot() {
        for kind in PieceKind::ALL {
            let grid = blueprint(kind);
            let body = grid.iter().flat_map(|r| r.chars()).filter(|&c| c == '#').count();
            let pivots = grid.iter().flat_map(|r| r.chars()).filter(|&c| c == '@').count();
            assert_eq!(body + pivots, 4, "{kind:?}");
            assert_eq!(pivots, 1, "{kind:?}");
        }
    }

    #[test]
    fn build_marks_pivot_cell() {
        let piece = build_piece(PieceKind::I, ColorGroup::Red);
        assert_eq!(piece.cells().len(), 4);
        assert_eq!(piece.pivot(), Cell::new(1, 0, ColorGroup::Red));

        let o = build_piece(PieceKind::O, ColorGroup::Blue);
        assert_eq!(o.pivot(), Cell::new(0, 1, ColorGroup::Blue));
    }

    #[test]
    fn build_keeps_blueprint_order() {
        let j = build_piece(PieceKind::J, ColorGroup::Green);
        let coords: Vec<_> = j.cells().iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 1), (2, 1)]);
        assert_eq!(j.pivot_index(), 2);
    }

    #[test]
    fn generator_is_deterministic_per_seed() {
        let a: Vec<_> = PieceGenerator::new(42, PieceRule::Uniform, 3).take(20).collect();
        let b: Vec<_> = PieceGenerator::new(42, PieceRule::Uniform, 3).take(20).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn single_color_generator_uses_first_palette_entry() {
        let mut gen = PieceGenerator::new(5, PieceRule::Bag, 1);
        for _ in 0..14 {
            assert_eq!(gen.create_piece().group(), PIECE_PALETTE[0]);
        }
    }

    #[test]
    fn generated_pieces_start_unrotated() {
        let mut gen = PieceGenerator::new(3, PieceRule::Uniform, 3);
        for _ in 0..10 {
            let piece = gen.create_piece();
            assert_eq!(piece.rotation(), crate::types::Rotation::North);
            assert!(piece.cells().iter().all(|c| !c.is_empty()));
        }
    }
}
