//! Kick offset tables (Super Rotation System, offset formulation)
//!
//! A piece rotates about its pivot cell, then the rotated copy is translated by
//! `offset[attempt][from] - offset[attempt][to]` for each attempt in order until
//! one position is legal. J, L, S, T and Z share one table; I and O carry
//! their own, which also correct for their pivot sitting off the true center.
//!
//! Values are in screen coordinates (y grows downward), i.e. the usual
//! guideline tables with the y component negated.
//!
//! Reference: https://tetris.wiki/Super_Rotation_System

use crate::types::{PieceKind, Rotation};

/// A `(dx, dy)` offset in screen coordinates.
pub type Offset = (i16, i16);

/// Offsets indexed `[attempt][rotation state]`.
pub type OffsetTable = [[Offset; 4]];

/// Most attempts any table carries.
pub const MAX_KICK_ATTEMPTS: usize = 5;

const JLSTZ_OFFSETS: [[Offset; 4]; 5] = [
    [(0, 0), (0, 0), (0, 0), (0, 0)],
    [(0, 0), (1, 0), (0, 0), (-1, 0)],
    [(0, 0), (1, 1), (0, 0), (-1, 1)],
    [(0, 0), (0, -2), (0, 0), (0, -2)],
    [(0, 0), (1, -2), (0, 0), (-1, -2)],
];

const I_OFFSETS: [[Offset; 4]; 5] = [
    [(0, 0), (-1, 0), (-1, -1), (0, -1)],
    [(-1, 0), (0, 0), (1, -1), (0, -1)],
    [(2, 0), (0, 0), (-2, -1), (0, -1)],
    [(-1, 0), (0, -1), (1, 0), (0, 1)],
    [(2, 0), (0, 2), (-2, 0), (0, -2)],
];

// A single cycle that keeps the square in place as its pivot turns.
const O_OFFSETS: [[Offset; 4]; 1] = [[(0, 0), (0, 1), (-1, 1), (-1, 0)]];

/// Offset table for a piece kind.
pub fn offset_table(kind: PieceKind) -> &'static OffsetTable {
    match kind {
        PieceKind::I => &I_OFFSETS,
        PieceKind::O => &O_OFFSETS,
        PieceKind::J | PieceKind::L | PieceKind::S | PieceKind::T | PieceKind::Z => {
            &JLSTZ_OFFSETS
        }
    }
}

/// Number of kick attempts for a piece kind.
pub fn attempts(kind: PieceKind) -> usize {
    offset_table(kind).len()
}

/// `(from, to)` offsets for one attempt of a rotation out of `from`.
///
/// Returns `None` once `attempt` runs past the kind's table.
pub fn offset_pair(
    kind: PieceKind,
    from: Rotation,
    clockwise: bool,
    attempt: usize,
) -> Option<(Offset, Offset)> {
    let row = offset_table(kind).get(attempt)?;
    let to = from.step(clockwise);
    Some((row[from.index()], row[to.index()]))
}

/// Translation applied to the rotated piece for one attempt.
pub fn kick_translation(
    kind: PieceKind,
    from: Rotation,
    clockwise: bool,
    attempt: usize,
) -> Option<Offset> {
    offset_pair(kind, from, clockwise, attempt)
        .map(|((fx, fy), (tx, ty))| (fx - tx, fy - ty))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn attempt_counts() {
        assert_eq!(attempts(PieceKind::T), MAX_KICK_ATTEMPTS);
        assert_eq!(attempts(PieceKind::I), MAX_KICK_ATTEMPTS);
        assert_eq!(attempts(PieceKind::O), 1);
        assert_eq!(offset_pair(PieceKind::O, Rotation::North, true, 1), None);
    }

    #[test]
    fn jlstz_north_to_east_matches_guideline_kicks() {
        // Guideline 0->R tests with y pointing up: (0,0) (-1,0) (-1,+1) (0,-2) (-1,-2)
        let expected = [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)];
        for (attempt, want) in expected.into_iter().enumerate() {
            assert_eq!(
                kick_translation(PieceKind::T, Rotation::North, true, attempt),
                Some(want)
            );
        }
    }

    #[test]
    fn i_north_to_east_tests_are_relative_to_the_first() {
        // Guideline I 0->R tests (y up): (0,0) (-2,0) (+1,0) (-2,-1) (+1,+2)
        let base = kick_translation(PieceKind::I, Rotation::North, true, 0).unwrap();
        assert_eq!(base, (1, 0));
        let relative: Vec<_> = (0..5)
            .map(|a| {
                let (dx, dy) = kick_translation(PieceKind::I, Rotation::North, true, a).unwrap();
                (dx - base.0, dy - base.1)
            })
            .collect();
        assert_eq!(relative, vec![(0, 0), (-2, 0), (1, 0), (-2, 1), (1, -2)]);
    }

    #[test]
    fn i_translations_for_every_transition() {
        use Rotation::{East, North, South, West};
        let table: [(Rotation, bool, [Offset; 5]); 8] = [
            (North, true, [(1, 0), (-1, 0), (2, 0), (-1, 1), (2, -2)]),
            (East, false, [(-1, 0), (1, 0), (-2, 0), (1, -1), (-2, 2)]),
            (East, true, [(0, 1), (-1, 1), (2, 1), (-1, -1), (2, 2)]),
            (South, false, [(0, -1), (1, -1), (-2, -1), (1, 1), (-2, -2)]),
            (South, true, [(-1, 0), (1, 0), (-2, 0), (1, -1), (-2, 2)]),
            (West, false, [(1, 0), (-1, 0), (2, 0), (-1, 1), (2, -2)]),
            (West, true, [(0, -1), (1, -1), (-2, -1), (1, 1), (-2, -2)]),
            (North, false, [(0, 1), (-1, 1), (2, 1), (-1, -1), (2, 2)]),
        ];
        for (from, clockwise, expected) in table {
            let got: Vec<_> = (0..attempts(PieceKind::I))
                .map(|a| kick_translation(PieceKind::I, from, clockwise, a).unwrap())
                .collect();
            assert_eq!(got, expected, "{from:?} clockwise={clockwise}");
        }
    }

    #[test]
    fn translations_cancel_over_a_full_turn() {
        for kind in PieceKind::ALL {
            for clockwise in [true, false] {
                let mut from = Rotation::North;
                let mut sum = (0, 0);
                for _ in 0..4 {
                    let (dx, dy) = kick_translation(kind, from, clockwise, 0).unwrap();
                    sum = (sum.0 + dx, sum.1 + dy);
                    from = from.step(clockwise);
                }
                assert_eq!(sum, (0, 0), "{kind:?} clockwise={clockwise}");
            }
        }
    }

    #[test]
    fn opposite_rotations_undo_each_other() {
        for kind in PieceKind::ALL {
            for from in STATES {
                for attempt in 0..attempts(kind) {
                    let (dx, dy) = kick_translation(kind, from, true, attempt).unwrap();
                    let back = kick_translation(kind, from.rotate_cw(), false, attempt).unwrap();
                    assert_eq!(back, (-dx, -dy));
                }
            }
        }
    }
}
