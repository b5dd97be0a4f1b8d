//! Clear animation tests - blink cycle against a live board

use blockfall::core::{AnimationStep, Board, ClearAnimation};
use blockfall::types::ColorGroup;

fn board() -> Board {
    Board::from_rows(&["......", "B.....", "RRRRRR", "G.G.G.", "BBBBBB"]).unwrap()
}

#[test]
fn test_blink_alternates_palette() {
    let board = board();
    let mut anim = ClearAnimation::new();
    let rows = board.full_rows();
    assert_eq!(rows, vec![2, 4]);

    assert!(anim.is_idle());
    assert_eq!(anim.step(&rows, &board), AnimationStep::Blinking { step: 1 });
    assert_eq!(anim.current_step(), 1);
    assert_eq!(anim.affected_rows().len(), 2);
    assert!(anim
        .affected_rows()
        .iter()
        .flatten()
        .all(|c| c.group == ColorGroup::Orange));

    assert_eq!(anim.step(&rows, &board), AnimationStep::Blinking { step: 2 });
    assert_eq!(anim.current_step(), 2);
    assert!(anim
        .affected_rows()
        .iter()
        .flatten()
        .all(|c| c.group == ColorGroup::Black));
}

#[test]
fn test_snapshot_keeps_row_coordinates() {
    let board = board();
    let mut anim = ClearAnimation::new();
    anim.step(&[4, 2], &board);
    let ys: Vec<_> = anim.affected_rows().iter().map(|row| row[0].y).collect();
    assert_eq!(ys, vec![2, 4]);
    for row in anim.affected_rows() {
        let xs: Vec<_> = row.iter().map(|c| c.x).collect();
        assert_eq!(xs, vec![0, 1, 2, 3, 4, 5]);
    }
}

#[test]
fn test_compaction_happens_once_after_cycle() {
    let mut board = board();
    let mut anim = ClearAnimation::new();
    let mut compactions = 0;

    for _ in 0..6 {
        let rows = if anim.is_idle() { board.full_rows() } else { Vec::new() };
        if let AnimationStep::Finished { rows } = anim.step(&rows, &board) {
            board.delete_full_rows(&rows);
            compactions += 1;
        }
    }

    assert_eq!(compactions, 1);
    assert_eq!(
        board.to_string(),
        ["......", "......", "......", "B.....", "G.G.G."].join("\n")
    );
    assert!(anim.is_idle());
}
