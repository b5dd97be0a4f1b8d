use blockfall::core::{build_piece, Board, Session, SessionConfig};
use blockfall::term::{group_rgb, AnchorY, GameView, Viewport};
use blockfall::types::{ColorGroup, PieceKind};

fn session() -> Session {
    Session::new(SessionConfig::default()).unwrap()
}

fn empty_rows(n: usize) -> Vec<String> {
    vec![".".repeat(10); n]
}

#[test]
fn term_view_renders_border_corners() {
    let view = GameView::default();

    // 10 cells * 2 columns + border = 22 wide; 20 rows + border = 22 tall.
    let fb = view.render(&session(), Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut s = session();
    let mut rows = empty_rows(19);
    rows.push("G.........".to_string());
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    *s.board_mut() = Board::from_rows(&rows).unwrap();

    let fb = GameView::default()
        .with_ghost(false)
        .render(&s, Viewport::new(22, 22));

    let (x0, y0) = (1, 1 + 19);
    for x in [x0, x0 + 1] {
        let glyph = fb.get(x, y0).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.ink.fg, group_rgb(ColorGroup::Green));
    }
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_falling_piece_and_ghost() {
    let mut s = session();
    let mut piece = build_piece(PieceKind::I, ColorGroup::Blue);
    piece.translate(0, 2);
    s.set_current_piece(piece);

    let fb = GameView::default().render(&s, Viewport::new(22, 22));
    assert_eq!(fb.get(1, 3).unwrap().ch, '█');
    assert_eq!(fb.get(1, 3).unwrap().ink.fg, group_rgb(ColorGroup::Blue));
    assert_eq!(fb.get(1, 20).unwrap().ch, '░');
}

#[test]
fn term_view_hides_ghost_under_a_resting_piece() {
    let mut s = session();
    let mut piece = build_piece(PieceKind::I, ColorGroup::Blue);
    piece.translate(0, 19);
    s.set_current_piece(piece);

    let text = GameView::default().render(&s, Viewport::new(22, 22)).text();
    assert!(!text.contains('░'));
    assert_eq!(text.lines().nth(20).unwrap().matches('█').count(), 8);
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut s = session();
    s.add_points(3);
    s.level_up();

    let text = GameView::default().render(&s, Viewport::new(60, 22)).text();
    for label in ["SCORE", "LEVEL", "SPEED", "LINES", "NEXT"] {
        assert!(text.contains(label), "missing {label}");
    }
    assert!(text.contains("300"));

    let narrow = GameView::default().render(&s, Viewport::new(22, 22)).text();
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_overlays_blinking_rows() {
    let mut s = session();
    let mut rows = empty_rows(19);
    rows.push("RRRRRRRRRR".to_string());
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    *s.board_mut() = Board::from_rows(&rows).unwrap();
    s.animation_tick();

    let fb = GameView::default()
        .with_ghost(false)
        .render(&s, Viewport::new(22, 22));
    let glyph = fb.get(1, 20).unwrap();
    assert_eq!(glyph.ch, '▓');
    assert_eq!(glyph.ink.fg, group_rgb(ColorGroup::Orange));
}

#[test]
fn term_view_shows_game_over() {
    let mut s = session();
    while !s.is_game_over() {
        s.hard_drop();
    }
    let text = GameView::default().render(&s, Viewport::new(22, 22)).text();
    assert!(text.contains("GAME OVER"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let s = session();
    let fb = GameView::default().render(&s, Viewport::new(22, 30));
    // start_y = (30 - 22) / 2 = 4
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let top = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&s, Viewport::new(22, 30));
    assert_eq!(top.get(0, 0).unwrap().ch, '┌');
}
