use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{build_piece, Board, Session, SessionConfig};
use blockfall::types::{ColorGroup, Direction, PieceKind};

fn bench_advance(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default()).unwrap();
    let mut now = 0u64;

    c.bench_function("session_advance_16ms", |b| {
        b.iter(|| {
            now += 16;
            if session.is_game_over() {
                session = Session::new(SessionConfig::default()).unwrap();
                now = 0;
            }
            black_box(session.advance(black_box(now)));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            for x in (0..10).step_by(2) {
                let mut piece = build_piece(PieceKind::O, ColorGroup::Red);
                piece.translate(x, 16);
                board.add_shape(&piece);
                piece.translate(0, 2);
                board.add_shape(&piece);
            }
            let rows = board.full_rows();
            board.delete_full_rows(black_box(&rows));
            board
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut session = Session::new(SessionConfig::default()).unwrap();

    c.bench_function("generate_piece", |b| {
        b.iter(|| black_box(session.generate_piece()))
    });
}

fn bench_can_move(c: &mut Criterion) {
    let board = Board::new(10, 20);
    let mut piece = build_piece(PieceKind::T, ColorGroup::Green);
    piece.translate(4, 10);

    c.bench_function("can_move", |b| {
        b.iter(|| board.can_move(black_box(&piece), Direction::Right))
    });
}

fn bench_attempt_kick(c: &mut Criterion) {
    let board = Board::new(10, 20);
    let mut piece = build_piece(PieceKind::I, ColorGroup::Blue);
    piece.translate(3, 8);

    c.bench_function("attempt_kick", |b| {
        b.iter(|| board.attempt_kick(black_box(&mut piece), true))
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let board = Board::from_rows(&[
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "..........",
        "....G.....",
        "...GGG....",
        "..GGGGG...",
        ".GGGGGGG..",
        "GGGGGGGGG.",
    ])
    .unwrap();
    let piece = build_piece(PieceKind::L, ColorGroup::Red);

    c.bench_function("landing", |b| b.iter(|| board.landing(black_box(&piece))));
}

criterion_group!(
    benches,
    bench_advance,
    bench_line_clear,
    bench_piece_spawn,
    bench_can_move,
    bench_attempt_kick,
    bench_hard_drop
);
criterion_main!(benches);
