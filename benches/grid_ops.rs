use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetris_grid::core::{Grid, ShapeLibrary};
use tetris_grid::engine::{Brain, DefaultBrain, Session, SessionConfig};
use tetris_grid::types::PieceKind;

fn stacked_grid() -> Grid {
    Grid::from_rows(&[
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "....#.....", //
        "##.###..##", //
        "####.#####", //
        "#########.", //
        ".#########", //
        "###.######", //
        "######.###", //
        "#########.",
    ])
}

fn bench_place_undo(c: &mut Criterion) {
    let library = ShapeLibrary::standard();
    let pyramid = library.piece(PieceKind::Pyramid);
    let mut grid = stacked_grid();

    c.bench_function("place_undo", |b| {
        b.iter(|| {
            let result = grid.place(&pyramid, black_box(2), black_box(8));
            grid.undo();
            result
        })
    });
}

fn bench_clear_4_rows(c: &mut Criterion) {
    let library = ShapeLibrary::standard();
    let stick = library.piece(PieceKind::Stick);
    let mut grid = Grid::from_rows(&[
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "..........", //
        "#########.", //
        "#########.", //
        "#########.", //
        "#########.",
    ]);

    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            grid.place(&stick, black_box(9), 0);
            let cleared = grid.clear_rows();
            grid.undo();
            cleared
        })
    });
}

fn bench_best_move(c: &mut Criterion) {
    let library = ShapeLibrary::standard();
    let mut brain = DefaultBrain::default();
    let mut grid = stacked_grid();
    let limit = grid.height() - 4;

    c.bench_function("best_move_pyramid", |b| {
        b.iter(|| brain.best_move(&mut grid, library.piece(PieceKind::Pyramid), limit))
    });
}

fn bench_session_100_pieces(c: &mut Criterion) {
    c.bench_function("session_100_pieces", |b| {
        b.iter(|| {
            let config = SessionConfig {
                seed: black_box(12345),
                max_pieces: Some(100),
                ..SessionConfig::default()
            };
            Session::new(config).run()
        })
    });
}

criterion_group!(
    benches,
    bench_place_undo,
    bench_clear_4_rows,
    bench_best_move,
    bench_session_100_pieces
);
criterion_main!(benches);
