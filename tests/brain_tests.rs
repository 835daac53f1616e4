//! Brain tests - search leaves the grid untouched and scores repeatably

use tetris_grid::core::{Grid, ShapeLibrary};
use tetris_grid::engine::{Brain, DefaultBrain};
use tetris_grid::types::{PieceKind, PlaceResult};

fn snapshot(grid: &Grid) -> (String, Vec<usize>, Vec<usize>, usize) {
    (
        grid.to_string(),
        grid.column_heights().to_vec(),
        grid.row_fill_counts().to_vec(),
        grid.max_height(),
    )
}

fn ragged_grid() -> Grid {
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
        "...#......", //
        "#.##....#.", //
        "####.#####",
    ])
}

#[test]
fn test_place_score_undo_twice_gives_same_score() {
    let library = ShapeLibrary::standard();
    let brain = DefaultBrain::default();
    let mut grid = ragged_grid();
    let pyramid = library.piece(PieceKind::Pyramid);

    let mut scores = Vec::new();
    for _ in 0..2 {
        let y = grid.drop_height(&pyramid, 4) as i32;
        assert!(grid.place(&pyramid, 4, y).is_success());
        scores.push(brain.rate_grid(&grid));
        grid.undo();
    }
    assert_eq!(scores[0], scores[1]);
    assert!(grid.verify().is_ok());
}

#[test]
fn test_clear_score_undo_restores_full_row() {
    let library = ShapeLibrary::standard();
    let brain = DefaultBrain::default();
    let mut grid = ragged_grid();
    let before = snapshot(&grid);
    let stick = library.piece(PieceKind::Stick);

    let mut scores = Vec::new();
    for _ in 0..2 {
        assert_eq!(grid.place(&stick, 4, 0), PlaceResult::RowFilled);
        assert_eq!(grid.clear_rows(), 1);
        scores.push(brain.rate_grid(&grid));
        grid.undo();
        assert_eq!(snapshot(&grid), before);
    }
    assert_eq!(scores[0], scores[1]);
}

#[test]
fn test_best_move_leaves_grid_unchanged() {
    let library = ShapeLibrary::standard();
    let mut brain = DefaultBrain::default();
    let mut grid = ragged_grid();
    let before = snapshot(&grid);
    let limit = grid.height();

    for piece in library.pieces() {
        let found = brain.best_move(&mut grid, piece, limit);
        assert!(found.is_some(), "{} should fit", piece.kind());
        assert_eq!(snapshot(&grid), before);
        assert!(grid.is_committed());
    }
}

#[test]
fn test_best_move_is_a_legal_resting_placement() {
    let library = ShapeLibrary::standard();
    let mut brain = DefaultBrain::default();
    let mut grid = ragged_grid();
    let limit = grid.height();

    for piece in library.pieces() {
        let best = brain
            .best_move(&mut grid, piece, limit)
            .expect("a move exists");
        assert_eq!(best.y as usize, grid.drop_height(&best.piece, best.x));

        let result = grid.place(&best.piece, best.x, best.y);
        assert!(result.is_success());
        if result == PlaceResult::RowFilled {
            grid.clear_rows();
        }
        assert_eq!(brain.rate_grid(&grid), best.score);
        grid.undo();
    }
}

#[test]
fn test_best_move_prefers_the_well() {
    let library = ShapeLibrary::standard();
    let mut brain = DefaultBrain::default();
    let mut grid = ragged_grid();
    let limit = grid.height();

    // Dropping the upright stick into column 4 clears the bottom row
    let best = brain
        .best_move(&mut grid, library.piece(PieceKind::Stick), limit)
        .expect("a move exists");
    assert_eq!((best.x, best.y), (4, 0));
    assert_eq!(best.piece.height(), 4);
}

#[test]
fn test_best_move_respects_limit_height() {
    let library = ShapeLibrary::standard();
    let mut brain = DefaultBrain::default();
    let mut grid = ragged_grid();

    // Only the flat stick fits under a limit of two rows
    let best = brain
        .best_move(&mut grid, library.piece(PieceKind::Stick), 2)
        .expect("flat stick fits");
    assert_eq!(best.piece.height(), 1);
    assert!(best.y as usize + best.piece.height() <= 2);

    assert!(brain
        .best_move(&mut grid, library.piece(PieceKind::Square), 1)
        .is_none());
}
