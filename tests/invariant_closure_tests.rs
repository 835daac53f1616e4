//! Randomized operation sequences - aggregates stay consistent and undo is exact

use tetris_grid::core::{Grid, ShapeLibrary};
use tetris_grid::engine::SimpleRng;
use tetris_grid::types::{PieceKind, Rotation};

fn aggregates(grid: &Grid) -> (String, Vec<usize>, Vec<usize>, usize) {
    (
        grid.to_string(),
        grid.column_heights().to_vec(),
        grid.row_fill_counts().to_vec(),
        grid.max_height(),
    )
}

/// Run `steps` random transactions on a `width` x `height` grid
fn run_random_sequence(seed: u32, width: usize, height: usize, steps: usize) {
    let library = ShapeLibrary::standard();
    let mut rng = SimpleRng::new(seed);
    let mut grid = Grid::new(width, height);

    for step in 0..steps {
        let before = aggregates(&grid);

        let kind = PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize];
        let rotation = Rotation::ALL[rng.next_range(4) as usize];
        let piece = library.piece_at(kind, rotation);

        // Mostly resting placements, sometimes anywhere (including off the grid)
        let (x, y) = if rng.next_range(4) == 0 {
            (
                rng.next_range(width as u32 + 4) as i32 - 2,
                rng.next_range(height as u32 + 4) as i32 - 2,
            )
        } else {
            let x = rng.next_range(width as u32) as i32;
            (x, grid.drop_height(&piece, x) as i32)
        };

        let result = grid.place(&piece, x, y);
        if !result.is_success() {
            grid.undo();
            assert_eq!(aggregates(&grid), before, "step {step}: failed place not undone");
            continue;
        }

        if rng.next_range(2) == 0 {
            grid.clear_rows();
        }
        assert_eq!(grid.verify(), Ok(()), "step {step}");

        if rng.next_range(5) == 0 {
            grid.undo();
            assert_eq!(aggregates(&grid), before, "step {step}: undo not exact");
        } else {
            grid.commit();
        }
        assert!(grid.is_committed());

        // Keep the grid from silting up so placements keep succeeding
        if grid.max_height() + 4 > height {
            grid = Grid::new(width, height);
        }
    }
}

#[test]
fn test_random_sequences_standard_grid() {
    for seed in [1, 7, 42, 1234, 99_999] {
        run_random_sequence(seed, 10, 24, 500);
    }
}

#[test]
fn test_random_sequences_narrow_grid() {
    for seed in [3, 11, 2024] {
        run_random_sequence(seed, 4, 12, 400);
    }
}

#[test]
fn test_lone_clear_rows_is_undoable() {
    let mut grid = Grid::from_rows(&[
        "....", //
        "#.#.", //
        "####", //
        ".###", //
        "####",
    ]);
    let before = aggregates(&grid);

    assert_eq!(grid.clear_rows(), 2);
    assert!(!grid.is_committed());
    assert_eq!(grid.verify(), Ok(()));
    assert_eq!(grid.max_height(), 2);

    grid.undo();
    assert_eq!(aggregates(&grid), before);
}

#[test]
fn test_commit_then_undo_keeps_committed_state() {
    let library = ShapeLibrary::standard();
    let mut grid = Grid::new(6, 8);

    assert!(grid
        .place(&library.piece(PieceKind::Square), 0, 0)
        .is_success());
    grid.commit();
    let committed = aggregates(&grid);

    grid.undo();
    assert_eq!(aggregates(&grid), committed);
    assert_eq!(grid.column_heights(), &[2, 2, 0, 0, 0, 0]);
}
