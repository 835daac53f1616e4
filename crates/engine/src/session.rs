//! Headless game loop driving the grid through its transactional API
//!
//! Each step mirrors what an interactive loop does with a falling piece:
//! the piece is shown at the top as a tentative placement, retracted with
//! `undo()`, placed at its final resting spot, full rows are cleared and the
//! step is sealed with `commit()`.

use tracing::debug;

use crate::brain::{Brain, DefaultBrain};
use crate::core::{Grid, ShapeLibrary};
use crate::picker::PiecePicker;
use crate::types::{PieceKind, PlaceResult, BOARD_HEIGHT, BOARD_WIDTH, TOP_SPACE};

/// Session parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Playfield columns
    pub width: usize,
    /// Playfield rows a piece may come to rest in
    pub height: usize,
    /// Extra rows above the playfield for spawning
    pub top_space: usize,
    pub seed: u32,
    /// Percentage of pieces chosen adversarially
    pub adversary: u8,
    /// Stop after this many pieces even if the game is not over
    pub max_pieces: Option<u64>,
}

impl SessionConfig {
    /// Total grid rows, playfield plus spawn space; `None` if that overflows
    pub fn grid_height(&self) -> Option<usize> {
        self.height.checked_add(self.top_space)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            top_space: TOP_SPACE,
            seed: 1,
            adversary: 0,
            max_pieces: None,
        }
    }
}

/// What happened during one [`Session::step`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Placed {
        kind: PieceKind,
        x: i32,
        y: i32,
        rows_cleared: usize,
    },
    GameOver,
}

/// Totals at the end of [`Session::run`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub pieces_placed: u64,
    pub rows_cleared: u64,
    pub max_height: usize,
    pub game_over: bool,
}

/// A brain playing on one grid until it runs out of room
#[derive(Debug)]
pub struct Session<B: Brain = DefaultBrain> {
    config: SessionConfig,
    library: ShapeLibrary,
    grid: Grid,
    brain: B,
    picker: PiecePicker,
    pieces_placed: u64,
    rows_cleared: u64,
    game_over: bool,
}

impl Session<DefaultBrain> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_brain(config, DefaultBrain::default())
    }
}

impl<B: Brain> Session<B> {
    /// # Panics
    ///
    /// Panics if `width` or `height + top_space` is zero, or if
    /// `height + top_space` overflows.
    pub fn with_brain(config: SessionConfig, brain: B) -> Self {
        let Some(grid_height) = config.grid_height() else {
            panic!(
                "grid height overflows: {} rows plus {} spawn rows",
                config.height, config.top_space
            );
        };
        let grid = Grid::new(config.width, grid_height);
        let picker = PiecePicker::new(config.seed, config.adversary);
        Self {
            config,
            library: ShapeLibrary::standard(),
            grid,
            brain,
            picker,
            pieces_placed: 0,
            rows_cleared: 0,
            game_over: false,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn pieces_placed(&self) -> u64 {
        self.pieces_placed
    }

    pub fn rows_cleared(&self) -> u64 {
        self.rows_cleared
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Kind of the next piece, if the picker is fair and the game is still on
    pub fn next_piece(&self) -> Option<PieceKind> {
        if self.game_over {
            return None;
        }
        self.picker.preview()
    }

    /// Play one piece
    pub fn step(&mut self) -> StepOutcome {
        if self.game_over {
            return StepOutcome::GameOver;
        }

        let limit = self.config.height;
        let kind = self
            .picker
            .pick(&mut self.grid, &self.library, &mut self.brain, limit);
        let piece = self.library.piece(kind);

        // Tentative spawn at the top centre; if that is blocked the game is over
        let spawn_x = (self.grid.width().saturating_sub(piece.width()) / 2) as i32;
        let spawn_y = self.grid.height().saturating_sub(piece.height()) as i32;
        let spawn = self.grid.place(&piece, spawn_x, spawn_y);
        self.grid.undo();
        if !spawn.is_success() {
            return self.finish(kind, "spawn blocked");
        }

        let Some(target) = self.brain.best_move(&mut self.grid, piece, limit) else {
            return self.finish(kind, "no placement below the limit");
        };

        let result = self.grid.place(&target.piece, target.x, target.y);
        if !result.is_success() {
            // The brain only proposes resting placements inside the limit
            self.grid.undo();
            return self.finish(kind, "placement rejected");
        }

        let rows_cleared = if result == PlaceResult::RowFilled {
            self.grid.clear_rows()
        } else {
            0
        };
        self.grid.commit();

        self.pieces_placed += 1;
        self.rows_cleared += rows_cleared as u64;

        StepOutcome::Placed {
            kind,
            x: target.x,
            y: target.y,
            rows_cleared,
        }
    }

    /// Step until game over or the configured piece limit
    pub fn run(&mut self) -> SessionSummary {
        loop {
            if let Some(max) = self.config.max_pieces {
                if self.pieces_placed >= max {
                    break;
                }
            }
            if self.step() == StepOutcome::GameOver {
                break;
            }
        }
        self.summary()
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            pieces_placed: self.pieces_placed,
            rows_cleared: self.rows_cleared,
            max_height: self.grid.max_height(),
            game_over: self.game_over,
        }
    }

    fn finish(&mut self, kind: PieceKind, reason: &'static str) -> StepOutcome {
        self.game_over = true;
        debug!(
            kind = %kind,
            reason,
            pieces = self.pieces_placed,
            rows = self.rows_cleared,
            "game over"
        );
        StepOutcome::GameOver
    }
}
