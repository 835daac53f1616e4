//! Clients of the grid core: move search, piece supply and a headless game loop
//!
//! Nothing in here touches grid internals; everything goes through the
//! transactional `place` / `clear_rows` / `undo` / `commit` API.
//!
//! - [`brain`]: the [`Brain`] trait and a height-and-holes heuristic
//! - [`rng`]: deterministic LCG and 7-bag queue
//! - [`picker`]: fair or adversarial choice of the next piece
//! - [`session`]: a brain playing a full game on its own
//!
//! # Example
//!
//! ```
//! use tetris_grid_engine::{Session, SessionConfig};
//!
//! let config = SessionConfig {
//!     max_pieces: Some(20),
//!     ..SessionConfig::default()
//! };
//! let summary = Session::new(config).run();
//! assert_eq!(summary.pieces_placed, 20);
//! ```

pub mod brain;
pub mod picker;
pub mod rng;
pub mod session;

pub use tetris_grid_core as core;
pub use tetris_grid_types as types;

pub use brain::{count_holes, Brain, DefaultBrain, Move, Weights};
pub use picker::{worst_piece, PiecePicker};
pub use rng::{PieceQueue, SimpleRng};
pub use session::{Session, SessionConfig, SessionSummary, StepOutcome};
