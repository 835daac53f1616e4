//! Tetris grid engine (workspace facade crate).
//!
//! Re-exports the member crates under one `tetris_grid::{core,engine,types}`
//! namespace; the implementation lives in the crates under `crates/`.

pub mod logging;

pub use tetris_grid_core as core;
pub use tetris_grid_engine as engine;
pub use tetris_grid_types as types;
