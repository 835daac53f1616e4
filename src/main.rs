//! Headless grid simulator (default binary).
//!
//! Lets the default brain play a game on its own, optionally against an
//! adversarial piece picker, and reports how it went.

use anyhow::{ensure, Result};
use clap::Parser;
use tracing::info;

use tetris_grid::engine::{Session, SessionConfig};
use tetris_grid::logging;
use tetris_grid::types::{BOARD_HEIGHT, BOARD_WIDTH, TOP_SPACE};

/// Let a search brain play falling-block pieces on a grid until it runs out of room.
#[derive(Debug, Parser)]
#[command(name = "grid-sim", version, about)]
struct Args {
    /// Playfield width in columns
    #[arg(long, default_value_t = BOARD_WIDTH, value_name = "COLS")]
    width: usize,

    /// Playfield height in rows (spawn rows come on top of this)
    #[arg(long, default_value_t = BOARD_HEIGHT, value_name = "ROWS")]
    height: usize,

    /// Rows above the playfield reserved for spawning
    #[arg(long, default_value_t = TOP_SPACE, value_name = "ROWS")]
    top_space: usize,

    /// Seed for the piece sequence
    #[arg(short, long, default_value_t = 1)]
    seed: u32,

    /// Percentage of pieces picked to be as bad as possible (0-100)
    #[arg(short, long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    adversary: u8,

    /// Stop after this many pieces
    #[arg(short, long, value_name = "N")]
    pieces: Option<u64>,

    /// Print the final grid
    #[arg(long)]
    print: bool,

    /// Log debug events (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig> {
        ensure!(self.width > 0, "--width must be positive");
        ensure!(self.height > 0, "--height must be positive");
        let config = SessionConfig {
            width: self.width,
            height: self.height,
            top_space: self.top_space,
            seed: self.seed,
            adversary: self.adversary,
            max_pieces: self.pieces,
        };
        let rows = config.grid_height();
        ensure!(
            rows.and_then(|rows| rows.checked_mul(config.width)).is_some(),
            "--height plus --top-space is too large for a {}-column grid",
            config.width
        );
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    let config = args.session_config()?;
    info!(
        width = config.width,
        height = config.height,
        seed = config.seed,
        adversary = config.adversary,
        "starting session"
    );

    let mut session = Session::new(config);
    let summary = session.run();

    info!(
        pieces = summary.pieces_placed,
        rows = summary.rows_cleared,
        max_height = summary.max_height,
        game_over = summary.game_over,
        "session finished"
    );

    if args.print {
        println!("{}", session.grid());
        if let Some(next) = session.next_piece() {
            println!("next: {next}");
        }
    }
    println!(
        "pieces: {}  rows cleared: {}  max height: {}{}",
        summary.pieces_placed,
        summary.rows_cleared,
        summary.max_height,
        if summary.game_over { "  (game over)" } else { "" }
    );
    Ok(())
}
