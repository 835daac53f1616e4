//! Piece selection: fair 7-bag draws, or an adversary handing out the worst piece

use tracing::debug;

use crate::brain::Brain;
use crate::core::{Grid, ShapeLibrary};
use crate::rng::{PieceQueue, SimpleRng};
use crate::types::PieceKind;

/// Chooses the next piece kind for a session
///
/// Each pick rolls `0..100`; a roll below `adversary` hands out the kind
/// whose best placement scores worst on the current grid, anything else draws
/// from the 7-bag. So `adversary` is the percentage of adversarial picks: 0
/// never, 100 always.
#[derive(Debug, Clone)]
pub struct PiecePicker {
    queue: PieceQueue,
    rng: SimpleRng,
    adversary: u8,
}

impl PiecePicker {
    /// `adversary` is a percentage and is capped at 100
    pub fn new(seed: u32, adversary: u8) -> Self {
        Self {
            queue: PieceQueue::new(seed),
            // Separate stream so the bag order does not depend on the adversary
            rng: SimpleRng::new(seed.wrapping_add(0x9e37_79b9)),
            adversary: adversary.min(100),
        }
    }

    pub fn adversary(&self) -> u8 {
        self.adversary
    }

    /// The kind the next `pick` will return, when that is known in advance
    ///
    /// Only a fair picker can tell; with any adversary the answer depends on
    /// the roll and the grid, so this is `None`.
    pub fn preview(&self) -> Option<PieceKind> {
        (self.adversary == 0).then(|| self.queue.peek())
    }

    /// Next piece kind; `grid` must be committed and is left unchanged
    pub fn pick<B: Brain>(
        &mut self,
        grid: &mut Grid,
        library: &ShapeLibrary,
        brain: &mut B,
        limit_height: usize,
    ) -> PieceKind {
        if self.adversary == 0 {
            return self.queue.draw();
        }

        let roll = self.rng.next_range(100);
        if roll >= u32::from(self.adversary) {
            return self.queue.draw();
        }

        let kind = worst_piece(grid, library, brain, limit_height);
        debug!(kind = %kind, roll, "adversary picked piece");
        kind
    }
}

/// The kind whose best move scores highest; a kind with no legal move at all wins outright
pub fn worst_piece<B: Brain>(
    grid: &mut Grid,
    library: &ShapeLibrary,
    brain: &mut B,
    limit_height: usize,
) -> PieceKind {
    let mut worst = PieceKind::ALL[0];
    let mut worst_score = f64::NEG_INFINITY;

    for piece in library.pieces() {
        match brain.best_move(grid, piece, limit_height) {
            None => return piece.kind(),
            Some(m) if m.score > worst_score => {
                worst = piece.kind();
                worst_score = m.score;
            }
            Some(_) => {}
        }
    }
    worst
}
