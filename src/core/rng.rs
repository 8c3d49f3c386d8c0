//! Seeded piece spawning.
//!
//! Shape and color are drawn independently on every spawn: 70% of shape
//! draws come uniformly from the seven standard shapes, the rest uniformly
//! from the full fifteen-shape catalog (standard shapes included).
//!
//! A small LCG makes the whole piece sequence reproducible from one seed.

use crate::core::catalog::ShapeKind;
use crate::core::piece::Piece;
use crate::types::{BlockColor, STANDARD_SPAWN_PERCENT};

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.state
    }

    /// Draw from `0..bound`.
    pub fn below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        self.step() % bound
    }
}

/// Weighted shape-and-color piece generator.
#[derive(Debug, Clone)]
pub struct PieceSpawner {
    rng: Lcg,
}

impl PieceSpawner {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: Lcg::new(seed),
        }
    }

    /// Draw the next piece at its spawn position.
    pub fn next_piece(&mut self) -> Piece {
        let pool: &[ShapeKind] = if self.rng.below(100) < STANDARD_SPAWN_PERCENT {
            &ShapeKind::STANDARD
        } else {
            &ShapeKind::ALL
        };
        let kind = pool[self.rng.below(pool.len() as u32) as usize];
        let color = BlockColor::ALL[self.rng.below(BlockColor::ALL.len() as u32) as usize];
        Piece::spawn(kind, color)
    }
}

impl Default for PieceSpawner {
    fn default() -> Self {
        Self::new(1)
    }
}
