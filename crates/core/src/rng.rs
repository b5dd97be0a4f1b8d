//! RNG module - deterministic randomness for piece generation
//!
//! Provides a simple LCG for reproducible games and the two piece-kind
//! randomizers a session can use:
//!
//! - **Uniform**: every draw picks one of the seven kinds independently.
//! - **Bag**: each shuffled bag of seven holds every kind exactly once.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        debug_assert!(max > 0);
        // High bits of an LCG are far better distributed than the low ones.
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// How the next piece kind is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PieceRule {
    /// Independent uniform draws (no memory of prior pieces).
    #[default]
    Uniform,
    /// 7-bag: a shuffled permutation of all seven kinds, refilled when empty.
    Bag,
}

/// Stream of piece kinds under a [`PieceRule`].
#[derive(Debug, Clone)]
pub struct KindSource {
    rule: PieceRule,
    bag: [PieceKind; 7],
    bag_index: usize,
}

impl KindSource {
    pub fn new(rule: PieceRule) -> Self {
        Self {
            rule,
            bag: PieceKind::ALL,
            // Start exhausted so the first draw shuffles.
            bag_index: PieceKind::ALL.len(),
        }
    }

    /// Draw the next kind
    pub fn draw(&mut self, rng: &mut SimpleRng) -> PieceKind {
        match self.rule {
            PieceRule::Uniform => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            PieceRule::Bag => {
                if self.bag_index >= self.bag.len() {
                    self.bag = PieceKind::ALL;
                    rng.shuffle(&mut self.bag);
                    self.bag_index = 0;
                }
                let kind = self.bag[self.bag_index];
                self.bag_index += 1;
                kind
            }
        }
    }
}
