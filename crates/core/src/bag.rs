//! Bag randomizer - 7-bag piece generation
//!
//! Every bag holds one of each piece kind, shuffled. Draws deplete the bag
//! and a fresh permutation is generated exactly when it runs out, so any 7
//! consecutive draws aligned to a refill contain each kind exactly once.

use arrayvec::ArrayVec;

use slowtris_types::{PieceKind, ALL_KINDS};

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Depleting bag of the 7 piece kinds.
#[derive(Debug, Clone)]
pub struct PieceBag {
    /// Kinds not yet dealt in the current cycle; dealt from the back.
    bag: ArrayVec<PieceKind, 7>,
    rng: SimpleRng,
}

impl PieceBag {
    /// Create an empty bag; the first `draw` triggers the first shuffle.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        }
    }

    fn refill(&mut self) {
        self.bag.clear();
        self.bag.extend(ALL_KINDS);
        self.rng.shuffle(&mut self.bag);
    }

    /// Discard the remainder of the current cycle; the next `draw` starts
    /// a fresh shuffle.
    pub fn reset(&mut self) {
        self.bag.clear();
    }

    /// Draw the next piece, refilling with a fresh permutation when empty.
    pub fn draw(&mut self) -> PieceKind {
        if self.bag.is_empty() {
            self.refill();
        }
        // Non-empty after refill, but stay total anyway.
        self.bag.pop().unwrap_or(PieceKind::I)
    }

    /// Kinds left in the current cycle (next draw comes from the back).
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag
    }

    /// Current RNG state, usable to replay the same sequence.
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
