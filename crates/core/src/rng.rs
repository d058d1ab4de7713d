//! RNG module - shape selection
//!
//! The catalog choice is the only random decision in the game. It runs on a
//! seeded LCG so a seed fully determines the spawn order, and the generator
//! can additionally be scripted with an exact sequence for tests.

use std::collections::VecDeque;

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
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Produces the kind of each spawned shape.
///
/// Draws uniformly from the 3-template catalog. A scripted prefix, when
/// present, is drained first; tests use it to force an exact spawn order
/// without touching the rng.
#[derive(Debug, Clone)]
pub struct ShapeGenerator {
    script: VecDeque<PieceKind>,
    rng: SimpleRng,
}

impl ShapeGenerator {
    /// Create a generator with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            script: VecDeque::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Create a generator that yields `kinds` first, then falls back to the rng
    pub fn scripted(seed: u32, kinds: impl IntoIterator<Item = PieceKind>) -> Self {
        Self {
            script: kinds.into_iter().collect(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw the kind of the next shape to spawn
    pub fn draw(&mut self) -> PieceKind {
        if let Some(kind) = self.script.pop_front() {
            return kind;
        }
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state
    }
}

impl Default for ShapeGenerator {
    fn default() -> Self {
        Self::new(1)
    }
}
