//! RNG module - random spawn columns and jewel colors
//!
//! The engine draws from any [`JewelRng`]; [`SimpleRng`] is the seedable
//! default so identical seeds replay identical games.

use crate::types::{Jewel, BOARD_COLUMNS};

/// Source of spawn randomness used by [`GameState`](crate::GameState).
pub trait JewelRng {
    /// Uniform value in [0, max)
    fn next_range(&mut self, max: u32) -> u32;

    /// Spawn column, 0-based, uniform over the board width
    fn next_column(&mut self) -> i8 {
        self.next_range(BOARD_COLUMNS as u32) as i8
    }

    /// Uniform jewel color
    fn next_jewel(&mut self) -> Jewel {
        Jewel::ALL[self.next_range(Jewel::COUNT) as usize]
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // 0 would be a fixed point of the multiply
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl JewelRng for SimpleRng {
    fn next_range(&mut self, max: u32) -> u32 {
        // High bits: the low bits of a power-of-two LCG have short periods.
        (self.next_u32() >> 16) % max.max(1)
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
