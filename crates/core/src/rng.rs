//! RNG module - seeded random source for shuffling
//!
//! Provides a small LCG so a given seed always produces the same scramble, and
//! the [`RandomSource`] trait so callers (tests in particular) can inject their
//! own generator into [`Cube::shuffle_with`](crate::Cube::shuffle_with).

/// A source of pseudo-random numbers for shuffling
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of [`next_u32`](Self::next_u32). The low bits of an
    /// LCG with a power-of-two modulus cycle with a very short period (bit 0
    /// simply alternates), which would tie consecutive small draws together.
    fn next_range(&mut self, max: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Uniform coin flip
    fn next_bool(&mut self) -> bool {
        self.next_range(2) == 1
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
