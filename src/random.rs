//! Random component source.

use rand::Rng;

/// Draws uniform integers from an inclusive range starting at zero.
pub trait RandomSource: Send + Sync {
    /// A value in `0..=max`.
    fn next_in(&self, max: u64) -> u64;
}

/// Draws from the calling thread's `rand::thread_rng()`.
///
/// Each thread has its own generator, so concurrent callers never share state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_in(&self, max: u64) -> u64 {
        rand::thread_rng().gen_range(0..=max)
    }
}

/// Always returns the same value, clamped to the requested range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRandom(pub u64);

impl RandomSource for FixedRandom {
    fn next_in(&self, max: u64) -> u64 {
        self.0.min(max)
    }
}
