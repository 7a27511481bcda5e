//! Seeded random source shared by every generation phase

use rand::{Rng, SeedableRng, rngs::StdRng};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0100_0000_01b3;

/// Fold a seed string into a 64-bit key (FNV-1a)
pub fn hash_seed(seed: &str) -> u64 {
    seed.bytes().fold(FNV_OFFSET_BASIS, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Deterministic stream of draws keyed by a seed string
///
/// Draw order alone determines the outcome, so one instance must be threaded
/// through all phases of a generation.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a stream for the given seed
    pub fn new(seed: &str) -> Self {
        Self {
            rng: StdRng::seed_from_u64(hash_seed(seed)),
        }
    }

    /// Uniform draw in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    /// Uniform integer in `[0, bound)`; always 0 when `bound` is 0
    pub fn below(&mut self, bound: usize) -> usize {
        let value = (self.next_f64() * bound as f64) as usize;
        value.min(bound.saturating_sub(1))
    }

    /// True with probability `percent`/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.below(100) < percent as usize
    }

    /// Fisher-Yates shuffle driven by this stream
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    /// Remove and return a uniformly chosen element
    pub fn take<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let index = self.below(items.len());
        Some(items.remove(index))
    }
}
