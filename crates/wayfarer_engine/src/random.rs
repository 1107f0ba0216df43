//! Deterministic, shareable pseudo-randomness.
//!
//! A 64-bit linear congruential generator whose whole state transition is a
//! single atomic update, so one instance can be shared across tasks behind an
//! `Arc`. Calls that are issued in a fixed order always see the same sequence
//! as a single-threaded caller with the same seed; the order of unordered
//! concurrent callers is not defined.
//!
//! Higher-level draws come from `rand`: the generator implements
//! [`RngCore`], both by value and by shared reference.

use std::sync::atomic::{AtomicU64, Ordering};

use rand::{Rng, RngCore};
use tracing::debug;

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 71;

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const INCREMENT: u64 = 1;

const fn step(state: u64) -> u64 {
    state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT)
}

/// Seeded LCG, safe to call concurrently through `&self`.
#[derive(Debug)]
pub struct SeededRandomNumberGenerator {
    seed: u64,
    state: AtomicU64,
}

impl SeededRandomNumberGenerator {
    /// Creates a generator from an explicit seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        debug!(seed, "seeded random number generator");
        Self {
            seed,
            state: AtomicU64::new(seed),
        }
    }

    /// Advances the state and returns the new state.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&self) -> u64 {
        let previous = self
            .state
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| Some(step(s)));
        // The closure never declines, so both arms hold the prior state.
        match previous {
            Ok(prior) | Err(prior) => step(prior),
        }
    }

    /// The seed this generator was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The current internal state.
    #[must_use]
    pub fn state(&self) -> u64 {
        self.state.load(Ordering::Acquire)
    }

    /// Rolls a die with `sides` faces, returning a value in `1..=sides`.
    ///
    /// A zero-sided die always rolls 0 without consuming a draw.
    pub fn roll(&self, sides: u32) -> u32 {
        if sides == 0 {
            return 0;
        }
        let mut rng = self;
        rng.gen_range(1..=sides)
    }

    /// Returns true with the given percentage chance.
    ///
    /// Percentages of 100 or more always succeed; 0 always fails. Both
    /// still consume one draw so sequences stay aligned.
    pub fn chance(&self, percent: u32) -> bool {
        let mut rng = self;
        rng.gen_range(0..100) < percent
    }

    /// Returns a uniform value in `[low, high)`.
    ///
    /// Returns `low` without consuming a draw when the range is empty.
    pub fn range(&self, low: i64, high: i64) -> i64 {
        if low >= high {
            return low;
        }
        let mut rng = self;
        rng.gen_range(low..high)
    }
}

impl Default for SeededRandomNumberGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Cloning snapshots the current state; the copies then advance independently.
impl Clone for SeededRandomNumberGenerator {
    fn clone(&self) -> Self {
        Self {
            seed: self.seed,
            state: AtomicU64::new(self.state()),
        }
    }
}

impl RngCore for &SeededRandomNumberGenerator {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        rand_core::impls::fill_bytes_via_next(self, dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl RngCore for SeededRandomNumberGenerator {
    fn next_u32(&mut self) -> u32 {
        (&*self).next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        SeededRandomNumberGenerator::next(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        (&*self).fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        (&*self).try_fill_bytes(dest)
    }
}
