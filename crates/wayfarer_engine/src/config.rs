//! Configuration for a game session's computation core.

use std::sync::Arc;

use crate::random::{DEFAULT_SEED, SeededRandomNumberGenerator};
use crate::resolver::{DEFAULT_MAX_DEPTH, PropertyResolver};

/// Configuration for the engine core.
///
/// Controls the random seed and the nesting limit for computed properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Seed for the session's shared random number generator.
    pub seed: u64,

    /// Maximum number of computed properties nested inside one another.
    pub max_computation_depth: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            max_computation_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl EngineConfig {
    /// Creates a configuration with an explicit seed, for replays and tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Sets the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the computed property nesting limit.
    #[must_use]
    pub fn with_max_computation_depth(mut self, depth: usize) -> Self {
        self.max_computation_depth = depth;
        self
    }

    /// Builds the shared generator for the session.
    ///
    /// Build it once and hand clones of the `Arc` to every consumer; a second
    /// generator would restart the sequence.
    #[must_use]
    pub fn rng(&self) -> Arc<SeededRandomNumberGenerator> {
        Arc::new(SeededRandomNumberGenerator::new(self.seed))
    }

    /// Builds an empty resolver honoring the nesting limit.
    #[must_use]
    pub fn resolver(&self) -> PropertyResolver {
        PropertyResolver::new().with_max_depth(self.max_computation_depth)
    }
}
