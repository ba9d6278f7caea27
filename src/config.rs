// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Tunable walker configuration.

use crate::numeric::{DEFAULT_ITERATION_CAP, DEFAULT_MAX_INPUT};

/// Policy knobs shared by every walk, verification and scan.
///
/// The overflow threshold is not configurable; see
/// [`OVERFLOW_THRESHOLD`](crate::numeric::OVERFLOW_THRESHOLD).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkerConfig {
    /// Maximum number of step applications before [`SequenceTooLong`](crate::errors::CollatzError::SequenceTooLong).
    pub iteration_cap: usize,

    /// Inclusive ceiling on normalized input.
    pub max_input: u64,

    /// Whether the input value itself is looked up in the jump table.
    ///
    /// When false, the first possible jump is after one step, so a table
    /// row for `n` is never used to answer `n` directly.
    pub lookup_input: bool,

    /// Whether range scans shard work across the rayon thread pool.
    pub parallel: bool,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            iteration_cap: DEFAULT_ITERATION_CAP,
            max_input: DEFAULT_MAX_INPUT,
            lookup_input: false,
            parallel: true,
        }
    }
}

impl WalkerConfig {
    pub fn builder() -> WalkerConfigBuilder {
        WalkerConfigBuilder::new()
    }
}

/// Builder for [`WalkerConfig`].
///
/// # Example
///
/// ```
/// use collatz_wormhole::config::WalkerConfig;
///
/// let config = WalkerConfig::builder()
///     .iteration_cap(500)
///     .max_input(1 << 20)
///     .parallel(false)
///     .build();
/// assert_eq!(config.iteration_cap, 500);
/// assert!(!config.lookup_input);
/// ```
#[derive(Debug, Default)]
pub struct WalkerConfigBuilder {
    config: WalkerConfig,
}

impl WalkerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iteration_cap(mut self, cap: usize) -> Self {
        self.config.iteration_cap = cap;
        self
    }

    pub fn max_input(mut self, max_input: u64) -> Self {
        self.config.max_input = max_input;
        self
    }

    pub fn lookup_input(mut self, lookup_input: bool) -> Self {
        self.config.lookup_input = lookup_input;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Finish the configuration.
    ///
    /// # Panics
    ///
    /// Panics if the iteration cap or the input ceiling is zero.
    pub fn build(self) -> WalkerConfig {
        assert!(self.config.iteration_cap > 0, "iteration cap must be positive");
        assert!(self.config.max_input > 0, "max input must be positive");
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalkerConfig::default();
        assert_eq!(config.iteration_cap, 10_000);
        assert_eq!(config.max_input, 1 << 50);
        assert!(!config.lookup_input);
        assert!(config.parallel);
    }

    #[test]
    fn test_builder_overrides() {
        let config = WalkerConfig::builder()
            .iteration_cap(3)
            .max_input(99)
            .lookup_input(true)
            .parallel(false)
            .build();
        assert_eq!(
            config,
            WalkerConfig {
                iteration_cap: 3,
                max_input: 99,
                lookup_input: true,
                parallel: false,
            }
        );
    }

    #[test]
    #[should_panic(expected = "iteration cap must be positive")]
    fn test_zero_cap_panics() {
        WalkerConfig::builder().iteration_cap(0).build();
    }
}
