//! Configuration for a ritual session.

use std::time::Duration;

/// Configuration for a ritual session.
///
/// Delay defaults follow the pacing of the ceremony: the cylinder shakes,
/// the stick lingers, the blocks tumble.
#[derive(Debug, Clone)]
pub struct RitualConfig {
    /// RNG seed for reproducible draws and throws.
    pub seed: u64,
    /// Size of the curated corpus prefix drawn from when no backend is
    /// configured.
    pub curated_prefix: usize,
    /// How long the cylinder shakes before the stick emerges.
    pub shake_delay: Duration,
    /// Pause between the stick emerging and the slip being read.
    pub reveal_delay: Duration,
    /// How long the blocks tumble before the outcome shows.
    pub throw_delay: Duration,
}

impl Default for RitualConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            curated_prefix: 10,
            shake_delay: Duration::from_millis(2500),
            reveal_delay: Duration::from_millis(1500),
            throw_delay: Duration::from_millis(1200),
        }
    }
}

impl RitualConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the curated prefix size (at least 1).
    pub fn with_curated_prefix(mut self, prefix: usize) -> Self {
        self.curated_prefix = prefix.max(1);
        self
    }

    /// Remove all stage delays. For non-interactive runs and tests.
    pub fn without_delays(mut self) -> Self {
        self.shake_delay = Duration::ZERO;
        self.reveal_delay = Duration::ZERO;
        self.throw_delay = Duration::ZERO;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RitualConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.curated_prefix, 10);
        assert_eq!(config.shake_delay, Duration::from_millis(2500));
        assert_eq!(config.reveal_delay, Duration::from_millis(1500));
        assert_eq!(config.throw_delay, Duration::from_millis(1200));
    }

    #[test]
    fn builder_methods() {
        let config = RitualConfig::default().with_seed(7).with_curated_prefix(3);
        assert_eq!(config.seed, 7);
        assert_eq!(config.curated_prefix, 3);
    }

    #[test]
    fn curated_prefix_floors_at_one() {
        let config = RitualConfig::default().with_curated_prefix(0);
        assert_eq!(config.curated_prefix, 1);
    }

    #[test]
    fn without_delays_zeroes_all_three() {
        let config = RitualConfig::default().without_delays();
        assert_eq!(config.shake_delay, Duration::ZERO);
        assert_eq!(config.reveal_delay, Duration::ZERO);
        assert_eq!(config.throw_delay, Duration::ZERO);
    }
}
