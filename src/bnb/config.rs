//! Branch-and-bound configuration.

use std::time::Duration;

use crate::heuristic::HeuristicConfig;

/// Baseline used to seed the best solution so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedStrategy {
    /// Greedy nearest-by-row tour from the start city.
    #[default]
    Greedy,

    /// Random-valid tour; fails if none is found within the attempt cap.
    Random,
}

/// Configuration for the branch-and-bound search.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::bnb::{BnbConfig, SeedStrategy};
///
/// let config = BnbConfig::default()
///     .with_time_allowance(Duration::from_secs(5))
///     .with_start_city(0)
///     .with_seed_strategy(SeedStrategy::Greedy);
/// assert_eq!(config.time_allowance, Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct BnbConfig {
    /// Wall-clock budget, checked once per frontier pop.
    pub time_allowance: Duration,

    /// Matrix position the tour starts from (and the greedy seed too).
    pub start_city: usize,

    /// How the initial best solution is produced.
    pub seed_strategy: SeedStrategy,

    /// Settings for the seeding heuristic.
    pub heuristic: HeuristicConfig,
}

impl Default for BnbConfig {
    fn default() -> Self {
        Self {
            time_allowance: Duration::from_secs(60),
            start_city: 0,
            seed_strategy: SeedStrategy::default(),
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl BnbConfig {
    pub fn with_time_allowance(mut self, allowance: Duration) -> Self {
        self.time_allowance = allowance;
        self
    }

    /// Sets the budget in seconds. Negative or NaN values mean zero.
    pub fn with_time_allowance_secs(mut self, secs: f64) -> Self {
        self.time_allowance = if secs > 0.0 {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        };
        self
    }

    pub fn with_start_city(mut self, start: usize) -> Self {
        self.start_city = start;
        self
    }

    pub fn with_seed_strategy(mut self, strategy: SeedStrategy) -> Self {
        self.seed_strategy = strategy;
        self
    }

    pub fn with_heuristic(mut self, heuristic: HeuristicConfig) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.heuristic.validate()
    }
}
