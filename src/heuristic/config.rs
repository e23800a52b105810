//! Baseline heuristic configuration.

/// Configuration for the random and greedy baseline tours.
///
/// # Examples
///
/// ```
/// use u_tsp::heuristic::HeuristicConfig;
///
/// let config = HeuristicConfig::default()
///     .with_max_attempts(5_000)
///     .with_seed(7)
///     .with_start_city(2);
/// assert_eq!(config.max_attempts, 5_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    /// Cap on random permutations drawn before declaring the instance
    /// infeasible.
    pub max_attempts: usize,

    /// Matrix position the greedy tour starts from.
    pub start_city: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100_000,
            start_city: 0,
            seed: None,
        }
    }
}

impl HeuristicConfig {
    pub fn with_max_attempts(mut self, n: usize) -> Self {
        self.max_attempts = n;
        self
    }

    pub fn with_start_city(mut self, start: usize) -> Self {
        self.start_city = start;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts == 0 {
            return Err("max_attempts must be positive".into());
        }
        Ok(())
    }
}
