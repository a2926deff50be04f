//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter of a colony run. Parameters are
//! fixed for the whole run; nothing is adapted on the fly.

use super::error::AcoError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for the knapsack Ant Colony Optimizer.
///
/// # Defaults
///
/// ```
/// use knapsack_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 50);
/// assert_eq!(config.max_iterations, 400);
/// assert_eq!(config.elite_count, 5);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_max_iterations(100)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AcoConfig {
    /// Number of ants (constructed solutions) per iteration.
    pub num_ants: usize,

    /// Number of iterations to run.
    pub max_iterations: usize,

    /// Exponent applied to pheromone trails. 0 ignores the trails.
    pub alpha: f64,

    /// Exponent applied to the value/weight desirability. 0 ignores it.
    pub beta: f64,

    /// Fraction of every trail removed per iteration, in `[0, 1)`.
    pub evaporation_rate: f64,

    /// Trail strength of every (item, option) pair before the first iteration.
    pub initial_pheromone: f64,

    /// Stagnation floor. Trails never drop below this after an update.
    pub min_pheromone: f64,

    /// Optional ceiling on trail strength.
    ///
    /// `None` (the default) lets trails grow without bound.
    pub max_pheromone: Option<f64>,

    /// How many of an iteration's best feasible solutions deposit pheromone.
    pub elite_count: usize,

    /// Deposit scale `Q`: each elite adds `Q * value / capacity` to its trails.
    pub deposit_factor: f64,

    /// Probability of packing an item when both option scores are zero.
    pub zero_score_take_probability: f64,

    /// Build the ants of one iteration concurrently.
    ///
    /// Only honored with the `parallel` feature. Each ant then draws from
    /// its own stream seeded off the run's master stream, so results are
    /// still reproducible from `seed` but differ from sequential runs.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed, reported back in the result.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 50,
            max_iterations: 400,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            initial_pheromone: 1.0,
            min_pheromone: 0.001,
            max_pheromone: None,
            elite_count: 5,
            deposit_factor: 1.0,
            zero_score_take_probability: 0.5,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Splits a total construction budget across iterations.
    ///
    /// `max_iterations = evaluations / num_ants`, at least 1.
    pub fn with_evaluation_budget(mut self, evaluations: usize) -> Self {
        self.max_iterations = (evaluations / self.num_ants.max(1)).max(1);
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_evaporation_rate(mut self, rate: f64) -> Self {
        self.evaporation_rate = rate;
        self
    }

    pub fn with_initial_pheromone(mut self, tau0: f64) -> Self {
        self.initial_pheromone = tau0;
        self
    }

    pub fn with_min_pheromone(mut self, floor: f64) -> Self {
        self.min_pheromone = floor;
        self
    }

    pub fn with_max_pheromone(mut self, ceiling: f64) -> Self {
        self.max_pheromone = Some(ceiling);
        self
    }

    /// Sets how many top solutions per iteration deposit pheromone.
    pub fn with_elite_count(mut self, k: usize) -> Self {
        self.elite_count = k;
        self
    }

    pub fn with_deposit_factor(mut self, q: f64) -> Self {
        self.deposit_factor = q;
        self
    }

    /// Sets the fallback take-probability used when both scores vanish.
    pub fn with_zero_score_take_probability(mut self, p: f64) -> Self {
        self.zero_score_take_probability = p;
        self
    }

    /// Enables or disables concurrent ant construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<(), AcoError> {
        if self.num_ants == 0 {
            return Err(AcoError::invalid("num_ants", "must be at least 1"));
        }
        if self.max_iterations == 0 {
            return Err(AcoError::invalid("max_iterations", "must be at least 1"));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::invalid(
                "alpha",
                format!("must be finite and non-negative, got {}", self.alpha),
            ));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::invalid(
                "beta",
                format!("must be finite and non-negative, got {}", self.beta),
            ));
        }
        if !(0.0..1.0).contains(&self.evaporation_rate) {
            return Err(AcoError::invalid(
                "evaporation_rate",
                format!("must be in [0, 1), got {}", self.evaporation_rate),
            ));
        }
        if !self.min_pheromone.is_finite() || self.min_pheromone <= 0.0 {
            return Err(AcoError::invalid(
                "min_pheromone",
                format!("must be positive, got {}", self.min_pheromone),
            ));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(AcoError::invalid(
                "initial_pheromone",
                format!("must be positive, got {}", self.initial_pheromone),
            ));
        }
        if let Some(ceiling) = self.max_pheromone {
            let lower = self.initial_pheromone.max(self.min_pheromone);
            if ceiling.is_nan() || ceiling < lower {
                return Err(AcoError::invalid(
                    "max_pheromone",
                    format!("must be at least {lower}, got {ceiling}"),
                ));
            }
        }
        if self.elite_count == 0 {
            return Err(AcoError::invalid("elite_count", "must be at least 1"));
        }
        if !self.deposit_factor.is_finite() || self.deposit_factor < 0.0 {
            return Err(AcoError::invalid(
                "deposit_factor",
                format!("must be finite and non-negative, got {}", self.deposit_factor),
            ));
        }
        if !(0.0..=1.0).contains(&self.zero_score_take_probability) {
            return Err(AcoError::invalid(
                "zero_score_take_probability",
                format!("must be in [0, 1], got {}", self.zero_score_take_probability),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcoConfig::default();
        assert_eq!(config.num_ants, 50);
        assert_eq!(config.max_iterations, 400);
        assert!((config.alpha - 1.0).abs() < 1e-12);
        assert!((config.beta - 2.0).abs() < 1e-12);
        assert!((config.evaporation_rate - 0.5).abs() < 1e-12);
        assert!((config.min_pheromone - 0.001).abs() < 1e-15);
        assert!(config.max_pheromone.is_none());
        assert_eq!(config.elite_count, 5);
        assert!((config.zero_score_take_probability - 0.5).abs() < 1e-12);
        assert!(!config.parallel);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcoConfig::default().validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = AcoConfig::default()
            .with_num_ants(10)
            .with_max_iterations(20)
            .with_alpha(0.5)
            .with_beta(4.0)
            .with_evaporation_rate(0.1)
            .with_initial_pheromone(0.2)
            .with_min_pheromone(0.01)
            .with_max_pheromone(50.0)
            .with_elite_count(3)
            .with_deposit_factor(2.0)
            .with_zero_score_take_probability(0.0)
            .with_parallel(true)
            .with_seed(42);

        assert_eq!(config.num_ants, 10);
        assert_eq!(config.max_iterations, 20);
        assert!((config.alpha - 0.5).abs() < 1e-12);
        assert!((config.beta - 4.0).abs() < 1e-12);
        assert!((config.evaporation_rate - 0.1).abs() < 1e-12);
        assert!((config.initial_pheromone - 0.2).abs() < 1e-12);
        assert!((config.min_pheromone - 0.01).abs() < 1e-12);
        assert_eq!(config.max_pheromone, Some(50.0));
        assert_eq!(config.elite_count, 3);
        assert!((config.deposit_factor - 2.0).abs() < 1e-12);
        assert_eq!(config.zero_score_take_probability, 0.0);
        assert!(config.parallel);
        assert_eq!(config.seed, Some(42));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_evaluation_budget() {
        let config = AcoConfig::default()
            .with_num_ants(50)
            .with_evaluation_budget(20_000);
        assert_eq!(config.max_iterations, 400);

        let config = AcoConfig::default()
            .with_num_ants(50)
            .with_evaluation_budget(10);
        assert_eq!(config.max_iterations, 1);
    }

    #[test]
    fn test_validate_zero_ants() {
        let err = AcoConfig::default().with_num_ants(0).validate().unwrap_err();
        assert!(matches!(
            err,
            AcoError::InvalidParameter {
                name: "num_ants",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(AcoConfig::default()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_evaporation_range() {
        assert!(AcoConfig::default()
            .with_evaporation_rate(0.0)
            .validate()
            .is_ok());
        assert!(AcoConfig::default()
            .with_evaporation_rate(1.0)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_evaporation_rate(-0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_negative_exponents() {
        assert!(AcoConfig::default().with_alpha(-1.0).validate().is_err());
        assert!(AcoConfig::default().with_beta(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_pheromone_bounds() {
        assert!(AcoConfig::default()
            .with_min_pheromone(0.0)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_initial_pheromone(-1.0)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_max_pheromone(0.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_elite_and_fallback() {
        assert!(AcoConfig::default()
            .with_elite_count(0)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_zero_score_take_probability(1.5)
            .validate()
            .is_err());
        assert!(AcoConfig::default()
            .with_deposit_factor(f64::INFINITY)
            .validate()
            .is_err());
    }
}
