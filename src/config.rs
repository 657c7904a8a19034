//! Solver configuration.
//!
//! [`EvolutionConfig`] holds all parameters that control a run.

use crate::error::{Result, TspError};

/// Smallest population that leaves room for a non-empty crossover window
/// and two parents plus two replaced individuals.
pub const MIN_POPULATION_SIZE: usize = 4;

/// Configuration for an evolution run.
///
/// # Defaults
///
/// ```
/// use tsp_ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default();
/// assert_eq!(config.generations, 5000);
/// assert_eq!(config.population_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_ga::EvolutionConfig;
///
/// let config = EvolutionConfig::default()
///     .with_generations(1000)
///     .with_population_size(40)
///     .with_seed(42);
/// assert_eq!(config.window_size(), 10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvolutionConfig {
    /// Number of generations to run. Zero skips evolution entirely.
    pub generations: usize,

    /// Number of tours in the population.
    ///
    /// Also the number of generated destinations, and four times the
    /// crossover window size.
    pub population_size: usize,

    /// Inclusive lower bound of generated coordinates.
    pub range_min: i64,

    /// Exclusive upper bound of generated coordinates.
    pub range_max: i64,

    /// A progress report is emitted every `report_interval` generations,
    /// starting with generation 0.
    pub report_interval: usize,

    /// Whether to evaluate tour lengths in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generations: 5000,
            population_size: 100,
            range_min: 0,
            range_max: 100,
            report_interval: 100,
            parallel: true,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the coordinate range `[min, max)` for generated destinations.
    pub fn with_range(mut self, min: i64, max: i64) -> Self {
        self.range_min = min;
        self.range_max = max;
        self
    }

    /// Sets the progress report interval.
    pub fn with_report_interval(mut self, n: usize) -> Self {
        self.report_interval = n;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Crossover window size: a quarter of the population, rounded down.
    pub fn window_size(&self) -> usize {
        self.population_size / 4
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(TspError::invalid(format!(
                "population_size must be at least {MIN_POPULATION_SIZE}, got {}",
                self.population_size
            )));
        }
        if self.range_min >= self.range_max {
            return Err(TspError::invalid(format!(
                "coordinate range is empty: [{}, {})",
                self.range_min, self.range_max
            )));
        }
        if self.report_interval == 0 {
            return Err(TspError::invalid("report_interval must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EvolutionConfig::default();
        assert_eq!(config.generations, 5000);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.range_min, 0);
        assert_eq!(config.range_max, 100);
        assert_eq!(config.report_interval, 100);
        assert!(config.parallel);
        assert!(config.seed.is_none());
        assert_eq!(config.window_size(), 25);
    }

    #[test]
    fn test_builder_pattern() {
        let config = EvolutionConfig::default()
            .with_generations(10)
            .with_population_size(23)
            .with_range(-50, 50)
            .with_report_interval(5)
            .with_parallel(false)
            .with_seed(42);

        assert_eq!(config.generations, 10);
        assert_eq!(config.population_size, 23);
        assert_eq!(config.range_min, -50);
        assert_eq!(config.range_max, 50);
        assert_eq!(config.report_interval, 5);
        assert!(!config.parallel);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.window_size(), 5);
    }

    #[test]
    fn test_validate_ok() {
        assert!(EvolutionConfig::default().validate().is_ok());
        assert!(EvolutionConfig::default()
            .with_population_size(MIN_POPULATION_SIZE)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_zero_generations_ok() {
        assert!(EvolutionConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn test_validate_population_too_small() {
        for n in 0..MIN_POPULATION_SIZE {
            let err = EvolutionConfig::default()
                .with_population_size(n)
                .validate()
                .unwrap_err();
            assert!(matches!(err, TspError::InvalidArgument(_)));
        }
    }

    #[test]
    fn test_validate_empty_range() {
        let config = EvolutionConfig::default().with_range(10, 10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_interval() {
        let config = EvolutionConfig::default().with_report_interval(0);
        assert!(config.validate().is_err());
    }
}
