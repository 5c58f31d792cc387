//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::selection::Selection;
use crate::error::{Error, Result};

/// Configuration for the Genetic Algorithm.
///
/// One immutable value handed to [`GaRunner`](super::GaRunner). Builders
/// store what they are given; out-of-range values are reported by
/// [`validate`](GaConfig::validate) rather than silently clamped.
///
/// # Defaults
///
/// ```
/// use u_tsp::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_tsp::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_generations(1000)
///     .with_selection(Selection::Tournament(3))
///     .with_mutation_rate(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of individuals in the population. At least 2.
    pub population_size: usize,

    /// Number of generation transitions to run.
    ///
    /// The loop always runs exactly this many; there is no early exit.
    /// Zero returns the best individual of the initial population.
    pub generations: usize,

    /// Probability (0.0–1.0) that a child is mutated.
    ///
    /// Checked once per child, not once per gene.
    pub mutation_rate: f64,

    /// Fraction of the population preserved as elites (0.0 ≤ r < 1.0).
    ///
    /// The elite count is `floor(population_size * elite_ratio)`; it may be
    /// zero for small populations.
    pub elite_ratio: f64,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Whether to build children in parallel using rayon.
    ///
    /// Only has an effect when the crate is built with the `parallel`
    /// feature.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            mutation_rate: 0.02,
            elite_ratio: 0.1,
            selection: Selection::default(),
            parallel: false,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite ratio.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Enables or disables parallel child construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of individuals copied unchanged into each new generation.
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio).floor() as usize
    }

    /// Validates the configuration.
    ///
    /// Returns [`Error::InvalidConfig`] describing the first invalid
    /// parameter.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(invalid("population_size must be at least 2"));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(invalid(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(0.0..1.0).contains(&self.elite_ratio) {
            return Err(invalid(format!(
                "elite_ratio must be in [0, 1), got {}",
                self.elite_ratio
            )));
        }
        if self.elite_count() >= self.population_size {
            return Err(invalid("elite_ratio too high: elites fill entire population"));
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidConfig(reason.into())
}
