//! One-call TSP solving.

use super::city::City;
use super::problem::TspProblem;
use super::tour::{cycle_length, Tour};
use crate::error::Result;
use crate::ga::{GaConfig, GaRunner};
use tracing::{info, instrument};

/// The best tour found by a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspSolution {
    /// Visiting order.
    pub tour: Tour,
    /// Total cycle length of `tour`.
    pub length: f64,
    /// `1 / length`.
    pub fitness: f64,
    /// Number of generations run.
    pub generations: usize,
    /// Best fitness per generation, initial population first.
    pub fitness_history: Vec<f64>,
}

/// A validated instance paired with a validated configuration.
///
/// ```
/// use u_tsp::ga::GaConfig;
/// use u_tsp::tsp::{City, TspSolver};
///
/// let cities = vec![
///     City::new(0.0, 0.0),
///     City::new(0.0, 1.0),
///     City::new(1.0, 1.0),
///     City::new(1.0, 0.0),
/// ];
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generations(50)
///     .with_seed(42);
///
/// let solution = TspSolver::new(cities, config)?.solve()?;
/// assert!(solution.tour.is_valid_permutation(4));
/// # Ok::<(), u_tsp::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TspSolver {
    problem: TspProblem,
    config: GaConfig,
}

impl TspSolver {
    /// Validates both the instance and the configuration up front.
    pub fn new(cities: Vec<City>, config: GaConfig) -> Result<Self> {
        config.validate()?;
        let problem = TspProblem::new(cities)?;
        Ok(Self { problem, config })
    }

    /// The validated instance.
    pub fn problem(&self) -> &TspProblem {
        &self.problem
    }

    /// The configuration every [`solve`](Self::solve) call uses.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Runs the GA and reports the best tour of the final population.
    #[instrument(level = "info", skip(self), fields(num_cities = self.problem.num_cities()))]
    pub fn solve(&self) -> Result<TspSolution> {
        let result = GaRunner::run(&self.problem, &self.config)?;
        let length = cycle_length(&result.best, self.problem.cities());
        info!(length, generations = result.generations, "tour found");

        Ok(TspSolution {
            tour: result.best,
            length,
            fitness: result.best_fitness,
            generations: result.generations,
            fitness_history: result.fitness_history,
        })
    }
}
