//! Core trait definitions for the GA framework.
//!
//! [`GaProblem`] is the contract between the generic GA engine and a
//! concrete problem such as [`TspProblem`](crate::tsp::TspProblem).

use crate::error::Result;
use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// **Higher fitness is better** (maximization).
///
/// A built-in implementation exists for `f64`.
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

/// Defines a GA optimization problem.
///
/// This is the trait problems implement to plug into [`GaRunner`](super::GaRunner):
///
/// 1. **Initialization**: how to create random individuals
/// 2. **Evaluation**: how to compute fitness
/// 3. **Crossover**: how to recombine two parents into one child
/// 4. **Mutation**: how to perturb a child in place
///
/// Individuals do not carry their fitness. The runner evaluates each one
/// exactly once, after crossover and mutation are done with it, and keeps
/// the score alongside it in the [`Population`](super::Population).
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the runner may build and
/// evaluate children in parallel using rayon.
pub trait GaProblem: Send + Sync {
    /// The individual (solution) type for this problem.
    type Individual: Clone + Send + Sync;

    /// The fitness type. Higher is better.
    type Fitness: Fitness;

    /// Creates a random individual.
    ///
    /// Called during population initialization; this is the only source of
    /// initial diversity.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Evaluates an individual.
    ///
    /// Returns an error when fitness is undefined for this individual.
    /// The runner aborts the run on the first such error.
    fn evaluate(&self, individual: &Self::Individual) -> Result<Self::Fitness>;

    /// Produces one child by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Self::Individual {
        parent1.clone()
    }

    /// Mutates an individual in place.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the current best fitness.
    ///
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _best_fitness: Self::Fitness) {}
}
