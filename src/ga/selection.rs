//! Parent selection strategies.
//!
//! Selection runs over the whole current population, elites included.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::population::Member;
use super::types::Fitness;
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use u_tsp::ga::Selection;
///
/// // Every individual equally likely (the default)
/// let sel = Selection::Uniform;
///
/// // Best of 3 uniform draws
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Uniform random selection, independent of fitness.
    ///
    /// No selection pressure at all: convergence is driven entirely by
    /// elitism, and weak individuals keep contributing genetic material.
    #[default]
    Uniform,

    /// Tournament selection: pick `k` individuals at random, select the best.
    ///
    /// Higher `k` = stronger selection pressure. `Tournament(1)` is
    /// equivalent to [`Uniform`](Selection::Uniform).
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I, F: Fitness, R: Rng>(&self, population: &[Member<I, F>], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match self {
            Selection::Uniform => rng.random_range(0..population.len()),
            Selection::Tournament(k) => tournament(population, *k, rng),
        }
    }
}

/// Tournament selection: pick k random individuals, return the fittest.
fn tournament<I, F: Fitness, R: Rng>(population: &[Member<I, F>], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness > population[best_idx].fitness {
            best_idx = idx;
        }
    }
    best_idx
}
