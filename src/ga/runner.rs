//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.

use super::config::GaConfig;
use super::population::{Member, Population};
use super::types::{Fitness, GaProblem};
use crate::error::Result;
use crate::random::create_rng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
pub struct GaResult<I, F> {
    /// The fittest individual of the final population.
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: F,

    /// Number of generation transitions executed.
    pub generations: usize,

    /// Best fitness of the initial population followed by the best fitness
    /// after each generation (`generations + 1` entries).
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Always runs exactly `config.generations` transitions. Each
    /// transition copies the elite slice, fills the remaining slots with
    /// children, and re-sorts the new population best-first.
    ///
    /// # Errors
    /// [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration fails validation; otherwise the first error returned
    /// by [`GaProblem::evaluate`].
    #[instrument(
        level = "info",
        skip(problem, config),
        fields(
            population_size = config.population_size,
            generations = config.generations,
            seed = ?config.seed
        )
    )]
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual, P::Fitness>> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Initialize and evaluate population
        let individuals: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(&mut rng))
            .collect();
        let mut population = Population::from_members(evaluate_all(
            problem,
            individuals,
            config.parallel,
        )?);

        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(population.best().fitness.to_f64());

        let elite_count = config.elite_count();

        // 2. Evolutionary loop
        for gen in 0..config.generations {
            population = transition(problem, config, &population, elite_count, &mut rng)?;
            debug_assert!(population.is_sorted(), "population must be sorted best-first");

            let best_fitness = population.best().fitness;
            fitness_history.push(best_fitness.to_f64());
            debug!(generation = gen + 1, best_fitness = best_fitness.to_f64(), "generation complete");

            problem.on_generation(gen + 1, best_fitness);
        }

        let best = population.into_best();
        info!(best_fitness = best.fitness.to_f64(), "GA finished");

        Ok(GaResult {
            best: best.individual,
            best_fitness: best.fitness,
            generations: config.generations,
            fitness_history,
        })
    }
}

/// Builds the next generation from a sorted population.
fn transition<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    population: &Population<P::Individual, P::Fitness>,
    elite_count: usize,
    rng: &mut R,
) -> Result<Population<P::Individual, P::Fitness>> {
    let offspring = config.population_size - elite_count;
    let mut next_gen: Vec<Member<P::Individual, P::Fitness>> =
        Vec::with_capacity(config.population_size);

    // Elite preservation
    next_gen.extend_from_slice(population.elites(elite_count));

    #[cfg(feature = "parallel")]
    if config.parallel {
        // One seed per child, drawn in order from the master stream, keeps
        // parallel runs reproducible.
        let seeds: Vec<u64> = (0..offspring).map(|_| rng.random()).collect();
        let children = seeds
            .into_par_iter()
            .map(|seed| breed(problem, config, population, &mut create_rng(seed)))
            .collect::<Result<Vec<_>>>()?;
        next_gen.extend(children);
        return Ok(Population::from_members(next_gen));
    }

    for _ in 0..offspring {
        next_gen.push(breed(problem, config, population, rng)?);
    }

    Ok(Population::from_members(next_gen))
}

/// Selection → crossover → mutation → evaluation for a single child.
fn breed<P: GaProblem, R: Rng>(
    problem: &P,
    config: &GaConfig,
    population: &Population<P::Individual, P::Fitness>,
    rng: &mut R,
) -> Result<Member<P::Individual, P::Fitness>> {
    let members = population.members();
    let p1_idx = config.selection.select(members, rng);
    let p2_idx = config.selection.select(members, rng);

    let mut child = problem.crossover(&members[p1_idx].individual, &members[p2_idx].individual, rng);

    if rng.random_range(0.0..1.0) < config.mutation_rate {
        problem.mutate(&mut child, rng);
    }

    evaluate(problem, child)
}

fn evaluate<P: GaProblem>(
    problem: &P,
    individual: P::Individual,
) -> Result<Member<P::Individual, P::Fitness>> {
    let fitness = problem.evaluate(&individual)?;
    Ok(Member {
        individual,
        fitness,
    })
}

/// Evaluate a batch of fresh individuals.
fn evaluate_all<P: GaProblem>(
    problem: &P,
    individuals: Vec<P::Individual>,
    parallel: bool,
) -> Result<Vec<Member<P::Individual, P::Fitness>>> {
    #[cfg(feature = "parallel")]
    if parallel {
        return individuals
            .into_par_iter()
            .map(|ind| evaluate(problem, ind))
            .collect();
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    individuals
        .into_iter()
        .map(|ind| evaluate(problem, ind))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
