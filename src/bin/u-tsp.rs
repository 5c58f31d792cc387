//! Command-line front end: load cities, evolve, print the best tour.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use u_tsp::ga::{GaConfig, Selection};
use u_tsp::tsp::{read_cities, sample_cities, City, TspSolver};

/// Search for a short closed tour with a genetic algorithm.
#[derive(Debug, Parser)]
#[command(name = "u-tsp", version, about)]
struct Args {
    /// City file, one `x y` (or `x,y`) pair per line. Uses a built-in
    /// ten-city sample when omitted.
    cities: Option<PathBuf>,

    /// Number of tours in the population.
    #[arg(short, long, default_value_t = 100)]
    population: usize,

    /// Number of generations to evolve.
    #[arg(short, long, default_value_t = 500)]
    generations: usize,

    /// Probability that a child is mutated.
    #[arg(short, long, default_value_t = 0.02)]
    mutation_rate: f64,

    /// Fraction of the population carried over unchanged.
    #[arg(short, long, default_value_t = 0.1)]
    elite_ratio: f64,

    /// Tournament size for parent selection; uniform selection when omitted.
    #[arg(short, long)]
    tournament: Option<usize>,

    /// Random seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Build children in parallel (needs the `parallel` feature).
    #[arg(long)]
    parallel: bool,
}

/// Reads `path`, or falls back to the built-in sample. Read errors already
/// name the file.
fn load_cities(path: Option<&Path>) -> u_tsp::Result<Vec<City>> {
    match path {
        Some(path) => read_cities(path),
        None => Ok(sample_cities()),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let cities = load_cities(args.cities.as_deref())?;

    let mut config = GaConfig::default()
        .with_population_size(args.population)
        .with_generations(args.generations)
        .with_mutation_rate(args.mutation_rate)
        .with_elite_ratio(args.elite_ratio)
        .with_parallel(args.parallel);
    if let Some(k) = args.tournament {
        config = config.with_selection(Selection::Tournament(k));
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let solver = TspSolver::new(cities, config)?;
    let solution = solver.solve()?;

    println!("Tour:");
    for (&index, city) in solution
        .tour
        .order()
        .iter()
        .zip(solution.tour.cities(solver.problem().cities()))
    {
        println!("  {index:>4}  ({}, {})", city.x, city.y);
    }
    println!("Distance: {:.6}", solution.length);

    Ok(())
}
