//! Genetic-algorithm solver for the travelling-salesman problem.
//!
//! Evolves a population of candidate tours through uniform parent
//! selection, ordered crossover, swap mutation and elitism for a fixed
//! number of generations, and returns the shortest tour of the final
//! population. The result is heuristic: near-optimal, not proven optimal.
//!
//! - [`ga`]: the generic GA engine ([`GaProblem`](ga::GaProblem),
//!   [`GaConfig`](ga::GaConfig), [`GaRunner`](ga::GaRunner)) and the
//!   permutation operators.
//! - [`tsp`]: cities, tours, the cycle-length fitness, and
//!   [`TspSolver`](tsp::TspSolver).
//! - [`random`]: seeded generator construction and Fisher–Yates shuffle.
//!
//! # Features
//!
//! - `parallel`: build each generation's children on rayon.
//! - `serde`: `Serialize`/`Deserialize` for cities, tours, configs and
//!   solutions.
//! - `cli`: the `u-tsp` command-line binary.

mod error;
pub mod ga;
pub mod random;
pub mod tsp;

pub use error::{Error, Result};
