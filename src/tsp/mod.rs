//! Travelling-salesman problem on the GA engine.
//!
//! Cities are points in the plane; a [`Tour`] is a permutation of their
//! indices and its fitness is the reciprocal of its closed cycle length.
//! [`TspProblem`] plugs the instance into [`GaRunner`](crate::ga::GaRunner);
//! [`TspSolver`] validates instance and configuration and runs it.
//!
//! # Example
//!
//! ```
//! use u_tsp::ga::GaConfig;
//! use u_tsp::tsp::{sample_cities, TspSolver};
//!
//! let config = GaConfig::default().with_generations(100).with_seed(7);
//! let solution = TspSolver::new(sample_cities(), config)?.solve()?;
//! println!("length = {:.3}", solution.length);
//! # Ok::<(), u_tsp::Error>(())
//! ```

mod city;
mod io;
mod problem;
mod solver;
mod tour;

pub use city::{distance, City};
pub use io::{parse_cities, read_cities, sample_cities};
pub use problem::TspProblem;
pub use solver::{TspSolution, TspSolver};
pub use tour::{cycle_length, fitness, Tour};
