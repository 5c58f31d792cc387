//! Genetic Algorithm framework.
//!
//! A generic GA engine built on a trait-based problem definition. Problems
//! implement [`GaProblem`], which specifies how to create, evaluate,
//! crossover, and mutate individuals. The TSP solver in
//! [`crate::tsp`] is one such problem.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Best individual and fitness history
//! - [`Population`]: Evaluated individuals, sorted best-first
//!
//! # Submodules
//!
//! - [`operators`]: Permutation ordered crossover and swap mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
pub mod operators;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use population::{Member, Population};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Fitness, GaProblem};
