//! Genetic Algorithm framework for bit-string problems.
//!
//! A generic, domain-agnostic GA engine. Users define their problem by
//! implementing [`GaProblem`], which specifies the number of genes and how
//! to score a bit string; the engine handles everything else.
//!
//! # Core Traits
//!
//! - [`GaProblem`]: Problem definition: gene count, evaluation, reporting
//! - [`Selection`], [`Crossover`], [`Mutation`]: pluggable operator strategies
//!
//! # Key Types
//!
//! - [`Individual`] / [`Population`]: bit strings with cached fitness
//! - [`GaConfig`]: Algorithm parameters (population size, rates, seed)
//! - [`Operators`]: The selection/crossover/mutation bundle for a run
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final population, hall of fame, and logbook
//! - [`HallOfFame`]: Best-ever individuals across the run
//! - [`Logbook`]: Per-generation max/mean fitness
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Fortin et al. (2012), "DEAP: Evolutionary Algorithms Made Easy"

mod config;
mod error;
mod hall_of_fame;
mod individual;
pub mod operators;
mod runner;
mod selection;
mod stats;
mod types;

pub use config::GaConfig;
pub use error::{ConfigError, GaError};
pub use hall_of_fame::HallOfFame;
pub use individual::{Individual, Population};
pub use operators::{Crossover, FlipBitMutation, Mutation, Operators, TwoPointCrossover};
pub use runner::{GaResult, GaRunner};
pub use selection::{Selection, Tournament};
pub use stats::{GenerationStats, Logbook};
pub use types::GaProblem;
