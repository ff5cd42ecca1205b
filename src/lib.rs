//! Genetic algorithm for the 0/1 knapsack problem.
//!
//! Chooses a subset of items, each with a weight and a value, maximizing
//! total value under a weight capacity. Instead of solving exactly, it
//! evolves a population of bit strings:
//!
//! - **Genetic Algorithm (`ga`)**: generic engine with tournament
//!   selection, two-point crossover, bit-flip mutation, full generational
//!   replacement, a hall of fame, and a per-generation logbook.
//! - **Knapsack (`knapsack`)**: the problem definition plugged into the
//!   engine: the item list, its capacity, and the fitness function.
//!
//! # Quick Start
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaRunner};
//! use knapsack_ga::knapsack::KnapsackProblem;
//!
//! let problem = KnapsackProblem::hiking_trip();
//! let config = GaConfig::default().with_seed(42);
//! let result = GaRunner::run(&problem, &config)?;
//!
//! println!("best fitness: {}", result.best_fitness);
//! # Ok::<(), knapsack_ga::ga::GaError>(())
//! ```

pub mod ga;
pub mod knapsack;
