//! Error types for the GA engine.

use thiserror::Error;

/// Invalid run configuration, detected before generation 0 is created.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// `population_size` is zero.
    #[error("population_size must be at least 1")]
    EmptyPopulation,

    /// The problem has no items, so individuals would have no genes.
    #[error("problem must have at least one item")]
    NoItems,

    /// `max_generations` is zero.
    #[error("max_generations must be at least 1")]
    ZeroGenerations,

    /// `hall_of_fame_size` is zero.
    #[error("hall_of_fame_size must be at least 1")]
    EmptyHallOfFame,

    /// A probability parameter is NaN or outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
}

/// Error aborting a GA run.
///
/// No partial results are reported when a run fails.
#[derive(Debug, Error)]
pub enum GaError {
    /// The configuration was rejected before the run started.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The problem's fitness function failed for an individual.
    #[error("fitness evaluation failed for individual {index}: {source}")]
    Evaluation {
        index: usize,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The fitness function returned NaN or an infinite value.
    #[error("fitness evaluation returned non-finite value {value} for individual {index}")]
    NonFiniteFitness { index: usize, value: f64 },

    /// The run ended without an evaluated individual in the hall of fame.
    #[error("run produced no evaluated individual")]
    NoBestIndividual,
}
