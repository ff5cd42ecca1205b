//! Core trait definitions for the GA framework.
//!
//! [`GaProblem`] is the contract between the generic GA engine and a
//! domain-specific problem instance. The engine only ever sees fixed-length
//! bit strings; what a bit means is up to the problem.

use super::stats::GenerationStats;

/// Defines a bit-string optimization problem.
///
/// This is the trait that users implement to plug their domain-specific
/// fitness function into the generic GA engine. It covers:
///
/// 1. **Shape**: how many genes (items) an individual carries
/// 2. **Evaluation**: how to score a bit string
/// 3. **Reporting**: an optional human-readable rendering
///
/// Higher fitness values are considered better (maximization).
///
/// # Implementing
///
/// ```
/// use knapsack_ga::ga::GaProblem;
///
/// struct OneMax {
///     n: usize,
/// }
///
/// impl GaProblem for OneMax {
///     type Error = std::convert::Infallible;
///
///     fn item_count(&self) -> usize {
///         self.n
///     }
///
///     fn evaluate(&self, genes: &[bool]) -> Result<f64, Self::Error> {
///         Ok(genes.iter().filter(|&&g| g).count() as f64)
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the GA runner may evaluate
/// individuals in parallel using rayon (`parallel` feature).
pub trait GaProblem: Send + Sync {
    /// Error raised by [`evaluate`](GaProblem::evaluate).
    ///
    /// Use [`std::convert::Infallible`] for fitness functions that cannot fail.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Number of genes per individual. Must be at least 1.
    fn item_count(&self) -> usize;

    /// Evaluates a bit string and returns its fitness.
    ///
    /// Must be pure: the same genes always yield the same fitness. The engine
    /// relies on this to skip re-evaluating individuals whose genes did not
    /// change.
    fn evaluate(&self, genes: &[bool]) -> Result<f64, Self::Error>;

    /// Renders a bit string for reporting. Not used by the engine.
    ///
    /// The default implementation prints the bits as `0`/`1`.
    fn describe(&self, genes: &[bool]) -> String {
        genes.iter().map(|&g| if g { '1' } else { '0' }).collect()
    }

    /// Called after each generation's statistics record is appended,
    /// including generation 0.
    ///
    /// Useful for progress reporting. The default implementation is a no-op.
    fn on_generation(&self, _stats: &GenerationStats) {}
}
