//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. All strategies assume **maximization** (higher fitness = better).
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"

use super::individual::Individual;
use rand::Rng;

/// Parent selection strategy.
///
/// The engine calls [`select`](Selection::select) once per offspring slot, so
/// a population of size P receives exactly P picks, with replacement.
pub trait Selection {
    /// Returns the index of the chosen parent.
    ///
    /// `population` must be non-empty and fully evaluated.
    fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize;
}

/// Tournament selection: pick `size` individuals at random, select the best.
///
/// Higher `size` = stronger selection pressure.
/// - size=2: light pressure (good for diversity)
/// - size=3: moderate pressure (the default)
/// - size>5: strong pressure (risk of premature convergence)
///
/// Aspirants are drawn uniformly with replacement. Ties go to the aspirant
/// drawn first. When `size` is at least the population size, the whole
/// population competes instead and no random numbers are drawn, so the first
/// highest-fitness individual always wins.
///
/// # Complexity
/// O(size) per selection
///
/// # Examples
///
/// ```
/// use knapsack_ga::ga::Tournament;
///
/// let sel = Tournament::new(3);
/// assert_eq!(sel.size(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tournament {
    size: usize,
}

impl Tournament {
    /// Creates a tournament of the given size. Sizes below 1 are raised to 1.
    pub fn new(size: usize) -> Self {
        Self { size: size.max(1) }
    }

    pub fn size(&self) -> usize {
        self.size
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new(3)
    }
}

impl Selection for Tournament {
    /// # Panics
    /// Panics if `population` is empty.
    fn select<R: Rng>(&self, population: &[Individual], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        let n = population.len();
        if self.size >= n {
            return (1..n).fold(0, |best, idx| better(population, idx, best));
        }

        let mut best_idx = rng.random_range(0..n);
        for _ in 1..self.size {
            let idx = rng.random_range(0..n);
            best_idx = better(population, idx, best_idx);
        }
        best_idx
    }
}

/// Returns `challenger` if it is strictly fitter than `incumbent`.
///
/// Unevaluated individuals never win against evaluated ones.
fn better(population: &[Individual], challenger: usize, incumbent: usize) -> usize {
    match (
        population[challenger].fitness(),
        population[incumbent].fitness(),
    ) {
        (Some(c), Some(i)) if c > i => challenger,
        (Some(_), None) => challenger,
        _ => incumbent,
    }
}
