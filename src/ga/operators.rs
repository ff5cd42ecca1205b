//! Bit-string genetic operators.
//!
//! Crossover and mutation operators for binary chromosomes. The free
//! functions operate on `&mut [bool]` and know nothing about fitness; the
//! [`Crossover`] and [`Mutation`] implementations make the same random draws
//! and also invalidate an [`Individual`]'s cached fitness when its genes
//! change.
//!
//! # Crossover Operators
//!
//! - [`two_point_crossover`]: swap the segment between two cut points, O(n)
//!
//! # Mutation Operators
//!
//! - [`flip_bits`]: flip each gene independently with probability `indpb`, O(n)
//!
//! # References
//!
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems"
//! - Spears & De Jong (1991), "An Analysis of Multi-Point Crossover"

use super::config::check_probability;
use super::error::ConfigError;
use super::individual::Individual;
use super::selection::Tournament;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Recombines two parents in place, turning them into offspring.
pub trait Crossover {
    fn mate<R: Rng>(&self, a: &mut Individual, b: &mut Individual, rng: &mut R);
}

/// Two-point crossover on bit strings.
///
/// Draws two distinct cut points `1 <= start < end <= n` and swaps
/// `a[start..end]` with `b[start..end]`.
///
/// Returns the cut points, or `None` when the shorter parent has fewer than
/// two genes (nothing to cut; no random numbers are drawn).
///
/// # Complexity
/// O(n) time, O(1) space
pub fn two_point_crossover<R: Rng>(
    a: &mut [bool],
    b: &mut [bool],
    rng: &mut R,
) -> Option<(usize, usize)> {
    let (start, end) = cut_points(a.len().min(b.len()), rng)?;
    a[start..end].swap_with_slice(&mut b[start..end]);
    Some((start, end))
}

/// Draws two distinct cut points in `1..=n`, ordered.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 2 {
        return None;
    }
    let first = rng.random_range(1..=n);
    let second = rng.random_range(1..n);
    if second >= first {
        Some((first, second + 1))
    } else {
        Some((second, first))
    }
}

/// [`Crossover`] counterpart of [`two_point_crossover`].
///
/// Offspring keep their cached fitness when the swapped segments were equal,
/// since their genes did not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TwoPointCrossover;

impl Crossover for TwoPointCrossover {
    fn mate<R: Rng>(&self, a: &mut Individual, b: &mut Individual, rng: &mut R) {
        let Some((start, end)) = cut_points(a.len().min(b.len()), rng) else {
            return;
        };
        if a.genes()[start..end] != b.genes()[start..end] {
            a.genes_mut()[start..end].swap_with_slice(&mut b.genes_mut()[start..end]);
        }
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Perturbs an individual in place.
pub trait Mutation {
    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R);
}

/// Flips each gene independently with probability `indpb`.
///
/// Draws exactly one random number per gene regardless of outcome, and
/// returns the number of genes flipped.
///
/// # Complexity
/// O(n)
pub fn flip_bits<R: Rng>(genes: &mut [bool], indpb: f64, rng: &mut R) -> usize {
    let mut flipped = 0;
    for gene in genes.iter_mut() {
        if rng.random::<f64>() < indpb {
            *gene = !*gene;
            flipped += 1;
        }
    }
    flipped
}

/// Independent bit-flip mutation.
///
/// With `indpb` unset, each gene flips with probability `1 / n` for an
/// individual of `n` genes, i.e. one flip on average.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlipBitMutation {
    indpb: Option<f64>,
}

impl FlipBitMutation {
    /// Mutation with per-gene probability `1 / n`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mutation with a fixed per-gene flip probability.
    pub fn with_indpb(indpb: f64) -> Result<Self, ConfigError> {
        check_probability("indpb", indpb)?;
        Ok(Self { indpb: Some(indpb) })
    }

    /// The per-gene flip probability for an individual of `n` genes.
    pub fn indpb(&self, n: usize) -> f64 {
        match self.indpb {
            Some(p) => p,
            None if n == 0 => 0.0,
            None => 1.0 / n as f64,
        }
    }
}

impl Mutation for FlipBitMutation {
    fn mutate<R: Rng>(&self, individual: &mut Individual, rng: &mut R) {
        let indpb = self.indpb(individual.len());
        for i in 0..individual.len() {
            if rng.random::<f64>() < indpb {
                let genes = individual.genes_mut();
                genes[i] = !genes[i];
            }
        }
    }
}

// ============================================================================
// Operator bundle
// ============================================================================

/// The selection, crossover, and mutation strategies driving a run.
///
/// The default bundle is tournament selection of size 3, two-point
/// crossover, and bit-flip mutation with `indpb = 1 / n`.
///
/// ```
/// use knapsack_ga::ga::{FlipBitMutation, Operators, Tournament};
///
/// let ops = Operators::default()
///     .with_selection(Tournament::new(5))
///     .with_mutation(FlipBitMutation::with_indpb(0.05).unwrap());
/// assert_eq!(ops.selection.size(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct Operators<S = Tournament, C = TwoPointCrossover, M = FlipBitMutation> {
    pub selection: S,
    pub crossover: C,
    pub mutation: M,
}

impl Default for Operators {
    fn default() -> Self {
        Self::new(
            Tournament::default(),
            TwoPointCrossover,
            FlipBitMutation::new(),
        )
    }
}

impl<S, C, M> Operators<S, C, M> {
    pub fn new(selection: S, crossover: C, mutation: M) -> Self {
        Self {
            selection,
            crossover,
            mutation,
        }
    }

    /// Replaces the selection strategy.
    pub fn with_selection<S2>(self, selection: S2) -> Operators<S2, C, M> {
        Operators {
            selection,
            crossover: self.crossover,
            mutation: self.mutation,
        }
    }

    /// Replaces the crossover operator.
    pub fn with_crossover<C2>(self, crossover: C2) -> Operators<S, C2, M> {
        Operators {
            selection: self.selection,
            crossover,
            mutation: self.mutation,
        }
    }

    /// Replaces the mutation operator.
    pub fn with_mutation<M2>(self, mutation: M2) -> Operators<S, C, M2> {
        Operators {
            selection: self.selection,
            crossover: self.crossover,
            mutation,
        }
    }
}
