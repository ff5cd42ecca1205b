//! Bit-string individuals and the population that holds them.

use rand::Rng;
use std::fmt;

/// One candidate solution: a fixed-length bit string plus its cached fitness.
///
/// The fitness is `None` until the individual has been evaluated. Any mutable
/// access to the genes through [`genes_mut`](Individual::genes_mut) drops the
/// cached value, so a stale fitness can never be observed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    genes: Vec<bool>,
    fitness: Option<f64>,
}

impl Individual {
    /// Creates an unevaluated individual from the given genes.
    pub fn new(genes: Vec<bool>) -> Self {
        Self {
            genes,
            fitness: None,
        }
    }

    /// Creates an individual of `n` uniformly random genes.
    ///
    /// Consumes exactly `n` draws from `rng`.
    pub fn random<R: Rng>(n: usize, rng: &mut R) -> Self {
        Self::new((0..n).map(|_| rng.random::<bool>()).collect())
    }

    /// The genes of this individual.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Mutable access to the genes. Invalidates the cached fitness.
    pub fn genes_mut(&mut self) -> &mut [bool] {
        self.invalidate();
        &mut self.genes
    }

    /// Number of genes.
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the individual has no genes.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Number of genes set to `true`.
    pub fn count_ones(&self) -> usize {
        self.genes.iter().filter(|&&g| g).count()
    }

    /// The cached fitness, or `None` if not evaluated since the last change.
    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    /// Whether the cached fitness is valid.
    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    /// Stores an evaluated fitness.
    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = Some(fitness);
    }

    /// Drops the cached fitness.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &g in &self.genes {
            f.write_str(if g { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// An ordered collection of individuals.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Creates `size` random individuals of `n` genes each.
    ///
    /// Consumes exactly `size * n` draws from `rng`, individual by individual.
    pub fn random<R: Rng>(size: usize, n: usize, rng: &mut R) -> Self {
        Self {
            individuals: (0..size).map(|_| Individual::random(n, rng)).collect(),
        }
    }

    /// Wraps existing individuals.
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.individuals.iter()
    }

    pub fn as_slice(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn as_mut_slice(&mut self) -> &mut [Individual] {
        &mut self.individuals
    }

    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// The first individual with the highest evaluated fitness.
    pub fn best(&self) -> Option<&Individual> {
        let mut best: Option<&Individual> = None;
        for ind in &self.individuals {
            let Some(f) = ind.fitness() else { continue };
            match best.and_then(Individual::fitness) {
                Some(b) if f <= b => {}
                _ => best = Some(ind),
            }
        }
        best
    }

    /// Fitness values of the evaluated individuals, in population order.
    pub fn fitness_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.individuals.iter().filter_map(Individual::fitness)
    }

    /// Whether every individual carries a valid fitness.
    pub fn all_evaluated(&self) -> bool {
        self.individuals.iter().all(Individual::is_evaluated)
    }

    /// Number of individuals awaiting evaluation.
    pub fn count_unevaluated(&self) -> usize {
        self.individuals.iter().filter(|i| !i.is_evaluated()).count()
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
