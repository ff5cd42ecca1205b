//! Bounded archive of the best individuals seen during a run.

use super::individual::{Individual, Population};

/// Best-ever individuals, ranked by descending fitness.
///
/// The archive owns independent copies, so later changes to the live
/// population never reach it. Entries with equal fitness keep their
/// insertion order, and an individual whose genes match an archived entry
/// is not added again.
///
/// ```
/// use knapsack_ga::ga::{HallOfFame, Individual, Population};
///
/// let mut ind = Individual::new(vec![true, false]);
/// ind.set_fitness(3.0);
///
/// let mut hof = HallOfFame::new(2);
/// hof.update(&Population::from_individuals(vec![ind]));
/// assert_eq!(hof.best().and_then(|b| b.fitness()), Some(3.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HallOfFame {
    capacity: usize,
    items: Vec<Individual>,
}

impl HallOfFame {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Merges the population into the archive, keeping the top `capacity`.
    ///
    /// Individuals are considered in population order. A candidate enters
    /// when the archive has room or it is strictly fitter than the current
    /// worst entry. Unevaluated individuals are ignored.
    pub fn update(&mut self, population: &Population) {
        for ind in population {
            self.insert(ind);
        }
    }

    fn insert(&mut self, candidate: &Individual) {
        if self.capacity == 0 {
            return;
        }
        let Some(fitness) = candidate.fitness() else {
            return;
        };

        if self.items.len() >= self.capacity {
            match self.items.last().and_then(Individual::fitness) {
                Some(worst) if fitness <= worst => return,
                _ => {}
            }
        }
        if self.items.iter().any(|i| i.genes() == candidate.genes()) {
            return;
        }

        // After every entry at least as fit, so ties keep insertion order.
        let pos = self
            .items
            .partition_point(|i| i.fitness().is_some_and(|f| f >= fitness));
        self.items.insert(pos, candidate.clone());
        self.items.truncate(self.capacity);
    }

    /// The fittest archived individual.
    pub fn best(&self) -> Option<&Individual> {
        self.items.first()
    }

    /// Fitness of [`best`](Self::best).
    pub fn best_fitness(&self) -> Option<f64> {
        self.best().and_then(Individual::fitness)
    }

    /// All archived individuals, best first.
    pub fn items(&self) -> &[Individual] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}
