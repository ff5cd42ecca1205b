//! Per-generation fitness statistics.

use super::individual::Population;

/// Aggregate fitness of one generation's population.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Generation index; 0 is the initial population.
    pub generation: usize,

    /// Fitness evaluations performed during this generation.
    pub evaluations: usize,

    /// Highest fitness in the population.
    pub max: f64,

    /// Mean fitness of the population.
    pub mean: f64,
}

impl GenerationStats {
    /// Aggregates the evaluated fitness values of `population`.
    ///
    /// Unevaluated individuals are skipped. With nothing to aggregate, both
    /// `max` and `mean` are NaN.
    ///
    /// The mean is clamped to the observed fitness range, so rounding in the
    /// running sum never reports `mean > max`.
    pub fn from_population(generation: usize, evaluations: usize, population: &Population) -> Self {
        let (count, sum, min, max) = population.fitness_values().fold(
            (0usize, 0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(n, s, lo, hi), f| (n + 1, s + f, lo.min(f), hi.max(f)),
        );
        let (max, mean) = if count == 0 {
            (f64::NAN, f64::NAN)
        } else {
            (max, (sum / count as f64).min(max).max(min))
        };
        Self {
            generation,
            evaluations,
            max,
            mean,
        }
    }
}

/// Append-only log of [`GenerationStats`], indexed by generation.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logbook {
    records: Vec<GenerationStats>,
}

impl Logbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes and appends the statistics for `population`.
    pub fn record(
        &mut self,
        generation: usize,
        evaluations: usize,
        population: &Population,
    ) -> &GenerationStats {
        self.records.push(GenerationStats::from_population(
            generation,
            evaluations,
            population,
        ));
        &self.records[self.records.len() - 1]
    }

    pub fn records(&self) -> &[GenerationStats] {
        &self.records
    }

    pub fn last(&self) -> Option<&GenerationStats> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Max fitness per generation.
    pub fn select_max(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.max).collect()
    }

    /// Mean fitness per generation.
    pub fn select_mean(&self) -> Vec<f64> {
        self.records.iter().map(|r| r.mean).collect()
    }
}
