//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! evaluation → archive → statistics → repeat.
//!
//! Replacement is fully generational: each generation's offspring replace
//! the whole population. Elitism is left to the [`HallOfFame`], which keeps
//! the best-ever individuals independently of the population.

use super::config::GaConfig;
use super::error::{ConfigError, GaError};
use super::hall_of_fame::HallOfFame;
use super::individual::{Individual, Population};
use super::operators::{Crossover, Mutation, Operators};
use super::selection::Selection;
use super::stats::Logbook;
use super::types::GaProblem;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with the final population and
/// statistics about the evolutionary process.
#[derive(Debug, Clone, PartialEq)]
pub struct GaResult {
    /// The best individual found during the entire run (hall of fame rank 0).
    pub best: Individual,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Population after the last generation.
    pub population: Population,

    /// Best-ever individuals, best first.
    pub hall_of_fame: HallOfFame,

    /// One statistics record per generation, generation 0 first.
    pub logbook: Logbook,

    /// Total number of generations executed after generation 0.
    pub generations: usize,

    /// Hall of fame best fitness at the end of each generation,
    /// generation 0 included.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA evolutionary loop.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner};
/// use knapsack_ga::knapsack::KnapsackProblem;
///
/// let problem = KnapsackProblem::hiking_trip();
/// let config = GaConfig::default().with_max_generations(5).with_seed(42);
/// let result = GaRunner::run(&problem, &config).unwrap();
/// assert!(problem.total_weight(result.best.genes()) <= problem.capacity());
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with the default [`Operators`]: tournament selection of
    /// size 3, two-point crossover, and bit-flip mutation with `indpb = 1/n`.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult, GaError> {
        Self::run_with(problem, config, &Operators::default())
    }

    /// Runs the GA with explicit operators.
    ///
    /// # Errors
    /// - [`GaError::Config`] if the configuration is invalid or the problem
    ///   has no items. Nothing is evaluated in that case.
    /// - [`GaError::Evaluation`] / [`GaError::NonFiniteFitness`] as soon as
    ///   the fitness function fails; the run is aborted.
    /// - [`GaError::NoBestIndividual`] if the hall of fame ends up empty.
    pub fn run_with<P, S, C, M>(
        problem: &P,
        config: &GaConfig,
        operators: &Operators<S, C, M>,
    ) -> Result<GaResult, GaError>
    where
        P: GaProblem,
        S: Selection,
        C: Crossover,
        M: Mutation,
    {
        config.validate()?;
        let n = problem.item_count();
        if n == 0 {
            return Err(ConfigError::NoItems.into());
        }

        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);

        log::info!(
            "starting GA: {} items, population {}, {} generations, seed {}",
            n,
            config.population_size,
            config.max_generations,
            seed
        );

        // 1. Initialize and evaluate generation 0
        let mut population = Population::random(config.population_size, n, &mut rng);
        let evaluations = evaluate_population(problem, &mut population, config.parallel)?;

        let mut hall_of_fame = HallOfFame::new(config.hall_of_fame_size);
        hall_of_fame.update(&population);

        let mut logbook = Logbook::new();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        record_generation(
            problem,
            &mut logbook,
            &hall_of_fame,
            &mut fitness_history,
            0,
            evaluations,
            &population,
        );

        // 2. Evolutionary loop
        for gen in 1..=config.max_generations {
            let mut offspring = select_offspring(&population, &operators.selection, &mut rng);
            vary(&mut offspring, operators, config, &mut rng);

            let mut offspring = Population::from_individuals(offspring);
            let evaluations = evaluate_population(problem, &mut offspring, config.parallel)?;

            hall_of_fame.update(&offspring);
            population = offspring;

            record_generation(
                problem,
                &mut logbook,
                &hall_of_fame,
                &mut fitness_history,
                gen,
                evaluations,
                &population,
            );
        }

        let best = hall_of_fame.best().cloned().ok_or(GaError::NoBestIndividual)?;
        let best_fitness = best.fitness().ok_or(GaError::NoBestIndividual)?;

        log::info!("GA finished: best fitness {} ({})", best_fitness, best);

        Ok(GaResult {
            best,
            best_fitness,
            population,
            hall_of_fame,
            logbook,
            generations: config.max_generations,
            fitness_history,
        })
    }
}

/// Draws one parent per population slot, cloning each pick.
fn select_offspring<S: Selection, R: Rng>(
    population: &Population,
    selection: &S,
    rng: &mut R,
) -> Vec<Individual> {
    let parents = population.as_slice();
    (0..parents.len())
        .map(|_| parents[selection.select(parents, rng)].clone())
        .collect()
}

/// Applies crossover to consecutive pairs, then mutation to each offspring.
///
/// Draw order: one crossover draw per pair (plus the operator's own draws
/// when applied), then one mutation draw per offspring (plus the operator's
/// draws when applied). A trailing unpaired offspring is never crossed.
fn vary<S, C, M, R>(
    offspring: &mut [Individual],
    operators: &Operators<S, C, M>,
    config: &GaConfig,
    rng: &mut R,
) where
    C: Crossover,
    M: Mutation,
    R: Rng,
{
    for pair in offspring.chunks_exact_mut(2) {
        if rng.random::<f64>() < config.crossover_rate {
            let (a, b) = pair.split_at_mut(1);
            operators.crossover.mate(&mut a[0], &mut b[0], rng);
        }
    }

    for ind in offspring.iter_mut() {
        if rng.random::<f64>() < config.mutation_rate {
            operators.mutation.mutate(ind, rng);
        }
    }
}

/// Evaluates every individual without a valid fitness.
///
/// Returns the number of evaluations performed.
fn evaluate_population<P: GaProblem>(
    problem: &P,
    population: &mut Population,
    parallel: bool,
) -> Result<usize, GaError> {
    let pending = population.count_unevaluated();
    evaluate_pending(problem, population.as_mut_slice(), parallel)?;
    Ok(pending)
}

#[cfg(feature = "parallel")]
fn evaluate_pending<P: GaProblem>(
    problem: &P,
    individuals: &mut [Individual],
    parallel: bool,
) -> Result<(), GaError> {
    use rayon::prelude::*;

    if !parallel {
        return evaluate_sequential(problem, individuals);
    }
    individuals
        .par_iter_mut()
        .enumerate()
        .filter(|(_, ind)| !ind.is_evaluated())
        .try_for_each(|(index, ind)| evaluate_one(problem, index, ind))
}

/// Sequential fallback used when the `parallel` feature is disabled.
#[cfg(not(feature = "parallel"))]
fn evaluate_pending<P: GaProblem>(
    problem: &P,
    individuals: &mut [Individual],
    _parallel: bool,
) -> Result<(), GaError> {
    evaluate_sequential(problem, individuals)
}

fn evaluate_sequential<P: GaProblem>(
    problem: &P,
    individuals: &mut [Individual],
) -> Result<(), GaError> {
    for (index, ind) in individuals.iter_mut().enumerate() {
        if !ind.is_evaluated() {
            evaluate_one(problem, index, ind)?;
        }
    }
    Ok(())
}

fn evaluate_one<P: GaProblem>(
    problem: &P,
    index: usize,
    ind: &mut Individual,
) -> Result<(), GaError> {
    let value = problem
        .evaluate(ind.genes())
        .map_err(|e| GaError::Evaluation {
            index,
            source: Box::new(e),
        })?;
    if !value.is_finite() {
        return Err(GaError::NonFiniteFitness { index, value });
    }
    ind.set_fitness(value);
    Ok(())
}

/// Appends the generation's statistics and notifies the problem.
fn record_generation<P: GaProblem>(
    problem: &P,
    logbook: &mut Logbook,
    hall_of_fame: &HallOfFame,
    fitness_history: &mut Vec<f64>,
    generation: usize,
    evaluations: usize,
    population: &Population,
) {
    let stats = logbook.record(generation, evaluations, population);
    log::debug!(
        "gen {:>4}  nevals {:>4}  max {:>10.3}  avg {:>10.3}",
        stats.generation,
        stats.evaluations,
        stats.max,
        stats.mean
    );
    problem.on_generation(stats);

    let best = hall_of_fame.best_fitness().unwrap_or(f64::NAN);
    fitness_history.push(best);
    log::trace!("gen {generation}: hall of fame best {best}");
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{FlipBitMutation, Tournament};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // ---- OneMax problem: maximize the number of set bits ----

    struct OneMaxProblem {
        n: usize,
    }

    impl GaProblem for OneMaxProblem {
        type Error = std::convert::Infallible;

        fn item_count(&self) -> usize {
            self.n
        }

        fn evaluate(&self, genes: &[bool]) -> Result<f64, Self::Error> {
            Ok(genes.iter().filter(|&&g| g).count() as f64)
        }
    }

    fn config() -> GaConfig {
        GaConfig::default()
            .with_population_size(30)
            .with_max_generations(40)
            .with_seed(42)
    }

    fn evaluated_population(problem: &OneMaxProblem, size: usize, seed: u64) -> Population {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut pop = Population::random(size, problem.n, &mut rng);
        evaluate_population(problem, &mut pop, false).unwrap();
        pop
    }

    #[test]
    fn test_onemax_convergence() {
        let problem = OneMaxProblem { n: 20 };
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_generations(100)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_fitness >= 17.0,
            "expected fitness >= 17 for 20-bit OneMax, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_population_size_and_gene_length_invariant() {
        let problem = OneMaxProblem { n: 13 };
        let config = config().with_population_size(17);
        let result = GaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.population.len(), 17);
        assert!(result.population.iter().all(|i| i.len() == 13));
        assert!(result.population.all_evaluated());
        assert!(result.hall_of_fame.items().iter().all(|i| i.len() == 13));
    }

    #[test]
    fn test_logbook_and_history_lengths() {
        let problem = OneMaxProblem { n: 10 };
        let result = GaRunner::run(&problem, &config()).unwrap();

        // Initial generation plus one record per generation
        assert_eq!(result.generations, 40);
        assert_eq!(result.logbook.len(), 41);
        assert_eq!(result.fitness_history.len(), 41);
        for (g, record) in result.logbook.records().iter().enumerate() {
            assert_eq!(record.generation, g);
            assert!(record.max >= record.mean);
        }
        assert_eq!(result.logbook.records()[0].evaluations, 30);
    }

    #[test]
    fn test_hall_of_fame_best_is_monotonic() {
        let problem = OneMaxProblem { n: 30 };
        let config = config().with_mutation_rate(0.5);
        let result = GaRunner::run(&problem, &config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "hall of fame best should never decrease: {} < {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(result.best_fitness, *result.fitness_history.last().unwrap());
        for record in result.logbook.records() {
            assert!(result.best_fitness >= record.max);
        }
    }

    #[test]
    fn test_hall_of_fame_size() {
        let problem = OneMaxProblem { n: 12 };
        let config = config().with_hall_of_fame_size(5);
        let result = GaRunner::run(&problem, &config).unwrap();

        let items = result.hall_of_fame.items();
        assert_eq!(items.len(), 5);
        for pair in items.windows(2) {
            assert!(pair[0].fitness() >= pair[1].fitness());
        }
        assert_eq!(&result.best, &items[0]);
    }

    #[test]
    fn test_same_seed_is_deterministic() {
        let problem = OneMaxProblem { n: 16 };
        let a = GaRunner::run(&problem, &config()).unwrap();
        let b = GaRunner::run(&problem, &config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let problem = OneMaxProblem { n: 16 };
        let a = GaRunner::run(&problem, &config().with_seed(1)).unwrap();
        let b = GaRunner::run(&problem, &config().with_seed(2)).unwrap();
        assert_ne!(a.population, b.population);
    }

    #[test]
    fn test_unchanged_offspring_are_not_reevaluated() {
        let problem = OneMaxProblem { n: 8 };
        let config = config().with_crossover_rate(0.0).with_mutation_rate(0.0);
        let result = GaRunner::run(&problem, &config).unwrap();

        let records = result.logbook.records();
        assert_eq!(records[0].evaluations, 30);
        assert!(records[1..].iter().all(|r| r.evaluations == 0));
    }

    #[test]
    fn test_no_variation_only_copies_parents() {
        let problem = OneMaxProblem { n: 10 };
        let parents = evaluated_population(&problem, 20, 5);
        let config = config().with_crossover_rate(0.0).with_mutation_rate(0.0);
        let ops = Operators::default();
        let mut rng = StdRng::seed_from_u64(5);

        let mut offspring = select_offspring(&parents, &ops.selection, &mut rng);
        let selected = offspring.clone();
        vary(&mut offspring, &ops, &config, &mut rng);

        assert_eq!(offspring, selected);
        assert!(offspring.iter().all(|o| parents.iter().any(|p| p == o)));
    }

    #[test]
    fn test_certain_crossover_recombines_every_pair() {
        let problem = OneMaxProblem { n: 10 };
        // Alternate all-zero and all-one parents so every swap is visible.
        let mut offspring: Vec<Individual> = (0..20)
            .map(|i| Individual::new(vec![i % 2 == 1; problem.n]))
            .collect();
        let config = config().with_crossover_rate(1.0).with_mutation_rate(0.0);
        let mut rng = StdRng::seed_from_u64(8);

        vary(&mut offspring, &Operators::default(), &config, &mut rng);

        for pair in offspring.chunks(2) {
            assert!(pair[0].count_ones() > 0, "first child untouched");
            assert!(pair[1].count_ones() < problem.n, "second child untouched");
            assert_eq!(pair[0].count_ones() + pair[1].count_ones(), problem.n);
        }
    }

    #[test]
    fn test_certain_mutation_with_full_indpb_flips_every_gene() {
        let mut offspring: Vec<Individual> = (0..6)
            .map(|i| Individual::new(vec![i % 3 == 0, true, false, i % 2 == 0]))
            .collect();
        let before = offspring.clone();
        let ops = Operators::default().with_mutation(FlipBitMutation::with_indpb(1.0).unwrap());
        let config = config().with_crossover_rate(0.0).with_mutation_rate(1.0);
        let mut rng = StdRng::seed_from_u64(3);

        vary(&mut offspring, &ops, &config, &mut rng);

        for (after, before) in offspring.iter().zip(&before) {
            for (a, b) in after.genes().iter().zip(before.genes()) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_odd_population_size() {
        let problem = OneMaxProblem { n: 6 };
        let config = config().with_population_size(7).with_crossover_rate(1.0);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.population.len(), 7);
    }

    #[test]
    fn test_single_individual_population() {
        let problem = OneMaxProblem { n: 4 };
        let config = config().with_population_size(1);
        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.population.len(), 1);
        assert_eq!(result.logbook.len(), 41);
    }

    #[test]
    fn test_full_tournament_clones_best() {
        let problem = OneMaxProblem { n: 12 };
        let parents = evaluated_population(&problem, 10, 21);
        let best = parents.best().unwrap().clone();
        let mut rng = StdRng::seed_from_u64(0);

        let picks = select_offspring(&parents, &Tournament::new(10), &mut rng);

        assert_eq!(picks.len(), 10);
        assert!(picks.iter().all(|p| *p == best));
    }

    // ---- Configuration and evaluator failures ----

    #[test]
    fn test_rejects_invalid_config() {
        let problem = OneMaxProblem { n: 5 };
        let err = GaRunner::run(&problem, &config().with_population_size(0)).unwrap_err();
        assert!(matches!(err, GaError::Config(ConfigError::EmptyPopulation)));

        let err = GaRunner::run(&problem, &config().with_mutation_rate(2.0)).unwrap_err();
        assert!(matches!(
            err,
            GaError::Config(ConfigError::ProbabilityOutOfRange { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_problem() {
        let problem = OneMaxProblem { n: 0 };
        let err = GaRunner::run(&problem, &config()).unwrap_err();
        assert!(matches!(err, GaError::Config(ConfigError::NoItems)));
    }

    #[derive(Debug)]
    struct Broken;

    impl std::fmt::Display for Broken {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("evaluator exploded")
        }
    }

    impl std::error::Error for Broken {}

    /// Fails on the n-th evaluation.
    struct FailingProblem {
        fail_at: usize,
        calls: AtomicUsize,
    }

    impl GaProblem for FailingProblem {
        type Error = Broken;

        fn item_count(&self) -> usize {
            6
        }

        fn evaluate(&self, genes: &[bool]) -> Result<f64, Broken> {
            if self.calls.fetch_add(1, Ordering::SeqCst) == self.fail_at {
                return Err(Broken);
            }
            Ok(genes.iter().filter(|&&g| g).count() as f64)
        }
    }

    #[test]
    fn test_evaluator_error_aborts_run() {
        let problem = FailingProblem {
            fail_at: 45,
            calls: AtomicUsize::new(0),
        };
        let err = GaRunner::run(&problem, &config()).unwrap_err();

        match err {
            GaError::Evaluation { source, .. } => {
                assert_eq!(source.to_string(), "evaluator exploded");
            }
            other => panic!("expected evaluation error, got {other:?}"),
        }
        // Aborted right at the failing call
        assert_eq!(problem.calls.load(Ordering::SeqCst), 46);
    }

    #[test]
    fn test_evaluator_error_in_initial_population() {
        let problem = FailingProblem {
            fail_at: 0,
            calls: AtomicUsize::new(0),
        };
        let err = GaRunner::run(&problem, &config()).unwrap_err();
        assert!(matches!(err, GaError::Evaluation { index: 0, .. }));
    }

    struct NanProblem;

    impl GaProblem for NanProblem {
        type Error = std::convert::Infallible;

        fn item_count(&self) -> usize {
            3
        }

        fn evaluate(&self, _genes: &[bool]) -> Result<f64, Self::Error> {
            Ok(f64::NAN)
        }
    }

    #[test]
    fn test_non_finite_fitness_is_rejected() {
        let err = GaRunner::run(&NanProblem, &config()).unwrap_err();
        assert!(matches!(err, GaError::NonFiniteFitness { index: 0, .. }));
    }

    // ---- Generation callback ----

    struct CountingProblem {
        calls: AtomicUsize,
    }

    impl GaProblem for CountingProblem {
        type Error = std::convert::Infallible;

        fn item_count(&self) -> usize {
            5
        }

        fn evaluate(&self, genes: &[bool]) -> Result<f64, Self::Error> {
            Ok(genes.iter().filter(|&&g| g).count() as f64)
        }

        fn on_generation(&self, stats: &crate::ga::GenerationStats) {
            let expected = self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(stats.generation, expected);
        }
    }

    #[test]
    fn test_on_generation_called_every_generation() {
        let problem = CountingProblem {
            calls: AtomicUsize::new(0),
        };
        GaRunner::run(&problem, &config().with_max_generations(12)).unwrap();
        assert_eq!(problem.calls.load(Ordering::SeqCst), 13);
    }

    struct ConstantProblem(f64);

    impl GaProblem for ConstantProblem {
        type Error = std::convert::Infallible;

        fn item_count(&self) -> usize {
            4
        }

        fn evaluate(&self, _genes: &[bool]) -> Result<f64, Self::Error> {
            Ok(self.0)
        }
    }

    #[test]
    fn test_constant_fractional_fitness_keeps_mean_at_max() {
        let problem = ConstantProblem(0.1);
        let config = config().with_population_size(3).with_max_generations(1);
        let result = GaRunner::run(&problem, &config).unwrap();

        for record in result.logbook.records() {
            assert_eq!(record.max, 0.1);
            assert!(
                record.max >= record.mean,
                "gen {}: max {} < mean {}",
                record.generation,
                record.max,
                record.mean
            );
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let problem = OneMaxProblem { n: 20 };
        let sequential = GaRunner::run(&problem, &config()).unwrap();
        let parallel = GaRunner::run(&problem, &config().with_parallel(true)).unwrap();
        assert_eq!(sequential, parallel);
    }
}
