//! Knapsack GA CLI - Evolve a packing for the hiking-trip instance.

use knapsack_ga::ga::{GaConfig, GaProblem, GaRunner};
use knapsack_ga::knapsack::KnapsackProblem;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut config = GaConfig::default();
    if let Some(arg) = args.get(1) {
        match arg.parse::<u64>() {
            Ok(seed) => config = config.with_seed(seed),
            Err(_) => {
                eprintln!("Usage: {} [seed]", args[0]);
                eprintln!();
                eprintln!("Run the genetic algorithm on the 22-item hiking-trip knapsack.");
                eprintln!();
                eprintln!("Arguments:");
                eprintln!("  seed  Random seed (default: 42)");
                std::process::exit(1);
            }
        }
    }

    let problem = KnapsackProblem::hiking_trip();
    let result = GaRunner::run(&problem, &config).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    println!("gen\tnevals\tmax\tavg");
    for record in result.logbook.records() {
        println!(
            "{}\t{}\t{}\t{:.2}",
            record.generation, record.evaluations, record.max, record.mean
        );
    }

    println!("-- Best Individual = {}", result.best);
    println!("-- Best Fitness = {}", result.best_fitness);
    println!("-- Knapsack Items =");
    println!("{}", problem.describe(result.best.genes()));
}
