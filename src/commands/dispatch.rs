//! Route a parsed CLI invocation to its command implementation

use kata_core::error::Result;

use crate::cli::{Cli, Commands};

pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Graph(args) => super::graph::run(args, cli.format),
        Commands::Sort { algorithm, values } => super::sort::run(*algorithm, values, cli.format),
        Commands::Search {
            algorithm,
            target,
            values,
        } => super::search::run(*algorithm, *target, values, cli.format),
        Commands::Fib {
            n,
            method,
            sequence,
        } => super::math::run_fib(*n, *method, *sequence, cli.format),
        Commands::Gcd { numbers } => super::math::run_gcd(numbers, cli.format),
        Commands::Lcm { numbers } => super::math::run_lcm(numbers, cli.format),
        Commands::Primes {
            limit,
            check,
            factorize,
        } => super::math::run_primes(*limit, *check, *factorize, cli.format),
        Commands::Knapsack {
            weights,
            values,
            capacity,
        } => super::knapsack::run(weights, values, *capacity, cli.format),
    }
}
