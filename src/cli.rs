//! CLI argument parsing for kata
//!
//! Uses clap derive. Global flags: --format, --quiet, --verbose,
//! --log-level, --log-json

use clap::{Args, Parser, Subcommand, ValueEnum};

use kata_core::format::OutputFormat;

/// Kata - classic algorithm implementations with a teaching CLI
#[derive(Parser, Debug)]
#[command(name = "kata")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Graph traversal and shortest paths
    Graph(GraphArgs),

    /// Sort values with a classic algorithm
    Sort {
        /// Sorting algorithm
        #[arg(value_enum)]
        algorithm: SortAlgorithm,

        /// Values to sort
        #[arg(required = true)]
        values: Vec<i64>,
    },

    /// Search for a target value
    Search {
        /// Search algorithm (binary requires sorted input)
        #[arg(value_enum)]
        algorithm: SearchAlgorithm,

        /// Value to search for
        #[arg(long, short)]
        target: i64,

        /// Values to search in
        #[arg(required = true)]
        values: Vec<i64>,
    },

    /// Fibonacci numbers
    Fib {
        /// Position in the sequence (0-indexed)
        n: u32,

        /// Implementation to use
        #[arg(long, value_enum, default_value = "optimized")]
        method: FibMethod,

        /// Print the first N numbers instead of the Nth
        #[arg(long)]
        sequence: bool,
    },

    /// Greatest common divisor of one or more numbers
    Gcd {
        #[arg(required = true)]
        numbers: Vec<i64>,
    },

    /// Least common multiple of one or more numbers
    Lcm {
        #[arg(required = true)]
        numbers: Vec<i64>,
    },

    /// Prime numbers: sieve up to a limit, primality check, factorization
    Primes {
        /// Sieve all primes up to this limit
        limit: Option<u64>,

        /// Check whether a single number is prime
        #[arg(long)]
        check: Option<u64>,

        /// Print the prime factorization of a number
        #[arg(long)]
        factorize: Option<u64>,
    },

    /// 0/1 knapsack over parallel weight/value lists
    Knapsack {
        /// Item weights (comma-separated or repeated)
        #[arg(long, required = true, value_delimiter = ',')]
        weights: Vec<u64>,

        /// Item values (comma-separated or repeated)
        #[arg(long, required = true, value_delimiter = ',')]
        values: Vec<u64>,

        /// Weight capacity
        #[arg(long)]
        capacity: u64,
    },
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Edge as FROM:TO (unweighted) or FROM:TO:WEIGHT (dijkstra)
    #[arg(long, action = clap::ArgAction::Append, value_name = "FROM:TO[:WEIGHT]")]
    pub edge: Vec<String>,

    /// Insert every edge in both directions
    #[arg(long)]
    pub undirected: bool,

    #[command(subcommand)]
    pub command: GraphCommands,
}

#[derive(Subcommand, Debug)]
pub enum GraphCommands {
    /// Breadth-first traversal order from a start vertex
    Bfs { start: String },

    /// Depth-first traversal order from a start vertex
    Dfs {
        start: String,

        /// Use the recursive form (depth is bounded by the call stack)
        #[arg(long)]
        recursive: bool,
    },

    /// Detect a directed cycle
    Cycle,

    /// Fewest-edges path between two vertices (unweighted BFS)
    Path { start: String, end: String },

    /// Shortest weighted distances, or a shortest path when END is given
    Dijkstra { start: String, end: Option<String> },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortAlgorithm {
    Bubble,
    Merge,
    Quick,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchAlgorithm {
    Linear,
    Binary,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibMethod {
    Recursive,
    Memoized,
    Dp,
    Optimized,
}

fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
        .map_err(|e: kata_core::error::KataError| e.to_string())
}
