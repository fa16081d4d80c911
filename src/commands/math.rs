//! Number-theory subcommands: fib, gcd, lcm, primes

use kata_core::error::{KataError, Result};
use kata_core::format::OutputFormat;
use kata_core::math::{
    fibonacci_dp, fibonacci_memoized, fibonacci_optimized, fibonacci_recursive,
    fibonacci_sequence, gcd_multiple, is_prime, lcm_multiple, prime_factorization,
    sieve_of_eratosthenes,
};

use crate::cli::FibMethod;

pub fn run_fib(n: u32, method: FibMethod, sequence: bool, format: OutputFormat) -> Result<()> {
    if sequence {
        // Positions 0..=93 fit in u64, so the sequence may hold 94 numbers
        if n > 94 {
            return Err(KataError::UsageError(
                "sequences longer than 94 numbers overflow u64".to_string(),
            ));
        }
        let numbers = fibonacci_sequence(n as usize);
        return print_numbers(&numbers, format);
    }

    if n > 93 {
        return Err(KataError::UsageError(format!(
            "fib({n}) overflows u64 (maximum position is 93)"
        )));
    }

    let value = match method {
        FibMethod::Recursive => fibonacci_recursive(n),
        FibMethod::Memoized => fibonacci_memoized(n),
        FibMethod::Dp => fibonacci_dp(n),
        FibMethod::Optimized => fibonacci_optimized(n),
    };

    match format {
        OutputFormat::Human => println!("{value}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "n": n, "value": value })),
    }
    Ok(())
}

pub fn run_gcd(numbers: &[i64], format: OutputFormat) -> Result<()> {
    let result = gcd_multiple(numbers);
    match format {
        OutputFormat::Human => println!("{result}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "gcd": result })),
    }
    Ok(())
}

pub fn run_lcm(numbers: &[i64], format: OutputFormat) -> Result<()> {
    let result = lcm_multiple(numbers);
    match format {
        OutputFormat::Human => println!("{result}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "lcm": result })),
    }
    Ok(())
}

pub fn run_primes(
    limit: Option<u64>,
    check: Option<u64>,
    factorize: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    match (limit, check, factorize) {
        (Some(limit), None, None) => print_numbers(&sieve_of_eratosthenes(limit), format),
        (None, Some(n), None) => {
            let prime = is_prime(n);
            match format {
                OutputFormat::Human => {
                    println!("{n} is {}", if prime { "prime" } else { "not prime" });
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "n": n, "is_prime": prime }));
                }
            }
            Ok(())
        }
        (None, None, Some(n)) => print_numbers(&prime_factorization(n), format),
        _ => Err(KataError::UsageError(
            "primes takes exactly one of: LIMIT, --check, --factorize".to_string(),
        )),
    }
}

fn print_numbers(numbers: &[u64], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            let rendered: Vec<String> = numbers.iter().map(ToString::to_string).collect();
            println!("{}", rendered.join(" "));
        }
        OutputFormat::Json => println!("{}", serde_json::json!(numbers)),
    }
    Ok(())
}
