//! Number theory and sequence utilities

pub mod fibonacci;
pub mod gcd;
pub mod primes;

pub use fibonacci::{
    fibonacci_dp, fibonacci_memoized, fibonacci_optimized, fibonacci_recursive, fibonacci_sequence,
};
pub use gcd::{coprime, extended_gcd, gcd, gcd_multiple, gcd_recursive, lcm, lcm_multiple};
pub use primes::{is_prime, nth_prime, prime_factorization, primes_in_range, sieve_of_eratosthenes};
