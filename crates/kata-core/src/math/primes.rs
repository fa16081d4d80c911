//! Prime predicates, the sieve, and factorization

/// Trial division up to sqrt(n)
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

/// All primes up to and including `limit`, via the Sieve of Eratosthenes
pub fn sieve_of_eratosthenes(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }

    let limit = limit as usize;
    let mut composite = vec![false; limit + 1];
    let mut i = 2;
    while i * i <= limit {
        if !composite[i] {
            let mut multiple = i * i;
            while multiple <= limit {
                composite[multiple] = true;
                multiple += i;
            }
        }
        i += 1;
    }

    (2..=limit)
        .filter(|&n| !composite[n])
        .map(|n| n as u64)
        .collect()
}

/// Prime factors of `n` in ascending order, with multiplicity.
/// `n < 2` has no prime factors.
pub fn prime_factorization(mut n: u64) -> Vec<u64> {
    let mut factors = Vec::new();

    while n % 2 == 0 && n > 0 {
        factors.push(2);
        n /= 2;
    }

    let mut factor = 3;
    while factor * factor <= n {
        while n % factor == 0 {
            factors.push(factor);
            n /= factor;
        }
        factor += 2;
    }

    if n > 1 {
        factors.push(n);
    }

    factors
}

/// The nth prime, 1-indexed (`nth_prime(1) == 2`)
pub fn nth_prime(n: usize) -> u64 {
    if n == 1 {
        return 2;
    }

    let mut count = 1;
    let mut candidate = 3;
    while count < n {
        if is_prime(candidate) {
            count += 1;
        }
        if count < n {
            candidate += 2;
        }
    }

    candidate
}

/// Primes in the inclusive range `[start, end]`
pub fn primes_in_range(start: u64, end: u64) -> Vec<u64> {
    (start.max(2)..=end).filter(|&n| is_prime(n)).collect()
}
