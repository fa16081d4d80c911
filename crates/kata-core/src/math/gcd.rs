//! Euclidean GCD, LCM, and the extended form

/// Greatest common divisor, iterative Euclid. Always non-negative.
pub fn gcd(mut a: i64, mut b: i64) -> i64 {
    while b != 0 {
        let remainder = a % b;
        a = b;
        b = remainder;
    }
    a.abs()
}

/// Greatest common divisor, recursive Euclid
pub fn gcd_recursive(a: i64, b: i64) -> i64 {
    if b == 0 {
        a.abs()
    } else {
        gcd_recursive(b, a % b)
    }
}

/// GCD folded over a slice; empty input yields 0
pub fn gcd_multiple(numbers: &[i64]) -> i64 {
    numbers.iter().copied().fold(0, gcd)
}

/// Least common multiple; 0 when either input is 0
pub fn lcm(a: i64, b: i64) -> i64 {
    if a == 0 || b == 0 {
        return 0;
    }
    (a / gcd(a, b) * b).abs()
}

/// LCM folded over a slice; empty input yields 0
pub fn lcm_multiple(numbers: &[i64]) -> i64 {
    match numbers.split_first() {
        Some((&first, rest)) => rest.iter().copied().fold(first, lcm).abs(),
        None => 0,
    }
}

/// Extended Euclid: `(g, x, y)` with `a*x + b*y == g`
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        return (a, 1, 0);
    }

    let (g, x1, y1) = extended_gcd(b, a % b);
    (g, y1, x1 - (a / b) * y1)
}

/// True when `a` and `b` share no factor beyond 1
pub fn coprime(a: i64, b: i64) -> bool {
    gcd(a, b) == 1
}
