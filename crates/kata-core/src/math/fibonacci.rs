//! Fibonacci implementations with varying time complexity
//!
//! `n` is the 0-indexed position; results are `u64`, which holds every
//! Fibonacci number up to fib(93).

use std::collections::HashMap;

/// Naive recursion, O(2^n). Kept for teaching contrast; use the other
/// forms for anything but small `n`.
pub fn fibonacci_recursive(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fibonacci_recursive(n - 1) + fibonacci_recursive(n - 2)
}

/// Top-down memoized recursion, O(n). The memo table is call-scoped.
pub fn fibonacci_memoized(n: u32) -> u64 {
    fn go(n: u32, memo: &mut HashMap<u32, u64>) -> u64 {
        if n <= 1 {
            return u64::from(n);
        }
        if let Some(&value) = memo.get(&n) {
            return value;
        }
        let value = go(n - 1, memo) + go(n - 2, memo);
        memo.insert(n, value);
        value
    }

    go(n, &mut HashMap::new())
}

/// Bottom-up table, O(n) time and space
pub fn fibonacci_dp(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }

    let mut table = vec![0u64; n as usize + 1];
    table[1] = 1;
    for i in 2..=n as usize {
        table[i] = table[i - 1] + table[i - 2];
    }

    table[n as usize]
}

/// Rolling pair, O(n) time and O(1) space
pub fn fibonacci_optimized(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }

    let (mut prev2, mut prev1) = (0u64, 1u64);
    for _ in 2..=n {
        let current = prev1 + prev2;
        prev2 = prev1;
        prev1 = current;
    }

    prev1
}

/// The first `n` Fibonacci numbers
pub fn fibonacci_sequence(n: usize) -> Vec<u64> {
    let mut sequence = Vec::with_capacity(n);
    let (mut prev2, mut prev1) = (0u64, 1u64);

    for i in 0..n {
        match i {
            0 => sequence.push(0),
            1 => sequence.push(1),
            _ => {
                let current = prev1 + prev2;
                prev2 = prev1;
                prev1 = current;
                sequence.push(current);
            }
        }
    }

    sequence
}
