//! 0/1 knapsack: recursive, tabulated, and item-reconstructing forms
//!
//! `weights` and `values` are parallel slices; callers supply them with
//! equal lengths.

/// Plain recursion over "include item n-1 or not", O(2^n)
pub fn knapsack_recursive(weights: &[u64], values: &[u64], capacity: u64) -> u64 {
    fn go(weights: &[u64], values: &[u64], capacity: u64, n: usize) -> u64 {
        if n == 0 || capacity == 0 {
            return 0;
        }

        if weights[n - 1] > capacity {
            return go(weights, values, capacity, n - 1);
        }

        let include = values[n - 1] + go(weights, values, capacity - weights[n - 1], n - 1);
        let exclude = go(weights, values, capacity, n - 1);
        include.max(exclude)
    }

    go(weights, values, capacity, weights.len())
}

/// Bottom-up table, O(n * capacity)
pub fn knapsack_dp(weights: &[u64], values: &[u64], capacity: u64) -> u64 {
    let table = build_table(weights, values, capacity);
    table[weights.len()][capacity as usize]
}

/// Maximum value plus the indices of the chosen items, recovered by
/// walking the table backwards: a row change at (i, w) means item i-1
/// was taken.
pub fn knapsack_with_items(weights: &[u64], values: &[u64], capacity: u64) -> (u64, Vec<usize>) {
    let n = weights.len();
    let table = build_table(weights, values, capacity);

    let mut chosen = Vec::new();
    let mut remaining = capacity as usize;
    for i in (1..=n).rev() {
        if table[i][remaining] != table[i - 1][remaining] {
            chosen.push(i - 1);
            remaining -= weights[i - 1] as usize;
        }
    }

    chosen.reverse();
    (table[n][capacity as usize], chosen)
}

fn build_table(weights: &[u64], values: &[u64], capacity: u64) -> Vec<Vec<u64>> {
    let n = weights.len();
    let capacity = capacity as usize;
    let mut table = vec![vec![0u64; capacity + 1]; n + 1];

    for i in 1..=n {
        for w in 1..=capacity {
            table[i][w] = if weights[i - 1] as usize <= w {
                let include = values[i - 1] + table[i - 1][w - weights[i - 1] as usize];
                include.max(table[i - 1][w])
            } else {
                table[i - 1][w]
            };
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEIGHTS: [u64; 4] = [2, 3, 4, 5];
    const VALUES: [u64; 4] = [3, 4, 5, 6];

    #[test]
    fn test_recursive_and_dp_agree() {
        for capacity in 0..=15 {
            assert_eq!(
                knapsack_recursive(&WEIGHTS, &VALUES, capacity),
                knapsack_dp(&WEIGHTS, &VALUES, capacity),
                "divergence at capacity {capacity}"
            );
        }
    }

    #[test]
    fn test_example_capacity_eight() {
        assert_eq!(knapsack_dp(&WEIGHTS, &VALUES, 8), 10);
    }

    #[test]
    fn test_with_items_selection() {
        let (value, chosen) = knapsack_with_items(&WEIGHTS, &VALUES, 8);
        assert_eq!(value, 10);
        let total_weight: u64 = chosen.iter().map(|&i| WEIGHTS[i]).sum();
        let total_value: u64 = chosen.iter().map(|&i| VALUES[i]).sum();
        assert!(total_weight <= 8);
        assert_eq!(total_value, value);
    }

    #[test]
    fn test_zero_capacity_and_no_items() {
        assert_eq!(knapsack_dp(&WEIGHTS, &VALUES, 0), 0);
        assert_eq!(knapsack_recursive(&[], &[], 10), 0);
        let (value, chosen) = knapsack_with_items(&[], &[], 10);
        assert_eq!(value, 0);
        assert!(chosen.is_empty());
    }

    #[test]
    fn test_item_heavier_than_capacity_is_skipped() {
        assert_eq!(knapsack_dp(&[100], &[999], 10), 0);
        assert_eq!(knapsack_recursive(&[100, 2], &[999, 5], 10), 5);
    }
}
