//! Linear and binary search over slices
//!
//! Found positions are reported as `Option<usize>`; `None` replaces the
//! classic `-1` sentinel.

/// First index holding `target`, scanning left to right
pub fn linear_search<T: PartialEq>(values: &[T], target: &T) -> Option<usize> {
    values.iter().position(|value| value == target)
}

/// Every index holding `target`, in ascending order
pub fn linear_search_all<T: PartialEq>(values: &[T], target: &T) -> Vec<usize> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| (value == target).then_some(index))
        .collect()
}

/// Binary search over a sorted slice, iterative form.
///
/// The slice must be sorted ascending; which index is returned for
/// duplicated targets is unspecified.
pub fn binary_search<T: PartialOrd>(values: &[T], target: &T) -> Option<usize> {
    let mut left = 0usize;
    let mut right = values.len().checked_sub(1)?;

    while left <= right {
        let mid = left + (right - left) / 2;

        if values[mid] == *target {
            return Some(mid);
        } else if values[mid] < *target {
            left = mid + 1;
        } else {
            right = mid.checked_sub(1)?;
        }
    }

    None
}

/// Binary search over a sorted slice, recursive form
pub fn binary_search_recursive<T: PartialOrd>(values: &[T], target: &T) -> Option<usize> {
    fn go<T: PartialOrd>(values: &[T], target: &T, left: usize, right: usize) -> Option<usize> {
        if left > right {
            return None;
        }

        let mid = left + (right - left) / 2;
        if values[mid] == *target {
            Some(mid)
        } else if values[mid] < *target {
            go(values, target, mid + 1, right)
        } else {
            go(values, target, left, mid.checked_sub(1)?)
        }
    }

    go(values, target, 0, values.len().checked_sub(1)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SORTED: [i64; 7] = [11, 12, 22, 25, 34, 64, 90];

    #[test]
    fn test_linear_search_found() {
        let values = [64, 34, 25, 12, 22, 11, 90, 25];
        assert_eq!(linear_search(&values, &25), Some(2));
        assert_eq!(linear_search(&values, &7), None);
    }

    #[test]
    fn test_linear_search_all() {
        let values = [64, 34, 25, 12, 22, 11, 90, 25];
        assert_eq!(linear_search_all(&values, &25), [2, 7]);
        assert!(linear_search_all(&values, &7).is_empty());
    }

    #[test]
    fn test_binary_search_found() {
        for (index, value) in SORTED.iter().enumerate() {
            assert_eq!(binary_search(&SORTED, value), Some(index));
            assert_eq!(binary_search_recursive(&SORTED, value), Some(index));
        }
    }

    #[test]
    fn test_binary_search_missing() {
        for target in [10, 13, 33, 91] {
            assert_eq!(binary_search(&SORTED, &target), None);
            assert_eq!(binary_search_recursive(&SORTED, &target), None);
        }
    }

    #[test]
    fn test_binary_search_empty_and_single() {
        let empty: [i64; 0] = [];
        assert_eq!(binary_search(&empty, &1), None);
        assert_eq!(binary_search_recursive(&empty, &1), None);
        assert_eq!(binary_search(&[5], &5), Some(0));
        assert_eq!(binary_search(&[5], &6), None);
    }

    #[test]
    fn test_binary_search_below_first_element() {
        // Walks the left boundary down past index 0 without underflow
        assert_eq!(binary_search(&SORTED, &1), None);
        assert_eq!(binary_search_recursive(&SORTED, &1), None);
    }
}
