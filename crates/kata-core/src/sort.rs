//! Classic comparison sorts: bubble, merge, quick

/// Bubble sort, in place, ascending.
///
/// Stops early once a full pass performs no swap.
pub fn bubble_sort<T: PartialOrd>(values: &mut [T]) {
    let n = values.len();

    for i in 0..n {
        let mut swapped = false;

        for j in 0..n.saturating_sub(i + 1) {
            if values[j] > values[j + 1] {
                values.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

/// Merge sort, returning a new sorted vector. Stable.
pub fn merge_sort<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let mid = values.len() / 2;
    let left = merge_sort(&values[..mid]);
    let right = merge_sort(&values[mid..]);
    merge(&left, &right)
}

/// Merge two sorted slices into one sorted vector
fn merge<T: PartialOrd + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        // <= keeps equal elements in left-first order (stability)
        if left[i] <= right[j] {
            result.push(left[i].clone());
            i += 1;
        } else {
            result.push(right[j].clone());
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}

/// Quick sort, returning a new sorted vector.
///
/// Three-way partition around the middle element, so duplicate pivots
/// are not re-sorted.
pub fn quick_sort<T: PartialOrd + Clone>(values: &[T]) -> Vec<T> {
    if values.len() <= 1 {
        return values.to_vec();
    }

    let pivot = values[values.len() / 2].clone();
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for value in values {
        if *value < pivot {
            less.push(value.clone());
        } else if *value > pivot {
            greater.push(value.clone());
        } else {
            equal.push(value.clone());
        }
    }

    let mut result = quick_sort(&less);
    result.extend(equal);
    result.extend(quick_sort(&greater));
    result
}

/// Quick sort, in place, Lomuto partition on the last element
pub fn quick_sort_inplace<T: PartialOrd>(values: &mut [T]) {
    if values.len() <= 1 {
        return;
    }

    let pivot_index = partition(values);
    let (left, right) = values.split_at_mut(pivot_index);
    quick_sort_inplace(left);
    quick_sort_inplace(&mut right[1..]);
}

fn partition<T: PartialOrd>(values: &mut [T]) -> usize {
    let high = values.len() - 1;
    let mut store = 0;

    for i in 0..high {
        if values[i] <= values[high] {
            values.swap(i, store);
            store += 1;
        }
    }

    values.swap(store, high);
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNSORTED: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];
    const SORTED: [i64; 7] = [11, 12, 22, 25, 34, 64, 90];

    #[test]
    fn test_bubble_sort() {
        let mut values = UNSORTED;
        bubble_sort(&mut values);
        assert_eq!(values, SORTED);
    }

    #[test]
    fn test_bubble_sort_already_sorted() {
        let mut values = SORTED;
        bubble_sort(&mut values);
        assert_eq!(values, SORTED);
    }

    #[test]
    fn test_merge_sort() {
        assert_eq!(merge_sort(&UNSORTED), SORTED);
    }

    #[test]
    fn test_merge_sort_is_stable() {
        #[derive(Clone, Debug, PartialEq)]
        struct Keyed {
            key: i32,
            tag: char,
        }
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.key.partial_cmp(&other.key)
            }
        }
        let keyed = |key, tag| Keyed { key, tag };

        let sorted = merge_sort(&[keyed(2, 'a'), keyed(1, 'b'), keyed(2, 'c'), keyed(1, 'd')]);
        assert_eq!(
            sorted,
            [keyed(1, 'b'), keyed(1, 'd'), keyed(2, 'a'), keyed(2, 'c')]
        );
    }

    #[test]
    fn test_quick_sort() {
        assert_eq!(quick_sort(&UNSORTED), SORTED);
    }

    #[test]
    fn test_quick_sort_with_duplicates() {
        assert_eq!(quick_sort(&[3, 1, 3, 2, 3]), [1, 2, 3, 3, 3]);
    }

    #[test]
    fn test_quick_sort_inplace() {
        let mut values = UNSORTED;
        quick_sort_inplace(&mut values);
        assert_eq!(values, SORTED);
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: [i64; 0] = [];
        bubble_sort(&mut empty);
        quick_sort_inplace(&mut empty);
        assert!(merge_sort(&empty).is_empty());
        assert_eq!(quick_sort(&[42]), [42]);
    }

    #[test]
    fn test_reverse_sorted_input() {
        let mut values = [5, 4, 3, 2, 1];
        quick_sort_inplace(&mut values);
        assert_eq!(values, [1, 2, 3, 4, 5]);
        assert_eq!(merge_sort(&[5, 4, 3, 2, 1]), [1, 2, 3, 4, 5]);
    }
}
