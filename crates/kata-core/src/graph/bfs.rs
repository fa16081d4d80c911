//! BFS shortest path for unweighted graphs

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::types::Graph;

/// Minimum-edge-count path from `start` to `end`, or `None` if `end` is
/// unreachable.
///
/// Each frontier entry carries the partial path accumulated so far, so
/// the first discovery of `end` yields the answer: BFS discovers
/// vertices in non-decreasing distance order, making that first path a
/// shortest one. `start == end` short-circuits to the single-vertex
/// path without traversal.
pub fn bfs_find_path<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V, end: &V) -> Option<Vec<V>> {
    if start == end {
        return Some(vec![start.clone()]);
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<(V, Vec<V>)> = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back((start.clone(), vec![start.clone()]));

    while let Some((vertex, path)) = queue.pop_front() {
        for neighbor in graph.neighbors(&vertex) {
            if visited.insert(neighbor.clone()) {
                let mut next_path = path.clone();
                next_path.push(neighbor.clone());

                if neighbor == end {
                    tracing::debug!(path_length = next_path.len() - 1, "bfs_find_path");
                    return Some(next_path);
                }

                queue.push_back((neighbor.clone(), next_path));
            }
        }
    }

    tracing::debug!("bfs_find_path: no path");
    None
}
