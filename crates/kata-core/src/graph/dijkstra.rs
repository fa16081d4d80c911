//! Dijkstra shortest paths for non-negative-weighted graphs
//!
//! Uses a lazy-deletion binary heap: relaxation pushes duplicate entries
//! instead of decreasing keys, and stale entries are discarded when an
//! already-finalized vertex is popped. Because weights are non-negative,
//! a vertex's recorded distance is optimal the first time it is popped.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::hash::Hash;

use crate::graph::types::{Cost, WeightedGraph};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
pub struct HeapEntry<V> {
    pub vertex: V,
    pub accumulated_cost: Cost,
}

impl<V: Eq> PartialEq for HeapEntry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
            && self.accumulated_cost.value() == other.accumulated_cost.value()
    }
}

impl<V: Eq> Eq for HeapEntry<V> {}

impl<V: Eq> PartialOrd for HeapEntry<V> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Eq> Ord for HeapEntry<V> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated_cost
            .value()
            .partial_cmp(&other.accumulated_cost.value())
            .unwrap()
    }
}

/// Minimum total edge weight from `start` to every vertex.
///
/// Reachable vertices map to their optimal distance; unreachable
/// vertices that appear as adjacency keys map to `Cost::INFINITY`
/// (vertices known only as edge targets stay absent, which also means
/// unreachable). Weights must be non-negative; negative weights are a
/// contract violation with undefined results.
pub fn dijkstra_distances<V: Eq + Hash + Clone>(
    graph: &WeightedGraph<V>,
    start: &V,
) -> HashMap<V, Cost> {
    let mut distances: HashMap<V, Cost> = graph
        .vertices()
        .map(|vertex| (vertex.clone(), Cost::INFINITY))
        .collect();
    distances.insert(start.clone(), Cost::ZERO);

    let mut visited: HashSet<V> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: start.clone(),
        accumulated_cost: Cost::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        vertex,
        accumulated_cost,
    })) = heap.pop()
    {
        // Stale duplicate entry for an already-finalized vertex
        if !visited.insert(vertex.clone()) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&vertex) {
            let candidate = accumulated_cost + *weight;
            let best = distances
                .get(neighbor)
                .copied()
                .unwrap_or(Cost::INFINITY);

            if candidate < best {
                distances.insert(neighbor.clone(), candidate);
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor.clone(),
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    tracing::debug!(finalized = visited.len(), "dijkstra_distances");
    distances
}

/// Minimum-weight path from `start` to `end`: `(distance, path)`.
///
/// Same relaxation as [`dijkstra_distances`] plus a predecessor table,
/// with an early exit the moment `end` is popped (its distance is
/// already optimal then). The path is rebuilt by walking predecessors
/// back from `end`; a walk that does not reach `start` means `end` was
/// unreachable and the path is `None` alongside an infinite distance.
pub fn dijkstra_with_path<V: Eq + Hash + Clone>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
) -> (Cost, Option<Vec<V>>) {
    let mut distances: HashMap<V, Cost> = graph
        .vertices()
        .map(|vertex| (vertex.clone(), Cost::INFINITY))
        .collect();
    distances.insert(start.clone(), Cost::ZERO);

    let mut previous: HashMap<V, V> = HashMap::new();
    let mut visited: HashSet<V> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<V>>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: start.clone(),
        accumulated_cost: Cost::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        vertex,
        accumulated_cost,
    })) = heap.pop()
    {
        if vertex == *end {
            break;
        }

        if !visited.insert(vertex.clone()) {
            continue;
        }

        for (neighbor, weight) in graph.neighbors(&vertex) {
            let candidate = accumulated_cost + *weight;
            let best = distances
                .get(neighbor)
                .copied()
                .unwrap_or(Cost::INFINITY);

            if candidate < best {
                distances.insert(neighbor.clone(), candidate);
                previous.insert(neighbor.clone(), vertex.clone());
                heap.push(Reverse(HeapEntry {
                    vertex: neighbor.clone(),
                    accumulated_cost: candidate,
                }));
            }
        }
    }

    let distance = distances.get(end).copied().unwrap_or(Cost::INFINITY);
    (distance, reconstruct_path(&previous, start, end))
}

/// Walk predecessor links back from `end` and reverse; `None` when the
/// walk does not begin at `start` (unreachable `end`)
fn reconstruct_path<V: Eq + Hash + Clone>(
    previous: &HashMap<V, V>,
    start: &V,
    end: &V,
) -> Option<Vec<V>> {
    let mut path = vec![end.clone()];
    let mut current = end;

    while let Some(predecessor) = previous.get(current) {
        path.push(predecessor.clone());
        current = predecessor;
    }

    path.reverse();
    if path.first() == Some(start) {
        Some(path)
    } else {
        None
    }
}
