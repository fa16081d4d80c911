//! Unordered traversal: BFS, DFS (recursive and iterative), cycle detection

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;

use crate::graph::types::Graph;

/// Breadth-first traversal from `start`.
///
/// Visits each reachable vertex exactly once, in non-decreasing edge
/// distance from `start`; neighbors are discovered in listed order.
/// Vertices are marked visited at enqueue time so a vertex is never
/// enqueued twice.
pub fn bfs_traverse<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<V> = VecDeque::new();
    let mut order: Vec<V> = Vec::new();

    queue.push_back(start.clone());
    visited.insert(start.clone());

    while let Some(vertex) = queue.pop_front() {
        for neighbor in graph.neighbors(&vertex) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
        order.push(vertex);
    }

    tracing::debug!(visited = order.len(), "bfs_traverse");
    order
}

/// Depth-first pre-order traversal from `start`, recursive form.
///
/// Recursion depth grows with the longest simple path from `start`;
/// graphs deeper than the call stack will abort the process. Prefer
/// [`dfs_traverse_iterative`] when the graph shape is not known to be
/// bounded.
pub fn dfs_traverse<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    dfs_visit(graph, start, &mut visited, &mut order);
    tracing::debug!(visited = order.len(), "dfs_traverse");
    order
}

fn dfs_visit<V: Eq + Hash + Clone>(
    graph: &Graph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    order: &mut Vec<V>,
) {
    visited.insert(vertex.clone());
    order.push(vertex.clone());

    for neighbor in graph.neighbors(vertex) {
        if !visited.contains(neighbor) {
            dfs_visit(graph, neighbor, visited, order);
        }
    }
}

/// Depth-first pre-order traversal from `start` using an explicit stack.
///
/// Produces the same left-to-right order as [`dfs_traverse`]: neighbors
/// are pushed in reverse listed order, and a vertex is only marked
/// visited when popped and emitted, so duplicate pushes are possible and
/// duplicate pops are skipped.
pub fn dfs_traverse_iterative<V: Eq + Hash + Clone>(graph: &Graph<V>, start: &V) -> Vec<V> {
    let mut visited: HashSet<V> = HashSet::new();
    let mut stack: Vec<V> = vec![start.clone()];
    let mut order: Vec<V> = Vec::new();

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex.clone()) {
            continue;
        }

        for neighbor in graph.neighbors(&vertex).iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor.clone());
            }
        }
        order.push(vertex);
    }

    tracing::debug!(visited = order.len(), "dfs_traverse_iterative");
    order
}

/// True iff the graph, interpreted as directed, contains a cycle.
///
/// Every vertex is tried as a root so disconnected components are
/// covered. A cycle is a back edge to a vertex on the active recursion
/// path; edges into vertices finished in other branches are not cycles.
pub fn has_cycle<V: Eq + Hash + Clone>(graph: &Graph<V>) -> bool {
    let mut visited: HashSet<V> = HashSet::new();
    let mut on_path: HashSet<V> = HashSet::new();

    for vertex in graph.vertices() {
        if !visited.contains(vertex) && cycle_from(graph, vertex, &mut visited, &mut on_path) {
            return true;
        }
    }

    false
}

fn cycle_from<V: Eq + Hash + Clone>(
    graph: &Graph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    on_path: &mut HashSet<V>,
) -> bool {
    visited.insert(vertex.clone());
    on_path.insert(vertex.clone());

    for neighbor in graph.neighbors(vertex) {
        if !visited.contains(neighbor) {
            if cycle_from(graph, neighbor, visited, on_path) {
                return true;
            }
        } else if on_path.contains(neighbor) {
            // back edge
            return true;
        }
    }

    on_path.remove(vertex);
    false
}

#[cfg(test)]
mod tests;
