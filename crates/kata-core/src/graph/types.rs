use std::collections::HashMap;
use std::hash::Hash;

/// Accumulated cost of a path through a weighted graph.
/// Edge weights must be non-negative; `INFINITY` marks an unreachable vertex.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// False exactly for the `INFINITY` sentinel of an unreachable vertex
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<u32> for Cost {
    fn from(weight: u32) -> Self {
        Cost(f64::from(weight))
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_finite() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "inf")
        }
    }
}

/// Directed unweighted graph as an adjacency list.
///
/// A vertex with no outgoing edges may be absent from the map; every
/// operation treats an absent vertex as having zero outgoing edges.
/// Undirected graphs are modelled by symmetric edge insertion.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    pub fn new() -> Self {
        Graph {
            adjacency: HashMap::new(),
        }
    }

    /// Add a directed edge; the target is appended in listed order
    pub fn add_edge(&mut self, from: V, to: V) {
        self.adjacency.entry(from).or_default().push(to);
    }

    /// Add an edge in both directions
    pub fn add_undirected_edge(&mut self, a: V, b: V) {
        self.add_edge(a.clone(), b.clone());
        self.add_edge(b, a);
    }

    /// Outgoing neighbors in listed order; empty for absent vertices
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    /// Vertices with at least one outgoing edge entry
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V: Eq + Hash + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, Vec<V>)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(iter: I) -> Self {
        Graph {
            adjacency: iter.into_iter().collect(),
        }
    }
}

/// Directed graph whose edges carry a non-negative weight.
///
/// Weight sign is a caller contract; no validation is performed.
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    adjacency: HashMap<V, Vec<(V, Cost)>>,
}

impl<V: Eq + Hash + Clone> WeightedGraph<V> {
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: HashMap::new(),
        }
    }

    pub fn add_edge(&mut self, from: V, to: V, weight: impl Into<Cost>) {
        self.adjacency
            .entry(from)
            .or_default()
            .push((to, weight.into()));
    }

    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: impl Into<Cost>) {
        let weight = weight.into();
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    /// Weighted outgoing edges in listed order; empty for absent vertices
    pub fn neighbors(&self, vertex: &V) -> &[(V, Cost)] {
        self.adjacency.get(vertex).map_or(&[], Vec::as_slice)
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<V: Eq + Hash + Clone> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash + Clone> FromIterator<(V, Vec<(V, Cost)>)> for WeightedGraph<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<(V, Cost)>)>>(iter: I) -> Self {
        WeightedGraph {
            adjacency: iter.into_iter().collect(),
        }
    }
}
