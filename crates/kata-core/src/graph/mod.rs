//! Graph traversal and path-finding operations
//!
//! Provides the classic graph algorithms over an adjacency-list model:
//! - BFS and DFS traversal (plus directed-cycle detection)
//! - BFS shortest path for unweighted graphs
//! - Dijkstra shortest paths for non-negative-weighted graphs

pub mod bfs;
pub mod dijkstra;
pub mod traversal;
pub mod types;

pub use bfs::bfs_find_path;
pub use dijkstra::{dijkstra_distances, dijkstra_with_path};
pub use traversal::{bfs_traverse, dfs_traverse, dfs_traverse_iterative, has_cycle};
pub use types::{Cost, Graph, WeightedGraph};
