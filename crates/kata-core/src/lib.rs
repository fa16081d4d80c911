//! Kata Core Library
//!
//! Classic, self-contained algorithm implementations: graph traversal and
//! shortest paths, sorting, searching, number theory, dynamic programming,
//! and matrix arithmetic.

pub mod error;
pub mod format;
pub mod graph;
pub mod knapsack;
pub mod logging;
pub mod math;
pub mod matrix;
pub mod search;
pub mod sort;
