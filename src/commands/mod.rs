//! Command implementations, one module per algorithm family

pub mod dispatch;
pub mod graph;
pub mod knapsack;
pub mod math;
pub mod search;
pub mod sort;
