//! Graph subcommands: traversal, cycle detection, shortest paths

use std::collections::BTreeMap;

use kata_core::error::{KataError, Result};
use kata_core::format::OutputFormat;
use kata_core::graph::{
    bfs_find_path, bfs_traverse, dfs_traverse, dfs_traverse_iterative, dijkstra_distances,
    dijkstra_with_path, has_cycle, Cost, Graph, WeightedGraph,
};

use crate::cli::{GraphArgs, GraphCommands};

pub fn run(args: &GraphArgs, format: OutputFormat) -> Result<()> {
    match &args.command {
        GraphCommands::Bfs { start } => {
            let graph = parse_unweighted(&args.edge, args.undirected)?;
            print_order("bfs", start, &bfs_traverse(&graph, start), format);
        }
        GraphCommands::Dfs { start, recursive } => {
            let graph = parse_unweighted(&args.edge, args.undirected)?;
            let order = if *recursive {
                dfs_traverse(&graph, start)
            } else {
                dfs_traverse_iterative(&graph, start)
            };
            print_order("dfs", start, &order, format);
        }
        GraphCommands::Cycle => {
            let graph = parse_unweighted(&args.edge, args.undirected)?;
            let cyclic = has_cycle(&graph);
            match format {
                OutputFormat::Human => {
                    println!("{}", if cyclic { "cycle detected" } else { "no cycle" });
                }
                OutputFormat::Json => {
                    println!("{}", serde_json::json!({ "has_cycle": cyclic }));
                }
            }
        }
        GraphCommands::Path { start, end } => {
            let graph = parse_unweighted(&args.edge, args.undirected)?;
            print_path(start, end, bfs_find_path(&graph, start, end), format);
        }
        GraphCommands::Dijkstra { start, end: None } => {
            let graph = parse_weighted(&args.edge, args.undirected)?;
            // BTreeMap for stable vertex order in the output
            let distances: BTreeMap<String, Cost> =
                dijkstra_distances(&graph, start).into_iter().collect();
            print_distances(start, &distances, format);
        }
        GraphCommands::Dijkstra {
            start,
            end: Some(end),
        } => {
            let graph = parse_weighted(&args.edge, args.undirected)?;
            let (distance, path) = dijkstra_with_path(&graph, start, end);
            print_weighted_path(start, end, distance, path, format);
        }
    }

    Ok(())
}

fn parse_unweighted(edges: &[String], undirected: bool) -> Result<Graph<String>> {
    let mut graph = Graph::new();
    for raw in edges {
        let (from, to) = match raw.split(':').collect::<Vec<_>>()[..] {
            [from, to] if !from.is_empty() && !to.is_empty() => (from, to),
            _ => {
                return Err(KataError::UsageError(format!(
                    "invalid edge '{raw}' (expected FROM:TO)"
                )))
            }
        };
        if undirected {
            graph.add_undirected_edge(from.to_string(), to.to_string());
        } else {
            graph.add_edge(from.to_string(), to.to_string());
        }
    }
    Ok(graph)
}

fn parse_weighted(edges: &[String], undirected: bool) -> Result<WeightedGraph<String>> {
    let mut graph = WeightedGraph::new();
    for raw in edges {
        let (from, to, weight) = match raw.split(':').collect::<Vec<_>>()[..] {
            [from, to] if !from.is_empty() && !to.is_empty() => (from, to, Cost::from(1u32)),
            [from, to, weight] if !from.is_empty() && !to.is_empty() => {
                let weight: f64 = weight.parse().map_err(|_| {
                    KataError::UsageError(format!("invalid edge weight in '{raw}'"))
                })?;
                if weight < 0.0 {
                    return Err(KataError::UsageError(format!(
                        "negative edge weight in '{raw}' (dijkstra requires non-negative weights)"
                    )));
                }
                (from, to, Cost::new(weight))
            }
            _ => {
                return Err(KataError::UsageError(format!(
                    "invalid edge '{raw}' (expected FROM:TO[:WEIGHT])"
                )))
            }
        };
        if undirected {
            graph.add_undirected_edge(from.to_string(), to.to_string(), weight);
        } else {
            graph.add_edge(from.to_string(), to.to_string(), weight);
        }
    }
    Ok(graph)
}

fn print_order(operation: &str, start: &str, order: &[String], format: OutputFormat) {
    match format {
        OutputFormat::Human => println!("{}", order.join(" -> ")),
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "operation": operation,
                    "start": start,
                    "order": order,
                })
            );
        }
    }
}

fn print_path(start: &str, end: &str, path: Option<Vec<String>>, format: OutputFormat) {
    match format {
        OutputFormat::Human => match &path {
            Some(path) => println!("{} ({} edges)", path.join(" -> "), path.len() - 1),
            None => println!("no path from {start} to {end}"),
        },
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "start": start,
                    "end": end,
                    "found": path.is_some(),
                    "path_length": path.as_ref().map(|p| p.len() - 1),
                    "path": path,
                })
            );
        }
    }
}

fn print_distances(start: &str, distances: &BTreeMap<String, Cost>, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            for (vertex, distance) in distances {
                println!("{vertex}: {distance}");
            }
        }
        OutputFormat::Json => {
            // INFINITY has no JSON encoding; unreachable becomes null
            let distances: BTreeMap<&String, Option<f64>> = distances
                .iter()
                .map(|(vertex, distance)| {
                    (vertex, distance.is_finite().then(|| distance.value()))
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({ "start": start, "distances": distances })
            );
        }
    }
}

fn print_weighted_path(
    start: &str,
    end: &str,
    distance: Cost,
    path: Option<Vec<String>>,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Human => match &path {
            Some(path) => println!("distance {}: {}", distance, path.join(" -> ")),
            None => println!("no path from {start} to {end}"),
        },
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "start": start,
                    "end": end,
                    "found": path.is_some(),
                    "distance": distance.is_finite().then(|| distance.value()),
                    "path": path,
                })
            );
        }
    }
}
