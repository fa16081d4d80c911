//! Knapsack subcommand

use kata_core::error::{KataError, Result};
use kata_core::format::OutputFormat;
use kata_core::knapsack::knapsack_with_items;

pub fn run(weights: &[u64], values: &[u64], capacity: u64, format: OutputFormat) -> Result<()> {
    if weights.len() != values.len() {
        return Err(KataError::UsageError(format!(
            "got {} weights but {} values",
            weights.len(),
            values.len()
        )));
    }

    let (max_value, chosen) = knapsack_with_items(weights, values, capacity);
    let total_weight: u64 = chosen.iter().map(|&i| weights[i]).sum();

    match format {
        OutputFormat::Human => {
            println!("maximum value: {max_value}");
            let items: Vec<String> = chosen.iter().map(ToString::to_string).collect();
            println!(
                "chosen items: [{}] (total weight {total_weight})",
                items.join(", ")
            );
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "max_value": max_value,
                    "chosen": chosen,
                    "total_weight": total_weight,
                })
            );
        }
    }

    Ok(())
}
