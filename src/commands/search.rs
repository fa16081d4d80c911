//! Search subcommand

use kata_core::error::{KataError, Result};
use kata_core::format::OutputFormat;
use kata_core::search::{binary_search, linear_search};

use crate::cli::SearchAlgorithm;

pub fn run(
    algorithm: SearchAlgorithm,
    target: i64,
    values: &[i64],
    format: OutputFormat,
) -> Result<()> {
    let index = match algorithm {
        SearchAlgorithm::Linear => linear_search(values, &target),
        SearchAlgorithm::Binary => {
            if values.windows(2).any(|pair| pair[0] > pair[1]) {
                return Err(KataError::UsageError(
                    "binary search requires sorted input".to_string(),
                ));
            }
            binary_search(values, &target)
        }
    };

    match format {
        OutputFormat::Human => match index {
            Some(index) => println!("found at index {index}"),
            None => println!("not found"),
        },
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "target": target,
                    "found": index.is_some(),
                    "index": index,
                })
            );
        }
    }

    Ok(())
}
