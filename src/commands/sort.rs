//! Sort subcommand

use kata_core::error::Result;
use kata_core::format::OutputFormat;
use kata_core::sort::{bubble_sort, merge_sort, quick_sort};

use crate::cli::SortAlgorithm;

pub fn run(algorithm: SortAlgorithm, values: &[i64], format: OutputFormat) -> Result<()> {
    let sorted = match algorithm {
        SortAlgorithm::Bubble => {
            let mut values = values.to_vec();
            bubble_sort(&mut values);
            values
        }
        SortAlgorithm::Merge => merge_sort(values),
        SortAlgorithm::Quick => quick_sort(values),
    };

    match format {
        OutputFormat::Human => {
            let rendered: Vec<String> = sorted.iter().map(ToString::to_string).collect();
            println!("{}", rendered.join(" "));
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "algorithm": algorithm_name(algorithm),
                    "sorted": sorted,
                })
            );
        }
    }

    Ok(())
}

fn algorithm_name(algorithm: SortAlgorithm) -> &'static str {
    match algorithm {
        SortAlgorithm::Bubble => "bubble",
        SortAlgorithm::Merge => "merge",
        SortAlgorithm::Quick => "quick",
    }
}
