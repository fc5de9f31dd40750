//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, XystonArgs};
use crate::error::Result;
use crate::search::RankedHit;

/// Result structure for query commands.
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResults {
    pub hits: Vec<RankedHit>,
    pub total_hits: u64,
    pub duration_ms: u64,
}

/// Output a result in the specified format.
pub fn output_result(message: &str, results: &QueryResults, args: &XystonArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, results, args),
        OutputFormat::Json => output_json(results, args),
    }
}

/// Output in human-readable format.
fn output_human(message: &str, results: &QueryResults, args: &XystonArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    if results.hits.is_empty() {
        println!("No matching documents.");
        return Ok(());
    }

    println!("Results ({} documents):", results.total_hits);
    println!("═══════════════════════");
    for (i, hit) in results.hits.iter().enumerate() {
        println!("{:>4}. {} (score: {})", i + 1, hit.doc, hit.score);
    }

    if args.verbosity() > 1 {
        println!();
        println!("Completed in {} ms", results.duration_ms);
    }

    Ok(())
}

/// Output in JSON format.
fn output_json(results: &QueryResults, args: &XystonArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(results)?
    } else {
        serde_json::to_string(results)?
    };
    println!("{json}");
    Ok(())
}
