//! Command line argument parsing for the Xyston CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Xyston - result combination for boolean/ranked text search
#[derive(Parser, Debug, Clone)]
#[command(name = "xyston")]
#[command(about = "Combine single-term search results with OR/AND/MINUS and rank them")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct XystonArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Path to a JSON index file mapping term -> {document -> count}
    #[arg(short, long, env = "XYSTON_INDEX")]
    pub index: PathBuf,

    /// Show strongest matches first (reverses the ascending ranking)
    #[arg(long)]
    pub best_first: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl XystonArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Rank the results of a single-term lookup
    Term(TermArgs),

    /// Union of two term lookups, scores summed
    Or(CombineArgs),

    /// Intersection of two term lookups, scores summed
    And(CombineArgs),

    /// Left term's results with the right term's scores subtracted
    Minus(CombineArgs),
}

/// Arguments for a single-term query
#[derive(Parser, Debug, Clone)]
pub struct TermArgs {
    /// The term to look up
    pub term: String,
}

/// Arguments for a binary combination of two term lookups
#[derive(Parser, Debug, Clone)]
pub struct CombineArgs {
    /// The left-hand term
    pub left: String,

    /// The right-hand term
    pub right: String,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
