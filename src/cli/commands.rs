//! Command implementations for the Xyston CLI.

use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, XystonError};
use crate::index::MemoryIndex;
use crate::search::SearchResult;

/// Execute a CLI command.
pub fn execute_command(args: XystonArgs) -> Result<()> {
    validate_command(&args.command)?;
    let index = load_index(&args)?;

    match &args.command {
        Command::Term(term_args) => query_term(term_args.clone(), &index, &args),
        Command::Or(combine_args) => query_or(combine_args.clone(), &index, &args),
        Command::And(combine_args) => query_and(combine_args.clone(), &index, &args),
        Command::Minus(combine_args) => query_minus(combine_args.clone(), &index, &args),
    }
}

/// Reject blank search terms before touching the index.
fn validate_command(command: &Command) -> Result<()> {
    match command {
        Command::Term(term_args) => validate_terms(&[&term_args.term]),
        Command::Or(combine_args) | Command::And(combine_args) | Command::Minus(combine_args) => {
            validate_terms(&[&combine_args.left, &combine_args.right])
        }
    }
}

/// Check that every term has at least one non-whitespace character.
fn validate_terms(terms: &[&str]) -> Result<()> {
    for term in terms {
        if term.trim().is_empty() {
            return Err(XystonError::invalid_operation(
                "search term must not be empty",
            ));
        }
    }
    Ok(())
}

/// Load the term index named on the command line.
fn load_index(args: &XystonArgs) -> Result<MemoryIndex> {
    if args.verbosity() > 1 {
        println!("Loading index from: {}", args.index.display());
    }
    let index = MemoryIndex::from_json_file(&args.index)?;
    if args.verbosity() > 1 {
        println!("Loaded {} terms", index.term_count());
    }
    Ok(index)
}

/// Run a single-term query.
fn query_term(term_args: TermArgs, index: &MemoryIndex, cli_args: &XystonArgs) -> Result<()> {
    let start = Instant::now();
    let result = SearchResult::from_term(&term_args.term, index)?;
    let results = build_query_results(&result, start, cli_args);

    output_result(&format!("Query: {}", term_args.term), &results, cli_args)
}

/// Run an OR combination of two term lookups.
fn query_or(combine_args: CombineArgs, index: &MemoryIndex, cli_args: &XystonArgs) -> Result<()> {
    let start = Instant::now();
    let left = SearchResult::from_term(&combine_args.left, index)?;
    let right = SearchResult::from_term(&combine_args.right, index)?;
    let results = build_query_results(&left.or(&right), start, cli_args);

    let message = format!("Query: {} OR {}", combine_args.left, combine_args.right);
    output_result(&message, &results, cli_args)
}

/// Run an AND combination of two term lookups.
fn query_and(combine_args: CombineArgs, index: &MemoryIndex, cli_args: &XystonArgs) -> Result<()> {
    let start = Instant::now();
    let left = SearchResult::from_term(&combine_args.left, index)?;
    let right = SearchResult::from_term(&combine_args.right, index)?;
    let results = build_query_results(&left.and(&right), start, cli_args);

    let message = format!("Query: {} AND {}", combine_args.left, combine_args.right);
    output_result(&message, &results, cli_args)
}

/// Run a MINUS combination of two term lookups.
fn query_minus(combine_args: CombineArgs, index: &MemoryIndex, cli_args: &XystonArgs) -> Result<()> {
    let start = Instant::now();
    let left = SearchResult::from_term(&combine_args.left, index)?;
    let right = SearchResult::from_term(&combine_args.right, index)?;
    let results = build_query_results(&left.minus(&right), start, cli_args);

    let message = format!("Query: {} MINUS {}", combine_args.left, combine_args.right);
    output_result(&message, &results, cli_args)
}

/// Rank a combined result for presentation.
///
/// The core contract is ascending by score; `--best-first` reverses at
/// this presentation layer only.
fn build_query_results(result: &SearchResult, start: Instant, args: &XystonArgs) -> QueryResults {
    let mut hits = result.rank();
    if args.best_first {
        hits.reverse();
    }
    QueryResults {
        total_hits: hits.len() as u64,
        hits,
        duration_ms: start.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_command_accepts_terms() {
        let command = Command::And(CombineArgs {
            left: "java".to_string(),
            right: "programming".to_string(),
        });
        assert!(validate_command(&command).is_ok());
    }

    #[test]
    fn test_validate_command_rejects_blank_term() {
        let command = Command::Term(TermArgs {
            term: "   ".to_string(),
        });
        let err = validate_command(&command).unwrap_err();
        match err {
            XystonError::InvalidOperation(msg) => assert!(msg.contains("empty")),
            other => panic!("Expected InvalidOperation, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_command_rejects_blank_right_operand() {
        let command = Command::Minus(CombineArgs {
            left: "java".to_string(),
            right: String::new(),
        });
        assert!(validate_command(&command).is_err());
    }
}
