//! Integration tests for combining term lookups into compound results.

use std::io::Write;

use xyston::error::{Result, XystonError};
use xyston::index::{MemoryIndex, TermCounts, TermIndex};
use xyston::search::{RankedHit, SearchResult};
use tempfile::NamedTempFile;

/// An index backend whose lookups always fail, simulating a connectivity
/// fault.
#[derive(Debug)]
struct UnreachableIndex;

impl TermIndex for UnreachableIndex {
    fn lookup(&self, _term: &str) -> Result<TermCounts> {
        Err(XystonError::index_unavailable("connection refused"))
    }
}

fn sample_index() -> MemoryIndex {
    let mut index = MemoryIndex::new();
    index.add_count("java", "https://en.wikipedia.org/wiki/Java", 5);
    index.add_count("java", "https://en.wikipedia.org/wiki/Coffee", 1);
    index.add_count("programming", "https://en.wikipedia.org/wiki/Java", 3);
    index.add_count(
        "programming",
        "https://en.wikipedia.org/wiki/Programming_language",
        4,
    );
    index.add_count("coffee", "https://en.wikipedia.org/wiki/Coffee", 6);
    index
}

#[test]
fn test_compound_query_chain() -> Result<()> {
    let index = sample_index();

    let java = SearchResult::from_term("java", &index)?;
    let programming = SearchResult::from_term("programming", &index)?;
    let coffee = SearchResult::from_term("coffee", &index)?;

    // (java AND programming): only the Java article matches both terms.
    let both = java.and(&programming);
    assert_eq!(both.len(), 1);
    assert_eq!(both.relevance("https://en.wikipedia.org/wiki/Java"), 8);

    // (java OR programming) MINUS coffee: the coffee article stays a
    // member but its score is penalized to zero.
    let either = java.or(&programming);
    let penalized = either.minus(&coffee);
    assert_eq!(penalized.len(), 3);
    assert_eq!(penalized.relevance("https://en.wikipedia.org/wiki/Java"), 8);
    assert_eq!(penalized.relevance("https://en.wikipedia.org/wiki/Coffee"), 0);
    assert!(penalized.contains("https://en.wikipedia.org/wiki/Coffee"));

    Ok(())
}

#[test]
fn test_rank_ascending_over_compound_result() -> Result<()> {
    let index = sample_index();

    let java = SearchResult::from_term("java", &index)?;
    let programming = SearchResult::from_term("programming", &index)?;

    let hits = java.or(&programming).rank();
    assert_eq!(
        hits,
        vec![
            RankedHit::new("https://en.wikipedia.org/wiki/Coffee", 1),
            RankedHit::new("https://en.wikipedia.org/wiki/Programming_language", 4),
            RankedHit::new("https://en.wikipedia.org/wiki/Java", 8),
        ]
    );

    Ok(())
}

#[test]
fn test_operand_reuse_across_combinations() -> Result<()> {
    let index = sample_index();

    let java = SearchResult::from_term("java", &index)?;
    let programming = SearchResult::from_term("programming", &index)?;

    // The same instance feeds several combinations; none of them may
    // disturb it.
    let _ = java.or(&programming);
    let _ = java.and(&programming);
    let _ = java.minus(&programming);

    assert_eq!(java.relevance("https://en.wikipedia.org/wiki/Java"), 5);
    assert_eq!(java.relevance("https://en.wikipedia.org/wiki/Coffee"), 1);
    assert_eq!(java.len(), 2);

    Ok(())
}

#[test]
fn test_empty_term_combines_as_documented() -> Result<()> {
    let index = sample_index();

    let java = SearchResult::from_term("java", &index)?;
    let nothing = SearchResult::from_term("no-such-term", &index)?;
    assert!(nothing.is_empty());

    assert_eq!(nothing.or(&java), java);
    assert!(nothing.and(&java).is_empty());
    assert!(nothing.minus(&java).is_empty());
    assert_eq!(java.minus(&nothing), java);

    Ok(())
}

#[test]
fn test_unreachable_index_propagates() {
    let err = SearchResult::from_term("java", &UnreachableIndex).unwrap_err();
    match err {
        XystonError::IndexUnavailable(msg) => assert!(msg.contains("connection refused")),
        other => panic!("Expected IndexUnavailable, got {other:?}"),
    }
}

#[test]
fn test_index_loaded_from_json_file() -> Result<()> {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "java": {{"https://example.com/a": 3, "https://example.com/b": 1}},
            "rust": {{"https://example.com/b": 2}}
        }}"#
    )
    .unwrap();

    let index = MemoryIndex::from_json_file(file.path())?;
    assert_eq!(index.term_count(), 2);

    let java = SearchResult::from_term("java", &index)?;
    let rust = SearchResult::from_term("rust", &index)?;
    let both = java.and(&rust);
    assert_eq!(both.len(), 1);
    assert_eq!(both.relevance("https://example.com/b"), 3);

    Ok(())
}

#[test]
fn test_malformed_index_file_is_unavailable() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let err = MemoryIndex::from_json_file(file.path()).unwrap_err();
    match err {
        XystonError::IndexUnavailable(_) => {}
        other => panic!("Expected IndexUnavailable, got {other:?}"),
    }
}
