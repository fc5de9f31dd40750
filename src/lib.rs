//! # Xyston
//!
//! The result-combination layer of a boolean/ranked text-search engine.
//!
//! Single-term lookups against an inverted index produce sets of
//! (document, relevance-score) pairs; this crate combines them into
//! compound query results with set algebra (OR, AND, MINUS) under an
//! additive scoring convention, and projects a ranked ordering of the
//! combined results.
//!
//! ## Features
//!
//! - Pure-value [`SearchResult`](search::SearchResult) combinator: no
//!   operation mutates an operand
//! - Pluggable [`TermIndex`](index::TermIndex) backends
//! - In-memory index for tests and small corpora
//!
//! ## Example
//!
//! ```
//! use xyston::index::MemoryIndex;
//! use xyston::search::SearchResult;
//!
//! let mut index = MemoryIndex::new();
//! index.add_count("java", "https://example.com/a", 3);
//! index.add_count("programming", "https://example.com/a", 4);
//! index.add_count("programming", "https://example.com/b", 2);
//!
//! let java = SearchResult::from_term("java", &index)?;
//! let programming = SearchResult::from_term("programming", &index)?;
//!
//! let both = java.and(&programming);
//! assert_eq!(both.relevance("https://example.com/a"), 7);
//! # Ok::<(), xyston::error::XystonError>(())
//! ```

pub mod cli;
pub mod error;
pub mod index;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
