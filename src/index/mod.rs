//! Term index abstraction and backends.
//!
//! The combinator core never talks to a concrete index. It goes through
//! the [`TermIndex`] capability trait, so the backend can be swapped
//! (in-memory, networked, sharded) without touching the combination logic
//! and mocked out in tests.

pub mod memory;

pub use self::memory::MemoryIndex;

use std::fmt::Debug;

use ahash::AHashMap;

use crate::error::Result;

/// Per-document occurrence counts for a single term.
///
/// Maps a document identifier (an opaque string, typically a URL) to the
/// number of times the term occurs in that document.
pub type TermCounts = AHashMap<String, u64>;

/// A trait for inverted-index backends that resolve a single term.
///
/// Implementations must return an empty mapping, not an error, for a term
/// with no matches. Errors are reserved for connectivity and storage
/// faults, which callers surface as
/// [`XystonError::IndexUnavailable`](crate::error::XystonError::IndexUnavailable).
pub trait TermIndex: Send + Sync + Debug {
    /// Look up the per-document counts for `term`.
    fn lookup(&self, term: &str) -> Result<TermCounts>;
}
