//! In-memory term index implementation for testing and small corpora.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, XystonError};
use crate::index::{TermCounts, TermIndex};

/// An in-memory term index.
///
/// Holds the full term → (document → count) table in a hash map. Useful
/// for tests and for small indexes loaded from a JSON file. Population is
/// explicit via [`insert_term`](MemoryIndex::insert_term) and
/// [`add_count`](MemoryIndex::add_count); this backend does no
/// tokenization or crawling of its own.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryIndex {
    /// The posting table: term → per-document counts.
    terms: AHashMap<String, TermCounts>,
}

impl MemoryIndex {
    /// Create a new empty memory index.
    pub fn new() -> Self {
        MemoryIndex {
            terms: AHashMap::new(),
        }
    }

    /// Load an index from a JSON file mapping term → {document → count}.
    ///
    /// I/O and parse failures are reported as
    /// [`XystonError::IndexUnavailable`]: a caller asking for an index it
    /// cannot read is in the same position as one whose backend is down.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            XystonError::index_unavailable(format!("cannot open {}: {e}", path.display()))
        })?;
        let terms: AHashMap<String, TermCounts> = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| {
                XystonError::index_unavailable(format!("cannot parse {}: {e}", path.display()))
            })?;
        Ok(MemoryIndex { terms })
    }

    /// Replace the counts for `term` wholesale.
    pub fn insert_term<S: Into<String>>(&mut self, term: S, counts: TermCounts) {
        self.terms.insert(term.into(), counts);
    }

    /// Add `count` occurrences of `term` in `doc`, accumulating onto any
    /// existing entry.
    pub fn add_count<S: Into<String>, D: Into<String>>(&mut self, term: S, doc: D, count: u64) {
        let entry = self
            .terms
            .entry(term.into())
            .or_default()
            .entry(doc.into())
            .or_insert(0);
        *entry += count;
    }

    /// Get the number of distinct terms in the index.
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Check if the index holds no terms.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl TermIndex for MemoryIndex {
    fn lookup(&self, term: &str) -> Result<TermCounts> {
        // A missing term is an empty result, never an error.
        Ok(self.terms.get(term).cloned().unwrap_or_default())
    }
}
