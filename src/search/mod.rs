//! Search-result combination: set algebra over scored document sets.

pub mod result;

pub use self::result::SearchResult;

use serde::{Deserialize, Serialize};

/// A ranked entry containing a document identifier and its score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedHit {
    /// The document identifier (e.g. a URL).
    pub doc: String,
    /// The relevance score.
    pub score: u64,
}

impl RankedHit {
    /// Create a new ranked hit.
    pub fn new<S: Into<String>>(doc: S, score: u64) -> Self {
        RankedHit {
            doc: doc.into(),
            score,
        }
    }
}
