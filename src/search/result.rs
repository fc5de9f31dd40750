//! The `SearchResult` value type and its combining operations.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::index::TermIndex;
use crate::search::RankedHit;

/// The outcome of a query, single-term or compound: a mapping from
/// document identifier to a non-negative relevance score.
///
/// `SearchResult` is a pure value. Every combining operation reads its
/// operands and allocates a fresh result; no operation mutates an operand,
/// so the same instance can be reused across combination chains (and
/// across threads) freely. A document absent from the mapping has
/// relevance 0 by definition; absence is never stored as an entry by the
/// operations here, though an explicit 0 entry (e.g. produced by
/// [`minus`](SearchResult::minus) clamping) still counts as membership.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Per-document relevance scores.
    scores: AHashMap<String, u64>,
}

impl SearchResult {
    /// Create an empty result.
    pub fn new() -> Self {
        SearchResult {
            scores: AHashMap::new(),
        }
    }

    /// Wrap an existing score mapping.
    pub fn from_counts(scores: AHashMap<String, u64>) -> Self {
        SearchResult { scores }
    }

    /// Perform a single-term lookup against `index` and wrap the returned
    /// per-document counts as a result.
    ///
    /// The counts are taken as-is: no normalization or filtering. A term
    /// with no matches yields an empty result. A failing lookup propagates
    /// as [`XystonError::IndexUnavailable`](crate::error::XystonError::IndexUnavailable)
    /// rather than producing a partial result.
    pub fn from_term(term: &str, index: &dyn TermIndex) -> Result<Self> {
        let counts = index.lookup(term)?;
        Ok(SearchResult { scores: counts })
    }

    /// Look up the relevance of a document.
    ///
    /// Returns 0 for a document not in the result set; total over all
    /// identifiers, never fails.
    pub fn relevance(&self, doc: &str) -> u64 {
        self.scores.get(doc).copied().unwrap_or(0)
    }

    /// Compute the union of two results (boolean OR).
    ///
    /// The result set is the union of both key sets. A document present in
    /// both operands gets the sum of its scores; a document present in
    /// exactly one keeps that operand's score unchanged.
    pub fn or(&self, other: &SearchResult) -> SearchResult {
        let mut union = self.scores.clone();
        for (doc, score) in &other.scores {
            *union.entry(doc.clone()).or_insert(0) += score;
        }
        SearchResult { scores: union }
    }

    /// Compute the intersection of two results (boolean AND).
    ///
    /// Only documents with an entry in *both* underlying mappings survive;
    /// the implicit relevance 0 of an absent document does not count as
    /// membership. Each surviving document scores the sum of its scores in
    /// the two operands.
    pub fn and(&self, other: &SearchResult) -> SearchResult {
        let mut intersection = AHashMap::new();
        for (doc, score) in &self.scores {
            if let Some(other_score) = other.scores.get(doc) {
                intersection.insert(doc.clone(), score + other_score);
            }
        }
        SearchResult { scores: intersection }
    }

    /// Penalize this result by another (MINUS).
    ///
    /// The result keeps this operand's key set exactly: membership never
    /// shrinks, so this is not a pure set difference. A document that also
    /// appears in `other` has the other score subtracted, clamped at zero;
    /// a document only on this side keeps its score unchanged.
    pub fn minus(&self, other: &SearchResult) -> SearchResult {
        let mut remaining = AHashMap::new();
        for (doc, score) in &self.scores {
            let penalty = other.scores.get(doc).copied().unwrap_or(0);
            remaining.insert(doc.clone(), score.saturating_sub(penalty));
        }
        SearchResult { scores: remaining }
    }

    /// Produce the full result set ordered by ascending score.
    ///
    /// Weakest matches come first, strongest last; ties keep the
    /// underlying map's iteration order (no secondary key). Ascending is
    /// the defined contract; callers wanting a best-first presentation
    /// reverse the returned sequence themselves.
    pub fn rank(&self) -> Vec<RankedHit> {
        let mut hits: Vec<RankedHit> = self
            .scores
            .iter()
            .map(|(doc, score)| RankedHit::new(doc.clone(), *score))
            .collect();
        hits.sort_by_key(|hit| hit.score);
        hits
    }

    /// Get the number of documents in the result set.
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Check if the result set is empty.
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Check whether `doc` is a member of the result set.
    ///
    /// Distinct from `relevance(doc) > 0`: a clamped score of 0 is still
    /// membership.
    pub fn contains(&self, doc: &str) -> bool {
        self.scores.contains_key(doc)
    }

    /// Iterate over the (document, score) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.scores.iter().map(|(doc, score)| (doc.as_str(), *score))
    }
}
