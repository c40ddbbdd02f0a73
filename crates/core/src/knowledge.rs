//! Knowledge base trait — the retrieval boundary.
//!
//! The context engine does not embed, index, or rank anything itself. It
//! consumes pre-ranked matches through this trait and trusts the order each
//! implementation returns.
//!
//! Implementations: vector stores, keyword indexes, test stubs.

use serde::{Deserialize, Serialize};

use crate::error::RetrievalError;
use crate::query::{MetadataFilter, Query};

/// One retrieved candidate passage for a query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Provenance identifier, typically the source document id.
    pub id: String,

    /// The passage text.
    pub text: String,

    /// Human-readable source label (filename, URL, etc.).
    pub source: String,

    /// Relevance score assigned by the knowledge base. Explains the
    /// ordering; nothing downstream re-scores.
    pub score: f32,

    /// Arbitrary document metadata.
    #[serde(default, skip_serializing_if = "serde_json::Map::is_empty")]
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

impl Match {
    /// Create a match with empty metadata.
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        source: impl Into<String>,
        score: f32,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source: source.into(),
            score,
            metadata: serde_json::Map::new(),
        }
    }
}

/// The ordered matches returned for one query.
///
/// The order is the authoritative relevance order (best first), fixed by the
/// knowledge base. Selection downstream is a prefix/priority decision over
/// this order, never a re-sort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSet {
    /// The text of the query that produced these matches.
    pub query: String,

    /// Matches in descending relevance order.
    pub matches: Vec<Match>,
}

impl MatchSet {
    pub fn new(query: impl Into<String>, matches: Vec<Match>) -> Self {
        Self {
            query: query.into(),
            matches,
        }
    }

    /// A match set with no results.
    pub fn empty(query: impl Into<String>) -> Self {
        Self::new(query, Vec::new())
    }
}

/// The retrieval capability consumed by the context engine.
///
/// Implementations own embedding, indexing, and search. The contract: one
/// [`MatchSet`] per input query, order-aligned with the input, each
/// internally sorted best-match-first.
pub trait KnowledgeBase: Send + Sync {
    /// A human-readable name for this backend (e.g., "in_memory", "none").
    fn name(&self) -> &str;

    /// Retrieve matches for every query.
    ///
    /// `global_metadata_filter` applies to every query and wins over
    /// per-query filters on conflicting keys.
    fn query(
        &self,
        queries: &[Query],
        global_metadata_filter: Option<&MetadataFilter>,
    ) -> Result<Vec<MatchSet>, RetrievalError>;
}
