//! In-memory backend — useful for testing and small corpora.

use baler_core::{KnowledgeBase, Match, MatchSet, MetadataFilter, Query, RetrievalError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const DEFAULT_TOP_K: usize = 10;

/// A document held by the in-memory knowledge base.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document id.
    pub id: String,

    /// The passage text.
    pub text: String,

    /// Human-readable source label.
    pub source: String,

    /// Namespace the document belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Arbitrary metadata matched by filters.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub metadata: Map<String, Value>,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            source: source.into(),
            namespace: None,
            metadata: Map::new(),
        }
    }

    /// Place the document in a namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Attach one metadata key/value pair.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// A knowledge base that stores documents in a Vec and ranks them by naive
/// term overlap.
///
/// Scoring: the fraction of query terms contained in the document text,
/// case-insensitive. Zero-score documents are excluded. The sort is stable,
/// so documents with equal scores keep insertion order and results are
/// deterministic across calls.
///
/// Corpora are built with `upsert` before the backend is shared; `query`
/// only reads, so no interior mutability is needed.
pub struct InMemoryKnowledgeBase {
    documents: Vec<Document>,
    default_top_k: usize,
}

impl InMemoryKnowledgeBase {
    pub fn new() -> Self {
        Self {
            documents: Vec::new(),
            default_top_k: DEFAULT_TOP_K,
        }
    }

    /// Override the match count used when a query has no `top_k`.
    pub fn with_default_top_k(mut self, top_k: usize) -> Self {
        self.default_top_k = top_k;
        self
    }

    /// Insert a document, replacing any existing document with the same id.
    pub fn upsert(&mut self, document: Document) {
        match self.documents.iter_mut().find(|d| d.id == document.id) {
            Some(existing) => *existing = document,
            None => self.documents.push(document),
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn score(query_text: &str, document: &Document) -> f32 {
        let text = document.text.to_lowercase();
        let terms: Vec<String> = query_text
            .to_lowercase()
            .split_whitespace()
            .map(str::to_string)
            .collect();
        if terms.is_empty() {
            return 0.0;
        }
        let hits = terms.iter().filter(|t| text.contains(t.as_str())).count();
        hits as f32 / terms.len() as f32
    }

    fn in_namespace(document: &Document, namespace: Option<&str>) -> bool {
        match namespace {
            Some(ns) => document.namespace.as_deref() == Some(ns),
            // Queries without a namespace search the whole corpus.
            None => true,
        }
    }

    fn matches_filter(document: &Document, filter: &MetadataFilter) -> bool {
        filter
            .conditions()
            .iter()
            .all(|(key, value)| document.metadata.get(key) == Some(value))
    }
}

impl Default for InMemoryKnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase for InMemoryKnowledgeBase {
    fn name(&self) -> &str { "in_memory" }

    fn query(
        &self,
        queries: &[Query],
        global_metadata_filter: Option<&MetadataFilter>,
    ) -> Result<Vec<MatchSet>, RetrievalError> {
        let mut results = Vec::with_capacity(queries.len());

        for query in queries {
            let filter = match (query.metadata_filter.as_ref(), global_metadata_filter) {
                (None, None) => None,
                (Some(per_query), None) => Some(per_query.clone()),
                (None, Some(global)) => Some(global.clone()),
                (Some(per_query), Some(global)) => Some(per_query.merged_with(global)),
            };
            let top_k = query.top_k.unwrap_or(self.default_top_k);

            let mut scored: Vec<(f32, &Document)> = self
                .documents
                .iter()
                .filter(|d| Self::in_namespace(d, query.namespace.as_deref()))
                .filter(|d| filter.as_ref().is_none_or(|f| Self::matches_filter(d, f)))
                .map(|d| (Self::score(&query.text, d), d))
                .filter(|(score, _)| *score > 0.0)
                .collect();

            // Stable sort: equal scores keep insertion order.
            scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
            scored.truncate(top_k);

            let matches = scored
                .into_iter()
                .map(|(score, d)| Match {
                    id: d.id.clone(),
                    text: d.text.clone(),
                    source: d.source.clone(),
                    score,
                    metadata: d.metadata.clone(),
                })
                .collect();
            results.push(MatchSet::new(query.text.clone(), matches));
        }

        Ok(results)
    }
}
