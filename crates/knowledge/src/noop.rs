//! No-op knowledge base — disables retrieval entirely.

use baler_core::{KnowledgeBase, MatchSet, MetadataFilter, Query, RetrievalError};

/// A knowledge base that never finds anything.
///
/// Keeps the engine wiring intact for configurations where retrieval is
/// turned off; every query yields an empty match set.
pub struct NoopKnowledgeBase;

impl KnowledgeBase for NoopKnowledgeBase {
    fn name(&self) -> &str { "none" }

    fn query(
        &self,
        queries: &[Query],
        _global_metadata_filter: Option<&MetadataFilter>,
    ) -> Result<Vec<MatchSet>, RetrievalError> {
        Ok(queries
            .iter()
            .map(|q| MatchSet::empty(q.text.clone()))
            .collect())
    }
}
