//! The context engine — validation, retrieval, packing, debug capture.

use std::sync::Arc;

use baler_core::{Context, ContextBuilder, Error, KnowledgeBase, MetadataFilter, Query, Result};
use tracing::{debug, info};

use crate::stuffing::StuffingContextBuilder;

/// Debug payload key holding the serialized match sets for a call.
pub const QUERY_RESULTS_DEBUG_KEY: &str = "query_results";

/// Turns queries plus a token budget into a packed [`Context`].
///
/// Long-lived: construct once and share via `Arc`. All configuration is
/// fixed at construction and read-only afterwards, so concurrent calls
/// need no locking and cannot observe each other's in-flight state.
///
/// The engine adds nothing to the retrieval results: it validates inputs,
/// fetches matches, and delegates packing to the configured builder. When
/// the debug flag is on it also mirrors the raw match sets into the
/// context's debug payload.
pub struct ContextEngine {
    /// Where matches come from
    knowledge_base: Arc<dyn KnowledgeBase>,

    /// How matches get packed
    context_builder: Box<dyn ContextBuilder>,

    /// Filter applied to every retrieval, winning over per-query filters
    global_metadata_filter: Option<MetadataFilter>,

    /// Whether to mirror raw match sets into the context's debug payload
    debug_info: bool,
}

impl ContextEngine {
    /// Create an engine over `knowledge_base` with the default stuffing
    /// builder, no global filter, and debug capture off.
    pub fn new(knowledge_base: Arc<dyn KnowledgeBase>) -> Self {
        Self {
            knowledge_base,
            context_builder: Box::new(StuffingContextBuilder::new()),
            global_metadata_filter: None,
            debug_info: false,
        }
    }

    /// Swap in a different packing strategy.
    pub fn with_context_builder(mut self, builder: Box<dyn ContextBuilder>) -> Self {
        self.context_builder = builder;
        self
    }

    /// Apply `filter` to every retrieval. Wins over per-query filters on
    /// conflicting keys.
    pub fn with_global_metadata_filter(mut self, filter: MetadataFilter) -> Self {
        self.global_metadata_filter = Some(filter);
        self
    }

    /// Attach the raw match sets of every call to its context under
    /// [`QUERY_RESULTS_DEBUG_KEY`]. Off by default.
    pub fn with_debug_info(mut self, enabled: bool) -> Self {
        self.debug_info = enabled;
        self
    }

    /// Retrieve matches for `queries` and pack them into a context costing
    /// at most `max_context_tokens`.
    ///
    /// Fails with [`Error::InvalidArgument`] on an empty query list (before
    /// any retrieval is attempted) and propagates knowledge base failures
    /// unchanged. Never returns a partial context alongside an error.
    pub fn query(&self, queries: &[Query], max_context_tokens: usize) -> Result<Context> {
        if queries.is_empty() {
            return Err(Error::InvalidArgument {
                message: "queries must not be empty".into(),
            });
        }

        debug!(
            backend = self.knowledge_base.name(),
            queries = queries.len(),
            budget = max_context_tokens,
            "Retrieving matches"
        );
        let match_sets = self
            .knowledge_base
            .query(queries, self.global_metadata_filter.as_ref())?;

        let mut context = self.context_builder.build(&match_sets, max_context_tokens);

        if self.debug_info {
            let raw = serde_json::to_value(&match_sets)?;
            context
                .debug_info
                .insert(QUERY_RESULTS_DEBUG_KEY.to_string(), raw);
        }

        info!(
            builder = self.context_builder.name(),
            snippets = context.snippets.len(),
            tokens = context.num_tokens,
            budget = max_context_tokens,
            "Context packed"
        );
        Ok(context)
    }

    /// Suspendable variant of [`ContextEngine::query`] with the identical
    /// contract.
    ///
    /// Declared but not implemented: always fails with
    /// [`Error::NotImplemented`] so callers detect the missing capability
    /// instead of silently running on the blocking path. Once implemented,
    /// the retrieval call is the only suspension point and dropping the
    /// future cancels it.
    pub async fn aquery(&self, _queries: &[Query], _max_context_tokens: usize) -> Result<Context> {
        Err(Error::NotImplemented { operation: "aquery" })
    }
}
