//! Context builder trait — the packing seam.

use crate::context::Context;
use crate::knowledge::MatchSet;

/// The packing capability consumed by the context engine.
///
/// Implementations decide which matches fit a token budget and in what form
/// (stuffing, summarizing, ...). Every implementation must keep the charged
/// token total within `max_context_tokens` and must not reorder matches
/// relative to their incoming order.
pub trait ContextBuilder: Send + Sync {
    /// A human-readable name for this strategy (e.g., "stuffing").
    fn name(&self) -> &str;

    /// Pack `match_sets` into a context costing at most `max_context_tokens`.
    ///
    /// Deterministic: identical inputs and token counter produce an
    /// identical context. A budget nothing fits into yields an empty
    /// context, never an error.
    fn build(&self, match_sets: &[MatchSet], max_context_tokens: usize) -> Context;
}
