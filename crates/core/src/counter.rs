//! Token counter trait.
//!
//! Budget arithmetic needs a cost per text snippet. The counter is the only
//! component that knows how a model tokenizes; swapping it changes numeric
//! outcomes but never the packing algorithm's correctness.

/// Maps text to an integer token cost.
///
/// Must be a pure function of the text: no side effects, no hidden state,
/// the same input always costs the same.
pub trait TokenCounter: Send + Sync {
    /// A human-readable name for this counting scheme (e.g., "heuristic",
    /// or a model id).
    fn name(&self) -> &str;

    /// The token cost of `text`.
    fn count(&self, text: &str) -> usize;
}
