//! Whitespace-delimited token counting.

use baler_core::TokenCounter;

/// Counts whitespace-separated words as tokens.
///
/// Coarser than the byte heuristic, but costs map one-to-one onto words,
/// which makes packing behavior easy to read in tests and examples.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenCounter;

impl WhitespaceTokenCounter {
    pub fn new() -> Self {
        Self
    }
}

impl TokenCounter for WhitespaceTokenCounter {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn count(&self, text: &str) -> usize {
        text.split_whitespace().count()
    }
}
