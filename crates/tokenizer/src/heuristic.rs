//! Byte-ratio token estimation.
//!
//! Uses a byte-based heuristic: ~4 bytes of UTF-8 per token. This
//! approximation is accurate within ~10% for BPE tokenizers (GPT-3.5,
//! GPT-4, Claude) on English text, and costs nothing to compute.

use baler_core::TokenCounter;

/// Estimates one token per four bytes, rounding up.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicTokenCounter;

impl HeuristicTokenCounter {
    pub fn new() -> Self {
        Self
    }
}

impl TokenCounter for HeuristicTokenCounter {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn count(&self, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        (text.len() + 3) / 4
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_zero() {
        assert_eq!(HeuristicTokenCounter::new().count(""), 0);
    }

    #[test]
    fn four_bytes_is_one_token() {
        assert_eq!(HeuristicTokenCounter::new().count("test"), 1);
    }

    #[test]
    fn five_bytes_rounds_up() {
        assert_eq!(HeuristicTokenCounter::new().count("hello"), 2);
    }

    #[test]
    fn hundred_bytes() {
        let text = "a".repeat(100);
        assert_eq!(HeuristicTokenCounter::new().count(&text), 25);
    }

    #[test]
    fn multibyte_chars_charged_by_byte_length() {
        // three chars but six bytes → two tokens, not one
        assert_eq!(HeuristicTokenCounter::new().count("ééé"), 2);
    }
}
