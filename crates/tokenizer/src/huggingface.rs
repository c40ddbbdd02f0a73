//! Model-exact token counting via HuggingFace `tokenizers`.
//!
//! Heavier than the heuristics, so it lives behind the `huggingface`
//! feature. Load the same `tokenizer.json` the target model ships with and
//! budget arithmetic matches what the model will actually see.

use std::path::Path;

use baler_core::{Error, TokenCounter};
use tokenizers::Tokenizer;
use tracing::warn;

/// Counts tokens with a real model tokenizer loaded from a
/// `tokenizer.json` definition.
pub struct HuggingFaceTokenCounter {
    name: String,
    tokenizer: Tokenizer,
}

impl HuggingFaceTokenCounter {
    /// Load a tokenizer definition from disk.
    ///
    /// `name` identifies the counting scheme in logs and debug output,
    /// typically the model id the file belongs to.
    pub fn from_file(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::from_file(path).map_err(|e| Error::Config {
            message: format!("failed to load tokenizer from {}: {e}", path.display()),
        })?;
        Ok(Self {
            name: name.into(),
            tokenizer,
        })
    }
}

impl TokenCounter for HuggingFaceTokenCounter {
    fn name(&self) -> &str {
        &self.name
    }

    fn count(&self, text: &str) -> usize {
        // No special tokens: we charge content, not chat framing.
        match self.tokenizer.encode(text, false) {
            Ok(encoding) => encoding.get_ids().len(),
            Err(e) => {
                warn!(counter = %self.name, error = %e, "Encode failed, falling back to byte heuristic");
                (text.len() + 3) / 4
            }
        }
    }
}
