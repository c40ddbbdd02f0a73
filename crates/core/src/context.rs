//! Context — the packed output handed to prompt builders.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single selected passage inside a [`Context`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContextSnippet {
    /// Provenance identifier of the originating match.
    pub id: String,

    /// Human-readable source label.
    pub source: String,

    /// The passage text. Unmodified under the skip policy; a prefix of the
    /// original under the truncate policy.
    pub text: String,
}

impl ContextSnippet {
    pub fn new(id: impl Into<String>, source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            text: text.into(),
        }
    }

    /// Render this snippet the way it appears in [`Context::to_text`].
    pub fn to_text(&self) -> String {
        format!("[Source: {}]\n{}", self.source, self.text)
    }
}

/// The final token-budgeted assembly of selected snippets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Selected snippets, in query order then relevance order.
    pub snippets: Vec<ContextSnippet>,

    /// Total token cost of the selected snippets, as charged by the
    /// builder's token counter. Never exceeds the requested budget.
    pub num_tokens: usize,

    /// Observability payload. Additive only: it never changes the selected
    /// content. Sorted map so serialization is stable.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub debug_info: BTreeMap<String, Value>,
}

impl Context {
    /// A context with nothing selected.
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    /// Create a context from selected snippets and their charged cost.
    pub fn new(snippets: Vec<ContextSnippet>, num_tokens: usize) -> Self {
        Self {
            snippets,
            num_tokens,
            debug_info: BTreeMap::new(),
        }
    }

    /// Whether any snippet was selected.
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// Render the whole context as one text blob: snippet blocks joined by
    /// blank lines.
    ///
    /// The source labels and joins added here are rendering, not charged
    /// content — `num_tokens` accounts the passage text only.
    pub fn to_text(&self) -> String {
        self.snippets
            .iter()
            .map(ContextSnippet::to_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
