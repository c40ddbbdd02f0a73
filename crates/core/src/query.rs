//! Query and metadata filter types.
//!
//! A [`Query`] is a single retrieval request. It is immutable once submitted:
//! the engine hands it to the knowledge base exactly as the caller built it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Error;

/// An equality predicate over document metadata.
///
/// Opaque to the engine — it is passed through to the knowledge base, which
/// decides how to apply it. Shaped as a JSON object; building one from a
/// non-object value is a configuration error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataFilter(Map<String, Value>);

impl MetadataFilter {
    /// Create an empty filter (matches everything).
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add a key/value condition.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// The underlying conditions.
    pub fn conditions(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Merge `other` into this filter. Keys from `other` win on conflict.
    ///
    /// Knowledge bases use this to combine a per-query filter with the
    /// engine's global filter: `per_query.merged_with(global)`.
    pub fn merged_with(&self, other: &MetadataFilter) -> MetadataFilter {
        let mut merged = self.0.clone();
        for (key, value) in other.conditions() {
            merged.insert(key.clone(), value.clone());
        }
        MetadataFilter(merged)
    }
}

impl From<Map<String, Value>> for MetadataFilter {
    fn from(conditions: Map<String, Value>) -> Self {
        Self(conditions)
    }
}

impl TryFrom<Value> for MetadataFilter {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Object(conditions) => Ok(Self(conditions)),
            other => Err(Error::Config {
                message: format!("metadata filter must be a JSON object, got: {other}"),
            }),
        }
    }
}

/// A single retrieval request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    /// The query text.
    pub text: String,

    /// Logical partition of the knowledge base to search.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,

    /// Per-query metadata filter. The engine's global filter, when set,
    /// wins on conflicting keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_filter: Option<MetadataFilter>,

    /// Maximum number of matches to retrieve for this query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_k: Option<usize>,
}

impl Query {
    /// Create a query with just the text, no extra parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            namespace: None,
            metadata_filter: None,
            top_k: None,
        }
    }

    /// Restrict the query to one namespace.
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Set the per-query metadata filter.
    pub fn with_metadata_filter(mut self, filter: MetadataFilter) -> Self {
        self.metadata_filter = Some(filter);
        self
    }

    /// Cap the number of matches retrieved for this query.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = Some(top_k);
        self
    }
}
