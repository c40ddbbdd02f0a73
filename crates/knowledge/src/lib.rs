//! Knowledge base backends for Baler.
//!
//! Real deployments implement [`baler_core::KnowledgeBase`] on top of a
//! vector store; the backends here cover tests, examples, and
//! retrieval-disabled configurations.

pub mod in_memory;
pub mod noop;

pub use in_memory::{Document, InMemoryKnowledgeBase};
pub use noop::NoopKnowledgeBase;
