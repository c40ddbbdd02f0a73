//! # Baler Core
//!
//! Domain types, traits, and error definitions for the Baler context engine.
//! This crate has **zero framework dependencies** — it defines the domain model
//! that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! Every collaborator of the context engine is defined as a trait here.
//! Implementations live in their respective crates. This enables:
//! - Swapping knowledge bases, builders, and token counters via configuration
//! - Easy testing with mock/stub implementations
//! - Clean dependency graph (all crates depend inward on core)

pub mod builder;
pub mod context;
pub mod counter;
pub mod error;
pub mod knowledge;
pub mod query;

// Re-export key types at crate root for ergonomics
pub use builder::ContextBuilder;
pub use context::{Context, ContextSnippet};
pub use counter::TokenCounter;
pub use error::{Error, Result, RetrievalError};
pub use knowledge::{KnowledgeBase, Match, MatchSet};
pub use query::{MetadataFilter, Query};
