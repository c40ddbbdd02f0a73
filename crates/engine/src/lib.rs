//! # Baler Engine
//!
//! Turns ranked retrieval results into a token-budgeted context.
//!
//! [`ContextEngine`] orchestrates one call: validate the queries, fetch
//! ranked matches through a [`baler_core::KnowledgeBase`], hand them to a
//! [`baler_core::ContextBuilder`], and attach optional debug provenance.
//! [`StuffingContextBuilder`] is the default packing strategy: greedy,
//! order-preserving, never over budget.

pub mod engine;
pub mod stuffing;

pub use engine::{ContextEngine, QUERY_RESULTS_DEBUG_KEY};
pub use stuffing::{OverflowPolicy, StuffingContextBuilder};
