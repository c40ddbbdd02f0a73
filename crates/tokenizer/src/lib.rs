//! Token counting backends for Baler.
//!
//! The default [`HeuristicTokenCounter`] approximates BPE tokenizers with a
//! byte-ratio estimate; [`WhitespaceTokenCounter`] counts words, which keeps
//! costs obvious in tests. With the `huggingface` feature a real model
//! tokenizer can be loaded for exact counts.

pub mod heuristic;
pub mod whitespace;

#[cfg(feature = "huggingface")]
pub mod huggingface;

pub use heuristic::HeuristicTokenCounter;
pub use whitespace::WhitespaceTokenCounter;

#[cfg(feature = "huggingface")]
pub use huggingface::HuggingFaceTokenCounter;
