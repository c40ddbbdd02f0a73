//! The stuffing builder — greedy, order-preserving token packing.
//!
//! Matches are considered in query submission order, then relevance order,
//! against a running token total: whatever fits is taken whole, whatever
//! does not is skipped (or prefix-truncated, when configured). Nothing is
//! ever re-ranked.
//!
//! # Determinism
//!
//! Packing is deterministic: identical match sets, budget, and token
//! counter always produce an identical context. No randomness, no clock,
//! no hidden state.

use std::collections::HashSet;
use std::sync::Arc;

use baler_core::{Context, ContextBuilder, ContextSnippet, MatchSet, TokenCounter};
use baler_tokenizer::HeuristicTokenCounter;
use serde::{Deserialize, Serialize};

/// What to do with a match that does not fit the remaining budget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Skip the match entirely and keep scanning. Never emits a partial
    /// snippet.
    #[default]
    Skip,

    /// Include the longest prefix of the match that still fits, then keep
    /// scanning.
    Truncate,
}

/// Greedy priority packer over pre-ranked match sets.
///
/// # Algorithm
///
/// 1. Walk match sets in the order supplied (query submission order)
/// 2. Within each set, walk matches in their relevance order
/// 3. Charge each match's cost via the token counter; take it whole if it
///    fits the remaining budget, otherwise apply the overflow policy
/// 4. Stop entirely once the remaining budget reaches zero
///
/// A document id is considered at most once per build, and whitespace-only
/// matches are ignored without consuming their id. Ties between equal-cost
/// matches always go to the earlier one — scores are never consulted.
pub struct StuffingContextBuilder {
    counter: Arc<dyn TokenCounter>,
    overflow: OverflowPolicy,
}

impl StuffingContextBuilder {
    /// Create a builder using the byte-heuristic token counter and the
    /// skip policy.
    pub fn new() -> Self {
        Self {
            counter: Arc::new(HeuristicTokenCounter::new()),
            overflow: OverflowPolicy::Skip,
        }
    }

    /// Charge costs through a specific token counter.
    pub fn with_counter(mut self, counter: Arc<dyn TokenCounter>) -> Self {
        self.counter = counter;
        self
    }

    /// Change the policy for matches that do not fit.
    pub fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    /// Longest prefix of `text` costing at most `budget` tokens, cut at a
    /// char boundary with trailing whitespace trimmed.
    ///
    /// Binary-searches over prefix lengths; counters are assumed monotone
    /// in prefix length (true of the byte and word counters).
    fn longest_affordable_prefix(&self, text: &str, budget: usize) -> String {
        if budget == 0 || text.is_empty() {
            return String::new();
        }
        // ends[k] = byte length of the (k+1)-char prefix
        let ends: Vec<usize> = text
            .char_indices()
            .map(|(i, _)| i)
            .skip(1)
            .chain(std::iter::once(text.len()))
            .collect();
        let fitting = ends.partition_point(|&end| self.counter.count(&text[..end]) <= budget);
        if fitting == 0 {
            return String::new();
        }
        text[..ends[fitting - 1]].trim_end().to_string()
    }
}

impl Default for StuffingContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContextBuilder for StuffingContextBuilder {
    fn name(&self) -> &str { "stuffing" }

    fn build(&self, match_sets: &[MatchSet], max_context_tokens: usize) -> Context {
        let mut snippets: Vec<ContextSnippet> = Vec::new();
        let mut used = 0usize;
        let mut seen_ids: HashSet<&str> = HashSet::new();

        'packing: for set in match_sets {
            for candidate in &set.matches {
                let remaining = max_context_tokens - used;
                if remaining == 0 {
                    break 'packing;
                }
                // Blank matches carry nothing; duplicate ids are considered once.
                if candidate.text.trim().is_empty() || !seen_ids.insert(candidate.id.as_str()) {
                    continue;
                }

                let cost = self.counter.count(&candidate.text);
                if cost <= remaining {
                    snippets.push(ContextSnippet::new(
                        candidate.id.clone(),
                        candidate.source.clone(),
                        candidate.text.clone(),
                    ));
                    used += cost;
                } else if self.overflow == OverflowPolicy::Truncate {
                    let prefix = self.longest_affordable_prefix(&candidate.text, remaining);
                    if !prefix.is_empty() {
                        used += self.counter.count(&prefix);
                        snippets.push(ContextSnippet::new(
                            candidate.id.clone(),
                            candidate.source.clone(),
                            prefix,
                        ));
                    }
                }
            }
        }

        Context::new(snippets, used)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
