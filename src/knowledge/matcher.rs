//! Question matching strategies

use dashmap::DashMap;

/// Strategy for matching an incoming question against learned facts
///
/// The store keys facts by `key(question)`; `find` may use any lookup it
/// wants over the fact map, so a fuzzy matcher can be swapped in without
/// touching the responder or resolver contracts.
pub trait MatchStrategy: Send + Sync {
    /// Normalized storage key for a question
    fn key(&self, question: &str) -> String;

    /// Find an answer for the question, if any
    fn find(&self, question: &str, facts: &DashMap<String, String>) -> Option<String>;
}

/// Case-insensitive exact matching
///
/// Trims surrounding whitespace and lowercases; no fuzzy or partial
/// matching.
#[derive(Debug, Clone, Default)]
pub struct ExactMatch;

impl MatchStrategy for ExactMatch {
    fn key(&self, question: &str) -> String {
        question.trim().to_lowercase()
    }

    fn find(&self, question: &str, facts: &DashMap<String, String>) -> Option<String> {
        facts.get(&self.key(question)).map(|entry| entry.value().clone())
    }
}
