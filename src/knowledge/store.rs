//! In-memory fact storage

use super::matcher::{ExactMatch, MatchStrategy};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Learned question/answer store
///
/// Pure in-memory map; lookups and upserts cannot fail. Last writer wins on
/// conflicting answers for the same question.
pub struct KnowledgeStore {
    facts: DashMap<String, String>,
    matcher: Arc<dyn MatchStrategy>,
}

impl KnowledgeStore {
    /// Create an empty store with the default exact matcher
    pub fn new() -> Self {
        Self::with_matcher(Arc::new(ExactMatch))
    }

    /// Create an empty store with a custom matching strategy
    pub fn with_matcher(matcher: Arc<dyn MatchStrategy>) -> Self {
        Self {
            facts: DashMap::new(),
            matcher,
        }
    }

    /// Look up an answer for a question
    pub fn lookup(&self, question: &str) -> Option<String> {
        let answer = self.matcher.find(question, &self.facts);
        debug!(question, hit = answer.is_some(), "knowledge lookup");
        answer
    }

    /// Upsert a question/answer pair
    ///
    /// Idempotent for identical input; silently overwrites a previous answer
    /// to the same normalized question.
    pub fn learn(&self, question: &str, answer: &str) {
        let key = self.matcher.key(question);
        info!(question = %key, "learned answer");
        self.facts.insert(key, answer.to_string());
    }

    /// Number of stored facts
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Default for KnowledgeStore {
    fn default() -> Self {
        Self::new()
    }
}
