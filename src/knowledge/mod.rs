//! Learned-answer knowledge base
//!
//! Maps normalized question text to answer text for immediate automated
//! replies. Matching is pluggable: the default [`ExactMatch`] strategy does
//! case-insensitive exact lookup only.

pub mod matcher;
pub mod store;

pub use matcher::{ExactMatch, MatchStrategy};
pub use store::KnowledgeStore;
