//! frontdesk: human-in-the-loop customer support simulation
//!
//! An automated responder answers questions from a learned-fact store,
//! escalates unknown questions into a request ledger, and a supervisor
//! resolves them through a single-page review panel. Resolved answers are
//! taught back to the fact store for future reuse.

pub mod agent;
pub mod api;
pub mod config;
pub mod error;
pub mod knowledge;
pub mod ledger;
pub mod metrics;

pub use agent::{ConsoleNotifier, Notifier, Reply, Resolver, Responder};
pub use api::{build_router, AppState};
pub use config::Config;
pub use error::{FrontdeskError, Result};
pub use knowledge::KnowledgeStore;
pub use ledger::{HelpRequest, RequestLedger, RequestStatus};

use std::sync::Arc;

/// Wire up stores, responder, and resolver from configuration
///
/// Seeds the knowledge base with any configured facts.
pub fn build_state(config: &Config, notifier: Arc<dyn Notifier>) -> AppState {
    let knowledge = Arc::new(KnowledgeStore::new());
    for fact in &config.knowledge.seed {
        knowledge.learn(&fact.question, &fact.answer);
    }

    let ledger = Arc::new(RequestLedger::new());
    let responder = Arc::new(Responder::new(
        knowledge.clone(),
        ledger.clone(),
        notifier.clone(),
    ));
    let resolver = Arc::new(Resolver::new(knowledge.clone(), ledger.clone(), notifier));

    AppState {
        responder,
        resolver,
        ledger,
        knowledge,
    }
}
