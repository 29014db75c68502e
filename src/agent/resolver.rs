//! Resolution of escalated requests

use super::notify::Notifier;
use crate::error::{FrontdeskError, Result};
use crate::knowledge::KnowledgeStore;
use crate::ledger::{HelpRequest, RequestLedger};
use crate::metrics::METRICS;
use std::sync::Arc;
use tracing::{error, info};

/// Applies a supervisor's answer to an escalated request
///
/// Marks the ledger record Resolved, texts the answer back to the original
/// requester, and teaches the knowledge base so the next ask of the same
/// question is answered immediately.
pub struct Resolver {
    knowledge: Arc<KnowledgeStore>,
    ledger: Arc<RequestLedger>,
    notifier: Arc<dyn Notifier>,
}

impl Resolver {
    pub fn new(
        knowledge: Arc<KnowledgeStore>,
        ledger: Arc<RequestLedger>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            knowledge,
            ledger,
            notifier,
        }
    }

    /// Resolve an escalated request with the supervisor's answer
    ///
    /// A blank answer is rejected before any ledger mutation; an unknown or
    /// already-resolved identifier surfaces an explicit error.
    pub async fn resolve(&self, request_id: &str, answer: &str) -> Result<HelpRequest> {
        let answer = answer.trim();
        if answer.is_empty() {
            return Err(FrontdeskError::Validation(
                "answer cannot be empty".to_string(),
            ));
        }

        let record = self.ledger.resolve(request_id, answer).inspect_err(|e| {
            error!(request_id, "resolution failed: {e}");
            METRICS.resolutions_total.with_label_values(&["rejected"]).inc();
        })?;

        self.notifier.notify_requester(Some(request_id), answer).await;
        self.knowledge.learn(&record.question, answer);
        METRICS.resolutions_total.with_label_values(&["resolved"]).inc();
        METRICS.facts_learned.inc();
        info!(request_id, "request resolved and answer learned");

        Ok(record)
    }
}
