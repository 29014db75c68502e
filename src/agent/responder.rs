//! Automated question handling

use super::notify::Notifier;
use crate::error::{FrontdeskError, Result};
use crate::knowledge::KnowledgeStore;
use crate::ledger::RequestLedger;
use crate::metrics::METRICS;
use std::sync::Arc;
use tracing::info;

/// Outcome of handling one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// The knowledge base had an answer
    Answered { answer: String },
    /// The question was escalated to the supervisor
    Escalated { request_id: String },
}

/// Front-line automated responder
///
/// Per question: knowledge base hit answers immediately, a miss creates a
/// Pending ledger entry and notifies the supervisor. Once escalated the
/// responder takes no further autonomous action.
pub struct Responder {
    knowledge: Arc<KnowledgeStore>,
    ledger: Arc<RequestLedger>,
    notifier: Arc<dyn Notifier>,
}

impl Responder {
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

    /// Answer a question or escalate it
    ///
    /// The ledger entry and the supervisor notice carry the question text
    /// verbatim; normalization happens only inside the knowledge lookup.
    pub async fn handle(&self, question: &str) -> Result<Reply> {
        if question.trim().is_empty() {
            return Err(FrontdeskError::Validation(
                "question cannot be empty".to_string(),
            ));
        }

        if let Some(answer) = self.knowledge.lookup(question) {
            info!(question, "answered from knowledge base");
            METRICS.questions_total.with_label_values(&["answered"]).inc();
            self.notifier.notify_requester(None, &answer).await;
            return Ok(Reply::Answered { answer });
        }

        let request_id = uuid::Uuid::new_v4().to_string();
        self.ledger.create(&request_id, question)?;
        METRICS.questions_total.with_label_values(&["escalated"]).inc();

        self.notifier.notify_supervisor(&request_id, question).await;
        self.notifier
            .notify_requester(
                Some(&request_id),
                "Let me check with my supervisor and get back to you.",
            )
            .await;

        Ok(Reply::Escalated { request_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::notify::testing::{RecordingNotifier, Sent};
    use crate::ledger::RequestStatus;

    fn responder_with(notifier: Arc<RecordingNotifier>) -> (Responder, Arc<RequestLedger>, Arc<KnowledgeStore>) {
        let knowledge = Arc::new(KnowledgeStore::new());
        let ledger = Arc::new(RequestLedger::new());
        let responder = Responder::new(knowledge.clone(), ledger.clone(), notifier);
        (responder, ledger, knowledge)
    }

    #[tokio::test]
    async fn test_known_question_is_answered_immediately() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (responder, ledger, knowledge) = responder_with(notifier.clone());
        knowledge.learn("What are your business hours?", "9am-5pm");

        let reply = responder.handle("what are your business hours?").await.unwrap();
        assert_eq!(
            reply,
            Reply::Answered {
                answer: "9am-5pm".to_string()
            }
        );
        // No ledger entry for an immediate answer
        assert!(ledger.is_empty());
        assert_eq!(
            notifier.sent(),
            vec![Sent::ToRequester {
                request_id: None,
                message: "9am-5pm".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_unknown_question_is_escalated() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (responder, ledger, _) = responder_with(notifier.clone());

        let reply = responder.handle("What are your business hours?").await.unwrap();
        let request_id = match reply {
            Reply::Escalated { request_id } => request_id,
            other => panic!("expected escalation, got {other:?}"),
        };

        let record = ledger.get(&request_id).unwrap();
        assert_eq!(record.status, RequestStatus::Pending);
        assert_eq!(record.question, "What are your business hours?");
        assert!(record.answer.is_none());

        let sent = notifier.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(
            sent[0],
            Sent::ToSupervisor {
                request_id: request_id.clone(),
                question: "What are your business hours?".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_question_is_rejected() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (responder, ledger, _) = responder_with(notifier.clone());

        let err = responder.handle("   ").await.unwrap_err();
        assert!(matches!(err, FrontdeskError::Validation(_)));
        assert!(ledger.is_empty());
        assert!(notifier.sent().is_empty());
    }

    #[tokio::test]
    async fn test_escalation_carries_question_verbatim() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (responder, ledger, _) = responder_with(notifier.clone());

        let reply = responder.handle("  Do You Deliver?  ").await.unwrap();
        let request_id = match reply {
            Reply::Escalated { request_id } => request_id,
            other => panic!("expected escalation, got {other:?}"),
        };

        let record = ledger.get(&request_id).unwrap();
        assert_eq!(record.question, "  Do You Deliver?  ");
        assert_eq!(
            notifier.sent()[0],
            Sent::ToSupervisor {
                request_id,
                question: "  Do You Deliver?  ".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_repeat_escalation_gets_fresh_identifier() {
        let notifier = Arc::new(RecordingNotifier::new());
        let (responder, ledger, _) = responder_with(notifier);

        let first = responder.handle("Do you offer pet grooming?").await.unwrap();
        let second = responder.handle("Do you offer pet grooming?").await.unwrap();

        match (first, second) {
            (Reply::Escalated { request_id: a }, Reply::Escalated { request_id: b }) => {
                assert_ne!(a, b);
            }
            other => panic!("expected two escalations, got {other:?}"),
        }
        assert_eq!(ledger.len(), 2);
    }
}
