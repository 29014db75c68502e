//! Outbound notifications
//!
//! One-way free-text messages to the requester and the supervisor. The
//! reference workflow delivers these over console output; the trait keeps
//! the channel swappable.

use async_trait::async_trait;
use tracing::info;

/// Delivery channel for workflow notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver an immediate or resolved answer to the requester
    async fn notify_requester(&self, request_id: Option<&str>, message: &str);

    /// Ask the supervisor for help with an escalated question
    async fn notify_supervisor(&self, request_id: &str, question: &str);
}

/// Notifier that writes messages to the process log
#[derive(Debug, Clone, Default)]
pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn notify_requester(&self, request_id: Option<&str>, message: &str) {
        match request_id {
            Some(id) => info!(request_id = id, "[TEXT TO CUSTOMER]: {message}"),
            None => info!("[TEXT TO CUSTOMER]: {message}"),
        }
    }

    async fn notify_supervisor(&self, request_id: &str, question: &str) {
        info!(
            request_id,
            "[TEXT TO SUPERVISOR]: Hey, I need help answering: '{question}'"
        );
    }
}

/// Test support: a notifier that records messages instead of delivering them
pub mod testing {
    use super::*;
    use std::sync::Mutex;

    /// Captured notification for assertions
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum Sent {
        ToRequester {
            request_id: Option<String>,
            message: String,
        },
        ToSupervisor {
            request_id: String,
            question: String,
        },
    }

    /// Notifier that records every message it is asked to deliver
    #[derive(Debug, Default)]
    pub struct RecordingNotifier {
        sent: Mutex<Vec<Sent>>,
    }

    impl RecordingNotifier {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn sent(&self) -> Vec<Sent> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Notifier for RecordingNotifier {
        async fn notify_requester(&self, request_id: Option<&str>, message: &str) {
            self.sent.lock().unwrap().push(Sent::ToRequester {
                request_id: request_id.map(String::from),
                message: message.to_string(),
            });
        }

        async fn notify_supervisor(&self, request_id: &str, question: &str) {
            self.sent.lock().unwrap().push(Sent::ToSupervisor {
                request_id: request_id.to_string(),
                question: question.to_string(),
            });
        }
    }
}
