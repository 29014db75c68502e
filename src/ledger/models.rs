//! Data models for the request ledger

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a help request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestStatus {
    Pending,
    Resolved,
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Resolved => write!(f, "Resolved"),
        }
    }
}

/// An escalated question awaiting or carrying a supervisor answer
///
/// Invariant: `answer` is `Some` if and only if `status` is `Resolved`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HelpRequest {
    pub id: String,
    pub question: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
}

impl HelpRequest {
    /// Create a new pending request
    pub fn new(id: String, question: String) -> Self {
        Self {
            id,
            question,
            status: RequestStatus::Pending,
            created_at: Utc::now(),
            answer: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }

    /// Check the answer/status invariant
    pub fn invariant_holds(&self) -> bool {
        self.answer.is_some() == (self.status == RequestStatus::Resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_request_is_pending() {
        let request = HelpRequest::new("req_1".to_string(), "Do you deliver?".to_string());
        assert!(request.is_pending());
        assert!(request.answer.is_none());
        assert!(request.invariant_holds());
    }

    #[test]
    fn test_invariant_detects_violation() {
        let mut request = HelpRequest::new("req_1".to_string(), "Do you deliver?".to_string());
        request.status = RequestStatus::Resolved;
        assert!(!request.invariant_holds());

        request.answer = Some("Yes".to_string());
        assert!(request.invariant_holds());
    }
}
