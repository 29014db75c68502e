//! Request/response models for the HTTP surface

use crate::ledger::HelpRequest;
use serde::{Deserialize, Serialize};

/// Incoming question from a requester
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Outcome of asking a question
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskResponse {
    /// "answered" or "escalated"
    pub reply: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// Full ledger listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequestsResponse {
    pub requests: Vec<HelpRequest>,
    pub total: usize,
}

/// Supervisor answer submission (urlencoded form)
#[derive(Debug, Clone, Deserialize)]
pub struct RespondForm {
    pub request_id: String,
    pub answer: String,
}

/// API error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
