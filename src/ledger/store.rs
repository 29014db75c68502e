//! In-memory request ledger

use super::models::{HelpRequest, RequestStatus};
use crate::error::{FrontdeskError, Result};
use indexmap::IndexMap;
use std::sync::RwLock;
use tracing::{info, warn};

/// Ledger of every escalated question, keyed by request identifier
///
/// Backed by an `IndexMap` so `list_all` enumerates records in insertion
/// order. A single `RwLock` gives single-writer-at-a-time semantics per
/// identifier; concurrent resolution of the same identifier rejects the
/// second writer.
pub struct RequestLedger {
    requests: RwLock<IndexMap<String, HelpRequest>>,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self {
            requests: RwLock::new(IndexMap::new()),
        }
    }

    /// Insert a new Pending record
    ///
    /// Fails with `DuplicateRequest` on identifier collision.
    pub fn create(&self, id: &str, question: &str) -> Result<HelpRequest> {
        let mut requests = self.write_lock()?;
        if requests.contains_key(id) {
            warn!(id, "rejected duplicate help request identifier");
            return Err(FrontdeskError::DuplicateRequest(id.to_string()));
        }

        let request = HelpRequest::new(id.to_string(), question.to_string());
        requests.insert(id.to_string(), request.clone());
        info!(id, question, "help request created");
        Ok(request)
    }

    /// Fetch a record by identifier
    pub fn get(&self, id: &str) -> Result<HelpRequest> {
        self.read_lock()?
            .get(id)
            .cloned()
            .ok_or_else(|| FrontdeskError::RequestNotFound(id.to_string()))
    }

    /// Set a record's status
    ///
    /// Fails with `RequestNotFound` on an unknown identifier rather than
    /// silently doing nothing.
    ///
    /// This does not touch the record's answer, so marking a record
    /// `Resolved` through this path alone leaves the answer/status
    /// invariant violated until `save_answer` runs. Prefer [`resolve`],
    /// which applies both sides of the transition atomically.
    ///
    /// [`resolve`]: RequestLedger::resolve
    pub fn update_status(&self, id: &str, status: RequestStatus) -> Result<()> {
        let mut requests = self.write_lock()?;
        let request = requests
            .get_mut(id)
            .ok_or_else(|| FrontdeskError::RequestNotFound(id.to_string()))?;
        request.status = status;
        Ok(())
    }

    /// Store an answer on a record without changing its status
    pub fn save_answer(&self, id: &str, answer: &str) -> Result<()> {
        let mut requests = self.write_lock()?;
        let request = requests
            .get_mut(id)
            .ok_or_else(|| FrontdeskError::RequestNotFound(id.to_string()))?;
        request.answer = Some(answer.to_string());
        Ok(())
    }

    /// Atomically mark a Pending record Resolved with the given answer
    ///
    /// The whole transition happens under one write lock: an unknown
    /// identifier fails with `RequestNotFound`, and a record that is already
    /// Resolved fails with `AlreadyResolved` so the first writer's answer
    /// stands.
    pub fn resolve(&self, id: &str, answer: &str) -> Result<HelpRequest> {
        let mut requests = self.write_lock()?;
        let request = requests
            .get_mut(id)
            .ok_or_else(|| FrontdeskError::RequestNotFound(id.to_string()))?;

        if request.status == RequestStatus::Resolved {
            warn!(id, "rejected second resolution of help request");
            return Err(FrontdeskError::AlreadyResolved(id.to_string()));
        }

        request.answer = Some(answer.to_string());
        request.status = RequestStatus::Resolved;
        info!(id, "help request resolved");
        Ok(request.clone())
    }

    /// All records in insertion order
    pub fn list_all(&self) -> Vec<HelpRequest> {
        match self.requests.read() {
            Ok(requests) => requests.values().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().values().cloned().collect(),
        }
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.requests.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_lock(&self) -> Result<std::sync::RwLockReadGuard<'_, IndexMap<String, HelpRequest>>> {
        self.requests
            .read()
            .map_err(|_| FrontdeskError::Internal("request ledger lock poisoned".to_string()))
    }

    fn write_lock(&self) -> Result<std::sync::RwLockWriteGuard<'_, IndexMap<String, HelpRequest>>> {
        self.requests
            .write()
            .map_err(|_| FrontdeskError::Internal("request ledger lock poisoned".to_string()))
    }
}

impl Default for RequestLedger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let ledger = RequestLedger::new();
        let request = ledger.create("req_1", "Do you deliver?").unwrap();
        assert!(request.is_pending());

        let fetched = ledger.get("req_1").unwrap();
        assert_eq!(fetched.question, "Do you deliver?");
        assert!(fetched.answer.is_none());
    }

    #[test]
    fn test_create_rejects_duplicate_id() {
        let ledger = RequestLedger::new();
        ledger.create("req_1", "First?").unwrap();

        let err = ledger.create("req_1", "Second?").unwrap_err();
        assert!(matches!(err, FrontdeskError::DuplicateRequest(_)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_mutation_of_unknown_id_errors() {
        let ledger = RequestLedger::new();

        let err = ledger.update_status("missing", RequestStatus::Resolved).unwrap_err();
        assert!(matches!(err, FrontdeskError::RequestNotFound(_)));

        let err = ledger.save_answer("missing", "9am-5pm").unwrap_err();
        assert!(matches!(err, FrontdeskError::RequestNotFound(_)));

        let err = ledger.resolve("missing", "9am-5pm").unwrap_err();
        assert!(matches!(err, FrontdeskError::RequestNotFound(_)));
    }

    #[test]
    fn test_save_answer_then_update_status_restores_invariant() {
        let ledger = RequestLedger::new();
        ledger.create("req_1", "Do you deliver?").unwrap();

        ledger.save_answer("req_1", "Yes").unwrap();
        ledger.update_status("req_1", RequestStatus::Resolved).unwrap();

        let record = ledger.get("req_1").unwrap();
        assert_eq!(record.answer.as_deref(), Some("Yes"));
        assert!(record.invariant_holds());
    }

    #[test]
    fn test_resolve_sets_answer_and_status_together() {
        let ledger = RequestLedger::new();
        ledger.create("req_1", "What are your business hours?").unwrap();

        let resolved = ledger.resolve("req_1", "9am-5pm").unwrap();
        assert_eq!(resolved.status, RequestStatus::Resolved);
        assert_eq!(resolved.answer.as_deref(), Some("9am-5pm"));
        assert!(resolved.invariant_holds());
    }

    #[test]
    fn test_resolve_rejects_second_writer() {
        let ledger = RequestLedger::new();
        ledger.create("req_1", "What are your business hours?").unwrap();
        ledger.resolve("req_1", "9am-5pm").unwrap();

        let err = ledger.resolve("req_1", "10am-6pm").unwrap_err();
        assert!(matches!(err, FrontdeskError::AlreadyResolved(_)));

        // First writer's answer stands
        let record = ledger.get("req_1").unwrap();
        assert_eq!(record.answer.as_deref(), Some("9am-5pm"));
    }

    #[test]
    fn test_list_all_preserves_insertion_order() {
        let ledger = RequestLedger::new();
        ledger.create("req_1", "First?").unwrap();
        ledger.create("req_2", "Second?").unwrap();
        ledger.create("req_3", "Third?").unwrap();

        let ids: Vec<String> = ledger.list_all().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["req_1", "req_2", "req_3"]);
    }
}
