//! Help request ledger
//!
//! Records every escalated question and its resolution state. Records are
//! created Pending, resolved at most once, and never deleted for the life of
//! the process.

pub mod models;
pub mod store;

pub use models::{HelpRequest, RequestStatus};
pub use store::RequestLedger;
