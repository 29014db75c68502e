//! Automated responder and resolution handling
//!
//! The [`Responder`] answers questions from the knowledge base or escalates
//! them into the ledger; the [`Resolver`] applies a supervisor's answer,
//! notifies the original requester, and teaches the knowledge base.

pub mod notify;
pub mod resolver;
pub mod responder;

pub use notify::{ConsoleNotifier, Notifier};
pub use resolver::Resolver;
pub use responder::{Reply, Responder};
