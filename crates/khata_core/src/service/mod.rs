//! Ledger use-case services.
//!
//! # Responsibility
//! - Orchestrate persistence and confirmation ports into the store API.
//! - Keep UI layers decoupled from storage details.

pub mod confirm;
pub mod ledger;

pub use confirm::{AlwaysConfirm, AlwaysDecline, ConfirmGate};
pub use ledger::{LedgerStore, EXPENSES_KEY, STUDENTS_KEY};
