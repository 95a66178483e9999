//! Core ledger logic for Khata, a training-center admission and expense
//! tracker. This crate is the single source of truth for store invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod report;
pub mod seed;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::{
    Expense, NewExpense, NewStudent, Payment, PaymentMethod, Student, ADMISSION_FEE_CATEGORY,
};
pub use repo::{KvStore, MemoryKvStore, RepoError, RepoResult, SqliteKvStore};
pub use report::{student_due, summarize, LedgerSummary};
pub use service::{
    AlwaysConfirm, AlwaysDecline, ConfirmGate, LedgerStore, EXPENSES_KEY, STUDENTS_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
