//! Ledger domain model for students and expenses.
//!
//! # Responsibility
//! - Define the canonical records persisted by the ledger store.
//! - Keep the JSON wire shape compatible with previously exported data.
//!
//! # Invariants
//! - A `Student` id is unique case-insensitively across the collection.
//! - An `Expense` id is assigned once at creation and never reused.
//! - A `Payment` belongs to exactly one student and is never reordered.

pub mod expense;
pub mod student;

pub use expense::{Expense, NewExpense};
pub use student::{NewStudent, Payment, PaymentMethod, Student, ADMISSION_FEE_CATEGORY};
