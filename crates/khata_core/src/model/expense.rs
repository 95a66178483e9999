//! Operating-expense domain model.
//!
//! # Responsibility
//! - Define the top-level `Expense` record independent of students.
//! - Generate stable unique ids at creation time.
//!
//! # Invariants
//! - `id` is assigned exactly once and never reused for another expense.
//! - Expenses are ordered newest-first in the collection; the record itself
//!   carries no position.

use super::student::PaymentMethod;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One operating-cost record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// System-generated identifier, unique and never reused.
    pub id: String,
    pub category: String,
    /// Amount in whole taka.
    pub amount: i64,
    pub date: NaiveDate,
    pub description: String,
    pub method: PaymentMethod,
}

/// Expense form data: an `Expense` minus its generated id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExpense {
    pub category: String,
    pub amount: i64,
    pub date: NaiveDate,
    pub description: String,
    pub method: PaymentMethod,
}

impl Expense {
    /// Builds an expense with a freshly generated unique id.
    pub fn with_generated_id(data: NewExpense) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            category: data.category,
            amount: data.amount,
            date: data.date,
            description: data.description,
            method: data.method,
        }
    }
}
