//! Dashboard-style totals over ledger snapshots.
//!
//! # Responsibility
//! - Sum collections and expenses for summary display.
//! - Compute per-student dues.
//!
//! Pure functions over snapshots; holds no state.

use crate::model::{Expense, Student};

/// Aggregate totals for the dashboard view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerSummary {
    pub student_count: usize,
    /// Sum of all course fees.
    pub total_fees: i64,
    /// Sum of all recorded payments across students.
    pub total_collected: i64,
    /// Sum of all operating expenses.
    pub total_expenses: i64,
    /// Collected minus spent.
    pub net_balance: i64,
}

/// Computes aggregate totals over the current snapshots.
pub fn summarize(students: &[Student], expenses: &[Expense]) -> LedgerSummary {
    let total_fees = students.iter().map(|student| student.fee).sum();
    let total_collected = students.iter().map(Student::total_paid).sum::<i64>();
    let total_expenses = expenses.iter().map(|expense| expense.amount).sum::<i64>();

    LedgerSummary {
        student_count: students.len(),
        total_fees,
        total_collected,
        total_expenses,
        net_balance: total_collected - total_expenses,
    }
}

/// Outstanding amount for one student: fee minus everything paid so far.
pub fn student_due(student: &Student) -> i64 {
    student.fee - student.total_paid()
}
