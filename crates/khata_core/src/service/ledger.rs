//! Ledger store: students-with-payments and expenses.
//!
//! # Responsibility
//! - Hold both collections in memory and mirror every successful mutation
//!   to the injected key-value port (write-through, whole-collection).
//! - Load persisted snapshots at startup, falling back to the seed dataset.
//! - Gate destructive operations behind the injected confirmation port.
//!
//! # Invariants
//! - Student ids are unique case-insensitively at all times.
//! - Students keep insertion order (new last); expenses are newest-first.
//! - Failed validations leave both collections untouched.
//! - Persistence failures are logged, never propagated to the caller.

use crate::model::{Expense, NewExpense, NewStudent, Payment, PaymentMethod, Student};
use crate::repo::KvStore;
use crate::seed::{seed_expenses, seed_students};
use crate::service::confirm::ConfirmGate;
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Storage key holding the JSON array of students.
pub const STUDENTS_KEY: &str = "khata.students";
/// Storage key holding the JSON array of expenses.
pub const EXPENSES_KEY: &str = "khata.expenses";

/// In-memory ledger mirrored write-through to a key-value port.
///
/// Exclusively owned by its caller; all operations run to completion
/// synchronously, so no locking discipline is needed.
pub struct LedgerStore<K: KvStore, C: ConfirmGate> {
    kv: K,
    confirm: C,
    students: Vec<Student>,
    expenses: Vec<Expense>,
}

impl<K: KvStore, C: ConfirmGate> LedgerStore<K, C> {
    /// Opens the ledger over the given ports, loading each collection from
    /// its storage key.
    ///
    /// # Contract
    /// - A missing, unparsable, or empty snapshot is replaced by the seed
    ///   dataset; initialization never fails.
    /// - Read failures are logged and recovered, never surfaced.
    pub fn open(kv: K, confirm: C) -> Self {
        let students =
            load_collection(&kv, STUDENTS_KEY, "students").unwrap_or_else(seed_students);
        let expenses =
            load_collection(&kv, EXPENSES_KEY, "expenses").unwrap_or_else(seed_expenses);

        info!(
            "event=ledger_open module=service status=ok students={} expenses={}",
            students.len(),
            expenses.len()
        );

        Self {
            kv,
            confirm,
            students,
            expenses,
        }
    }

    /// Current students snapshot, insertion order.
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Current expenses snapshot, newest first.
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Admits a new student.
    ///
    /// Returns the student id, or `None` when a student with the same id
    /// (compared case-insensitively) already exists. On rejection nothing
    /// is mutated.
    ///
    /// `initial_payment > 0` seeds the payment list with one "Admission Fee"
    /// entry dated at the admission date, using `method`.
    pub fn add_student(
        &mut self,
        data: NewStudent,
        initial_payment: i64,
        method: PaymentMethod,
    ) -> Option<String> {
        let needle = data.id.to_lowercase();
        let duplicate = self
            .students
            .iter()
            .any(|student| student.id.to_lowercase() == needle);
        if duplicate {
            info!(
                "event=student_add module=service status=rejected reason=duplicate_id id={}",
                data.id
            );
            return None;
        }

        let student = Student::from_admission(data, initial_payment, method);
        let id = student.id.clone();
        self.students.push(student);
        self.persist_students();

        info!("event=student_add module=service status=ok id={id}");
        Some(id)
    }

    /// Appends a payment to the student with exactly this id.
    ///
    /// Returns `false` without mutating anything when the student does not
    /// exist. Payment contents are accepted as supplied; the caller owns
    /// amount/date validation.
    pub fn add_payment(&mut self, student_id: &str, payment: Payment) -> bool {
        let Some(student) = self
            .students
            .iter_mut()
            .find(|student| student.id == student_id)
        else {
            info!(
                "event=payment_add module=service status=rejected reason=unknown_student id={student_id}"
            );
            return false;
        };

        student.payments.push(payment);
        self.persist_students();

        info!("event=payment_add module=service status=ok id={student_id}");
        true
    }

    /// Removes the student with exactly this id, gated by confirmation.
    ///
    /// Returns `true` only when the gate approved and a record was removed.
    pub fn delete_student(&mut self, id: &str) -> bool {
        if !self.confirm.confirm("Delete this student's data?") {
            info!("event=student_delete module=service status=declined id={id}");
            return false;
        }

        let before = self.students.len();
        self.students.retain(|student| student.id != id);
        if self.students.len() == before {
            info!(
                "event=student_delete module=service status=rejected reason=unknown_student id={id}"
            );
            return false;
        }

        self.persist_students();
        info!("event=student_delete module=service status=ok id={id}");
        true
    }

    /// Records an operating expense with a generated unique id, newest
    /// first. Returns the generated id.
    pub fn add_expense(&mut self, data: NewExpense) -> String {
        let expense = Expense::with_generated_id(data);
        let id = expense.id.clone();
        self.expenses.insert(0, expense);
        self.persist_expenses();

        info!("event=expense_add module=service status=ok id={id}");
        id
    }

    /// Removes the expense with exactly this id, gated by confirmation.
    pub fn delete_expense(&mut self, id: &str) -> bool {
        if !self.confirm.confirm("Delete this expense?") {
            info!("event=expense_delete module=service status=declined id={id}");
            return false;
        }

        let before = self.expenses.len();
        self.expenses.retain(|expense| expense.id != id);
        if self.expenses.len() == before {
            info!(
                "event=expense_delete module=service status=rejected reason=unknown_expense id={id}"
            );
            return false;
        }

        self.persist_expenses();
        info!("event=expense_delete module=service status=ok id={id}");
        true
    }

    /// Bulk-replaces both collections from an import payload, gated by
    /// confirmation.
    ///
    /// Each side must decode as a JSON sequence of typed records; a missing,
    /// non-sequence, or undecodable side becomes an empty collection instead
    /// of failing the whole import. Both keys are persisted immediately.
    pub fn import_data(&mut self, payload: &Value) -> bool {
        if !self
            .confirm
            .confirm("Replace all current data with the imported data?")
        {
            info!("event=import module=service status=declined");
            return false;
        }

        self.students = decode_side(payload.get("students"), "students");
        self.expenses = decode_side(payload.get("expenses"), "expenses");
        self.persist_students();
        self.persist_expenses();

        info!(
            "event=import module=service status=ok students={} expenses={}",
            self.students.len(),
            self.expenses.len()
        );
        true
    }

    /// Restores both collections to the seed dataset, gated by confirmation.
    /// Both storage keys are overwritten.
    pub fn reset_data(&mut self) -> bool {
        if !self.confirm.confirm("Reset all data to the demo dataset?") {
            info!("event=reset module=service status=declined");
            return false;
        }

        self.students = seed_students();
        self.expenses = seed_expenses();
        self.persist_students();
        self.persist_expenses();

        info!("event=reset module=service status=ok");
        true
    }

    fn persist_students(&mut self) {
        persist(&mut self.kv, STUDENTS_KEY, &self.students, "students");
    }

    fn persist_expenses(&mut self) {
        persist(&mut self.kv, EXPENSES_KEY, &self.expenses, "expenses");
    }
}

/// Loads one collection from its storage key.
///
/// Returns `None` when the key is absent, the snapshot does not decode, or
/// the decoded collection is empty, so the caller substitutes seed data.
fn load_collection<T: DeserializeOwned>(
    kv: &impl KvStore,
    key: &str,
    label: &str,
) -> Option<Vec<T>> {
    let raw = match kv.get(key) {
        Ok(raw) => raw?,
        Err(err) => {
            warn!(
                "event=snapshot_load module=service status=error collection={label} error={err}"
            );
            return None;
        }
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) if items.is_empty() => {
            info!(
                "event=snapshot_load module=service status=empty collection={label}"
            );
            None
        }
        Ok(items) => Some(items),
        Err(err) => {
            warn!(
                "event=snapshot_load module=service status=corrupt collection={label} error={err}"
            );
            None
        }
    }
}

/// Writes one collection whole to its storage key, best effort.
fn persist<T: Serialize>(kv: &mut impl KvStore, key: &str, items: &[T], label: &str) {
    let json = match serde_json::to_string(items) {
        Ok(json) => json,
        Err(err) => {
            warn!(
                "event=snapshot_write module=service status=error collection={label} error={err}"
            );
            return;
        }
    };

    if let Err(err) = kv.put(key, &json) {
        warn!(
            "event=snapshot_write module=service status=error collection={label} error={err}"
        );
    }
}

/// Decodes one side of an import payload, substituting an empty collection
/// for anything that is not a well-formed sequence of records.
fn decode_side<T: DeserializeOwned>(value: Option<&Value>, label: &str) -> Vec<T> {
    let Some(value) = value else {
        warn!("event=import module=service status=substituted collection={label} reason=missing");
        return Vec::new();
    };

    if !value.is_array() {
        warn!(
            "event=import module=service status=substituted collection={label} reason=not_a_sequence"
        );
        return Vec::new();
    }

    match serde_json::from_value::<Vec<T>>(value.clone()) {
        Ok(items) => items,
        Err(err) => {
            warn!(
                "event=import module=service status=substituted collection={label} reason=decode error={err}"
            );
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::decode_side;
    use crate::model::Expense;
    use serde_json::json;

    #[test]
    fn decode_side_substitutes_empty_for_non_sequence() {
        let value = json!({"oops": true});
        let decoded: Vec<Expense> = decode_side(Some(&value), "expenses");
        assert!(decoded.is_empty());
    }

    #[test]
    fn decode_side_substitutes_empty_for_missing() {
        let decoded: Vec<Expense> = decode_side(None, "expenses");
        assert!(decoded.is_empty());
    }

    #[test]
    fn decode_side_accepts_well_formed_sequence() {
        let value = json!([{
            "id": "9",
            "category": "Chalk",
            "amount": 150,
            "date": "2026-08-01",
            "description": "Whiteboard markers",
            "method": "Cash"
        }]);
        let decoded: Vec<Expense> = decode_side(Some(&value), "expenses");
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].id, "9");
    }
}
