//! Student domain model with embedded payment history.
//!
//! # Responsibility
//! - Define the `Student` record and its owned `Payment` entries.
//! - Provide the admission constructor that seeds the first payment.
//!
//! # Invariants
//! - `payments` preserves insertion order; entries are never reordered.
//! - An admission payment, when present, is the first list element.
//! - No field other than `payments` is mutated after creation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Category label used for the synthetic payment created at admission.
pub const ADMISSION_FEE_CATEGORY: &str = "Admission Fee";

/// Supported payment channels.
///
/// Serialized with their display spellings (`"Bkash"`, `"Nagad"`, ...) to
/// stay byte-compatible with previously persisted snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    Cash,
    Bkash,
    Nagad,
    Rocket,
    Bank,
}

impl Display for PaymentMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Cash => "Cash",
            Self::Bkash => "Bkash",
            Self::Nagad => "Nagad",
            Self::Rocket => "Rocket",
            Self::Bank => "Bank",
        };
        write!(f, "{name}")
    }
}

/// One fee-payment event owned by a single student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Amount in whole taka. Positive by caller contract; not re-validated.
    pub amount: i64,
    pub date: NaiveDate,
    pub method: PaymentMethod,
    /// Free label such as "Admission Fee" or "Monthly Fee".
    pub category: String,
}

/// Enrolled trainee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Externally assigned identifier, unique case-insensitively.
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub course: String,
    /// Total course fee in whole taka.
    pub fee: i64,
    #[serde(rename = "admissionDate")]
    pub admission_date: NaiveDate,
    /// Chronological entry order, not necessarily date order.
    pub payments: Vec<Payment>,
}

/// Admission form data: a `Student` minus its payment history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    pub mobile: String,
    pub course: String,
    pub fee: i64,
    pub admission_date: NaiveDate,
}

impl Student {
    /// Builds a student from admission data.
    ///
    /// # Contract
    /// - `initial_payment > 0` seeds one payment dated at admission with
    ///   category [`ADMISSION_FEE_CATEGORY`].
    /// - `initial_payment <= 0` leaves the payment list empty.
    pub fn from_admission(
        data: NewStudent,
        initial_payment: i64,
        method: PaymentMethod,
    ) -> Self {
        let payments = if initial_payment > 0 {
            vec![Payment {
                amount: initial_payment,
                date: data.admission_date,
                method,
                category: ADMISSION_FEE_CATEGORY.to_string(),
            }]
        } else {
            Vec::new()
        };

        Self {
            id: data.id,
            name: data.name,
            mobile: data.mobile,
            course: data.course,
            fee: data.fee,
            admission_date: data.admission_date,
            payments,
        }
    }

    /// Sum of all recorded payments.
    pub fn total_paid(&self) -> i64 {
        self.payments.iter().map(|payment| payment.amount).sum()
    }
}
