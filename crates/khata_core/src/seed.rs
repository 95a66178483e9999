//! Built-in demo dataset used when no persisted snapshot exists.
//!
//! # Responsibility
//! - Provide the fixed fallback students and expenses for first start.
//! - Date entries relative to the current day so the demo dashboard always
//!   shows recent activity.

use crate::model::{Expense, Payment, PaymentMethod, Student, ADMISSION_FEE_CATEGORY};
use chrono::{Duration, Local, NaiveDate};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Demo students shipped with a fresh ledger.
pub fn seed_students() -> Vec<Student> {
    let today = today();
    let yesterday = today - Duration::days(1);
    let last_month = today - Duration::days(30);

    vec![
        Student {
            id: "GTTC-1001".to_string(),
            name: "মোঃ রহিম উদ্দিন".to_string(),
            mobile: "01712345678".to_string(),
            course: "Computer Office App".to_string(),
            fee: 5000,
            admission_date: last_month,
            payments: vec![
                Payment {
                    amount: 2000,
                    date: last_month,
                    method: PaymentMethod::Cash,
                    category: ADMISSION_FEE_CATEGORY.to_string(),
                },
                Payment {
                    amount: 3000,
                    date: today,
                    method: PaymentMethod::Bkash,
                    category: "Monthly Fee".to_string(),
                },
            ],
        },
        Student {
            id: "GTTC-1002".to_string(),
            name: "মোসাঃ ফাতেমা বেগম".to_string(),
            mobile: "01812345678".to_string(),
            course: "Graphics Design".to_string(),
            fee: 8000,
            admission_date: last_month,
            payments: vec![Payment {
                amount: 4000,
                date: last_month,
                method: PaymentMethod::Cash,
                category: ADMISSION_FEE_CATEGORY.to_string(),
            }],
        },
        Student {
            id: "GTTC-1003".to_string(),
            name: "আব্দুল করিম".to_string(),
            mobile: "01912345678".to_string(),
            course: "Electrical Wiring".to_string(),
            fee: 6000,
            admission_date: yesterday,
            payments: vec![Payment {
                amount: 1000,
                date: yesterday,
                method: PaymentMethod::Nagad,
                category: ADMISSION_FEE_CATEGORY.to_string(),
            }],
        },
    ]
}

/// Demo expenses shipped with a fresh ledger.
pub fn seed_expenses() -> Vec<Expense> {
    let today = today();
    let yesterday = today - Duration::days(1);
    let last_month = today - Duration::days(30);

    vec![
        Expense {
            id: "1".to_string(),
            category: "Office Rent".to_string(),
            amount: 5000,
            date: last_month,
            description: "Office rent for last month".to_string(),
            method: PaymentMethod::Cash,
        },
        Expense {
            id: "2".to_string(),
            category: "Internet Bill".to_string(),
            amount: 1000,
            date: yesterday,
            description: "Broadband bill".to_string(),
            method: PaymentMethod::Bkash,
        },
    ]
}
