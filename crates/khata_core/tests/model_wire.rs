use chrono::NaiveDate;
use khata_core::{Expense, Payment, PaymentMethod, Student};

#[test]
fn student_serialization_uses_expected_wire_fields() {
    let student = Student {
        id: "GTTC-1001".to_string(),
        name: "মোঃ রহিম উদ্দিন".to_string(),
        mobile: "01712345678".to_string(),
        course: "Computer Office App".to_string(),
        fee: 5000,
        admission_date: NaiveDate::from_ymd_opt(2026, 7, 24).unwrap(),
        payments: vec![Payment {
            amount: 2000,
            date: NaiveDate::from_ymd_opt(2026, 7, 24).unwrap(),
            method: PaymentMethod::Bkash,
            category: "Admission Fee".to_string(),
        }],
    };

    let json = serde_json::to_value(&student).unwrap();
    assert_eq!(json["id"], "GTTC-1001");
    assert_eq!(json["admissionDate"], "2026-07-24");
    assert_eq!(json["fee"], 5000);
    assert_eq!(json["payments"][0]["method"], "Bkash");
    assert_eq!(json["payments"][0]["date"], "2026-07-24");
    assert_eq!(json["payments"][0]["category"], "Admission Fee");

    let decoded: Student = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, student);
}

#[test]
fn expense_serialization_uses_expected_wire_fields() {
    let expense = Expense {
        id: "2".to_string(),
        category: "Internet Bill".to_string(),
        amount: 1000,
        date: NaiveDate::from_ymd_opt(2026, 8, 22).unwrap(),
        description: "Broadband bill".to_string(),
        method: PaymentMethod::Nagad,
    };

    let json = serde_json::to_value(&expense).unwrap();
    assert_eq!(json["id"], "2");
    assert_eq!(json["method"], "Nagad");
    assert_eq!(json["date"], "2026-08-22");

    let decoded: Expense = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, expense);
}

#[test]
fn legacy_snapshot_decodes_into_typed_collection() {
    // Shape exported by the previous deployment of this tool.
    let raw = r#"[
        {
            "id": "GTTC-1003",
            "name": "আব্দুল করিম",
            "mobile": "01912345678",
            "course": "Electrical Wiring",
            "fee": 6000,
            "admissionDate": "2026-08-22",
            "payments": [
                {"amount": 1000, "date": "2026-08-22", "method": "Nagad", "category": "Admission Fee"}
            ]
        }
    ]"#;

    let students: Vec<Student> = serde_json::from_str(raw).unwrap();
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].payments[0].method, PaymentMethod::Nagad);
    assert_eq!(
        students[0].admission_date,
        NaiveDate::from_ymd_opt(2026, 8, 22).unwrap()
    );
}
