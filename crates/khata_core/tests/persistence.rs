use chrono::NaiveDate;
use khata_core::db::{open_db, open_db_in_memory};
use khata_core::{
    AlwaysConfirm, KvStore, LedgerStore, NewStudent, PaymentMethod, RepoError, SqliteKvStore,
    STUDENTS_KEY,
};
use rusqlite::Connection;

fn sqlite_kv() -> SqliteKvStore {
    SqliteKvStore::try_new(open_db_in_memory().unwrap()).unwrap()
}

#[test]
fn sqlite_kv_put_get_remove_roundtrip() {
    let mut kv = sqlite_kv();

    assert_eq!(kv.get("missing").unwrap(), None);

    kv.put("greeting", "salam").unwrap();
    assert_eq!(kv.get("greeting").unwrap().as_deref(), Some("salam"));

    kv.put("greeting", "adab").unwrap();
    assert_eq!(kv.get("greeting").unwrap().as_deref(), Some("adab"));

    kv.remove("greeting").unwrap();
    assert_eq!(kv.get("greeting").unwrap(), None);
}

#[test]
fn sqlite_kv_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteKvStore::try_new(conn);
    assert!(matches!(result, Err(RepoError::MissingKvTable)));
}

#[test]
fn corrupt_snapshot_falls_back_to_seed_data() {
    let mut kv = sqlite_kv();
    kv.put(STUDENTS_KEY, "not json at all {{{").unwrap();

    let store = LedgerStore::open(kv, AlwaysConfirm);

    assert_eq!(store.students().len(), 3);
    assert_eq!(store.students()[0].id, "GTTC-1001");
}

#[test]
fn empty_snapshot_falls_back_to_seed_data() {
    let mut kv = sqlite_kv();
    kv.put(STUDENTS_KEY, "[]").unwrap();

    let store = LedgerStore::open(kv, AlwaysConfirm);
    assert_eq!(store.students().len(), 3);
}

#[test]
fn mutations_survive_reopening_the_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("khata.db");

    {
        let kv = SqliteKvStore::try_new(open_db(&path).unwrap()).unwrap();
        let mut store = LedgerStore::open(kv, AlwaysConfirm);
        store
            .add_student(
                NewStudent {
                    id: "GTTC-2001".to_string(),
                    name: "নাসরিন আক্তার".to_string(),
                    mobile: "01612345678".to_string(),
                    course: "Tailoring".to_string(),
                    fee: 4000,
                    admission_date: NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
                },
                1500,
                PaymentMethod::Rocket,
            )
            .unwrap();
    }

    let kv = SqliteKvStore::try_new(open_db(&path).unwrap()).unwrap();
    let store = LedgerStore::open(kv, AlwaysConfirm);

    assert_eq!(store.students().len(), 4);
    let restored = store.students().last().unwrap();
    assert_eq!(restored.id, "GTTC-2001");
    assert_eq!(restored.payments.len(), 1);
    assert_eq!(restored.payments[0].method, PaymentMethod::Rocket);
}
