//! tests/db_tests.rs

mod support;
use support::TestUserDb;

use identity_migrator::db::{load_users, open_user_db, UserRecord};

#[test]
fn load_users_returns_rows_ordered_by_id() {
    let db = TestUserDb::new();
    db.insert_user("b-2", Some("bob@example.com"), false, None);
    db.insert_user("a-1", Some("alice@example.com"), true, Some("AAAB"));
    db.insert_user("c-3", None, false, None);

    let conn = open_user_db(db.path()).expect("open read-only");
    let users = load_users(&conn).unwrap();

    assert_eq!(
        users,
        vec![
            UserRecord {
                id: "a-1".into(),
                email: Some("alice@example.com".into()),
                email_confirmed: true,
                password_hash: Some("AAAB".into()),
            },
            UserRecord {
                id: "b-2".into(),
                email: Some("bob@example.com".into()),
                email_confirmed: false,
                password_hash: None,
            },
            UserRecord {
                id: "c-3".into(),
                email: None,
                email_confirmed: false,
                password_hash: None,
            },
        ]
    );
}

#[test]
fn open_user_db_is_read_only() {
    let db = TestUserDb::new();
    let conn = open_user_db(db.path()).unwrap();
    let result = conn.execute(
        "INSERT INTO AspNetUsers (Id, EmailConfirmed) VALUES ('x', 0)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn open_user_db_fails_for_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(open_user_db(dir.path().join("nope.db")).is_err());
}
