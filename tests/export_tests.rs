//! tests/export_tests.rs

use identity_migrator::export::export_report_json;
use identity_migrator::migrate::{MigrationReport, RecordOutcome, RecordReport};
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

fn sample_report() -> MigrationReport {
    MigrationReport {
        records: vec![
            RecordReport {
                old_id: "a1".into(),
                email: Some("a@example.com".into()),
                had_password: true,
                outcome: RecordOutcome::Imported {
                    new_id: "kratos-1".into(),
                },
            },
            RecordReport {
                old_id: "b2".into(),
                email: None,
                had_password: true,
                outcome: RecordOutcome::Failed {
                    reason: "unsupported PRF code 3".into(),
                },
            },
        ],
    }
}

#[test]
fn export_contains_totals_and_outcomes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");

    export_report_json(&sample_report(), &path).expect("export failed");

    let json: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(json["report_format"], "identity-migrator-report-v1");
    assert!(json["generated_at"].as_str().unwrap().ends_with('Z'));
    assert_eq!(json["total_users"], 2);
    assert_eq!(json["imported"], 1);
    assert_eq!(json["failed"], 1);

    let first = &json["records"][0];
    assert_eq!(first["old_id"], "a1");
    assert_eq!(first["outcome"], "imported");
    assert_eq!(first["new_id"], "kratos-1");

    let second = &json["records"][1];
    assert_eq!(second["outcome"], "failed");
    assert_eq!(second["reason"], "unsupported PRF code 3");
    assert!(second["email"].is_null());
}

#[test]
fn export_never_contains_hashes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("report.json");

    export_report_json(&sample_report(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains("pbkdf2"));
    assert!(!text.contains("hashed_password"));
}

#[test]
fn export_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing").join("report.json");
    assert!(export_report_json(&MigrationReport::default(), &path).is_err());
}
