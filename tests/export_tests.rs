use predicates::str::contains;
use std::fs;

mod common;
use common::{init_with_agenda, rag, setup_workspace, temp_out};

#[test]
fn test_export_csv_contains_schedule() {
    let dir = setup_workspace("export_csv");
    let out = temp_out("export_csv", "csv");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args([
            "--dir", &dir, "--test", "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("position,item,start,length_minutes,speaker,notes,sub_item"));
    assert!(content.contains("Key Developments"));
    assert!(content.contains("7:15 PM"));
    assert!(content.contains("Naokimi"));
}

#[test]
fn test_export_json_rows() {
    let dir = setup_workspace("export_json");
    let out = temp_out("export_json", "json");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args([
            "--dir", &dir, "--test", "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = rows.as_array().expect("array");
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0]["start"], "7:00 PM");
    assert_eq!(rows[3]["sub_item"], true);
    assert_eq!(rows[11]["start"], "8:41 PM");
}

#[test]
fn test_export_xlsx_writes_file() {
    let dir = setup_workspace("export_xlsx");
    let out = temp_out("export_xlsx", "xlsx");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args([
            "--dir", &dir, "--test", "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("xlsx file exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_archived_meeting() {
    let dir = setup_workspace("export_archived");
    let out = temp_out("export_archived", "csv");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "set", "--date", "2026-06-18"])
        .assert()
        .success();
    rag()
        .args(["--dir", &dir, "--test", "archive", "--reset"])
        .assert()
        .success();

    rag()
        .args([
            "--dir",
            &dir,
            "--test",
            "export",
            "--format",
            "csv",
            "--meeting",
            "2026-06-18",
            "--file",
            &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.contains("Welcome, Rollcall, Prayer, Trinity Check-in"));
}

#[test]
fn test_export_unknown_meeting_fails() {
    let dir = setup_workspace("export_unknown");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args([
            "--dir",
            &dir,
            "--test",
            "export",
            "--format",
            "csv",
            "--meeting",
            "1999-01-01",
        ])
        .assert()
        .failure()
        .stderr(contains("No archived meeting"));
}

#[test]
fn test_export_without_agenda_fails() {
    let dir = setup_workspace("export_none");

    rag()
        .args(["--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "export", "--format", "csv"])
        .assert()
        .failure()
        .stderr(contains("No current agenda"));
}
