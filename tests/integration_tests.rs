use predicates::str::contains;
use std::path::PathBuf;

mod common;
use common::{init_with_agenda, rag, setup_workspace};

#[test]
fn test_init_creates_workspace() {
    let dir = setup_workspace("init");

    rag()
        .args(["--dir", &dir, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("initialization completed"));

    assert!(PathBuf::from(&dir).join("archive.yaml").exists());
}

#[test]
fn test_new_builds_schedule_from_template() {
    let dir = setup_workspace("new_schedule");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("Northeast Pastors Meeting"))
        .stdout(contains("Welcome, Rollcall, Prayer, Trinity Check-in"))
        .stdout(contains("7:00 PM"))
        .stdout(contains("7:15 PM"))
        .stdout(contains("7:25 PM"))
        .stdout(contains("8:41 PM"))
        .stdout(contains("15 min"));
}

#[test]
fn test_new_accepts_24_hour_input() {
    let dir = setup_workspace("new_24h");
    init_with_agenda(&dir, "19:00");

    rag()
        .args(["--dir", &dir, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("7:00 PM"));
}

#[test]
fn test_new_rejects_unparsable_time_without_touching_state() {
    let dir = setup_workspace("new_bad_time");

    rag()
        .args(["--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "new", "--at", "noon"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    // Nothing was produced.
    assert!(!PathBuf::from(&dir).join("current.yaml").exists());
}

#[test]
fn test_new_refuses_overwrite_without_force() {
    let dir = setup_workspace("new_force");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "new", "--at", "8:00 PM"])
        .assert()
        .failure()
        .stderr(contains("--force"));

    // Still the 7 PM agenda.
    rag()
        .args(["--dir", &dir, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("7:00 PM"));

    rag()
        .args(["--dir", &dir, "--test", "new", "--at", "8:00 PM", "--force"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("8:00 PM"));
}

#[test]
fn test_new_requires_initialized_workspace() {
    let dir = setup_workspace("new_no_init");

    rag()
        .args(["--dir", &dir, "--test", "new", "--at", "7:00 PM"])
        .assert()
        .failure()
        .stderr(contains("does not exist"));
}

#[test]
fn test_show_without_agenda_fails() {
    let dir = setup_workspace("show_empty");

    rag()
        .args(["--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "show"])
        .assert()
        .failure()
        .stderr(contains("No current agenda"));
}

#[test]
fn test_set_fills_in_fields() {
    let dir = setup_workspace("set_fields");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args([
            "--dir",
            &dir,
            "--test",
            "set",
            "--date",
            "2026-06-18",
            "--location",
            "Clifton Center",
            "--role",
            "Time Keeper=Ana",
            "--note",
            "2=Bring slides",
            "--check",
            "1",
            "--host",
            "NJ Community",
        ])
        .assert()
        .success()
        .stdout(contains("updated"));

    rag()
        .args(["--dir", &dir, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("June 18, 2026"))
        .stdout(contains("Clifton Center"))
        .stdout(contains("Ana"))
        .stdout(contains("Bring slides"))
        .stdout(contains("☑ Start utilizing Sunday service registration form"))
        .stdout(contains("Host: NJ Community"));
}

#[test]
fn test_set_rejects_unknown_role() {
    let dir = setup_workspace("set_bad_role");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "set", "--role", "Barista=Ana"])
        .assert()
        .failure()
        .stderr(contains("Invalid role"));
}

#[test]
fn test_set_rejects_out_of_range_item() {
    let dir = setup_workspace("set_bad_item");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "set", "--note", "99=whatever"])
        .assert()
        .failure()
        .stderr(contains("Invalid item number"));
}

#[test]
fn test_config_print() {
    let dir = setup_workspace("config_print");

    rag()
        .args(["--dir", &dir, "--test", "config", "--print"])
        .assert()
        .success()
        .stdout(contains("workspace"));
}
