use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_with_agenda, rag, setup_workspace};

#[test]
fn test_archive_uses_meeting_date_when_set() {
    let dir = setup_workspace("archive_date");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "set", "--date", "2026-06-18"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "archive"])
        .assert()
        .success()
        .stdout(contains("June 18, 2026"));

    rag()
        .args(["--dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2026-06-18"))
        .stdout(contains("Northeast Pastors Meeting"));
}

#[test]
fn test_archive_is_append_only() {
    let dir = setup_workspace("archive_append");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "set", "--date", "2026-06-11"])
        .assert()
        .success();
    rag()
        .args(["--dir", &dir, "--test", "archive"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "set", "--date", "2026-06-18"])
        .assert()
        .success();
    rag()
        .args(["--dir", &dir, "--test", "archive"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2026-06-11"))
        .stdout(contains("2026-06-18"));
}

#[test]
fn test_archive_without_agenda_fails() {
    let dir = setup_workspace("archive_empty");

    rag()
        .args(["--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "archive"])
        .assert()
        .failure()
        .stderr(contains("No current agenda"));
}

#[test]
fn test_reset_clears_fillins_but_keeps_structure() {
    let dir = setup_workspace("reset_keeps");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args([
            "--dir",
            &dir,
            "--test",
            "set",
            "--date",
            "2026-06-18",
            "--role",
            "Note Taker=Ana",
            "--note",
            "1=Cover last week",
            "--check",
            "2",
        ])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "reset"])
        .assert()
        .success()
        .stdout(contains("reset for next meeting"));

    rag()
        .args(["--dir", &dir, "--test", "show"])
        .assert()
        .success()
        // Structure and start times survive.
        .stdout(contains("Welcome, Rollcall, Prayer, Trinity Check-in"))
        .stdout(contains("7:00 PM"))
        .stdout(contains("8:41 PM"))
        // Checklists are back to their template text, unticked.
        .stdout(contains("☐ Complete PSWM Intro Course review"))
        // Fill-ins are gone.
        .stdout(contains("Ana").not())
        .stdout(contains("Cover last week").not())
        .stdout(contains("June 18, 2026").not())
        .stdout(contains("☑").not());
}

#[test]
fn test_archive_with_reset_flag() {
    let dir = setup_workspace("archive_reset");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "set", "--date", "2026-06-18"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "archive", "--reset"])
        .assert()
        .success()
        .stdout(contains("archived"))
        .stdout(contains("reset for next meeting"));

    // The archived copy keeps its date, the working copy lost it.
    rag()
        .args(["--dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("2026-06-18"));

    rag()
        .args(["--dir", &dir, "--test", "show"])
        .assert()
        .success()
        .stdout(contains("June 18, 2026").not());
}

#[test]
fn test_list_details_prints_banner() {
    let dir = setup_workspace("list_details");
    init_with_agenda(&dir, "7:00 PM");

    rag()
        .args(["--dir", &dir, "--test", "set", "--date", "2026-06-18"])
        .assert()
        .success();
    rag()
        .args(["--dir", &dir, "--test", "archive"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "list", "--details"])
        .assert()
        .success()
        .stdout(contains("MEETING: June 18, 2026"))
        .stdout(contains("Agenda Item"));
}

#[test]
fn test_list_empty_archive() {
    let dir = setup_workspace("list_empty");

    rag()
        .args(["--dir", &dir, "--test", "init"])
        .assert()
        .success();

    rag()
        .args(["--dir", &dir, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("No archived meetings"));
}
