use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{fake_home, reopen, setup_test_db, wl};

#[test]
fn test_quit_immediately() {
    let db_path = setup_test_db("cli_quit");
    let home = fake_home("cli_quit");

    wl().env("HOME", &home)
        .args(["--db", db_path.to_str().unwrap(), "--no-clear"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("Welcome to Work Log DB"))
        .stdout(contains("Thank you for using Work Log DB. Goodbye."));

    // the store is created on first start
    assert!(db_path.exists());
    assert!(reopen(&db_path).table_exists("entries").unwrap());
}

#[test]
fn test_add_and_find_entry() {
    let db_path = setup_test_db("cli_add_find");
    let home = fake_home("cli_add_find");
    let db = db_path.to_str().unwrap();

    wl().env("HOME", &home)
        .args(["--db", db, "--no-clear"])
        .write_stdin("a\nTimmy\ntest task\n30\n06/04/2020\nAllow me to test your patience..\ny\nq\n")
        .assert()
        .success()
        .stdout(contains("Saved!"));

    wl().env("HOME", &home)
        .args(["--db", db, "--no-clear"])
        .write_stdin("s\nd\npatience\nb\nq\nq\n")
        .assert()
        .success()
        .stdout(contains("Result 1 of 1"))
        .stdout(contains("Employee: Timmy"))
        .stdout(contains("Date: 06/04/2020"));
}

#[test]
fn test_closed_stdin_exits_successfully() {
    let db_path = setup_test_db("cli_eof");
    let home = fake_home("cli_eof");

    wl().env("HOME", &home)
        .args(["--db", db_path.to_str().unwrap(), "--no-clear"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Goodbye"));
}

#[test]
fn test_clear_screen_is_on_by_default() {
    let db_path = setup_test_db("cli_clear");
    let home = fake_home("cli_clear");

    wl().env("HOME", &home)
        .args(["--db", db_path.to_str().unwrap()])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("\x1b[2J"));

    wl().env("HOME", &home)
        .args(["--db", db_path.to_str().unwrap(), "--no-clear"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("\x1b[2J").not());
}

#[test]
fn test_config_file_sets_database() {
    let db_path = setup_test_db("cli_config_db");
    let home = fake_home("cli_config_db");
    fs::create_dir_all(home.join(".worklog")).unwrap();
    fs::write(
        home.join(".worklog").join("worklog.conf"),
        format!(
            "database: {}\nclear_screen: false\n",
            db_path.to_string_lossy()
        ),
    )
    .unwrap();

    wl().env("HOME", &home)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains("\x1b[2J").not());

    assert!(db_path.exists());
}

#[test]
fn test_malformed_config_is_fatal() {
    let home = fake_home("cli_bad_config");
    fs::create_dir_all(home.join(".worklog")).unwrap();
    fs::write(home.join(".worklog").join("worklog.conf"), "clear_screen: [oops\n").unwrap();

    wl().env("HOME", &home)
        .write_stdin("q\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Configuration error"));
}

#[test]
fn test_unopenable_database_is_fatal() {
    let home = fake_home("cli_bad_db");
    // a regular file where the database directory should be
    let blocker = home.join("not_a_dir");
    fs::write(&blocker, "x").unwrap();
    let db_path = blocker.join("worklog.sqlite");

    wl().env("HOME", &home)
        .args(["--db", db_path.to_str().unwrap()])
        .write_stdin("q\n")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error:"));
}

#[test]
fn test_version_flag() {
    wl().arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}
