use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{pc, setup_data_dir};

/// Seeded data directory (Test User 1111111 / pin 1111, Samantha Lee
/// 4012346 / pin 2864, Alex Martinez 2039485 on the clock).
fn init(name: &str) -> String {
    let dir = setup_data_dir(name);
    let d = dir.to_string_lossy().to_string();
    pc().args(["--data-dir", &d, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("5 employees on file"));
    d
}

#[test]
fn test_init_writes_data_files() {
    let d = init("cli_init");
    assert!(Path::new(&d).join("employees.txt").exists());
    assert!(Path::new(&d).join("activity.sqlite").exists());
}

#[test]
fn test_config_print_follows_data_dir() {
    let d = init("cli_config_print");
    pc().args(["--data-dir", &d, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("employees_file"))
        .stdout(contains("timestamp_format"))
        .stdout(contains(d.as_str()));
}

#[test]
fn test_clock_out_then_reject_second_clock_out() {
    let d = init("cli_clock_out");

    pc().args(["--data-dir", &d, "clock-out", "--id", "2039485"])
        .assert()
        .success()
        .stdout(contains("Alex Martinez, you are now clocked out"));

    pc().args(["--data-dir", &d, "clock-out", "--id", "2039485"])
        .assert()
        .failure()
        .stderr(contains("You are not clocked in"));

    pc().args(["--data-dir", &d, "last", "--id", "2039485"])
        .assert()
        .success()
        .stdout(contains("Last punch: CLOCK_OUT"));
}

#[test]
fn test_login_validation() {
    let d = init("cli_login");

    pc().args(["--data-dir", &d, "clock-in", "--id", "12345"])
        .assert()
        .failure()
        .stderr(contains("must be 7 digits"));

    pc().args(["--data-dir", &d, "clock-in", "--id", "+2039485"])
        .assert()
        .failure()
        .stderr(contains("must be numeric"));

    pc().args(["--data-dir", &d, "clock-in", "--id", "7654321"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn test_last_without_punches() {
    let d = init("cli_last_empty");
    pc().args(["--data-dir", &d, "last", "--id", "1964273"])
        .assert()
        .success()
        .stdout(contains("No punches found."));
}

#[test]
fn test_roster_requires_manager() {
    let d = init("cli_roster");

    pc().args(["--data-dir", &d, "roster", "--id", "4012346"])
        .assert()
        .success()
        .stdout(contains("--Clocked In--"))
        .stdout(contains("Chris Donovan"))
        .stdout(contains("--On Meal--"))
        .stdout(contains("Jordan Patel"));

    pc().args(["--data-dir", &d, "roster", "--id", "2039485"])
        .assert()
        .failure()
        .stderr(contains("Permission denied"));
}

#[test]
fn test_employees_pay_and_list() {
    let d = init("cli_pay");

    pc().args([
        "--data-dir", &d, "employees", "pay", "--id", "1111111", "--pin", "1111", "--target",
        "2039485", "--amount", "18.5",
    ])
    .assert()
    .success()
    .stdout(contains("Pay updated: Alex Martinez ($15.25 to $18.50)"));

    // non-master manager: other managers are masked, master is masked
    pc().args([
        "--data-dir", &d, "employees", "list", "--id", "4012346", "--pin", "2864",
    ])
    .assert()
    .success()
    .stdout(contains("$18.50"))
    .stdout(contains("*******"))
    .stdout(contains("1111111").not());
}

#[test]
fn test_wrong_pin_is_rejected() {
    let d = init("cli_wrong_pin");

    pc().args([
        "--data-dir", &d, "employees", "pay", "--id", "4012346", "--pin", "1234", "--target",
        "2039485", "--amount", "20",
    ])
    .assert()
    .failure()
    .stderr(contains("Incorrect, logging you out"));
}

#[test]
fn test_non_master_cannot_change_master_pay() {
    let d = init("cli_master_pay");

    pc().args([
        "--data-dir", &d, "employees", "pay", "--id", "4012346", "--pin", "2864", "--target",
        "1111111", "--amount", "1",
    ])
    .assert()
    .failure()
    .stderr(contains("do not have permission"));
}

#[test]
fn test_add_promote_and_log() {
    let d = init("cli_add_promote");

    pc().args([
        "--data-dir", &d, "employees", "add", "--id", "1111111", "--pin", "1111", "--name",
        "Riley Quinn", "--new-id", "5551234", "--pay", "16",
    ])
    .assert()
    .success()
    .stdout(contains("Employee added successfully."));

    pc().args([
        "--data-dir", &d, "employees", "role", "--id", "1111111", "--pin", "1111", "--target",
        "5551234", "--op", "promote", "--new-pin", "4321",
    ])
    .assert()
    .success()
    .stdout(contains("Riley Quinn is now Manager"));

    // the new manager can open the edit screen with the created pin
    pc().args([
        "--data-dir", &d, "employees", "list", "--id", "5551234", "--pin", "4321",
    ])
    .assert()
    .success()
    .stdout(contains("Riley Quinn"));

    pc().args(["--data-dir", &d, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("promote"));
}

#[test]
fn test_terminal_session() {
    let d = init("cli_terminal");

    pc().args(["--data-dir", &d, "terminal"])
        .write_stdin("2039485\n2\n2039485\n5\n")
        .assert()
        .success()
        .stdout(contains("you are now clocked out"))
        .stdout(contains("Last punch: CLOCK_OUT"));
}

#[test]
fn test_terminal_wrong_pin_logs_out() {
    let d = init("cli_terminal_pin");

    pc().args(["--data-dir", &d, "terminal"])
        .write_stdin("4012346\n7\n1234\n")
        .assert()
        .success()
        .stderr(contains("Incorrect, logging you out"))
        .stdout(contains("EMPLOYEES:").not());
}

#[test]
fn test_terminal_edit_change_pay() {
    let d = init("cli_terminal_edit");

    pc().args(["--data-dir", &d, "terminal"])
        .write_stdin("1111111\n7\n1111\n3\n4012348\n17.75\n5\n")
        .assert()
        .success()
        .stdout(contains("EMPLOYEES:"))
        .stdout(contains("Pay updated: Chris Donovan ($17.00 to $17.75)"));
}
