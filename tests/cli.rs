//! End-to-end smoke tests driving the tripledger binary against a temp
//! data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tripledger(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("tripledger").unwrap();
    cmd.env("TRIPLEDGER_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_then_budget_then_expense_then_summary() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default categories"));

    tripledger(&data_dir)
        .args(["budget", "set", "Food", "100"])
        .assert()
        .success();

    tripledger(&data_dir)
        .args(["expense", "add", "Food", "40", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense"));

    tripledger(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Budget: $100.00"))
        .stdout(predicate::str::contains("Spent:        $40.00"))
        .stdout(predicate::str::contains("Remaining:    $60.00"));
}

#[test]
fn expense_list_shows_indexed_rows() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .args(["expense", "add", "Food", "12.5", "--date", "2024-01-01"])
        .assert()
        .success();

    tripledger(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("Food"));
}

#[test]
fn edit_with_bad_amount_fails_with_notice() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .args(["expense", "add", "Food", "40", "--date", "2024-01-01"])
        .assert()
        .success();

    tripledger(&data_dir)
        .args([
            "expense", "edit", "0", "--date", "2024-01-01", "--category", "Food", "--amount",
            "forty",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));

    // Original record untouched
    let register = std::fs::read_to_string(data_dir.path().join("data").join("trip.json")).unwrap();
    assert!(register.contains("40.0"));
}

#[test]
fn reset_with_yes_erases_snapshot() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .args(["expense", "add", "Food", "40", "--date", "2024-01-01"])
        .assert()
        .success();

    let snapshot_file = data_dir.path().join("data").join("trip.json");
    assert!(snapshot_file.exists());

    tripledger(&data_dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reset"));

    assert!(!snapshot_file.exists());

    tripledger(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses logged yet."));
}

#[test]
fn export_writes_csv_to_stdout() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .args([
            "expense",
            "add",
            "Food",
            "12.5",
            "--date",
            "2024-01-01",
            "--description",
            "lunch",
        ])
        .assert()
        .success();

    tripledger(&data_dir)
        .arg("export")
        .assert()
        .success()
        .stdout(predicate::str::contains("Date,Category,Description,Amount"))
        .stdout(predicate::str::contains("2024-01-01,Food,lunch,12.50"));
}

#[test]
fn export_writes_complete_csv_file() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .args([
            "expense",
            "add",
            "Food",
            "12.5",
            "--date",
            "2024-01-01",
            "--description",
            "lunch",
        ])
        .assert()
        .success();

    let out_path = data_dir.path().join("register.csv");
    tripledger(&data_dir)
        .args(["export", "--output", out_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expense(s)"));

    let csv = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        csv,
        "Date,Category,Description,Amount\n2024-01-01,Food,lunch,12.50\n"
    );
}

#[test]
fn non_finite_amount_is_not_logged() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .args(["expense", "add", "Food", "NaN", "--date", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing added"));

    tripledger(&data_dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses logged yet."));
}

#[test]
fn trip_commands_rejected_in_per_category_mode() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .args(["trip", "budget", "2500"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn trip_wide_mode_end_to_end() {
    let data_dir = TempDir::new().unwrap();

    tripledger(&data_dir)
        .args(["init", "--mode", "trip-wide", "--allow-custom-categories"])
        .assert()
        .success();

    tripledger(&data_dir)
        .args(["trip", "budget", "500"])
        .assert()
        .success();

    tripledger(&data_dir)
        .args(["category", "add", "Souvenirs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added category"));

    tripledger(&data_dir)
        .args(["category", "add", "Souvenirs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("unchanged"));

    tripledger(&data_dir)
        .args(["expense", "add", "Souvenirs", "60", "--date", "2024-06-02"])
        .assert()
        .success();

    tripledger(&data_dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Budget: $500.00"))
        .stdout(predicate::str::contains("Remaining:    $440.00"));
}
