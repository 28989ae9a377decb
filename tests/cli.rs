use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn lootlock(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("lootlock").unwrap();
    cmd.env("LOOTLOCK_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("budgets").is_dir());
}

#[test]
fn budget_create_is_case_insensitive() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .args(["budget", "create", "Groceries", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created budget 'groceries'"));

    lootlock(&dir)
        .args(["budget", "create", "groceries", "200"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    let contents = std::fs::read_to_string(dir.path().join("budgets/groceries.txt")).unwrap();
    assert_eq!(contents, "#LIMIT:500.00\n");
}

#[test]
fn budget_create_rejects_bad_limit() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .args(["budget", "create", "rent", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid budget limit"));
}

#[test]
fn over_limit_expense_is_written_with_warning() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .args(["budget", "create", "weekend", "100"])
        .assert()
        .success();
    lootlock(&dir)
        .args(["expense", "add", "weekend", "Food", "60", "--date", "2026-10-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$40.00 remaining"));
    lootlock(&dir)
        .args(["expense", "add", "weekend", "Food", "50", "--date", "2026-10-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added $50.00"))
        .stderr(predicate::str::contains("over its limit of $100.00 by $10.00"));

    lootlock(&dir)
        .args(["budget", "summary", "Weekend"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$110.00"));
}

#[test]
fn expense_for_missing_budget_fails() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .args(["expense", "add", "ghost", "Food", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn empty_states_exit_successfully() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .args(["salary", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No salary recorded yet"));

    lootlock(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));

    lootlock(&dir)
        .args(["budget", "create", "idle", "10"])
        .assert()
        .success();
    lootlock(&dir)
        .args(["budget", "summary", "idle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found in budget 'idle'"));
}

#[test]
fn overall_summary_merges_budgets() {
    let dir = TempDir::new().unwrap();

    for (budget, category, amount) in [
        ("one", "Food", "10"),
        ("two", "Food", "5"),
        ("two", "Transport", "2"),
    ] {
        lootlock(&dir)
            .args(["budget", "create", budget, "100"])
            .assert();
        lootlock(&dir)
            .args(["expense", "add", budget, category, amount])
            .assert()
            .success();
    }

    lootlock(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("$15.00"))
        .stdout(predicate::str::contains("Transport"))
        .stdout(predicate::str::contains("$17.00"));
}

#[test]
fn income_total_skips_corrupt_lines() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("income_log.txt"),
        "2024-01-01,freelance,notanumber\n2024-01-02,tutoring,40\n",
    )
    .unwrap();

    lootlock(&dir)
        .args(["salary", "set", "3 000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$3000.00"));

    lootlock(&dir)
        .args(["income", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$40.00"))
        .stdout(predicate::str::contains("$3040.00"));
}

#[test]
fn snapshot_export_to_stdout() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .args([
            "snapshot",
            "record",
            "--month",
            "2026-09",
            "--income",
            "3000",
            "--expense",
            "Food=400",
            "--expense",
            "Gym=30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded September 2026"));

    lootlock(&dir)
        .args(["snapshot", "export"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Month,Income,Food,Transport,Bills,Entertainment,Shopping,Subscriptions,\
             Healthcare,Education,Other,Gym,Total Expenses,Savings\n",
        ))
        .stdout(predicate::str::contains(
            "September 2026,3000.00,400.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,0.00,30.00,430.00,2570.00",
        ));
}

#[test]
fn snapshot_capture_uses_ledgers() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .args(["budget", "create", "home", "1000"])
        .assert()
        .success();
    lootlock(&dir)
        .args(["expense", "add", "home", "Bills", "120", "-d", "2026-08-10"])
        .assert()
        .success();
    lootlock(&dir)
        .args(["income", "log", "tutoring", "80", "-d", "2026-08-11"])
        .assert()
        .success();

    lootlock(&dir)
        .args(["snapshot", "capture", "--month", "2026-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded August 2026"))
        .stdout(predicate::str::contains("Savings:  -$40.00"));

    lootlock(&dir)
        .args(["snapshot", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("August 2026"))
        .stdout(predicate::str::contains("Bills"));
}

#[test]
fn audit_lists_changes() {
    let dir = TempDir::new().unwrap();

    lootlock(&dir)
        .args(["budget", "create", "rent", "1200"])
        .assert()
        .success();

    lootlock(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Budget rent"));
}

#[test]
fn income_list_shows_undated_entries() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("income_log.txt"),
        "01/02/2024,freelance,25\n2024-01-02,tutoring,40\n",
    )
    .unwrap();

    lootlock(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Source"))
        .stdout(predicate::str::contains("unknown"))
        .stdout(predicate::str::contains("2024-01-02"));

    lootlock(&dir)
        .args(["income", "total"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$65.00"));
}

#[test]
fn invalid_date_format_setting_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    lootlock(&dir)
        .args(["income", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}
