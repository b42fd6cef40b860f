use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::path::Path;

mod common;
use common::{add, init_env, rpy, setup_env, temp_out};

#[test]
fn test_holiday_add_list_del() {
    let (conf, _db) = init_env("holiday_add_list_del");

    rpy()
        .args([
            "--config",
            &conf,
            "holiday",
            "add",
            "2024-12-25",
            "--desc",
            "Christmas",
        ])
        .assert()
        .success()
        .stdout(contains("2024-12-25 marked as holiday: Christmas."));

    rpy()
        .args(["--config", &conf, "holiday", "add", "2024-12-26"])
        .assert()
        .success()
        .stdout(contains("2024-12-26 marked as holiday."));

    rpy()
        .args(["--config", &conf, "holiday", "list", "--period", "2024-12"])
        .assert()
        .success()
        .stdout(contains("2024-12-25"))
        .stdout(contains("Christmas"))
        .stdout(contains("2024-12-26"));

    rpy()
        .args(["--config", &conf, "holiday", "del", "2024-12-25"])
        .assert()
        .success()
        .stdout(contains("Holiday 2024-12-25 removed."));

    rpy()
        .args(["--config", &conf, "holiday", "list", "--period", "2024-12"])
        .assert()
        .success()
        .stdout(contains("Christmas").not());

    rpy()
        .args(["--config", &conf, "holiday", "del", "2024-12-25"])
        .assert()
        .failure()
        .stderr(contains("is not a holiday"));
}

#[test]
fn test_holiday_readd_updates_description() {
    let (conf, _db) = init_env("holiday_readd");

    rpy()
        .args(["--config", &conf, "holiday", "add", "2024-08-15", "--desc", "Ferragosto"])
        .assert()
        .success();
    rpy()
        .args(["--config", &conf, "holiday", "add", "2024-08-15", "--desc", "Assunzione"])
        .assert()
        .success();

    rpy()
        .args(["--config", &conf, "holiday", "list", "--period", "2024"])
        .assert()
        .success()
        .stdout(contains("Assunzione"))
        .stdout(contains("Ferragosto").not());
}

#[test]
fn test_backup_plain_and_compressed() {
    let (conf, _db) = init_env("backup_plain_compressed");
    add(&conf, "2024-03-04", "09:00", Some("18:00"));

    let plain = temp_out("backup_plain", "sqlite");
    rpy()
        .args(["--config", &conf, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).exists());

    let zipped = temp_out("backup_compressed", "zip");
    let target = zipped.trim_end_matches(".zip").to_string() + ".sqlite";
    rpy()
        .args(["--config", &conf, "backup", "--file", &target, "--compress"])
        .assert()
        .success();
    assert!(Path::new(&zipped).exists());
}

#[test]
fn test_log_print_records_operations() {
    let (conf, _db) = init_env("log_print_ops");
    add(&conf, "2024-03-04", "09:00", Some("18:00"));
    rpy()
        .args(["--config", &conf, "del", "2024-03-04", "-y"])
        .assert()
        .success();

    rpy()
        .args(["--config", &conf, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("del"))
        .stdout(contains("2024-03-04"));
}

#[test]
fn test_db_info_and_check() {
    let (conf, _db) = init_env("db_info_check");
    add(&conf, "2024-03-04", "09:00", Some("18:00"));
    add(&conf, "2024-03-06", "09:00", Some("18:00"));

    rpy()
        .args(["--config", &conf, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("2024-03-04"))
        .stdout(contains("2024-03-06"));

    rpy()
        .args(["--config", &conf, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed."));

    rpy()
        .args(["--config", &conf, "db", "--migrate", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Migration completed."))
        .stdout(contains("Vacuum completed."));
}

#[test]
fn test_config_print_and_check() {
    let (conf, _db) = setup_env("config_print_check");

    rpy()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("monthly_salary: 30000"));

    rpy()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing key"))
        .stdout(contains("Payroll rules are consistent."));
}

#[test]
fn test_config_check_rejects_bad_thresholds() {
    let (conf, _db) = common::setup_env_with(
        "config_bad_thresholds",
        "payroll:\n  monthly_salary: 30000\n  late_threshold: \"11:00:00\"\n",
    );

    rpy()
        .args(["--config", &conf, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("thresholds must be increasing"));
}

#[test]
fn test_init_writes_config_file() {
    let (conf, db) = setup_env("init_writes_config");

    rpy()
        .args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("Config file:"));

    let content = std::fs::read_to_string(&conf).expect("read config");
    assert!(content.contains(&db));
    assert!(content.contains("monthly_salary"));
    assert!(content.contains("late_threshold"));
}
