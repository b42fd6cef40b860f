#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rpy() -> Command {
    cargo_bin_cmd!("rpayroll")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayroll.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Payroll rules used by most tests: full day = 1000, half day = 500, hour cut = 150.
pub const PAYROLL_YAML: &str = "\
payroll:
  monthly_salary: 30000
  hourly_rate: 150
  expected_daily_hours: 8
  salary_divisor_days: 30
";

/// Write a config file pointing at a fresh DB and return (config path, db path).
pub fn setup_env(name: &str) -> (String, String) {
    setup_env_with(name, PAYROLL_YAML)
}

pub fn setup_env_with(name: &str, payroll_yaml: &str) -> (String, String) {
    let db_path = setup_test_db(name);

    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpayroll.conf", name));
    let conf_path = path.to_string_lossy().to_string();

    let content = format!("database: {}\n{}", db_path, payroll_yaml);
    fs::write(&conf_path, content).expect("write config");

    (conf_path, db_path)
}

/// Config + initialized DB.
pub fn init_env(name: &str) -> (String, String) {
    let (conf, db) = setup_env(name);
    rpy()
        .args(["--config", &conf, "--test", "init"])
        .assert()
        .success();
    (conf, db)
}

/// Add a record through the CLI.
pub fn add(conf: &str, date: &str, time_in: &str, time_out: Option<&str>) {
    let mut cmd = rpy();
    cmd.args(["--config", conf, "add", date, "--in", time_in]);
    if let Some(out) = time_out {
        cmd.args(["--out", out]);
    }
    cmd.assert().success();
}
