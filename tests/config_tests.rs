//! Configuration resolution through the binary.

mod support;

use std::fs;

use predicates::prelude::*;
use support::temp_db::TempDb;

#[test]
fn default_database_is_college_db_in_working_dir() {
    let db = TempDb::create();
    db.bare().arg("init").assert().success();

    assert!(db.dir().join("college.db").exists());
}

#[test]
fn config_file_selects_database() {
    let db = TempDb::create();
    let config = db.dir().join("custom.toml");
    fs::write(
        &config,
        "[database]\npath = \"school.db\"\n\n[logging]\nlevel = \"warn\"\nformat = \"json\"\n",
    )
    .unwrap();

    db.bare()
        .arg("--config")
        .arg(&config)
        .args(["add", "3", "Carol", "70"])
        .assert()
        .success();

    assert!(db.dir().join("school.db").exists());
    assert!(!db.dir().join("college.db").exists());
}

#[test]
fn default_config_file_is_picked_up() {
    let db = TempDb::create();
    fs::write(db.dir().join("rollbook.toml"), "[database]\npath = \"picked.db\"\n").unwrap();

    db.bare().arg("init").assert().success();
    assert!(db.dir().join("picked.db").exists());
}

#[test]
fn env_var_overrides_config_file() {
    let db = TempDb::create();
    fs::write(db.dir().join("rollbook.toml"), "[database]\npath = \"file.db\"\n").unwrap();

    db.bare()
        .env("ROLLBOOK_DATABASE", "env.db")
        .arg("init")
        .assert()
        .success();

    assert!(db.dir().join("env.db").exists());
    assert!(!db.dir().join("file.db").exists());
}

#[test]
fn database_flag_overrides_env_var() {
    let db = TempDb::create();
    db.bare()
        .env("ROLLBOOK_DATABASE", "env.db")
        .args(["--database", "flag.db", "init"])
        .assert()
        .success();

    assert!(db.dir().join("flag.db").exists());
    assert!(!db.dir().join("env.db").exists());
}

#[test]
fn missing_explicit_config_is_an_error() {
    let db = TempDb::create();
    db.bare()
        .args(["--config", "absent.toml", "list"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to read config file"));
}

#[test]
fn invalid_logging_format_is_rejected() {
    let db = TempDb::create();
    fs::write(db.dir().join("rollbook.toml"), "[logging]\nformat = \"xml\"\n").unwrap();

    db.bare()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value for logging.format"));
}
