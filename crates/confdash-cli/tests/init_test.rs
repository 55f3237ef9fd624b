mod common;
use common::{confdash, run, run_json};
use confdash_testing::TestWorld;
use predicates::prelude::*;

#[test]
fn test_init_creates_config_and_database() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("fresh");

    confdash()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("init")
        .env_remove("CONFDASH_PATH")
        .assert()
        .success()
        .stdout(predicate::str::contains("(created)"));

    assert!(data_dir.join("config.toml").exists());
    assert!(data_dir.join("confdash.db").exists());

    // Second run keeps the existing config
    confdash()
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("init")
        .env_remove("CONFDASH_PATH")
        .assert()
        .success()
        .stdout(predicate::str::contains("(created)").not());
}

#[test]
fn test_init_json_reports_existing_store() {
    let world = TestWorld::new()
        .with_conference("aaai", "AAAI")
        .with_conference("icml", "ICML");

    let report = run_json(&world, &["init"]);
    assert_eq!(report["config_created"], true);
    assert_eq!(report["conferences"], 2);
    assert_eq!(report["schema_version"], confdash_index::SCHEMA_VERSION);
}

#[test]
fn test_config_database_setting_is_honoured() {
    let world = TestWorld::new().with_config("database = \"other.db\"\n");

    let result = run(&world, &["conferences"]);
    assert!(result.success());
    assert!(world.data_dir().join("other.db").exists());
}

#[test]
fn test_db_flag_overrides_config() {
    let world = TestWorld::new().with_conference("aaai", "AAAI");
    let db_path = world.db_path();
    let db_arg = db_path.to_str().unwrap();

    let temp_dir = tempfile::TempDir::new().unwrap();
    confdash()
        .arg("--data-dir")
        .arg(temp_dir.path())
        .args(["--db", db_arg, "conferences"])
        .env_remove("CONFDASH_PATH")
        .assert()
        .success()
        .stdout("AAAI\n");
}

#[test]
fn test_env_data_dir() {
    let world = TestWorld::new().with_conference("neurips", "NeurIPS");

    confdash()
        .env("CONFDASH_PATH", world.data_dir())
        .arg("conferences")
        .assert()
        .success()
        .stdout("NeurIPS\n");
}

#[test]
fn test_logs_go_to_stderr() {
    let world = TestWorld::new()
        .with_conference("aaai", "AAAI")
        .with_env("RUST_LOG", "debug");

    let result = run(&world, &["conferences", "--format", "json"]);
    assert!(result.success());
    assert!(result.stderr().contains("opening database"));
    assert_eq!(result.json().unwrap(), serde_json::json!(["AAAI"]));
}
