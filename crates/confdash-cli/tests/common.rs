//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use confdash_testing::{CliResult, TestWorld};

pub fn confdash() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("confdash"))
}

/// Run the binary against `world` and capture the result.
pub fn run(world: &TestWorld, args: &[&str]) -> CliResult {
    world.run(confdash(), args).expect("Failed to run confdash")
}

/// Run with `--format json` and parse stdout.
pub fn run_json(world: &TestWorld, args: &[&str]) -> serde_json::Value {
    let mut full = args.to_vec();
    full.extend(["--format", "json"]);

    let result = run(world, &full);
    assert!(
        result.success(),
        "confdash {:?} failed: {}",
        args,
        result.stderr()
    );
    result.json().expect("stdout should be JSON")
}
