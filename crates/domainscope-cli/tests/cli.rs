//! Smoke tests for the binary's argument surface. Nothing here touches the
//! network.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_commands() {
    Command::cargo_bin("domainscope")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("research"))
        .stdout(predicate::str::contains("debug"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn research_rejects_an_invalid_domain() {
    Command::cargo_bin("domainscope")
        .unwrap()
        .args(["research", "not-a-domain"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid domain format"));
}

#[test]
fn config_path_prints_a_location() {
    Command::cargo_bin("domainscope")
        .unwrap()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}
