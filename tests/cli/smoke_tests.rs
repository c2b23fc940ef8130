use assert_cmd::Command;
use predicates::prelude::*;

use crate::common::GoModule;

fn gostats() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gostats"))
}

#[test]
fn shows_help() {
    gostats().arg("--help").assert().success().stdout(predicate::str::contains("gostats"));
}

#[test]
fn requires_exactly_one_path() {
    gostats().assert().failure().code(2).stderr(predicate::str::contains("Usage"));
    gostats().args(["a", "b"]).assert().failure().code(2);
}

#[test]
fn prints_json_for_a_module() {
    let module = GoModule::example();
    gostats()
        .args(["--format", "json"])
        .arg(module.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"direct_dependencies\": 3"))
        .stdout(predicate::str::contains("\"indirect_dependencies\": 2"));
}

#[test]
fn plain_is_the_default() {
    let module = GoModule::example();
    gostats()
        .arg(module.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Module: example.mod"));
}

#[test]
fn skipped_files_are_warned_on_stderr() {
    let module = GoModule::example();
    module.write("b/broken.go", "package b\n\nfunc broken( {\n");

    gostats()
        .arg(module.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("[warn] skipped").and(predicate::str::contains("broken.go")));
}

#[test]
fn missing_manifest_fails() {
    let module = GoModule::empty();
    gostats()
        .arg(module.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("go.mod file not found"));
}

#[test]
fn zero_jobs_is_a_usage_error() {
    let module = GoModule::example();
    gostats().args(["-j", "0"]).arg(module.path()).assert().failure().code(2);
}
