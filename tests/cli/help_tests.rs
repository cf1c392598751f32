use crate::common::bin;
use predicates::prelude::*;

#[test]
fn help_lists_subcommands() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("deploy"))
        .stdout(predicate::str::contains("preprocess"))
        .stdout(predicate::str::contains("accounts"));
}

#[test]
fn version_flag_works() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("evm-deploy"));
}

#[test]
fn missing_subcommand_fails() {
    bin().assert().failure();
}
