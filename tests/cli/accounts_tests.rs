use crate::common::bin;
use predicates::prelude::*;

const TEST_MNEMONIC: &str = "test test test test test test test test test test test junk";

#[test]
fn lists_derived_accounts_and_marks_the_deployer() {
    bin()
        .env("MNEMONIC", TEST_MNEMONIC)
        .args(["accounts", "--network", "hardhat"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266",
        ))
        .stdout(predicate::str::contains("(deployer)"));
}

#[test]
fn unknown_network_fails() {
    bin()
        .args(["accounts", "--network", "foo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown network: foo"));
}

#[test]
fn missing_mnemonic_is_a_credential_error() {
    bin()
        .args(["accounts", "--network", "hardhat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credential error"));
}
