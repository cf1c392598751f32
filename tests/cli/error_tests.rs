use crate::common::bin;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn unknown_network_exits_nonzero_without_touching_the_artifact() {
    let dir = TempDir::new().unwrap();
    // The artifact path deliberately does not exist: network resolution must
    // fail first, before any file I/O.
    bin()
        .current_dir(dir.path())
        .args(["deploy", "--network", "foo", "--artifact", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown network: foo"));
}

#[test]
fn missing_deploy_key_is_a_credential_error() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("MultiSigFactory.json");
    fs::write(
        &artifact,
        r#"{"contractName":"MultiSigFactory","abi":[],"bytecode":"0x6080604052"}"#,
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .args(["deploy", "--network", "evm", "--artifact"])
        .arg(&artifact)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credential error"));
}

#[test]
fn missing_ganache_url_is_a_credential_error() {
    let dir = TempDir::new().unwrap();
    let artifact = dir.path().join("MultiSigFactory.json");
    fs::write(
        &artifact,
        r#"{"contractName":"MultiSigFactory","abi":[],"bytecode":"0x6080604052"}"#,
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .env("MNEMONIC", "test test test test test test test test test test test junk")
        .args(["deploy", "--network", "ganache", "--artifact"])
        .arg(&artifact)
        .assert()
        .failure()
        .stderr(predicate::str::contains("GANACHE_URL"));
}

#[test]
fn unreadable_artifact_is_a_configuration_error() {
    let dir = TempDir::new().unwrap();
    bin()
        .current_dir(dir.path())
        .args(["deploy", "--network", "evmTestnet", "--artifact", "missing.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
