use crate::common::bin;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn rewrites_imports_through_the_remapping_table() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("remappings.txt"), "@oz/=lib/openzeppelin/\n").unwrap();
    let source = dir.path().join("Token.sol");
    fs::write(
        &source,
        "pragma solidity ^0.8.13;\nimport \"@oz/token/ERC20.sol\";\ncontract Token {}\n",
    )
    .unwrap();

    bin()
        .current_dir(dir.path())
        .arg("preprocess")
        .arg(&source)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "import \"lib/openzeppelin/token/ERC20.sol\";",
        ))
        .stdout(predicate::str::contains("pragma solidity ^0.8.13;"))
        .stdout(predicate::str::contains("@oz/").not());
}

#[test]
fn reads_stdin_when_no_sources_are_given() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("remappings.txt"), "@oz/=lib/openzeppelin/\n").unwrap();

    bin()
        .current_dir(dir.path())
        .arg("preprocess")
        .write_stdin("import \"@oz/Ownable.sol\";\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("import \"lib/openzeppelin/Ownable.sol\";"));
}

#[test]
fn malformed_remapping_line_fails_the_run() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("remappings.txt"), "@oz/=lib/\nbogus-line\n").unwrap();

    bin()
        .current_dir(dir.path())
        .arg("preprocess")
        .write_stdin("import \"@oz/Ownable.sol\";\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"))
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn missing_remapping_file_fails_the_run() {
    let dir = TempDir::new().unwrap();
    bin()
        .current_dir(dir.path())
        .arg("preprocess")
        .write_stdin("import \"@oz/Ownable.sol\";\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}
