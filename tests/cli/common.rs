use assert_cmd::Command;

/// A fresh `evm-deploy` invocation with secret-bearing variables scrubbed so
/// the ambient environment cannot leak into assertions.
pub fn bin() -> Command {
    let mut cmd = Command::cargo_bin("evm-deploy").unwrap();
    for var in ["MNEMONIC", "GANACHE_URL", "EVM_PRIVATE_KEY", "EVM_TEST_PRIVATE_KEY"] {
        cmd.env_remove(var);
    }
    cmd
}
