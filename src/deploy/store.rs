//! On-disk deployment record store.
//!
//! Records live at `<root>/<network>/<Contract>.json`, one file per
//! `(contract, network)` key, so idempotency checks work across independent
//! CLI processes. [`DeploymentStore::entry`] takes a blocking exclusive
//! `flock` on a sibling lock file and holds it for the lifetime of the
//! returned [`StoreEntry`]; a concurrent run against the same key blocks
//! until the first one has checked, deployed, and persisted. That makes the
//! read-then-write sequence effectively atomic per key without any
//! in-process coordination.

use crate::{DeployerError, Result};
use alloy_primitives::{Address, TxHash};
use chrono::{DateTime, Utc};
use rustix::fs::{flock, FlockOperation};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::PathBuf;
use tracing::debug;

/// Persisted evidence of a completed deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub contract_name: String,
    pub network_name: String,
    pub address: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
    pub deployed_at: DateTime<Utc>,
}

/// The record store rooted at a deployments directory.
#[derive(Debug, Clone)]
pub struct DeploymentStore {
    root: PathBuf,
}

impl DeploymentStore {
    /// Open (creating if necessary) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root).map_err(|e| {
            DeployerError::Config(format!(
                "cannot create deployments directory {}: {}",
                root.display(),
                e
            ))
        })?;
        Ok(Self { root })
    }

    /// Acquire the exclusive per-key entry for `(contract, network)`.
    ///
    /// Blocks until any concurrent holder of the same key releases it.
    pub fn entry(&self, contract: &str, network: &str) -> Result<StoreEntry> {
        validate_segment("contract name", contract)?;
        validate_segment("network name", network)?;

        let dir = self.root.join(network);
        std::fs::create_dir_all(&dir).map_err(|e| {
            DeployerError::Config(format!(
                "cannot create network directory {}: {}",
                dir.display(),
                e
            ))
        })?;

        let lock_path = dir.join(format!(".{}.lock", contract));
        let lock = File::create(&lock_path).map_err(|e| {
            DeployerError::Config(format!("cannot open lock file {}: {}", lock_path.display(), e))
        })?;
        flock(&lock, FlockOperation::LockExclusive).map_err(|e| {
            DeployerError::Config(format!("cannot lock {}: {}", lock_path.display(), e))
        })?;
        debug!("holding deployment lock for {}/{}", network, contract);

        Ok(StoreEntry {
            record_path: dir.join(format!("{}.json", contract)),
            _lock: lock,
        })
    }
}

/// An exclusively locked `(contract, network)` slot in the store.
///
/// The lock is released when the entry is dropped (closing the file
/// descriptor releases the `flock`).
#[derive(Debug)]
pub struct StoreEntry {
    record_path: PathBuf,
    _lock: File,
}

impl StoreEntry {
    /// Read the existing record for this key, if one was ever persisted.
    pub fn existing(&self) -> Result<Option<DeploymentRecord>> {
        let text = match std::fs::read_to_string(&self.record_path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(DeployerError::Config(format!(
                    "cannot read deployment record {}: {}",
                    self.record_path.display(),
                    e
                ))
                .into())
            }
        };
        let record = serde_json::from_str(&text).map_err(|e| {
            DeployerError::Config(format!(
                "corrupt deployment record {}: {}",
                self.record_path.display(),
                e
            ))
        })?;
        Ok(Some(record))
    }

    /// Persist `record`, replacing any previous record for this key.
    pub fn persist(&self, record: &DeploymentRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|e| DeployerError::Config(format!("cannot serialize record: {}", e)))?;
        std::fs::write(&self.record_path, json).map_err(|e| {
            DeployerError::Config(format!(
                "cannot write deployment record {}: {}",
                self.record_path.display(),
                e
            ))
        })?;
        debug!("persisted deployment record {}", self.record_path.display());
        Ok(())
    }
}

/// Contract and network names become path segments; restrict them so a
/// hostile name cannot escape the store root.
fn validate_segment(what: &str, value: &str) -> Result<()> {
    let ok = !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(DeployerError::Config(format!("invalid {} for record store: {:?}", what, value)).into())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
