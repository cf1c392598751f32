//! Compiled-contract artifact loading.
//!
//! Artifacts are the JSON files emitted by the external build system:
//! camelCase keys, creation bytecode as a 0x-prefixed hex string. The ABI is
//! carried opaquely; constructor arguments arrive at the CLI already
//! ABI-encoded.

use crate::{DeployerError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// A compiled contract as produced by the external build pipeline.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractArtifact {
    pub contract_name: String,
    #[serde(default)]
    pub abi: serde_json::Value,
    pub bytecode: String,
}

impl ContractArtifact {
    /// Read and parse an artifact file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            DeployerError::Config(format!("cannot read artifact {}: {}", path.display(), e))
        })?;
        let artifact: ContractArtifact = serde_json::from_str(&text).map_err(|e| {
            DeployerError::Config(format!("malformed artifact {}: {}", path.display(), e))
        })?;
        debug!(
            "loaded artifact for contract {} from {}",
            artifact.contract_name,
            path.display()
        );
        Ok(artifact)
    }

    /// Decode the creation bytecode.
    ///
    /// An empty bytecode field means the source was an interface or abstract
    /// contract; deploying it is a configuration mistake, not a chain error.
    pub fn bytecode_bytes(&self) -> Result<Vec<u8>> {
        let stripped = self.bytecode.trim().trim_start_matches("0x");
        let bytes = hex::decode(stripped).map_err(|e| {
            DeployerError::Config(format!(
                "artifact for {} has invalid bytecode hex: {}",
                self.contract_name, e
            ))
        })?;
        if bytes.is_empty() {
            return Err(DeployerError::Config(format!(
                "artifact for {} has no creation bytecode (interface or abstract contract?)",
                self.contract_name
            ))
            .into());
        }
        Ok(bytes)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
