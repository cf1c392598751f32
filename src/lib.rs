//! Deployment orchestration for EVM smart-contract artifacts.
//!
//! Two independent pipelines:
//! - [`remap`]   — rewrites source import paths through a declarative
//!   remapping table before an external compiler consumes them.
//! - [`network`] + [`deploy`] — resolves a named network profile and its
//!   deployer account, then drives an idempotent contract deployment against
//!   the chain, persisting the outcome on disk.
//!
//! Sub-modules:
//! - [`cli`]     — Command-line surface (`deploy`, `preprocess`, `accounts`).
//! - [`remap`]   — Remapping table loader and import preprocessor.
//! - [`network`] — Network profile registry and account resolver.
//! - [`deploy`]  — Artifact loading, record store, chain client, orchestrator.

pub mod cli;
pub mod deploy;
pub mod network;
pub mod remap;

use thiserror::Error;

/// Crate-wide result alias. Component errors are [`DeployerError`] values
/// carried inside [`anyhow::Error`]; callers that need the kind downcast.
pub type Result<T> = anyhow::Result<T>;

/// Error taxonomy for the deployment pipeline.
///
/// Every variant is fatal for the current invocation; nothing here is
/// retried automatically. Retry policy, if any, belongs to the layer that
/// invokes the CLI.
#[derive(Debug, Error)]
pub enum DeployerError {
    /// Malformed or missing remapping / artifact / record configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested network name is not registered.
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),

    /// Missing or malformed signing material for the selected network.
    #[error("Credential error: {0}")]
    Credential(String),

    /// The chain rejected the transaction or the RPC transport failed.
    #[error("Deployment error: {0}")]
    Deployment(String),

    /// The confirmation deadline elapsed. The on-chain state is unknown:
    /// the transaction may still land. Re-query the chain or the deployment
    /// record store before assuming failure.
    #[error("Timed out after {0:?} awaiting confirmation; on-chain state is unknown")]
    Timeout(std::time::Duration),
}
