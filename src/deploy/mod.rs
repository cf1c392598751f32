//! Deployment sub-system.
//!
//! Sub-modules:
//! - [`artifact`]     — Compiled-contract artifact loading.
//! - [`store`]        — On-disk deployment record store with per-key locking.
//! - [`chain`]        — Chain client seam and its JSON-RPC implementation.
//! - [`orchestrator`] — Network-scoped, idempotent deployment driver.

pub mod artifact;
pub mod chain;
pub mod orchestrator;
pub mod store;

// Top-level re-exports.
pub use artifact::ContractArtifact;
pub use chain::{ChainClient, DeploymentTx, RpcChainClient, TxConfirmation};
pub use orchestrator::{DeploymentOrchestrator, DeploymentOutcome, DeploymentRequest};
pub use store::{DeploymentRecord, DeploymentStore, StoreEntry};
