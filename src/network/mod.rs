//! Network profile and account sub-system.
//!
//! Sub-modules:
//! - [`registry`] — Named network configurations, snapshotted from the
//!   environment at process start.
//! - [`accounts`] — Deployer account derivation and selection.

pub mod accounts;
pub mod registry;

// Top-level re-exports.
pub use accounts::{derive_accounts, resolve_deployer, DEPLOYER_INDEX};
pub use registry::{AccountPolicy, NetworkProfile, NetworkRegistry, RpcEndpoint};
