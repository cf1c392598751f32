//! Named network configurations.
//!
//! The registry is an explicit immutable configuration object, constructed
//! once at process start and passed by reference into the components that
//! need it, never ambient global state. Environment values are captured at
//! construction time; a missing secret only surfaces as a credential error
//! when the network that needs it is actually selected, before any network
//! I/O is attempted.

use crate::{DeployerError, Result};

/// Standard BIP-44 Ethereum account derivation path.
pub const DEFAULT_DERIVATION_PATH: &str = "m/44'/60'/0'/0";

/// Conventional endpoint of a locally running development node.
pub const LOCAL_NODE_URL: &str = "http://127.0.0.1:8545";

/// Gas ceiling used for local development chains.
const LOCAL_GAS_LIMIT: u64 = 30_000_000;

/// Where a network's JSON-RPC endpoint comes from.
#[derive(Debug, Clone)]
pub enum RpcEndpoint {
    /// Ephemeral/local chain with no fixed endpoint; resolves to
    /// [`LOCAL_NODE_URL`].
    LocalNode,
    /// Fixed public endpoint.
    Static(String),
    /// Endpoint supplied through an environment variable, captured when the
    /// registry was built.
    FromEnv { var: String, value: Option<String> },
}

impl RpcEndpoint {
    /// Resolve the endpoint URL for `network`.
    ///
    /// A configured-but-unset environment variable fails here, before any
    /// network I/O is attempted.
    pub fn url(&self, network: &str) -> Result<String> {
        match self {
            RpcEndpoint::LocalNode => Ok(LOCAL_NODE_URL.to_string()),
            RpcEndpoint::Static(url) => Ok(url.clone()),
            RpcEndpoint::FromEnv { var, value } => value.clone().ok_or_else(|| {
                DeployerError::Credential(format!(
                    "network '{}' reads its RPC URL from {}, but it is not set",
                    network, var
                ))
                .into()
            }),
        }
    }
}

/// How the signing accounts for a network are obtained.
#[derive(Debug, Clone)]
pub enum AccountPolicy {
    /// Deterministic derivation from a seed phrase. Produces an ordered
    /// sequence of `count` accounts starting at `initial_index`.
    Mnemonic {
        phrase: Option<String>,
        derivation_path: String,
        count: u32,
        initial_index: u32,
    },
    /// A literal, ordered list of private keys.
    PrivateKeys { keys: Vec<String> },
}

/// A named bundle of chain connection and policy parameters.
///
/// `skip_if_deployed` is a per-network idempotency policy: on for long-lived
/// public networks where a redeployment is costly or semantically wrong, off
/// for test networks where a fresh deployment is always desired.
#[derive(Debug, Clone)]
pub struct NetworkProfile {
    pub name: String,
    pub rpc: RpcEndpoint,
    pub chain_id: u64,
    pub accounts: AccountPolicy,
    pub gas_limit: u64,
    pub skip_if_deployed: bool,
}

/// Holds every registered [`NetworkProfile`], immutable for the process
/// lifetime.
#[derive(Debug)]
pub struct NetworkRegistry {
    profiles: Vec<NetworkProfile>,
}

impl NetworkRegistry {
    /// Snapshot the registry from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the registry through an arbitrary variable lookup.
    ///
    /// The lookup indirection keeps the registry testable without mutating
    /// process-wide environment state.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mnemonic = |phrase: Option<String>| AccountPolicy::Mnemonic {
            phrase,
            derivation_path: DEFAULT_DERIVATION_PATH.to_string(),
            count: 30,
            initial_index: 0,
        };
        let key_list = |key: Option<String>| AccountPolicy::PrivateKeys {
            keys: key.into_iter().collect(),
        };

        let profiles = vec![
            NetworkProfile {
                name: "hardhat".to_string(),
                rpc: RpcEndpoint::LocalNode,
                chain_id: 31337,
                accounts: mnemonic(get("MNEMONIC")),
                gas_limit: LOCAL_GAS_LIMIT,
                skip_if_deployed: false,
            },
            NetworkProfile {
                name: "ganache".to_string(),
                rpc: RpcEndpoint::FromEnv {
                    var: "GANACHE_URL".to_string(),
                    value: get("GANACHE_URL"),
                },
                chain_id: 1337,
                accounts: mnemonic(get("MNEMONIC")),
                gas_limit: LOCAL_GAS_LIMIT,
                skip_if_deployed: false,
            },
            NetworkProfile {
                name: "evmTestnet".to_string(),
                rpc: RpcEndpoint::Static("https://api.testnet.evm.eosnetwork.com".to_string()),
                chain_id: 15557,
                accounts: key_list(get("EVM_TEST_PRIVATE_KEY")),
                gas_limit: 2_000_000,
                skip_if_deployed: false,
            },
            NetworkProfile {
                name: "evm".to_string(),
                rpc: RpcEndpoint::Static("https://api.evm.eosnetwork.com".to_string()),
                chain_id: 17777,
                accounts: key_list(get("EVM_PRIVATE_KEY")),
                gas_limit: 2_000_000,
                skip_if_deployed: true,
            },
        ];

        Self { profiles }
    }

    /// Resolve a profile by name. No I/O happens here; an unknown name fails
    /// immediately.
    pub fn resolve(&self, name: &str) -> Result<&NetworkProfile> {
        self.profiles
            .iter()
            .find(|profile| profile.name == name)
            .ok_or_else(|| DeployerError::UnknownNetwork(name.to_string()).into())
    }

    /// Registered network names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|profile| profile.name.as_str())
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
