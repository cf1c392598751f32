//! Chain client seam.
//!
//! The orchestrator only needs one operation from the chain: sign and submit
//! a create transaction, then await its inclusion. [`ChainClient`] is the
//! trait boundary; [`RpcChainClient`] is the JSON-RPC implementation used by
//! the CLI. Tests substitute their own implementation to observe submission
//! behavior without a node.

use crate::network::NetworkProfile;
use crate::{DeployerError, Result};
use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_primitives::{Address, TxHash};
use alloy_provider::{Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use tracing::debug;

/// A deployment transaction ready for submission: creation bytecode with the
/// ABI-encoded constructor arguments already appended.
#[derive(Debug, Clone)]
pub struct DeploymentTx {
    pub init_code: Vec<u8>,
    pub gas_limit: u64,
}

/// The on-chain result of a confirmed deployment transaction.
#[derive(Debug, Clone)]
pub struct TxConfirmation {
    pub contract_address: Address,
    pub transaction_hash: TxHash,
    pub block_number: Option<u64>,
}

/// Executes deployment transactions against a chain.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Submit `tx` signed by `deployer` and await its inclusion.
    async fn deploy_contract(
        &self,
        deployer: &PrivateKeySigner,
        tx: DeploymentTx,
    ) -> Result<TxConfirmation>;
}

/// [`ChainClient`] over an HTTP JSON-RPC endpoint.
#[derive(Debug, Clone)]
pub struct RpcChainClient {
    rpc_url: String,
    chain_id: u64,
}

impl RpcChainClient {
    /// Build a client for the given profile.
    ///
    /// Endpoint resolution happens here, so a profile whose URL comes from an
    /// unset environment variable fails before any I/O.
    pub fn for_profile(profile: &NetworkProfile) -> Result<Self> {
        Ok(Self {
            rpc_url: profile.rpc.url(&profile.name)?,
            chain_id: profile.chain_id,
        })
    }
}

#[async_trait]
impl ChainClient for RpcChainClient {
    async fn deploy_contract(
        &self,
        deployer: &PrivateKeySigner,
        tx: DeploymentTx,
    ) -> Result<TxConfirmation> {
        let url = self.rpc_url.parse().map_err(|e| {
            DeployerError::Deployment(format!("invalid RPC URL {}: {}", self.rpc_url, e))
        })?;
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(deployer.clone()))
            .on_http(url);

        let request = TransactionRequest::default()
            .with_deploy_code(tx.init_code)
            .with_chain_id(self.chain_id)
            .with_gas_limit(tx.gas_limit);

        let pending = provider.send_transaction(request).await.map_err(|e| {
            DeployerError::Deployment(format!("transaction submission failed: {}", e))
        })?;
        let tx_hash = *pending.tx_hash();
        debug!("submitted deployment transaction {}", tx_hash);

        let receipt = pending.get_receipt().await.map_err(|e| {
            DeployerError::Deployment(format!("awaiting receipt for {} failed: {}", tx_hash, e))
        })?;
        if !receipt.status() {
            return Err(DeployerError::Deployment(format!(
                "deployment transaction {} reverted",
                tx_hash
            ))
            .into());
        }
        let contract_address = receipt.contract_address.ok_or_else(|| {
            DeployerError::Deployment(format!(
                "receipt for {} carries no contract address",
                tx_hash
            ))
        })?;

        Ok(TxConfirmation {
            contract_address,
            transaction_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
        })
    }
}
