//! Network-scoped, idempotent deployment orchestration.
//!
//! One invocation drives one contract onto one network: resolve the deployer
//! account, check the record store, submit through the chain client, persist
//! the outcome. Steps run sequentially; the store lookup and the
//! submission/confirmation awaits are the suspension points. The orchestrator
//! holds only references and caches nothing across invocations; cross-process
//! idempotency lives entirely in the record store.

use crate::deploy::chain::{ChainClient, DeploymentTx};
use crate::deploy::store::{DeploymentRecord, DeploymentStore};
use crate::network::{accounts, NetworkProfile};
use crate::{DeployerError, Result};
use chrono::Utc;
use std::time::Duration;
use tracing::info;

/// One deployment to perform. Transient; constructed per invocation.
#[derive(Debug)]
pub struct DeploymentRequest<'a> {
    pub contract_name: String,
    /// Creation bytecode from the compiled artifact.
    pub bytecode: Vec<u8>,
    /// ABI-encoded constructor arguments, appended to the bytecode in order.
    pub constructor_args: Vec<u8>,
    pub profile: &'a NetworkProfile,
    /// Optional ceiling on submission + confirmation. When it elapses the
    /// on-chain state is unknown and the caller must re-check.
    pub deadline: Option<Duration>,
}

/// Terminal outcome of a deployment run.
#[derive(Debug, Clone)]
pub enum DeploymentOutcome {
    /// A transaction was submitted and confirmed; the record is new.
    Confirmed(DeploymentRecord),
    /// A prior record satisfied the idempotency policy; nothing was
    /// submitted.
    Skipped(DeploymentRecord),
}

impl DeploymentOutcome {
    pub fn record(&self) -> &DeploymentRecord {
        match self {
            DeploymentOutcome::Confirmed(record) | DeploymentOutcome::Skipped(record) => record,
        }
    }
}

/// Drives idempotent deployments against a record store and a chain client.
pub struct DeploymentOrchestrator<'a, C: ChainClient> {
    store: &'a DeploymentStore,
    chain: &'a C,
}

impl<'a, C: ChainClient> DeploymentOrchestrator<'a, C> {
    pub fn new(store: &'a DeploymentStore, chain: &'a C) -> Self {
        Self { store, chain }
    }

    /// Deploy per the request's network policy.
    ///
    /// With `skip_if_deployed` set on the profile, at most one on-chain
    /// deployment ever happens per `(contract, network)` pair: a second run
    /// returns the first run's record unchanged. The store entry lock is held
    /// from the idempotency check until the new record is persisted, so two
    /// concurrent runs cannot both submit.
    #[tracing::instrument(skip_all, fields(contract = %request.contract_name, network = %request.profile.name))]
    pub async fn deploy(&self, request: &DeploymentRequest<'_>) -> Result<DeploymentOutcome> {
        let profile = request.profile;
        let deployer = accounts::resolve_deployer(profile)?;

        // Both lines precede the idempotency check and the submission, so
        // they appear even when the run later skips or fails.
        info!("chain id: {}", profile.chain_id);
        info!("network name: {}", profile.name);

        let entry = self.store.entry(&request.contract_name, &profile.name)?;
        if profile.skip_if_deployed {
            if let Some(existing) = entry.existing()? {
                info!(
                    "{} already deployed on {} at {}; skipping",
                    existing.contract_name, existing.network_name, existing.address
                );
                return Ok(DeploymentOutcome::Skipped(existing));
            }
        }

        let mut init_code =
            Vec::with_capacity(request.bytecode.len() + request.constructor_args.len());
        init_code.extend_from_slice(&request.bytecode);
        init_code.extend_from_slice(&request.constructor_args);
        let tx = DeploymentTx {
            init_code,
            gas_limit: profile.gas_limit,
        };

        let confirmation = match request.deadline {
            Some(limit) => tokio::time::timeout(limit, self.chain.deploy_contract(&deployer, tx))
                .await
                .map_err(|_| DeployerError::Timeout(limit))??,
            None => self.chain.deploy_contract(&deployer, tx).await?,
        };

        let record = DeploymentRecord {
            contract_name: request.contract_name.clone(),
            network_name: profile.name.clone(),
            address: confirmation.contract_address,
            transaction_hash: confirmation.transaction_hash,
            block_number: confirmation.block_number,
            deployed_at: Utc::now(),
        };
        entry.persist(&record)?;
        info!(
            "{} deployed on {} at {}",
            record.contract_name, record.network_name, record.address
        );

        Ok(DeploymentOutcome::Confirmed(record))
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
