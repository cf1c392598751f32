//! Subcommand drivers.

use crate::cli::{AccountsArgs, DeployArgs, PreprocessArgs};
use crate::deploy::{
    ContractArtifact, DeploymentOrchestrator, DeploymentOutcome, DeploymentRequest,
    DeploymentStore, RpcChainClient,
};
use crate::network::{accounts, NetworkRegistry, DEPLOYER_INDEX};
use crate::remap::{load_remappings, transform_source};
use crate::{DeployerError, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Read;
use std::time::Duration;

/// Drive one contract deployment end-to-end.
pub async fn deploy(args: DeployArgs) -> Result<()> {
    let registry = NetworkRegistry::from_env();
    // Network resolution comes first: an unknown name fails before any
    // filesystem or chain access.
    let profile = registry.resolve(&args.network)?;

    let artifact = ContractArtifact::load(&args.artifact)?;
    let request = DeploymentRequest {
        contract_name: artifact.contract_name.clone(),
        bytecode: artifact.bytecode_bytes()?,
        constructor_args: decode_constructor_args(&args.constructor_args)?,
        profile,
        deadline: args.timeout.map(Duration::from_secs),
    };

    let store = DeploymentStore::open(&args.deployments_dir)?;
    let chain = RpcChainClient::for_profile(profile)?;
    let orchestrator = DeploymentOrchestrator::new(&store, &chain);

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("static spinner template"),
    );
    spinner.set_message(format!(
        "Deploying {} to {}...",
        request.contract_name, profile.name
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = orchestrator.deploy(&request).await;
    spinner.finish_and_clear();

    match outcome? {
        DeploymentOutcome::Confirmed(record) => {
            println!(
                "{} {} deployed on {} at {} (tx {})",
                "✓".green(),
                record.contract_name,
                record.network_name,
                record.address,
                record.transaction_hash
            );
        }
        DeploymentOutcome::Skipped(record) => {
            println!(
                "{} {} already deployed on {} at {}; reusing existing record",
                "≡".yellow(),
                record.contract_name,
                record.network_name,
                record.address
            );
        }
    }

    Ok(())
}

/// Rewrite source files (or stdin) through the remapping table to stdout.
pub fn preprocess(args: PreprocessArgs) -> Result<()> {
    let rules = load_remappings(&args.remappings)?;

    if args.sources.is_empty() {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(|e| DeployerError::Config(format!("cannot read stdin: {}", e)))?;
        print!("{}", transform_source(&source, &rules));
        return Ok(());
    }

    for path in &args.sources {
        let source = std::fs::read_to_string(path).map_err(|e| {
            DeployerError::Config(format!("cannot read source {}: {}", path.display(), e))
        })?;
        print!("{}", transform_source(&source, &rules));
    }

    Ok(())
}

/// List the account sequence configured for a network profile.
pub fn accounts(args: AccountsArgs) -> Result<()> {
    let registry = NetworkRegistry::from_env();
    let profile = registry.resolve(&args.network)?;

    for (index, signer) in accounts::derive_accounts(profile)?.iter().enumerate() {
        let role = if index as u32 == DEPLOYER_INDEX {
            " (deployer)"
        } else {
            ""
        };
        println!("{:>3}  {}{}", index, signer.address(), role);
    }

    Ok(())
}

fn decode_constructor_args(chunks: &[String]) -> Result<Vec<u8>> {
    let mut encoded = Vec::new();
    for chunk in chunks {
        let bytes = hex::decode(chunk.trim().trim_start_matches("0x")).map_err(|e| {
            DeployerError::Config(format!("invalid constructor argument hex {:?}: {}", chunk, e))
        })?;
        encoded.extend_from_slice(&bytes);
    }
    Ok(encoded)
}

// ── tests ─────────────────────────────────────────────────────────────────────
