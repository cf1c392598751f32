//! Deployer account derivation and selection.
//!
//! Pure derivation/selection logic with no network I/O; the elliptic-curve
//! math itself is delegated to the alloy signer stack. The deployment
//! pipeline only needs a single named role, "deployer", which is account
//! index 0 of whatever sequence the network's policy produces.

use crate::network::{AccountPolicy, NetworkProfile};
use crate::{DeployerError, Result};
use alloy_signer_local::{coins_bip39::English, MnemonicBuilder, PrivateKeySigner};

/// Account index of the "deployer" role within a profile's account sequence.
pub const DEPLOYER_INDEX: u32 = 0;

/// Resolve the signing account used to deploy on the given network.
///
/// Fails with a credential error when the mnemonic is missing or malformed,
/// or when the key list is empty.
pub fn resolve_deployer(profile: &NetworkProfile) -> Result<PrivateKeySigner> {
    match &profile.accounts {
        AccountPolicy::Mnemonic {
            phrase,
            derivation_path,
            initial_index,
            ..
        } => {
            let phrase = required_phrase(profile, phrase.as_deref())?;
            derive_at(profile, phrase, derivation_path, initial_index + DEPLOYER_INDEX)
        }
        AccountPolicy::PrivateKeys { keys } => {
            let key = keys.first().ok_or_else(|| {
                DeployerError::Credential(format!(
                    "network '{}' has an empty key list; set its private key environment variable",
                    profile.name
                ))
            })?;
            parse_key(profile, key)
        }
    }
}

/// Derive the full, ordered account sequence configured for the profile.
///
/// For a mnemonic policy this is `count` accounts starting at
/// `initial_index`; for an explicit key list it is the list itself.
pub fn derive_accounts(profile: &NetworkProfile) -> Result<Vec<PrivateKeySigner>> {
    match &profile.accounts {
        AccountPolicy::Mnemonic {
            phrase,
            derivation_path,
            count,
            initial_index,
        } => {
            let phrase = required_phrase(profile, phrase.as_deref())?;
            (0..*count)
                .map(|i| derive_at(profile, phrase, derivation_path, initial_index + i))
                .collect()
        }
        AccountPolicy::PrivateKeys { keys } => {
            if keys.is_empty() {
                return Err(DeployerError::Credential(format!(
                    "network '{}' has an empty key list; set its private key environment variable",
                    profile.name
                ))
                .into());
            }
            keys.iter().map(|key| parse_key(profile, key)).collect()
        }
    }
}

fn required_phrase<'a>(profile: &NetworkProfile, phrase: Option<&'a str>) -> Result<&'a str> {
    phrase.map(str::trim).filter(|p| !p.is_empty()).ok_or_else(|| {
        DeployerError::Credential(format!(
            "network '{}' derives accounts from a mnemonic, but MNEMONIC is not set",
            profile.name
        ))
        .into()
    })
}

fn derive_at(
    profile: &NetworkProfile,
    phrase: &str,
    derivation_path: &str,
    index: u32,
) -> Result<PrivateKeySigner> {
    MnemonicBuilder::<English>::default()
        .phrase(phrase)
        .derivation_path(format!("{}/{}", derivation_path, index))
        .and_then(|builder| builder.build())
        .map_err(|e| {
            DeployerError::Credential(format!(
                "cannot derive account {} for network '{}': {}",
                index, profile.name, e
            ))
            .into()
        })
}

fn parse_key(profile: &NetworkProfile, key: &str) -> Result<PrivateKeySigner> {
    key.trim().parse::<PrivateKeySigner>().map_err(|e| {
        DeployerError::Credential(format!(
            "malformed private key for network '{}': {}",
            profile.name, e
        ))
        .into()
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
