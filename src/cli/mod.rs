//! Command-line surface.
//!
//! Sub-modules:
//! - [`commands`] — Drivers for the `deploy`, `preprocess`, and `accounts`
//!   subcommands.

pub mod commands;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "evm-deploy",
    version,
    about = "Deploy EVM smart-contract artifacts across network profiles"
)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::Trace,
            }
        }
    }
}

/// Log-level selection derived from the global CLI flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    Trace,
}

impl Verbosity {
    pub fn to_log_level(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::ERROR,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Verbose => LevelFilter::DEBUG,
            Verbosity::Trace => LevelFilter::TRACE,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Deploy a compiled contract artifact to a named network
    Deploy(DeployArgs),
    /// Rewrite source import paths through the remapping table
    Preprocess(PreprocessArgs),
    /// List the accounts configured for a network profile
    Accounts(AccountsArgs),
}

#[derive(Args)]
pub struct DeployArgs {
    /// Target network profile name
    #[arg(short, long, env = "DEPLOY_NETWORK")]
    pub network: String,

    /// Path to the compiled contract artifact (JSON)
    #[arg(short, long)]
    pub artifact: PathBuf,

    /// ABI-encoded constructor argument chunk (0x-hex); repeatable,
    /// concatenated in order
    #[arg(long = "constructor-arg", value_name = "HEX")]
    pub constructor_args: Vec<String>,

    /// Directory holding per-network deployment records
    #[arg(long, default_value = "deployments", value_name = "DIR")]
    pub deployments_dir: PathBuf,

    /// Seconds to wait for submission and confirmation before giving up
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Args)]
pub struct PreprocessArgs {
    /// Remapping table file
    #[arg(long, default_value = "remappings.txt", value_name = "FILE")]
    pub remappings: PathBuf,

    /// Source files to rewrite to stdout (stdin when omitted)
    pub sources: Vec<PathBuf>,
}

#[derive(Args)]
pub struct AccountsArgs {
    /// Target network profile name
    #[arg(short, long, env = "DEPLOY_NETWORK")]
    pub network: String,
}
