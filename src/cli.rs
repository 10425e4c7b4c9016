use alloy_primitives::Address;
use clap::Parser;
use std::time::Duration;

use crate::config::{Deployment, FollowConfig};
use crate::constants::{
    ACCOUNT_METADATA_ADDRESS, DEFAULT_CONFIRMATION_TIMEOUT_SECS, DEFAULT_GAS_LIMIT,
    DEFAULT_SETTLE_DELAY_MS, LIST_RECORDS_ADDRESS, LIST_REGISTRY_ADDRESS, RECEIPT_POLL_INTERVAL_MS,
};
use crate::network::HomeChain;

/// CLI arguments for the follow tool
#[derive(Parser, Debug)]
#[command(name = "efp-follow", about = "Follow an address on your primary list")]
pub struct Cli {
    /// Address to follow (0x-prefixed hex, 20 bytes; shorter values are left-padded)
    pub target: String,

    /// Remove the address from the list instead of adding it
    #[arg(long)]
    pub unfollow: bool,

    /// EIP-1193 wallet JSON-RPC endpoint (for example a desktop wallet on 127.0.0.1:1248).
    /// Takes precedence over --signer-key.
    #[arg(long, env = "WALLET_URL")]
    pub wallet_url: Option<String>,

    /// Private key (hex) for the built-in local wallet.
    /// Can also be set via SIGNER_KEY environment variable.
    #[arg(long, env = "SIGNER_KEY", hide_env_values = true)]
    pub signer_key: Option<String>,

    /// Node RPC endpoint the local wallet starts on (requires --signer-key)
    #[arg(long, env = "RPC_URL", default_value = "https://mainnet.base.org")]
    pub rpc_url: String,

    /// List Registry contract
    #[arg(long, default_value_t = LIST_REGISTRY_ADDRESS)]
    pub list_registry: Address,

    /// Account Metadata contract
    #[arg(long, default_value_t = ACCOUNT_METADATA_ADDRESS)]
    pub account_metadata: Address,

    /// List Records contract
    #[arg(long, default_value_t = LIST_RECORDS_ADDRESS)]
    pub list_records: Address,

    /// Gas ceiling for the list transaction
    #[arg(long, default_value_t = DEFAULT_GAS_LIMIT)]
    pub gas_limit: u64,

    /// Maximum wait after a chain switch before re-reading the wallet, in milliseconds
    #[arg(long, default_value_t = DEFAULT_SETTLE_DELAY_MS)]
    pub settle_delay_ms: u64,

    /// Receipt polling interval in milliseconds
    #[arg(long, default_value_t = RECEIPT_POLL_INTERVAL_MS)]
    pub poll_interval_ms: u64,

    /// Give up waiting for the transaction to be mined after this many seconds
    #[arg(long, default_value_t = DEFAULT_CONFIRMATION_TIMEOUT_SECS)]
    pub confirmation_timeout_secs: u64,

    /// Print the result as JSON instead of colored text
    #[arg(long)]
    pub json: bool,

    /// Enable structured JSON logging instead of human-readable output.
    #[arg(long)]
    pub log_json: bool,
}

impl Cli {
    /// Workflow settings selected by the flags.
    pub fn follow_config(&self) -> FollowConfig {
        FollowConfig {
            deployment: Deployment {
                list_registry: self.list_registry,
                account_metadata: self.account_metadata,
                list_records: self.list_records,
            },
            home_chain: HomeChain::default(),
            gas_limit: self.gas_limit,
            settle_delay: Duration::from_millis(self.settle_delay_ms),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
            confirmation_timeout: Duration::from_secs(self.confirmation_timeout_secs),
        }
    }
}
