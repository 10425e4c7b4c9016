use alloy_primitives::Address;
use std::time::Duration;

use crate::constants::{
    ACCOUNT_METADATA_ADDRESS, DEFAULT_CONFIRMATION_TIMEOUT_SECS, DEFAULT_GAS_LIMIT,
    DEFAULT_SETTLE_DELAY_MS, LIST_RECORDS_ADDRESS, LIST_REGISTRY_ADDRESS, RECEIPT_POLL_INTERVAL_MS,
};
use crate::network::HomeChain;

/// Contract addresses of one registry deployment on the home chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub list_registry: Address,
    pub account_metadata: Address,
    pub list_records: Address,
}

impl Default for Deployment {
    fn default() -> Self {
        Self {
            list_registry: LIST_REGISTRY_ADDRESS,
            account_metadata: ACCOUNT_METADATA_ADDRESS,
            list_records: LIST_RECORDS_ADDRESS,
        }
    }
}

/// Settings for one follow workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowConfig {
    pub deployment: Deployment,
    pub home_chain: HomeChain,
    /// Gas ceiling sent with `applyListOp`
    pub gas_limit: u64,
    /// Upper bound on waiting for the wallet after a chain switch
    pub settle_delay: Duration,
    /// Receipt polling interval
    pub poll_interval: Duration,
    /// Upper bound on waiting for the submitted transaction to be mined
    pub confirmation_timeout: Duration,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            deployment: Deployment::default(),
            home_chain: HomeChain::default(),
            gas_limit: DEFAULT_GAS_LIMIT,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
            poll_interval: Duration::from_millis(RECEIPT_POLL_INTERVAL_MS),
            confirmation_timeout: Duration::from_secs(DEFAULT_CONFIRMATION_TIMEOUT_SECS),
        }
    }
}
