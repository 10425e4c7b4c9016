use alloy_primitives::{address, Address};

/// Home chain id (Base mainnet). List storage is authoritative only here.
pub const HOME_CHAIN_ID: u64 = 8453;
/// Human-readable name used when asking a wallet to add the home chain.
pub const HOME_CHAIN_NAME: &str = "Base";
/// Public RPC endpoint advertised to wallets for the home chain.
pub const HOME_CHAIN_RPC_URL: &str = "https://mainnet.base.org";
/// Block explorer advertised to wallets for the home chain.
pub const HOME_CHAIN_EXPLORER_URL: &str = "https://basescan.org";

/// List Registry (ERC-721 list tokens, storage location descriptors).
pub const LIST_REGISTRY_ADDRESS: Address = address!("0x0E688f5DCa4a0a4729946ACbC44C792341714e08");
/// Account Metadata key/value store.
pub const ACCOUNT_METADATA_ADDRESS: Address =
    address!("0x5289fE5daBC021D02FDDf23d4a4DF96F4E0F17EF");
/// List Records contract that applies list operations to a slot.
pub const LIST_RECORDS_ADDRESS: Address = address!("0x41Aa48Ef3c0446b46a5b1cc6337FF3d3716E2A33");

/// Account metadata key holding the primary list token id.
pub const PRIMARY_LIST_KEY: &str = "primary-list";

/// Gas ceiling sent with `applyListOp`. Set explicitly so wallets always show a prompt.
pub const DEFAULT_GAS_LIMIT: u64 = 500_000;
/// Settle delay after a chain switch before the session is re-read (milliseconds).
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 1_000;
/// Interval between receipt polls while waiting for confirmation (milliseconds).
pub const RECEIPT_POLL_INTERVAL_MS: u64 = 2_000;
/// How long a submitted transaction may stay unmined before the run gives up (seconds).
pub const DEFAULT_CONFIRMATION_TIMEOUT_SECS: u64 = 300;

/// Ethereum address length (20 bytes)
pub const ADDRESS_LENGTH: usize = 20;
