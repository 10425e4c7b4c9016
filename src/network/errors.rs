use thiserror::Error;

use crate::wallet::{ProviderError, WalletRpcError};

/// Errors from moving the wallet onto the home chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The wallet or user declined `wallet_switchEthereumChain`
    #[error("Switch to chain {chain_id} rejected: {source}")]
    SwitchRejected {
        /// Requested chain
        chain_id: u64,
        /// Wallet error
        #[source]
        source: WalletRpcError,
    },

    /// `wallet_addEthereumChain` failed after the wallet did not know the chain
    #[error("Adding chain {chain_id} failed: {source}")]
    AddFailed {
        /// Requested chain
        chain_id: u64,
        /// Wallet error
        #[source]
        source: WalletRpcError,
    },

    /// The wallet acknowledged the switch but still reports another chain
    #[error("Wallet still on chain {actual} after switching to {expected}")]
    NotSwitched {
        /// Home chain
        expected: u64,
        /// Chain reported after settling
        actual: u64,
    },

    /// Reconnecting after the switch failed
    #[error(transparent)]
    Reconnect(#[from] ProviderError),
}
