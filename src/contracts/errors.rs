use thiserror::Error;

use crate::wallet::WalletRpcError;

/// Errors from reading the registry contracts.
#[derive(Debug, Error)]
pub enum ContractError {
    /// The wallet failed to execute the read
    #[error(transparent)]
    Rpc(#[from] WalletRpcError),

    /// Return data did not match the ABI
    #[error("Failed to decode {method} return data: {source}")]
    Abi {
        /// Contract method that was called
        method: &'static str,
        /// Decoder error
        #[source]
        source: alloy_sol_types::Error,
    },
}
