use thiserror::Error;

/// EIP-1193: the user rejected the request.
pub const USER_REJECTED_CODE: i64 = 4001;
/// EIP-3326: the requested chain has not been added to the wallet.
pub const UNRECOGNIZED_CHAIN_CODE: i64 = 4902;
/// JSON-RPC code nodes use for `execution reverted`.
pub const EXECUTION_REVERTED_CODE: i64 = 3;

/// Error returned by a wallet provider request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletRpcError {
    /// The wallet answered with a JSON-RPC error object
    #[error("Wallet error {code}: {message}")]
    Rpc {
        /// EIP-1193 / JSON-RPC error code
        code: i64,
        /// Error message from the wallet
        message: String,
        /// Raw `data` member, if any (revert payloads land here)
        data: Option<String>,
    },

    /// The request never produced a JSON-RPC answer
    #[error("Wallet transport error: {0}")]
    Transport(String),

    /// Local signing failed
    #[error("Signing failed: {0}")]
    Signing(String),

    /// The wallet answered with something we could not interpret
    #[error("Unexpected wallet response: {0}")]
    InvalidResponse(String),
}

impl WalletRpcError {
    /// Build an RPC error with no data member.
    pub fn rpc(code: i64, message: impl Into<String>) -> Self {
        Self::Rpc {
            code,
            message: message.into(),
            data: None,
        }
    }

    /// JSON-RPC code, when the wallet sent one.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Message without the code prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Rpc { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }

    /// The user declined the prompt.
    pub fn is_user_rejection(&self) -> bool {
        self.code() == Some(USER_REJECTED_CODE)
    }

    /// The wallet does not know the requested chain.
    pub fn is_unrecognized_chain(&self) -> bool {
        self.code() == Some(UNRECOGNIZED_CHAIN_CODE)
    }

    /// Execution reverted on-chain or during simulation.
    pub fn is_revert(&self) -> bool {
        match self {
            Self::Rpc { code, message, .. } => {
                *code == EXECUTION_REVERTED_CODE || message.to_lowercase().contains("revert")
            }
            _ => false,
        }
    }
}

impl From<jsonrpsee::core::ClientError> for WalletRpcError {
    fn from(err: jsonrpsee::core::ClientError) -> Self {
        match err {
            jsonrpsee::core::ClientError::Call(obj) => Self::Rpc {
                code: i64::from(obj.code()),
                message: obj.message().to_string(),
                data: obj.data().map(|d| d.get().to_string()),
            },
            other => Self::Transport(other.to_string()),
        }
    }
}

/// Errors from establishing a wallet session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// No wallet provider was injected
    #[error("No wallet provider available")]
    Unavailable,

    /// The wallet returned no authorized accounts
    #[error("Wallet returned no authorized accounts")]
    NoAccounts,

    /// Any other wallet failure while connecting
    #[error(transparent)]
    Rpc(#[from] WalletRpcError),
}
