use alloy_primitives::B256;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use crate::codec::CodecError;
use crate::network::NetworkError;
use crate::resolver::ResolverError;
use crate::wallet::{ProviderError, WalletRpcError};

/// Every way a follow workflow can terminate unsuccessfully.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FollowErrorKind {
    ProviderUnavailable,
    NoAccounts,
    NetworkSwitchRejected,
    NetworkAddFailed,
    NoPrimaryList,
    AmbiguousPrimaryList,
    InvalidStorageLocation,
    InvalidInput,
    TransactionRejectedByUser,
    TransactionReverted,
    UnknownError,
}

impl FollowErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProviderUnavailable => "ProviderUnavailable",
            Self::NoAccounts => "NoAccounts",
            Self::NetworkSwitchRejected => "NetworkSwitchRejected",
            Self::NetworkAddFailed => "NetworkAddFailed",
            Self::NoPrimaryList => "NoPrimaryList",
            Self::AmbiguousPrimaryList => "AmbiguousPrimaryList",
            Self::InvalidStorageLocation => "InvalidStorageLocation",
            Self::InvalidInput => "InvalidInput",
            Self::TransactionRejectedByUser => "TransactionRejectedByUser",
            Self::TransactionReverted => "TransactionReverted",
            Self::UnknownError => "UnknownError",
        }
    }
}

impl fmt::Display for FollowErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified terminal failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FollowError {
    pub kind: FollowErrorKind,
    pub message: String,
}

impl FollowError {
    pub fn new(kind: FollowErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Cancellation observed at a suspension point.
    pub fn cancelled() -> Self {
        Self::new(FollowErrorKind::UnknownError, "cancelled")
    }

    /// Cancellation observed after the wallet accepted the transaction.
    pub fn cancelled_after_submission(tx_hash: B256) -> Self {
        Self::new(
            FollowErrorKind::UnknownError,
            format!("cancelled after submitting {tx_hash}; the transaction may still be mined"),
        )
    }

    /// Classify a failure to submit or confirm the list transaction.
    pub fn from_submission(err: WalletRpcError) -> Self {
        if err.is_user_rejection() {
            Self::new(FollowErrorKind::TransactionRejectedByUser, err.message())
        } else if err.is_revert() {
            let message = match &err {
                WalletRpcError::Rpc {
                    message,
                    data: Some(data),
                    ..
                } => {
                    format!("{message} (data: {data})")
                }
                other => other.message(),
            };
            Self::new(FollowErrorKind::TransactionReverted, message)
        } else {
            Self::new(FollowErrorKind::UnknownError, err.message())
        }
    }
}

impl From<ProviderError> for FollowError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Unavailable => Self::new(
                FollowErrorKind::ProviderUnavailable,
                "no wallet provider found; install a wallet to continue",
            ),
            ProviderError::NoAccounts => Self::new(
                FollowErrorKind::NoAccounts,
                "wallet has no authorized account; reconnect and approve access",
            ),
            ProviderError::Rpc(err) => Self::new(FollowErrorKind::UnknownError, err.message()),
        }
    }
}

impl From<NetworkError> for FollowError {
    fn from(err: NetworkError) -> Self {
        match err {
            NetworkError::SwitchRejected { .. } | NetworkError::NotSwitched { .. } => {
                Self::new(FollowErrorKind::NetworkSwitchRejected, err.to_string())
            }
            NetworkError::AddFailed { .. } => {
                Self::new(FollowErrorKind::NetworkAddFailed, err.to_string())
            }
            NetworkError::Reconnect(err) => err.into(),
        }
    }
}

impl From<ResolverError> for FollowError {
    fn from(err: ResolverError) -> Self {
        match err {
            ResolverError::Descriptor(_) => {
                Self::new(FollowErrorKind::InvalidStorageLocation, err.to_string())
            }
            ResolverError::Contract(_) => Self::new(FollowErrorKind::UnknownError, err.to_string()),
        }
    }
}

impl From<CodecError> for FollowError {
    fn from(err: CodecError) -> Self {
        Self::new(FollowErrorKind::InvalidInput, err.to_string())
    }
}
