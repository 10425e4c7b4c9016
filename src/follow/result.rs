use alloy_primitives::B256;
use serde::Serialize;

use super::errors::{FollowError, FollowErrorKind};

/// Terminal value of one follow workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum FollowResult {
    /// The list operation was mined successfully
    #[serde(rename_all = "camelCase")]
    Success { tx_hash: B256 },
    /// The workflow stopped with a classified error
    #[serde(rename_all = "camelCase")]
    Failure {
        error_kind: FollowErrorKind,
        message: String,
    },
}

impl FollowResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn tx_hash(&self) -> Option<B256> {
        match self {
            Self::Success { tx_hash } => Some(*tx_hash),
            Self::Failure { .. } => None,
        }
    }

    pub fn error_kind(&self) -> Option<FollowErrorKind> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { error_kind, .. } => Some(*error_kind),
        }
    }
}

impl From<FollowError> for FollowResult {
    fn from(err: FollowError) -> Self {
        Self::Failure {
            error_kind: err.kind,
            message: err.message,
        }
    }
}
