use thiserror::Error;

use crate::codec::CodecError;
use crate::contracts::ContractError;

/// Errors from resolving a list and its storage.
#[derive(Debug, Error)]
pub enum ResolverError {
    /// Reading the registry failed
    #[error(transparent)]
    Contract(#[from] ContractError),

    /// The storage location descriptor could not be decoded
    #[error("Invalid storage location descriptor: {0}")]
    Descriptor(#[from] CodecError),
}
