use thiserror::Error;

/// Errors produced by the list wire codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Address input is longer than 20 bytes. Never truncated.
    #[error("Address too long: expected at most {max} bytes, got {got}")]
    AddressTooLong {
        /// Maximum accepted length
        max: usize,
        /// Actual length
        got: usize,
    },

    /// Storage location descriptor does not cover every field
    #[error("Storage location descriptor too short: expected at least {expected} bytes, got {got}")]
    DescriptorTooShort {
        /// Minimum descriptor length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// Encoded list operation has the wrong length
    #[error("List operation must be {expected} bytes, got {got}")]
    OperationLength {
        /// Exact operation length
        expected: usize,
        /// Actual length
        got: usize,
    },

    /// A header byte of an encoded operation is not one we understand
    #[error("Unsupported list operation {field}: {value:#04x}")]
    UnsupportedOperation {
        /// Name of the offending header field
        field: &'static str,
        /// Byte found
        value: u8,
    },
}
