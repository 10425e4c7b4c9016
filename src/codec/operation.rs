use alloy_primitives::{Address, Bytes};

use super::errors::CodecError;
use crate::constants::ADDRESS_LENGTH;

/// List operation format version
pub const OP_VERSION: u8 = 0x01;
/// List record format version
pub const RECORD_VERSION: u8 = 0x01;
/// Record type for a raw 20-byte address
pub const RECORD_TYPE_ADDRESS: u8 = 0x01;
/// Header length: op version, opcode, record version, record type
pub const OP_HEADER_LENGTH: usize = 4;
/// Encoded length of an address-record operation
pub const OP_LENGTH: usize = OP_HEADER_LENGTH + ADDRESS_LENGTH;

/// Opcodes for mutations on a list's records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ListOpcode {
    /// Add a record to the list (follow)
    Add = 0x01,
    /// Remove a record from the list (unfollow)
    Remove = 0x02,
}

impl ListOpcode {
    /// Parse an opcode byte.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Self::Add),
            0x02 => Some(Self::Remove),
            _ => None,
        }
    }
}

/// A list operation carrying an address record.
///
/// Wire layout (24 bytes):
/// ```text
/// [op version][opcode][record version][record type][address (20 bytes)]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOperation {
    /// Operation to apply
    pub opcode: ListOpcode,
    /// Record payload
    pub address: Address,
}

impl ListOperation {
    /// Build an "add address record" operation.
    pub fn add(address: Address) -> Self {
        Self {
            opcode: ListOpcode::Add,
            address,
        }
    }

    /// Build a "remove address record" operation.
    pub fn remove(address: Address) -> Self {
        Self {
            opcode: ListOpcode::Remove,
            address,
        }
    }

    /// Serialize to the 24-byte wire layout.
    pub fn encode(&self) -> [u8; OP_LENGTH] {
        let mut out = [0u8; OP_LENGTH];
        out[0] = OP_VERSION;
        out[1] = self.opcode as u8;
        out[2] = RECORD_VERSION;
        out[3] = RECORD_TYPE_ADDRESS;
        out[OP_HEADER_LENGTH..].copy_from_slice(self.address.as_slice());
        out
    }

    /// Serialize into calldata-ready bytes.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.encode())
    }

    /// Parse an encoded operation. Only address records are understood.
    pub fn decode(data: &[u8]) -> Result<Self, CodecError> {
        if data.len() != OP_LENGTH {
            return Err(CodecError::OperationLength {
                expected: OP_LENGTH,
                got: data.len(),
            });
        }
        if data[0] != OP_VERSION {
            return Err(CodecError::UnsupportedOperation {
                field: "version",
                value: data[0],
            });
        }
        let opcode = ListOpcode::from_byte(data[1]).ok_or(CodecError::UnsupportedOperation {
            field: "opcode",
            value: data[1],
        })?;
        if data[2] != RECORD_VERSION {
            return Err(CodecError::UnsupportedOperation {
                field: "record version",
                value: data[2],
            });
        }
        if data[3] != RECORD_TYPE_ADDRESS {
            return Err(CodecError::UnsupportedOperation {
                field: "record type",
                value: data[3],
            });
        }

        Ok(Self {
            opcode,
            address: Address::from_slice(&data[OP_HEADER_LENGTH..]),
        })
    }
}

/// Left-pad raw address bytes with zeros to 20 bytes.
///
/// Inputs longer than 20 bytes are rejected rather than truncated.
pub fn pad_address(raw: &[u8]) -> Result<Address, CodecError> {
    if raw.len() > ADDRESS_LENGTH {
        return Err(CodecError::AddressTooLong {
            max: ADDRESS_LENGTH,
            got: raw.len(),
        });
    }
    let mut bytes = [0u8; ADDRESS_LENGTH];
    bytes[ADDRESS_LENGTH - raw.len()..].copy_from_slice(raw);
    Ok(Address::from(bytes))
}

/// Encode an "add address record" operation from raw address bytes.
pub fn encode_add_record(raw: &[u8]) -> Result<[u8; OP_LENGTH], CodecError> {
    Ok(ListOperation::add(pad_address(raw)?).encode())
}
