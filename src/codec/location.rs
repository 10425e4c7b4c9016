use alloy_primitives::{Address, U256};

use super::errors::CodecError;
use crate::constants::HOME_CHAIN_ID;

/// Descriptor layout offsets (bytes).
///
/// ```text
/// [version (1)][type (1)][chain id (32)][contract (20)][slot (32)]
/// ```
pub mod layout {
    /// Format version byte
    pub const VERSION: usize = 0;
    /// Location type byte
    pub const LOCATION_TYPE: usize = 1;
    /// Start of the big-endian chain id
    pub const CHAIN_ID: usize = 2;
    /// Start of the contract address
    pub const CONTRACT: usize = CHAIN_ID + 32;
    /// Start of the big-endian slot
    pub const SLOT: usize = CONTRACT + 20;
    /// Minimum descriptor length
    pub const MIN_LENGTH: usize = SLOT + 32;
}

/// Where a list's records physically live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListStorageLocation {
    /// Descriptor format version
    pub format_version: u8,
    /// Location type
    pub location_type: u8,
    /// Chain holding the records
    pub chain_id: U256,
    /// List Records contract on that chain
    pub contract_address: Address,
    /// Slot inside the List Records contract
    pub slot: U256,
    /// True iff `chain_id` is the home chain. Derived on every decode.
    pub is_valid: bool,
}

impl ListStorageLocation {
    /// Decode a packed storage location descriptor.
    pub fn decode(descriptor: &[u8]) -> Result<Self, CodecError> {
        if descriptor.len() < layout::MIN_LENGTH {
            return Err(CodecError::DescriptorTooShort {
                expected: layout::MIN_LENGTH,
                got: descriptor.len(),
            });
        }

        let chain_id = U256::from_be_slice(&descriptor[layout::CHAIN_ID..layout::CONTRACT]);
        let contract_address = Address::from_slice(&descriptor[layout::CONTRACT..layout::SLOT]);
        let slot = U256::from_be_slice(&descriptor[layout::SLOT..layout::MIN_LENGTH]);

        Ok(Self {
            format_version: descriptor[layout::VERSION],
            location_type: descriptor[layout::LOCATION_TYPE],
            chain_id,
            contract_address,
            slot,
            is_valid: chain_id == U256::from(HOME_CHAIN_ID),
        })
    }

    /// Pack a descriptor. Inverse of [`ListStorageLocation::decode`].
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(layout::MIN_LENGTH);
        out.push(self.format_version);
        out.push(self.location_type);
        out.extend_from_slice(&self.chain_id.to_be_bytes::<32>());
        out.extend_from_slice(self.contract_address.as_slice());
        out.extend_from_slice(&self.slot.to_be_bytes::<32>());
        out
    }
}
