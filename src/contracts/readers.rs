use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::{SolCall, SolValue};
use std::sync::Arc;
use tracing::debug;

use super::bindings::{IEFPAccountMetadata, IEFPListRecords, IEFPListRegistry};
use super::errors::ContractError;
use crate::config::Deployment;
use crate::constants::PRIMARY_LIST_KEY;
use crate::wallet::{CallRequest, WalletProvider};

/// Typed reads against the registry contracts, issued through a wallet provider.
pub struct ListContracts {
    provider: Arc<dyn WalletProvider>,
    deployment: Deployment,
}

impl ListContracts {
    /// Create a reader for one deployment.
    pub fn new(provider: Arc<dyn WalletProvider>, deployment: Deployment) -> Self {
        Self {
            provider,
            deployment,
        }
    }

    /// `ListRegistry.balanceOf(owner)`
    pub async fn list_balance(&self, owner: Address) -> Result<U256, ContractError> {
        let input = IEFPListRegistry::balanceOfCall { owner }.abi_encode();
        let ret = self.call(self.deployment.list_registry, input).await?;
        U256::abi_decode(&ret).map_err(|source| ContractError::Abi {
            method: "balanceOf",
            source,
        })
    }

    /// `AccountMetadata.getValue(owner, "primary-list")`
    pub async fn primary_list_value(&self, owner: Address) -> Result<Bytes, ContractError> {
        let input = IEFPAccountMetadata::getValueCall {
            addr: owner,
            key: PRIMARY_LIST_KEY.to_string(),
        }
        .abi_encode();
        let ret = self.call(self.deployment.account_metadata, input).await?;
        Bytes::abi_decode(&ret).map_err(|source| ContractError::Abi {
            method: "getValue",
            source,
        })
    }

    /// `ListRegistry.getListStorageLocation(tokenId)`
    pub async fn storage_location(&self, token_id: U256) -> Result<Bytes, ContractError> {
        let input = IEFPListRegistry::getListStorageLocationCall { tokenId: token_id }.abi_encode();
        let ret = self.call(self.deployment.list_registry, input).await?;
        Bytes::abi_decode(&ret).map_err(|source| ContractError::Abi {
            method: "getListStorageLocation",
            source,
        })
    }

    async fn call(&self, to: Address, input: Vec<u8>) -> Result<Bytes, ContractError> {
        debug!(%to, selector = %hex::encode(&input[..4]), "eth_call");
        let request = CallRequest {
            to,
            input: input.into(),
        };
        Ok(self.provider.call(&request).await?)
    }
}

/// Calldata for `ListRecords.applyListOp(slot, op)`.
pub fn apply_list_op_calldata(slot: U256, op: Bytes) -> Bytes {
    IEFPListRecords::applyListOpCall { slot, op }
        .abi_encode()
        .into()
}
