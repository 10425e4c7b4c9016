//! Registry Contract Bindings
//!
//! ABI bindings and typed reads for the three contracts the follow workflow
//! touches:
//!
//! ```text
//!   ListRegistry      balanceOf(owner), getListStorageLocation(tokenId)
//!   AccountMetadata   getValue(owner, "primary-list")
//!   ListRecords       applyListOp(slot, op)
//! ```
//!
//! Reads go through the session's wallet provider (`eth_call`), so the same
//! code path serves remote wallets, local keys and test fakes.

pub mod bindings;
pub mod errors;
pub mod helpers;
pub mod readers;

pub use bindings::{IEFPAccountMetadata, IEFPListRecords, IEFPListRegistry};
pub use errors::ContractError;
pub use helpers::{decode_primary_list, encode_primary_list};
pub use readers::{apply_list_op_calldata, ListContracts};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Deployment;
    use crate::wallet::fake::FakeWallet;
    use crate::wallet::{CallRequest, WalletProvider, WalletRpcError};
    use crate::wallet::{AddChainParams, TransactionReceipt, TransactionRequest};
    use alloy_primitives::{Address, Bytes, B256, U256};
    use alloy_sol_types::SolCall;

    // =========================================================================
    // Primary list value decoding
    // =========================================================================

    #[test]
    fn test_decode_primary_list_empty_is_none() {
        assert_eq!(decode_primary_list(&[]), None);
    }

    #[test]
    fn test_decode_primary_list_zero_word_is_none() {
        assert_eq!(decode_primary_list(&[0u8; 32]), None);
        assert_eq!(decode_primary_list(&[0u8]), None);
    }

    #[test]
    fn test_decode_primary_list_word() {
        let word = encode_primary_list(U256::from(42));
        assert_eq!(decode_primary_list(&word), Some(U256::from(42)));
    }

    #[test]
    fn test_decode_primary_list_short_value() {
        assert_eq!(decode_primary_list(&[0x01, 0x00]), Some(U256::from(256)));
    }

    #[test]
    fn test_decode_primary_list_reads_first_word_only() {
        let mut value = encode_primary_list(U256::from(7)).to_vec();
        value.extend_from_slice(&[0xff; 32]);
        assert_eq!(decode_primary_list(&value), Some(U256::from(7)));
    }

    // =========================================================================
    // Selectors and calldata
    // =========================================================================

    #[test]
    fn test_selectors_match_signatures() {
        use alloy_primitives::keccak256;
        let sel = |sig: &str| -> [u8; 4] { keccak256(sig.as_bytes())[..4].try_into().unwrap() };

        assert_eq!(IEFPListRegistry::balanceOfCall::SELECTOR, sel("balanceOf(address)"));
        assert_eq!(
            IEFPListRegistry::getListStorageLocationCall::SELECTOR,
            sel("getListStorageLocation(uint256)")
        );
        assert_eq!(IEFPAccountMetadata::getValueCall::SELECTOR, sel("getValue(address,string)"));
        assert_eq!(IEFPListRecords::applyListOpCall::SELECTOR, sel("applyListOp(uint256,bytes)"));
    }

    #[test]
    fn test_apply_list_op_calldata_roundtrip() {
        let op = Bytes::from_static(&[1, 1, 1, 1, 0xaa]);
        let calldata = apply_list_op_calldata(U256::from(9), op.clone());
        let decoded = IEFPListRecords::applyListOpCall::abi_decode(&calldata).unwrap();
        assert_eq!(decoded.slot, U256::from(9));
        assert_eq!(decoded.op, op);
    }

    // =========================================================================
    // Reads through a provider
    // =========================================================================

    #[tokio::test]
    async fn test_reads_through_fake_wallet() {
        let wallet = FakeWallet::new(8453);
        let owner = wallet.state().accounts[0];
        {
            let mut state = wallet.state();
            state.list_balance = U256::from(2);
            state.primary_list = encode_primary_list(U256::from(5)).to_vec().into();
            state
                .locations
                .insert(U256::from(5), Bytes::from_static(&[0xde, 0xad]));
        }
        let contracts = ListContracts::new(wallet.clone(), Deployment::default());

        assert_eq!(contracts.list_balance(owner).await.unwrap(), U256::from(2));
        assert_eq!(
            decode_primary_list(&contracts.primary_list_value(owner).await.unwrap()),
            Some(U256::from(5))
        );
        assert_eq!(
            contracts.storage_location(U256::from(5)).await.unwrap(),
            Bytes::from_static(&[0xde, 0xad])
        );
    }

    #[tokio::test]
    async fn test_read_failure_is_rpc_error() {
        let wallet = FakeWallet::new(8453);
        wallet.state().call_error = Some(WalletRpcError::Transport("offline".into()));
        let contracts = ListContracts::new(wallet.clone(), Deployment::default());

        let owner = wallet.state().accounts[0];
        let err = contracts.list_balance(owner).await.unwrap_err();
        assert!(matches!(err, ContractError::Rpc(WalletRpcError::Transport(_))));
    }

    #[tokio::test]
    async fn test_malformed_return_data_is_abi_error() {
        struct Garbage;

        #[async_trait::async_trait]
        impl WalletProvider for Garbage {
            async fn request_accounts(&self) -> Result<Vec<Address>, WalletRpcError> {
                Ok(vec![])
            }
            async fn chain_id(&self) -> Result<u64, WalletRpcError> {
                Ok(8453)
            }
            async fn switch_chain(&self, _: &str) -> Result<(), WalletRpcError> {
                Ok(())
            }
            async fn add_chain(&self, _: &AddChainParams) -> Result<(), WalletRpcError> {
                Ok(())
            }
            async fn call(&self, _: &CallRequest) -> Result<Bytes, WalletRpcError> {
                Ok(Bytes::from_static(&[0x01, 0x02]))
            }
            async fn send_transaction(
                &self,
                _: &TransactionRequest,
            ) -> Result<B256, WalletRpcError> {
                Err(WalletRpcError::rpc(-32601, "unsupported"))
            }
            async fn transaction_receipt(
                &self,
                _: B256,
            ) -> Result<Option<TransactionReceipt>, WalletRpcError> {
                Ok(None)
            }
        }

        let contracts = ListContracts::new(std::sync::Arc::new(Garbage), Deployment::default());
        let err = contracts.list_balance(Address::ZERO).await.unwrap_err();
        assert!(matches!(err, ContractError::Abi { method: "balanceOf", .. }));
    }
}
