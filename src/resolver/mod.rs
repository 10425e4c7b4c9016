//! List Resolver
//!
//! Answers two questions for a session's account:
//! - does it own any list, and has it marked one as primary?
//! - where does the primary list's storage live?
//!
//! Owning a list does not imply a primary list is set. The two are reported
//! separately so callers can tell "create a list" from "pick a primary list".

pub mod errors;

pub use errors::ResolverError;

use alloy_primitives::U256;
use tracing::{debug, info};

use crate::codec::ListStorageLocation;
use crate::config::Deployment;
use crate::contracts::{decode_primary_list, ListContracts};
use crate::wallet::WalletSession;

/// Primary list status of an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryListStatus {
    /// A primary list is designated
    pub has_list: bool,
    /// The account owns at least one list token
    pub has_any_lists: bool,
    /// Primary list token id, present iff `has_list`
    pub token_id: Option<U256>,
}

/// Resolves lists against one registry deployment.
#[derive(Debug, Clone)]
pub struct ListResolver {
    deployment: Deployment,
}

impl ListResolver {
    pub fn new(deployment: Deployment) -> Self {
        Self { deployment }
    }

    fn contracts(&self, session: &WalletSession) -> ListContracts {
        ListContracts::new(session.signer.provider(), self.deployment.clone())
    }

    /// Read list ownership and the primary-list pointer concurrently.
    pub async fn resolve_primary_list(
        &self,
        session: &WalletSession,
    ) -> Result<PrimaryListStatus, ResolverError> {
        let contracts = self.contracts(session);
        let account = session.account;

        let (balance, primary) = tokio::try_join!(
            contracts.list_balance(account),
            contracts.primary_list_value(account),
        )?;

        let token_id = decode_primary_list(&primary);
        let status = PrimaryListStatus {
            has_list: token_id.is_some(),
            has_any_lists: !balance.is_zero(),
            token_id,
        };
        debug!(%account, %balance, primary_len = primary.len(), "primary list lookup");
        info!(
            %account,
            has_list = status.has_list,
            has_any_lists = status.has_any_lists,
            "resolved primary list"
        );
        Ok(status)
    }

    /// Fetch and decode the storage location of `token_id`.
    ///
    /// Invalid locations are returned as-is with `is_valid == false`.
    pub async fn resolve_storage_location(
        &self,
        session: &WalletSession,
        token_id: U256,
    ) -> Result<ListStorageLocation, ResolverError> {
        let descriptor = self.contracts(session).storage_location(token_id).await?;
        let location = ListStorageLocation::decode(&descriptor)?;
        info!(
            %token_id,
            chain_id = %location.chain_id,
            contract = %location.contract_address,
            valid = location.is_valid,
            "resolved storage location"
        );
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CodecError;
    use crate::constants::{HOME_CHAIN_ID, LIST_RECORDS_ADDRESS};
    use crate::contracts::encode_primary_list;
    use crate::wallet::fake::FakeWallet;
    use crate::wallet::SessionProvider;
    use alloy_primitives::Bytes;

    async fn session_for(wallet: &std::sync::Arc<FakeWallet>) -> WalletSession {
        SessionProvider::new(wallet.clone()).connect().await.unwrap()
    }

    fn resolver() -> ListResolver {
        ListResolver::new(Deployment::default())
    }

    // =========================================================================
    // Primary list states
    // =========================================================================

    #[tokio::test]
    async fn test_no_lists_no_primary() {
        let wallet = FakeWallet::new(HOME_CHAIN_ID);
        let session = session_for(&wallet).await;
        let status = resolver().resolve_primary_list(&session).await.unwrap();
        assert_eq!(
            status,
            PrimaryListStatus {
                has_list: false,
                has_any_lists: false,
                token_id: None,
            }
        );
    }

    #[tokio::test]
    async fn test_lists_without_primary() {
        let wallet = FakeWallet::new(HOME_CHAIN_ID);
        wallet.state().list_balance = U256::from(2);
        let session = session_for(&wallet).await;
        let status = resolver().resolve_primary_list(&session).await.unwrap();
        assert!(!status.has_list);
        assert!(status.has_any_lists);
        assert_eq!(status.token_id, None);
    }

    #[tokio::test]
    async fn test_primary_list_set() {
        let wallet = FakeWallet::new(HOME_CHAIN_ID);
        {
            let mut state = wallet.state();
            state.list_balance = U256::from(1);
            state.primary_list = encode_primary_list(U256::from(17)).to_vec().into();
        }
        let session = session_for(&wallet).await;
        let status = resolver().resolve_primary_list(&session).await.unwrap();
        assert!(status.has_list);
        assert_eq!(status.token_id, Some(U256::from(17)));
    }

    #[tokio::test]
    async fn test_zero_primary_value_is_not_a_list() {
        let wallet = FakeWallet::new(HOME_CHAIN_ID);
        {
            let mut state = wallet.state();
            state.list_balance = U256::from(1);
            state.primary_list = Bytes::from_static(&[0x00]);
        }
        let session = session_for(&wallet).await;
        let status = resolver().resolve_primary_list(&session).await.unwrap();
        assert!(!status.has_list);
        assert!(status.has_any_lists);
    }

    #[tokio::test]
    async fn test_both_reads_are_issued() {
        let wallet = FakeWallet::new(HOME_CHAIN_ID);
        let session = session_for(&wallet).await;
        resolver().resolve_primary_list(&session).await.unwrap();
        assert_eq!(wallet.count("eth_call"), 2);
    }

    // =========================================================================
    // Storage location
    // =========================================================================

    #[tokio::test]
    async fn test_storage_location_decoded() {
        let wallet = FakeWallet::new(HOME_CHAIN_ID);
        let descriptor = ListStorageLocation {
            format_version: 1,
            location_type: 1,
            chain_id: U256::from(HOME_CHAIN_ID),
            contract_address: LIST_RECORDS_ADDRESS,
            slot: U256::from(99),
            is_valid: true,
        };
        wallet
            .state()
            .locations
            .insert(U256::from(3), descriptor.encode().into());

        let location = resolver()
            .resolve_storage_location(&session_for(&wallet).await, U256::from(3))
            .await
            .unwrap();
        assert_eq!(location, descriptor);
    }

    #[tokio::test]
    async fn test_missing_storage_location_is_descriptor_error() {
        let wallet = FakeWallet::new(HOME_CHAIN_ID);
        let err = resolver()
            .resolve_storage_location(&session_for(&wallet).await, U256::from(3))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ResolverError::Descriptor(CodecError::DescriptorTooShort { got: 0, .. })
        ));
    }
}
