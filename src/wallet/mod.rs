//! Wallet Session Provider
//!
//! The user's wallet is an injected capability ([`WalletProvider`]) rather
//! than ambient global state, so it can be a remote EIP-1193 wallet, a local
//! key, or an in-memory fake in tests.
//!
//! A [`WalletSession`] bundles the authorized account, the active chain id
//! and a [`SigningHandle`]. Sessions are snapshots: after any account or chain
//! change the caller must [`SessionProvider::connect`] again.

pub mod errors;
pub mod json_rpc;
pub mod local;
pub mod types;

#[cfg(test)]
pub(crate) mod fake;

pub use errors::{ProviderError, WalletRpcError};
pub use json_rpc::JsonRpcWallet;
pub use local::LocalKeyWallet;
pub use types::{
    chain_id_hex, parse_chain_id_hex, AddChainParams, CallRequest, NativeCurrency,
    TransactionReceipt, TransactionRequest,
};

use alloy_primitives::{Address, Bytes, B256, U64};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::{debug, info};

/// The wallet RPC surface the follow workflow consumes.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// `eth_requestAccounts`
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletRpcError>;

    /// `eth_chainId`
    async fn chain_id(&self) -> Result<u64, WalletRpcError>;

    /// `wallet_switchEthereumChain` with a 0x-hex chain id.
    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), WalletRpcError>;

    /// `wallet_addEthereumChain`
    async fn add_chain(&self, params: &AddChainParams) -> Result<(), WalletRpcError>;

    /// `eth_call` against the latest block.
    async fn call(&self, request: &CallRequest) -> Result<Bytes, WalletRpcError>;

    /// `eth_sendTransaction`. Returns the transaction hash once the wallet accepts it.
    async fn send_transaction(&self, request: &TransactionRequest) -> Result<B256, WalletRpcError>;

    /// `eth_getTransactionReceipt`. `None` while the transaction is pending.
    async fn transaction_receipt(
        &self,
        tx_hash: B256,
    ) -> Result<Option<TransactionReceipt>, WalletRpcError>;

    /// Chain-changed notifications, if the wallet can push them.
    fn chain_changed(&self) -> Option<watch::Receiver<u64>> {
        None
    }
}

/// Capability to submit transactions as the session account.
#[derive(Clone)]
pub struct SigningHandle {
    provider: Arc<dyn WalletProvider>,
    from: Address,
}

impl std::fmt::Debug for SigningHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningHandle")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

impl SigningHandle {
    /// Bind a provider to the account that will sign.
    pub fn new(provider: Arc<dyn WalletProvider>, from: Address) -> Self {
        Self { provider, from }
    }

    /// The signing account.
    pub fn from(&self) -> Address {
        self.from
    }

    /// Underlying provider, for reads issued on behalf of this session.
    pub fn provider(&self) -> Arc<dyn WalletProvider> {
        Arc::clone(&self.provider)
    }

    /// Submit a contract call with an explicit gas ceiling.
    pub async fn send_transaction(
        &self,
        to: Address,
        input: Bytes,
        gas_limit: u64,
    ) -> Result<B256, WalletRpcError> {
        let request = TransactionRequest {
            from: self.from,
            to,
            input,
            gas: U64::from(gas_limit),
        };
        debug!(from = %self.from, %to, gas_limit, "submitting transaction");
        self.provider.send_transaction(&request).await
    }

    /// Poll until the transaction is mined.
    pub async fn wait_for_receipt(
        &self,
        tx_hash: B256,
        poll_interval: Duration,
    ) -> Result<TransactionReceipt, WalletRpcError> {
        loop {
            if let Some(receipt) = self.provider.transaction_receipt(tx_hash).await? {
                return Ok(receipt);
            }
            debug!(%tx_hash, "transaction pending");
            tokio::time::sleep(poll_interval).await;
        }
    }
}

/// Account, chain and signer captured at connection time.
#[derive(Debug, Clone)]
pub struct WalletSession {
    pub chain_id: u64,
    pub account: Address,
    pub signer: SigningHandle,
}

/// Obtains sessions from an injected wallet provider.
#[derive(Clone, Default)]
pub struct SessionProvider {
    wallet: Option<Arc<dyn WalletProvider>>,
}

impl SessionProvider {
    /// Wrap an injected wallet.
    pub fn new(wallet: Arc<dyn WalletProvider>) -> Self {
        Self {
            wallet: Some(wallet),
        }
    }

    /// A provider for an environment with no wallet.
    pub fn unavailable() -> Self {
        Self { wallet: None }
    }

    /// Request account access and snapshot the active chain.
    ///
    /// No retries: a caller that needs fresh state after a chain change calls again.
    pub async fn connect(&self) -> Result<WalletSession, ProviderError> {
        let wallet = self.wallet.as_ref().ok_or(ProviderError::Unavailable)?;

        let accounts = match wallet.request_accounts().await {
            Ok(accounts) => accounts,
            Err(err) if err.is_user_rejection() => return Err(ProviderError::NoAccounts),
            Err(err) => return Err(err.into()),
        };
        let account = *accounts.first().ok_or(ProviderError::NoAccounts)?;
        let chain_id = wallet.chain_id().await?;

        info!(%account, chain_id, "wallet connected");
        Ok(WalletSession {
            chain_id,
            account,
            signer: SigningHandle::new(Arc::clone(wallet), account),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeWallet;
    use super::*;
    use alloy_primitives::address;

    #[tokio::test]
    async fn test_connect_without_wallet_is_unavailable() {
        let err = SessionProvider::unavailable().connect().await.unwrap_err();
        assert_eq!(err, ProviderError::Unavailable);
    }

    #[tokio::test]
    async fn test_connect_with_no_accounts() {
        let wallet = FakeWallet::new(8453);
        wallet.state().accounts.clear();
        let err = SessionProvider::new(wallet).connect().await.unwrap_err();
        assert_eq!(err, ProviderError::NoAccounts);
    }

    #[tokio::test]
    async fn test_connect_rejected_authorization_is_no_accounts() {
        let wallet = FakeWallet::new(8453);
        wallet.state().accounts_error = Some(WalletRpcError::rpc(4001, "User rejected"));
        let err = SessionProvider::new(wallet).connect().await.unwrap_err();
        assert_eq!(err, ProviderError::NoAccounts);
    }

    #[tokio::test]
    async fn test_connect_snapshots_account_and_chain() {
        let wallet = FakeWallet::new(10);
        let expected = wallet.state().accounts[0];
        let session = SessionProvider::new(wallet).connect().await.unwrap();

        assert_eq!(session.chain_id, 10);
        assert_eq!(session.account, expected);
        assert_eq!(session.signer.from(), expected);
    }

    #[tokio::test]
    async fn test_signing_handle_sends_explicit_gas() {
        let wallet = FakeWallet::new(8453);
        let session = SessionProvider::new(wallet.clone()).connect().await.unwrap();
        let to = address!("0x3333333333333333333333333333333333333333");

        let signer = &session.signer;
        let hash = signer
            .send_transaction(to, Bytes::from_static(&[1, 2]), 123_456)
            .await
            .unwrap();
        let receipt = signer
            .wait_for_receipt(hash, Duration::from_millis(1))
            .await
            .unwrap();

        assert!(receipt.success);
        let state = wallet.state();
        assert_eq!(state.submitted.len(), 1);
        assert_eq!(state.submitted[0].gas, U64::from(123_456));
        assert_eq!(state.submitted[0].to, to);
    }

    #[test]
    fn test_chain_id_hex_helpers() {
        assert_eq!(chain_id_hex(8453), "0x2105");
        assert_eq!(parse_chain_id_hex("0x2105"), Some(8453));
        assert_eq!(parse_chain_id_hex("2105"), None);
        assert_eq!(parse_chain_id_hex("0xzz"), None);
    }

    #[test]
    fn test_error_classification() {
        assert!(WalletRpcError::rpc(4001, "denied").is_user_rejection());
        assert!(WalletRpcError::rpc(4902, "unknown chain").is_unrecognized_chain());
        assert!(WalletRpcError::rpc(3, "execution reverted").is_revert());
        assert!(WalletRpcError::rpc(-32000, "transaction reverted: list locked").is_revert());
        assert!(!WalletRpcError::Transport("connection refused".into()).is_revert());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(WalletRpcError::rpc(4001, "denied").to_string(), "Wallet error 4001: denied");
        assert_eq!(ProviderError::Unavailable.to_string(), "No wallet provider available");
    }
}
