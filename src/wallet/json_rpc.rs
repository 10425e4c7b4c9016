use alloy_primitives::{Address, Bytes, B256, U64};
use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use serde_json::json;
use tracing::debug;

use super::errors::WalletRpcError;
use super::types::{
    AddChainParams, CallRequest, RpcReceipt, TransactionReceipt, TransactionRequest,
};
use super::WalletProvider;

/// An external EIP-1193 wallet reached over HTTP JSON-RPC.
///
/// Every method is forwarded verbatim, so account access, chain switching and
/// signing prompts happen inside the wallet. HTTP has no push channel, so
/// chain-changed notifications are not available.
pub struct JsonRpcWallet {
    client: HttpClient,
}

impl JsonRpcWallet {
    /// Connect to a wallet endpoint such as `http://127.0.0.1:1248`.
    pub fn new(url: &str) -> Result<Self, WalletRpcError> {
        let client = HttpClientBuilder::default()
            .build(url)
            .map_err(|e| WalletRpcError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WalletProvider for JsonRpcWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletRpcError> {
        Ok(self
            .client
            .request("eth_requestAccounts", rpc_params![])
            .await?)
    }

    async fn chain_id(&self) -> Result<u64, WalletRpcError> {
        let id: U64 = self.client.request("eth_chainId", rpc_params![]).await?;
        Ok(id.to::<u64>())
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), WalletRpcError> {
        debug!(chain_id = chain_id_hex, "wallet_switchEthereumChain");
        let _: serde_json::Value = self
            .client
            .request("wallet_switchEthereumChain", rpc_params![json!({ "chainId": chain_id_hex })])
            .await?;
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), WalletRpcError> {
        debug!(chain_id = %params.chain_id, name = %params.chain_name, "wallet_addEthereumChain");
        let _: serde_json::Value = self
            .client
            .request("wallet_addEthereumChain", rpc_params![params])
            .await?;
        Ok(())
    }

    async fn call(&self, request: &CallRequest) -> Result<Bytes, WalletRpcError> {
        Ok(self
            .client
            .request("eth_call", rpc_params![request, "latest"])
            .await?)
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> Result<B256, WalletRpcError> {
        Ok(self
            .client
            .request("eth_sendTransaction", rpc_params![request])
            .await?)
    }

    async fn transaction_receipt(
        &self,
        tx_hash: B256,
    ) -> Result<Option<TransactionReceipt>, WalletRpcError> {
        let receipt: Option<RpcReceipt> = self
            .client
            .request("eth_getTransactionReceipt", rpc_params![tx_hash])
            .await?;
        Ok(receipt.map(Into::into))
    }
}
