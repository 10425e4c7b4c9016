use alloy_consensus::{SignableTransaction, TxEip1559, TxEnvelope};
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{Address, Bytes, TxKind, B256, U128, U256, U64};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use jsonrpsee::core::client::ClientT;
use jsonrpsee::http_client::{HttpClient, HttpClientBuilder};
use jsonrpsee::rpc_params;
use std::collections::HashMap;
use tokio::sync::{watch, RwLock};
use tracing::{debug, info};

use super::errors::{WalletRpcError, UNRECOGNIZED_CHAIN_CODE};
use super::types::{
    parse_chain_id_hex, AddChainParams, CallRequest, RpcReceipt, TransactionReceipt,
    TransactionRequest,
};
use super::WalletProvider;

/// JSON-RPC code for malformed wallet request parameters.
const INVALID_PARAMS_CODE: i64 = -32602;

/// A wallet backed by a local private key and plain node endpoints.
///
/// Emulates the wallet side of EIP-1193: the key is always authorized, the
/// active chain is one of a table of known chains, switching to an unknown
/// chain fails with `4902`, and `wallet_addEthereumChain` registers the
/// chain's first RPC URL and makes it active. Transactions are signed locally
/// as EIP-1559 and broadcast with `eth_sendRawTransaction`.
pub struct LocalKeyWallet {
    signer: PrivateKeySigner,
    endpoints: RwLock<HashMap<u64, HttpClient>>,
    active: watch::Sender<u64>,
}

impl LocalKeyWallet {
    /// Create a wallet whose initial chain is whatever `rpc_url` serves.
    pub async fn connect(signer: PrivateKeySigner, rpc_url: &str) -> Result<Self, WalletRpcError> {
        let client = build_client(rpc_url)?;
        let chain_id = query_chain_id(&client).await?;
        info!(address = %signer.address(), chain_id, "local wallet ready");

        let (active, _) = watch::channel(chain_id);
        Ok(Self {
            signer,
            endpoints: RwLock::new(HashMap::from([(chain_id, client)])),
            active,
        })
    }

    /// Create a wallet from a hex private key (with or without `0x`).
    pub async fn from_hex(private_key_hex: &str, rpc_url: &str) -> Result<Self, WalletRpcError> {
        let signer = private_key_hex
            .parse::<PrivateKeySigner>()
            .map_err(|_| WalletRpcError::Signing("invalid private key".into()))?;
        Self::connect(signer, rpc_url).await
    }

    /// Signing address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    async fn active_client(&self) -> Result<HttpClient, WalletRpcError> {
        let chain_id = *self.active.borrow();
        self.endpoints
            .read()
            .await
            .get(&chain_id)
            .cloned()
            .ok_or_else(|| WalletRpcError::Transport(format!("no endpoint for chain {chain_id}")))
    }

    async fn sign_eip1559(&self, tx: TxEip1559) -> Result<Bytes, WalletRpcError> {
        let signature = self
            .signer
            .sign_hash(&tx.signature_hash())
            .await
            .map_err(|e| WalletRpcError::Signing(e.to_string()))?;
        let envelope = TxEnvelope::from(tx.into_signed(signature));
        Ok(envelope.encoded_2718().into())
    }
}

fn build_client(url: &str) -> Result<HttpClient, WalletRpcError> {
    HttpClientBuilder::default()
        .build(url)
        .map_err(|e| WalletRpcError::Transport(e.to_string()))
}

async fn query_chain_id(client: &HttpClient) -> Result<u64, WalletRpcError> {
    let id: U64 = client.request("eth_chainId", rpc_params![]).await?;
    Ok(id.to::<u64>())
}

#[async_trait]
impl WalletProvider for LocalKeyWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletRpcError> {
        Ok(vec![self.signer.address()])
    }

    async fn chain_id(&self) -> Result<u64, WalletRpcError> {
        Ok(*self.active.borrow())
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), WalletRpcError> {
        let chain_id = parse_chain_id_hex(chain_id_hex)
            .ok_or_else(|| WalletRpcError::rpc(INVALID_PARAMS_CODE, "invalid chain id"))?;
        if !self.endpoints.read().await.contains_key(&chain_id) {
            return Err(WalletRpcError::rpc(
                UNRECOGNIZED_CHAIN_CODE,
                format!("Unrecognized chain ID {chain_id_hex}"),
            ));
        }
        self.active.send_replace(chain_id);
        debug!(chain_id, "switched active chain");
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), WalletRpcError> {
        let chain_id = parse_chain_id_hex(&params.chain_id)
            .ok_or_else(|| WalletRpcError::rpc(INVALID_PARAMS_CODE, "invalid chain id"))?;
        let url = params
            .rpc_urls
            .first()
            .ok_or_else(|| WalletRpcError::rpc(INVALID_PARAMS_CODE, "rpcUrls must not be empty"))?;

        let client = build_client(url)?;
        let served = query_chain_id(&client).await?;
        if served != chain_id {
            return Err(WalletRpcError::rpc(
                INVALID_PARAMS_CODE,
                format!("{url} serves chain {served}, expected {chain_id}"),
            ));
        }

        self.endpoints.write().await.insert(chain_id, client);
        self.active.send_replace(chain_id);
        info!(chain_id, name = %params.chain_name, "added chain");
        Ok(())
    }

    async fn call(&self, request: &CallRequest) -> Result<Bytes, WalletRpcError> {
        let client = self.active_client().await?;
        Ok(client
            .request("eth_call", rpc_params![request, "latest"])
            .await?)
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> Result<B256, WalletRpcError> {
        if request.from != self.signer.address() {
            let message = format!("account {} not authorized", request.from);
            return Err(WalletRpcError::rpc(4100, message));
        }
        let chain_id = *self.active.borrow();
        let client = self.active_client().await?;

        let nonce: U64 = client
            .request("eth_getTransactionCount", rpc_params![request.from, "pending"])
            .await?;
        let gas_price: U128 = client.request("eth_gasPrice", rpc_params![]).await?;
        let priority_fee: U128 = client
            .request("eth_maxPriorityFeePerGas", rpc_params![])
            .await?;

        let priority_fee = priority_fee.to::<u128>();
        let tx = TxEip1559 {
            chain_id,
            nonce: nonce.to::<u64>(),
            gas_limit: request.gas.to::<u64>(),
            max_fee_per_gas: gas_price.to::<u128>().saturating_mul(2).max(priority_fee),
            max_priority_fee_per_gas: priority_fee,
            to: TxKind::Call(request.to),
            value: U256::ZERO,
            input: request.input.clone(),
            ..Default::default()
        };

        let raw = self.sign_eip1559(tx).await?;
        Ok(client
            .request("eth_sendRawTransaction", rpc_params![raw])
            .await?)
    }

    async fn transaction_receipt(
        &self,
        tx_hash: B256,
    ) -> Result<Option<TransactionReceipt>, WalletRpcError> {
        let client = self.active_client().await?;
        let receipt: Option<RpcReceipt> = client
            .request("eth_getTransactionReceipt", rpc_params![tx_hash])
            .await?;
        Ok(receipt.map(Into::into))
    }

    fn chain_changed(&self) -> Option<watch::Receiver<u64>> {
        Some(self.active.subscribe())
    }
}
