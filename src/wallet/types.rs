use alloy_primitives::{Address, Bytes, B256, U64};
use serde::{Deserialize, Serialize};

/// Native currency descriptor for `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Parameters of `wallet_addEthereumChain` (EIP-3085).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChainParams {
    /// 0x-prefixed hex chain id
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    /// Ordered RPC endpoints; wallets use the first reachable one
    pub rpc_urls: Vec<String>,
    /// Ordered block explorer URLs
    pub block_explorer_urls: Vec<String>,
}

/// Read-only call (`eth_call`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallRequest {
    pub to: Address,
    #[serde(rename = "data")]
    pub input: Bytes,
}

/// Transaction handed to the wallet for signing (`eth_sendTransaction`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    #[serde(rename = "data")]
    pub input: Bytes,
    /// Explicit gas ceiling
    pub gas: U64,
}

/// Mined transaction outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionReceipt {
    pub transaction_hash: B256,
    /// `true` when execution succeeded
    pub success: bool,
    pub block_number: Option<u64>,
}

/// Receipt as returned by `eth_getTransactionReceipt`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RpcReceipt {
    pub transaction_hash: B256,
    pub status: Option<U64>,
    pub block_number: Option<U64>,
}

impl From<RpcReceipt> for TransactionReceipt {
    fn from(receipt: RpcReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            success: receipt.status.is_some_and(|s| s == U64::from(1)),
            block_number: receipt.block_number.map(|n| n.to::<u64>()),
        }
    }
}

/// Parse a 0x-prefixed hex chain id.
pub fn parse_chain_id_hex(hex_id: &str) -> Option<u64> {
    let digits = hex_id
        .strip_prefix("0x")
        .or_else(|| hex_id.strip_prefix("0X"))?;
    u64::from_str_radix(digits, 16).ok()
}

/// Format a chain id as 0x-prefixed lowercase hex.
pub fn chain_id_hex(chain_id: u64) -> String {
    format!("{chain_id:#x}")
}
