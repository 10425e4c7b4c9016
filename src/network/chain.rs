use crate::constants::{
    HOME_CHAIN_EXPLORER_URL, HOME_CHAIN_ID, HOME_CHAIN_NAME, HOME_CHAIN_RPC_URL,
};
use crate::wallet::{chain_id_hex, AddChainParams, NativeCurrency};

/// Everything a wallet needs to know to switch to, or add, the home chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeChain {
    pub chain_id: u64,
    pub name: String,
    pub currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub explorer_urls: Vec<String>,
}

impl Default for HomeChain {
    fn default() -> Self {
        Self {
            chain_id: HOME_CHAIN_ID,
            name: HOME_CHAIN_NAME.to_string(),
            currency: NativeCurrency {
                name: "Ether".into(),
                symbol: "ETH".into(),
                decimals: 18,
            },
            rpc_urls: vec![HOME_CHAIN_RPC_URL.to_string()],
            explorer_urls: vec![HOME_CHAIN_EXPLORER_URL.to_string()],
        }
    }
}

impl HomeChain {
    /// 0x-hex chain id for wallet requests.
    pub fn chain_id_hex(&self) -> String {
        chain_id_hex(self.chain_id)
    }

    /// `wallet_addEthereumChain` parameters.
    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: self.chain_id_hex(),
            chain_name: self.name.clone(),
            native_currency: self.currency.clone(),
            rpc_urls: self.rpc_urls.clone(),
            block_explorer_urls: self.explorer_urls.clone(),
        }
    }

    /// Explorer link for a transaction, if an explorer is configured.
    pub fn tx_url(&self, tx_hash: &str) -> Option<String> {
        self.explorer_urls
            .first()
            .map(|base| format!("{}/tx/{tx_hash}", base.trim_end_matches('/')))
    }
}
