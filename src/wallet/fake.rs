//! In-memory wallet for tests.
//!
//! Answers `eth_call` by decoding the registry call structs, emulates chain
//! switching with EIP-3326 semantics and records every submitted transaction.

use alloy_primitives::{address, keccak256, Address, Bytes, B256, U256};
use alloy_sol_types::{SolCall, SolValue};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use tokio::sync::watch;

use super::errors::{WalletRpcError, UNRECOGNIZED_CHAIN_CODE};
use super::types::{
    parse_chain_id_hex, AddChainParams, CallRequest, TransactionReceipt, TransactionRequest,
};
use super::WalletProvider;
use crate::contracts::{IEFPAccountMetadata, IEFPListRegistry};

/// Default account exposed by the fake.
pub const FAKE_ACCOUNT: Address = address!("0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

pub struct FakeState {
    pub accounts: Vec<Address>,
    pub accounts_error: Option<WalletRpcError>,
    pub chain_id: u64,
    pub known_chains: Vec<u64>,
    pub switch_error: Option<WalletRpcError>,
    pub add_error: Option<WalletRpcError>,
    pub call_error: Option<WalletRpcError>,
    pub list_balance: U256,
    pub primary_list: Bytes,
    pub locations: HashMap<U256, Bytes>,
    pub send_error: Option<WalletRpcError>,
    /// Time the wallet takes to return the hash after accepting a transaction
    pub send_delay: Option<Duration>,
    pub revert_on_mine: bool,
    /// Submitted transactions stay pending forever
    pub never_mine: bool,
    pub submitted: Vec<TransactionRequest>,
    /// Method names in call order
    pub rpc_log: Vec<&'static str>,
}

pub struct FakeWallet {
    state: Mutex<FakeState>,
    chain_events: Option<watch::Sender<u64>>,
}

impl FakeWallet {
    /// A wallet on `chain_id` with one account and no lists.
    pub fn new(chain_id: u64) -> Arc<Self> {
        Arc::new(Self::build(chain_id, None))
    }

    /// Like [`FakeWallet::new`] but publishes chain-changed notifications.
    pub fn with_chain_events(chain_id: u64) -> Arc<Self> {
        let (tx, _rx) = watch::channel(chain_id);
        Arc::new(Self::build(chain_id, Some(tx)))
    }

    fn build(chain_id: u64, chain_events: Option<watch::Sender<u64>>) -> Self {
        Self {
            state: Mutex::new(FakeState {
                accounts: vec![FAKE_ACCOUNT],
                accounts_error: None,
                chain_id,
                known_chains: vec![chain_id],
                switch_error: None,
                add_error: None,
                call_error: None,
                list_balance: U256::ZERO,
                primary_list: Bytes::new(),
                locations: HashMap::new(),
                send_error: None,
                send_delay: None,
                revert_on_mine: false,
                never_mine: false,
                submitted: Vec::new(),
                rpc_log: Vec::new(),
            }),
            chain_events,
        }
    }

    pub fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap()
    }

    /// Number of times `method` was requested.
    pub fn count(&self, method: &str) -> usize {
        self.state()
            .rpc_log
            .iter()
            .filter(|m| **m == method)
            .count()
    }

    fn set_chain(&self, state: &mut FakeState, chain_id: u64) {
        state.chain_id = chain_id;
        if let Some(tx) = &self.chain_events {
            tx.send_replace(chain_id);
        }
    }

    /// Hash the fake assigns to the `index`-th submitted transaction.
    pub fn tx_hash(index: usize) -> B256 {
        keccak256((index as u64).to_be_bytes())
    }
}

#[async_trait]
impl WalletProvider for FakeWallet {
    async fn request_accounts(&self) -> Result<Vec<Address>, WalletRpcError> {
        let mut state = self.state();
        state.rpc_log.push("eth_requestAccounts");
        match state.accounts_error.clone() {
            Some(err) => Err(err),
            None => Ok(state.accounts.clone()),
        }
    }

    async fn chain_id(&self) -> Result<u64, WalletRpcError> {
        let mut state = self.state();
        state.rpc_log.push("eth_chainId");
        Ok(state.chain_id)
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> Result<(), WalletRpcError> {
        let mut state = self.state();
        state.rpc_log.push("wallet_switchEthereumChain");
        if let Some(err) = state.switch_error.clone() {
            return Err(err);
        }
        let chain_id = parse_chain_id_hex(chain_id_hex)
            .ok_or_else(|| WalletRpcError::rpc(-32602, "invalid chain id"))?;
        if !state.known_chains.contains(&chain_id) {
            return Err(WalletRpcError::rpc(UNRECOGNIZED_CHAIN_CODE, "Unrecognized chain ID"));
        }
        self.set_chain(&mut state, chain_id);
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> Result<(), WalletRpcError> {
        let mut state = self.state();
        state.rpc_log.push("wallet_addEthereumChain");
        if let Some(err) = state.add_error.clone() {
            return Err(err);
        }
        let chain_id = parse_chain_id_hex(&params.chain_id)
            .ok_or_else(|| WalletRpcError::rpc(-32602, "invalid chain id"))?;
        state.known_chains.push(chain_id);
        self.set_chain(&mut state, chain_id);
        Ok(())
    }

    async fn call(&self, request: &CallRequest) -> Result<Bytes, WalletRpcError> {
        let mut state = self.state();
        state.rpc_log.push("eth_call");
        if let Some(err) = state.call_error.clone() {
            return Err(err);
        }
        let input = &request.input;
        let selector = input.get(..4).unwrap_or_default();
        let bad_input = |e: alloy_sol_types::Error| WalletRpcError::rpc(-32602, e.to_string());

        if selector == IEFPListRegistry::balanceOfCall::SELECTOR {
            IEFPListRegistry::balanceOfCall::abi_decode(input).map_err(bad_input)?;
            Ok(state.list_balance.abi_encode().into())
        } else if selector == IEFPAccountMetadata::getValueCall::SELECTOR {
            IEFPAccountMetadata::getValueCall::abi_decode(input).map_err(bad_input)?;
            Ok(state.primary_list.abi_encode().into())
        } else if selector == IEFPListRegistry::getListStorageLocationCall::SELECTOR {
            let call =
                IEFPListRegistry::getListStorageLocationCall::abi_decode(input).map_err(bad_input)?;
            let location = state
                .locations
                .get(&call.tokenId)
                .cloned()
                .unwrap_or_default();
            Ok(location.abi_encode().into())
        } else {
            Err(WalletRpcError::rpc(3, "execution reverted"))
        }
    }

    async fn send_transaction(&self, request: &TransactionRequest) -> Result<B256, WalletRpcError> {
        let (tx_hash, delay) = {
            let mut state = self.state();
            state.rpc_log.push("eth_sendTransaction");
            if let Some(err) = state.send_error.clone() {
                return Err(err);
            }
            state.submitted.push(request.clone());
            (Self::tx_hash(state.submitted.len() - 1), state.send_delay)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        Ok(tx_hash)
    }

    async fn transaction_receipt(
        &self,
        tx_hash: B256,
    ) -> Result<Option<TransactionReceipt>, WalletRpcError> {
        let mut state = self.state();
        state.rpc_log.push("eth_getTransactionReceipt");
        if state.never_mine {
            return Ok(None);
        }
        let found = (0..state.submitted.len()).find(|i| Self::tx_hash(*i) == tx_hash);
        Ok(found.map(|i| TransactionReceipt {
            transaction_hash: tx_hash,
            success: !state.revert_on_mine,
            block_number: Some(i as u64 + 1),
        }))
    }

    fn chain_changed(&self) -> Option<watch::Receiver<u64>> {
        self.chain_events.as_ref().map(|tx| tx.subscribe())
    }
}
