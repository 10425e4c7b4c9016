//! Follow Orchestrator
//!
//! Runs one follow (or unfollow) as an explicit state machine:
//!
//! ```text
//!   ConnectWallet → VerifyNetwork → ResolvePrimaryList → ResolveStorageLocation
//!     → EncodeOperation → SubmitTransaction → AwaitConfirmation → Success
//! ```
//!
//! Each state awaits its work before the next begins, and every state can
//! terminate with exactly one classified [`FollowError`]. Nothing is retried
//! here; callers wrap the whole run in their own policy.
//!
//! Every suspension point before submission races the caller's
//! [`CancellationToken`]. The send itself always runs to completion, and a
//! cancel from then on reports the transaction hash. Waiting for the receipt
//! is bounded by [`FollowConfig::confirmation_timeout`].
//!
//! Concurrent runs for the same account are not serialized and may race on
//! nonce allocation.

pub mod errors;
pub mod result;

pub use errors::{FollowError, FollowErrorKind};
pub use result::FollowResult;

use alloy_primitives::{Address, Bytes, B256, U256};
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::codec::{pad_address, ListOpcode, ListOperation, ListStorageLocation};
use crate::config::FollowConfig;
use crate::contracts::apply_list_op_calldata;
use crate::network::NetworkGuard;
use crate::resolver::ListResolver;
use crate::wallet::{SessionProvider, WalletSession};

/// Workflow states. Each carries what the next step needs.
#[derive(Debug)]
enum FollowState {
    ConnectWallet,
    VerifyNetwork(WalletSession),
    ResolvePrimaryList(WalletSession),
    ResolveStorageLocation {
        session: WalletSession,
        token_id: U256,
    },
    EncodeOperation {
        session: WalletSession,
        location: ListStorageLocation,
    },
    SubmitTransaction {
        session: WalletSession,
        slot: U256,
        op: Bytes,
    },
    AwaitConfirmation {
        session: WalletSession,
        tx_hash: B256,
    },
}

impl FollowState {
    fn name(&self) -> &'static str {
        match self {
            Self::ConnectWallet => "ConnectWallet",
            Self::VerifyNetwork(_) => "VerifyNetwork",
            Self::ResolvePrimaryList(_) => "ResolvePrimaryList",
            Self::ResolveStorageLocation { .. } => "ResolveStorageLocation",
            Self::EncodeOperation { .. } => "EncodeOperation",
            Self::SubmitTransaction { .. } => "SubmitTransaction",
            Self::AwaitConfirmation { .. } => "AwaitConfirmation",
        }
    }
}

enum Transition {
    Next(FollowState),
    Confirmed(B256),
}

/// Parse a hex target address. Short inputs are left-padded, long ones rejected.
pub fn parse_target(target: &str) -> Result<Address, FollowError> {
    let digits = target.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    if digits.is_empty() {
        return Err(FollowError::new(FollowErrorKind::InvalidInput, "target address is empty"));
    }
    let raw = hex::decode(digits).map_err(|e| {
        FollowError::new(FollowErrorKind::InvalidInput, format!("target address is not hex: {e}"))
    })?;
    Ok(pad_address(&raw)?)
}

/// Await `fut` unless `cancel` fires first.
async fn guarded<T, E>(
    cancel: &CancellationToken,
    fut: impl Future<Output = Result<T, E>>,
) -> Result<T, FollowError>
where
    FollowError: From<E>,
{
    tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(FollowError::cancelled()),
        res = fut => res.map_err(FollowError::from),
    }
}

/// Drives follow workflows for one wallet and deployment.
pub struct Orchestrator {
    sessions: SessionProvider,
    resolver: ListResolver,
    config: FollowConfig,
}

impl Orchestrator {
    pub fn new(sessions: SessionProvider, config: FollowConfig) -> Self {
        let resolver = ListResolver::new(config.deployment.clone());
        Self {
            sessions,
            resolver,
            config,
        }
    }

    /// Add `target` to the account's primary list.
    ///
    /// Not cancellable; waiting for the receipt is bounded only by
    /// [`FollowConfig::confirmation_timeout`]. Use
    /// [`Orchestrator::follow_with_cancel`] or [`Orchestrator::run`] to stop early.
    pub async fn follow(&self, target: &str) -> FollowResult {
        self.run(ListOpcode::Add, target, &CancellationToken::new())
            .await
    }

    /// Remove `target` from the account's primary list.
    pub async fn unfollow(&self, target: &str) -> FollowResult {
        self.run(ListOpcode::Remove, target, &CancellationToken::new())
            .await
    }

    /// [`Orchestrator::follow`] with a caller-controlled cancellation token.
    pub async fn follow_with_cancel(
        &self,
        target: &str,
        cancel: &CancellationToken,
    ) -> FollowResult {
        self.run(ListOpcode::Add, target, cancel).await
    }

    /// Run the state machine for one list operation on `target`.
    pub async fn run(
        &self,
        opcode: ListOpcode,
        target: &str,
        cancel: &CancellationToken,
    ) -> FollowResult {
        // Malformed input never reaches the network.
        let operation = match parse_target(target) {
            Ok(address) => ListOperation { opcode, address },
            Err(err) => {
                warn!(input = target, error = %err, "rejected follow target");
                return err.into();
            }
        };

        let mut state = FollowState::ConnectWallet;
        loop {
            let name = state.name();
            debug!(state = name, "entering state");
            match self.advance(state, &operation, cancel).await {
                Ok(Transition::Next(next)) => state = next,
                Ok(Transition::Confirmed(tx_hash)) => {
                    info!(
                        %tx_hash,
                        address = %operation.address,
                        ?opcode,
                        "list operation confirmed"
                    );
                    return FollowResult::Success { tx_hash };
                }
                Err(err) => {
                    warn!(state = name, kind = %err.kind, message = %err.message, "follow failed");
                    return err.into();
                }
            }
        }
    }

    async fn advance(
        &self,
        state: FollowState,
        operation: &ListOperation,
        cancel: &CancellationToken,
    ) -> Result<Transition, FollowError> {
        let next = match state {
            FollowState::ConnectWallet => {
                let session = guarded(cancel, self.sessions.connect()).await?;
                FollowState::VerifyNetwork(session)
            }

            FollowState::VerifyNetwork(session) => {
                let guard = NetworkGuard::new(
                    &self.sessions,
                    &self.config.home_chain,
                    self.config.settle_delay,
                );
                let check = guarded(cancel, guard.ensure_home_chain(session)).await?;
                if check.switched() {
                    debug!("session replaced after chain switch");
                }
                FollowState::ResolvePrimaryList(check.into_session())
            }

            FollowState::ResolvePrimaryList(session) => {
                let status = guarded(cancel, self.resolver.resolve_primary_list(&session)).await?;
                match status.token_id {
                    Some(token_id) if status.has_list => {
                        FollowState::ResolveStorageLocation { session, token_id }
                    }
                    _ if status.has_any_lists => {
                        return Err(FollowError::new(
                            FollowErrorKind::AmbiguousPrimaryList,
                            "lists exist but none is marked primary; set a primary list first",
                        ))
                    }
                    _ => {
                        return Err(FollowError::new(
                            FollowErrorKind::NoPrimaryList,
                            "no list exists; create one first",
                        ))
                    }
                }
            }

            FollowState::ResolveStorageLocation { session, token_id } => {
                let location =
                    guarded(cancel, self.resolver.resolve_storage_location(&session, token_id))
                        .await?;
                self.check_location(&location)?;
                FollowState::EncodeOperation { session, location }
            }

            FollowState::EncodeOperation { session, location } => {
                let op = operation.to_bytes();
                debug!(op = %op, slot = %location.slot, "encoded list operation");
                FollowState::SubmitTransaction {
                    session,
                    slot: location.slot,
                    op,
                }
            }

            FollowState::SubmitTransaction { session, slot, op } => {
                if cancel.is_cancelled() {
                    return Err(FollowError::cancelled());
                }
                // Never drop a send in flight; check cancellation once the hash is known.
                let calldata = apply_list_op_calldata(slot, op);
                let tx_hash = session
                    .signer
                    .send_transaction(
                        self.config.deployment.list_records,
                        calldata,
                        self.config.gas_limit,
                    )
                    .await
                    .map_err(FollowError::from_submission)?;
                info!(%tx_hash, "list operation submitted");
                if cancel.is_cancelled() {
                    return Err(FollowError::cancelled_after_submission(tx_hash));
                }
                FollowState::AwaitConfirmation { session, tx_hash }
            }

            FollowState::AwaitConfirmation { session, tx_hash } => {
                let timeout = self.config.confirmation_timeout;
                let signer = &session.signer;
                let wait = tokio::time::timeout(
                    timeout,
                    signer.wait_for_receipt(tx_hash, self.config.poll_interval),
                );
                let receipt = tokio::select! {
                    biased;
                    _ = cancel.cancelled() => {
                        return Err(FollowError::cancelled_after_submission(tx_hash))
                    }
                    res = wait => match res {
                        Ok(res) => res.map_err(FollowError::from_submission)?,
                        Err(_) => {
                            return Err(FollowError::new(
                                FollowErrorKind::UnknownError,
                                format!(
                                    "transaction {tx_hash} not confirmed within {}s",
                                    timeout.as_secs()
                                ),
                            ))
                        }
                    },
                };
                if !receipt.success {
                    return Err(FollowError::new(
                        FollowErrorKind::TransactionReverted,
                        format!("transaction {tx_hash} reverted"),
                    ));
                }
                return Ok(Transition::Confirmed(receipt.transaction_hash));
            }
        };
        Ok(Transition::Next(next))
    }

    fn check_location(&self, location: &ListStorageLocation) -> Result<(), FollowError> {
        let home = &self.config.home_chain;
        if !location.is_valid {
            return Err(FollowError::new(
                FollowErrorKind::InvalidStorageLocation,
                format!(
                    "list storage is on chain {}, expected home chain {} ({})",
                    location.chain_id, home.chain_id, home.name
                ),
            ));
        }
        if location.contract_address != self.config.deployment.list_records {
            return Err(FollowError::new(
                FollowErrorKind::InvalidStorageLocation,
                format!(
                    "list storage contract {} is not the List Records contract {}",
                    location.contract_address, self.config.deployment.list_records
                ),
            ));
        }
        Ok(())
    }
}
