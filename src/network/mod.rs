//! Network Guard
//!
//! Makes sure the wallet session is on the home chain before anything touches
//! list storage:
//!
//! ```text
//!   session.chain_id == home ──────────────────────────────► Unchanged
//!   wallet_switchEthereumChain ── ok ──────────┐
//!        └─ 4902 ─► wallet_addEthereumChain ─ ok ┤
//!                                              settle ─► reconnect ─► Switched
//! ```
//!
//! Settling waits on the wallet's chain-changed channel when it has one and
//! falls back to a fixed delay otherwise. The only retry is switch → add.

pub mod chain;
pub mod errors;

pub use chain::HomeChain;
pub use errors::NetworkError;

use std::time::Duration;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::wallet::{SessionProvider, WalletSession};

/// Outcome of [`NetworkGuard::ensure_home_chain`].
#[derive(Debug, Clone)]
pub enum ChainCheck {
    /// Already on the home chain; the input session is returned untouched
    Unchanged(WalletSession),
    /// The wallet switched; this is a freshly connected session
    Switched(WalletSession),
}

impl ChainCheck {
    /// The session to continue with.
    pub fn into_session(self) -> WalletSession {
        match self {
            Self::Unchanged(session) | Self::Switched(session) => session,
        }
    }

    /// Whether a chain change happened.
    pub fn switched(&self) -> bool {
        matches!(self, Self::Switched(_))
    }
}

/// Moves wallet sessions onto the home chain.
pub struct NetworkGuard<'a> {
    sessions: &'a SessionProvider,
    home: &'a HomeChain,
    settle_delay: Duration,
}

impl<'a> NetworkGuard<'a> {
    pub fn new(sessions: &'a SessionProvider, home: &'a HomeChain, settle_delay: Duration) -> Self {
        Self {
            sessions,
            home,
            settle_delay,
        }
    }

    /// Ensure `session` is on the home chain, switching (or adding) it if not.
    pub async fn ensure_home_chain(
        &self,
        session: WalletSession,
    ) -> Result<ChainCheck, NetworkError> {
        if session.chain_id == self.home.chain_id {
            return Ok(ChainCheck::Unchanged(session));
        }

        let expected = self.home.chain_id;
        info!(from = session.chain_id, to = expected, "switching wallet to home chain");

        let provider = session.signer.provider();
        let events = provider.chain_changed();

        match provider.switch_chain(&self.home.chain_id_hex()).await {
            Ok(()) => {}
            Err(err) if err.is_unrecognized_chain() => {
                warn!(chain_id = expected, "wallet does not know home chain, adding it");
                provider
                    .add_chain(&self.home.add_chain_params())
                    .await
                    .map_err(|source| NetworkError::AddFailed {
                        chain_id: expected,
                        source,
                    })?;
            }
            Err(source) => {
                return Err(NetworkError::SwitchRejected {
                    chain_id: expected,
                    source,
                })
            }
        }

        self.settle(events).await;

        let refreshed = self.sessions.connect().await?;
        if refreshed.chain_id != expected {
            return Err(NetworkError::NotSwitched {
                expected,
                actual: refreshed.chain_id,
            });
        }
        info!(chain_id = expected, account = %refreshed.account, "wallet on home chain");
        Ok(ChainCheck::Switched(refreshed))
    }

    async fn settle(&self, events: Option<watch::Receiver<u64>>) {
        let target = self.home.chain_id;
        match events {
            Some(mut rx) => {
                let wait = rx.wait_for(|id| *id == target);
                let settled =
                    matches!(tokio::time::timeout(self.settle_delay, wait).await, Ok(Ok(_)));
                if !settled {
                    warn!(chain_id = target, "no chain-changed notification within settle delay");
                }
            }
            None => tokio::time::sleep(self.settle_delay).await,
        }
    }
}
