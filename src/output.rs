//! Colored console output for the follow tool.
//!
//! Color scheme: blue+bold headers, cyan values, green success,
//! red failures, yellow hints, dimmed secondary text.

use alloy_primitives::Address;
use colored::Colorize;

use crate::follow::{FollowErrorKind, FollowResult};
use crate::network::HomeChain;

// ── Helpers ────────────────────────────────────────────────────────

/// What the user should do next for a failure kind, if anything.
pub fn hint(kind: FollowErrorKind) -> Option<&'static str> {
    match kind {
        FollowErrorKind::ProviderUnavailable => {
            Some("Pass --wallet-url for an external wallet or --signer-key for a local key.")
        }
        FollowErrorKind::NoAccounts => Some("Unlock the wallet and approve account access."),
        FollowErrorKind::NetworkSwitchRejected | FollowErrorKind::NetworkAddFailed => {
            Some("Switch the wallet to the home chain manually and try again.")
        }
        FollowErrorKind::NoPrimaryList => Some("Mint a list first, then follow again."),
        FollowErrorKind::AmbiguousPrimaryList => {
            Some("Mark one of your lists as primary, then follow again.")
        }
        FollowErrorKind::TransactionRejectedByUser => Some("Approve the prompt to follow."),
        _ => None,
    }
}

// ── Banner ─────────────────────────────────────────────────────────

/// Print what is about to happen.
pub fn print_banner(action: &str, target: &str, home: &HomeChain) {
    println!();
    println!("{}", "=== EFP Follow ===".blue().bold());
    println!("  Action:       {}", action.cyan());
    println!("  Target:       {}", target.cyan());
    println!(
        "  Home chain:   {} ({})",
        home.name.cyan(),
        home.chain_id.to_string().dimmed()
    );
}

/// Print which wallet backend is in use.
pub fn print_wallet(kind: &str, detail: &str) {
    println!("  Wallet:       {} {}", kind.cyan(), detail.dimmed());
}

/// Print the local signer address.
pub fn print_signer(addr: &Address) {
    println!("  Signer:       {}", format!("{addr}").cyan());
}

// ── Result ─────────────────────────────────────────────────────────

/// Print the terminal result.
pub fn print_result(result: &FollowResult, home: &HomeChain) {
    println!();
    match result {
        FollowResult::Success { tx_hash } => {
            let hash = format!("{tx_hash}");
            println!("  {} Transaction confirmed: {}", "OK".green().bold(), hash.cyan());
            if let Some(url) = home.tx_url(&hash) {
                println!("     {}", url.dimmed());
            }
        }
        FollowResult::Failure {
            error_kind,
            message,
        } => {
            println!("  {} {}: {}", "FAILED".red().bold(), error_kind.as_str().red(), message);
            if let Some(hint) = hint(*error_kind) {
                println!("     {}", hint.yellow());
            }
        }
    }
    println!();
}

/// Print the result as a single JSON line.
pub fn print_json(result: &FollowResult) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string(result)?);
    Ok(())
}
