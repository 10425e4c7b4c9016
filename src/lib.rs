//! # EFP Follow - list-based follow registry client
//!
//! Adds (or removes) an address on the caller's primary follow list:
//! connects an injected wallet, moves it to the home chain, resolves the
//! primary list and its storage slot, encodes the list operation and submits
//! it to the List Records contract.

pub mod cli;
pub mod codec;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod follow;
pub mod network;
pub mod output;
pub mod resolver;
pub mod wallet;

pub use follow::{FollowError, FollowErrorKind, FollowResult, Orchestrator};
