//! Multi-owner wallet contract.
//!
//! Owners submit transactions against the wallet; a transaction executes once
//! `required` owners have confirmed it, or immediately when it is a plain
//! transfer that fits in the rolling daily allowance. The owner set, the
//! requirement and the allowance can only be changed by a transaction the
//! wallet addresses to itself.

#![no_std]

mod allowance;
mod engine;
mod errors;
mod events;
mod ledger;
mod multisig;
mod owners;
mod storage;
mod types;

pub use allowance::DAY_IN_SECONDS;
pub use errors::WalletError;
pub use multisig::{MultisigWallet, MultisigWalletClient};
pub use owners::MAX_OWNERS;
pub use types::{Call, ExecutionStatus, Payload, Transaction, WalletChange};
