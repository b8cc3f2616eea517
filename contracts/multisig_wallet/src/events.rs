//! Audit events. Nothing in the wallet reads them back.
//!
//! Every event is topped by `"wallet"` and its kind; owner and sender
//! addresses are indexed as a third topic.

use soroban_sdk::{contractevent, Address};

#[contractevent(topics = ["wallet", "submit"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Submission {
    pub transaction_id: u64,
}

#[contractevent(topics = ["wallet", "confirm"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Confirmation {
    #[topic]
    pub owner: Address,
    pub transaction_id: u64,
}

#[contractevent(topics = ["wallet", "revoke"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Revocation {
    #[topic]
    pub owner: Address,
    pub transaction_id: u64,
}

#[contractevent(topics = ["wallet", "execute"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Execution {
    pub transaction_id: u64,
}

/// The only trace of a destination call that failed; the transaction stays pending.
#[contractevent(topics = ["wallet", "exec_fail"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ExecutionFailure {
    pub transaction_id: u64,
}

#[contractevent(topics = ["wallet", "deposit"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    #[topic]
    pub sender: Address,
    pub value: i128,
}

#[contractevent(topics = ["wallet", "own_add"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerAddition {
    pub owner: Address,
}

#[contractevent(topics = ["wallet", "own_rem"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerRemoval {
    pub owner: Address,
}

#[contractevent(topics = ["wallet", "req_chg"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequirementChange {
    pub required: u32,
}

#[contractevent(topics = ["wallet", "limit_chg"], data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DailyLimitChange {
    pub daily_limit: i128,
}
