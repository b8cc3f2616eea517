use soroban_sdk::{contracttype, Address, Symbol, Val, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owners,
    Required,
    Token,
    DailyLimit,
    LastDay,
    SpentToday,
    TransactionCount,
    ExecutedCount,
    Transaction(u64),
    Confirmation(u64, Address),
    Execution(u64),
}

/// A contract function invocation carried by a transaction.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Call {
    pub function: Symbol,
    pub args: Vec<Val>,
}

/// Changes the wallet can apply to itself. Only dispatched when a
/// transaction addressed to the wallet has been authorized.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WalletChange {
    AddOwner(Address),
    RemoveOwner(Address),
    ReplaceOwner(Address, Address),
    ChangeRequirement(u32),
    ChangeDailyLimit(i128),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Payload {
    /// Plain value transfer; the only kind eligible for the daily allowance.
    Empty,
    Call(Call),
    Reconfigure(WalletChange),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub destination: Address,
    pub value: i128,
    pub payload: Payload,
    pub executed: bool,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExecutionStatus {
    Idle,
    Executing,
}
