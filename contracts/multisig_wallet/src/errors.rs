use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum WalletError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    /// Caller is not in the owner set.
    NotOwner = 3,
    /// Reconfiguration attempted outside a self-addressed, executed transaction.
    NotWallet = 4,
    OwnerExists = 5,
    OwnerNotFound = 6,
    /// The wallet's own address was supplied as an owner.
    InvalidOwner = 7,
    DuplicateOwner = 8,
    /// Owner count and requirement would break `1 <= required <= owners <= MAX_OWNERS`.
    InvalidRequirement = 9,
    TransactionNotFound = 10,
    TransactionExecuted = 11,
    AlreadyConfirmed = 12,
    NotConfirmed = 13,
    ExecutionInProgress = 14,
    InvalidAmount = 15,
    InvalidPayload = 16,
}
