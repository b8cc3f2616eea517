//! Authorization and execution of ledger transactions.
//!
//! A transaction runs when enough live owners have confirmed it, or when it
//! is a plain transfer that still fits in today's allowance. Execution is
//! marked before the destination is invoked and rolled back if the
//! invocation fails, which leaves the transaction open for a later retry.

use soroban_sdk::{log, token, Address, Env, Error, Val};

use crate::allowance;
use crate::errors::WalletError;
use crate::events;
use crate::ledger;
use crate::owners;
use crate::storage;
use crate::types::{Call, DataKey, ExecutionStatus, Payload, Transaction, WalletChange};

/// Who is asking for a reconfiguration. Only the dispatch of an authorized
/// transaction addressed to the wallet itself yields `SelfAuthorized`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ExecContext {
    External,
    SelfAuthorized,
}

impl ExecContext {
    fn for_destination(env: &Env, destination: &Address) -> Self {
        if *destination == env.current_contract_address() {
            ExecContext::SelfAuthorized
        } else {
            ExecContext::External
        }
    }

    pub(crate) fn require_self(self) -> Result<(), WalletError> {
        match self {
            ExecContext::SelfAuthorized => Ok(()),
            ExecContext::External => Err(WalletError::NotWallet),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Authorization {
    Quorum,
    DailyLimit,
}

pub(crate) fn status(env: &Env, id: u64) -> ExecutionStatus {
    env.storage()
        .temporary()
        .get(&DataKey::Execution(id))
        .unwrap_or(ExecutionStatus::Idle)
}

pub(crate) fn ensure_idle(env: &Env, id: u64) -> Result<(), WalletError> {
    if status(env, id) == ExecutionStatus::Executing {
        return Err(WalletError::ExecutionInProgress);
    }
    Ok(())
}

/// Marks one transaction id as executing until dropped.
struct ExecutionGuard<'a> {
    env: &'a Env,
    key: DataKey,
}

impl<'a> ExecutionGuard<'a> {
    fn acquire(env: &'a Env, id: u64) -> Result<Self, WalletError> {
        ensure_idle(env, id)?;
        let key = DataKey::Execution(id);
        env.storage()
            .temporary()
            .set(&key, &ExecutionStatus::Executing);
        Ok(Self { env, key })
    }
}

impl Drop for ExecutionGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&self.key);
    }
}

/// Runs transaction `id` if it is authorized. Returns whether it executed.
/// A failed destination call is reported through events, not as an error.
pub(crate) fn execute(env: &Env, id: u64) -> Result<bool, WalletError> {
    let mut transaction = ledger::get(env, id)?;
    if transaction.executed {
        return Err(WalletError::TransactionExecuted);
    }
    ledger::bump_confirmations(env, id);
    let _guard = ExecutionGuard::acquire(env, id)?;

    let authorization = if ledger::is_confirmed(env, id) {
        Authorization::Quorum
    } else if matches!(transaction.payload, Payload::Empty)
        && allowance::is_under_limit(env, transaction.value)
    {
        Authorization::DailyLimit
    } else {
        return Ok(false);
    };

    transaction.executed = true;
    ledger::save(env, &transaction);
    if authorization == Authorization::DailyLimit {
        allowance::spend(env, transaction.value);
    }

    if dispatch(env, &transaction) {
        ledger::record_execution(env);
        events::Execution { transaction_id: id }.publish(env);
        return Ok(true);
    }

    transaction.executed = false;
    ledger::save(env, &transaction);
    if authorization == Authorization::DailyLimit {
        allowance::refund(env, transaction.value);
    }
    events::ExecutionFailure { transaction_id: id }.publish(env);
    log!(env, "transaction execution failed", id);
    Ok(false)
}

fn dispatch(env: &Env, transaction: &Transaction) -> bool {
    let wallet = env.current_contract_address();
    match &transaction.payload {
        Payload::Empty => {
            if transaction.value == 0 || transaction.destination == wallet {
                return true;
            }
            let Ok(token) = storage::token(env) else {
                return false;
            };
            let result = token::Client::new(env, &token).try_transfer(
                &wallet,
                &transaction.destination,
                &transaction.value,
            );
            matches!(result, Ok(Ok(())))
        }
        Payload::Call(call) => invoke(env, &wallet, transaction, call),
        Payload::Reconfigure(change) => {
            let ctx = ExecContext::for_destination(env, &transaction.destination);
            apply(env, ctx, change.clone()).is_ok()
        }
    }
}

/// Invokes the destination contract. A non-zero value is offered as a token
/// allowance the callee may draw on during the call; it is cleared afterwards.
fn invoke(env: &Env, wallet: &Address, transaction: &Transaction, call: &Call) -> bool {
    let grant = if transaction.value > 0 {
        let Ok(token) = storage::token(env) else {
            return false;
        };
        let client = token::Client::new(env, &token);
        let expiration = env.ledger().sequence();
        let approved =
            client.try_approve(wallet, &transaction.destination, &transaction.value, &expiration);
        if !matches!(approved, Ok(Ok(()))) {
            return false;
        }
        Some((client, expiration))
    } else {
        None
    };

    let result = env.try_invoke_contract::<Val, Error>(
        &transaction.destination,
        &call.function,
        call.args.clone(),
    );

    if let Some((client, expiration)) = grant {
        client.approve(wallet, &transaction.destination, &0, &expiration);
    }
    matches!(result, Ok(Ok(_)))
}

fn apply(env: &Env, ctx: ExecContext, change: WalletChange) -> Result<(), WalletError> {
    match change {
        WalletChange::AddOwner(owner) => owners::add_owner(env, ctx, owner),
        WalletChange::RemoveOwner(owner) => owners::remove_owner(env, ctx, owner),
        WalletChange::ReplaceOwner(owner, new_owner) => {
            owners::replace_owner(env, ctx, owner, new_owner)
        }
        WalletChange::ChangeRequirement(required) => {
            owners::change_requirement(env, ctx, required)
        }
        WalletChange::ChangeDailyLimit(daily_limit) => {
            allowance::change_daily_limit(env, ctx, daily_limit)
        }
    }
}
