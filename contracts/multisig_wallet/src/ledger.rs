use soroban_sdk::{Address, Env, Vec};

use crate::errors::WalletError;
use crate::events;
use crate::owners::{self, OwnerSet};
use crate::storage;
use crate::types::{DataKey, Payload, Transaction};

/// Id the next submission will receive; also the number of transactions ever submitted.
pub(crate) fn next_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TransactionCount)
        .unwrap_or(0)
}

pub(crate) fn add_transaction(env: &Env, destination: Address, value: i128, payload: Payload) -> u64 {
    let id = next_id(env);
    let transaction = Transaction {
        id,
        destination,
        value,
        payload,
        executed: false,
    };
    save(env, &transaction);
    env.storage()
        .instance()
        .set(&DataKey::TransactionCount, &(id + 1));

    events::Submission { transaction_id: id }.publish(env);
    id
}

/// Reads a transaction without extending its TTL, for views.
pub(crate) fn peek(env: &Env, id: u64) -> Option<Transaction> {
    env.storage().persistent().get(&DataKey::Transaction(id))
}

pub(crate) fn find(env: &Env, id: u64) -> Option<Transaction> {
    let transaction = peek(env, id)?;
    storage::bump_persistent(env, &DataKey::Transaction(id));
    Some(transaction)
}

pub(crate) fn get(env: &Env, id: u64) -> Result<Transaction, WalletError> {
    find(env, id).ok_or(WalletError::TransactionNotFound)
}

pub(crate) fn save(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.id);
    env.storage().persistent().set(&key, transaction);
    storage::bump_persistent(env, &key);
}

fn executed_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::ExecutedCount)
        .unwrap_or(0)
}

/// Counts a settled execution. A transaction executes at most once, so the
/// pending count is always `next_id - executed_count`.
pub(crate) fn record_execution(env: &Env) {
    env.storage()
        .instance()
        .set(&DataKey::ExecutedCount, &(executed_count(env) + 1));
}

fn matches(transaction: &Transaction, pending: bool, executed: bool) -> bool {
    (pending && !transaction.executed) || (executed && transaction.executed)
}

pub(crate) fn transaction_count(env: &Env, pending: bool, executed: bool) -> u64 {
    let executed_total = executed_count(env);
    let mut count = 0;
    if pending {
        count += next_id(env).saturating_sub(executed_total);
    }
    if executed {
        count += executed_total;
    }
    count
}

/// Ids of matching transactions, sliced to positions `[from, to)` of the
/// filtered sequence. `to` is clamped to the number of matches.
pub(crate) fn transaction_ids(env: &Env, from: u64, to: u64, pending: bool, executed: bool) -> Vec<u64> {
    let mut ids = Vec::new(env);
    if from >= to {
        return ids;
    }
    let mut position = 0u64;
    for id in 0..next_id(env) {
        if position >= to {
            break;
        }
        let Some(transaction) = peek(env, id) else {
            continue;
        };
        if !matches(&transaction, pending, executed) {
            continue;
        }
        if position >= from {
            ids.push_back(id);
        }
        position += 1;
    }
    ids
}

// Confirmations

pub(crate) fn has_confirmed(env: &Env, id: u64, owner: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Confirmation(id, owner.clone()))
}

pub(crate) fn confirm(env: &Env, id: u64, owner: &Address) {
    let key = DataKey::Confirmation(id, owner.clone());
    env.storage().persistent().set(&key, &true);
    bump_confirmations(env, id);
    events::Confirmation {
        owner: owner.clone(),
        transaction_id: id,
    }
    .publish(env);
}

/// Extends the TTL of every live owner's confirmation of `id`, keeping them
/// alive as long as the transaction they count towards.
pub(crate) fn bump_confirmations(env: &Env, id: u64) {
    for owner in OwnerSet::load(env).iter() {
        let key = DataKey::Confirmation(id, owner);
        if env.storage().persistent().has(&key) {
            storage::bump_persistent(env, &key);
        }
    }
}

pub(crate) fn revoke(env: &Env, id: u64, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Confirmation(id, owner.clone()));
    events::Revocation {
        owner: owner.clone(),
        transaction_id: id,
    }
    .publish(env);
}

/// Current owners that confirmed `id`, in owner order. Confirmations left
/// behind by removed owners are ignored.
pub(crate) fn confirmations(env: &Env, id: u64) -> Vec<Address> {
    let mut confirmed = Vec::new(env);
    for owner in OwnerSet::load(env).iter() {
        if has_confirmed(env, id, &owner) {
            confirmed.push_back(owner);
        }
    }
    confirmed
}

pub(crate) fn confirmation_count(env: &Env, id: u64) -> u32 {
    OwnerSet::load(env)
        .iter()
        .filter(|owner| has_confirmed(env, id, owner))
        .count() as u32
}

pub(crate) fn is_confirmed(env: &Env, id: u64) -> bool {
    let required = owners::required(env);
    required != 0 && confirmation_count(env, id) >= required
}
