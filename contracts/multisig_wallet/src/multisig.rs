use soroban_sdk::{contract, contractimpl, panic_with_error, token, Address, Env, Vec};

use crate::allowance;
use crate::engine;
use crate::errors::WalletError;
use crate::events;
use crate::ledger;
use crate::owners::{self, OwnerSet};
use crate::storage;
use crate::types::{DataKey, Payload, Transaction};

#[contract]
pub struct MultisigWallet;

#[contractimpl]
impl MultisigWallet {
    /// Sets up the owner set, quorum, daily allowance and the token that
    /// transaction values are paid in. Can only run once.
    pub fn initialize(
        env: Env,
        owners: Vec<Address>,
        required: u32,
        daily_limit: i128,
        token: Address,
    ) -> Result<(), WalletError> {
        if storage::is_initialized(&env) {
            return Err(WalletError::AlreadyInitialized);
        }

        owners::init(&env, owners, required)?;
        allowance::init(&env, daily_limit)?;

        let instance = env.storage().instance();
        instance.set(&DataKey::Token, &token);
        instance.set(&DataKey::TransactionCount, &0u64);
        instance.set(&DataKey::ExecutedCount, &0u64);
        instance.set(&DataKey::Initialized, &true);
        storage::bump_instance(&env);
        Ok(())
    }

    /// Records a new transaction, confirms it on behalf of `owner` and tries
    /// to execute it. The id is returned whether or not execution happened.
    pub fn submit_transaction(
        env: Env,
        owner: Address,
        destination: Address,
        value: i128,
        payload: Payload,
    ) -> Result<u64, WalletError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;
        Self::validate_transaction(&env, &destination, value, &payload)?;

        let id = ledger::add_transaction(&env, destination, value, payload);
        ledger::confirm(&env, id, &owner);
        engine::execute(&env, id)?;
        Ok(id)
    }

    pub fn confirm_transaction(env: Env, owner: Address, transaction_id: u64) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;

        let transaction = ledger::get(&env, transaction_id)?;
        if transaction.executed {
            return Err(WalletError::TransactionExecuted);
        }
        if ledger::has_confirmed(&env, transaction_id, &owner) {
            return Err(WalletError::AlreadyConfirmed);
        }
        engine::ensure_idle(&env, transaction_id)?;

        ledger::confirm(&env, transaction_id, &owner);
        engine::execute(&env, transaction_id)?;
        Ok(())
    }

    pub fn revoke_confirmation(env: Env, owner: Address, transaction_id: u64) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;

        if !ledger::has_confirmed(&env, transaction_id, &owner) {
            return Err(WalletError::NotConfirmed);
        }
        let transaction = ledger::get(&env, transaction_id)?;
        if transaction.executed {
            return Err(WalletError::TransactionExecuted);
        }
        engine::ensure_idle(&env, transaction_id)?;

        ledger::revoke(&env, transaction_id, &owner);
        Ok(())
    }

    /// Retries execution of a transaction `owner` has confirmed. Returns
    /// `false` when it is not yet authorized or the destination call failed.
    pub fn execute_transaction(env: Env, owner: Address, transaction_id: u64) -> Result<bool, WalletError> {
        storage::require_initialized(&env)?;
        owner.require_auth();
        owners::require_owner(&env, &owner)?;

        ledger::get(&env, transaction_id)?;
        if !ledger::has_confirmed(&env, transaction_id, &owner) {
            return Err(WalletError::NotConfirmed);
        }
        engine::execute(&env, transaction_id)
    }

    /// Moves `amount` of the wallet token from `from` into the wallet.
    pub fn deposit(env: Env, from: Address, amount: i128) -> Result<(), WalletError> {
        storage::require_initialized(&env)?;
        from.require_auth();
        if amount <= 0 {
            return Err(WalletError::InvalidAmount);
        }

        let token = storage::token(&env)?;
        token::Client::new(&env, &token).transfer(&from, &env.current_contract_address(), &amount);
        events::Deposit { sender: from, value: amount }.publish(&env);
        Ok(())
    }

    pub fn calc_max_withdraw(env: Env) -> i128 {
        Self::require_initialized(&env);
        allowance::calc_max_withdraw(&env)
    }

    pub fn is_confirmed(env: Env, transaction_id: u64) -> bool {
        Self::require_initialized(&env);
        ledger::is_confirmed(&env, transaction_id)
    }

    pub fn has_confirmed(env: Env, transaction_id: u64, owner: Address) -> bool {
        Self::require_initialized(&env);
        ledger::has_confirmed(&env, transaction_id, &owner)
    }

    pub fn get_confirmation_count(env: Env, transaction_id: u64) -> u32 {
        Self::require_initialized(&env);
        ledger::confirmation_count(&env, transaction_id)
    }

    pub fn get_confirmations(env: Env, transaction_id: u64) -> Vec<Address> {
        Self::require_initialized(&env);
        ledger::confirmations(&env, transaction_id)
    }

    pub fn get_transaction(env: Env, transaction_id: u64) -> Option<Transaction> {
        Self::require_initialized(&env);
        ledger::peek(&env, transaction_id)
    }

    pub fn get_transaction_count(env: Env, pending: bool, executed: bool) -> u64 {
        Self::require_initialized(&env);
        ledger::transaction_count(&env, pending, executed)
    }

    pub fn get_transaction_ids(env: Env, from: u64, to: u64, pending: bool, executed: bool) -> Vec<u64> {
        Self::require_initialized(&env);
        ledger::transaction_ids(&env, from, to, pending, executed)
    }

    pub fn get_owners(env: Env) -> Vec<Address> {
        Self::require_initialized(&env);
        OwnerSet::load(&env).to_vec()
    }

    pub fn is_owner(env: Env, address: Address) -> bool {
        Self::require_initialized(&env);
        owners::is_owner(&env, &address)
    }

    pub fn get_required(env: Env) -> u32 {
        Self::require_initialized(&env);
        owners::required(&env)
    }

    pub fn get_daily_limit(env: Env) -> i128 {
        Self::require_initialized(&env);
        allowance::daily_limit(&env)
    }

    pub fn get_spent_today(env: Env) -> i128 {
        Self::require_initialized(&env);
        allowance::spent_today(&env)
    }

    pub fn get_last_day(env: Env) -> u64 {
        Self::require_initialized(&env);
        allowance::last_day(&env)
    }

    pub fn get_token(env: Env) -> Address {
        Self::require_initialized(&env);
        match storage::token(&env) {
            Ok(token) => token,
            Err(err) => panic_with_error!(&env, err),
        }
    }

    fn require_initialized(env: &Env) {
        if let Err(err) = storage::require_initialized(env) {
            panic_with_error!(env, err);
        }
    }

    fn validate_transaction(
        env: &Env,
        destination: &Address,
        value: i128,
        payload: &Payload,
    ) -> Result<(), WalletError> {
        if value < 0 {
            return Err(WalletError::InvalidAmount);
        }

        // Reconfiguration is applied in-place, and a contract cannot call into itself.
        let to_wallet = *destination == env.current_contract_address();
        match payload {
            Payload::Empty => Ok(()),
            Payload::Call(_) if to_wallet => Err(WalletError::InvalidPayload),
            Payload::Call(_) => Ok(()),
            Payload::Reconfigure(_) if !to_wallet || value != 0 => Err(WalletError::InvalidPayload),
            Payload::Reconfigure(_) => Ok(()),
        }
    }
}
