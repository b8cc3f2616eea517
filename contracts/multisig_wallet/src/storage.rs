use soroban_sdk::{Address, Env};

use crate::errors::WalletError;
use crate::types::DataKey;

pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 86_400;
pub(crate) const PERSISTENT_LIFETIME_THRESHOLD: u32 = 120_960;
pub(crate) const PERSISTENT_BUMP_AMOUNT: u32 = 1_051_200;

pub(crate) fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub(crate) fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Initialized)
}

pub(crate) fn require_initialized(env: &Env) -> Result<(), WalletError> {
    if !is_initialized(env) {
        return Err(WalletError::NotInitialized);
    }
    bump_instance(env);
    Ok(())
}

pub(crate) fn token(env: &Env) -> Result<Address, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(WalletError::NotInitialized)
}
