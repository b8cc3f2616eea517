use soroban_sdk::Env;

use crate::engine::ExecContext;
use crate::errors::WalletError;
use crate::events;
use crate::types::DataKey;

pub const DAY_IN_SECONDS: u64 = 86_400;

pub(crate) fn init(env: &Env, daily_limit: i128) -> Result<(), WalletError> {
    if daily_limit < 0 {
        return Err(WalletError::InvalidAmount);
    }
    let storage = env.storage().instance();
    storage.set(&DataKey::DailyLimit, &daily_limit);
    storage.set(&DataKey::LastDay, &0u64);
    storage.set(&DataKey::SpentToday, &0i128);
    Ok(())
}

pub(crate) fn daily_limit(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::DailyLimit)
        .unwrap_or(0)
}

pub(crate) fn last_day(env: &Env) -> u64 {
    env.storage().instance().get(&DataKey::LastDay).unwrap_or(0)
}

pub(crate) fn spent_today(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::SpentToday)
        .unwrap_or(0)
}

fn set_spent_today(env: &Env, spent: i128) {
    env.storage().instance().set(&DataKey::SpentToday, &spent);
}

fn window_elapsed(env: &Env) -> bool {
    env.ledger().timestamp() > last_day(env).saturating_add(DAY_IN_SECONDS)
}

pub(crate) fn change_daily_limit(env: &Env, ctx: ExecContext, daily_limit: i128) -> Result<(), WalletError> {
    ctx.require_self()?;
    if daily_limit < 0 {
        return Err(WalletError::InvalidAmount);
    }
    env.storage()
        .instance()
        .set(&DataKey::DailyLimit, &daily_limit);
    events::DailyLimitChange { daily_limit }.publish(env);
    Ok(())
}

/// Amount that can still leave through the allowance path today. Does not
/// roll the window; a stale window reads as a full allowance.
pub(crate) fn calc_max_withdraw(env: &Env) -> i128 {
    let limit = daily_limit(env);
    if window_elapsed(env) {
        return limit;
    }
    let spent = spent_today(env);
    if limit < spent {
        return 0;
    }
    limit - spent
}

/// Rolls the 24h window if it has lapsed, then checks `amount` against what is left.
pub(crate) fn is_under_limit(env: &Env, amount: i128) -> bool {
    if window_elapsed(env) {
        let now = env.ledger().timestamp();
        env.storage().instance().set(&DataKey::LastDay, &now);
        set_spent_today(env, 0);
    }
    match spent_today(env).checked_add(amount) {
        Some(total) => total <= daily_limit(env),
        None => false,
    }
}

pub(crate) fn spend(env: &Env, amount: i128) {
    set_spent_today(env, spent_today(env) + amount);
}

pub(crate) fn refund(env: &Env, amount: i128) {
    set_spent_today(env, spent_today(env) - amount);
}
