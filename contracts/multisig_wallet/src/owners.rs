use soroban_sdk::{Address, Env, Vec};

use crate::engine::ExecContext;
use crate::errors::WalletError;
use crate::events;
use crate::types::DataKey;

pub const MAX_OWNERS: u32 = 5;

pub(crate) fn valid_requirement(owner_count: u32, required: u32) -> bool {
    owner_count != 0 && owner_count <= MAX_OWNERS && required != 0 && required <= owner_count
}

/// Owners in insertion order. Membership is answered from the same list, so
/// there is no second structure to keep in step.
pub(crate) struct OwnerSet {
    owners: Vec<Address>,
}

impl OwnerSet {
    pub(crate) fn load(env: &Env) -> Self {
        let owners = env
            .storage()
            .instance()
            .get(&DataKey::Owners)
            .unwrap_or_else(|| Vec::new(env));
        Self { owners }
    }

    pub(crate) fn save(&self, env: &Env) {
        env.storage().instance().set(&DataKey::Owners, &self.owners);
    }

    pub(crate) fn contains(&self, owner: &Address) -> bool {
        self.owners.contains(owner)
    }

    pub(crate) fn len(&self) -> u32 {
        self.owners.len()
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = Address> + '_ {
        self.owners.iter()
    }

    pub(crate) fn to_vec(&self) -> Vec<Address> {
        self.owners.clone()
    }

    fn insert(&mut self, owner: Address) {
        self.owners.push_back(owner);
    }

    /// Swap-with-last removal; the order of the remaining owners is not preserved.
    fn remove(&mut self, owner: &Address) -> bool {
        let Some(index) = self.owners.first_index_of(owner) else {
            return false;
        };
        let last = self.owners.len() - 1;
        if index != last {
            let tail = self.owners.get_unchecked(last);
            self.owners.set(index, tail);
        }
        self.owners.pop_back();
        true
    }

    fn replace(&mut self, old: &Address, new: Address) -> bool {
        match self.owners.first_index_of(old) {
            Some(index) => {
                self.owners.set(index, new);
                true
            }
            None => false,
        }
    }
}

pub(crate) fn required(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::Required)
        .unwrap_or(0)
}

fn set_required(env: &Env, required: u32) {
    env.storage().instance().set(&DataKey::Required, &required);
}

pub(crate) fn is_owner(env: &Env, address: &Address) -> bool {
    OwnerSet::load(env).contains(address)
}

pub(crate) fn require_owner(env: &Env, address: &Address) -> Result<(), WalletError> {
    if !is_owner(env, address) {
        return Err(WalletError::NotOwner);
    }
    Ok(())
}

pub(crate) fn init(env: &Env, owners: Vec<Address>, required: u32) -> Result<(), WalletError> {
    if !valid_requirement(owners.len(), required) {
        return Err(WalletError::InvalidRequirement);
    }

    let wallet = env.current_contract_address();
    for i in 0..owners.len() {
        let owner = owners.get_unchecked(i);
        if owner == wallet {
            return Err(WalletError::InvalidOwner);
        }
        for j in (i + 1)..owners.len() {
            if owner == owners.get_unchecked(j) {
                return Err(WalletError::DuplicateOwner);
            }
        }
    }

    OwnerSet { owners }.save(env);
    set_required(env, required);
    Ok(())
}

pub(crate) fn add_owner(env: &Env, ctx: ExecContext, owner: Address) -> Result<(), WalletError> {
    ctx.require_self()?;
    if owner == env.current_contract_address() {
        return Err(WalletError::InvalidOwner);
    }

    let mut set = OwnerSet::load(env);
    if set.contains(&owner) {
        return Err(WalletError::OwnerExists);
    }
    if !valid_requirement(set.len() + 1, required(env)) {
        return Err(WalletError::InvalidRequirement);
    }

    set.insert(owner.clone());
    set.save(env);
    events::OwnerAddition { owner }.publish(env);
    Ok(())
}

/// Removes `owner`, lowering the requirement to the new owner count when it
/// would otherwise exceed it.
pub(crate) fn remove_owner(env: &Env, ctx: ExecContext, owner: Address) -> Result<(), WalletError> {
    ctx.require_self()?;

    let mut set = OwnerSet::load(env);
    if !set.contains(&owner) {
        return Err(WalletError::OwnerNotFound);
    }
    if set.len() == 1 {
        return Err(WalletError::InvalidRequirement);
    }

    set.remove(&owner);
    set.save(env);
    events::OwnerRemoval { owner }.publish(env);

    if required(env) > set.len() {
        set_required(env, set.len());
        events::RequirementChange { required: set.len() }.publish(env);
    }
    Ok(())
}

pub(crate) fn replace_owner(
    env: &Env,
    ctx: ExecContext,
    owner: Address,
    new_owner: Address,
) -> Result<(), WalletError> {
    ctx.require_self()?;
    if new_owner == env.current_contract_address() {
        return Err(WalletError::InvalidOwner);
    }

    let mut set = OwnerSet::load(env);
    if !set.contains(&owner) {
        return Err(WalletError::OwnerNotFound);
    }
    if set.contains(&new_owner) {
        return Err(WalletError::OwnerExists);
    }

    set.replace(&owner, new_owner.clone());
    set.save(env);
    events::OwnerRemoval { owner }.publish(env);
    events::OwnerAddition { owner: new_owner }.publish(env);
    Ok(())
}

pub(crate) fn change_requirement(env: &Env, ctx: ExecContext, required: u32) -> Result<(), WalletError> {
    ctx.require_self()?;
    if !valid_requirement(OwnerSet::load(env).len(), required) {
        return Err(WalletError::InvalidRequirement);
    }

    set_required(env, required);
    events::RequirementChange { required }.publish(env);
    Ok(())
}
