//! Pool configuration and the administrative capability.
//!
//! The reward window, emission rate and penalty percent live in a single
//! `PoolConfig` record in instance storage. Gated setters are enforced by
//! `require_admin`, which every administrative entry point calls first.

use soroban_sdk::{contracttype, Address, Env};

use crate::{DataKey, Error};

/// Instance storage is bumped to roughly 30 days whenever it drops below 7.
pub(crate) const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - 23 * DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Asset users stake and rewards are minted in.
    pub base_asset: Address,
    pub start_time: u64,
    pub end_time: u64,
    /// Last instant rewards were minted into the pool.
    pub last_reward_time: u64,
    /// Base-asset units emitted per second.
    pub reward_rate: i128,
    /// Withdrawal penalty in `pricing::PRECISION` units.
    pub penalty_percent: u64,
}

#[must_use]
pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn load(e: &Env) -> Result<PoolConfig, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(Error::NotInitialized)
}

pub fn save(e: &Env, cfg: &PoolConfig) {
    e.storage().instance().set(&DataKey::Config, cfg);
    bump_instance(e);
}

pub fn get_admin(e: &Env) -> Result<Address, Error> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
    bump_instance(e);
}

/// Fails with `Unauthorized` unless `caller` is the stored admin and has signed.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), Error> {
    let admin = get_admin(e)?;
    if *caller != admin {
        return Err(Error::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}

pub fn bump_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
