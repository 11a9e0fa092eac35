//! Pool share ledger.
//!
//! Shares are fungible claims on the pool's holdings. The ledger keeps balances
//! and total supply, and a per-holder snapshot of position value (the staked
//! amount) that is refreshed whenever the holder's balance changes through the pool.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::config::{PoolConfig, DAY_IN_LEDGERS};
use crate::{events, pricing, DataKey, Error};

pub(crate) const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
}

pub fn write_metadata(e: &Env, name: String, symbol: String, decimals: u32) {
    e.storage().instance().set(
        &DataKey::TokenMetadata,
        &TokenMetadata {
            name,
            symbol,
            decimals,
        },
    );
}

pub fn read_metadata(e: &Env) -> Result<TokenMetadata, Error> {
    e.storage()
        .instance()
        .get(&DataKey::TokenMetadata)
        .ok_or(Error::NotInitialized)
}

#[must_use]
pub fn total_supply(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::TotalShares)
        .unwrap_or(0)
}

fn write_total_supply(e: &Env, total: i128) {
    e.storage().instance().set(&DataKey::TotalShares, &total);
}

#[must_use]
pub fn balance_of(e: &Env, id: &Address) -> i128 {
    let key = DataKey::ShareBalance(id.clone());
    match e.storage().persistent().get::<_, i128>(&key) {
        Some(balance) => {
            e.storage().persistent().extend_ttl(
                &key,
                BALANCE_LIFETIME_THRESHOLD,
                BALANCE_BUMP_AMOUNT,
            );
            balance
        }
        None => 0,
    }
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    let key = DataKey::ShareBalance(id.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn mint(e: &Env, to: &Address, amount: i128) -> Result<(), Error> {
    let balance = balance_of(e, to)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    let total = total_supply(e)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    write_balance(e, to, balance);
    write_total_supply(e, total);
    events::emit_share_mint(e, to, amount);
    Ok(())
}

pub fn burn(e: &Env, from: &Address, amount: i128) -> Result<(), Error> {
    let balance = balance_of(e, from);
    if balance < amount {
        return Err(Error::InsufficientShares);
    }
    write_balance(e, from, balance - amount);
    write_total_supply(e, total_supply(e) - amount);
    events::emit_share_burn(e, from, amount);
    Ok(())
}

/// Move shares and refresh the staked-amount snapshot of both parties.
pub fn transfer(
    e: &Env,
    cfg: &PoolConfig,
    now: u64,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount < 0 {
        return Err(Error::InvalidArgument);
    }
    let from_balance = balance_of(e, from);
    if from_balance < amount {
        return Err(Error::InsufficientShares);
    }
    if from != to {
        let to_balance = balance_of(e, to)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        write_balance(e, from, from_balance - amount);
        write_balance(e, to, to_balance);
    }
    events::emit_share_transfer(e, from, to, amount);

    refresh_staked_amount(e, cfg, from, now)?;
    refresh_staked_amount(e, cfg, to, now)
}

#[must_use]
pub fn staked_amount(e: &Env, id: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&DataKey::StakedAmount(id.clone()))
        .unwrap_or(0)
}

/// Snapshot the value of `user`'s shares after the triggering mutation.
pub fn refresh_staked_amount(
    e: &Env,
    cfg: &PoolConfig,
    user: &Address,
    now: u64,
) -> Result<(), Error> {
    let value = pricing::current_value(e, cfg, now, balance_of(e, user))?;
    let key = DataKey::StakedAmount(user.clone());
    e.storage().persistent().set(&key, &value);
    e.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
    Ok(())
}
