//! Fixed-point share pricing.
//!
//! All divisions truncate toward zero. Every input is non-negative, so rounding
//! always favors the pool: depositors receive at most the exact share count and
//! redeemers at most the exact amount.

use soroban_sdk::Env;

use crate::config::PoolConfig;
use crate::{asset, rewards, share_token, Error};

/// Fixed-point scale for prices (18 decimals).
pub const SCALE: i128 = 1_000_000_000_000_000_000;

/// Fixed-point scale for percentages: `PRECISION` is 100%.
pub const PRECISION: i128 = 1_000_000_000_000;

/// `a * b / denominator` with overflow and zero-denominator checks.
pub fn mul_div(a: i128, b: i128, denominator: i128) -> Result<i128, Error> {
    if denominator == 0 {
        return Err(Error::DivideByZero);
    }
    a.checked_mul(b)
        .map(|product| product / denominator)
        .ok_or(Error::ArithmeticOverflow)
}

/// Price of one share given the pool's value (holdings plus unharvested reward).
pub fn price_per_share(pool_value: i128, total_shares: i128) -> Result<i128, Error> {
    if total_shares == 0 {
        return Ok(0);
    }
    mul_div(pool_value, SCALE, total_shares)
}

pub fn inverse_price(pool_value: i128, total_shares: i128) -> Result<i128, Error> {
    mul_div(total_shares, SCALE, pool_value)
}

/// Shares minted for a deposit. The first deposit into an empty pool mints 1:1.
pub fn shares_for_deposit(
    amount: i128,
    total_shares: i128,
    pool_balance: i128,
) -> Result<i128, Error> {
    if total_shares == 0 {
        return Ok(amount);
    }
    mul_div(amount, total_shares, pool_balance)
}

/// Gross base-asset amount redeemable for `shares`, before penalty.
pub fn amount_for_shares(
    shares: i128,
    total_shares: i128,
    pool_balance: i128,
) -> Result<i128, Error> {
    mul_div(pool_balance, shares, total_shares)
}

/// Base-asset value of `shares` out of `total_shares` against `pool_value`.
/// Does not go through a `SCALE`d price.
pub fn value_of(shares: i128, pool_value: i128, total_shares: i128) -> Result<i128, Error> {
    if total_shares == 0 {
        return Ok(0);
    }
    mul_div(shares, pool_value, total_shares)
}

/// Pool holdings plus the reward that would be minted by a harvest at `now`.
pub fn pool_value(e: &Env, cfg: &PoolConfig, now: u64) -> Result<i128, Error> {
    asset::balance(e, &cfg.base_asset)
        .checked_add(rewards::pending_for(cfg, now)?)
        .ok_or(Error::ArithmeticOverflow)
}

/// Live value of `shares`, read without harvesting.
pub fn current_value(e: &Env, cfg: &PoolConfig, now: u64, shares: i128) -> Result<i128, Error> {
    value_of(shares, pool_value(e, cfg, now)?, share_token::total_supply(e))
}

/// Live price per share, read without harvesting.
pub fn current_price(e: &Env, cfg: &PoolConfig, now: u64) -> Result<i128, Error> {
    price_per_share(pool_value(e, cfg, now)?, share_token::total_supply(e))
}
