#![no_std]

//! # Staking Pool Contract
//!
//! Single-pool staking: users deposit a base asset and receive pool shares priced
//! against the pool's holdings. Rewards accrue at a fixed rate inside a time window
//! and are minted into the pool on demand. Withdrawals pay a configurable penalty
//! routed to an ordered list of destinations; the unallocated remainder stays in the
//! pool for the remaining stakers.

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, Address, Env, String, Vec,
};

mod asset;
pub mod config;
mod events;
pub mod penalty;
pub mod pricing;
mod reentrancy;
pub mod rewards;
pub mod share_token;

pub use config::PoolConfig;
pub use penalty::PenaltyAllocation;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Config,
    /// Set while a mutating entry point is executing.
    Locked,
    PenaltyList,
    TotalShares,
    TokenMetadata,
    ShareBalance(Address),
    /// Value of a holder's shares at their last balance change.
    StakedAmount(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidArgument = 1,
    Unauthorized = 2,
    InsufficientBalanceOrAllowance = 3,
    InsufficientShares = 4,
    DivideByZero = 5,
    ReentrancyRejected = 6,
    AlreadyInitialized = 7,
    NotInitialized = 8,
    ArithmeticOverflow = 9,
}

/// Per-user view returned by `get_user_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserInfo {
    /// Snapshot of the user's position value taken at their last action.
    pub staked_amount: i128,
    /// Growth of the position since that snapshot.
    pub current_reward: i128,
}

#[contract]
pub struct StakingPool;

#[contractimpl]
impl StakingPool {
    /// Initialize the pool. The contract must be the admin of `base_asset` so it can
    /// mint rewards. Accrual starts at `start_time`.
    pub fn initialize(
        e: Env,
        admin: Address,
        base_asset: Address,
        start_time: u64,
        end_time: u64,
        reward_rate: i128,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        if config::is_initialized(&e) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();
        if reward_rate < 0 {
            return Err(Error::InvalidArgument);
        }

        let decimals = asset::decimals(&e, &base_asset);
        config::set_admin(&e, &admin);
        config::save(
            &e,
            &PoolConfig {
                base_asset,
                start_time,
                end_time,
                last_reward_time: start_time,
                reward_rate,
                penalty_percent: 0,
            },
        );
        share_token::write_metadata(&e, name, symbol, decimals);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Staking
    // ------------------------------------------------------------------

    /// Deposit `amount` of the base asset and mint shares at the current price.
    /// A zero amount only harvests pending rewards. Returns the shares minted.
    pub fn stake(e: Env, user: Address, amount: i128) -> Result<i128, Error> {
        user.require_auth();
        reentrancy::guarded(&e, || {
            if amount < 0 {
                return Err(Error::InvalidArgument);
            }
            let now = e.ledger().timestamp();
            let mut cfg = config::load(&e)?;
            rewards::harvest(&e, &mut cfg, now)?;
            if amount == 0 {
                return Ok(0);
            }

            let total_shares = share_token::total_supply(&e);
            let pool_balance = asset::balance(&e, &cfg.base_asset);
            let shares = pricing::shares_for_deposit(amount, total_shares, pool_balance)?;

            asset::pull(&e, &cfg.base_asset, &user, amount)?;
            share_token::mint(&e, &user, shares)?;
            share_token::refresh_staked_amount(&e, &cfg, &user, now)?;

            events::emit_stake(&e, &user, amount, shares);
            Ok(shares)
        })
    }

    /// Redeem `shares` for their share of the pool minus the withdrawal penalty.
    /// A zero amount only harvests pending rewards. Returns the amount paid out.
    pub fn unstake(e: Env, user: Address, shares: i128) -> Result<i128, Error> {
        user.require_auth();
        reentrancy::guarded(&e, || {
            if shares < 0 {
                return Err(Error::InvalidArgument);
            }
            let now = e.ledger().timestamp();
            let mut cfg = config::load(&e)?;
            rewards::harvest(&e, &mut cfg, now)?;
            if shares == 0 {
                return Ok(0);
            }

            let total_shares = share_token::total_supply(&e);
            if total_shares == 0 {
                return Err(Error::DivideByZero);
            }
            if share_token::balance_of(&e, &user) < shares {
                return Err(Error::InsufficientShares);
            }

            let pool_balance = asset::balance(&e, &cfg.base_asset);
            let withdraw_amount = pricing::amount_for_shares(shares, total_shares, pool_balance)?;
            let (penalty_amount, net_withdraw) =
                penalty::calculate_penalty(withdraw_amount, cfg.penalty_percent)?;

            penalty::distribute(&e, &cfg.base_asset, penalty_amount)?;
            share_token::burn(&e, &user, shares)?;
            if net_withdraw > 0 {
                asset::send(&e, &cfg.base_asset, &user, net_withdraw);
            }
            share_token::refresh_staked_amount(&e, &cfg, &user, now)?;

            events::emit_unstake(&e, &user, net_withdraw, shares);
            Ok(net_withdraw)
        })
    }

    /// Mint any pending reward into the pool. Returns the amount minted.
    pub fn harvest(e: Env) -> Result<i128, Error> {
        reentrancy::guarded(&e, || {
            let now = e.ledger().timestamp();
            let mut cfg = config::load(&e)?;
            rewards::harvest(&e, &mut cfg, now)
        })
    }

    // ------------------------------------------------------------------
    // Share ledger
    // ------------------------------------------------------------------

    /// Move shares between holders. Both holders' staked-amount snapshots are refreshed.
    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();
        reentrancy::guarded(&e, || {
            let cfg = config::load(&e)?;
            share_token::transfer(&e, &cfg, e.ledger().timestamp(), &from, &to, amount)
        })
    }

    pub fn balance_of(e: Env, id: Address) -> i128 {
        share_token::balance_of(&e, &id)
    }

    pub fn total_shares(e: Env) -> i128 {
        share_token::total_supply(&e)
    }

    pub fn name(e: Env) -> Result<String, Error> {
        Ok(share_token::read_metadata(&e)?.name)
    }

    pub fn symbol(e: Env) -> Result<String, Error> {
        Ok(share_token::read_metadata(&e)?.symbol)
    }

    pub fn decimals(e: Env) -> Result<u32, Error> {
        Ok(share_token::read_metadata(&e)?.decimals)
    }

    // ------------------------------------------------------------------
    // Views
    // ------------------------------------------------------------------

    /// Returns the user's last snapshot and the reward accrued on top of it.
    pub fn get_user_info(e: Env, user: Address) -> Result<UserInfo, Error> {
        let cfg = config::load(&e)?;
        let live = pricing::current_value(
            &e,
            &cfg,
            e.ledger().timestamp(),
            share_token::balance_of(&e, &user),
        )?;
        let staked_amount = share_token::staked_amount(&e, &user);
        Ok(UserInfo {
            staked_amount,
            current_reward: live.saturating_sub(staked_amount).max(0),
        })
    }

    pub fn staked_amount(e: Env, user: Address) -> i128 {
        share_token::staked_amount(&e, &user)
    }

    /// Base-asset value of one share, scaled by `pricing::SCALE`. Includes unharvested reward.
    pub fn price_per_share(e: Env) -> Result<i128, Error> {
        let cfg = config::load(&e)?;
        pricing::current_price(&e, &cfg, e.ledger().timestamp())
    }

    /// Shares per unit of base asset, scaled by `pricing::SCALE`.
    pub fn inverse_price(e: Env) -> Result<i128, Error> {
        let cfg = config::load(&e)?;
        let pool_value = pricing::pool_value(&e, &cfg, e.ledger().timestamp())?;
        pricing::inverse_price(pool_value, share_token::total_supply(&e))
    }

    pub fn pending_reward(e: Env) -> Result<i128, Error> {
        let cfg = config::load(&e)?;
        rewards::pending_for(&cfg, e.ledger().timestamp())
    }

    /// Base asset currently held by the pool, excluding unharvested reward.
    pub fn balance(e: Env) -> Result<i128, Error> {
        let cfg = config::load(&e)?;
        Ok(asset::balance(&e, &cfg.base_asset))
    }

    pub fn get_config(e: Env) -> Result<PoolConfig, Error> {
        config::load(&e)
    }

    pub fn get_admin(e: Env) -> Result<Address, Error> {
        config::get_admin(&e)
    }

    pub fn penalty_list(e: Env) -> Vec<PenaltyAllocation> {
        penalty::list(&e)
    }

    pub fn penalty_list_length(e: Env) -> u32 {
        penalty::list(&e).len()
    }

    // ------------------------------------------------------------------
    // Administration
    // ------------------------------------------------------------------

    /// Append a penalty destination. Returns its index.
    pub fn add_penalty_entry(
        e: Env,
        caller: Address,
        destination: Address,
        allocation: u64,
    ) -> Result<u32, Error> {
        config::require_admin(&e, &caller)?;
        reentrancy::guarded(&e, || penalty::add_entry(&e, destination, allocation))
    }

    pub fn set_penalty_entry(
        e: Env,
        caller: Address,
        index: u32,
        destination: Address,
        allocation: u64,
    ) -> Result<(), Error> {
        config::require_admin(&e, &caller)?;
        reentrancy::guarded(&e, || penalty::set_entry(&e, index, destination, allocation))
    }

    /// Remove the entry at `index`, shifting later entries down by one.
    pub fn remove_penalty_entry(e: Env, caller: Address, index: u32) -> Result<(), Error> {
        config::require_admin(&e, &caller)?;
        reentrancy::guarded(&e, || penalty::remove_entry(&e, index).map(|_| ()))
    }

    pub fn set_penalty_percent(e: Env, caller: Address, penalty_percent: u64) -> Result<(), Error> {
        config::require_admin(&e, &caller)?;
        reentrancy::guarded(&e, || {
            let mut cfg = config::load(&e)?;
            penalty::set_penalty_percent(&e, &mut cfg, penalty_percent)
        })
    }

    /// Move the start of the reward window. Resets the reward clock to `start_time`,
    /// discarding any reward accrued since the last harvest.
    pub fn set_start_time(e: Env, caller: Address, start_time: u64) -> Result<(), Error> {
        config::require_admin(&e, &caller)?;
        reentrancy::guarded(&e, || {
            let mut cfg = config::load(&e)?;
            rewards::set_start_time(&e, &mut cfg, start_time);
            Ok(())
        })
    }

    pub fn set_end_time(e: Env, caller: Address, end_time: u64) -> Result<(), Error> {
        config::require_admin(&e, &caller)?;
        reentrancy::guarded(&e, || {
            let mut cfg = config::load(&e)?;
            rewards::set_end_time(&e, &mut cfg, end_time);
            Ok(())
        })
    }

    pub fn set_reward_rate(e: Env, caller: Address, reward_rate: i128) -> Result<(), Error> {
        config::require_admin(&e, &caller)?;
        reentrancy::guarded(&e, || {
            let mut cfg = config::load(&e)?;
            rewards::set_reward_rate(&e, &mut cfg, reward_rate)
        })
    }

    /// Hand the administrative capability to `new_admin`.
    pub fn set_admin(e: Env, caller: Address, new_admin: Address) -> Result<(), Error> {
        config::require_admin(&e, &caller)?;
        reentrancy::guarded(&e, || {
            config::set_admin(&e, &new_admin);
            events::emit_admin_changed(&e, &caller, &new_admin);
            Ok(())
        })
    }
}

#[cfg(test)]
mod test_helpers;
