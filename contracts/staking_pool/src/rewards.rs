//! Reward Accrual Engine
//!
//! Rewards accrue at `reward_rate` per second between `last_reward_time` and
//! `end_time`. Nothing is booked continuously: `harvest` mints the pending amount
//! into the pool right before any operation that prices shares, so total emission
//! is capped at `reward_rate * (end_time - start_time)`.

use soroban_sdk::{log, Env};

use crate::config::{self, PoolConfig};
use crate::{asset, events, Error};

/// Reward accrued between `last_reward_time` and `min(now, end_time)`.
/// Zero when the window has not opened yet or was already harvested past its end.
pub fn pending_reward(
    now: u64,
    last_reward_time: u64,
    end_time: u64,
    reward_rate: i128,
) -> Result<i128, Error> {
    let effective_now = now.min(end_time);
    if effective_now <= last_reward_time {
        return Ok(0);
    }
    let elapsed = (effective_now - last_reward_time) as i128;
    reward_rate
        .checked_mul(elapsed)
        .ok_or(Error::ArithmeticOverflow)
}

pub fn pending_for(cfg: &PoolConfig, now: u64) -> Result<i128, Error> {
    pending_reward(now, cfg.last_reward_time, cfg.end_time, cfg.reward_rate)
}

/// Mint the pending reward into the pool and move the reward clock to `now`.
///
/// The clock moves to `now` even past `end_time`; a later `set_end_time` that
/// extends the window does not resurrect the skipped interval.
pub fn harvest(e: &Env, cfg: &mut PoolConfig, now: u64) -> Result<i128, Error> {
    let pending = pending_for(cfg, now)?;
    if pending <= 0 {
        return Ok(0);
    }
    asset::mint_reward(e, &cfg.base_asset, pending);
    cfg.last_reward_time = now;
    config::save(e, cfg);
    log!(e, "reward harvested", pending, now);
    events::emit_harvest(e, pending, now);
    Ok(pending)
}

/// Resets `last_reward_time` too: any reward accrued since the last harvest is dropped.
pub fn set_start_time(e: &Env, cfg: &mut PoolConfig, start_time: u64) {
    cfg.start_time = start_time;
    cfg.last_reward_time = start_time;
    config::save(e, cfg);
    events::emit_start_time_set(e, start_time);
}

pub fn set_end_time(e: &Env, cfg: &mut PoolConfig, end_time: u64) {
    cfg.end_time = end_time;
    config::save(e, cfg);
    events::emit_end_time_set(e, end_time);
}

pub fn set_reward_rate(e: &Env, cfg: &mut PoolConfig, reward_rate: i128) -> Result<(), Error> {
    if reward_rate < 0 {
        return Err(Error::InvalidArgument);
    }
    cfg.reward_rate = reward_rate;
    config::save(e, cfg);
    events::emit_reward_rate_set(e, reward_rate);
    Ok(())
}
