//! Withdrawal Penalty Mechanism
//!
//! Charges `penalty_percent` of every withdrawal and routes it, in list order, to
//! the configured destinations. Each destination receives `allocation / PRECISION`
//! of the penalty. Allocations need not sum to 100%: whatever is not paid out stays
//! in the pool and raises the share price for the remaining stakers.

use soroban_sdk::{contracttype, log, Address, Env, Vec};

use crate::config::{self, PoolConfig};
use crate::pricing::{mul_div, PRECISION};
use crate::{asset, events, DataKey, Error};

/// Max penalty percent (10%).
pub const MAX_FEE: u64 = 100_000_000_000;

/// Max allocation of a single destination (100%).
pub const MAX_ALLOCATION_RATIO: u64 = PRECISION as u64;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PenaltyAllocation {
    pub destination: Address,
    /// Fraction of the penalty in `PRECISION` units.
    pub allocation: u64,
}

pub fn set_penalty_percent(e: &Env, cfg: &mut PoolConfig, penalty_percent: u64) -> Result<(), Error> {
    if penalty_percent > MAX_FEE {
        return Err(Error::InvalidArgument);
    }
    cfg.penalty_percent = penalty_percent;
    config::save(e, cfg);
    events::emit_penalty_percent_set(e, penalty_percent);
    Ok(())
}

/// Split a withdrawal into (penalty, net).
pub fn calculate_penalty(amount: i128, penalty_percent: u64) -> Result<(i128, i128), Error> {
    if penalty_percent == 0 || amount <= 0 {
        return Ok((0, amount));
    }
    let penalty = mul_div(amount, penalty_percent as i128, PRECISION)?;
    Ok((penalty, amount - penalty))
}

#[must_use]
pub fn list(e: &Env) -> Vec<PenaltyAllocation> {
    e.storage()
        .instance()
        .get(&DataKey::PenaltyList)
        .unwrap_or_else(|| Vec::new(e))
}

fn save_list(e: &Env, entries: &Vec<PenaltyAllocation>) {
    e.storage().instance().set(&DataKey::PenaltyList, entries);
    config::bump_instance(e);
}

fn validate(e: &Env, destination: &Address, allocation: u64) -> Result<(), Error> {
    if allocation > MAX_ALLOCATION_RATIO {
        return Err(Error::InvalidArgument);
    }
    // Paying the pool itself would be a no-op transfer.
    if *destination == e.current_contract_address() {
        return Err(Error::InvalidArgument);
    }
    Ok(())
}

/// Append an entry. Returns its index.
pub fn add_entry(e: &Env, destination: Address, allocation: u64) -> Result<u32, Error> {
    validate(e, &destination, allocation)?;
    let mut entries = list(e);
    let index = entries.len();
    entries.push_back(PenaltyAllocation {
        destination: destination.clone(),
        allocation,
    });
    save_list(e, &entries);
    events::emit_penalty_entry(e, "penalty_entry_added", index, &destination, allocation);
    Ok(index)
}

pub fn set_entry(e: &Env, index: u32, destination: Address, allocation: u64) -> Result<(), Error> {
    validate(e, &destination, allocation)?;
    let mut entries = list(e);
    if index >= entries.len() {
        return Err(Error::InvalidArgument);
    }
    entries.set(
        index,
        PenaltyAllocation {
            destination: destination.clone(),
            allocation,
        },
    );
    save_list(e, &entries);
    events::emit_penalty_entry(e, "penalty_entry_set", index, &destination, allocation);
    Ok(())
}

/// Order-preserving removal: later entries shift down by one.
pub fn remove_entry(e: &Env, index: u32) -> Result<PenaltyAllocation, Error> {
    let mut entries = list(e);
    let removed = entries.get(index).ok_or(Error::InvalidArgument)?;
    entries.remove(index);
    save_list(e, &entries);
    events::emit_penalty_entry(
        e,
        "penalty_entry_removed",
        index,
        &removed.destination,
        removed.allocation,
    );
    Ok(removed)
}

/// Pay each destination its allocation of `penalty_amount`. Payouts are capped at
/// what is left of the penalty, so the total never exceeds it even if allocations
/// sum past 100%. Returns the total paid; the rest stays in the pool.
pub fn distribute(e: &Env, base_asset: &Address, penalty_amount: i128) -> Result<i128, Error> {
    if penalty_amount <= 0 {
        return Ok(0);
    }
    let mut remaining = penalty_amount;
    for entry in list(e).iter() {
        let payout = mul_div(penalty_amount, entry.allocation as i128, PRECISION)?.min(remaining);
        if payout == 0 {
            continue;
        }
        asset::send(e, base_asset, &entry.destination, payout);
        log!(e, "penalty paid", entry.destination, payout);
        events::emit_penalty_paid(e, &entry.destination, payout);
        remaining -= payout;
    }
    Ok(penalty_amount - remaining)
}
