//! Change records emitted by the pool. Topic and data layouts are consumed by
//! off-chain indexers and must stay stable.

use soroban_sdk::{Address, Env, Symbol};

pub fn emit_stake(e: &Env, user: &Address, amount: i128, shares: i128) {
    e.events()
        .publish((Symbol::new(e, "stake"), user.clone()), (amount, shares));
}

pub fn emit_unstake(e: &Env, user: &Address, net_withdraw: i128, shares: i128) {
    e.events().publish(
        (Symbol::new(e, "unstake"), user.clone()),
        (net_withdraw, shares),
    );
}

pub fn emit_harvest(e: &Env, amount: i128, last_reward_time: u64) {
    e.events()
        .publish((Symbol::new(e, "harvest"),), (amount, last_reward_time));
}

pub fn emit_penalty_paid(e: &Env, destination: &Address, amount: i128) {
    e.events().publish(
        (Symbol::new(e, "penalty_paid"), destination.clone()),
        amount,
    );
}

pub fn emit_penalty_entry(
    e: &Env,
    name: &str,
    index: u32,
    destination: &Address,
    allocation: u64,
) {
    e.events().publish(
        (Symbol::new(e, name),),
        (index, destination.clone(), allocation),
    );
}

pub fn emit_penalty_percent_set(e: &Env, penalty_percent: u64) {
    e.events()
        .publish((Symbol::new(e, "penalty_percent_set"),), penalty_percent);
}

pub fn emit_start_time_set(e: &Env, start_time: u64) {
    e.events()
        .publish((Symbol::new(e, "start_time_set"),), start_time);
}

pub fn emit_end_time_set(e: &Env, end_time: u64) {
    e.events().publish((Symbol::new(e, "end_time_set"),), end_time);
}

pub fn emit_reward_rate_set(e: &Env, reward_rate: i128) {
    e.events()
        .publish((Symbol::new(e, "reward_rate_set"),), reward_rate);
}

pub fn emit_admin_changed(e: &Env, old_admin: &Address, new_admin: &Address) {
    e.events().publish(
        (Symbol::new(e, "admin_changed"),),
        (old_admin.clone(), new_admin.clone()),
    );
}

pub fn emit_share_mint(e: &Env, to: &Address, amount: i128) {
    e.events()
        .publish((Symbol::new(e, "mint"), to.clone()), amount);
}

pub fn emit_share_burn(e: &Env, from: &Address, amount: i128) {
    e.events()
        .publish((Symbol::new(e, "burn"), from.clone()), amount);
}

pub fn emit_share_transfer(e: &Env, from: &Address, to: &Address, amount: i128) {
    e.events().publish(
        (Symbol::new(e, "transfer"), from.clone(), to.clone()),
        amount,
    );
}
