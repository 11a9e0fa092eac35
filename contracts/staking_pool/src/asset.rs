//! Base-asset ledger access.
//!
//! The pool only needs balance reads, pulls from stakers, payouts, and the
//! privileged reward mint. The mint requires the pool to be the asset's admin.

use soroban_sdk::{token, Address, Env};

use crate::Error;

pub fn balance(e: &Env, asset: &Address) -> i128 {
    token::Client::new(e, asset).balance(&e.current_contract_address())
}

pub fn decimals(e: &Env, asset: &Address) -> u32 {
    token::Client::new(e, asset).decimals()
}

/// Pull `amount` from `from` using the allowance granted to the pool.
pub fn pull(e: &Env, asset: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    let pool = e.current_contract_address();
    match token::Client::new(e, asset).try_transfer_from(&pool, from, &pool, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::InsufficientBalanceOrAllowance),
    }
}

/// Pay out of the pool. A rejected transfer aborts the whole invocation.
pub fn send(e: &Env, asset: &Address, to: &Address, amount: i128) {
    token::Client::new(e, asset).transfer(&e.current_contract_address(), to, &amount);
}

pub fn mint_reward(e: &Env, asset: &Address, amount: i128) {
    token::StellarAssetClient::new(e, asset).mint(&e.current_contract_address(), &amount);
}
