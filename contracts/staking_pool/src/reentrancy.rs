//! Whole-contract reentrancy guard.
//!
//! Penalty payouts call out to the asset contract before bookkeeping finishes, so
//! every mutating entry point runs under a single lock flag. A nested call into any
//! guarded entry point fails with `ReentrancyRejected`.

use soroban_sdk::{log, Env};

use crate::{DataKey, Error};

#[must_use]
pub fn is_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Locked)
        .unwrap_or(false)
}

pub fn acquire(e: &Env) -> Result<(), Error> {
    if is_locked(e) {
        log!(e, "reentrant call rejected");
        return Err(Error::ReentrancyRejected);
    }
    e.storage().instance().set(&DataKey::Locked, &true);
    Ok(())
}

pub fn release(e: &Env) {
    e.storage().instance().remove(&DataKey::Locked);
}

/// Run `f` while holding the lock. The lock is released on both outcomes; a failed
/// invocation is rolled back by the host regardless.
pub fn guarded<T>(e: &Env, f: impl FnOnce() -> Result<T, Error>) -> Result<T, Error> {
    acquire(e)?;
    let result = f();
    release(e);
    result
}
