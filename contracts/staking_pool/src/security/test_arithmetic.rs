//! Arithmetic Security Tests
//!
//! Boundary values for the fixed-point share math: overflow is reported as
//! `ArithmeticOverflow` instead of wrapping, and large but representable
//! positions still round-trip exactly.

use crate::test_helpers::{self, set_time};
use crate::Error;
use soroban_sdk::Env;

// ============================================================================
// OVERFLOW
// ============================================================================

#[test]
fn test_deposit_share_math_overflow() {
    let e = Env::default();
    let pool = test_helpers::setup_static_pool(&e);
    let seed = pool.new_staker(&e, 1_000);
    pool.client.stake(&seed, &1_000);

    let whale = pool.new_staker(&e, i128::MAX / 100);
    assert_eq!(
        pool.client.try_stake(&whale, &(i128::MAX / 100)),
        Err(Ok(Error::ArithmeticOverflow))
    );
    assert_eq!(pool.client.total_shares(), 1_000);
}

#[test]
fn test_price_overflow_reported() {
    let e = Env::default();
    let pool = test_helpers::setup_static_pool(&e);
    let user = pool.new_staker(&e, 1_000);
    pool.client.stake(&user, &1_000);
    // pool value beyond i128::MAX / SCALE
    pool.asset_admin.mint(&pool.id, &1_000_000_000_000_000_000_000);

    assert_eq!(
        pool.client.try_price_per_share(),
        Err(Ok(Error::ArithmeticOverflow))
    );
}

#[test]
fn test_pending_reward_overflow_reported() {
    let e = Env::default();
    let pool = test_helpers::setup_pool(&e, 0, u64::MAX, i128::MAX);
    set_time(&e, 2);
    assert_eq!(
        pool.client.try_pending_reward(),
        Err(Ok(Error::ArithmeticOverflow))
    );
    assert_eq!(
        pool.client.try_harvest(),
        Err(Ok(Error::ArithmeticOverflow))
    );
}

// ============================================================================
// LARGE BUT SAFE
// ============================================================================

#[test]
fn test_pool_beyond_price_range_still_trades() {
    let e = Env::default();
    let pool = test_helpers::setup_static_pool(&e);
    let alice = pool.new_staker(&e, 1_000);
    let bob = pool.new_staker(&e, 1_000);
    pool.client.stake(&alice, &1_000);
    pool.client.stake(&bob, &1_000);
    let donation: i128 = 1_000_000_000_000_000_000_000; // 1e21
    pool.asset_admin.mint(&pool.id, &donation);
    assert_eq!(
        pool.client.try_price_per_share(),
        Err(Ok(Error::ArithmeticOverflow))
    );

    // partial exit: (1e21 + 2000) * 500 / 2000
    let expected = 250_000_000_000_000_000_500_i128;
    assert_eq!(pool.client.unstake(&alice, &500), expected);
    assert_eq!(pool.asset.balance(&alice), expected);
    assert_eq!(pool.client.balance_of(&alice), 500);
    assert_eq!(pool.client.staked_amount(&alice), expected);

    // new deposit into the same pool
    let carol = pool.new_staker(&e, donation);
    let shares = pool.client.stake(&carol, &donation);
    assert_eq!(shares, 1_999);
    let snapshot = pool.client.staked_amount(&carol);
    assert!(snapshot > 0 && snapshot <= donation);
    assert_eq!(pool.client.get_user_info(&alice).staked_amount, expected);
}

#[test]
fn test_large_position_round_trip() {
    let e = Env::default();
    let pool = test_helpers::setup_static_pool(&e);
    let amount = 1_000_000_000_000_000_000_i128; // 1e18
    let alice = pool.new_staker(&e, amount);
    let bob = pool.new_staker(&e, amount);
    pool.client.stake(&alice, &amount);
    let shares = pool.client.stake(&bob, &amount);

    assert_eq!(shares, amount);
    assert_eq!(pool.client.unstake(&bob, &shares), amount);
    assert_eq!(pool.client.staked_amount(&alice), amount);
}

#[test]
fn test_single_unit_positions() {
    let e = Env::default();
    let pool = test_helpers::setup_static_pool(&e);
    let alice = pool.new_staker(&e, 1);
    assert_eq!(pool.client.stake(&alice, &1), 1);
    assert_eq!(pool.client.price_per_share(), crate::pricing::SCALE);
    assert_eq!(pool.client.unstake(&alice, &1), 1);
}

#[test]
fn test_dust_deposit_mints_nothing() {
    let e = Env::default();
    let pool = test_helpers::setup_static_pool(&e);
    let seed = pool.new_staker(&e, 10);
    pool.client.stake(&seed, &10);
    pool.asset_admin.mint(&pool.id, &90);

    // price is 10 per share: 9 units truncate to zero shares and stay in the pool
    let dust = pool.new_staker(&e, 9);
    assert_eq!(pool.client.stake(&dust, &9), 0);
    assert_eq!(pool.client.balance(), 109);
    assert_eq!(pool.client.balance_of(&dust), 0);
}
