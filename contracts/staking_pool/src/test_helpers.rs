//! Shared fixtures: a pool wired to a real Stellar asset it administers.

use crate::{StakingPool, StakingPoolClient};
use soroban_sdk::testutils::{Address as _, Events, Ledger};
use soroban_sdk::{token, Address, Env, IntoVal, String, Symbol, Val, Vec};

/// 1% in `PRECISION` units.
pub const ONE_PERCENT: u64 = 10_000_000_000;

pub struct Pool<'a> {
    pub client: StakingPoolClient<'a>,
    pub id: Address,
    pub admin: Address,
    pub asset_id: Address,
    pub asset: token::Client<'a>,
    pub asset_admin: token::StellarAssetClient<'a>,
}

impl<'a> Pool<'a> {
    /// Mint `amount` to `user` and approve the pool for their whole balance.
    pub fn fund(&self, user: &Address, amount: i128) {
        self.asset_admin.mint(user, &amount);
        let balance = self.asset.balance(user);
        self.asset.approve(user, &self.id, &balance, &1_000);
    }

    pub fn new_staker(&self, e: &Env, amount: i128) -> Address {
        let user = Address::generate(e);
        self.fund(&user, amount);
        user
    }
}

/// Register a pool and a Stellar asset whose admin is the pool itself.
pub fn setup_pool(e: &Env, start_time: u64, end_time: u64, reward_rate: i128) -> Pool<'_> {
    e.mock_all_auths();
    let id = e.register(StakingPool, ());
    let client = StakingPoolClient::new(e, &id);
    let asset_id = e
        .register_stellar_asset_contract_v2(id.clone())
        .address();
    let admin = Address::generate(e);
    client.initialize(
        &admin,
        &asset_id,
        &start_time,
        &end_time,
        &reward_rate,
        &String::from_str(e, "Staked Share"),
        &String::from_str(e, "sSHR"),
    );
    Pool {
        client,
        id,
        admin,
        asset: token::Client::new(e, &asset_id),
        asset_admin: token::StellarAssetClient::new(e, &asset_id),
        asset_id,
    }
}

/// Pool without reward emission.
pub fn setup_static_pool(e: &Env) -> Pool<'_> {
    setup_pool(e, 0, 0, 0)
}

pub fn set_time(e: &Env, timestamp: u64) {
    e.ledger().with_mut(|li| li.timestamp = timestamp);
}

/// Topics and data of the last event published by `contract`.
pub fn last_event_of(e: &Env, contract: &Address) -> (Vec<Val>, Val) {
    let mut found = None;
    for (id, topics, data) in e.events().all().iter() {
        if id == *contract {
            found = Some((topics, data));
        }
    }
    found.expect("no event from contract")
}

pub fn topic_name(e: &Env, topics: &Vec<Val>) -> Symbol {
    topics.get(0).unwrap().into_val(e)
}
