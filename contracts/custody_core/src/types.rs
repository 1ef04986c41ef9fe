//! Custody records and configuration

use soroban_sdk::{contracttype, Address, Vec};

/// Deployment-time configuration, changed afterwards only through the
/// governance gate.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyConfig {
    /// Receives every collected fee
    pub treasury: Address,
    /// Token the creation fees are paid in
    pub fee_token: Address,
    /// Governance timelock consulted by admin setters
    pub timelock: Address,
    /// Fee for `create_pool_lock`
    pub lock_fee: i128,
    /// Fee for `create_term_lock` and `create_vesting`
    pub token_lock_fee: i128,
    pub min_pool_lock_time: u64,
    pub min_token_lock_time: u64,
}

/// Single custody slot per asset, created by the authorized caller.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolLock {
    pub amount: i128,
    pub unlock_time: u64,
    pub owner: Address,
}

/// One of many fixed-term locks for an asset.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TermLock {
    pub amount: i128,
    pub unlock_time: u64,
    pub owner: Address,
}

/// Release parameters supplied when a vesting schedule is created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingTerms {
    pub start_time: u64,
    /// Cliff: nothing is releasable before this timestamp
    pub initial_unlock_date: u64,
    /// Seconds per release period, at least one day
    pub release_interval: u64,
    /// Percentage of `amount` released per elapsed period, 1-100
    pub release_percent: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    pub amount: i128,
    pub start_time: u64,
    pub initial_unlock_date: u64,
    pub release_interval: u64,
    pub release_percent: u32,
    pub amount_withdrawn: i128,
    pub owner: Address,
    pub active: bool,
}

/// Every pool lock as parallel arrays, in the order assets were first locked.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolLockListing {
    pub assets: Vec<Address>,
    pub amounts: Vec<i128>,
    pub unlock_times: Vec<u64>,
    pub owners: Vec<Address>,
}
