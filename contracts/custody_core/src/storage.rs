//! Ledger layout for custody records.
//!
//! Configuration lives in instance storage. Records and the per-asset id
//! counters live in persistent storage. Ids start at 1, are never reused,
//! and every id in `1..=count` has a record, so the index is just the count.

use crate::errors::{reject, CustodyError};
use crate::types::{CustodyConfig, PoolLock, TermLock, VestingSchedule};
use shared_utils::Storage;
use soroban_sdk::{contracttype, Address, Env, Vec};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    PoolLock(Address),
    PoolAssets,
    TermLock(Address, u64),
    TermLockCount(Address),
    Vesting(Address, u64),
    VestingCount(Address),
}

// --- Configuration ---

pub fn read_config(e: &Env, context: &str) -> Result<CustodyConfig, CustodyError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or_else(|| reject(e, CustodyError::NotInitialized, context))
}

pub fn write_config(e: &Env, config: &CustodyConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}

// --- Pool locks ---

pub fn read_pool_lock(e: &Env, asset: &Address) -> Option<PoolLock> {
    e.storage()
        .persistent()
        .get(&DataKey::PoolLock(asset.clone()))
}

pub fn write_pool_lock(e: &Env, asset: &Address, lock: &PoolLock) {
    let key = DataKey::PoolLock(asset.clone());
    e.storage().persistent().set(&key, lock);
    Storage::bump_persistent(e, &key);
}

pub fn read_pool_assets(e: &Env) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&DataKey::PoolAssets)
        .unwrap_or(Vec::new(e))
}

pub fn push_pool_asset(e: &Env, asset: &Address) {
    let mut assets = read_pool_assets(e);
    assets.push_back(asset.clone());
    e.storage().persistent().set(&DataKey::PoolAssets, &assets);
    Storage::bump_persistent(e, &DataKey::PoolAssets);
}

// --- Term locks ---

pub fn read_term_lock(e: &Env, asset: &Address, id: u64) -> Option<TermLock> {
    e.storage()
        .persistent()
        .get(&DataKey::TermLock(asset.clone(), id))
}

pub fn write_term_lock(e: &Env, asset: &Address, id: u64, lock: &TermLock) {
    let key = DataKey::TermLock(asset.clone(), id);
    e.storage().persistent().set(&key, lock);
    Storage::bump_persistent(e, &key);
}

pub fn read_term_lock_count(e: &Env, asset: &Address) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::TermLockCount(asset.clone()))
        .unwrap_or(0)
}

/// Reserve the next term-lock id for `asset`.
pub fn next_term_lock_id(e: &Env, asset: &Address) -> u64 {
    let key = DataKey::TermLockCount(asset.clone());
    let id = read_term_lock_count(e, asset) + 1;
    e.storage().persistent().set(&key, &id);
    Storage::bump_persistent(e, &key);
    id
}

// --- Vesting schedules ---

pub fn read_vesting(e: &Env, asset: &Address, id: u64) -> Option<VestingSchedule> {
    e.storage()
        .persistent()
        .get(&DataKey::Vesting(asset.clone(), id))
}

pub fn write_vesting(e: &Env, asset: &Address, id: u64, schedule: &VestingSchedule) {
    let key = DataKey::Vesting(asset.clone(), id);
    e.storage().persistent().set(&key, schedule);
    Storage::bump_persistent(e, &key);
}

pub fn read_vesting_count(e: &Env, asset: &Address) -> u64 {
    e.storage()
        .persistent()
        .get(&DataKey::VestingCount(asset.clone()))
        .unwrap_or(0)
}

/// Reserve the next vesting id for `asset`.
pub fn next_vesting_id(e: &Env, asset: &Address) -> u64 {
    let key = DataKey::VestingCount(asset.clone());
    let id = read_vesting_count(e, asset) + 1;
    e.storage().persistent().set(&key, &id);
    Storage::bump_persistent(e, &key);
    id
}

/// Ids `1..=count` in creation order.
pub fn id_range(e: &Env, count: u64) -> Vec<u64> {
    let mut ids = Vec::new(e);
    for id in 1..=count {
        ids.push_back(id);
    }
    ids
}
