//! Notifications emitted on every custody state change.
//!
//! Topics carry the record key; data carries enough fields to rebuild the
//! record's new state off-chain.

use crate::types::VestingSchedule;
use shared_utils::Events;
use soroban_sdk::{symbol_short, Address, Env};

// --- Pool locks ---

pub fn pool_locked(e: &Env, asset: &Address, owner: &Address, amount: i128, unlock_time: u64) {
    Events::emit_with_topics(
        e,
        (symbol_short!("PoolLock"), asset.clone()),
        (owner.clone(), amount, unlock_time),
    );
}

pub fn pool_withdrawn(e: &Env, asset: &Address, owner: &Address, released: i128, remaining: i128) {
    Events::emit_with_topics(
        e,
        (symbol_short!("PoolUnlk"), asset.clone()),
        (owner.clone(), released, remaining),
    );
}

pub fn pool_extended(e: &Env, asset: &Address, owner: &Address, unlock_time: u64) {
    Events::emit_with_topics(
        e,
        (symbol_short!("PoolExt"), asset.clone()),
        (owner.clone(), unlock_time),
    );
}

pub fn pool_transferred(e: &Env, asset: &Address, from: &Address, to: &Address) {
    Events::emit_with_topics(
        e,
        (symbol_short!("PoolXfer"), asset.clone()),
        (from.clone(), to.clone()),
    );
}

// --- Term locks ---

pub fn term_locked(e: &Env, asset: &Address, id: u64, owner: &Address, amount: i128, unlock_time: u64) {
    Events::emit_with_topics(
        e,
        (symbol_short!("TermLock"), asset.clone(), id),
        (owner.clone(), amount, unlock_time),
    );
}

pub fn term_withdrawn(e: &Env, asset: &Address, id: u64, owner: &Address, amount: i128) {
    Events::emit_with_topics(
        e,
        (symbol_short!("TermUnlk"), asset.clone(), id),
        (owner.clone(), amount),
    );
}

pub fn term_extended(e: &Env, asset: &Address, id: u64, owner: &Address, unlock_time: u64) {
    Events::emit_with_topics(
        e,
        (symbol_short!("TermExt"), asset.clone(), id),
        (owner.clone(), unlock_time),
    );
}

pub fn term_transferred(e: &Env, asset: &Address, id: u64, from: &Address, to: &Address) {
    Events::emit_with_topics(
        e,
        (symbol_short!("TermXfer"), asset.clone(), id),
        (from.clone(), to.clone()),
    );
}

// --- Vesting ---

pub fn vesting_created(e: &Env, asset: &Address, id: u64, schedule: &VestingSchedule) {
    Events::emit_with_topics(
        e,
        (symbol_short!("VestNew"), asset.clone(), id),
        (
            schedule.owner.clone(),
            schedule.amount,
            schedule.start_time,
            schedule.initial_unlock_date,
            schedule.release_interval,
            schedule.release_percent,
        ),
    );
}

pub fn vesting_claimed(e: &Env, asset: &Address, id: u64, owner: &Address, claimed: i128, total_withdrawn: i128) {
    Events::emit_with_topics(
        e,
        (symbol_short!("VestClaim"), asset.clone(), id),
        (owner.clone(), claimed, total_withdrawn),
    );
}

pub fn vesting_deactivated(e: &Env, asset: &Address, id: u64, owner: &Address, amount: i128) {
    Events::emit_with_topics(
        e,
        (symbol_short!("VestDone"), asset.clone(), id),
        (owner.clone(), amount),
    );
}

pub fn vesting_transferred(e: &Env, asset: &Address, id: u64, from: &Address, to: &Address) {
    Events::emit_with_topics(
        e,
        (symbol_short!("VestXfer"), asset.clone(), id),
        (from.clone(), to.clone()),
    );
}

// --- Fees ---

pub fn fee_paid(e: &Env, payer: &Address, treasury: &Address, amount: i128) {
    Events::emit_with_topics(
        e,
        (symbol_short!("FeePaid"), payer.clone()),
        (treasury.clone(), amount),
    );
}
