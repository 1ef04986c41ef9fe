//! Term-lock registry: any number of independent fixed-term locks per asset.

use crate::errors::{reject, CustodyError};
use crate::types::TermLock;
use crate::{acquire_guard, events, fees, storage};
use shared_utils::{AccessControl, Storage, TimeUtils, Validation};
use soroban_sdk::{token, Address, Env, Vec};

pub fn create(
    e: &Env,
    caller: Address,
    asset: Address,
    amount: i128,
    duration: u64,
    fee: i128,
) -> Result<u64, CustodyError> {
    const CTX: &str = "create_term_lock";
    let _guard = acquire_guard(e, CTX)?;
    let config = storage::read_config(e, CTX)?;

    // CHECKS
    caller.require_auth();
    fees::require_exact_fee(e, fee, config.token_lock_fee, CTX)?;
    if !Validation::is_positive(amount) {
        return Err(reject(e, CustodyError::InvalidAmount, CTX));
    }
    if !Validation::is_at_least(duration, config.min_token_lock_time) {
        return Err(reject(e, CustodyError::InvalidDuration, CTX));
    }
    if !Validation::is_external_address(e, &asset) {
        return Err(reject(e, CustodyError::InvalidAddress, CTX));
    }
    let unlock_time = TimeUtils::deadline_after(e, duration)
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))?;

    // EFFECTS
    let id = storage::next_term_lock_id(e, &asset);
    let lock = TermLock {
        amount,
        unlock_time,
        owner: caller.clone(),
    };
    storage::write_term_lock(e, &asset, id, &lock);

    // INTERACTIONS
    token::Client::new(e, &asset).transfer(&caller, &e.current_contract_address(), &amount);
    fees::forward_to_treasury(e, &config, &caller, fee);

    Storage::bump_instance(e);
    events::term_locked(e, &asset, id, &caller, amount, unlock_time);
    Ok(id)
}

/// Load a lock the caller owns and that still holds tokens.
fn live_owned_lock(
    e: &Env,
    caller: &Address,
    asset: &Address,
    id: u64,
    context: &str,
) -> Result<TermLock, CustodyError> {
    let lock = storage::read_term_lock(e, asset, id)
        .ok_or_else(|| reject(e, CustodyError::NotFound, context))?;
    if !AccessControl::authorize_record_owner(caller, &lock.owner) {
        return Err(reject(e, CustodyError::NotLockOwner, context));
    }
    if lock.amount <= 0 {
        return Err(reject(e, CustodyError::NothingLocked, context));
    }
    Ok(lock)
}

pub fn extend(
    e: &Env,
    caller: Address,
    asset: Address,
    id: u64,
    extra_time: u64,
) -> Result<u64, CustodyError> {
    const CTX: &str = "extend_term_lock";
    let _guard = acquire_guard(e, CTX)?;
    storage::read_config(e, CTX)?;

    let mut lock = live_owned_lock(e, &caller, &asset, id, CTX)?;
    lock.unlock_time = lock
        .unlock_time
        .checked_add(extra_time)
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))?;
    storage::write_term_lock(e, &asset, id, &lock);

    events::term_extended(e, &asset, id, &lock.owner, lock.unlock_time);
    Ok(lock.unlock_time)
}

pub fn transfer_ownership(
    e: &Env,
    caller: Address,
    asset: Address,
    id: u64,
    new_owner: Address,
) -> Result<(), CustodyError> {
    const CTX: &str = "transfer_term_lock_ownership";
    let _guard = acquire_guard(e, CTX)?;
    storage::read_config(e, CTX)?;

    let mut lock = live_owned_lock(e, &caller, &asset, id, CTX)?;
    if !Validation::is_external_address(e, &new_owner) {
        return Err(reject(e, CustodyError::InvalidAddress, CTX));
    }
    let previous = lock.owner;
    lock.owner = new_owner.clone();
    storage::write_term_lock(e, &asset, id, &lock);

    events::term_transferred(e, &asset, id, &previous, &new_owner);
    Ok(())
}

/// Release the whole lock. The record is zeroed first, so a second call (or
/// a nested one from inside the token transfer) finds nothing to withdraw.
pub fn withdraw(e: &Env, caller: Address, asset: Address, id: u64) -> Result<i128, CustodyError> {
    const CTX: &str = "withdraw_term_lock";
    let _guard = acquire_guard(e, CTX)?;
    storage::read_config(e, CTX)?;

    // CHECKS
    let mut lock = live_owned_lock(e, &caller, &asset, id, CTX)?;
    if !TimeUtils::has_reached(e, lock.unlock_time) {
        return Err(reject(e, CustodyError::StillLocked, CTX));
    }

    // EFFECTS
    let released = lock.amount;
    lock.amount = 0;
    storage::write_term_lock(e, &asset, id, &lock);

    // INTERACTIONS
    token::Client::new(e, &asset).transfer(&e.current_contract_address(), &caller, &released);

    Storage::bump_instance(e);
    events::term_withdrawn(e, &asset, id, &caller, released);
    Ok(released)
}

pub fn get(e: &Env, asset: &Address, id: u64) -> Result<TermLock, CustodyError> {
    storage::read_term_lock(e, asset, id)
        .ok_or_else(|| reject(e, CustodyError::NotFound, "get_term_lock"))
}

pub fn all_for_asset(e: &Env, asset: &Address) -> Vec<TermLock> {
    let mut locks = Vec::new(e);
    for id in 1..=storage::read_term_lock_count(e, asset) {
        if let Some(lock) = storage::read_term_lock(e, asset, id) {
            locks.push_back(lock);
        }
    }
    locks
}
