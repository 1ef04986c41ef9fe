//! Pool-lock registry: one custody slot per asset.
//!
//! Only the authorized caller creates pool locks. After `unlock_time` the
//! owner may withdraw repeatedly; each withdrawal releases three quarters of
//! whatever is still held (rounded down) and the rest stays in custody.

use crate::errors::{reject, CustodyError};
use crate::types::{PoolLock, PoolLockListing};
use crate::{acquire_guard, events, fees, storage};
use shared_utils::{AccessControl, Role, SafeMath, Storage, TimeUtils, Validation};
use soroban_sdk::{token, Address, Env, Vec};

const RELEASE_NUMERATOR: i128 = 3;
const RELEASE_DENOMINATOR: i128 = 4;

/// Amount one withdrawal releases from a lock currently holding `remaining`.
pub fn release_amount(remaining: i128) -> Option<i128> {
    SafeMath::portion(remaining, RELEASE_NUMERATOR, RELEASE_DENOMINATOR)
}

pub fn create(
    e: &Env,
    caller: Address,
    asset: Address,
    amount: i128,
    duration: u64,
    beneficiary: Address,
    fee: i128,
) -> Result<(), CustodyError> {
    const CTX: &str = "create_pool_lock";
    let _guard = acquire_guard(e, CTX)?;
    let config = storage::read_config(e, CTX)?;

    // CHECKS
    if !AccessControl::authorize_role(e, &caller, Role::AuthorizedCaller) {
        return Err(reject(e, CustodyError::NotAuthorizedCaller, CTX));
    }
    fees::require_exact_fee(e, fee, config.lock_fee, CTX)?;
    if !Validation::is_positive(amount) {
        return Err(reject(e, CustodyError::InvalidAmount, CTX));
    }
    if !Validation::is_at_least(duration, config.min_pool_lock_time) {
        return Err(reject(e, CustodyError::InvalidDuration, CTX));
    }
    if !Validation::is_external_address(e, &asset)
        || !Validation::is_external_address(e, &beneficiary)
    {
        return Err(reject(e, CustodyError::InvalidAddress, CTX));
    }

    let existing = storage::read_pool_lock(e, &asset);
    if existing.as_ref().map_or(false, |lock| lock.amount > 0) {
        return Err(reject(e, CustodyError::AlreadyLocked, CTX));
    }
    let unlock_time = TimeUtils::deadline_after(e, duration)
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))?;

    // EFFECTS
    let lock = PoolLock {
        amount,
        unlock_time,
        owner: beneficiary.clone(),
    };
    storage::write_pool_lock(e, &asset, &lock);
    if existing.is_none() {
        storage::push_pool_asset(e, &asset);
    }

    // INTERACTIONS
    token::Client::new(e, &asset).transfer(&caller, &e.current_contract_address(), &amount);
    fees::forward_to_treasury(e, &config, &caller, fee);

    Storage::bump_instance(e);
    events::pool_locked(e, &asset, &beneficiary, amount, unlock_time);
    Ok(())
}

fn owned_lock(e: &Env, caller: &Address, asset: &Address, context: &str) -> Result<PoolLock, CustodyError> {
    let lock = storage::read_pool_lock(e, asset)
        .ok_or_else(|| reject(e, CustodyError::NotFound, context))?;
    if !AccessControl::authorize_record_owner(caller, &lock.owner) {
        return Err(reject(e, CustodyError::NotLockOwner, context));
    }
    Ok(lock)
}

pub fn extend(e: &Env, caller: Address, asset: Address, extra_time: u64) -> Result<u64, CustodyError> {
    const CTX: &str = "extend_pool_lock";
    let _guard = acquire_guard(e, CTX)?;
    storage::read_config(e, CTX)?;

    let mut lock = owned_lock(e, &caller, &asset, CTX)?;
    lock.unlock_time = lock
        .unlock_time
        .checked_add(extra_time)
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))?;
    storage::write_pool_lock(e, &asset, &lock);

    events::pool_extended(e, &asset, &lock.owner, lock.unlock_time);
    Ok(lock.unlock_time)
}

pub fn transfer_ownership(
    e: &Env,
    caller: Address,
    asset: Address,
    new_owner: Address,
) -> Result<(), CustodyError> {
    const CTX: &str = "transfer_pool_lock_ownership";
    let _guard = acquire_guard(e, CTX)?;
    storage::read_config(e, CTX)?;

    let mut lock = owned_lock(e, &caller, &asset, CTX)?;
    if !Validation::is_external_address(e, &new_owner) {
        return Err(reject(e, CustodyError::InvalidAddress, CTX));
    }
    let previous = lock.owner;
    lock.owner = new_owner.clone();
    storage::write_pool_lock(e, &asset, &lock);

    events::pool_transferred(e, &asset, &previous, &new_owner);
    Ok(())
}

/// Release 75% of the remaining amount to the owner. Returns the amount
/// released, which is 0 once a single unit remains.
pub fn withdraw(e: &Env, caller: Address, asset: Address) -> Result<i128, CustodyError> {
    const CTX: &str = "withdraw_pool_lock";
    let _guard = acquire_guard(e, CTX)?;
    storage::read_config(e, CTX)?;

    // CHECKS
    let mut lock = owned_lock(e, &caller, &asset, CTX)?;
    if !TimeUtils::has_reached(e, lock.unlock_time) {
        return Err(reject(e, CustodyError::StillLocked, CTX));
    }
    if lock.amount <= 0 {
        return Err(reject(e, CustodyError::NothingLocked, CTX));
    }

    // EFFECTS
    let released = release_amount(lock.amount)
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))?;
    lock.amount = SafeMath::sub(lock.amount, released)
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))?;
    storage::write_pool_lock(e, &asset, &lock);

    // INTERACTIONS
    if released > 0 {
        token::Client::new(e, &asset).transfer(&e.current_contract_address(), &caller, &released);
    }

    Storage::bump_instance(e);
    events::pool_withdrawn(e, &asset, &caller, released, lock.amount);
    Ok(released)
}

pub fn get(e: &Env, asset: &Address) -> Result<PoolLock, CustodyError> {
    storage::read_pool_lock(e, asset)
        .ok_or_else(|| reject(e, CustodyError::NotFound, "get_lock_info"))
}

pub fn listing(e: &Env) -> PoolLockListing {
    let assets = storage::read_pool_assets(e);
    let mut amounts = Vec::new(e);
    let mut unlock_times = Vec::new(e);
    let mut owners = Vec::new(e);

    for asset in assets.iter() {
        if let Some(lock) = storage::read_pool_lock(e, &asset) {
            amounts.push_back(lock.amount);
            unlock_times.push_back(lock.unlock_time);
            owners.push_back(lock.owner);
        }
    }

    PoolLockListing {
        assets,
        amounts,
        unlock_times,
        owners,
    }
}
