//! Vesting registry: linear periodic release after a cliff.
//!
//! Releases are keyed off `initial_unlock_date` alone. `start_time` is stored
//! exactly as supplied and takes no part in the release formula.

use crate::errors::{reject, CustodyError};
use crate::types::{VestingSchedule, VestingTerms};
use crate::{acquire_guard, events, fees, storage};
use shared_utils::{AccessControl, SafeMath, Storage, TimeUtils, Validation, SECONDS_PER_DAY};
use soroban_sdk::{token, Address, Env, Vec};

/// Shortest allowed release interval
pub const MIN_RELEASE_INTERVAL: u64 = SECONDS_PER_DAY;

const FULL_PERCENT: u64 = 100;

/// Amount claimable from `schedule` at ledger time `now`.
///
/// `min(100, periods * release_percent)` percent of `amount`, rounded down,
/// minus what has already been withdrawn, never negative. Zero for inactive
/// schedules and before the cliff. `None` only on arithmetic overflow.
pub fn releasable_at(schedule: &VestingSchedule, now: u64) -> Option<i128> {
    if !schedule.active || now < schedule.initial_unlock_date {
        return Some(0);
    }
    let periods = TimeUtils::whole_periods(
        schedule.initial_unlock_date,
        now,
        schedule.release_interval,
    );
    let percent = periods
        .saturating_mul(schedule.release_percent as u64)
        .min(FULL_PERCENT) as u32;
    let vested = SafeMath::percent(schedule.amount, percent)?;
    Some(SafeMath::sub(vested, schedule.amount_withdrawn)?.max(0))
}

pub fn create(
    e: &Env,
    caller: Address,
    asset: Address,
    amount: i128,
    terms: VestingTerms,
    fee: i128,
) -> Result<u64, CustodyError> {
    const CTX: &str = "create_vesting";
    let _guard = acquire_guard(e, CTX)?;
    let config = storage::read_config(e, CTX)?;

    // CHECKS
    caller.require_auth();
    fees::require_exact_fee(e, fee, config.token_lock_fee, CTX)?;
    if !Validation::is_positive(amount) {
        return Err(reject(e, CustodyError::InvalidAmount, CTX));
    }
    if !Validation::is_valid_percent(terms.release_percent) {
        return Err(reject(e, CustodyError::InvalidPercent, CTX));
    }
    if !Validation::is_at_least(terms.release_interval, MIN_RELEASE_INTERVAL) {
        return Err(reject(e, CustodyError::InvalidInterval, CTX));
    }
    if terms.initial_unlock_date < terms.start_time {
        return Err(reject(e, CustodyError::InvalidUnlockDate, CTX));
    }
    if !Validation::is_external_address(e, &asset) {
        return Err(reject(e, CustodyError::InvalidAddress, CTX));
    }

    // EFFECTS
    let id = storage::next_vesting_id(e, &asset);
    let schedule = VestingSchedule {
        amount,
        start_time: terms.start_time,
        initial_unlock_date: terms.initial_unlock_date,
        release_interval: terms.release_interval,
        release_percent: terms.release_percent,
        amount_withdrawn: 0,
        owner: caller.clone(),
        active: true,
    };
    storage::write_vesting(e, &asset, id, &schedule);

    // INTERACTIONS
    token::Client::new(e, &asset).transfer(&caller, &e.current_contract_address(), &amount);
    fees::forward_to_treasury(e, &config, &caller, fee);

    Storage::bump_instance(e);
    events::vesting_created(e, &asset, id, &schedule);
    Ok(id)
}

pub fn releasable(e: &Env, asset: &Address, id: u64) -> Result<i128, CustodyError> {
    const CTX: &str = "get_releasable_amount";
    let schedule = storage::read_vesting(e, asset, id)
        .ok_or_else(|| reject(e, CustodyError::NotFound, CTX))?;
    releasable_at(&schedule, TimeUtils::now(e))
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))
}

/// Claim everything currently releasable. The schedule deactivates on the
/// claim that brings `amount_withdrawn` up to `amount`.
pub fn claim(e: &Env, caller: Address, asset: Address, id: u64) -> Result<i128, CustodyError> {
    const CTX: &str = "claim_vesting";
    let _guard = acquire_guard(e, CTX)?;
    storage::read_config(e, CTX)?;

    // CHECKS
    let mut schedule = storage::read_vesting(e, &asset, id)
        .ok_or_else(|| reject(e, CustodyError::NotFound, CTX))?;
    if !AccessControl::authorize_record_owner(&caller, &schedule.owner) {
        return Err(reject(e, CustodyError::NotLockOwner, CTX));
    }
    if !schedule.active {
        return Err(reject(e, CustodyError::VestingInactive, CTX));
    }
    let claimable = releasable_at(&schedule, TimeUtils::now(e))
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))?;
    if claimable <= 0 {
        return Err(reject(e, CustodyError::NothingToRelease, CTX));
    }

    // EFFECTS
    schedule.amount_withdrawn = SafeMath::add(schedule.amount_withdrawn, claimable)
        .ok_or_else(|| reject(e, CustodyError::ArithmeticOverflow, CTX))?;
    let completed = schedule.amount_withdrawn == schedule.amount;
    if completed {
        schedule.active = false;
    }
    storage::write_vesting(e, &asset, id, &schedule);

    // INTERACTIONS
    token::Client::new(e, &asset).transfer(&e.current_contract_address(), &caller, &claimable);

    Storage::bump_instance(e);
    events::vesting_claimed(e, &asset, id, &caller, claimable, schedule.amount_withdrawn);
    if completed {
        events::vesting_deactivated(e, &asset, id, &caller, schedule.amount);
    }
    Ok(claimable)
}

pub fn transfer_ownership(
    e: &Env,
    caller: Address,
    asset: Address,
    id: u64,
    new_owner: Address,
) -> Result<(), CustodyError> {
    const CTX: &str = "transfer_vesting_ownership";
    let _guard = acquire_guard(e, CTX)?;
    storage::read_config(e, CTX)?;

    let mut schedule = storage::read_vesting(e, &asset, id)
        .ok_or_else(|| reject(e, CustodyError::NotFound, CTX))?;
    if !AccessControl::authorize_record_owner(&caller, &schedule.owner) {
        return Err(reject(e, CustodyError::NotLockOwner, CTX));
    }
    if !schedule.active {
        return Err(reject(e, CustodyError::VestingInactive, CTX));
    }
    if !Validation::is_external_address(e, &new_owner) {
        return Err(reject(e, CustodyError::InvalidAddress, CTX));
    }
    let previous = schedule.owner;
    schedule.owner = new_owner.clone();
    storage::write_vesting(e, &asset, id, &schedule);

    events::vesting_transferred(e, &asset, id, &previous, &new_owner);
    Ok(())
}

pub fn get(e: &Env, asset: &Address, id: u64) -> Result<VestingSchedule, CustodyError> {
    storage::read_vesting(e, asset, id)
        .ok_or_else(|| reject(e, CustodyError::NotFound, "get_vesting"))
}

pub fn all_for_asset(e: &Env, asset: &Address) -> Vec<VestingSchedule> {
    let mut schedules = Vec::new(e);
    for id in 1..=storage::read_vesting_count(e, asset) {
        if let Some(schedule) = storage::read_vesting(e, asset, id) {
            schedules.push_back(schedule);
        }
    }
    schedules
}
