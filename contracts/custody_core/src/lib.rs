//! Custody core contract.
//!
//! Takes irrevocable, time-gated custody of fungible tokens and releases them
//! only on pre-committed schedules:
//! - pool locks: one per asset, created by the authorized caller, 75% released
//!   per withdrawal after unlock
//! - term locks: public, many per asset, released in full once
//! - vesting schedules: public, many per asset, periodic release after a cliff
//!
//! Creation fees go to a fixed treasury. Administrative parameters change only
//! after the governance timelock has matured a proposal for them.

#![no_std]

use shared_utils::{AccessControl, Events, ReentrancyGuard, Role, SafeMath, Storage, Validation};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, Symbol, Vec};

mod errors;
mod events;
pub mod fees;
pub mod governance;
mod pool_lock;
mod storage;
mod term_lock;
mod types;
pub mod vesting;

pub use errors::CustodyError;
pub use types::{
    CustodyConfig, PoolLock, PoolLockListing, TermLock, VestingSchedule, VestingTerms,
};

use errors::reject;
use governance::actions;

/// Acquire the call-scoped re-entrancy guard for a mutating entry point.
pub(crate) fn acquire_guard(e: &Env, context: &str) -> Result<ReentrancyGuard, CustodyError> {
    ReentrancyGuard::enter(e).ok_or_else(|| reject(e, CustodyError::ReentrancyDetected, context))
}

fn require_owner(e: &Env, caller: &Address, context: &str) -> Result<(), CustodyError> {
    if !AccessControl::authorize_role(e, caller, Role::Owner) {
        return Err(reject(e, CustodyError::NotOwner, context));
    }
    Ok(())
}

fn validate_fee(e: &Env, fee: i128, context: &str) -> Result<(), CustodyError> {
    if !Validation::is_in_range(fee, 0, fees::MAX_FEE) {
        return Err(reject(e, CustodyError::FeeTooHigh, context));
    }
    Ok(())
}

fn validate_min_duration(e: &Env, duration: u64, context: &str) -> Result<(), CustodyError> {
    if duration == 0 {
        return Err(reject(e, CustodyError::InvalidDuration, context));
    }
    Ok(())
}

/// Gate, apply and announce a change to one configuration field.
fn apply_config_change<T, F>(
    e: &Env,
    caller: &Address,
    action: Symbol,
    param: Symbol,
    context: &str,
    update: F,
) -> Result<(), CustodyError>
where
    T: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
    F: FnOnce(&mut CustodyConfig) -> (T, T),
{
    let mut config = storage::read_config(e, context)?;
    require_owner(e, caller, context)?;
    governance::require_executable(e, &config.timelock, &action, context)?;

    let (old, new) = update(&mut config);
    storage::write_config(e, &config);
    Storage::bump_instance(e);
    Events::emit_param_updated(e, param, old, new);
    Ok(())
}

#[contract]
pub struct CustodyContract;

#[contractimpl]
impl CustodyContract {
    // ========================================================================
    // Initialization & configuration
    // ========================================================================

    /// Initialize the custody contract.
    ///
    /// # Arguments
    /// * `owner` - Governance authority for the gated setters
    /// * `authorized_caller` - Sole creator of pool locks
    /// * `config` - Treasury, fee token, timelock, fees and minimum durations
    pub fn initialize(
        e: Env,
        owner: Address,
        authorized_caller: Address,
        config: CustodyConfig,
    ) -> Result<(), CustodyError> {
        const CTX: &str = "initialize";
        if Storage::is_initialized(&e) {
            return Err(reject(&e, CustodyError::AlreadyInitialized, CTX));
        }
        validate_fee(&e, config.lock_fee, CTX)?;
        validate_fee(&e, config.token_lock_fee, CTX)?;
        validate_min_duration(&e, config.min_pool_lock_time, CTX)?;
        validate_min_duration(&e, config.min_token_lock_time, CTX)?;
        if !Validation::is_external_address(&e, &config.treasury) {
            return Err(reject(&e, CustodyError::InvalidAddress, CTX));
        }

        AccessControl::assign(&e, Role::Owner, &owner);
        AccessControl::assign(&e, Role::AuthorizedCaller, &authorized_caller);
        storage::write_config(&e, &config);
        Storage::set_initialized(&e);
        Storage::bump_instance(&e);

        Events::emit(
            &e,
            symbol_short!("Init"),
            (owner, authorized_caller, config.treasury),
        );
        Ok(())
    }

    pub fn get_owner(e: Env) -> Result<Address, CustodyError> {
        AccessControl::holder(&e, Role::Owner)
            .ok_or_else(|| reject(&e, CustodyError::NotInitialized, "get_owner"))
    }

    pub fn get_authorized_caller(e: Env) -> Result<Address, CustodyError> {
        AccessControl::holder(&e, Role::AuthorizedCaller)
            .ok_or_else(|| reject(&e, CustodyError::NotInitialized, "get_authorized_caller"))
    }

    pub fn get_config(e: Env) -> Result<CustodyConfig, CustodyError> {
        storage::read_config(&e, "get_config")
    }

    pub fn get_lock_fee(e: Env) -> Result<i128, CustodyError> {
        Ok(storage::read_config(&e, "get_lock_fee")?.lock_fee)
    }

    pub fn get_token_lock_fee(e: Env) -> Result<i128, CustodyError> {
        Ok(storage::read_config(&e, "get_token_lock_fee")?.token_lock_fee)
    }

    pub fn get_min_pool_lock_time(e: Env) -> Result<u64, CustodyError> {
        Ok(storage::read_config(&e, "get_min_pool_lock_time")?.min_pool_lock_time)
    }

    pub fn get_min_token_lock_time(e: Env) -> Result<u64, CustodyError> {
        Ok(storage::read_config(&e, "get_min_token_lock_time")?.min_token_lock_time)
    }

    pub fn get_treasury(e: Env) -> Result<Address, CustodyError> {
        Ok(storage::read_config(&e, "get_treasury")?.treasury)
    }

    // ========================================================================
    // Governance-gated administration
    // ========================================================================

    /// Rotate the authorized caller. Requires a matured `SET_AUTH` proposal.
    pub fn set_authorized_caller(
        e: Env,
        caller: Address,
        new_caller: Address,
    ) -> Result<(), CustodyError> {
        const CTX: &str = "set_authorized_caller";
        if !Validation::is_external_address(&e, &new_caller) {
            return Err(reject(&e, CustodyError::InvalidAddress, CTX));
        }
        let config = storage::read_config(&e, CTX)?;
        require_owner(&e, &caller, CTX)?;
        governance::require_executable(&e, &config.timelock, &actions::SET_AUTHORIZED_CALLER, CTX)?;

        let previous = AccessControl::holder(&e, Role::AuthorizedCaller)
            .ok_or_else(|| reject(&e, CustodyError::NotInitialized, CTX))?;
        AccessControl::assign(&e, Role::AuthorizedCaller, &new_caller);
        Storage::bump_instance(&e);
        Events::emit_param_updated(&e, symbol_short!("auth_clr"), previous, new_caller);
        Ok(())
    }

    /// Transfer contract ownership. Requires a matured `SET_OWNER` proposal.
    pub fn set_owner(e: Env, caller: Address, new_owner: Address) -> Result<(), CustodyError> {
        const CTX: &str = "set_owner";
        if !Validation::is_external_address(&e, &new_owner) {
            return Err(reject(&e, CustodyError::InvalidAddress, CTX));
        }
        let config = storage::read_config(&e, CTX)?;
        require_owner(&e, &caller, CTX)?;
        governance::require_executable(&e, &config.timelock, &actions::SET_OWNER, CTX)?;

        AccessControl::assign(&e, Role::Owner, &new_owner);
        Storage::bump_instance(&e);
        Events::emit_param_updated(&e, symbol_short!("owner"), caller, new_owner);
        Ok(())
    }

    /// Set the pool-lock fee (at most `MAX_FEE`). Requires `SET_LFEE`.
    pub fn set_lock_fee(e: Env, caller: Address, fee: i128) -> Result<(), CustodyError> {
        const CTX: &str = "set_lock_fee";
        validate_fee(&e, fee, CTX)?;
        apply_config_change(
            &e,
            &caller,
            actions::SET_LOCK_FEE,
            symbol_short!("lock_fee"),
            CTX,
            |c| (core::mem::replace(&mut c.lock_fee, fee), fee),
        )
    }

    /// Set the term-lock and vesting fee (at most `MAX_FEE`). Requires `SET_TFEE`.
    pub fn set_token_lock_fee(e: Env, caller: Address, fee: i128) -> Result<(), CustodyError> {
        const CTX: &str = "set_token_lock_fee";
        validate_fee(&e, fee, CTX)?;
        apply_config_change(
            &e,
            &caller,
            actions::SET_TOKEN_LOCK_FEE,
            symbol_short!("tok_fee"),
            CTX,
            |c| (core::mem::replace(&mut c.token_lock_fee, fee), fee),
        )
    }

    /// Set the minimum pool-lock duration (nonzero). Requires `SET_MINLP`.
    pub fn set_min_pool_lock_time(e: Env, caller: Address, duration: u64) -> Result<(), CustodyError> {
        const CTX: &str = "set_min_pool_lock_time";
        validate_min_duration(&e, duration, CTX)?;
        apply_config_change(
            &e,
            &caller,
            actions::SET_MIN_POOL_LOCK_TIME,
            symbol_short!("min_pool"),
            CTX,
            |c| (core::mem::replace(&mut c.min_pool_lock_time, duration), duration),
        )
    }

    /// Set the minimum term-lock duration (nonzero). Requires `SET_MINTK`.
    pub fn set_min_token_lock_time(e: Env, caller: Address, duration: u64) -> Result<(), CustodyError> {
        const CTX: &str = "set_min_token_lock_time";
        validate_min_duration(&e, duration, CTX)?;
        apply_config_change(
            &e,
            &caller,
            actions::SET_MIN_TOKEN_LOCK_TIME,
            symbol_short!("min_tok"),
            CTX,
            |c| (core::mem::replace(&mut c.min_token_lock_time, duration), duration),
        )
    }

    // ========================================================================
    // Pool locks
    // ========================================================================

    /// Lock `amount` of `asset` for `beneficiary`. Authorized caller only;
    /// `fee` must equal the pool-lock fee.
    pub fn create_pool_lock(
        e: Env,
        caller: Address,
        asset: Address,
        amount: i128,
        duration: u64,
        beneficiary: Address,
        fee: i128,
    ) -> Result<(), CustodyError> {
        pool_lock::create(&e, caller, asset, amount, duration, beneficiary, fee)
    }

    /// Push the unlock time back by `extra_time` seconds. Returns the new
    /// unlock time.
    pub fn extend_pool_lock(
        e: Env,
        caller: Address,
        asset: Address,
        extra_time: u64,
    ) -> Result<u64, CustodyError> {
        pool_lock::extend(&e, caller, asset, extra_time)
    }

    pub fn transfer_pool_lock_ownership(
        e: Env,
        caller: Address,
        asset: Address,
        new_owner: Address,
    ) -> Result<(), CustodyError> {
        pool_lock::transfer_ownership(&e, caller, asset, new_owner)
    }

    /// Release 75% of what the pool lock still holds. Returns the amount
    /// released.
    pub fn withdraw_pool_lock(e: Env, caller: Address, asset: Address) -> Result<i128, CustodyError> {
        pool_lock::withdraw(&e, caller, asset)
    }

    pub fn get_lock_info(e: Env, asset: Address) -> Result<PoolLock, CustodyError> {
        pool_lock::get(&e, &asset)
    }

    /// Every pool lock as parallel arrays.
    pub fn get_all_pool_locks(e: Env) -> PoolLockListing {
        pool_lock::listing(&e)
    }

    pub fn get_pool_lock_count(e: Env) -> u32 {
        storage::read_pool_assets(&e).len()
    }

    // ========================================================================
    // Term locks
    // ========================================================================

    /// Lock `amount` of `asset` for `duration` seconds. Returns the lock id.
    pub fn create_term_lock(
        e: Env,
        caller: Address,
        asset: Address,
        amount: i128,
        duration: u64,
        fee: i128,
    ) -> Result<u64, CustodyError> {
        term_lock::create(&e, caller, asset, amount, duration, fee)
    }

    pub fn extend_term_lock(
        e: Env,
        caller: Address,
        asset: Address,
        id: u64,
        extra_time: u64,
    ) -> Result<u64, CustodyError> {
        term_lock::extend(&e, caller, asset, id, extra_time)
    }

    pub fn transfer_term_lock_ownership(
        e: Env,
        caller: Address,
        asset: Address,
        id: u64,
        new_owner: Address,
    ) -> Result<(), CustodyError> {
        term_lock::transfer_ownership(&e, caller, asset, id, new_owner)
    }

    pub fn withdraw_term_lock(
        e: Env,
        caller: Address,
        asset: Address,
        id: u64,
    ) -> Result<i128, CustodyError> {
        term_lock::withdraw(&e, caller, asset, id)
    }

    pub fn get_term_lock(e: Env, asset: Address, id: u64) -> Result<TermLock, CustodyError> {
        term_lock::get(&e, &asset, id)
    }

    pub fn get_term_lock_ids(e: Env, asset: Address) -> Vec<u64> {
        storage::id_range(&e, storage::read_term_lock_count(&e, &asset))
    }

    pub fn get_term_locks(e: Env, asset: Address) -> Vec<TermLock> {
        term_lock::all_for_asset(&e, &asset)
    }

    // ========================================================================
    // Vesting
    // ========================================================================

    /// Create a vesting schedule over `amount` of `asset`. Returns the id.
    pub fn create_vesting(
        e: Env,
        caller: Address,
        asset: Address,
        amount: i128,
        terms: VestingTerms,
        fee: i128,
    ) -> Result<u64, CustodyError> {
        vesting::create(&e, caller, asset, amount, terms, fee)
    }

    pub fn get_releasable_amount(e: Env, asset: Address, id: u64) -> Result<i128, CustodyError> {
        vesting::releasable(&e, &asset, id)
    }

    /// Claim everything currently releasable. Returns the amount claimed.
    pub fn claim_vesting(e: Env, caller: Address, asset: Address, id: u64) -> Result<i128, CustodyError> {
        vesting::claim(&e, caller, asset, id)
    }

    pub fn transfer_vesting_ownership(
        e: Env,
        caller: Address,
        asset: Address,
        id: u64,
        new_owner: Address,
    ) -> Result<(), CustodyError> {
        vesting::transfer_ownership(&e, caller, asset, id, new_owner)
    }

    pub fn get_vesting(e: Env, asset: Address, id: u64) -> Result<VestingSchedule, CustodyError> {
        vesting::get(&e, &asset, id)
    }

    pub fn get_vesting_ids(e: Env, asset: Address) -> Vec<u64> {
        storage::id_range(&e, storage::read_vesting_count(&e, &asset))
    }

    pub fn get_vestings(e: Env, asset: Address) -> Vec<VestingSchedule> {
        vesting::all_for_asset(&e, &asset)
    }

    // ========================================================================
    // Aggregates
    // ========================================================================

    /// Everything still custodied for `asset` according to the records:
    /// the pool lock, live term locks and unclaimed vesting.
    pub fn get_total_locked(e: Env, asset: Address) -> Result<i128, CustodyError> {
        const CTX: &str = "get_total_locked";
        let overflow = || reject(&e, CustodyError::ArithmeticOverflow, CTX);

        let mut total = storage::read_pool_lock(&e, &asset).map_or(0, |lock| lock.amount);
        for lock in term_lock::all_for_asset(&e, &asset).iter() {
            total = SafeMath::add(total, lock.amount).ok_or_else(overflow)?;
        }
        for schedule in vesting::all_for_asset(&e, &asset).iter() {
            let unclaimed = SafeMath::sub(schedule.amount, schedule.amount_withdrawn)
                .ok_or_else(overflow)?;
            total = SafeMath::add(total, unclaimed).ok_or_else(overflow)?;
        }
        Ok(total)
    }
}
