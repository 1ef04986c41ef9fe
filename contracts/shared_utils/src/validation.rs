//! Validation predicates for common input checks
//!
//! Predicates return `bool` so each contract can map a failed check onto its
//! own error enum.

use soroban_sdk::{Address, Env};

/// Validation utility functions
pub struct Validation;

impl Validation {
    /// Check that an amount is greater than zero
    pub fn is_positive(amount: i128) -> bool {
        amount > 0
    }

    /// Check that a release percentage is between 1 and 100 inclusive
    pub fn is_valid_percent(percent: u32) -> bool {
        (1..=100).contains(&percent)
    }

    /// Check that a value lies within `[min, max]`
    pub fn is_in_range(value: i128, min: i128, max: i128) -> bool {
        value >= min && value <= max
    }

    /// Check that a duration meets a minimum
    pub fn is_at_least(duration: u64, min: u64) -> bool {
        duration >= min
    }

    /// Check that an address can hold value on its own behalf.
    ///
    /// Soroban has no null address. The closest equivalent is the calling
    /// contract itself: tokens or ownership assigned to it can never be
    /// released again.
    pub fn is_external_address(e: &Env, address: &Address) -> bool {
        *address != e.current_contract_address()
    }
}
