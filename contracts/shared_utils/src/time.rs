//! Time utilities for timestamp and duration calculations

use soroban_sdk::Env;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Time utility functions for working with ledger timestamps and durations
pub struct TimeUtils;

impl TimeUtils {
    /// Get the current ledger timestamp
    pub fn now(e: &Env) -> u64 {
        e.ledger().timestamp()
    }

    /// Calculate a deadline `duration` seconds from now
    ///
    /// # Returns
    /// `None` if the deadline does not fit in a u64
    pub fn deadline_after(e: &Env, duration: u64) -> Option<u64> {
        Self::now(e).checked_add(duration)
    }

    /// Check if a timestamp has been reached (current time >= timestamp)
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `timestamp` - The timestamp to compare against
    pub fn has_reached(e: &Env, timestamp: u64) -> bool {
        Self::now(e) >= timestamp
    }

    /// Count whole `interval`s elapsed between `since` and `now`
    ///
    /// Returns 0 when `now` is before `since` or `interval` is zero.
    pub fn whole_periods(since: u64, now: u64, interval: u64) -> u64 {
        if interval == 0 || now < since {
            return 0;
        }
        (now - since) / interval
    }
}
