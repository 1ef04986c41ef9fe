//! Custody errors (aligned with shared_utils::error_codes)
//!
//! Discriminants mirror `shared_utils::code` so logs and indexers can group
//! failures by range.

use shared_utils::{message_for_code, ErrorHelper};
use soroban_sdk::{contracterror, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CustodyError {
    // Validation (1-99)
    InvalidAmount = 1,
    InvalidDuration = 2,
    InvalidPercent = 3,
    InvalidInterval = 4,
    InvalidAddress = 5,
    FeeTooHigh = 6,
    InvalidUnlockDate = 7,

    // Authorization (100-199)
    NotLockOwner = 101,
    NotOwner = 102,
    NotAuthorizedCaller = 103,

    // State (200-299)
    AlreadyInitialized = 200,
    NotInitialized = 201,
    AlreadyLocked = 202,
    NothingLocked = 203,
    ReentrancyDetected = 204,
    VestingInactive = 205,
    StillLocked = 206,
    NothingToRelease = 207,
    GovernanceNotReady = 208,

    // Resource (300-399)
    NotFound = 300,
    FeeMismatch = 301,

    // System (400-499)
    ArithmeticOverflow = 400,
}

impl CustodyError {
    pub fn message(&self) -> &'static str {
        message_for_code(*self as u32)
    }
}

/// Log `err` against the entry point that raised it and hand it back for
/// returning.
pub(crate) fn reject(e: &Env, err: CustodyError, context: &str) -> CustodyError {
    ErrorHelper::log_error_with_context(e, context, err.message());
    err
}
