//! Standardized error codes and messages for the custody contracts.
//!
//! Error code ranges (for documentation and off-chain indexing):
//! - Validation: 1-99 (invalid input, out of range)
//! - Authorization: 100-199 (wrong caller for the entry point or record)
//! - State: 200-299 (wrong state, already processed, time gate not met)
//! - Resource: 300-399 (record not found, value mismatch)
//! - System: 400-499 (arithmetic failures, cross-contract failures)

/// Standard error code constants (numeric only; contracts use their own contracterror enums).
pub mod code {
    // Validation (1-99)
    pub const INVALID_AMOUNT: u32 = 1;
    pub const INVALID_DURATION: u32 = 2;
    pub const INVALID_PERCENT: u32 = 3;
    pub const INVALID_INTERVAL: u32 = 4;
    pub const INVALID_ADDRESS: u32 = 5;
    pub const FEE_TOO_HIGH: u32 = 6;
    pub const INVALID_UNLOCK_DATE: u32 = 7;

    // Authorization (100-199)
    pub const NOT_LOCK_OWNER: u32 = 101;
    pub const NOT_OWNER: u32 = 102;
    pub const NOT_AUTHORIZED_CALLER: u32 = 103;

    // State (200-299)
    pub const ALREADY_INITIALIZED: u32 = 200;
    pub const NOT_INITIALIZED: u32 = 201;
    pub const ALREADY_LOCKED: u32 = 202;
    pub const NOTHING_LOCKED: u32 = 203;
    pub const REENTRANCY: u32 = 204;
    pub const NOT_ACTIVE: u32 = 205;
    pub const STILL_LOCKED: u32 = 206;
    pub const NOTHING_TO_RELEASE: u32 = 207;
    pub const GOVERNANCE_NOT_READY: u32 = 208;

    // Resource (300-399)
    pub const NOT_FOUND: u32 = 300;
    pub const FEE_MISMATCH: u32 = 301;

    // System (400-499)
    pub const ARITHMETIC_OVERFLOW: u32 = 400;
}

/// Returns a human-readable message for a given error code (for logging).
pub fn message_for_code(code: u32) -> &'static str {
    match code {
        1 => "Invalid amount: must be greater than zero",
        2 => "Invalid duration: below the configured minimum",
        3 => "Invalid percent: must be between 1 and 100",
        4 => "Invalid release interval: must be at least one day",
        5 => "Invalid address",
        6 => "Fee exceeds the maximum allowed",
        7 => "Invalid unlock date: before start time",
        101 => "Caller is not the lock owner",
        102 => "Caller is not the contract owner",
        103 => "Caller is not the authorized caller",
        200 => "Contract already initialized",
        201 => "Contract not initialized",
        202 => "Already locked",
        203 => "Nothing locked",
        204 => "Reentrancy detected",
        205 => "Vesting not active",
        206 => "Still locked",
        207 => "Nothing to release",
        208 => "Governance action not executable",
        300 => "Record not found",
        301 => "Attached fee does not match the configured fee",
        400 => "Arithmetic overflow",
        _ => "Unknown error",
    }
}
