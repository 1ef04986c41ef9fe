#![no_std]

//! Shared utility library for the custody contracts
//!
//! This library provides the common building blocks used by the custody
//! engine and its governance timelock:
//! - Access control (owner and authorized-caller roles)
//! - Storage helpers (initialization flag, role holders, TTL bumps)
//! - Checked math (no wrapping, percentage and portion helpers)
//! - Time utilities (ledger time, deadlines, elapsed periods)
//! - Validation predicates
//! - Event emission patterns
//! - Error codes and error logging
//! - Re-entrancy guard

#[cfg(not(target_family = "wasm"))]
extern crate std;

pub mod access_control;
pub mod error_codes;
pub mod errors;
pub mod events;
pub mod math;
pub mod reentrancy;
pub mod storage;
pub mod time;
pub mod validation;


// Re-export commonly used items
pub use access_control::*;
pub use error_codes::*;
pub use errors::*;
pub use events::*;
pub use math::*;
pub use reentrancy::ReentrancyGuard;
pub use storage::Storage;
pub use time::*;
pub use validation::*;
