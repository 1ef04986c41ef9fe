//! Error logging helpers
//!
//! Contracts return their own `#[contracterror]` enums; these helpers record
//! the reason in the diagnostic log before the error is returned.

use soroban_sdk::{log, Env};

/// Error helper functions
pub struct ErrorHelper;

impl ErrorHelper {
    /// Log an error with the entry point it was raised from
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `context` - The entry point or helper name
    /// * `message` - The error message
    pub fn log_error_with_context(e: &Env, context: &str, message: &str) {
        log!(e, "Error [{}]: {}", context, message);
    }
}
