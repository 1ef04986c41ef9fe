//! Fee & treasury sink.
//!
//! Creation entry points attach an explicit `fee` that must equal the
//! configured fee exactly. The whole fee moves from the payer to the treasury
//! in the same invocation as the deposit, so a failed forward aborts both.

use crate::errors::{reject, CustodyError};
use crate::events;
use crate::types::CustodyConfig;
use soroban_sdk::{token, Address, Env};

/// Ceiling for either configured fee (1 000 units of a 7-decimal token)
pub const MAX_FEE: i128 = 1_000_0000000;

pub fn require_exact_fee(
    e: &Env,
    attached: i128,
    expected: i128,
    context: &str,
) -> Result<(), CustodyError> {
    if attached != expected {
        return Err(reject(e, CustodyError::FeeMismatch, context));
    }
    Ok(())
}

pub fn forward_to_treasury(e: &Env, config: &CustodyConfig, payer: &Address, fee: i128) {
    if fee == 0 {
        return;
    }
    token::Client::new(e, &config.fee_token).transfer(payer, &config.treasury, &fee);
    events::fee_paid(e, payer, &config.treasury, fee);
}
