//! Governance gate.
//!
//! Admin setters never apply directly. Each one names a stable action tag and
//! asks the configured timelock to consume a matured proposal for it; the
//! delay and single-use bookkeeping live entirely in the timelock.

use crate::errors::{reject, CustodyError};
use soroban_sdk::{symbol_short, Address, Env, IntoVal, Symbol, Val, Vec};

/// Action tags, one per gated setter
pub mod actions {
    use soroban_sdk::{symbol_short, Symbol};

    pub const SET_AUTHORIZED_CALLER: Symbol = symbol_short!("SET_AUTH");
    pub const SET_OWNER: Symbol = symbol_short!("SET_OWNER");
    pub const SET_LOCK_FEE: Symbol = symbol_short!("SET_LFEE");
    pub const SET_TOKEN_LOCK_FEE: Symbol = symbol_short!("SET_TFEE");
    pub const SET_MIN_POOL_LOCK_TIME: Symbol = symbol_short!("SET_MINLP");
    pub const SET_MIN_TOKEN_LOCK_TIME: Symbol = symbol_short!("SET_MINTK");
}

/// Consume the matured proposal for `action`, or fail without side effects.
pub fn require_executable(
    e: &Env,
    timelock: &Address,
    action: &Symbol,
    context: &str,
) -> Result<(), CustodyError> {
    let mut args: Vec<Val> = Vec::new(e);
    args.push_back(e.current_contract_address().into_val(e));
    args.push_back(action.into_val(e));

    let result = e.try_invoke_contract::<(), soroban_sdk::Error>(
        timelock,
        &symbol_short!("consume"),
        args,
    );

    match result {
        Ok(Ok(())) => Ok(()),
        _ => Err(reject(e, CustodyError::GovernanceNotReady, context)),
    }
}
