//! Access control patterns and utilities
//!
//! Two named roles, each held by exactly one address: the `Owner`
//! (governance authority) and the `AuthorizedCaller` (privileged creator).
//! There is no hierarchy between them.

use super::storage::Storage;
use soroban_sdk::{Address, Env};

/// Named capabilities checked per entry point
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Owner,
    AuthorizedCaller,
}

/// Access control helper functions
pub struct AccessControl;

impl AccessControl {
    /// Current holder of a role, if the contract has been configured
    pub fn holder(e: &Env, role: Role) -> Option<Address> {
        match role {
            Role::Owner => Storage::get_owner(e),
            Role::AuthorizedCaller => Storage::get_authorized_caller(e),
        }
    }

    /// Assign a role to a new holder
    pub fn assign(e: &Env, role: Role, holder: &Address) {
        match role {
            Role::Owner => Storage::set_owner(e, holder),
            Role::AuthorizedCaller => Storage::set_authorized_caller(e, holder),
        }
    }

    /// Check if an address holds a role
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `role` - The role to check
    /// * `address` - The address to check
    pub fn has_role(e: &Env, role: Role, address: &Address) -> bool {
        Self::holder(e, role).map_or(false, |h| h == *address)
    }

    /// Require the caller's signature and report whether it holds `role`
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `caller` - The claimed caller address
    /// * `role` - The role required
    ///
    /// # Panics
    /// Traps in the host if `caller` has not authorized the invocation
    pub fn authorize_role(e: &Env, caller: &Address, role: Role) -> bool {
        caller.require_auth();
        Self::has_role(e, role, caller)
    }

    /// Require the caller's signature and report whether it owns a record
    pub fn authorize_record_owner(caller: &Address, owner: &Address) -> bool {
        caller.require_auth();
        *caller == *owner
    }
}
