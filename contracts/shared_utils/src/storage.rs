//! Storage helper utilities for common storage patterns

use soroban_sdk::{Address, Env, IntoVal, Val};

/// Storage key constants
pub mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const OWNER: Symbol = symbol_short!("OWNER");
    pub const AUTHORIZED_CALLER: Symbol = symbol_short!("AUTH_CLR");
    pub const INITIALIZED: Symbol = symbol_short!("INIT");
}

/// Ledger-count lifetimes used when bumping entry TTLs.
///
/// Ledgers close roughly every five seconds, so a day is 17 280 ledgers.
pub mod ttl {
    pub const DAY_IN_LEDGERS: u32 = 17_280;

    pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
    pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

    pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
    pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;
}

/// Storage helper functions
pub struct Storage;

impl Storage {
    /// Check if a contract has been initialized
    ///
    /// # Arguments
    /// * `e` - The environment
    ///
    /// # Returns
    /// `true` if initialized, `false` otherwise
    pub fn is_initialized(e: &Env) -> bool {
        e.storage().instance().has(&keys::INITIALIZED)
    }

    /// Mark contract as initialized
    pub fn set_initialized(e: &Env) {
        e.storage().instance().set(&keys::INITIALIZED, &true);
    }

    /// Get the owner address, if one has been stored
    pub fn get_owner(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&keys::OWNER)
    }

    /// Set the owner address
    pub fn set_owner(e: &Env, owner: &Address) {
        e.storage().instance().set(&keys::OWNER, owner);
    }

    /// Get the authorized caller address, if one has been stored
    pub fn get_authorized_caller(e: &Env) -> Option<Address> {
        e.storage().instance().get::<_, Address>(&keys::AUTHORIZED_CALLER)
    }

    /// Set the authorized caller address
    pub fn set_authorized_caller(e: &Env, caller: &Address) {
        e.storage().instance().set(&keys::AUTHORIZED_CALLER, caller);
    }

    /// Keep the contract instance (and everything stored in it) alive
    pub fn bump_instance(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(ttl::INSTANCE_LIFETIME_THRESHOLD, ttl::INSTANCE_BUMP_AMOUNT);
    }

    /// Extend the TTL of a persistent entry that was just written or read
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `key` - The persistent storage key
    pub fn bump_persistent<K>(e: &Env, key: &K)
    where
        K: IntoVal<Env, Val>,
    {
        e.storage().persistent().extend_ttl(
            key,
            ttl::PERSISTENT_LIFETIME_THRESHOLD,
            ttl::PERSISTENT_BUMP_AMOUNT,
        );
    }
}
