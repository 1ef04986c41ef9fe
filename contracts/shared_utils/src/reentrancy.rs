//! Call-scoped re-entrancy guard
//!
//! The guard flag lives in instance storage. `ReentrancyGuard::enter` sets it
//! and hands back a value that clears it again when dropped, so every exit
//! path of an entry point (including early `?` returns) releases the lock.
//!
//! A trap rolls the whole invocation back, flag included, so the guard does
//! not touch storage while a native test build is unwinding a host error.

use soroban_sdk::Env;

mod keys {
    use soroban_sdk::{symbol_short, Symbol};

    pub const REENTRANCY_GUARD: Symbol = symbol_short!("REENTRY");
}

/// Held for the duration of a state-mutating entry point
pub struct ReentrancyGuard {
    env: Env,
}

impl ReentrancyGuard {
    /// Check whether a guarded call is already in progress
    pub fn is_entered(e: &Env) -> bool {
        e.storage()
            .instance()
            .get::<_, bool>(&keys::REENTRANCY_GUARD)
            .unwrap_or(false)
    }

    /// Acquire the guard
    ///
    /// # Returns
    /// `None` if a guarded call is already in progress
    pub fn enter(e: &Env) -> Option<Self> {
        if Self::is_entered(e) {
            return None;
        }
        e.storage().instance().set(&keys::REENTRANCY_GUARD, &true);
        Some(Self { env: e.clone() })
    }
}

impl Drop for ReentrancyGuard {
    fn drop(&mut self) {
        #[cfg(not(target_family = "wasm"))]
        let unwinding = std::thread::panicking();
        #[cfg(target_family = "wasm")]
        let unwinding = false;
        if unwinding {
            return;
        }
        self.env.storage().instance().remove(&keys::REENTRANCY_GUARD);
    }
}
