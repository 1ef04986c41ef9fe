//! Event emission patterns and utilities

use soroban_sdk::{symbol_short, Env, IntoVal, Symbol, Topics, Val};

/// Event emission helper functions
pub struct Events;

impl Events {
    /// Emit a simple event with topic and data
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topic` - The event topic (Symbol)
    /// * `data` - The event data (tuple)
    pub fn emit<T>(e: &Env, topic: Symbol, data: T)
    where
        T: IntoVal<Env, Val>,
    {
        e.events().publish((topic,), data);
    }

    /// Emit an event with multiple topics
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `topics` - Tuple of topics (must implement Topics)
    /// * `data` - The event data (tuple)
    pub fn emit_with_topics<T, U>(e: &Env, topics: T, data: U)
    where
        T: Topics,
        U: IntoVal<Env, Val>,
    {
        e.events().publish(topics, data);
    }

    /// Emit a parameter change: `("Updated", param)` with `(old, new, timestamp)`
    ///
    /// # Arguments
    /// * `e` - The environment
    /// * `param` - Name of the parameter that changed
    /// * `old` - Previous value
    /// * `new` - New value
    pub fn emit_param_updated<T>(e: &Env, param: Symbol, old: T, new: T)
    where
        T: IntoVal<Env, Val>,
    {
        let data: (Val, Val, u64) = (old.into_val(e), new.into_val(e), e.ledger().timestamp());
        Self::emit_with_topics(e, (symbol_short!("Updated"), param), data);
    }
}
