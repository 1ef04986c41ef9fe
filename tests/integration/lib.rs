//! Integration Test Suite for the custody contracts
//!
//! This module validates the custody engine together with its collaborators:
//! - Stellar asset contracts as custodied and fee tokens
//! - The governance timelock gating every admin setter
//! - End-to-end lock, vesting and fee flows
//! - Error scenarios and edge cases
//!
//! # Test Organization
//! - `harness`: Reusable test harness and helpers
//! - `token_tests`: Custody balances and fee forwarding
//! - `governance_tests`: Timelock-gated administration
//! - `e2e_tests`: End-to-end flow tests
//! - `error_tests`: Error and edge case tests

#![cfg(test)]

pub mod token_tests;
pub mod governance_tests;
pub mod e2e_tests;

pub use harness::*;
