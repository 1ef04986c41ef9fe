//! Governance Integration Tests
//!
//! Every admin setter on the custody contract against a live timelock.

use crate::assert_contract_err;
use crate::harness::{TestHarness, GOVERNANCE_DELAY, LOCK_FEE, SECONDS_PER_DAY};
use custody_core::governance::actions;
use custody_core::CustodyError;
use governance_timelock::{ProposalStatus, GRACE_PERIOD};
use soroban_sdk::{testutils::Address as _, Address};

#[test]
fn test_each_setter_applies_after_delay() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let owner = &harness.accounts.owner;
    let new_caller = Address::generate(&harness.env);

    harness.propose(&actions::SET_AUTHORIZED_CALLER);
    harness.propose(&actions::SET_LOCK_FEE);
    harness.propose(&actions::SET_TOKEN_LOCK_FEE);
    harness.propose(&actions::SET_MIN_POOL_LOCK_TIME);
    harness.propose(&actions::SET_MIN_TOKEN_LOCK_TIME);
    harness.advance_time(GOVERNANCE_DELAY);

    custody.set_authorized_caller(owner, &new_caller);
    custody.set_lock_fee(owner, &1);
    custody.set_token_lock_fee(owner, &2);
    custody.set_min_pool_lock_time(owner, &(3 * SECONDS_PER_DAY));
    custody.set_min_token_lock_time(owner, &(4 * SECONDS_PER_DAY));

    let config = custody.get_config();
    assert_eq!(custody.get_authorized_caller(), new_caller);
    assert_eq!(config.lock_fee, 1);
    assert_eq!(config.token_lock_fee, 2);
    assert_eq!(config.min_pool_lock_time, 3 * SECONDS_PER_DAY);
    assert_eq!(config.min_token_lock_time, 4 * SECONDS_PER_DAY);
}

#[test]
fn test_consumed_proposal_is_marked_executed() {
    let harness = TestHarness::new();
    let custody = harness.custody();

    harness.approve(&actions::SET_LOCK_FEE);
    custody.set_lock_fee(&harness.accounts.owner, &7);

    let proposal = harness
        .timelock()
        .get_proposal(&harness.contracts.custody, &actions::SET_LOCK_FEE);
    assert_eq!(proposal.status, ProposalStatus::Executed);
    assert!(!harness
        .timelock()
        .is_executable(&harness.contracts.custody, &actions::SET_LOCK_FEE));
}

#[test]
fn test_expired_proposal_cannot_be_used() {
    let harness = TestHarness::new();
    let custody = harness.custody();

    harness.propose(&actions::SET_LOCK_FEE);
    harness.advance_time(GOVERNANCE_DELAY + GRACE_PERIOD + 1);

    assert_contract_err!(
        custody.try_set_lock_fee(&harness.accounts.owner, &7),
        CustodyError::GovernanceNotReady
    );
    assert_eq!(custody.get_lock_fee(), LOCK_FEE);
}

#[test]
fn test_cancelled_proposal_cannot_be_used() {
    let harness = TestHarness::new();
    let custody = harness.custody();

    harness.propose(&actions::SET_LOCK_FEE);
    harness.timelock().cancel(
        &harness.accounts.owner,
        &harness.contracts.custody,
        &actions::SET_LOCK_FEE,
    );
    harness.advance_time(GOVERNANCE_DELAY);

    assert_contract_err!(
        custody.try_set_lock_fee(&harness.accounts.owner, &7),
        CustodyError::GovernanceNotReady
    );
}

#[test]
fn test_non_owner_cannot_propose() {
    let harness = TestHarness::new();
    assert!(harness
        .timelock()
        .try_propose(
            &harness.accounts.attacker,
            &harness.contracts.custody,
            &actions::SET_OWNER
        )
        .is_err());
}

#[test]
fn test_ownership_handover() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let successor = harness.accounts.user2.clone();

    harness.approve(&actions::SET_OWNER);
    custody.set_owner(&harness.accounts.owner, &successor);
    assert_eq!(custody.get_owner(), successor);

    // harness.propose always proposes as the current owner.
    harness.approve(&actions::SET_LOCK_FEE);
    assert_contract_err!(
        custody.try_set_lock_fee(&harness.accounts.owner, &3),
        CustodyError::NotOwner
    );
    custody.set_lock_fee(&successor, &3);
    assert_eq!(custody.get_lock_fee(), 3);
}

#[test]
fn test_approval_does_not_bypass_validation() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let owner = &harness.accounts.owner;

    harness.approve(&actions::SET_MIN_TOKEN_LOCK_TIME);
    assert_contract_err!(
        custody.try_set_min_token_lock_time(owner, &0),
        CustodyError::InvalidDuration
    );
    assert_contract_err!(
        custody.try_set_owner(owner, &harness.contracts.custody),
        CustodyError::InvalidAddress
    );

    // The rejected call left the approval in place.
    custody.set_min_token_lock_time(owner, &SECONDS_PER_DAY);
}
