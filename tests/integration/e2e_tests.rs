//! End-to-End Flow Tests
//!
//! These tests verify complete user journeys involving:
//! - Token custody and release
//! - Fee forwarding to the treasury
//! - Governance-gated parameter changes
//! - Final settlement/state verification

use crate::harness::{
    TestHarness, DEFAULT_USER_BALANCE, LOCK_FEE, MIN_POOL_LOCK_TIME, SECONDS_PER_DAY,
    TOKEN_LOCK_FEE,
};
use custody_core::governance::actions;
use soroban_sdk::testutils::Events;

/// Test: Pool lock from creation through repeated partial release
#[test]
fn test_e2e_pool_lock_lifecycle() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let creator = &harness.accounts.authorized;
    let duration = 30 * SECONDS_PER_DAY;
    let created_at = harness.current_timestamp();

    // ========== PHASE 1: LOCK ==========
    harness.create_pool_lock(1000, duration, creator);

    let lock = custody.get_lock_info(&harness.contracts.token);
    assert_eq!(lock.amount, 1000);
    assert_eq!(lock.unlock_time, created_at + duration);
    assert_eq!(lock.owner, *creator);
    assert_eq!(harness.balance(&harness.contracts.custody), 1000);
    assert_eq!(harness.fee_balance(&harness.accounts.treasury), LOCK_FEE);

    // ========== PHASE 2: EARLY WITHDRAWAL ==========
    assert!(custody
        .try_withdraw_pool_lock(creator, &harness.contracts.token)
        .is_err());

    // ========== PHASE 3: RELEASE ==========
    harness.advance_days(30);
    assert_eq!(
        custody.withdraw_pool_lock(creator, &harness.contracts.token),
        750
    );
    assert_eq!(custody.get_lock_info(&harness.contracts.token).amount, 250);
    assert_eq!(harness.balance(creator), DEFAULT_USER_BALANCE - 250);

    // The remainder shrinks by three quarters each time but never empties.
    let mut remaining = 250;
    for _ in 0..10 {
        custody.withdraw_pool_lock(creator, &harness.contracts.token);
        let next = custody.get_lock_info(&harness.contracts.token).amount;
        assert!(next > 0);
        assert!(next <= remaining);
        remaining = next;
    }
    assert_eq!(harness.balance(&harness.contracts.custody), remaining);
}

/// Test: Public term lock with an extension and a single full release
#[test]
fn test_e2e_term_lock_lifecycle() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let user = &harness.accounts.user1;
    let token = &harness.contracts.token;

    let id = harness.create_term_lock(user, 500, SECONDS_PER_DAY);
    assert_eq!(id, 1);
    assert_eq!(harness.balance(user), DEFAULT_USER_BALANCE - 500);
    assert_eq!(harness.fee_balance(user), DEFAULT_USER_BALANCE - TOKEN_LOCK_FEE);

    custody.extend_term_lock(user, token, &id, &SECONDS_PER_DAY);

    harness.advance_days(1);
    assert!(custody.try_withdraw_term_lock(user, token, &id).is_err());

    harness.advance_days(1);
    assert_eq!(custody.withdraw_term_lock(user, token, &id), 500);
    assert_eq!(harness.balance(user), DEFAULT_USER_BALANCE);
    assert!(custody.try_withdraw_term_lock(user, token, &id).is_err());
}

/// Test: Vesting schedule from cliff to full release and deactivation
#[test]
fn test_e2e_vesting_lifecycle() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let user = &harness.accounts.user1;
    let token = &harness.contracts.token;
    let created_at = harness.current_timestamp();

    let terms = harness.vesting_terms(10, SECONDS_PER_DAY, 10);
    let id = harness.create_vesting(user, 1000, &terms);

    harness.set_timestamp(created_at + 19 * SECONDS_PER_DAY);
    assert_eq!(custody.get_releasable_amount(token, &id), 900);
    assert_eq!(custody.claim_vesting(user, token, &id), 900);
    assert!(custody.get_vesting(token, &id).active);

    harness.set_timestamp(created_at + 20 * SECONDS_PER_DAY);
    assert_eq!(custody.get_releasable_amount(token, &id), 100);
    assert_eq!(custody.claim_vesting(user, token, &id), 100);

    let schedule = custody.get_vesting(token, &id);
    assert_eq!(schedule.amount_withdrawn, 1000);
    assert!(!schedule.active);
    assert_eq!(harness.balance(user), DEFAULT_USER_BALANCE);
    assert_eq!(harness.balance(&harness.contracts.custody), 0);
}

/// Test: Every registry shares one custodied balance without interference
#[test]
fn test_e2e_mixed_registries_share_one_asset() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let token = &harness.contracts.token;
    let user1 = &harness.accounts.user1;
    let user2 = &harness.accounts.user2;

    harness.create_pool_lock(4000, MIN_POOL_LOCK_TIME, user2);
    let t1 = harness.create_term_lock(user1, 1000, SECONDS_PER_DAY);
    let t2 = harness.create_term_lock(user2, 2000, 3 * SECONDS_PER_DAY);
    let v1 = harness.create_vesting(user1, 3000, &harness.vesting_terms(1, SECONDS_PER_DAY, 25));

    assert_eq!(custody.get_total_locked(token), 10_000);
    assert_eq!(harness.balance(&harness.contracts.custody), 10_000);
    assert_eq!(
        harness.fee_balance(&harness.accounts.treasury),
        LOCK_FEE + 3 * TOKEN_LOCK_FEE
    );

    harness.advance_days(3);
    assert_eq!(custody.withdraw_term_lock(user1, token, &t1), 1000);
    assert_eq!(custody.withdraw_term_lock(user2, token, &t2), 2000);
    assert_eq!(custody.claim_vesting(user1, token, &v1), 1500);

    harness.advance_days(4);
    assert_eq!(custody.withdraw_pool_lock(user2, token), 3000);

    assert_eq!(custody.get_total_locked(token), 1000 + 1500);
    assert_eq!(
        harness.balance(&harness.contracts.custody),
        custody.get_total_locked(token)
    );
}

/// Test: Ownership of each record kind travels with transfers
#[test]
fn test_e2e_record_transfers() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let token = &harness.contracts.token;
    let user1 = &harness.accounts.user1;
    let user2 = &harness.accounts.user2;

    harness.create_pool_lock(1000, MIN_POOL_LOCK_TIME, user1);
    let term = harness.create_term_lock(user1, 100, SECONDS_PER_DAY);
    let vest = harness.create_vesting(user1, 100, &harness.vesting_terms(0, SECONDS_PER_DAY, 100));

    custody.transfer_pool_lock_ownership(user1, token, user2);
    custody.transfer_term_lock_ownership(user1, token, &term, user2);
    custody.transfer_vesting_ownership(user1, token, &vest, user2);

    harness.advance_time(MIN_POOL_LOCK_TIME);
    assert!(custody.try_withdraw_pool_lock(user1, token).is_err());
    assert_eq!(custody.withdraw_pool_lock(user2, token), 750);
    assert_eq!(custody.withdraw_term_lock(user2, token, &term), 100);
    assert_eq!(custody.claim_vesting(user2, token, &vest), 100);
}

/// Test: A governed fee change applies only after the delay
#[test]
fn test_e2e_fee_change_through_governance() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let owner = &harness.accounts.owner;
    let new_fee = 25_0000000i128;

    let eta = harness.propose(&actions::SET_TOKEN_LOCK_FEE);
    assert!(custody.try_set_token_lock_fee(owner, &new_fee).is_err());

    harness.set_timestamp(eta);
    custody.set_token_lock_fee(owner, &new_fee);
    assert_eq!(custody.get_token_lock_fee(), new_fee);
    assert!(!harness.env.events().all().is_empty());

    let user = &harness.accounts.user1;
    assert!(custody
        .try_create_term_lock(user, &harness.contracts.token, &100, &SECONDS_PER_DAY, &TOKEN_LOCK_FEE)
        .is_err());
    custody.create_term_lock(user, &harness.contracts.token, &100, &SECONDS_PER_DAY, &new_fee);
    assert_eq!(harness.fee_balance(&harness.accounts.treasury), new_fee);
}

/// Test: Pool locks across several assets are enumerable
#[test]
fn test_e2e_pool_lock_enumeration() {
    let harness = TestHarness::new();
    let custody = harness.custody();
    let second = harness.new_asset();

    harness.create_pool_lock(1000, MIN_POOL_LOCK_TIME, &harness.accounts.user1);
    custody.create_pool_lock(
        &harness.accounts.authorized,
        &second,
        &2000,
        &(2 * MIN_POOL_LOCK_TIME),
        &harness.accounts.user2,
        &LOCK_FEE,
    );

    let listing = custody.get_all_pool_locks();
    assert_eq!(listing.assets.len(), 2);
    assert_eq!(listing.assets.get(1).unwrap(), second);
    assert_eq!(listing.amounts.get(1).unwrap(), 2000);
    assert_eq!(listing.owners.get(0).unwrap(), harness.accounts.user1);
    assert_eq!(custody.get_pool_lock_count(), 2);
}
