//! Governance timelock contract.
//!
//! Two-phase gate for administrative changes on a governed contract. The
//! governed contract's owner proposes an action tag; once the delay has
//! elapsed the governed contract itself consumes the proposal and applies
//! the change. A proposal can be consumed once, and only inside the grace
//! window that follows its eta.

#![no_std]

use shared_utils::{ErrorHelper, Events, Storage, TimeUtils, SECONDS_PER_DAY};
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, symbol_short, Address, Env, Symbol, Val,
    Vec,
};

/// Shortest delay a timelock can be configured with
pub const MIN_DELAY: u64 = SECONDS_PER_DAY;

/// How long after its eta a proposal stays executable
pub const GRACE_PERIOD: u64 = 14 * SECONDS_PER_DAY;

// ============================================================================
// Errors
// ============================================================================

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TimelockError {
    /// Contract not initialized
    NotInitialized = 1,
    /// Already initialized
    AlreadyInitialized = 2,
    /// Proposer is not the governed contract's owner
    Unauthorized = 3,
    /// Delay below MIN_DELAY
    InvalidDelay = 4,
    /// A live proposal already exists for this action
    ProposalPending = 5,
    /// No pending proposal for this action
    ProposalNotFound = 6,
    /// Eta not reached yet
    DelayNotElapsed = 7,
    /// Grace window has passed
    ProposalExpired = 8,
    /// Eta does not fit in a timestamp
    ArithmeticOverflow = 9,
}

impl TimelockError {
    pub fn message(&self) -> &'static str {
        match self {
            TimelockError::NotInitialized => "Timelock not initialized",
            TimelockError::AlreadyInitialized => "Timelock already initialized",
            TimelockError::Unauthorized => "Unauthorized: proposer is not the governed owner",
            TimelockError::InvalidDelay => "Delay below minimum",
            TimelockError::ProposalPending => "Proposal already pending",
            TimelockError::ProposalNotFound => "Proposal not found",
            TimelockError::DelayNotElapsed => "Timelock delay not elapsed",
            TimelockError::ProposalExpired => "Proposal expired",
            TimelockError::ArithmeticOverflow => "Arithmetic overflow",
        }
    }
}

fn reject(e: &Env, err: TimelockError, context: &str) -> TimelockError {
    ErrorHelper::log_error_with_context(e, context, err.message());
    err
}

// ============================================================================
// Data types
// ============================================================================

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ProposalStatus {
    Pending,
    Executed,
    Cancelled,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposal {
    pub target: Address,
    pub action: Symbol,
    pub proposer: Address,
    pub proposed_at: u64,
    pub eta: u64,
    pub status: ProposalStatus,
}

impl Proposal {
    fn is_expired(&self, now: u64) -> bool {
        now > self.eta.saturating_add(GRACE_PERIOD)
    }

    fn is_live(&self, now: u64) -> bool {
        self.status == ProposalStatus::Pending && !self.is_expired(now)
    }
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Delay,
    Proposal(Address, Symbol),
}

// ============================================================================
// Storage helpers
// ============================================================================

fn read_delay(e: &Env) -> Result<u64, TimelockError> {
    e.storage()
        .instance()
        .get::<_, u64>(&DataKey::Delay)
        .ok_or_else(|| reject(e, TimelockError::NotInitialized, "read_delay"))
}

fn read_proposal(e: &Env, target: &Address, action: &Symbol) -> Option<Proposal> {
    e.storage()
        .persistent()
        .get(&DataKey::Proposal(target.clone(), action.clone()))
}

fn write_proposal(e: &Env, proposal: &Proposal) {
    let key = DataKey::Proposal(proposal.target.clone(), proposal.action.clone());
    e.storage().persistent().set(&key, proposal);
    Storage::bump_persistent(e, &key);
}

fn require_governed_owner(
    e: &Env,
    proposer: &Address,
    target: &Address,
    context: &str,
) -> Result<(), TimelockError> {
    proposer.require_auth();

    // Every governed contract exposes `get_owner() -> Address`.
    let result = e.try_invoke_contract::<Address, soroban_sdk::Error>(
        target,
        &symbol_short!("get_owner"),
        Vec::<Val>::new(e),
    );
    match result {
        Ok(Ok(owner)) if owner == *proposer => Ok(()),
        _ => Err(reject(e, TimelockError::Unauthorized, context)),
    }
}

// ============================================================================
// Contract
// ============================================================================

#[contract]
pub struct GovernanceTimelock;

#[contractimpl]
impl GovernanceTimelock {
    /// Initialize the timelock with the delay applied to every proposal.
    pub fn initialize(e: Env, delay: u64) -> Result<(), TimelockError> {
        if Storage::is_initialized(&e) {
            return Err(reject(&e, TimelockError::AlreadyInitialized, "initialize"));
        }
        if delay < MIN_DELAY {
            return Err(reject(&e, TimelockError::InvalidDelay, "initialize"));
        }
        e.storage().instance().set(&DataKey::Delay, &delay);
        Storage::set_initialized(&e);
        Storage::bump_instance(&e);
        Ok(())
    }

    /// Delay between proposal and earliest execution.
    pub fn get_delay(e: Env) -> Result<u64, TimelockError> {
        read_delay(&e)
    }

    /// Propose `action` on `target`. Only the target's current owner may
    /// propose. Returns the eta.
    pub fn propose(
        e: Env,
        proposer: Address,
        target: Address,
        action: Symbol,
    ) -> Result<u64, TimelockError> {
        let delay = read_delay(&e)?;
        require_governed_owner(&e, &proposer, &target, "propose")?;

        let now = TimeUtils::now(&e);
        if let Some(existing) = read_proposal(&e, &target, &action) {
            if existing.is_live(now) {
                return Err(reject(&e, TimelockError::ProposalPending, "propose"));
            }
        }

        let eta = now
            .checked_add(delay)
            .ok_or_else(|| reject(&e, TimelockError::ArithmeticOverflow, "propose"))?;
        let proposal = Proposal {
            target: target.clone(),
            action: action.clone(),
            proposer: proposer.clone(),
            proposed_at: now,
            eta,
            status: ProposalStatus::Pending,
        };
        write_proposal(&e, &proposal);
        Storage::bump_instance(&e);

        Events::emit_with_topics(
            &e,
            (symbol_short!("Proposed"), target, action),
            (proposer, eta),
        );
        Ok(eta)
    }

    /// Withdraw a pending proposal before it is consumed.
    pub fn cancel(
        e: Env,
        proposer: Address,
        target: Address,
        action: Symbol,
    ) -> Result<(), TimelockError> {
        read_delay(&e)?;
        require_governed_owner(&e, &proposer, &target, "cancel")?;

        let mut proposal = read_proposal(&e, &target, &action)
            .filter(|p| p.status == ProposalStatus::Pending)
            .ok_or_else(|| reject(&e, TimelockError::ProposalNotFound, "cancel"))?;
        proposal.status = ProposalStatus::Cancelled;
        write_proposal(&e, &proposal);

        Events::emit_with_topics(
            &e,
            (symbol_short!("Cancelled"), target, action),
            (proposer, TimeUtils::now(&e)),
        );
        Ok(())
    }

    /// Consume a matured proposal. Must be invoked by the governed contract
    /// itself; succeeds at most once per proposal.
    pub fn consume(e: Env, target: Address, action: Symbol) -> Result<(), TimelockError> {
        read_delay(&e)?;
        target.require_auth();

        let mut proposal = read_proposal(&e, &target, &action)
            .filter(|p| p.status == ProposalStatus::Pending)
            .ok_or_else(|| reject(&e, TimelockError::ProposalNotFound, "consume"))?;

        let now = TimeUtils::now(&e);
        if !TimeUtils::has_reached(&e, proposal.eta) {
            return Err(reject(&e, TimelockError::DelayNotElapsed, "consume"));
        }
        if proposal.is_expired(now) {
            return Err(reject(&e, TimelockError::ProposalExpired, "consume"));
        }

        proposal.status = ProposalStatus::Executed;
        write_proposal(&e, &proposal);

        Events::emit_with_topics(
            &e,
            (symbol_short!("Executed"), target, action),
            (proposal.proposer, now),
        );
        Ok(())
    }

    /// Whether `consume` would succeed right now.
    pub fn is_executable(e: Env, target: Address, action: Symbol) -> bool {
        let now = TimeUtils::now(&e);
        read_proposal(&e, &target, &action).map_or(false, |p| {
            p.status == ProposalStatus::Pending && now >= p.eta && !p.is_expired(now)
        })
    }

    pub fn get_proposal(
        e: Env,
        target: Address,
        action: Symbol,
    ) -> Result<Proposal, TimelockError> {
        read_proposal(&e, &target, &action)
            .ok_or_else(|| reject(&e, TimelockError::ProposalNotFound, "get_proposal"))
    }
}
