#![allow(deprecated)] // events().publish migration tracked separately

use soroban_sdk::{symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

/// Fired once when the contract is bootstrapped.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub owner: Address,
    pub token: Address,
    pub tier_count: u32,
    pub timestamp: u64,
}

/// Fired when an account opens or replaces its position.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEvent {
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when an account withdraws principal.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RedeemedEvent {
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Fired when an account takes its accrued interest and keeps its stake.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterestClaimedEvent {
    pub account: Address,
    pub interest: i128,
    pub timestamp: u64,
}

/// Fired when the owner installs a new reward tier table.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardTiersUpdatedEvent {
    pub tier_count: u32,
    pub timestamp: u64,
}

#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
    pub timestamp: u64,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, owner: Address, token: Address, tier_count: u32) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent {
            owner,
            token,
            tier_count,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_staked(env: &Env, account: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("STAKED"), account.clone()),
        StakedEvent {
            account,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_redeemed(env: &Env, account: Address, amount: i128) {
    env.events().publish(
        (symbol_short!("REDEEMED"), account.clone()),
        RedeemedEvent {
            account,
            amount,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_interest_claimed(env: &Env, account: Address, interest: i128) {
    env.events().publish(
        (symbol_short!("CLMD"), account.clone()),
        InterestClaimedEvent {
            account,
            interest,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_reward_tiers_updated(env: &Env, tier_count: u32) {
    env.events().publish(
        (symbol_short!("TIERS"),),
        RewardTiersUpdatedEvent {
            tier_count,
            timestamp: env.ledger().timestamp(),
        },
    );
}

pub fn publish_ownership_transferred(env: &Env, previous_owner: Address, new_owner: Address) {
    env.events().publish(
        (symbol_short!("OWN_XFER"), new_owner.clone()),
        OwnershipTransferredEvent {
            previous_owner,
            new_owner,
            timestamp: env.ledger().timestamp(),
        },
    );
}
