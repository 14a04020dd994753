use soroban_sdk::{contracttype, log, symbol_short, Env, Symbol, Vec};

use crate::ContractError;

// ── Storage Keys ─────────────────────────────────────────────────────────────

const REWARD_TIERS: Symbol = symbol_short!("TIERS");

// ── Types ────────────────────────────────────────────────────────────────────

/// One reward bracket: a position held for at least `min_duration` seconds
/// earns `reward_bps` basis points on its principal.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardTier {
    pub min_duration: u64,
    pub reward_bps: u32,
}

// ── Validation ───────────────────────────────────────────────────────────────

/// Checks that `tiers` is non-empty and that both `min_duration` and
/// `reward_bps` strictly increase from one tier to the next.
pub fn validate(env: &Env, tiers: &Vec<RewardTier>) -> Result<(), ContractError> {
    if tiers.is_empty() {
        log!(env, "rejected empty reward tier table");
        return Err(ContractError::EmptyTierSet);
    }

    let mut prev: Option<RewardTier> = None;
    for (index, tier) in tiers.iter().enumerate() {
        if let Some(prev) = prev {
            if tier.min_duration <= prev.min_duration {
                log!(env, "tier {} duration does not increase", index as u32);
                return Err(ContractError::NonIncreasingDuration);
            }
            if tier.reward_bps <= prev.reward_bps {
                log!(env, "tier {} reward does not increase", index as u32);
                return Err(ContractError::NonIncreasingReward);
            }
        }
        prev = Some(tier);
    }
    Ok(())
}

// ── Storage ──────────────────────────────────────────────────────────────────

/// Validates `tiers` and, only if valid, replaces the whole stored table.
pub fn replace(env: &Env, tiers: &Vec<RewardTier>) -> Result<(), ContractError> {
    validate(env, tiers)?;
    env.storage().instance().set(&REWARD_TIERS, tiers);
    Ok(())
}

/// The stored table, or an empty one before initialisation.
pub fn load(env: &Env) -> Vec<RewardTier> {
    env.storage()
        .instance()
        .get(&REWARD_TIERS)
        .unwrap_or(Vec::new(env))
}

pub fn count(env: &Env) -> u32 {
    load(env).len()
}

pub fn at(env: &Env, index: u32) -> Result<RewardTier, ContractError> {
    load(env).get(index).ok_or(ContractError::IndexOutOfRange)
}

// ── Lookup ───────────────────────────────────────────────────────────────────

/// Rate earned by a position held for `duration` seconds.
///
/// Scans from the longest tier down and returns the first one whose
/// `min_duration` has been reached, so the longest qualifying tier wins.
/// Returns 0 when `duration` is shorter than every tier.
pub fn applicable_rate(tiers: &Vec<RewardTier>, duration: u64) -> u32 {
    let mut index = tiers.len();
    while index > 0 {
        index -= 1;
        if let Some(tier) = tiers.get(index) {
            if tier.min_duration <= duration {
                return tier.reward_bps;
            }
        }
    }
    0
}
