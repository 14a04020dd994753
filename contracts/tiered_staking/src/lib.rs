#![no_std]

pub mod events;
pub mod ledger;
pub mod rewards;
pub mod tiers;

use common::{ownable, reentrancy};
use soroban_sdk::{
    contract, contractimpl, symbol_short, token, Address, Env, String, Symbol, Vec,
};

pub use ledger::Position;
pub use tiers::RewardTier;

// ── Storage key constants ────────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const TOKEN: Symbol = symbol_short!("TOKEN");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

/// Strkey of the all-zero ed25519 account, which stands in for "no asset".
const ZERO_ACCOUNT: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidAmount = 4,
    InsufficientStake = 5,
    NoInterest = 6,
    InvalidToken = 7,
    EmptyTierSet = 8,
    NonIncreasingDuration = 9,
    NonIncreasingReward = 10,
    ReentrantCall = 11,
    IndexOutOfRange = 12,
    ArithmeticOverflow = 13,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct TieredStakingContract;

#[contractimpl]
impl TieredStakingContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the contract.
    ///
    /// * `owner` – identity allowed to replace the reward tiers.
    /// * `token` – SAC address of the asset that is staked and paid out.
    /// * `tiers` – initial reward tier table, validated like any replacement.
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        tiers: Vec<RewardTier>,
    ) -> Result<(), ContractError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::AlreadyInitialized);
        }
        if Self::is_null_token(&env, &token) {
            return Err(ContractError::InvalidToken);
        }

        tiers::replace(&env, &tiers)?;

        env.storage().instance().set(&INITIALIZED, &true);
        env.storage().instance().set(&TOKEN, &token);
        ownable::set_owner(&env, &owner);
        Self::extend_instance_ttl(&env);

        events::publish_initialized(&env, owner, token, tiers.len());

        Ok(())
    }

    // ── Staking ─────────────────────────────────────────────────────────────

    /// Deposit `amount` and (re)start the account's position.
    ///
    /// An existing position is settled first: its principal and accrued
    /// interest go back to the account in a single transfer, then the new
    /// deposit replaces it with a fresh clock.
    pub fn stake(env: Env, account: Address, amount: i128) -> Result<(), ContractError> {
        reentrancy::guarded(&env, ContractError::ReentrantCall, || {
            Self::require_initialized(&env)?;
            account.require_auth();

            if amount <= 0 {
                return Err(ContractError::InvalidAmount);
            }

            let token = token::Client::new(&env, &Self::token_address(&env)?);
            let custody = env.current_contract_address();
            let now = env.ledger().timestamp();

            // 1. Settle the previous position, principal and interest together.
            if let Some(existing) = ledger::get(&env, &account) {
                let interest = Self::accrued_interest(&env, &existing, now)?;
                let payout = existing
                    .amount
                    .checked_add(interest)
                    .ok_or(ContractError::ArithmeticOverflow)?;
                token.transfer(&custody, &account, &payout);
            }

            // 2. Pull the new deposit into custody.
            token.transfer(&account, &custody, &amount);

            // 3. Record the replacement position.
            ledger::set(
                &env,
                &account,
                &Position {
                    amount,
                    start_time: now,
                },
            );
            Self::extend_instance_ttl(&env);

            events::publish_staked(&env, account.clone(), amount);

            Ok(())
        })
    }

    /// Withdraw `amount` of principal plus the interest accrued on the whole
    /// position. Any remainder stays staked with its clock restarted.
    pub fn redeem(env: Env, account: Address, amount: i128) -> Result<(), ContractError> {
        reentrancy::guarded(&env, ContractError::ReentrantCall, || {
            Self::require_initialized(&env)?;
            account.require_auth();

            if amount <= 0 {
                return Err(ContractError::InvalidAmount);
            }

            // An absent position counts as a zero balance.
            let position = match ledger::get(&env, &account) {
                Some(position) if amount <= position.amount => position,
                _ => return Err(ContractError::InsufficientStake),
            };

            let now = env.ledger().timestamp();
            let interest = Self::accrued_interest(&env, &position, now)?;
            let payout = amount
                .checked_add(interest)
                .ok_or(ContractError::ArithmeticOverflow)?;

            // Effects before the transfer.
            let remaining = position.amount - amount;
            if remaining == 0 {
                ledger::delete(&env, &account);
            } else {
                ledger::set(
                    &env,
                    &account,
                    &Position {
                        amount: remaining,
                        start_time: now,
                    },
                );
            }
            Self::extend_instance_ttl(&env);

            let token = token::Client::new(&env, &Self::token_address(&env)?);
            token.transfer(&env.current_contract_address(), &account, &payout);

            events::publish_redeemed(&env, account.clone(), amount);

            Ok(())
        })
    }

    /// Pay out the interest accrued so far and restart the clock, leaving
    /// the principal staked. Returns the interest paid.
    pub fn claim_interest(env: Env, account: Address) -> Result<i128, ContractError> {
        reentrancy::guarded(&env, ContractError::ReentrantCall, || {
            Self::require_initialized(&env)?;
            account.require_auth();

            let position = ledger::get(&env, &account).ok_or(ContractError::NoInterest)?;

            let now = env.ledger().timestamp();
            let interest = Self::accrued_interest(&env, &position, now)?;
            if interest <= 0 {
                return Err(ContractError::NoInterest);
            }

            ledger::set(
                &env,
                &account,
                &Position {
                    amount: position.amount,
                    start_time: now,
                },
            );
            Self::extend_instance_ttl(&env);

            let token = token::Client::new(&env, &Self::token_address(&env)?);
            token.transfer(&env.current_contract_address(), &account, &interest);

            events::publish_interest_claimed(&env, account.clone(), interest);

            Ok(interest)
        })
    }

    // ── Admin functions ──────────────────────────────────────────────────────

    /// Replace the whole reward tier table. Owner only.
    ///
    /// Open positions are not settled; they are valued against the new
    /// table at their next settlement.
    pub fn update_reward_tiers(
        env: Env,
        caller: Address,
        tiers: Vec<RewardTier>,
    ) -> Result<(), ContractError> {
        reentrancy::guarded(&env, ContractError::ReentrantCall, || {
            Self::require_initialized(&env)?;
            caller.require_auth();
            Self::require_owner(&env, &caller)?;

            tiers::replace(&env, &tiers)?;
            Self::extend_instance_ttl(&env);

            events::publish_reward_tiers_updated(&env, tiers.len());

            Ok(())
        })
    }

    /// Hand the owner role to `new_owner`. Owner only.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        caller.require_auth();

        if !ownable::transfer_ownership(&env, &caller, &new_owner) {
            return Err(ContractError::Unauthorized);
        }

        events::publish_ownership_transferred(&env, caller, new_owner);

        Ok(())
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the account's active position, if any.
    pub fn get_position(env: Env, account: Address) -> Option<Position> {
        ledger::get(&env, &account)
    }

    /// Interest a claim would pay at the current ledger time.
    pub fn get_pending_interest(env: Env, account: Address) -> Result<i128, ContractError> {
        match ledger::get(&env, &account) {
            Some(position) => {
                Self::accrued_interest(&env, &position, env.ledger().timestamp())
            }
            None => Ok(0),
        }
    }

    pub fn get_reward_tiers(env: Env) -> Vec<RewardTier> {
        tiers::load(&env)
    }

    pub fn reward_tier_count(env: Env) -> u32 {
        tiers::count(&env)
    }

    pub fn get_reward_tier(env: Env, index: u32) -> Result<RewardTier, ContractError> {
        tiers::at(&env, index)
    }

    pub fn get_owner(env: Env) -> Result<Address, ContractError> {
        ownable::get_owner(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        Self::token_address(&env)
    }

    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// `true` only while a guarded operation is mid-flight.
    pub fn is_locked(env: Env) -> bool {
        reentrancy::is_locked(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    /// Guard: revert if the contract is not yet initialized.
    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    /// Guard: revert if `caller` is not the stored owner.
    fn require_owner(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !ownable::is_owner(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn token_address(env: &Env) -> Result<Address, ContractError> {
        env.storage()
            .instance()
            .get(&TOKEN)
            .ok_or(ContractError::NotInitialized)
    }

    fn is_null_token(env: &Env, token: &Address) -> bool {
        let zero = Address::from_string(&String::from_str(env, ZERO_ACCOUNT));
        *token == zero || *token == env.current_contract_address()
    }

    /// Interest owed on `position` at `now` under the current tier table.
    fn accrued_interest(env: &Env, position: &Position, now: u64) -> Result<i128, ContractError> {
        let duration = rewards::elapsed(position.start_time, now);
        let rate = tiers::applicable_rate(&tiers::load(env), duration);
        rewards::compute_interest(position.amount, rate).ok_or(ContractError::ArithmeticOverflow)
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod test_admin;
