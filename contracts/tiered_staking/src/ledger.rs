use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

// Per-account persistent entries use tuple keys: (prefix, account)
const POSITION: Symbol = symbol_short!("POS");

const TTL_THRESHOLD: u32 = 5184000;
const TTL_EXTEND_TO: u32 = 10368000;

// ── Types ────────────────────────────────────────────────────────────────────

/// An account's single active stake.
///
/// Only stored while `amount > 0`; `start_time` is the timestamp of the last
/// settlement and drives interest accrual.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub amount: i128,
    pub start_time: u64,
}

// ── Storage Helpers ──────────────────────────────────────────────────────────

fn position_key(account: &Address) -> (Symbol, Address) {
    (POSITION, account.clone())
}

fn extend_ttl(env: &Env, key: &(Symbol, Address)) {
    env.storage()
        .persistent()
        .extend_ttl(key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

// ── Core Functions ───────────────────────────────────────────────────────────

pub fn get(env: &Env, account: &Address) -> Option<Position> {
    let key = position_key(account);
    let position: Option<Position> = env.storage().persistent().get(&key);
    if position.is_some() {
        extend_ttl(env, &key);
    }
    position
}

/// Stores `position` for `account`, replacing any previous one.
pub fn set(env: &Env, account: &Address, position: &Position) {
    let key = position_key(account);
    env.storage().persistent().set(&key, position);
    extend_ttl(env, &key);
}

pub fn delete(env: &Env, account: &Address) {
    env.storage().persistent().remove(&position_key(account));
}
