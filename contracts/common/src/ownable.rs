use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

const OWNER: Symbol = symbol_short!("OWNER");

// ── Core Functions ───────────────────────────────────────────────────────────

/// Records the owner identity. Only callable internally, during bootstrap.
pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

/// Returns the current owner, if one has been set.
pub fn get_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OWNER)
}

/// Guard predicate for owner-only operations.
pub fn is_owner(env: &Env, who: &Address) -> bool {
    match get_owner(env) {
        Some(owner) => owner == *who,
        None => false,
    }
}

/// Hands ownership to `new_owner`.
///
/// The caller must have already been authenticated via `require_auth()`.
///
/// Returns `true` on success, `false` if `caller` is not the current owner.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> bool {
    if !is_owner(env, caller) {
        return false;
    }
    set_owner(env, new_owner);
    true
}
