use soroban_sdk::{log, symbol_short, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────────────────────

/// Lives in temporary storage only while an [`ExecutionGuard`] is alive.
const EXEC_LOCK: Symbol = symbol_short!("EXEC_LCK");

// ── Guard ────────────────────────────────────────────────────────────────────

/// Scoped reentrancy lock shared by every guarded entry point of a contract.
///
/// Acquiring the guard sets the lock; dropping it clears the lock. Because the
/// release happens in `Drop`, every exit path of the guarded body (success,
/// early return through `?`, or an explicit `Err`) leaves the lock cleared.
///
/// A nested attempt that finds the lock held never receives a guard, so it
/// cannot release the lock owned by the outer call.
pub struct ExecutionGuard {
    env: Env,
}

impl ExecutionGuard {
    /// Takes the lock, or returns `None` when an enclosing call holds it.
    pub fn acquire(env: &Env) -> Option<Self> {
        if is_locked(env) {
            log!(env, "reentrant entry rejected");
            return None;
        }
        env.storage().temporary().set(&EXEC_LOCK, &true);
        Some(Self { env: env.clone() })
    }
}

impl Drop for ExecutionGuard {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&EXEC_LOCK);
    }
}

// ── Core Functions ───────────────────────────────────────────────────────────

/// Returns `true` while a guarded operation is in progress.
pub fn is_locked(env: &Env) -> bool {
    env.storage().temporary().has(&EXEC_LOCK)
}

/// Runs `body` under the execution lock.
///
/// Returns `on_reentry` without running `body` if the lock is already held.
/// The lock is released before this function returns, whatever `body` yields.
pub fn guarded<T, E>(
    env: &Env,
    on_reentry: E,
    body: impl FnOnce() -> Result<T, E>,
) -> Result<T, E> {
    let _guard = ExecutionGuard::acquire(env).ok_or(on_reentry)?;
    body()
}
