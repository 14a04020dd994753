/// Basis-point denominator: a rate of `BPS_DENOMINATOR` pays 100 %.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// Seconds in one day, the granularity tier tables are usually written in.
pub const SECONDS_PER_DAY: u64 = 86_400;

// ── Core interest math ──────────────────────────────────────────────────────

/// Interest owed on `amount` at `rate_bps`:
///
/// ```text
/// interest = floor(amount × rate_bps / 10_000)
/// ```
///
/// Returns `None` if the product does not fit in an `i128`. Amounts are
/// never negative for a live position, so truncating division is a floor.
pub fn compute_interest(amount: i128, rate_bps: u32) -> Option<i128> {
    amount
        .checked_mul(i128::from(rate_bps))
        .map(|scaled| scaled / BPS_DENOMINATOR)
}

/// Seconds elapsed between `start_time` and `now`.
///
/// A clock that reads earlier than `start_time` yields zero rather than
/// wrapping.
pub fn elapsed(start_time: u64, now: u64) -> u64 {
    now.saturating_sub(start_time)
}

// ── Unit tests ──────────────────────────────────────────────────────────────
// Pure math, no Soroban environment needed.
