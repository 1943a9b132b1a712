//! Rate Calculator — normalized hourly XP rate over a trailing window.

use ladder_core::Snapshot;

use crate::resolve::snapshot_at;

/// XP gained per hour over the trailing `window_secs` ending at `now`.
///
/// Both window boundaries resolve through the step function, and the
/// elapsed time in the denominator is the span between the two *actual*
/// snapshots chosen — not the nominal window length — so an irregular
/// polling cadence does not bias the rate.
///
/// The result floors at 0. That single floor covers insufficient history,
/// a degenerate zero-duration span, and genuine XP regressions (a death
/// penalty is not negative growth, it is no growth).
pub fn xp_rate(history: &[Snapshot], now: i64, window_secs: i64) -> u64 {
    let Some(current) = snapshot_at(history, now) else {
        return 0;
    };
    let Some(past) = snapshot_at(history, now - window_secs) else {
        return 0;
    };
    if current.timestamp <= past.timestamp {
        return 0;
    }

    let dx = current.xp as f64 - past.xp as f64;
    let dt = (current.timestamp - past.timestamp) as f64;
    let rate = dx / dt * 3600.0;
    if rate <= 0.0 {
        0
    } else {
        rate as u64
    }
}

// ── Tests ───────────────────────────────────────────────────────────
