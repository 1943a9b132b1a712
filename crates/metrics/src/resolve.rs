//! Time Resolver — the value a history had in effect at an arbitrary
//! instant, treating the series as a right-continuous step function.

use ladder_core::Snapshot;

/// Find the snapshot in effect at `target`: the latest one whose
/// timestamp is `<= target`.
///
/// Returns `None` for an empty history and for instants before the first
/// observation (the character was not tracked yet). Instants at or past
/// the last observation resolve to the last snapshot — the most recent
/// known state is assumed to persist forward.
pub fn snapshot_at(history: &[Snapshot], target: i64) -> Option<&Snapshot> {
    let last = history.last()?;
    if target >= last.timestamp {
        return Some(last);
    }
    if target < history[0].timestamp {
        return None;
    }
    // Histories are short (tens of points); a backward scan finds the
    // covering snapshot quickly since targets cluster near the tail.
    history.iter().rev().find(|s| s.timestamp <= target)
}

/// Binary-search variant of [`snapshot_at`] with identical observable
/// behavior, for histories large enough that the scan matters.
pub fn snapshot_at_indexed(history: &[Snapshot], target: i64) -> Option<&Snapshot> {
    let last = history.last()?;
    if target >= last.timestamp {
        return Some(last);
    }
    // Index of the first snapshot with timestamp > target; everything
    // before it is <= target.
    let idx = history.partition_point(|s| s.timestamp <= target);
    if idx == 0 {
        return None;
    }
    Some(&history[idx - 1])
}

/// The XP a character had at `target`, or `None` if it was not tracked
/// then. Never collapses "unknown" into a zero value.
pub fn xp_at(history: &[Snapshot], target: i64) -> Option<u64> {
    snapshot_at(history, target).map(|s| s.xp)
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn history() -> Vec<Snapshot> {
        vec![Snapshot::new(100, 10), Snapshot::new(200, 20)]
    }

    #[test]
    fn empty_history_is_unknown() {
        assert!(snapshot_at(&[], 100).is_none());
        assert!(xp_at(&[], 100).is_none());
    }

    #[test]
    fn before_first_snapshot_is_unknown() {
        assert_eq!(xp_at(&history(), 50), None);
    }

    #[test]
    fn between_snapshots_uses_step_function() {
        // No interpolation: the value at 150 is still the value set at 100.
        assert_eq!(xp_at(&history(), 150), Some(10));
    }

    #[test]
    fn exact_timestamp_resolves_to_that_snapshot() {
        assert_eq!(xp_at(&history(), 100), Some(10));
        assert_eq!(xp_at(&history(), 200), Some(20));
    }

    #[test]
    fn after_last_snapshot_persists_forward() {
        assert_eq!(xp_at(&history(), 500), Some(20));
    }

    #[test]
    fn resolved_snapshot_carries_exact_timestamp() {
        let h = history();
        let snap = snapshot_at(&h, 150).unwrap();
        assert_eq!(snap.timestamp, 100);
    }

    #[test]
    fn repeated_calls_are_deterministic() {
        let h = history();
        for _ in 0..3 {
            assert_eq!(snapshot_at(&h, 150), snapshot_at(&h, 150));
        }
    }

    #[test]
    fn indexed_variant_matches_linear_scan() {
        let h: Vec<Snapshot> = (0..50)
            .map(|i| Snapshot::new(100 + i * 37, (i as u64) * 1000))
            .collect();
        for target in [-5, 0, 99, 100, 101, 500, 1001, 1950, 5000] {
            assert_eq!(
                snapshot_at(&h, target),
                snapshot_at_indexed(&h, target),
                "divergence at target {target}",
            );
        }
    }
}
