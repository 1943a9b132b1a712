//! Metrics Orchestrator — drives rate and rank-change computation across
//! the configured interval set and assembles the per-character bundle.

use std::collections::HashMap;

use ladder_core::{Interval, LadderEntry, PlayerMetrics, Snapshot};

use crate::rank::{rank_map, reconstruct};
use crate::rate::xp_rate;

/// Compute the full metrics bundle for one ingestion cycle.
///
/// Must run after the cycle's snapshots have been ingested: the rates for
/// "now" are only correct when the histories already contain the current
/// observation. For each interval the ladder is reconstructed at
/// `now - seconds` and every current entry gets an hourly rate plus a
/// rank change (`past_rank - current_rank`, positive = climbed). An entry
/// with no resolvable history at the historic instant gets `None`, never 0.
///
/// Dead characters keep their rank changes but have every rate forced to
/// 0: further growth is not meaningful for a dead character, while its
/// ladder position still is. The interval set comes from the caller so
/// different configurations can run side by side.
pub fn compute_metrics(
    entries: &[LadderEntry],
    histories: &HashMap<String, Vec<Snapshot>>,
    now: i64,
    intervals: &[Interval],
) -> HashMap<String, PlayerMetrics> {
    // Entry order is the tie-break order for every reconstruction.
    let ordered: Vec<(&str, &[Snapshot])> = entries
        .iter()
        .map(|e| {
            let history = histories
                .get(&e.name)
                .map(|h| h.as_slice())
                .unwrap_or_default();
            (e.name.as_str(), history)
        })
        .collect();

    let mut bundle: HashMap<String, PlayerMetrics> = HashMap::with_capacity(entries.len());

    for interval in intervals {
        let target = now - interval.seconds;
        let historic_ladder = reconstruct(ordered.iter().copied(), target);
        let historic_ranks = rank_map(&historic_ladder);

        for (entry, (_, history)) in entries.iter().zip(&ordered) {
            let rate = if entry.dead {
                0
            } else {
                xp_rate(history, now, interval.seconds)
            };
            let change = historic_ranks
                .get(&entry.name)
                .map(|&past| past as i64 - entry.rank as i64);

            let metrics = bundle.entry(entry.name.clone()).or_default();
            metrics.rates.insert(interval.label.clone(), rate);
            metrics.rank_changes.insert(interval.label.clone(), change);
        }
    }

    bundle
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, name: &str, xp: u64, dead: bool) -> LadderEntry {
        LadderEntry {
            rank,
            name: name.to_string(),
            level: 95,
            class: "Slayer".to_string(),
            experience: xp,
            dead,
            account: String::new(),
            twitch: None,
            challenges: 0,
            challenges_max: 40,
            depth: None,
            depth_solo: None,
        }
    }

    fn series(points: &[(i64, u64)]) -> Vec<Snapshot> {
        points.iter().map(|&(t, xp)| Snapshot::new(t, xp)).collect()
    }

    fn one_hour() -> Vec<Interval> {
        vec![Interval::new("1h", 3600)]
    }

    #[test]
    fn rates_and_changes_cover_every_interval_label() {
        let entries = vec![entry(1, "a", 2000, false)];
        let histories = HashMap::from([("a".to_string(), series(&[(0, 1000), (7200, 2000)]))]);
        let bundle = compute_metrics(&entries, &histories, 7200, &Interval::defaults());
        let m = &bundle["a"];
        for interval in Interval::defaults() {
            assert!(m.rates.contains_key(&interval.label));
            assert!(m.rank_changes.contains_key(&interval.label));
        }
    }

    #[test]
    fn end_to_end_hourly_rate() {
        // [(0,1000),(3600,1000),(7200,1500)] over a 1h window at now=7200:
        // then=1000 @3600, now=1500 @7200 → 500/h.
        let entries = vec![entry(1, "a", 1500, false)];
        let histories =
            HashMap::from([("a".to_string(), series(&[(0, 1000), (3600, 1000), (7200, 1500)]))]);
        let bundle = compute_metrics(&entries, &histories, 7200, &one_hour());
        assert_eq!(bundle["a"].rates["1h"], 500);
    }

    #[test]
    fn climb_yields_positive_change() {
        // "riser" was rank 10-ish material an hour ago (lowest XP) and is
        // rank 1 now: past 2 - current 1 = +1.
        let entries = vec![entry(1, "riser", 5000, false), entry(2, "steady", 4000, false)];
        let histories = HashMap::from([
            ("riser".to_string(), series(&[(0, 1000), (7200, 5000)])),
            ("steady".to_string(), series(&[(0, 3000), (7200, 4000)])),
        ]);
        let bundle = compute_metrics(&entries, &histories, 7200, &one_hour());
        assert_eq!(bundle["riser"].rank_changes["1h"], Some(1));
        assert_eq!(bundle["steady"].rank_changes["1h"], Some(-1));
    }

    #[test]
    fn historically_absent_entry_is_unknown_not_zero() {
        let entries = vec![entry(1, "old", 5000, false), entry(2, "new", 3000, false)];
        let histories = HashMap::from([
            ("old".to_string(), series(&[(0, 1000), (7200, 5000)])),
            // First observed well inside the lookback window.
            ("new".to_string(), series(&[(7000, 3000)])),
        ]);
        let bundle = compute_metrics(&entries, &histories, 7200, &one_hour());
        assert_eq!(bundle["new"].rank_changes["1h"], None);
        assert_eq!(bundle["old"].rank_changes["1h"], Some(0));
    }

    #[test]
    fn dead_character_rates_are_forced_to_zero() {
        let entries = vec![entry(1, "a", 9000, true)];
        let histories = HashMap::from([("a".to_string(), series(&[(0, 1000), (7200, 9000)]))]);
        let bundle = compute_metrics(&entries, &histories, 7200, &one_hour());
        assert_eq!(bundle["a"].rates["1h"], 0);
        // Ranking is unaffected by the flag.
        assert_eq!(bundle["a"].rank_changes["1h"], Some(0));
    }

    #[test]
    fn missing_history_is_not_an_error() {
        let entries = vec![entry(1, "ghost", 100, false)];
        let bundle = compute_metrics(&entries, &HashMap::new(), 7200, &one_hour());
        assert_eq!(bundle["ghost"].rates["1h"], 0);
        assert_eq!(bundle["ghost"].rank_changes["1h"], None);
    }
}
