//! Distribution Weigher — rank-weighted class distribution over the
//! current ladder.

use std::collections::HashMap;

use ladder_core::LadderEntry;

/// Weighted class distribution score for the current cycle.
///
/// Rank `r` out of `N` entries contributes `(N + 1) - r` points to its
/// class: rank 1 is worth `N`, the last rank is worth 1. Purely a
/// function of the current ranking; no history involved.
pub fn class_distribution(entries: &[LadderEntry]) -> HashMap<String, u64> {
    let total = entries.len() as u64;
    let mut scores: HashMap<String, u64> = HashMap::new();

    for entry in entries {
        let weight = (total + 1).saturating_sub(entry.rank as u64);
        *scores.entry(entry.class.clone()).or_default() += weight;
    }

    scores
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, name: &str, class: &str) -> LadderEntry {
        LadderEntry {
            rank,
            name: name.to_string(),
            level: 95,
            class: class.to_string(),
            experience: 1_000_000,
            dead: false,
            account: String::new(),
            twitch: None,
            challenges: 0,
            challenges_max: 40,
            depth: None,
            depth_solo: None,
        }
    }

    #[test]
    fn weights_descend_from_total() {
        let entries = vec![
            entry(1, "a", "Slayer"),
            entry(2, "b", "Deadeye"),
            entry(3, "c", "Slayer"),
        ];
        let scores = class_distribution(&entries);
        // Ranks 1 and 3 weigh 3 and 1.
        assert_eq!(scores["Slayer"], 4);
        assert_eq!(scores["Deadeye"], 2);
    }

    #[test]
    fn out_of_range_rank_weighs_zero() {
        let entries = vec![entry(1, "a", "Slayer"), entry(5, "b", "Deadeye")];
        let scores = class_distribution(&entries);
        assert_eq!(scores["Deadeye"], 0);
    }

    #[test]
    fn empty_ladder_scores_nothing() {
        assert!(class_distribution(&[]).is_empty());
    }
}
