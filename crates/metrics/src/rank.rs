//! Rank Reconstructor — rebuilds a full historic ladder from every
//! tracked character's history at once.

use std::collections::HashMap;

use ladder_core::{RankEntry, Snapshot};

use crate::resolve::xp_at;

/// Reconstruct the ladder as it stood at `target`.
///
/// Characters whose history does not resolve at `target` are excluded —
/// they were not on the ladder then, which is different from being last.
/// The result is sorted by XP descending; ties keep the input order, so
/// callers must pass a deterministically ordered set for reproducible
/// ranks.
pub fn reconstruct<'a, I>(histories: I, target: i64) -> Vec<RankEntry>
where
    I: IntoIterator<Item = (&'a str, &'a [Snapshot])>,
{
    let mut ladder: Vec<RankEntry> = histories
        .into_iter()
        .filter_map(|(name, history)| {
            xp_at(history, target).map(|xp| RankEntry {
                name: name.to_string(),
                xp,
            })
        })
        .collect();

    // Stable sort: equal XP preserves input order.
    ladder.sort_by(|a, b| b.xp.cmp(&a.xp));
    ladder
}

/// Dense 1-based ranks for a reconstructed ladder. Equal XP never shares
/// a rank; position in the sorted sequence is the rank.
pub fn rank_map(ladder: &[RankEntry]) -> HashMap<String, u32> {
    ladder
        .iter()
        .enumerate()
        .map(|(idx, entry)| (entry.name.clone(), idx as u32 + 1))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: &[(i64, u64)]) -> Vec<Snapshot> {
        points
            .iter()
            .map(|&(t, xp)| ladder_core::Snapshot::new(t, xp))
            .collect()
    }

    #[test]
    fn sorts_descending_with_dense_ranks() {
        let a = series(&[(0, 100)]);
        let b = series(&[(0, 300)]);
        let c = series(&[(0, 200)]);
        let ladder = reconstruct(
            [("a", a.as_slice()), ("b", b.as_slice()), ("c", c.as_slice())],
            50,
        );
        let ranks = rank_map(&ladder);
        assert_eq!(ranks["b"], 1);
        assert_eq!(ranks["c"], 2);
        assert_eq!(ranks["a"], 3);
    }

    #[test]
    fn ties_keep_input_order_and_never_share_ranks() {
        let a = series(&[(0, 300)]);
        let b = series(&[(0, 300)]);
        let c = series(&[(0, 100)]);
        let ladder = reconstruct(
            [("A", a.as_slice()), ("B", b.as_slice()), ("C", c.as_slice())],
            10,
        );
        assert_eq!(ladder[0].name, "A");
        assert_eq!(ladder[1].name, "B");
        let ranks = rank_map(&ladder);
        assert_eq!((ranks["A"], ranks["B"], ranks["C"]), (1, 2, 3));
    }

    #[test]
    fn untracked_characters_are_excluded() {
        let old = series(&[(0, 500)]);
        let young = series(&[(1000, 900)]);
        // At t=100 "young" had no history yet: it must be absent, not
        // ranked below everyone.
        let ladder = reconstruct([("old", old.as_slice()), ("young", young.as_slice())], 100);
        assert_eq!(ladder.len(), 1);
        assert_eq!(ladder[0].name, "old");
    }

    #[test]
    fn empty_input_yields_empty_ladder() {
        let ladder = reconstruct(std::iter::empty::<(&str, &[ladder_core::Snapshot])>(), 0);
        assert!(ladder.is_empty());
        assert!(rank_map(&ladder).is_empty());
    }
}
