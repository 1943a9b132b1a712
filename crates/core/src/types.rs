use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named trailing lookback window used for rate and rank-change math.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub label: String,
    pub seconds: i64,
}

impl Interval {
    pub fn new(label: &str, seconds: i64) -> Self {
        Self {
            label: label.to_string(),
            seconds,
        }
    }

    /// The standard interval set: 1h, 4h, 12h, 1d, 3d.
    pub fn defaults() -> Vec<Interval> {
        vec![
            Interval::new("1h", 3_600),
            Interval::new("4h", 14_400),
            Interval::new("12h", 43_200),
            Interval::new("1d", 86_400),
            Interval::new("3d", 259_200),
        ]
    }
}

/// One row of a reconstructed ladder: a character and its XP resolved at
/// the reconstruction instant. Built fresh per reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
    pub name: String,
    pub xp: u64,
}

/// Per-character metrics bundle for one ingestion cycle.
///
/// `rank_changes` distinguishes "not tracked then" (`None`) from "no
/// movement" (`Some(0)`); positive means the character climbed the ladder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerMetrics {
    pub rates: BTreeMap<String, u64>,
    pub rank_changes: BTreeMap<String, Option<i64>>,
}
