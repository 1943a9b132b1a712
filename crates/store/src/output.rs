//! Cycle output assembly — `current_ladder.json` and `metadata.json`.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use ladder_core::{LadderEntry, PlayerMetrics, Result};

/// One row of `current_ladder.json`: the upstream entry folded together
/// with its computed metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LadderRow {
    pub rank: u32,
    pub name: String,
    pub level: u32,
    pub class: String,
    pub experience: u64,
    /// Legacy field for older consumers; mirrors the 1h rate.
    pub xp_per_hour: u64,
    pub xp_rates: BTreeMap<String, u64>,
    pub rank_changes: BTreeMap<String, Option<i64>>,
    pub dead: bool,
    pub account: String,
    pub twitch: Option<String>,
    pub challenges: u32,
    pub challenges_max: u32,
    pub depth: Option<u32>,
    pub depth_solo: Option<u32>,
}

/// Metadata about the last completed cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub last_updated: i64,
    pub league: String,
    pub total_players: usize,
    pub players_updated: usize,
    pub class_distribution: HashMap<String, u64>,
}

/// Fold entries and their metrics into output rows. Rates for dead
/// characters arrive already zeroed from the orchestrator, so no
/// special-casing happens here.
pub fn build_rows(
    entries: &[LadderEntry],
    metrics: &HashMap<String, PlayerMetrics>,
) -> Vec<LadderRow> {
    entries
        .iter()
        .map(|entry| {
            let m = metrics.get(&entry.name).cloned().unwrap_or_default();
            LadderRow {
                rank: entry.rank,
                name: entry.name.clone(),
                level: entry.level,
                class: entry.class.clone(),
                experience: entry.experience,
                xp_per_hour: m.rates.get("1h").copied().unwrap_or(0),
                xp_rates: m.rates,
                rank_changes: m.rank_changes,
                dead: entry.dead,
                account: entry.account.clone(),
                twitch: entry.twitch.clone(),
                challenges: entry.challenges,
                challenges_max: entry.challenges_max,
                depth: entry.depth,
                depth_solo: entry.depth_solo,
            }
        })
        .collect()
}

/// Write `current_ladder.json` (compact, it is fetched by browsers).
pub fn write_ladder(data_dir: &Path, rows: &[LadderRow]) -> Result<()> {
    let path = data_dir.join("current_ladder.json");
    fs::write(&path, serde_json::to_string(rows)?)?;
    info!("Saved current_ladder.json ({} entries)", rows.len());
    Ok(())
}

/// Write `metadata.json` (pretty, it is read by humans too).
pub fn write_metadata(data_dir: &Path, meta: &Metadata) -> Result<()> {
    let path = data_dir.join("metadata.json");
    fs::write(&path, serde_json::to_string_pretty(meta)?)?;
    Ok(())
}

// ── Tests ───────────────────────────────────────────────────────────
