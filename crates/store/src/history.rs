//! Per-character history files — one compact JSON document per tracked
//! character under `<data_dir>/players/`.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use ladder_core::utils::safe_filename;
use ladder_core::{LadderEntry, PlayerRecord, Result, Snapshot};
use ladder_metrics::ingest;

/// File-backed store for character histories.
///
/// Histories are append-only: `record` only ever adds snapshots, and a
/// file is rewritten only when its history actually changed. Deleting
/// state is an administrative action (`reset`), never part of a cycle.
pub struct HistoryStore {
    data_dir: PathBuf,
    players_dir: PathBuf,
}

impl HistoryStore {
    /// Open (or create) the store rooted at `data_dir`.
    pub fn open<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        let players_dir = data_dir.join("players");
        fs::create_dir_all(&players_dir)?;
        Ok(Self {
            data_dir,
            players_dir,
        })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn player_path(&self, name: &str) -> PathBuf {
        self.players_dir.join(format!("{}.json", safe_filename(name)))
    }

    /// Load a character's record. Absent or unparseable files load as an
    /// explicit empty record; ingestion starts the history fresh.
    pub fn load(&self, name: &str) -> PlayerRecord {
        let path = self.player_path(name);
        let Ok(content) = fs::read_to_string(&path) else {
            return PlayerRecord::default();
        };
        match serde_json::from_str(&content) {
            Ok(record) => record,
            Err(e) => {
                warn!("Unparseable history for {name} ({e}), treating as empty");
                PlayerRecord::default()
            }
        }
    }

    /// Load just the history series for a character.
    pub fn load_history(&self, name: &str) -> Vec<Snapshot> {
        self.load(name).history
    }

    /// Histories for every entry, keyed by character name, in one pass.
    pub fn load_histories(&self, entries: &[LadderEntry]) -> HashMap<String, Vec<Snapshot>> {
        entries
            .iter()
            .map(|e| (e.name.clone(), self.load_history(&e.name)))
            .collect()
    }

    /// Write a full record, replacing whatever is on disk. Cycle code
    /// goes through `record`; this direct form exists for the synthetic
    /// generator and tests.
    pub fn save(&self, record: &PlayerRecord) -> Result<()> {
        let path = self.player_path(&record.name);
        let json = serde_json::to_string(record)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Record one ladder entry observation: read-modify-append-persist.
    ///
    /// Returns whether the history changed. Identity metadata (class,
    /// account) is refreshed alongside a changed history; an unchanged
    /// observation leaves the file untouched entirely, which keeps a
    /// retried cycle from rewriting anything.
    pub fn record(&self, entry: &LadderEntry, timestamp: i64) -> Result<bool> {
        let mut record = self.load(&entry.name);
        record.name = entry.name.clone();
        record.class = entry.class.clone();
        if record.account.is_empty() {
            record.account = entry.account.clone();
        }

        if !ingest(&mut record.history, entry.snapshot(timestamp)) {
            return Ok(false);
        }

        self.save(&record)?;
        Ok(true)
    }

    /// Wipe all tracked state: player histories and cycle outputs. The
    /// players directory is recreated empty so the next cycle starts
    /// fresh.
    pub fn reset(&self) -> Result<()> {
        if self.players_dir.exists() {
            fs::remove_dir_all(&self.players_dir)?;
            info!("Deleted {}", self.players_dir.display());
        }
        fs::create_dir_all(&self.players_dir)?;

        for filename in ["current_ladder.json", "metadata.json"] {
            let path = self.data_dir.join(filename);
            if path.exists() {
                fs::remove_file(&path)?;
                info!("Deleted {}", path.display());
            }
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────
