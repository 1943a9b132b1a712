use serde::{Deserialize, Serialize};

// ── History ──────────────────────────────────────────────────

/// One timestamped observation of a character. Immutable once written.
///
/// Field names are kept single-letter on disk to match the compact
/// history files (`{"t":...,"x":...}`); `d` and `dead` are omitted when
/// absent/false so unchanged files stay byte-stable across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "t")]
    pub timestamp: i64,
    #[serde(rename = "x")]
    pub xp: u64,
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub dead: bool,
}

fn is_false(b: &bool) -> bool {
    !b
}

impl Snapshot {
    pub fn new(timestamp: i64, xp: u64) -> Self {
        Self {
            timestamp,
            xp,
            depth: None,
            dead: false,
        }
    }

    /// True when the observed value fields match, ignoring the timestamp.
    /// This is the dedup test for history ingestion.
    pub fn same_state(&self, other: &Snapshot) -> bool {
        self.xp == other.xp && self.depth == other.depth && self.dead == other.dead
    }
}

/// On-disk record for one character: identity metadata plus the full
/// append-only history, ordered by timestamp ascending.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub class: String,
    pub account: String,
    #[serde(default)]
    pub history: Vec<Snapshot>,
}

// ── Current ladder ───────────────────────────────────────────

/// One entry of the current cycle's ladder as supplied by the upstream
/// source, flattened from its nested envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderEntry {
    pub rank: u32,
    pub name: String,
    pub level: u32,
    pub class: String,
    pub experience: u64,
    pub dead: bool,
    pub account: String,
    pub twitch: Option<String>,
    pub challenges: u32,
    pub challenges_max: u32,
    pub depth: Option<u32>,
    pub depth_solo: Option<u32>,
}

impl LadderEntry {
    /// The snapshot this entry contributes to its character's history.
    pub fn snapshot(&self, timestamp: i64) -> Snapshot {
        Snapshot {
            timestamp,
            xp: self.experience,
            depth: self.depth,
            dead: self.dead,
        }
    }
}
