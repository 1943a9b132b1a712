//! Synthetic ladder data — seeded histories and a matching current
//! ladder for local development without hitting the live API.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use ladder_core::{LadderEntry, PlayerRecord, Snapshot};

const CLASSES: &[&str] = &[
    "Ascendant",
    "Deadeye",
    "Juggernaut",
    "Champion",
    "Slayer",
    "Elementalist",
    "Hierophant",
    "Gladiator",
    "Occultist",
    "Necromancer",
    "Berserker",
    "Pathfinder",
    "Saboteur",
    "Chieftain",
    "Raider",
];

#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    pub players: usize,
    pub snapshots: usize,
    /// Seconds between snapshots.
    pub cadence_secs: i64,
    pub start_time: i64,
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            players: 20,
            snapshots: 30,
            cadence_secs: 600,
            start_time: 1_708_100_000,
            seed: 42,
        }
    }
}

/// Generate seeded player histories plus the current ladder they imply.
///
/// Every third player runs a delve depth walk, every seventh dies about
/// two thirds of the way in (XP drops ~10% and the dead flag sticks).
/// The same seed always produces the same data.
pub fn generate(cfg: &SyntheticConfig) -> (Vec<PlayerRecord>, Vec<LadderEntry>) {
    let mut rng = StdRng::seed_from_u64(cfg.seed);
    let mut records = Vec::with_capacity(cfg.players);

    for i in 0..cfg.players {
        let class = CLASSES[i % CLASSES.len()];
        let name = format!("{}_{:02}", class, i + 1);
        let account = format!("{}#{:04}", name.to_lowercase(), rng.gen_range(1000..10_000));

        let mut xp: u64 = 4_000_000_000u64.saturating_sub(i as u64 * 100_000_000);
        let mut depth = if i % 3 == 0 {
            Some(rng.gen_range(100u32..600))
        } else {
            None
        };
        let death_at = if i % 7 == 6 {
            Some(cfg.snapshots * 2 / 3)
        } else {
            None
        };

        let mut history = Vec::with_capacity(cfg.snapshots);
        let mut dead = false;
        for j in 0..cfg.snapshots {
            let t = cfg.start_time + j as i64 * cfg.cadence_secs;
            history.push(Snapshot {
                timestamp: t,
                xp,
                depth,
                dead,
            });

            xp += rng.gen_range(15_000_000u64..45_000_000);
            if let Some(d) = depth.as_mut() {
                *d += rng.gen_range(0u32..500);
            }
            if death_at == Some(j) {
                // Death penalty: ~10% of accumulated XP.
                xp = (xp as f64 * 0.9) as u64;
                dead = true;
            }
        }

        records.push(PlayerRecord {
            name,
            class: class.to_string(),
            account,
            history,
        });
    }

    let entries = entries_from_records(&records);
    (records, entries)
}

/// Derive the current ladder from the last snapshot of each record,
/// ranked by XP descending.
fn entries_from_records(records: &[PlayerRecord]) -> Vec<LadderEntry> {
    let mut order: Vec<&PlayerRecord> = records.iter().filter(|r| !r.history.is_empty()).collect();
    order.sort_by(|a, b| {
        let xa = a.history.last().map(|s| s.xp).unwrap_or(0);
        let xb = b.history.last().map(|s| s.xp).unwrap_or(0);
        xb.cmp(&xa)
    });

    order
        .iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            let last = record.history.last()?;
            Some(LadderEntry {
                rank: idx as u32 + 1,
                name: record.name.clone(),
                level: 95 + (idx as u32 / 10),
                class: record.class.clone(),
                experience: last.xp,
                dead: last.dead,
                account: record.account.clone(),
                twitch: None,
                challenges: 0,
                challenges_max: 40,
                depth: last.depth,
                depth_solo: None,
            })
        })
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────
