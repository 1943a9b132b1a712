//! One ingestion cycle: persist the new observations, compute metrics
//! over the just-ingested state, write the cycle outputs.

use tracing::info;

use ladder_core::{Interval, LadderEntry, Result};
use ladder_metrics::{class_distribution, compute_metrics};
use ladder_store::{build_rows, write_ladder, write_metadata, HistoryStore, Metadata};

pub struct CycleSummary {
    pub total_players: usize,
    pub players_updated: usize,
}

/// Run a full cycle over an already-fetched ladder.
///
/// Histories are updated before any metric is computed — the rates for
/// "now" must see the snapshots this cycle just added. Any error aborts
/// before `current_ladder.json` or `metadata.json` is touched, so a
/// failed cycle leaves no partial output behind.
pub fn run_cycle(
    store: &HistoryStore,
    entries: &[LadderEntry],
    league: &str,
    now: i64,
    intervals: &[Interval],
) -> Result<CycleSummary> {
    let mut updated = 0;
    for entry in entries {
        if store.record(entry, now)? {
            updated += 1;
        }
    }
    info!("Updated {}/{} player histories", updated, entries.len());

    let histories = store.load_histories(entries);
    let metrics = compute_metrics(entries, &histories, now, intervals);
    let distribution = class_distribution(entries);

    let rows = build_rows(entries, &metrics);
    write_ladder(store.data_dir(), &rows)?;
    write_metadata(
        store.data_dir(),
        &Metadata {
            last_updated: now,
            league: league.to_string(),
            total_players: entries.len(),
            players_updated: updated,
            class_distribution: distribution,
        },
    )?;

    Ok(CycleSummary {
        total_players: entries.len(),
        players_updated: updated,
    })
}

// ── Tests ───────────────────────────────────────────────────────────
