//! History Ingestor — dedup-safe append of a new observation.

use ladder_core::Snapshot;

/// Append `candidate` to `history` unless it repeats the last recorded
/// state. Returns whether the history changed.
///
/// The change test compares XP, depth and the dead flag — never the
/// timestamp — so a crashed-and-retried cycle that re-observes the same
/// state appends nothing. Persisting a changed history is the caller's
/// responsibility.
pub fn ingest(history: &mut Vec<Snapshot>, candidate: Snapshot) -> bool {
    if let Some(last) = history.last() {
        if last.same_state(&candidate) {
            return false;
        }
    }
    history.push(candidate);
    true
}

// ── Tests ───────────────────────────────────────────────────────────
