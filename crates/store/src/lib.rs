//! Persistent state for the ladder tracker: per-character history files
//! plus the `current_ladder.json` / `metadata.json` cycle outputs.

pub mod history;
pub mod output;

pub use history::HistoryStore;
pub use output::{build_rows, write_ladder, write_metadata, LadderRow, Metadata};
