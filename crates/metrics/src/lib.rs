//! Pure ladder metrics: time resolution over sparse histories, historic
//! rank reconstruction, windowed XP rates, and class distribution scores.
//!
//! Everything in this crate is a pure function over immutable input — no
//! I/O, no clocks. The store and CLI crates supply histories and the cycle
//! timestamp and persist whatever comes back.

pub mod distribution;
pub mod ingest;
pub mod orchestrator;
pub mod rank;
pub mod rate;
pub mod resolve;

pub use distribution::class_distribution;
pub use ingest::ingest;
pub use orchestrator::compute_metrics;
pub use rank::{rank_map, reconstruct};
pub use rate::xp_rate;
pub use resolve::{snapshot_at, snapshot_at_indexed, xp_at};
