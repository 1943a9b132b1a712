pub mod error;
pub mod models;
pub mod types;
pub mod utils;

pub use error::{LadderError, Result};
pub use models::{LadderEntry, PlayerRecord, Snapshot};
pub use types::{Interval, PlayerMetrics, RankEntry};
