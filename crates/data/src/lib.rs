//! Upstream ladder data: the live API client and the synthetic generator
//! used for local development and demos.

pub mod client;
pub mod synthetic;

pub use client::LadderClient;
pub use synthetic::{generate, SyntheticConfig};
