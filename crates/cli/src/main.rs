use std::io::{self, Write};

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use ladder_config::AppConfig;
use ladder_core::Interval;
use ladder_data::{generate, LadderClient, SyntheticConfig};
use ladder_store::HistoryStore;

mod cycle;

use cycle::run_cycle;

#[derive(Parser)]
#[command(name = "ladder", about = "Ladder tracker: ingests ranked snapshots and derives XP rates and rank changes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the ladder and run one ingestion cycle
    Track,
    /// Generate synthetic histories and run a cycle over them
    Generate {
        /// Number of characters
        #[arg(long, default_value_t = 20)]
        players: usize,
        /// Snapshots per character
        #[arg(long, default_value_t = 30)]
        snapshots: usize,
        /// Seconds between snapshots
        #[arg(long, default_value_t = 600)]
        cadence: i64,
        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
    /// Delete all tracked history and ladder data
    Reset {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Config file is optional; the scheduled runner usually relies on
    // defaults plus LADDER_LEAGUE / LADDER_DATA_DIR.
    let config = match AppConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            warn!("No config at {} ({e}), using defaults", cli.config);
            AppConfig::from_env()
        }
    };

    match cli.command {
        Commands::Track => track(&config).await?,
        Commands::Generate {
            players,
            snapshots,
            cadence,
            seed,
        } => generate_data(&config, players, snapshots, cadence, seed)?,
        Commands::Reset { yes } => reset(&config, yes)?,
    }

    Ok(())
}

async fn track(config: &AppConfig) -> anyhow::Result<()> {
    info!("Fetching ladder for league: {}", config.league);
    let client = LadderClient::new(
        &config.api.base_url,
        &config.league,
        config.api.limit,
        config.api.timeout_secs,
    )?;
    let entries = client.fetch_ladder().await?;
    if entries.is_empty() {
        info!("No entries found, nothing to do");
        return Ok(());
    }

    let store = HistoryStore::open(&config.storage.data_dir)?;
    let now = Utc::now().timestamp();
    let summary = run_cycle(&store, &entries, &config.league, now, &Interval::defaults())?;
    info!(
        "Cycle complete: {}/{} histories updated",
        summary.players_updated, summary.total_players
    );
    Ok(())
}

fn generate_data(
    config: &AppConfig,
    players: usize,
    snapshots: usize,
    cadence: i64,
    seed: u64,
) -> anyhow::Result<()> {
    let cfg = SyntheticConfig {
        players,
        snapshots,
        cadence_secs: cadence,
        seed,
        ..SyntheticConfig::default()
    };
    let (records, entries) = generate(&cfg);

    let store = HistoryStore::open(&config.storage.data_dir)?;
    for record in &records {
        store.save(record)?;
    }
    info!("Generated {} player history files", records.len());

    // Run a real cycle over the generated data so the outputs carry
    // actual computed metrics rather than mocked numbers.
    let now = cfg.start_time + (snapshots.max(1) as i64 - 1) * cadence;
    run_cycle(&store, &entries, "Synthetic", now, &Interval::defaults())?;
    Ok(())
}

fn reset(config: &AppConfig, yes: bool) -> anyhow::Result<()> {
    if !yes {
        println!("Warning: this will DELETE all tracked player history and ladder data.");
        print!("Are you sure? (y/n) ");
        io::stdout().flush()?;
        let mut choice = String::new();
        io::stdin().read_line(&mut choice)?;
        if choice.trim().to_lowercase() != "y" {
            println!("Aborted.");
            return Ok(());
        }
    }

    let store = HistoryStore::open(&config.storage.data_dir)?;
    store.reset()?;
    println!("Data reset complete. Run `ladder track` to start fresh.");
    Ok(())
}
