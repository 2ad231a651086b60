//! Staff Roster — Entry Point
//!
//! Wiring sequence:
//! 1. Load config (`STAFF_ROSTER_CONFIG` or `config.toml`, defaults if absent)
//! 2. Init tracing on stderr (RUST_LOG overrides the configured level)
//! 3. Open the roster from the configured JSON file
//! 4. Run the interactive menu on stdin/stdout until quit or EOF

use std::io;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use staff_roster::adapters::console::Console;
use staff_roster::adapters::persistence::FileStorage;
use staff_roster::config::{self, AppConfig};
use staff_roster::usecases::RecordStore;

/// Environment variable naming an alternative config file.
const CONFIG_ENV: &str = "STAFF_ROSTER_CONFIG";

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| "config.toml".to_string());
    let config = config::loader::load_config_or_default(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging on stderr ─────────────────────
    init_tracing(&config);

    // ── 3. Open the roster ──────────────────────────────────
    let storage = FileStorage::new(&config.store.data_file);
    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        data_file = %storage.path().display(),
        "Starting staff roster"
    );

    let mut store = RecordStore::open(storage, config.store.on_corrupt)
        .context("Failed to open roster")?;

    // ── 4. Interactive menu ─────────────────────────────────
    let stdin = io::stdin();
    let stdout = io::stdout();
    Console::new(stdin.lock(), stdout.lock())
        .run(&mut store)
        .context("Console I/O failed")?;

    info!(employees = store.len(), "Shutdown complete");
    Ok(())
}

/// Install the global subscriber. Logs go to stderr so the menu on stdout
/// stays readable.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
