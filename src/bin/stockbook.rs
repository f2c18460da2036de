//! stockbook CLI
//!
//! Captures one market day's sales figures, appends them to the spreadsheet,
//! derives the surplus against the latest stock row, and appends the
//! recommended stock for the next market.
//!
//! # Usage
//!
//! ```bash
//! # Run against the in-memory store (default, nothing persists)
//! cargo run
//!
//! # Run against Google Sheets
//! STOCKBOOK_SHEETS_TOKEN=ya29... \
//!   cargo run --features sheets-store
//! ```
//!
//! # Configuration
//!
//! Backend selection and Sheets settings come from `stockbook.toml` (see
//! `stockbook.toml` at the repository root for the shape); `STOCKBOOK_STORE`
//! overrides the configured backend. When no config file is found the tool
//! falls back to the in-memory store so it stays usable for a dry run.
//!
//! `RUST_LOG` controls the log level (default: info).

use std::env;
use std::io;

use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use stockbook::services::SessionController;
use stockbook::store::{StoreConfig, StoreFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_writer(io::stderr)
        .init();

    info!("Starting stockbook");

    let config = match StoreConfig::from_default_location() {
        Ok(config) => config,
        Err(e) => {
            warn!("no usable store config ({}); using the in-memory store", e);
            StoreConfig::local()
        }
    };

    let store = StoreFactory::from_config(&config).await?;
    info!("worksheet store initialized");

    println!("Welcome to stockbook, market day data entry.\n");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = {
        let mut controller = SessionController::new(store.as_ref(), stdin.lock(), stdout.lock());
        controller.run().await?
    };

    println!("\nSurplus for today: {}", summary.surplus);
    println!("Recommended stock for next market: {}", summary.forecast);

    Ok(())
}
