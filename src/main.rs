mod address_book;
mod commands;
mod config;
mod constants;
mod models;
mod services;
mod session;
mod storage;
mod utils;

use tokio::io::BufReader;
use tracing::{error, info, warn};

use crate::{config::Config, constants::LOG_DIRECTIVE, session::SessionEnd, storage::Storage};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let storage = Storage::new(&config.snapshot_path);
    info!("Using snapshot {}", storage.path().display());

    // A snapshot we cannot read must not be overwritten on exit
    let mut book = match storage.load().await {
        Ok(book) => book,
        Err(e) => {
            error!("Failed to load address book: {}", e);
            std::process::exit(1);
        }
    };

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    let session = session::run(&mut book, config.window_days, stdin, &mut stdout);
    let outcome = tokio::select! {
        result = session => result,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted, ending session");
            Ok(SessionEnd::Exit)
        }
    };

    match outcome {
        Ok(end) => info!("Session ended: {:?}", end),
        Err(e) => warn!("Console I/O failed: {}", e),
    }

    if let Err(e) = storage.save(&book).await {
        error!("Failed to save address book: {}", e);
        std::process::exit(1);
    }

    // The blocking stdin read cannot be cancelled, so waiting for the
    // runtime to shut down would hang after Ctrl-C until the next line
    std::process::exit(0);
}

/// Initialize the logging system
fn initialize_logging() {
    // RUST_LOG takes precedence over the built-in default
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(LOG_DIRECTIVE));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
