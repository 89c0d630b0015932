mod cli;
mod config;

use std::{io, process};

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;
use meihua::storage::Storage;

/// Env var holding the log filter, e.g. `MEIHUA_LOG=meihua=debug`.
const LOG_VAR: &str = "MEIHUA_LOG";

fn main() {
    init_logging();

    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let root = Storage::default_root().unwrap_or_else(|| {
        eprintln!("Could not determine home directory.");
        process::exit(1);
    });

    let storage = match Storage::new(root) {
        Ok(s) => s.with_history_limit(config.history_limit),
        Err(e) => {
            eprintln!("Failed to initialize storage: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = cli::run(&config, &storage) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_VAR).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .without_time(),
        )
        .init();
}
