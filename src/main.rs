//! A2A UI Export Demo
//!
//! Entry point: POST a chat turn, then save its session export as a zip.

use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;
use mimalloc::MiMalloc;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use a2a_export_demo::config::{Cli, DemoConfig};

/// Global allocator for improved performance (M-MIMALLOC-APPS).
#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Exit status for transport, protocol and filesystem failures.
const FAILURE_EXIT: u8 = 3;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing (M-LOG-STRUCTURED). Logs go to stderr; stdout is
    // reserved for the result lines.
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load .env (if present) before clap reads the environment
    let _ = dotenv();

    let cli = Cli::parse();
    let config = match DemoConfig::from_cli(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::from(2);
        }
    };

    match a2a_export_demo::run(&config).await {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            error!(name: "export.failed", error = %e, "Export demo failed");
            eprintln!("{e}");
            ExitCode::from(FAILURE_EXIT)
        }
    }
}
