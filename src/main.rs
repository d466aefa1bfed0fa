//! Binary entry point: logging setup, argument parsing, exit-code mapping.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keystone_domain_sync::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "keystone_domain_sync=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Wrong arity must exit 1 before any I/O is attempted.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match keystone_domain_sync::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "synchronization failed");
            ExitCode::FAILURE
        }
    }
}
