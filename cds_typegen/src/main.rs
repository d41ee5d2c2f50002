use cds_typegen::cli::Cli;
use cds_typegen::commands;
use cds_typegen_core::error::Result;
use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `generate --stdout` output stays clean.
    // RUST_LOG takes precedence over -v/-q.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!(command = ?cli.command, "Starting cds-typegen");

    commands::run(&cli).inspect_err(|e| error!("{}", e))
}
