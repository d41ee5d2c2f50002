//! Command handlers for the cds-typegen CLI.

pub mod generate;
pub mod info;
pub mod init;

use crate::cli::{Cli, Commands};
use cds_typegen_core::config::CdsTypegenConfig;
use cds_typegen_core::error::{CdsTypegenError, Result};
use tracing::debug;

/// Dispatches to the selected command; no command means `generate`.
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Some(Commands::Generate(args)) => generate::run(cli, args),
        Some(Commands::Init(args)) => init::run(cli, args),
        Some(Commands::Info(args)) => info::run(cli, args),
        None => generate::run_default(cli),
    }
}

/// Loads the configuration named by `--config`, or the nearest
/// cds-typegen.toml. Without either, defaults are used.
pub fn load_config(cli: &Cli) -> Result<CdsTypegenConfig> {
    match CdsTypegenConfig::load(cli.config.as_deref()) {
        Err(CdsTypegenError::ConfigNotFound { search_start }) if cli.config.is_none() => {
            debug!(
                "No configuration found from {:?}, using defaults",
                search_start
            );
            Ok(CdsTypegenConfig::default())
        }
        result => result,
    }
}
