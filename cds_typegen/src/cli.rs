//! Command-line interface definitions for cds-typegen.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// cds-typegen - TypeScript declarations from compiled CDS schema models
#[derive(Parser, Debug)]
#[command(name = "cds-typegen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to cds-typegen.toml configuration file
    #[arg(short, long, global = true, env = "CDS_TYPEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output (-v, -vv for increasing verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Filter directives used when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> String {
        let level = if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        };
        format!("cds_typegen={level},cds_typegen_core={level}")
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the TypeScript declaration file (default)
    Generate(GenerateArgs),

    /// Initialize a new cds-typegen.toml configuration file
    Init(InitArgs),

    /// Display the definitions of a model and how they will be translated
    Info(InfoArgs),
}

// ============================================================================
// Generate Arguments
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Compiled CSN JSON model (overrides typesync.input_path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (overrides typesync.output_path and typesync.output_file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Interface name prefix (overrides typesync.interface_prefix)
    #[arg(long)]
    pub prefix: Option<String>,

    /// Emit everything at the top level without namespace blocks
    #[arg(long)]
    pub no_namespaces: bool,

    /// Do not emit the `Entity` enum
    #[arg(long)]
    pub no_entity_enum: bool,

    /// Fail when any schema reference cannot be resolved
    #[arg(long)]
    pub deny_warnings: bool,

    /// Print the declarations instead of writing the output file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

// ============================================================================
// Init Arguments
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite existing cds-typegen.toml if present
    #[arg(short, long)]
    pub force: bool,

    /// Write only the default values, without comments
    #[arg(long)]
    pub minimal: bool,
}

// ============================================================================
// Info Arguments
// ============================================================================

#[derive(Args, Debug, Clone, Default)]
pub struct InfoArgs {
    /// Compiled CSN JSON model (overrides typesync.input_path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}
