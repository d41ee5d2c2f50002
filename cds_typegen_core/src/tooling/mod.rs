//! Whole-model generation: from a compiled schema model to a TypeScript file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! let report = cds_typegen_core::tooling::generate()?;
//! println!("wrote {:?}", report.file.path);
//! ```

mod generator;

pub use generator::*;

use crate::config::CdsTypegenConfig;
use crate::error::Result;

/// Generates the declaration file using configuration from cds-typegen.toml.
///
/// # Errors
///
/// Returns `CdsTypegenError` if:
/// - Configuration file cannot be found or parsed
/// - The configured schema model cannot be read
/// - The output file cannot be written
pub fn generate() -> Result<GenerationReport> {
    let config = CdsTypegenConfig::new()?;
    TypeGenerator::new(config.typesync).generate_from_input()
}
