// cds-typegen - TypeScript declarations for CDS schema models

pub mod config;
pub mod error;
pub mod model;

// TypeSync - per-definition TypeScript translators
pub mod typesync;

// Tooling - whole-model generation and file output
pub mod tooling;

// Re-export commonly used items for convenience
pub use config::CdsTypegenConfig;
pub use error::{CdsTypegenError, Result};
pub use model::{Csn, Definition, Element, Kind};
pub use tooling::{GeneratedTypes, GenerationReport, TypeGenerator, generate_typescript};
pub use typesync::config::TypesyncConfig;
