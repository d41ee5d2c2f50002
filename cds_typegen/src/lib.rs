pub mod cli;
pub mod commands;

pub use cds_typegen_core::{config, error, model, tooling, typesync};
