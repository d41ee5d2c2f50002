//! Init command - initializes cds-typegen.toml configuration.

use crate::cli::{Cli, InitArgs};
use cds_typegen_core::{
    config::{CONFIG_FILE_NAME, CdsTypegenConfig},
    error::Result,
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

const FULL_CONFIG: &str = r#"# cds-typegen configuration

[typesync]
# Compiled CSN JSON model, e.g. the output of `cds compile srv --to json`
# Environment variables are substituted: "${MODEL_PATH:-./gen/csn.json}"
input_path = "./gen/csn.json"

# Output directory and file for the generated declarations
output_path = "./src/generated/"
output_file = "entities.ts"

# Prefix for generated interface names ("I" gives IBooks)
interface_prefix = ""

# Append an `Entity` enum listing the model name of every entity
emit_entity_enum = true

# Wrap definitions in `export namespace` blocks
emit_namespaces = true
"#;

/// Runs the init command.
pub fn run(_cli: &Cli, args: &InitArgs) -> Result<()> {
    if let Some(path) = init_in(&env::current_dir()?, args)? {
        info!("Created {:?}", path);
        info!("Next steps:");
        info!("  1. Compile your model with `cds compile srv --to json > gen/csn.json`");
        info!("  2. Run 'cds-typegen generate' to write the declarations");
    }
    Ok(())
}

/// Writes the configuration file into `dir`. Returns `None` when a file
/// already exists and `force` is unset.
pub fn init_in(dir: &Path, args: &InitArgs) -> Result<Option<PathBuf>> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !args.force {
        error!("{CONFIG_FILE_NAME} already exists. Use --force to overwrite.");
        return Ok(None);
    }

    let content = if args.minimal {
        toml::to_string_pretty(&CdsTypegenConfig::default())?
    } else {
        FULL_CONFIG.to_string()
    };

    fs::write(&config_path, content)?;
    Ok(Some(config_path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_config_loads() {
        let dir = tempfile::tempdir().unwrap();

        let path = init_in(dir.path(), &InitArgs::default()).unwrap().unwrap();

        let config = CdsTypegenConfig::from_path(&path).unwrap();
        assert_eq!(config.typesync.input_path.as_deref(), Some("./gen/csn.json"));
        assert_eq!(config.typesync.output_file, "entities.ts");
        assert!(config.typesync.emit_namespaces);
    }

    #[test]
    fn test_minimal_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let args = InitArgs {
            minimal: true,
            ..Default::default()
        };

        let path = init_in(dir.path(), &args).unwrap().unwrap();

        let config = CdsTypegenConfig::from_path(&path).unwrap();
        assert_eq!(config, CdsTypegenConfig::default());
    }

    #[test]
    fn test_existing_file_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&existing, "[typesync]\ninterface_prefix = \"I\"\n").unwrap();

        assert_eq!(init_in(dir.path(), &InitArgs::default()).unwrap(), None);
        assert!(fs::read_to_string(&existing).unwrap().contains("\"I\""));

        let args = InitArgs {
            force: true,
            ..Default::default()
        };
        assert_eq!(init_in(dir.path(), &args).unwrap(), Some(existing.clone()));
        assert_eq!(fs::read_to_string(&existing).unwrap(), FULL_CONFIG);
    }
}
