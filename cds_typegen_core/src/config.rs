use crate::error::{CdsTypegenError, Result};
use crate::typesync::config::TypesyncConfig;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use tracing::{debug, error, info, trace, warn};

/// File name searched for when no explicit configuration path is given.
pub const CONFIG_FILE_NAME: &str = "cds-typegen.toml";

/// Root configuration loaded from `cds-typegen.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CdsTypegenConfig {
    /// Type generation settings
    #[serde(default)]
    pub typesync: TypesyncConfig,
}

impl CdsTypegenConfig {
    /// Load configuration by searching for cds-typegen.toml in the current
    /// directory and its ancestors.
    pub fn new() -> Result<CdsTypegenConfig> {
        let config_path = Self::find_config_file(&env::current_dir()?)?;
        Self::from_path(config_path)
    }

    /// Load configuration from an explicit file, or search for one when `None`.
    pub fn load(path: Option<&Path>) -> Result<CdsTypegenConfig> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::new(),
        }
    }

    /// Load configuration from a specific file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<CdsTypegenConfig> {
        let path = path.as_ref();
        info!("Loading cds-typegen configuration from {:?}", path);
        dotenv::dotenv().ok();
        debug!("Environment variables loaded from .env if present");

        let contents = fs::read_to_string(path).map_err(|e| {
            error!("Failed to read configuration file: {}", e);
            CdsTypegenError::from(e)
        })?;

        debug!("Configuration file size: {} bytes", contents.len());
        Self::from_toml_str(&contents)
    }

    /// Parse configuration text and substitute environment variables in path values.
    pub fn from_toml_str(contents: &str) -> Result<CdsTypegenConfig> {
        let mut config: CdsTypegenConfig = toml::from_str(contents).map_err(|e| {
            error!("Failed to parse TOML configuration: {}", e);
            CdsTypegenError::config(e.to_string())
        })?;

        debug!("Substituting environment variables in configuration");
        config.typesync.output_path = Self::substitute_env_vars(&config.typesync.output_path)?;
        if let Some(input_path) = &config.typesync.input_path {
            config.typesync.input_path = Some(Self::substitute_env_vars(input_path)?);
        }

        debug!(
            "Typesync prefix: {:?}, namespaces: {}, entity enum: {}",
            config.typesync.interface_prefix,
            config.typesync.emit_namespaces,
            config.typesync.emit_entity_enum
        );

        Ok(config)
    }

    /// Searches for `cds-typegen.toml` starting from `start_dir` and
    /// traversing up to the root.
    pub fn find_config_file(start_dir: &Path) -> Result<PathBuf> {
        debug!("Starting config file search from: {:?}", start_dir);

        for path in start_dir.ancestors() {
            let config_path = path.join(CONFIG_FILE_NAME);
            trace!("Checking for config at: {:?}", config_path);
            if config_path.exists() {
                return Ok(config_path);
            }
        }

        error!("Configuration file '{CONFIG_FILE_NAME}' not found in any parent directory.");
        Err(CdsTypegenError::ConfigNotFound {
            search_start: start_dir.to_path_buf(),
        })
    }

    /// Substitute environment variables in config strings
    /// Supports ${VAR_NAME:-default} syntax
    pub fn substitute_env_vars(value: &str) -> Result<String> {
        trace!("Substituting environment variables in: {}", value);
        let mut result = value.to_string();

        let re = regex::Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}")?;

        for cap in re.captures_iter(value) {
            let var_name = &cap[1];
            let default_value = cap.get(2).map(|m| m.as_str());

            let replacement = match env::var(var_name) {
                Ok(val) => {
                    debug!("Resolved environment variable: {}", var_name);
                    val
                }
                Err(_) => match default_value {
                    Some(default) => {
                        warn!(
                            "Environment variable {} not set, using default: {}",
                            var_name, default
                        );
                        default.to_string()
                    }
                    None => {
                        error!(
                            "Environment variable {} not set and no default provided",
                            var_name
                        );
                        return Err(CdsTypegenError::EnvVarNotSet(var_name.to_string()));
                    }
                },
            };

            result = result.replace(&cap[0], &replacement);
        }

        Ok(result)
    }
}
