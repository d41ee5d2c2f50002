use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CdsTypegenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in file {file}: {message}")]
    ParseError { file: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file not found (searched upward from {search_start})")]
    ConfigNotFound { search_start: PathBuf },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidConfigValue { key: String, value: String },

    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    #[error("Invalid regex pattern: {0}")]
    Regex(String),

    #[error("{0} unresolved schema reference(s) while generating types")]
    UnresolvedReferences(usize),
}

impl From<regex::Error> for CdsTypegenError {
    fn from(err: regex::Error) -> Self {
        CdsTypegenError::Regex(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CdsTypegenError>;

impl CdsTypegenError {
    pub fn parse_error(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CdsTypegenError::ParseError {
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        CdsTypegenError::Config(message.into())
    }

    pub fn invalid_config_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        CdsTypegenError::InvalidConfigValue {
            key: key.into(),
            value: value.into(),
        }
    }
}
