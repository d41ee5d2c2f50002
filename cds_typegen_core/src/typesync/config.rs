use serde::{Deserialize, Serialize};

/// Configuration for type generation (the `[typesync]` table)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, bon::Builder)]
pub struct TypesyncConfig {
    /// Compiled CSN JSON model to read
    #[serde(default)]
    #[builder(into)]
    pub input_path: Option<String>,
    /// Output directory for generated type files
    #[serde(default = "default_output_path")]
    #[builder(into, default = default_output_path())]
    pub output_path: String,
    /// File name of the generated declarations inside `output_path`
    #[serde(default = "default_output_file")]
    #[builder(into, default = default_output_file())]
    pub output_file: String,
    /// Prefix for generated interface names (e.g. "I" for `IBooks`)
    #[serde(default)]
    #[builder(into, default)]
    pub interface_prefix: String,
    /// Whether to append an `Entity` enum listing the model names of all entities
    #[serde(default = "enabled")]
    #[builder(default = true)]
    pub emit_entity_enum: bool,
    /// Whether to wrap definitions in `export namespace` blocks
    #[serde(default = "enabled")]
    #[builder(default = true)]
    pub emit_namespaces: bool,
}

fn default_output_path() -> String {
    "./src/generated/".to_string()
}

fn default_output_file() -> String {
    "entities.ts".to_string()
}

fn enabled() -> bool {
    true
}

impl Default for TypesyncConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
