//! In-memory schema model consumed by the type generators.
//!
//! The model mirrors the JSON "core schema notation" (CSN) emitted by the CDS
//! compiler, so a compiled model can be deserialized straight into it. Every
//! name-keyed collection is an [`IndexMap`] because declaration order is part
//! of the generated output.

mod element;

pub use element::{Cardinality, Element, EnumLiteral, KeyRef};

use crate::error::{CdsTypegenError, Result};
use bon::Builder;
use indexmap::IndexMap;
use serde::Deserialize;
use std::{fs, path::Path};
use tracing::{debug, info};

/// Kind of a schema definition.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    Entity,
    Aspect,
    Type,
    Action,
    Function,
    Service,
    Context,
    Event,
    #[default]
    #[serde(other)]
    Other,
}

/// One schema construct: an entity, a type, an action or a function.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Builder)]
pub struct Definition {
    #[serde(default)]
    #[builder(default)]
    pub kind: Kind,

    /// Scalar type of a type definition (e.g. `cds.String` for a string enum).
    #[serde(default, rename = "type")]
    #[builder(into)]
    pub type_name: Option<String>,

    #[serde(default)]
    #[builder(default)]
    pub elements: IndexMap<String, Element>,

    #[serde(default)]
    #[builder(default)]
    pub params: IndexMap<String, Element>,

    /// Model names of the entities/aspects this definition includes.
    #[serde(default)]
    #[builder(default)]
    pub includes: Vec<String>,

    #[serde(default, rename = "enum")]
    #[builder(default)]
    pub enum_values: IndexMap<String, EnumLiteral>,
}

impl Definition {
    pub fn is_entity_like(&self) -> bool {
        matches!(self.kind, Kind::Entity | Kind::Aspect)
    }

    pub fn is_operation(&self) -> bool {
        matches!(self.kind, Kind::Action | Kind::Function)
    }

    /// A type definition that carries literal enum values.
    pub fn is_enum_type(&self) -> bool {
        self.kind == Kind::Type && !self.enum_values.is_empty()
    }
}

/// A compiled schema model: an ordered collection of named definitions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Csn {
    #[serde(default)]
    pub namespace: Option<String>,

    #[serde(default)]
    pub definitions: IndexMap<String, Definition>,
}

impl Csn {
    pub fn new(definitions: IndexMap<String, Definition>) -> Self {
        Self {
            namespace: None,
            definitions,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let csn: Csn = serde_json::from_str(json)?;
        debug!(
            definition_count = csn.definitions.len(),
            "Parsed schema model"
        );
        Ok(csn)
    }

    /// Reads and parses a CSN JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading schema model from {:?}", path);

        let contents = fs::read_to_string(path)?;
        let csn: Csn = serde_json::from_str(&contents)
            .map_err(|e| CdsTypegenError::parse_error(path, e.to_string()))?;

        info!(
            definition_count = csn.definitions.len(),
            "Schema model loaded"
        );
        Ok(csn)
    }

    /// Number of definitions of the given kind.
    pub fn count_of(&self, kind: Kind) -> usize {
        self.definitions
            .values()
            .filter(|definition| definition.kind == kind)
            .count()
    }
}
