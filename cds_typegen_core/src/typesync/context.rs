//! Read-only view of the generation pass shared by all translators.

use super::entity::Entity;
use super::naming::{cds_type_to_type, namespace_of, sanitize_name, sanitize_target, ANY_TYPE};
use crate::model::Definition;
use indexmap::IndexMap;
use tracing::trace;

/// Maximum number of alias hops followed when resolving a type reference.
const MAX_ALIAS_DEPTH: usize = 16;

/// Rendered TypeScript types for named (non-primitive) schema types.
///
/// Enum types resolve to their generated enum name; scalar aliases such as
/// `type Price : Decimal` resolve to the primitive they stand for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeReferences {
    rendered: IndexMap<String, String>,
}

impl TypeReferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the table from a definition collection. With `qualify` set, enum
    /// names are prefixed with the namespace of their definition.
    pub fn from_definitions(definitions: &IndexMap<String, Definition>, qualify: bool) -> Self {
        let mut references = Self::new();

        for (name, definition) in definitions {
            if definition.is_enum_type() {
                let local = sanitize_name(sanitize_target(name));
                let rendered = match namespace_of(name) {
                    Some(namespace) if qualify => format!("{namespace}.{local}"),
                    _ => local,
                };
                references.insert(name.clone(), rendered);
            } else if definition.kind == crate::model::Kind::Type
                && let Some(primitive) = resolve_alias(definitions, name)
            {
                references.insert(name.clone(), primitive.to_string());
            }
        }

        trace!(count = references.len(), "Built type reference table");
        references
    }

    pub fn insert(&mut self, name: impl Into<String>, rendered: impl Into<String>) {
        self.rendered.insert(name.into(), rendered.into());
    }

    pub fn resolve(&self, name: &str) -> Option<&str> {
        self.rendered.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}

/// Follows scalar type aliases down to a `cds.*` primitive.
fn resolve_alias(definitions: &IndexMap<String, Definition>, name: &str) -> Option<&'static str> {
    let mut current = name;
    for _ in 0..MAX_ALIAS_DEPTH {
        let definition = definitions.get(current)?;
        if !definition.enum_values.is_empty() || !definition.elements.is_empty() {
            return None;
        }
        let type_name = definition.type_name.as_deref()?;
        if type_name.starts_with("cds.") {
            return match cds_type_to_type(type_name) {
                ANY_TYPE => None,
                primitive => Some(primitive),
            };
        }
        current = type_name;
    }
    None
}

/// Everything a translator may look at besides its own definition.
#[derive(Debug, Clone, Copy)]
pub struct TranslationContext<'a> {
    pub entities: &'a [Entity],
    pub type_references: &'a TypeReferences,
}

impl<'a> TranslationContext<'a> {
    pub fn new(entities: &'a [Entity], type_references: &'a TypeReferences) -> Self {
        Self {
            entities,
            type_references,
        }
    }

    /// Sibling entity with exactly this model name.
    pub fn entity(&self, model_name: &str) -> Option<&'a Entity> {
        self.entities
            .iter()
            .find(|entity| entity.model_name() == model_name)
    }
}
