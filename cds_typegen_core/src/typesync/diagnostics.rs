//! Non-fatal notes about references the generator could not resolve.
//!
//! Translators never fail; when a cross-reference misses they omit the derived
//! output and record what was skipped here. Collecting diagnostics never changes
//! the generated text.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    #[error("{definition}: included definition `{include}` not found")]
    UnresolvedInclude { definition: String, include: String },

    #[error("{definition}.{field}: association target `{target}` not found")]
    UnresolvedTarget {
        definition: String,
        field: String,
        target: String,
    },

    #[error("{definition}.{field}: key `{key}` not found on `{target}`")]
    UnresolvedKey {
        definition: String,
        field: String,
        target: String,
        key: String,
    },

    #[error("{definition}.{field}: type `{type_name}` mapped to `any`")]
    UnknownType {
        definition: String,
        field: String,
        type_name: String,
    },
}

/// Collector for [`Diagnostic`]s raised during one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        debug!(%diagnostic, "Unresolved schema reference");
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}
