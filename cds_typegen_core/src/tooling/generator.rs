//! Orchestrates the translators over a whole schema model.

use crate::error::{CdsTypegenError, Result};
use crate::model::{Csn, Kind};
use crate::typesync::base::{close_block, create_enum_field, JOINER};
use crate::typesync::config::TypesyncConfig;
use crate::typesync::naming::{escape_literal, token};
use crate::typesync::{
    Diagnostic, Diagnostics, Entity, TranslationContext, Translator, TypeReferences,
    TypeTranslator,
};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, trace};

/// Name of the enum listing every entity of a namespace.
pub const ENTITY_ENUM_NAME: &str = "Entity";

const FILE_HEADER: &str = "// This file is generated by cds-typegen. Do not edit it manually.\n";

/// Counts of what a generation pass produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationStats {
    /// Number of entities and aspects translated.
    pub entities: usize,
    /// Number of enum types translated.
    pub enums: usize,
    /// Number of actions and functions translated.
    pub operations: usize,
    /// Number of definitions that produce no declarations.
    pub skipped: usize,
}

/// In-memory result of a generation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedTypes {
    /// The generated TypeScript declarations.
    pub content: String,
    pub stats: GenerationStats,
    /// References that could not be resolved; they never alter `content`.
    pub diagnostics: Vec<Diagnostic>,
}

/// Information about a generated file.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    /// The path where the file was written.
    pub path: PathBuf,
    /// The number of bytes written.
    pub bytes_written: usize,
}

/// Report of a file generation run.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub file: GeneratedFile,
    pub stats: GenerationStats,
    pub diagnostics: Vec<Diagnostic>,
}

/// Declarations of one namespace (or of the top level).
#[derive(Debug, Default)]
struct Block {
    fragments: Vec<String>,
    /// Sanitized name and model name of each entity, in order.
    entities: Vec<(String, String)>,
}

impl Block {
    fn entity_enum(&self) -> Option<String> {
        if self.entities.is_empty() {
            return None;
        }

        let mut seen = HashSet::new();
        let mut code = vec![format!(
            "{} {} {} {}",
            token::EXPORT,
            token::ENUM,
            ENTITY_ENUM_NAME,
            token::CURLY_BRACE_LEFT
        )];
        for (member, model_name) in &self.entities {
            if seen.insert(member.as_str()) {
                code.push(create_enum_field(member, &escape_literal(model_name), true));
            } else {
                trace!(member = %member, model_name = %model_name, "Skipping duplicate entity enum member");
            }
        }
        code.push(close_block());

        Some(format!("{JOINER}{}", code.join(JOINER)))
    }

    fn render(&self, emit_entity_enum: bool) -> String {
        let mut fragments = self.fragments.clone();
        if emit_entity_enum {
            fragments.extend(self.entity_enum());
        }
        fragments.join(JOINER)
    }
}

/// Generates TypeScript declarations for every translatable definition of a model.
///
/// Definitions are emitted in source order. Definitions without a namespace
/// come first; each namespace then follows as an `export namespace` block, in
/// order of first appearance. With `emit_namespaces` unset, everything is
/// emitted at the top level with unqualified names.
pub fn generate_typescript(csn: &Csn, config: &TypesyncConfig) -> GeneratedTypes {
    info!(
        definition_count = csn.definitions.len(),
        interface_prefix = %config.interface_prefix,
        emit_namespaces = config.emit_namespaces,
        "Generating TypeScript declarations"
    );

    let mut stats = GenerationStats::default();
    let mut translators = Vec::new();
    for (name, definition) in &csn.definitions {
        match Translator::for_definition(
            name,
            definition,
            &config.interface_prefix,
            config.emit_namespaces,
        ) {
            Some(translator) => {
                match &translator {
                    Translator::Entity(_) => stats.entities += 1,
                    Translator::Enumeration(_) => stats.enums += 1,
                    Translator::ActionFunction(_) => stats.operations += 1,
                }
                translators.push(translator);
            }
            None => {
                trace!(name = %name, kind = %definition.kind, "Skipping definition");
                stats.skipped += 1;
            }
        }
    }

    let entities: Vec<Entity> = translators
        .iter()
        .filter_map(Translator::as_entity)
        .cloned()
        .collect();
    let references = TypeReferences::from_definitions(&csn.definitions, config.emit_namespaces);
    let ctx = TranslationContext::new(&entities, &references);
    let mut diagnostics = Diagnostics::new();

    let mut top_level = Block::default();
    let mut namespaces: IndexMap<String, Block> = IndexMap::new();
    for translator in &translators {
        let fragment = translator.translate(&ctx, &mut diagnostics);
        let block = match translator.base().namespace() {
            Some(namespace) => namespaces.entry(namespace.to_string()).or_default(),
            None => &mut top_level,
        };

        if let Translator::Entity(entity) = translator {
            block.entities.push((
                entity.sanitized_name(false, false),
                entity.model_name().to_string(),
            ));
        }
        block.fragments.push(fragment);
    }

    let mut sections = Vec::new();
    if !top_level.fragments.is_empty() {
        sections.push(top_level.render(config.emit_entity_enum));
    }
    for (namespace, block) in &namespaces {
        debug!(namespace = %namespace, fragments = block.fragments.len(), "Rendering namespace");
        sections.push(format!(
            "{JOINER}{} {} {} {}{}{JOINER}{}",
            token::EXPORT,
            token::NAMESPACE,
            namespace,
            token::CURLY_BRACE_LEFT,
            block.render(config.emit_entity_enum),
            close_block()
        ));
    }

    let content = if sections.is_empty() {
        String::new()
    } else {
        format!(
            "{}{JOINER}",
            sections.join(JOINER).trim_start_matches(JOINER)
        )
    };

    info!(
        entities = stats.entities,
        enums = stats.enums,
        operations = stats.operations,
        skipped = stats.skipped,
        unresolved = diagnostics.len(),
        output_length = content.len(),
        "TypeScript generation complete"
    );

    GeneratedTypes {
        content,
        stats,
        diagnostics: diagnostics.into_vec(),
    }
}

/// Generator writing the declarations of a model to the configured file.
pub struct TypeGenerator {
    config: TypesyncConfig,
}

impl TypeGenerator {
    /// Creates a new TypeGenerator with the given configuration.
    pub fn new(config: TypesyncConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TypesyncConfig {
        &self.config
    }

    /// Target file: `output_path` joined with `output_file`.
    pub fn output_file_path(&self) -> PathBuf {
        PathBuf::from(&self.config.output_path).join(&self.config.output_file)
    }

    /// Generates declarations in memory.
    pub fn generate(&self, csn: &Csn) -> GeneratedTypes {
        generate_typescript(csn, &self.config)
    }

    /// Generates declarations and writes them, with a header, to the output file.
    pub fn generate_file(&self, csn: &Csn) -> Result<GenerationReport> {
        let generated = self.generate(csn);
        let path = self.output_file_path();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let full_content = format!("{FILE_HEADER}{JOINER}{}", generated.content);
        let bytes_written = full_content.len();
        fs::write(&path, &full_content)?;

        info!("TypeScript declarations written to {:?}", path);

        Ok(GenerationReport {
            file: GeneratedFile {
                path,
                bytes_written,
            },
            stats: generated.stats,
            diagnostics: generated.diagnostics,
        })
    }

    /// Reads the model from the configured `input_path` and writes the output file.
    pub fn generate_from_input(&self) -> Result<GenerationReport> {
        let input = self.config.input_path.as_deref().ok_or_else(|| {
            CdsTypegenError::config("typesync.input_path is not set and no input was given")
        })?;
        let csn = Csn::from_path(input)?;
        self.generate_file(&csn)
    }
}

/// Number of definitions per kind, for reporting.
pub fn kind_counts(csn: &Csn) -> IndexMap<Kind, usize> {
    let mut counts = IndexMap::new();
    for definition in csn.definitions.values() {
        *counts.entry(definition.kind).or_insert(0) += 1;
    }
    counts
}
