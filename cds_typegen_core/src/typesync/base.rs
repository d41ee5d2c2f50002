//! State and line builders shared by every translator.

use super::context::TranslationContext;
use super::diagnostics::{Diagnostic, Diagnostics};
use super::naming::{
    cds_type_to_type, sanitize_name, sanitize_target, token, ANY_TYPE,
};
use crate::model::{Definition, Element};

/// Line separator used to assemble multi-line output.
pub const JOINER: &str = "\n";

/// One schema definition together with the naming context it is rendered in.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseType {
    name: String,
    definition: Definition,
    prefix: String,
    namespace: Option<String>,
}

impl BaseType {
    pub fn new(name: impl Into<String>, definition: Definition) -> Self {
        Self {
            name: name.into(),
            definition,
            prefix: String::new(),
            namespace: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.namespace = namespace.filter(|namespace| !namespace.is_empty());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn definition(&self) -> &Definition {
        &self.definition
    }

    /// Interface-name prefix, e.g. `I`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Sanitized last segment of the definition name.
    pub fn local_name(&self) -> String {
        sanitize_name(sanitize_target(&self.name))
    }

    /// Prepends the namespace, when there is one.
    pub fn qualify(&self, local: &str) -> String {
        match &self.namespace {
            Some(namespace) => format!("{namespace}.{local}"),
            None => local.to_string(),
        }
    }

    /// `export interface <Prefix><prefix><Name><suffix> extends A, B {`
    pub fn create_interface(&self, extends: &[String], prefix: &str, suffix: &str) -> String {
        let extension = if extends.is_empty() {
            String::new()
        } else {
            format!("{} {} ", token::EXTENDS, extends.join(", "))
        };

        format!(
            "{} {} {}{}{}{} {}{}",
            token::EXPORT,
            token::INTERFACE,
            self.prefix,
            prefix,
            self.local_name(),
            suffix,
            extension,
            token::CURLY_BRACE_LEFT
        )
    }

    /// `export enum <prefix><Name><suffix> {`
    pub fn create_enum(&self, prefix: &str, suffix: &str) -> String {
        format!(
            "{} {} {}{}{} {}",
            token::EXPORT,
            token::ENUM,
            prefix,
            self.local_name(),
            suffix,
            token::CURLY_BRACE_LEFT
        )
    }

    /// Renders the TypeScript type of an element.
    ///
    /// Associations render the target's interface name, arrayed elements their
    /// item type with `[]`, named types go through the context's reference
    /// table and primitives through [`cds_type_to_type`]. Anything else is `any`.
    pub fn element_type(
        &self,
        field: &str,
        element: &Element,
        ctx: &TranslationContext<'_>,
        diagnostics: &mut Diagnostics,
    ) -> String {
        if element.is_association() {
            let rendered = match element.target.as_deref() {
                Some(target) => match ctx.entity(target) {
                    Some(entity) => entity.sanitized_name(true, true),
                    None => {
                        diagnostics.push(Diagnostic::UnresolvedTarget {
                            definition: self.name.clone(),
                            field: field.to_string(),
                            target: target.to_string(),
                        });
                        format!("{}{}", self.prefix, sanitize_name(sanitize_target(target)))
                    }
                },
                None => ANY_TYPE.to_string(),
            };

            return if element.is_to_many() {
                format!("{rendered}{}", token::ARRAY_BRACKETS)
            } else {
                rendered
            };
        }

        if let Some(items) = &element.items {
            let item_type = self.element_type(field, items, ctx, diagnostics);
            return format!("{item_type}{}", token::ARRAY_BRACKETS);
        }

        let Some(type_name) = element.type_name.as_deref() else {
            return ANY_TYPE.to_string();
        };

        let rendered = if type_name.starts_with("cds.") {
            Some(cds_type_to_type(type_name)).filter(|rendered| *rendered != ANY_TYPE)
        } else {
            ctx.type_references.resolve(type_name)
        };

        match rendered {
            Some(rendered) => rendered.to_string(),
            None => {
                diagnostics.push(Diagnostic::UnknownType {
                    definition: self.name.clone(),
                    field: field.to_string(),
                    type_name: type_name.to_string(),
                });
                ANY_TYPE.to_string()
            }
        }
    }
}

/// `    name = "value",` or, unquoted, `    name = value,`
pub fn create_enum_field(name: &str, value: &str, quoted: bool) -> String {
    let quote = if quoted { token::QUOTE } else { "" };
    format!(
        "{}{} {} {quote}{value}{quote}{}",
        token::INDENT,
        name,
        token::EQUALS,
        token::COMMA
    )
}

/// `    name,`
pub fn create_bare_enum_field(name: &str) -> String {
    format!("{}{}{}", token::INDENT, name, token::COMMA)
}

/// `    name?: type;` or `    name: type;`
pub fn create_interface_field(name: &str, ts_type: &str, optional: bool) -> String {
    format!(
        "{}{}{}{} {}{}",
        token::INDENT,
        name,
        if optional { token::QUESTION_MARK } else { "" },
        token::COLON,
        ts_type,
        token::SEMICOLON
    )
}

/// `    <field><suffix><key>?: type;`
pub fn create_association_ref_field(field: &str, suffix: &str, key: &str, ts_type: &str) -> String {
    create_interface_field(&format!("{field}{suffix}{key}"), ts_type, true)
}

/// Closing line of an enum, interface or namespace.
pub fn close_block() -> String {
    token::CURLY_BRACE_RIGHT.to_string()
}
