//! Enum types: `type Genre : String enum { Fiction; NonFiction = 'non-fiction' }`.

use super::base::{close_block, create_bare_enum_field, create_enum_field, BaseType, JOINER};
use super::naming::{escape_literal, is_numeric_type};
use crate::model::{Definition, EnumLiteral};
use serde_json::Value;
use tracing::trace;

/// Translates a type with literal enum values into an `export enum`.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration {
    base: BaseType,
}

impl Enumeration {
    pub fn new(name: impl Into<String>, definition: Definition) -> Self {
        Self {
            base: BaseType::new(name, definition),
        }
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.base = self.base.with_namespace(namespace);
        self
    }

    pub fn base(&self) -> &BaseType {
        &self.base
    }

    pub fn sanitized_name(&self, with_namespace: bool) -> String {
        let local = self.base.local_name();
        if with_namespace {
            self.base.qualify(&local)
        } else {
            local
        }
    }

    pub fn to_type(&self) -> String {
        let definition = self.base.definition();
        let numeric = definition
            .type_name
            .as_deref()
            .is_some_and(is_numeric_type);

        trace!(
            name = self.base.name(),
            members = definition.enum_values.len(),
            "Translating enum type"
        );

        let mut code = vec![self.base.create_enum("", "")];
        for (member, literal) in &definition.enum_values {
            code.push(member_line(member, literal, numeric));
        }
        code.push(close_block());

        format!("{JOINER}{}", code.join(JOINER))
    }
}

fn member_line(member: &str, literal: &EnumLiteral, numeric: bool) -> String {
    match &literal.val {
        Some(Value::Number(n)) if numeric => create_enum_field(member, &n.to_string(), false),
        Some(Value::String(s)) => create_enum_field(member, &escape_literal(s), true),
        Some(Value::Null) | None if numeric => create_bare_enum_field(member),
        Some(Value::Null) | None => create_enum_field(member, &escape_literal(member), true),
        Some(other) => create_enum_field(member, &escape_literal(&other.to_string()), true),
    }
}
