//! Name sanitization, primitive type mapping and the syntax tokens used by
//! every translator.

use convert_case::{Case, Casing};

/// Syntax tokens of the emitted TypeScript.
pub mod token {
    pub const COLON: &str = ":";
    pub const SEMICOLON: &str = ";";
    pub const COMMA: &str = ",";
    pub const EQUALS: &str = "=";
    pub const QUESTION_MARK: &str = "?";
    pub const QUOTE: &str = "\"";
    pub const CURLY_BRACE_LEFT: &str = "{";
    pub const CURLY_BRACE_RIGHT: &str = "}";
    pub const ARRAY_BRACKETS: &str = "[]";
    pub const EXPORT: &str = "export";
    pub const INTERFACE: &str = "interface";
    pub const ENUM: &str = "enum";
    pub const NAMESPACE: &str = "namespace";
    pub const EXTENDS: &str = "extends";
    pub const INDENT: &str = "    ";
}

/// Fallback for types the generator cannot map.
pub const ANY_TYPE: &str = "any";

/// Turns an arbitrary schema name into a PascalCase identifier fragment.
///
/// Characters other than ASCII alphanumerics and `_` act as word separators,
/// so `order-id`, `order.id` and `orderId` all become `OrderId`.
pub fn sanitize_name(raw: &str) -> String {
    let words: String = raw
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                ' '
            }
        })
        .collect();

    words.to_case(Case::Pascal)
}

/// Last segment of a dot-qualified model name.
pub fn sanitize_target(qualified_name: &str) -> &str {
    qualified_name
        .rsplit('.')
        .next()
        .unwrap_or(qualified_name)
}

/// Namespace part of a dot-qualified model name, if any.
pub fn namespace_of(qualified_name: &str) -> Option<&str> {
    qualified_name
        .rsplit_once('.')
        .map(|(namespace, _)| namespace)
        .filter(|namespace| !namespace.is_empty())
}

/// Maps a CDS primitive to the corresponding TypeScript type.
pub fn cds_type_to_type(cds_type: &str) -> &'static str {
    match cds_type {
        "cds.UUID" | "cds.String" | "cds.LargeString" => "string",
        "cds.Boolean" => "boolean",
        "cds.Integer" | "cds.Int16" | "cds.Int32" | "cds.Int64" | "cds.Integer64"
        | "cds.UInt8" | "cds.Decimal" | "cds.DecimalFloat" | "cds.Double" => "number",
        "cds.Date" | "cds.Time" | "cds.DateTime" | "cds.Timestamp" => "Date",
        "cds.Binary" | "cds.LargeBinary" => "Buffer",
        _ => ANY_TYPE,
    }
}

/// Whether a CDS primitive is represented as a TypeScript number.
pub fn is_numeric_type(cds_type: &str) -> bool {
    cds_type_to_type(cds_type) == "number"
}

/// Escapes a literal for use inside a double-quoted TypeScript string.
pub fn escape_literal(literal: &str) -> String {
    literal.replace('\\', "\\\\").replace('"', "\\\"")
}
