//! Info command - displays the definitions of a model and their translation.

use super::load_config;
use crate::cli::{Cli, InfoArgs};
use cds_typegen_core::{
    error::{CdsTypegenError, Result},
    model::{Csn, Kind},
    tooling::kind_counts,
    typesync::Translator,
};
use std::fmt::Write;
use strum::IntoEnumIterator;

/// Runs the info command.
pub fn run(cli: &Cli, args: &InfoArgs) -> Result<()> {
    let config = load_config(cli)?.typesync;
    let input = match &args.input {
        Some(input) => input.to_string_lossy().into_owned(),
        None => config.input_path.clone().ok_or_else(|| {
            CdsTypegenError::config("typesync.input_path is not set and no --input was given")
        })?,
    };

    let csn = Csn::from_path(&input)?;
    print!("{}", describe(&csn, &config.interface_prefix, config.emit_namespaces));
    Ok(())
}

/// Renders per-kind counts followed by the translator chosen for each definition.
pub fn describe(csn: &Csn, interface_prefix: &str, namespaced: bool) -> String {
    let mut out = String::new();
    let counts = kind_counts(csn);

    let _ = writeln!(out, "\n=== Definitions ===\n");
    if let Some(namespace) = &csn.namespace {
        let _ = writeln!(out, "Namespace: {namespace}");
    }
    for kind in Kind::iter() {
        if let Some(count) = counts.get(&kind) {
            let _ = writeln!(out, "  {:<10} {}", kind.to_string(), count);
        }
    }

    let _ = writeln!(out, "\n=== Translation ===\n");
    for (name, definition) in &csn.definitions {
        let target = match Translator::for_definition(name, definition, interface_prefix, namespaced)
        {
            Some(Translator::Entity(entity)) => {
                format!("interface {}", entity.sanitized_name(true, true))
            }
            Some(Translator::Enumeration(enumeration)) => {
                format!("enum {}", enumeration.sanitized_name(true))
            }
            Some(Translator::ActionFunction(operation)) => {
                format!("{} with {} param(s)", operation.kind(), operation.params().len())
            }
            None => "skipped".to_string(),
        };
        let _ = writeln!(out, "  {name} -> {target}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe_lists_counts_and_targets() {
        let csn = Csn::from_json_str(
            r#"{
                "namespace": "my.bookshop",
                "definitions": {
                    "my.bookshop.Books": { "kind": "entity" },
                    "my.bookshop.Genre": { "kind": "type", "type": "cds.String", "enum": { "Fiction": {} } },
                    "my.bookshop.submitOrder": { "kind": "action", "params": { "book": { "type": "cds.Integer" } } },
                    "my.bookshop.CatalogService": { "kind": "service" }
                }
            }"#,
        )
        .unwrap();

        let expected = "
=== Definitions ===

Namespace: my.bookshop
  entity     1
  type       1
  action     1
  service    1

=== Translation ===

  my.bookshop.Books -> interface my.bookshop.IBooks
  my.bookshop.Genre -> enum my.bookshop.Genre
  my.bookshop.submitOrder -> action with 1 param(s)
  my.bookshop.CatalogService -> skipped
";
        assert_eq!(describe(&csn, "I", true), expected);
    }
}
