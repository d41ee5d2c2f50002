//! Entities and aspects, rendered as TypeScript interfaces.

use super::base::{
    close_block, create_association_ref_field, create_interface_field, BaseType, JOINER,
};
use super::context::{TranslationContext, TypeReferences};
use super::diagnostics::{Diagnostic, Diagnostics};
use super::enumeration::Enumeration;
use super::naming::{cds_type_to_type, sanitize_name, sanitize_target, ANY_TYPE};
use crate::model::{Definition, Element, Kind};
use std::collections::HashSet;
use tracing::{debug, trace};

/// Separator between an association name and its key in back-reference fields.
pub const ASSOCIATION_REF_SUFFIX: &str = "_";

/// Translates an entity into an interface.
///
/// Included entities become the `extends` clause and their fields are not
/// repeated. Inline enums are pulled out into standalone enums emitted ahead
/// of the interface, and to-one managed associations get one optional
/// `<association>_<key>` field per foreign key.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    base: BaseType,
}

impl Entity {
    pub fn new(name: impl Into<String>, definition: Definition) -> Self {
        Self {
            base: BaseType::new(name, definition),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.base = self.base.with_prefix(prefix);
        self
    }

    pub fn with_namespace(mut self, namespace: Option<String>) -> Self {
        self.base = self.base.with_namespace(namespace);
        self
    }

    pub fn base(&self) -> &BaseType {
        &self.base
    }

    /// Sanitized entity name, optionally with the interface prefix and the namespace.
    pub fn sanitized_name(&self, with_prefix: bool, with_namespace: bool) -> String {
        let mut name = self.base.local_name();

        if with_prefix {
            name = format!("{}{}", self.base.prefix(), name);
        }

        if with_namespace {
            name = self.base.qualify(&name);
        }

        name
    }

    /// Name of the entity in the schema model.
    pub fn model_name(&self) -> &str {
        self.base.name()
    }

    /// Declared field names, in order.
    pub fn fields(&self) -> Vec<&str> {
        self.base
            .definition()
            .elements
            .keys()
            .map(String::as_str)
            .collect()
    }

    /// Translates against the given siblings only.
    pub fn to_type(&self, types: &[Entity]) -> String {
        let references = TypeReferences::new();
        let ctx = TranslationContext::new(types, &references);
        self.to_type_in(&ctx, &mut Diagnostics::new())
    }

    pub fn to_type_in(&self, ctx: &TranslationContext<'_>, diagnostics: &mut Diagnostics) -> String {
        let included = self.included_entities(ctx, diagnostics);
        let extends: Vec<String> = included
            .iter()
            .map(|entity| entity.sanitized_name(true, true))
            .collect();
        let inherited: HashSet<&str> = included
            .iter()
            .copied()
            .flat_map(Entity::fields)
            .collect();

        trace!(
            name = self.model_name(),
            extends = ?extends,
            inherited = inherited.len(),
            "Translating entity"
        );

        let mut code = vec![self.base.create_interface(&extends, "", "")];
        let mut enum_code = Vec::new();

        for (field, element) in &self.base.definition().elements {
            if !element.enum_values.is_empty() {
                let enum_name = format!("{}{}", self.base.local_name(), sanitize_name(field));
                let enum_type = Enumeration::new(
                    enum_name.clone(),
                    Definition {
                        kind: Kind::Type,
                        type_name: element.type_name.clone(),
                        enum_values: element.enum_values.clone(),
                        ..Default::default()
                    },
                );
                enum_code.push(enum_type.to_type().trim_start_matches(JOINER).to_string());
                code.push(create_interface_field(field, &enum_name, true));
            } else if !inherited.contains(field.as_str()) {
                let field_type = self.base.element_type(field, element, ctx, diagnostics);
                code.push(create_interface_field(field, &field_type, true));

                if element.is_to_one() {
                    code.extend(self.association_ref_fields(
                        ctx,
                        field,
                        ASSOCIATION_REF_SUFFIX,
                        element,
                        diagnostics,
                    ));
                }
            }
        }
        code.push(close_block());

        let result = if enum_code.is_empty() {
            code.join(JOINER)
        } else {
            format!("{}{JOINER}{}", enum_code.join(JOINER), code.join(JOINER))
        };

        format!("{JOINER}{result}")
    }

    /// Siblings named in `includes`, in sibling order. An include matches by
    /// model name, or by unqualified name when no model name matches.
    fn included_entities<'a>(
        &self,
        ctx: &TranslationContext<'a>,
        diagnostics: &mut Diagnostics,
    ) -> Vec<&'a Entity> {
        let includes = &self.base.definition().includes;
        if includes.is_empty() {
            return Vec::new();
        }

        let mut wanted: HashSet<&str> = HashSet::new();
        let mut wanted_local: HashSet<&str> = HashSet::new();
        for include in includes {
            if ctx.entity(include).is_some() {
                wanted.insert(include.as_str());
            } else if ctx
                .entities
                .iter()
                .any(|entity| sanitize_target(entity.model_name()) == sanitize_target(include))
            {
                wanted_local.insert(sanitize_target(include));
            } else {
                diagnostics.push(Diagnostic::UnresolvedInclude {
                    definition: self.model_name().to_string(),
                    include: include.clone(),
                });
            }
        }

        ctx.entities
            .iter()
            .filter(|entity| {
                wanted.contains(entity.model_name())
                    || wanted_local.contains(sanitize_target(entity.model_name()))
            })
            .collect()
    }

    /// Back-reference fields for a to-one association: one per key that
    /// resolves to a field of the target entity.
    fn association_ref_fields(
        &self,
        ctx: &TranslationContext<'_>,
        name: &str,
        suffix: &str,
        element: &Element,
        diagnostics: &mut Diagnostics,
    ) -> Vec<String> {
        let Some(target) = element.target.as_deref() else {
            return Vec::new();
        };
        if element.keys.is_empty() {
            return Vec::new();
        }
        // A missing target has already been reported while rendering the field type.
        let Some(entity) = ctx.entity(target) else {
            return Vec::new();
        };

        let target_elements = &entity.base.definition().elements;
        let mut result = Vec::new();
        for key in &element.keys {
            let Some(key_field) = key.field() else {
                continue;
            };

            match target_elements.get_key_value(key_field) {
                Some((field, target_element)) => {
                    let key_type = match target_element.type_name.as_deref() {
                        Some(type_name) if type_name.starts_with("cds.") => {
                            cds_type_to_type(type_name)
                        }
                        Some(type_name) => ctx.type_references.resolve(type_name).unwrap_or(ANY_TYPE),
                        None => ANY_TYPE,
                    };
                    result.push(create_association_ref_field(name, suffix, field, key_type));
                }
                None => diagnostics.push(Diagnostic::UnresolvedKey {
                    definition: self.model_name().to_string(),
                    field: name.to_string(),
                    target: target.to_string(),
                    key: key_field.to_string(),
                }),
            }
        }

        debug!(
            entity = self.model_name(),
            association = name,
            count = result.len(),
            "Projected association keys"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Cardinality, EnumLiteral, KeyRef};
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn entity(name: &str, elements: Vec<(&str, Element)>) -> Entity {
        Entity::new(
            name,
            Definition::builder()
                .kind(Kind::Entity)
                .elements(
                    elements
                        .into_iter()
                        .map(|(field, element)| (field.to_string(), element))
                        .collect::<IndexMap<_, _>>(),
                )
                .build(),
        )
    }

    fn including(name: &str, includes: &[&str], elements: Vec<(&str, Element)>) -> Entity {
        let mut entity = entity(name, elements);
        entity.base = BaseType::new(
            name,
            Definition {
                includes: includes.iter().map(ToString::to_string).collect(),
                ..entity.base.definition().clone()
            },
        );
        entity
    }

    fn author_association(target: &str) -> Element {
        Element::builder()
            .type_name("cds.Association")
            .target(target)
            .cardinality(Cardinality::One)
            .keys(vec![KeyRef::new(["ID"])])
            .build()
    }

    #[test]
    fn test_plain_entity_keeps_field_order() {
        let books = entity(
            "Books",
            vec![
                ("a", Element::of_type("cds.String")),
                ("b", Element::of_type("cds.Integer")),
                ("c", Element::of_type("cds.Boolean")),
            ],
        );

        assert_eq!(
            books.to_type(&[]),
            "\nexport interface Books {\n    a?: string;\n    b?: number;\n    c?: boolean;\n}"
        );
    }

    #[test]
    fn test_included_fields_are_not_repeated() {
        let managed = entity("Managed", vec![("createdAt", Element::of_type("cds.Timestamp"))]);
        let books = including(
            "Books",
            &["Managed"],
            vec![
                ("createdAt", Element::of_type("cds.Timestamp")),
                ("title", Element::of_type("cds.String")),
            ],
        );
        let siblings = vec![managed, books.clone()];

        assert_eq!(
            books.to_type(&siblings),
            "\nexport interface Books extends Managed {\n    title?: string;\n}"
        );
    }

    #[test]
    fn test_includes_use_prefixed_qualified_names_in_sibling_order() {
        let cuid = entity("cuid", vec![("ID", Element::of_type("cds.UUID"))])
            .with_prefix("I");
        let managed = entity("sap.common.managed", vec![])
            .with_prefix("I")
            .with_namespace(Some("sap.common".to_string()));
        let books = including(
            "my.bookshop.Books",
            &["sap.common.managed", "cuid"],
            vec![("ID", Element::of_type("cds.UUID"))],
        )
        .with_prefix("I");
        let siblings = vec![cuid, managed, books.clone()];

        assert_eq!(
            books.to_type(&siblings),
            "\nexport interface IBooks extends ICuid, sap.common.IManaged {\n}"
        );
    }

    #[test]
    fn test_include_falls_back_to_unqualified_name() {
        let managed = entity("sap.common.managed", vec![("modifiedAt", Element::of_type("cds.Timestamp"))]);
        let books = including(
            "Books",
            &["managed"],
            vec![("modifiedAt", Element::of_type("cds.Timestamp"))],
        );
        let siblings = vec![managed, books.clone()];

        assert_eq!(
            books.to_type(&siblings),
            "\nexport interface Books extends Managed {\n}"
        );
    }

    #[test]
    fn test_inline_enum_is_extracted_before_interface() {
        let genre = Element::builder()
            .type_name("cds.String")
            .enum_values(IndexMap::from([
                ("Fiction".to_string(), EnumLiteral::unset()),
                ("NonFiction".to_string(), EnumLiteral::unset()),
            ]))
            .build();
        let books = entity(
            "Books",
            vec![("title", Element::of_type("cds.String")), ("genre", genre)],
        );

        assert_eq!(
            books.to_type(&[]),
            "\nexport enum BooksGenre {\n    Fiction = \"Fiction\",\n    NonFiction = \"NonFiction\",\n}\nexport interface Books {\n    title?: string;\n    genre?: BooksGenre;\n}"
        );
    }

    #[test]
    fn test_to_one_association_projects_key_field() {
        let authors = entity("Authors", vec![("ID", Element::of_type("cds.Integer"))]);
        let books = entity(
            "Books",
            vec![
                ("author", author_association("Authors")),
                ("title", Element::of_type("cds.String")),
            ],
        );
        let siblings = vec![books.clone(), authors];

        assert_eq!(
            books.to_type(&siblings),
            "\nexport interface Books {\n    author?: Authors;\n    author_ID?: number;\n    title?: string;\n}"
        );
    }

    #[test]
    fn test_to_many_association_is_array_without_back_reference() {
        let books = entity("Books", vec![("ID", Element::of_type("cds.Integer"))]);
        let authors = entity(
            "Authors",
            vec![(
                "books",
                Element::builder()
                    .type_name("cds.Association")
                    .target("Books")
                    .cardinality(Cardinality::Many)
                    .keys(vec![KeyRef::new(["ID"])])
                    .build(),
            )],
        );
        let siblings = vec![books, authors.clone()];

        assert_eq!(
            authors.to_type(&siblings),
            "\nexport interface Authors {\n    books?: Books[];\n}"
        );
    }

    #[test]
    fn test_missing_target_omits_back_reference() {
        let books = entity("Books", vec![("author", author_association("Authors"))]);
        let mut diagnostics = Diagnostics::new();
        let references = TypeReferences::new();
        let siblings = vec![books.clone()];
        let ctx = TranslationContext::new(&siblings, &references);

        assert_eq!(
            books.to_type_in(&ctx, &mut diagnostics),
            "\nexport interface Books {\n    author?: Authors;\n}"
        );
        assert_eq!(
            diagnostics.into_vec(),
            vec![Diagnostic::UnresolvedTarget {
                definition: "Books".to_string(),
                field: "author".to_string(),
                target: "Authors".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_key_field_omits_back_reference() {
        let authors = entity("Authors", vec![("name", Element::of_type("cds.String"))]);
        let books = entity("Books", vec![("author", author_association("Authors"))]);
        let siblings = vec![authors, books.clone()];
        let references = TypeReferences::new();
        let ctx = TranslationContext::new(&siblings, &references);
        let mut diagnostics = Diagnostics::new();

        assert_eq!(
            books.to_type_in(&ctx, &mut diagnostics),
            "\nexport interface Books {\n    author?: Authors;\n}"
        );
        assert!(matches!(
            diagnostics.into_vec().as_slice(),
            [Diagnostic::UnresolvedKey { key, .. }] if key == "ID"
        ));
    }

    #[test]
    fn test_association_without_keys_has_no_back_reference() {
        let authors = entity("Authors", vec![("ID", Element::of_type("cds.Integer"))]);
        let books = entity(
            "Books",
            vec![(
                "author",
                Element::builder()
                    .type_name("cds.Association")
                    .target("Authors")
                    .cardinality(Cardinality::One)
                    .build(),
            )],
        );
        let siblings = vec![authors, books.clone()];

        assert_eq!(
            books.to_type(&siblings),
            "\nexport interface Books {\n    author?: Authors;\n}"
        );
    }

    #[test]
    fn test_unresolved_include_is_reported_and_skipped() {
        let books = including("Books", &["managed"], vec![("title", Element::of_type("cds.String"))]);
        let references = TypeReferences::new();
        let ctx = TranslationContext::new(&[], &references);
        let mut diagnostics = Diagnostics::new();

        assert_eq!(
            books.to_type_in(&ctx, &mut diagnostics),
            "\nexport interface Books {\n    title?: string;\n}"
        );
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_empty_entity_is_closed() {
        assert_eq!(
            entity("Empty", vec![]).to_type(&[]),
            "\nexport interface Empty {\n}"
        );
    }

    #[test]
    fn test_supporting_queries() {
        let books = entity(
            "my.bookshop.Books",
            vec![("ID", Element::of_type("cds.Integer")), ("title", Element::of_type("cds.String"))],
        )
        .with_prefix("I")
        .with_namespace(Some("my.bookshop".to_string()));

        assert_eq!(books.model_name(), "my.bookshop.Books");
        assert_eq!(books.fields(), vec!["ID", "title"]);
        assert_eq!(books.sanitized_name(false, false), "Books");
        assert_eq!(books.sanitized_name(true, false), "IBooks");
        assert_eq!(books.sanitized_name(true, true), "my.bookshop.IBooks");
    }
}
