//! Unbound actions and functions.

use super::base::{
    close_block, create_enum_field, create_interface_field, BaseType, JOINER,
};
use super::context::{TranslationContext, TypeReferences};
use super::diagnostics::Diagnostics;
use super::naming::{escape_literal, sanitize_name, sanitize_target};
use crate::model::{Definition, Kind};
use tracing::trace;

const FUNC_PREFIX: &str = "Func";
const ACTION_PREFIX: &str = "Action";
const PARAMS_SUFFIX: &str = "Params";
const PARAM_MEMBER_PREFIX: &str = "param";

/// Translates an operation into a discriminant enum carrying its name and
/// parameter names, plus a `...Params` interface when it takes parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionFunction {
    base: BaseType,
    kind: Kind,
}

impl ActionFunction {
    pub fn new(name: impl Into<String>, definition: Definition) -> Self {
        let kind = definition.kind;
        Self {
            base: BaseType::new(name, definition),
            kind,
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

    pub fn kind(&self) -> Kind {
        self.kind
    }

    fn kind_prefix(&self) -> &'static str {
        if self.kind == Kind::Function {
            FUNC_PREFIX
        } else {
            ACTION_PREFIX
        }
    }

    /// Names of the parameters, in order.
    pub fn params(&self) -> Vec<&str> {
        self.base
            .definition()
            .params
            .keys()
            .map(String::as_str)
            .collect()
    }

    pub fn to_type(&self) -> String {
        let references = TypeReferences::new();
        let ctx = TranslationContext::new(&[], &references);
        self.to_type_in(&ctx, &mut Diagnostics::new())
    }

    pub fn to_type_in(&self, ctx: &TranslationContext<'_>, diagnostics: &mut Diagnostics) -> String {
        let prefix = self.kind_prefix();
        let params = &self.base.definition().params;

        trace!(
            name = self.base.name(),
            kind = %self.kind,
            params = params.len(),
            "Translating operation"
        );

        let mut enum_code = vec![self.base.create_enum(prefix, "")];
        enum_code.push(create_enum_field(
            "name",
            &escape_literal(sanitize_target(self.base.name())),
            true,
        ));
        for param in params.keys() {
            let member = format!("{PARAM_MEMBER_PREFIX}{}", sanitize_name(param));
            enum_code.push(create_enum_field(&member, &escape_literal(param), true));
        }
        enum_code.push(close_block());

        let mut interface_code = Vec::new();
        if !params.is_empty() {
            interface_code.push(self.base.create_interface(&[], prefix, PARAMS_SUFFIX));
            for (param, element) in params {
                let param_type = self.base.element_type(param, element, ctx, diagnostics);
                interface_code.push(create_interface_field(param, &param_type, false));
            }
            interface_code.push(close_block());
        }

        let result = if interface_code.is_empty() {
            enum_code.join(JOINER)
        } else {
            format!(
                "{}{JOINER}{}",
                enum_code.join(JOINER),
                interface_code.join(JOINER)
            )
        };

        format!("{JOINER}{result}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Element;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    fn operation(kind: Kind, name: &str, params: Vec<(&str, Element)>) -> ActionFunction {
        ActionFunction::new(
            name,
            Definition::builder()
                .kind(kind)
                .params(
                    params
                        .into_iter()
                        .map(|(param, element)| (param.to_string(), element))
                        .collect::<IndexMap<_, _>>(),
                )
                .build(),
        )
    }

    #[test]
    fn test_function_with_params() {
        let submit = operation(
            Kind::Function,
            "submitOrder",
            vec![("orderId", Element::of_type("cds.String"))],
        );

        assert_eq!(
            submit.to_type(),
            "\nexport enum FuncSubmitOrder {\n    name = \"submitOrder\",\n    paramOrderId = \"orderId\",\n}\nexport interface FuncSubmitOrderParams {\n    orderId: string;\n}"
        );
    }

    #[test]
    fn test_function_without_params_has_no_params_interface() {
        let ping = operation(Kind::Function, "CatalogService.ping", vec![]);

        assert_eq!(
            ping.to_type(),
            "\nexport enum FuncPing {\n    name = \"ping\",\n}"
        );
    }

    #[test]
    fn test_action_prefix_and_param_order() {
        let order = operation(
            Kind::Action,
            "my.bookshop.submitOrder",
            vec![
                ("book", Element::of_type("cds.Integer")),
                ("quantity", Element::of_type("cds.Integer")),
                ("note", Element::of_type("cds.LargeString")),
            ],
        )
        .with_prefix("I");

        assert_eq!(
            order.to_type(),
            "\nexport enum ActionSubmitOrder {\n    name = \"submitOrder\",\n    paramBook = \"book\",\n    paramQuantity = \"quantity\",\n    paramNote = \"note\",\n}\nexport interface IActionSubmitOrderParams {\n    book: number;\n    quantity: number;\n    note: string;\n}"
        );
        assert_eq!(order.params(), vec!["book", "quantity", "note"]);
    }

    #[test]
    fn test_params_resolve_named_types() {
        let mut references = TypeReferences::new();
        references.insert("my.bookshop.Genre", "my.bookshop.Genre");
        let ctx = TranslationContext::new(&[], &references);
        let mut diagnostics = Diagnostics::new();

        let classify = operation(
            Kind::Action,
            "classify",
            vec![
                ("genre", Element::of_type("my.bookshop.Genre")),
                ("shelf", Element::of_type("my.bookshop.Shelf")),
            ],
        );
        let output = classify.to_type_in(&ctx, &mut diagnostics);

        assert!(output.contains("    genre: my.bookshop.Genre;"));
        assert!(output.contains("    shelf: any;"));
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_repeated_translation_is_identical() {
        let submit = operation(
            Kind::Function,
            "submitOrder",
            vec![("orderId", Element::of_type("cds.String"))],
        );
        assert_eq!(submit.to_type(), submit.to_type());
    }
}
