//! TypeScript declaration generation for schema definitions.
//!
//! Each supported definition kind has a translator turning one definition into
//! a self-contained text fragment:
//!
//! - [`Entity`] for entities and aspects (interfaces)
//! - [`Enumeration`] for enum types
//! - [`ActionFunction`] for actions and functions (discriminant enums)
//!
//! All of them implement [`TypeTranslator`]; [`Translator`] wraps the closed
//! set for uniform dispatch.

pub mod action;
pub mod base;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod entity;
pub mod enumeration;
pub mod naming;

pub use action::ActionFunction;
pub use base::{BaseType, JOINER};
pub use context::{TranslationContext, TypeReferences};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use entity::Entity;
pub use enumeration::Enumeration;

use crate::model::{Definition, Kind};
use naming::namespace_of;

/// Turns one definition into emittable text.
///
/// Implementations never fail: unresolved references are left out of the
/// output and recorded in `diagnostics`.
pub trait TypeTranslator {
    fn translate(&self, ctx: &TranslationContext<'_>, diagnostics: &mut Diagnostics) -> String;
}

impl TypeTranslator for Entity {
    fn translate(&self, ctx: &TranslationContext<'_>, diagnostics: &mut Diagnostics) -> String {
        self.to_type_in(ctx, diagnostics)
    }
}

impl TypeTranslator for Enumeration {
    fn translate(&self, _ctx: &TranslationContext<'_>, _diagnostics: &mut Diagnostics) -> String {
        self.to_type()
    }
}

impl TypeTranslator for ActionFunction {
    fn translate(&self, ctx: &TranslationContext<'_>, diagnostics: &mut Diagnostics) -> String {
        self.to_type_in(ctx, diagnostics)
    }
}

/// The translator chosen for a definition.
#[derive(Debug, Clone, PartialEq)]
pub enum Translator {
    Entity(Entity),
    Enumeration(Enumeration),
    ActionFunction(ActionFunction),
}

impl Translator {
    /// Picks the translator for a definition, or `None` for kinds that produce
    /// no declarations (services, contexts, plain structured types, ...).
    ///
    /// With `namespaced` unset, names are rendered without their namespace.
    pub fn for_definition(
        name: &str,
        definition: &Definition,
        interface_prefix: &str,
        namespaced: bool,
    ) -> Option<Self> {
        let namespace = namespace_of(name)
            .filter(|_| namespaced)
            .map(str::to_string);

        match definition.kind {
            Kind::Entity | Kind::Aspect => Some(Translator::Entity(
                Entity::new(name, definition.clone())
                    .with_prefix(interface_prefix)
                    .with_namespace(namespace),
            )),
            Kind::Type if definition.is_enum_type() => Some(Translator::Enumeration(
                Enumeration::new(name, definition.clone()).with_namespace(namespace),
            )),
            Kind::Action | Kind::Function => Some(Translator::ActionFunction(
                ActionFunction::new(name, definition.clone())
                    .with_prefix(interface_prefix)
                    .with_namespace(namespace),
            )),
            _ => None,
        }
    }

    pub fn base(&self) -> &BaseType {
        match self {
            Translator::Entity(entity) => entity.base(),
            Translator::Enumeration(enumeration) => enumeration.base(),
            Translator::ActionFunction(operation) => operation.base(),
        }
    }

    pub fn as_entity(&self) -> Option<&Entity> {
        match self {
            Translator::Entity(entity) => Some(entity),
            _ => None,
        }
    }
}

impl TypeTranslator for Translator {
    fn translate(&self, ctx: &TranslationContext<'_>, diagnostics: &mut Diagnostics) -> String {
        match self {
            Translator::Entity(entity) => entity.translate(ctx, diagnostics),
            Translator::Enumeration(enumeration) => enumeration.translate(ctx, diagnostics),
            Translator::ActionFunction(operation) => operation.translate(ctx, diagnostics),
        }
    }
}
