//! Converts parsed declarations into the restricted type model.
//!
//! Independent siblings (declarations, constructors, constructor arguments,
//! record fields, type arguments) are all checked even after one of them
//! fails, so a single pass reports every problem in a file. Only steps that
//! need a previous result, like splitting out the first constructor, stop
//! early.

mod accumulate;
mod annotation;
mod error;
mod model;

use elmshape_log::{trace, warning};

pub use self::accumulate::{fail, Accumulate, Validated};
pub use self::error::{Construct, Container, ValidationError, ValidationErrorKind};
pub use self::model::{BaseType, Constructor, Field, Generics, TypeAnnotation, TypeDef, ValidType};

use self::annotation::resolve_annotation;
use crate::parser::ast::{self, Declaration, DeclarationKind, File};

/// Resolves a constructor's arguments, keeping their order.
fn resolve_constructor(
    constructor: &ast::ValueConstructor,
) -> Validated<Constructor, ValidationError> {
    constructor
        .arguments
        .iter()
        .map(resolve_annotation)
        .accumulate()
        .map(|arguments| Constructor {
            name: constructor.name.clone(),
            arguments,
        })
}

fn resolve_custom_type(
    custom: &ast::CustomType,
    declaration: &Declaration,
) -> Validated<ValidType, ValidationError> {
    custom
        .constructors
        .iter()
        .map(resolve_constructor)
        .accumulate()
        .and_then(|constructors| {
            let mut constructors = constructors.into_iter();

            match constructors.next() {
                Some(first) => Ok(ValidType::CustomType {
                    name: custom.name.clone(),
                    generics: custom.generics.clone(),
                    first,
                    rest: constructors.collect(),
                }),

                None => fail(ValidationError::new(
                    ValidationErrorKind::NoConstructors(custom.name.clone()),
                    declaration.span,
                )),
            }
        })
}

/// Warns when a declaration shares its name with a built-in container.
/// References to it resolve to the local type, which may not be what the
/// reader expects.
fn check_collision(name: &str) {
    if let Some(container) = Container::named(name) {
        warning!(
            "`{}` has the same name as the built-in `{}.{}`; references to it in this module mean the local type",
            name,
            container.module(),
            container
        );
    }
}

/// Converts a single top-level declaration.
pub fn classify(declaration: &Declaration) -> Validated<ValidType, ValidationError> {
    trace!("classifying {}", declaration.kind.describe());

    match &declaration.kind {
        DeclarationKind::TypeAlias(alias) => {
            check_collision(&alias.name);

            resolve_annotation(&alias.annotation).map(|annotation| ValidType::TypeAlias {
                name: alias.name.clone(),
                generics: alias.generics.clone(),
                annotation,
            })
        },

        DeclarationKind::CustomType(custom) => {
            check_collision(&custom.name);
            resolve_custom_type(custom, declaration)
        },

        other => fail(ValidationError::new(
            ValidationErrorKind::UnsupportedConstruct(Construct::declaration(other)),
            declaration.span,
        )),
    }
}

/// Converts every declaration in a file, in order.
pub fn validate(file: &File) -> Validated<Vec<ValidType>, ValidationError> {
    let res = file.declarations.iter().map(classify).accumulate();

    match &res {
        Ok(types) => trace!("validated {} type declarations", types.len()),
        Err(errors) => trace!("validation found {} problems", errors.len()),
    }

    res
}
