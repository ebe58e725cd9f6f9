use super::{
    accumulate::{fail, Accumulate, Validated},
    error::{Construct, Container, ValidationError, ValidationErrorKind},
    model::{BaseType, Field, TypeAnnotation, TypeDef},
};
use crate::{
    errors::Span,
    parser::ast::{self, TypeAnnotationKind, TypeName},
};

impl BaseType {
    /// Maps a resolved type name to a primitive, or keeps it as an opaque name.
    pub(super) fn from_name(name: &TypeName) -> Self {
        if name.is("String", "String") {
            BaseType::TString
        } else if name.is("Basics", "Int") {
            BaseType::TInt
        } else if name.is("Basics", "Float") {
            BaseType::TFloat
        } else {
            BaseType::TOther(name.name.clone())
        }
    }
}

fn unsupported<T>(construct: Construct, span: Span) -> Validated<T, ValidationError> {
    fail(ValidationError::new(
        ValidationErrorKind::UnsupportedConstruct(construct),
        span,
    ))
}

/// Converts one annotation into the restricted model, reporting every
/// problem found anywhere inside it.
pub(super) fn resolve_annotation(
    annotation: &ast::TypeAnnotation,
) -> Validated<TypeAnnotation, ValidationError> {
    match &annotation.kind {
        TypeAnnotationKind::GenericType(name) => {
            Ok(TypeAnnotation::base(BaseType::TOther(name.clone())))
        },

        TypeAnnotationKind::Typed(name, args) => args
            .iter()
            .map(resolve_annotation)
            .accumulate()
            .and_then(|args| resolve_typed(name, args, annotation.span)),

        TypeAnnotationKind::Tupled(elements) => elements
            .iter()
            .map(resolve_annotation)
            .accumulate()
            .map(TypeAnnotation::Tuple),

        TypeAnnotationKind::Record(fields) => resolve_fields(fields).map(TypeAnnotation::Record),

        TypeAnnotationKind::Unit => unsupported(Construct::UnitType, annotation.span),

        TypeAnnotationKind::GenericRecord(..) => {
            unsupported(Construct::ExtensibleRecord, annotation.span)
        },

        TypeAnnotationKind::FunctionType(..) => {
            unsupported(Construct::FunctionType, annotation.span)
        },
    }
}

/// Resolves every field of a record, keeping their order.
pub(super) fn resolve_fields(
    fields: &[ast::RecordField],
) -> Validated<Vec<Field>, ValidationError> {
    fields
        .iter()
        .map(|field| {
            resolve_annotation(&field.annotation).map(|annotation| Field {
                name: field.name.clone(),
                annotation,
            })
        })
        .accumulate()
}

/// Classifies a named type whose arguments have already been resolved.
fn resolve_typed(
    name: &TypeName,
    args: Vec<TypeAnnotation>,
    span: Span,
) -> Validated<TypeAnnotation, ValidationError> {
    let container = match Container::recognize(name) {
        Some(container) => container,
        None => {
            return Ok(TypeAnnotation::Typed(TypeDef::Type(
                BaseType::from_name(name),
                args,
            )))
        },
    };

    let actual = args.len();
    let mut args = args.into_iter().map(Box::new);

    let def = match (container, args.next(), args.next(), args.next()) {
        (Container::List, Some(element), None, None) => TypeDef::ListDef(element),
        (Container::Maybe, Some(element), None, None) => TypeDef::MaybeDef(element),
        (Container::Dict, Some(key), Some(value), None) => TypeDef::DictDef(key, value),
        (Container::Result, Some(error), Some(value), None) => TypeDef::ResultDef(error, value),

        _ => {
            return fail(ValidationError::new(
                ValidationErrorKind::InvalidArity {
                    container,
                    expected: container.arity(),
                    actual,
                },
                span,
            ))
        },
    };

    Ok(TypeAnnotation::Typed(def))
}
