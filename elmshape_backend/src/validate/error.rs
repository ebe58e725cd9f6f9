use std::fmt;

use thiserror::Error;

use crate::{
    errors::Span,
    parser::ast::{DeclarationKind, TypeName},
};

/// Something the type model has no way to express.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Construct {
    /// `()`
    UnitType,
    /// `{ a | field : T }`
    ExtensibleRecord,
    /// `a -> b`
    FunctionType,
    /// A declaration that doesn't declare a type, ex. a port.
    Declaration { kind: &'static str, name: String },
}

impl Construct {
    pub(super) fn declaration(kind: &DeclarationKind) -> Self {
        let name = match kind {
            DeclarationKind::TypeAlias(alias) => alias.name.clone(),
            DeclarationKind::CustomType(custom) => custom.name.clone(),
            DeclarationKind::Function(function) => function.name.clone(),
            DeclarationKind::Port(port) => port.name.clone(),
            DeclarationKind::Infix(infix) => format!("({})", infix.operator),
        };

        Self::Declaration {
            kind: kind.describe(),
            name,
        }
    }
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Construct::UnitType => write!(f, "the unit type `()`"),
            Construct::ExtensibleRecord => write!(f, "extensible record"),
            Construct::FunctionType => write!(f, "function type"),
            Construct::Declaration { kind, name } => write!(f, "{} `{}`", kind, name),
        }
    }
}

/// The generic types with a fixed number of type arguments.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Container {
    List,
    Maybe,
    Dict,
    Result,
}

impl Container {
    const ALL: [Container; 4] = [
        Container::List,
        Container::Maybe,
        Container::Dict,
        Container::Result,
    ];

    /// The module that defines this container.
    pub const fn module(&self) -> &'static str {
        self.as_str()
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Container::List => "List",
            Container::Maybe => "Maybe",
            Container::Dict => "Dict",
            Container::Result => "Result",
        }
    }

    /// How many type arguments this container takes.
    pub const fn arity(&self) -> usize {
        match self {
            Container::List | Container::Maybe => 1,
            Container::Dict | Container::Result => 2,
        }
    }

    /// Finds the container a type name refers to, if any.
    pub fn recognize(name: &TypeName) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|container| name.is(container.module(), container.as_str()))
    }

    /// Finds the container with this bare name, if any.
    pub fn named(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|container| container.as_str() == name)
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

fn plural(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ValidationErrorKind {
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(Construct),
    #[error(
        "invalid arity: `{container}` expects {expected} type argument{}, but was given {actual}",
        plural(.expected)
    )]
    InvalidArity {
        container: Container,
        expected: usize,
        actual: usize,
    },
    #[error("custom type `{0}` has no constructors")]
    NoConstructors(String),
}

impl ValidationErrorKind {
    /// A few words to put beside the offending source.
    pub fn label(&self) -> String {
        match self {
            Self::UnsupportedConstruct(_) => "not supported".to_owned(),
            Self::InvalidArity { actual, .. } => {
                format!("given {} type argument{}", actual, plural(actual))
            },
            Self::NoConstructors(_) => "declared without constructors".to_owned(),
        }
    }

    /// A suggestion for fixing the problem, if there is one.
    pub fn help(&self) -> Option<String> {
        match self {
            Self::UnsupportedConstruct(Construct::UnitType) => {
                Some("use a record or a custom type instead".to_owned())
            },

            Self::UnsupportedConstruct(Construct::ExtensibleRecord) => {
                Some("write out every field of the record".to_owned())
            },

            Self::UnsupportedConstruct(Construct::FunctionType) => {
                Some("only data can be described; functions cannot".to_owned())
            },

            Self::UnsupportedConstruct(Construct::Declaration { .. }) => {
                Some("only `type` and `type alias` declarations are supported".to_owned())
            },

            Self::InvalidArity { container, .. } => Some(format!(
                "write `{}` followed by {} type argument{}",
                container,
                container.arity(),
                plural(&container.arity())
            )),

            Self::NoConstructors(name) => Some(format!("add a constructor, ex. `type {0} = {0}`", name)),
        }
    }
}

/// A problem found while checking a declaration, along with where it is.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{kind}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub span: Span,
}

impl ValidationError {
    pub const fn new(kind: ValidationErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}
