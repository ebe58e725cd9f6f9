//! The restricted type model that validation produces.
//!
//! Every type here can be generated into another language without losing
//! information: records, tuples, named types, and the four generic
//! containers with fixed arity. Order is significant everywhere; fields,
//! constructors, and arguments appear as they were declared.

use std::fmt;

/// Names of the type variables a declaration introduces, ex. `a` in `Box a`.
pub type Generics = Vec<String>;

/// A validated top-level type declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidType {
    /// `type alias Name generics = annotation`
    TypeAlias {
        name: String,
        generics: Generics,
        annotation: TypeAnnotation,
    },
    /// `type Name generics = First | Rest...`
    ///
    /// Splitting out `first` means a custom type can never be empty.
    CustomType {
        name: String,
        generics: Generics,
        first: Constructor,
        rest: Vec<Constructor>,
    },
}

impl ValidType {
    pub fn name(&self) -> &str {
        match self {
            ValidType::TypeAlias { name, .. } | ValidType::CustomType { name, .. } => name,
        }
    }

    pub fn generics(&self) -> &[String] {
        match self {
            ValidType::TypeAlias { generics, .. } | ValidType::CustomType { generics, .. } => {
                generics
            },
        }
    }

    /// Every constructor of a custom type in declaration order.
    /// Type aliases have none.
    pub fn constructors(&self) -> impl Iterator<Item = &Constructor> {
        let (first, rest) = match self {
            ValidType::TypeAlias { .. } => (None, &[][..]),
            ValidType::CustomType { first, rest, .. } => (Some(first), rest.as_slice()),
        };

        first.into_iter().chain(rest.iter())
    }
}

/// One variant of a custom type, with its positional arguments.
#[derive(Clone, Debug, PartialEq)]
pub struct Constructor {
    pub name: String,
    pub arguments: Vec<TypeAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub annotation: TypeAnnotation,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotation {
    Record(Vec<Field>),
    Typed(TypeDef),
    Tuple(Vec<TypeAnnotation>),
}

/// A named type applied to its arguments.
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDef {
    /// Any type that isn't a built-in container, including type variables,
    /// which are always applied to no arguments.
    Type(BaseType, Vec<TypeAnnotation>),
    ListDef(Box<TypeAnnotation>),
    MaybeDef(Box<TypeAnnotation>),
    /// Key, then value.
    DictDef(Box<TypeAnnotation>, Box<TypeAnnotation>),
    /// Error, then success value.
    ResultDef(Box<TypeAnnotation>, Box<TypeAnnotation>),
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum BaseType {
    TString,
    TInt,
    TFloat,
    /// Any other named type or a type variable.
    TOther(String),
}

impl TypeAnnotation {
    /// Shorthand for a type applied to nothing, ex. `Int` or `a`.
    pub fn base(base: BaseType) -> Self {
        TypeAnnotation::Typed(TypeDef::Type(base, Vec::new()))
    }

    /// Whether this annotation needs parentheses when used as a type argument.
    fn needs_parens_as_argument(&self) -> bool {
        match self {
            TypeAnnotation::Typed(TypeDef::Type(_, args)) => !args.is_empty(),
            TypeAnnotation::Typed(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseType::TString => write!(f, "String"),
            BaseType::TInt => write!(f, "Int"),
            BaseType::TFloat => write!(f, "Float"),
            BaseType::TOther(name) => write!(f, "{}", name),
        }
    }
}

/// Writes a type's name followed by its arguments, parenthesized as needed.
fn write_applied<'a>(
    f: &mut fmt::Formatter<'_>,
    name: &dyn fmt::Display,
    args: impl IntoIterator<Item = &'a TypeAnnotation>,
) -> fmt::Result {
    write!(f, "{}", name)?;

    for arg in args {
        if arg.needs_parens_as_argument() {
            write!(f, " ({})", arg)?;
        } else {
            write!(f, " {}", arg)?;
        }
    }

    Ok(())
}

impl fmt::Display for TypeDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDef::Type(base, args) => write_applied(f, base, args),
            TypeDef::ListDef(element) => write_applied(f, &"List", [&**element]),
            TypeDef::MaybeDef(element) => write_applied(f, &"Maybe", [&**element]),
            TypeDef::DictDef(key, value) => write_applied(f, &"Dict", [&**key, &**value]),
            TypeDef::ResultDef(error, value) => write_applied(f, &"Result", [&**error, &**value]),
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeAnnotation::Typed(def) => write!(f, "{}", def),

            TypeAnnotation::Tuple(elements) if elements.is_empty() => write!(f, "()"),

            TypeAnnotation::Tuple(elements) => {
                let contents = elements
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(f, "( {} )", contents)
            },

            TypeAnnotation::Record(fields) if fields.is_empty() => write!(f, "{{}}"),

            TypeAnnotation::Record(fields) => {
                let contents = fields
                    .iter()
                    .map(|field| format!("{} : {}", field.name, field.annotation))
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(f, "{{ {} }}", contents)
            },
        }
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_applied(f, &self.name, &self.arguments)
    }
}

impl fmt::Display for ValidType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidType::TypeAlias {
                name,
                generics,
                annotation,
            } => {
                write!(f, "type alias {}", name)?;

                for generic in generics {
                    write!(f, " {}", generic)?;
                }

                write!(f, " = {}", annotation)
            },

            ValidType::CustomType { name, generics, .. } => {
                write!(f, "type {}", name)?;

                for generic in generics {
                    write!(f, " {}", generic)?;
                }

                let constructors = self
                    .constructors()
                    .map(|constructor| constructor.to_string())
                    .collect::<Vec<_>>()
                    .join(" | ");

                write!(f, " = {}", constructors)
            },
        }
    }
}
