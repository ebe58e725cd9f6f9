use std::fmt;

use crate::errors::Span;

/// A whole source file: its header, imports, and top-level declarations.
#[derive(Clone, Debug, PartialEq)]
pub struct File {
    pub module: Option<ModuleHeader>,
    pub imports: Vec<Import>,
    pub declarations: Vec<Declaration>,
}

impl File {
    pub const fn new() -> Self {
        Self {
            module: None,
            imports: Vec::new(),
            declarations: Vec::new(),
        }
    }

    /// Name of the module this file defines.
    /// Elm treats a file without a header as `Main`.
    pub fn module_name(&self) -> &str {
        self.module.as_ref().map_or("Main", |header| header.name.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ModuleKind {
    Normal,
    Port,
    Effect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModuleHeader {
    pub kind: ModuleKind,
    pub name: String,
    pub exposing: Exposing,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Exposing {
    /// `exposing (..)`
    All,
    Explicit(Vec<ExposedItem>),
}

impl Exposing {
    /// Checks if a type with this name is explicitly listed.
    #[cfg(test)]
    pub fn exposes_type(&self, name: &str) -> bool {
        match self {
            Exposing::All => false,

            Exposing::Explicit(items) => items
                .iter()
                .any(|item| matches!(item, ExposedItem::Type { name: exposed, .. } if exposed == name)),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ExposedItem {
    /// ex. `view`
    Value(String),
    /// ex. `Model`, or `Msg(..)` if `open` is set
    Type { name: String, open: bool },
    /// ex. `(|>)`
    Operator(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    pub module_name: String,
    pub alias: Option<String>,
    pub exposing: Option<Exposing>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub span: Span,
}

impl Declaration {
    pub const fn new(kind: DeclarationKind, span: Span) -> Self {
        Self { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DeclarationKind {
    /// `type alias Name a = ...`
    TypeAlias(TypeAlias),
    /// `type Name a = A | B a`
    CustomType(CustomType),
    /// A value or function, with its signature if it has one.
    Function(Function),
    /// `port name : ...`
    Port(Port),
    /// `infix left 0 (|>) = apR`
    Infix(Infix),
}

impl DeclarationKind {
    /// Short human-readable name for this kind of declaration.
    pub const fn describe(&self) -> &'static str {
        match self {
            DeclarationKind::TypeAlias(_) => "type alias",
            DeclarationKind::CustomType(_) => "custom type",
            DeclarationKind::Function(_) => "function declaration",
            DeclarationKind::Port(_) => "port declaration",
            DeclarationKind::Infix(_) => "infix declaration",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeAlias {
    pub name: String,
    pub generics: Vec<String>,
    pub annotation: TypeAnnotation,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CustomType {
    pub name: String,
    pub generics: Vec<String>,
    pub constructors: Vec<ValueConstructor>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueConstructor {
    pub name: String,
    pub arguments: Vec<TypeAnnotation>,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Function {
    pub name: String,
    pub signature: Option<TypeAnnotation>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Port {
    pub name: String,
    pub annotation: TypeAnnotation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InfixDirection {
    Left,
    Right,
    Non,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Infix {
    pub direction: InfixDirection,
    pub precedence: i64,
    pub operator: String,
    pub function: String,
}

/// A reference to a named type. `module` is filled in by name
/// resolution with the module the type comes from, if it is known.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeName {
    pub module: Option<String>,
    pub name: String,
    pub span: Span,
}

impl TypeName {
    /// Splits a possibly qualified name like `Dict.Dict` into its parts.
    pub fn from_qualified(qualified: &str, span: Span) -> Self {
        match qualified.rsplit_once('.') {
            Some((module, name)) => Self {
                module: Some(module.to_owned()),
                name: name.to_owned(),
                span,
            },

            None => Self {
                module: None,
                name: qualified.to_owned(),
                span,
            },
        }
    }

    /// Checks if this name refers to `module.name`. Unqualified names
    /// only compare their bare name.
    pub fn is(&self, module: &str, name: &str) -> bool {
        self.name == name && self.module.as_deref().map_or(true, |m| m == module)
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}.{}", module, self.name),
            None => write!(f, "{}", self.name),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordField {
    pub name: String,
    pub annotation: TypeAnnotation,
    pub span: Span,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TypeAnnotationKind {
    /// A type variable, ex. `a` or `msg`
    GenericType(String),
    /// ex. `Int`, `List a`, `Dict.Dict String Int`
    Typed(TypeName, Vec<TypeAnnotation>),
    /// `()`
    Unit,
    /// ex. `( Int, String )`
    Tupled(Vec<TypeAnnotation>),
    /// ex. `{ name : String }`
    Record(Vec<RecordField>),
    /// ex. `{ a | name : String }`
    GenericRecord(String, Vec<RecordField>),
    /// ex. `Int -> String`
    FunctionType(Box<TypeAnnotation>, Box<TypeAnnotation>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct TypeAnnotation {
    pub kind: TypeAnnotationKind,
    pub span: Span,
}

impl TypeAnnotation {
    pub const fn new(kind: TypeAnnotationKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Whether this annotation needs parentheses when used as a type argument.
    fn needs_parens_as_argument(&self) -> bool {
        match &self.kind {
            TypeAnnotationKind::Typed(_, args) => !args.is_empty(),
            TypeAnnotationKind::FunctionType(_, _) => true,
            _ => false,
        }
    }
}

fn write_fields(f: &mut fmt::Formatter<'_>, fields: &[RecordField]) -> fmt::Result {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }

        write!(f, " {} : {}", field.name, field.annotation)?;
    }

    write!(f, " }}")
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeAnnotationKind::GenericType(name) => write!(f, "{}", name),

            TypeAnnotationKind::Typed(name, args) => {
                write!(f, "{}", name)?;

                for arg in args {
                    if arg.needs_parens_as_argument() {
                        write!(f, " ({})", arg)?;
                    } else {
                        write!(f, " {}", arg)?;
                    }
                }

                Ok(())
            },

            TypeAnnotationKind::Unit => write!(f, "()"),

            TypeAnnotationKind::Tupled(elements) => {
                let contents = elements
                    .iter()
                    .map(|x| x.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(f, "( {} )", contents)
            },

            TypeAnnotationKind::Record(fields) if fields.is_empty() => write!(f, "{{}}"),

            TypeAnnotationKind::Record(fields) => {
                write!(f, "{{")?;
                write_fields(f, fields)
            },

            TypeAnnotationKind::GenericRecord(base, fields) => {
                write!(f, "{{ {} |", base)?;
                write_fields(f, fields)
            },

            TypeAnnotationKind::FunctionType(from, to) => {
                if matches!(from.kind, TypeAnnotationKind::FunctionType(..)) {
                    write!(f, "({}) -> {}", from, to)
                } else {
                    write!(f, "{} -> {}", from, to)
                }
            },
        }
    }
}
