use std::fmt;

use crate::errors::Span;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DelimKind {
    /// `{` or `}`
    Brace,
    /// `(` or `)`
    Paren,
    /// `[` or `]`
    Bracket,
}

impl DelimKind {
    /// Returns `&'static str` corresponding to an opening delimiter
    pub const fn open_as_str(&self) -> &'static str {
        match self {
            DelimKind::Brace => "{",
            DelimKind::Paren => "(",
            DelimKind::Bracket => "[",
        }
    }

    /// Returns `&'static str` corresponding to a closing delimiter
    pub const fn close_as_str(&self) -> &'static str {
        match self {
            DelimKind::Brace => "}",
            DelimKind::Paren => ")",
            DelimKind::Bracket => "]",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LiteralKind {
    /// ex. `1`, `0x1F`
    Integer(i64),
    /// ex. `"Hello world!"`, `"""multiline"""`
    String(String),
    /// ex. `'a'`
    Char(char),
    /// ex. `1.5`
    Float(f64),
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::String(ref s) => write!(f, "{:?}", s),
            Self::Char(c) => write!(f, "{:?}", c),
            Self::Float(inner) => write!(f, "{:?}", inner),
        }
    }
}

/// Operators that carry meaning in declarations.
/// Anything else is lexed as [`TokenKind::Operator`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Symbol {
    /// `,`
    Comma,
    /// `=`
    SingleEquals,
    /// `|`
    Pipe,
    /// `->`
    Arrow,
    /// `:`
    Colon,
    /// `..`
    DotDot,
}

impl Symbol {
    fn from_operator(op: &str) -> Option<Self> {
        match op {
            "=" => Some(Self::SingleEquals),
            "|" => Some(Self::Pipe),
            "->" => Some(Self::Arrow),
            ":" => Some(Self::Colon),
            ".." => Some(Self::DotDot),
            _ => None,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comma => write!(f, ","),
            Self::SingleEquals => write!(f, "="),
            Self::Pipe => write!(f, "|"),
            Self::Arrow => write!(f, "->"),
            Self::Colon => write!(f, ":"),
            Self::DotDot => write!(f, ".."),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// An identifier (ex. `model`, `Dict.Dict`) or keyword (ex. `type`)
    IdentOrKeyword(String),
    /// ex. `(`, `{`
    OpenDelim(DelimKind),
    /// ex. `)`, `}`
    CloseDelim(DelimKind),
    /// ex. `1`, `"Hello"`, `1.5`
    Literal(LiteralKind),
    /// ex. `=`, `->`, `|`
    Symbol(Symbol),
    /// Any other operator, ex. `++`, `|>`, `\`
    Operator(String),
    /// Hack for skipping whitespace and comments
    Whitespace,
}

impl TokenKind {
    /// Builds the token for an operator, preferring a [`Symbol`] if there is one.
    pub(super) fn operator(op: String) -> Self {
        match Symbol::from_operator(&op) {
            Some(symbol) => Self::Symbol(symbol),
            None => Self::Operator(op),
        }
    }

    pub fn unwrap_ident(self) -> String {
        match self {
            Self::IdentOrKeyword(id) => id,
            _ => panic!("called `unwrap_ident` on {:?}", self),
        }
    }

    pub fn unwrap_integer(self) -> i64 {
        match self {
            Self::Literal(LiteralKind::Integer(i)) => i,
            _ => panic!("called `unwrap_integer` on {:?}", self),
        }
    }
}

// NaN isn't lexed, so perhaps this is okay?
impl Eq for TokenKind {}

// Primarily implemented for `to_string`
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IdentOrKeyword(ref id) => write!(f, "{}", id),
            Self::Literal(kind) => write!(f, "{}", kind),
            Self::OpenDelim(kind) => write!(f, "{}", kind.open_as_str()),
            Self::CloseDelim(kind) => write!(f, "{}", kind.close_as_str()),
            Self::Symbol(symbol) => write!(f, "{}", symbol),
            Self::Operator(ref op) => write!(f, "{}", op),
            Self::Whitespace => write!(f, "{{whitespace hack}}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// Zero-based column of the token's first character.
    /// Top-level declarations always start in column 0.
    pub column: usize,
}

impl Token {
    pub const fn new(kind: TokenKind, span: Span, column: usize) -> Self {
        Self { kind, span, column }
    }

    pub const fn starts_declaration(&self) -> bool {
        self.column == 0
    }
}
