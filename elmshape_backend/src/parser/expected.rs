use std::fmt;

use super::keyword::Keyword;
use crate::lexer::token::{DelimKind, LiteralKind, Symbol, TokenKind};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(super) enum Expected {
    Keyword(Keyword),
    /// An unqualified lowercase name, ex. `model`
    LowerIdent,
    /// A possibly qualified capitalized name, ex. `Int` or `Dict.Dict`
    UpperIdent,
    Integer,
    OpenDelim(DelimKind),
    CloseDelim(DelimKind),
    Symbol(Symbol),
    /// Any operator other than the ones with a [`Symbol`]
    Operator,
    TypeAnnotation,
    Declaration,
}

fn starts_uppercase(s: &str) -> bool {
    s.chars().next().map_or(false, |c| c.is_uppercase())
}

impl Expected {
    pub(super) fn matches(&self, token_kind: &TokenKind) -> bool {
        match token_kind {
            TokenKind::IdentOrKeyword(id) => match self {
                Self::Keyword(keyword) => Keyword::from_str(id) == Some(*keyword),

                Self::LowerIdent => {
                    Keyword::from_str(id).map_or(true, |keyword| keyword.is_contextual())
                        && !id.contains('.')
                        && !starts_uppercase(id)
                },

                Self::UpperIdent => {
                    // Every segment, including the last, must be capitalized
                    id.split('.').all(starts_uppercase)
                },

                _ => false,
            },

            TokenKind::Literal(LiteralKind::Integer(_)) => self == &Self::Integer,
            TokenKind::Literal(_) => false,
            TokenKind::OpenDelim(kind) => self == &Self::OpenDelim(*kind),
            TokenKind::CloseDelim(kind) => self == &Self::CloseDelim(*kind),
            TokenKind::Symbol(symbol) => self == &Self::Symbol(*symbol),
            TokenKind::Operator(_) => self == &Self::Operator,
            TokenKind::Whitespace => panic!("Tried to convert TokenKind::Whitespace to Expected"),
        }
    }
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Keyword(kw) => write!(f, "`{}`", kw.as_str()),
            Expected::LowerIdent => write!(f, "lowercase name"),
            Expected::UpperIdent => write!(f, "capitalized name"),
            Expected::Integer => write!(f, "integer literal"),
            Expected::OpenDelim(kind) => write!(f, "`{}`", kind.open_as_str()),
            Expected::CloseDelim(kind) => write!(f, "`{}`", kind.close_as_str()),
            Expected::Symbol(symbol) => write!(f, "`{}`", symbol),
            Expected::Operator => write!(f, "operator"),
            Expected::TypeAnnotation => write!(f, "type annotation"),
            Expected::Declaration => write!(f, "declaration"),
        }
    }
}
