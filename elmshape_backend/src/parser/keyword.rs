#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Keyword {
    Type,
    Alias,
    Port,
    Module,
    Effect,
    Where,
    Import,
    As,
    Exposing,
    Infix,
    If,
    Then,
    Else,
    Case,
    Of,
    Let,
    In,
}

impl Keyword {
    pub fn from_str(s: impl AsRef<str>) -> Option<Self> {
        match s.as_ref() {
            "type" => Some(Self::Type),
            "alias" => Some(Self::Alias),
            "port" => Some(Self::Port),
            "module" => Some(Self::Module),
            "effect" => Some(Self::Effect),
            "where" => Some(Self::Where),
            "import" => Some(Self::Import),
            "as" => Some(Self::As),
            "exposing" => Some(Self::Exposing),
            "infix" => Some(Self::Infix),
            "if" => Some(Self::If),
            "then" => Some(Self::Then),
            "else" => Some(Self::Else),
            "case" => Some(Self::Case),
            "of" => Some(Self::Of),
            "let" => Some(Self::Let),
            "in" => Some(Self::In),
            _ => None,
        }
    }

    /// Keywords that only mean something in one spot, like `alias` after
    /// `type`. Anywhere else they are ordinary names.
    pub const fn is_contextual(&self) -> bool {
        matches!(self, Keyword::Alias | Keyword::Effect | Keyword::Infix)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Keyword::Type => "type",
            Keyword::Alias => "alias",
            Keyword::Port => "port",
            Keyword::Module => "module",
            Keyword::Effect => "effect",
            Keyword::Where => "where",
            Keyword::Import => "import",
            Keyword::As => "as",
            Keyword::Exposing => "exposing",
            Keyword::Infix => "infix",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Case => "case",
            Keyword::Of => "of",
            Keyword::Let => "let",
            Keyword::In => "in",
        }
    }
}
