pub(crate) mod token;

#[cfg(test)]
mod tests;

use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

use self::token::{DelimKind, LiteralKind, Symbol, Token, TokenKind};
use crate::errors::Span;

/// Characters that may appear in an operator such as `|>` or `++`.
const OPERATOR_CHARS: &str = "+-*/=<>!&|:^%.$#~?@\\";

/// Signals error encountered during lexing.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("unexpected character `{0}`")]
    UnexpectedChar(char, Span),
    #[error("could not parse {0} as an integer")]
    CouldntParseInt(String, #[source] ParseIntError, Span),
    #[error("could not parse {0} as a float")]
    CouldntParseFloat(String, #[source] ParseFloatError, Span),
    #[error("invalid escape `\\{0}`")]
    InvalidEscape(String, Span),
    #[error("a character literal must contain exactly one character")]
    BadCharLiteral(Span),
    #[error("unexpected end of file while lexing {0}")]
    UnexpectedEOF(&'static str, Span),
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedChar(_, span)
            | Self::CouldntParseInt(_, _, span)
            | Self::CouldntParseFloat(_, _, span)
            | Self::InvalidEscape(_, span)
            | Self::BadCharLiteral(span)
            | Self::UnexpectedEOF(_, span) => *span,
        }
    }
}

/// Keeps the lexer state during lexing.
struct Lexer {
    chars: Vec<char>,
    pos: usize,
    /// Index of the first character of the current line.
    line_start: usize,
}

impl Lexer {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line_start: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.chars.get(self.pos + n).copied()
    }

    /// Checks if the upcoming characters spell out `expected`.
    fn lookahead_is(&self, expected: &str) -> bool {
        expected
            .chars()
            .enumerate()
            .all(|(i, c)| self.peek_nth(i) == Some(c))
    }

    fn next(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;

        if c == '\n' {
            self.line_start = self.pos;
        }

        Some(c)
    }

    fn next_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => self.next(),
            _ => None,
        }
    }

    fn column_of(&self, idx: usize) -> usize {
        idx - self.line_start
    }

    fn token(&self, kind: TokenKind, start: usize, column: usize) -> Token {
        Token::new(kind, Span::new(start, self.pos - start), column)
    }

    /// Returns a token composed of just the current character.
    fn one_char_token(&mut self, kind: TokenKind) -> Token {
        let start = self.pos;
        let column = self.column_of(start);
        self.next();
        self.token(kind, start, column)
    }

    /// Try and yield the token that best fits the input.
    /// Returns Ok(Some(...)) if a token was lexed,
    /// Ok(None) if the source stream was exhausted,
    /// or Err(...) if an error occurred.
    fn lex_one_token(&mut self) -> Result<Option<Token>, LexError> {
        let idx = self.pos;
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };

        let token = match c {
            c if c.is_alphabetic() || c == '_' => self.consume_ident_or_keyword(),
            '0'..='9' => self.consume_number()?,
            '"' => self.consume_string()?,
            '\'' => self.consume_char()?,

            '{' if self.peek_nth(1) == Some('-') => self.consume_block_comment()?,
            '-' if self.peek_nth(1) == Some('-') => self.consume_line_comment(),
            '[' if self.lookahead_is("[glsl|") => self.consume_shader()?,

            '(' => self.one_char_token(TokenKind::OpenDelim(DelimKind::Paren)),
            ')' => self.one_char_token(TokenKind::CloseDelim(DelimKind::Paren)),
            '{' => self.one_char_token(TokenKind::OpenDelim(DelimKind::Brace)),
            '}' => self.one_char_token(TokenKind::CloseDelim(DelimKind::Brace)),
            '[' => self.one_char_token(TokenKind::OpenDelim(DelimKind::Bracket)),
            ']' => self.one_char_token(TokenKind::CloseDelim(DelimKind::Bracket)),
            ',' => self.one_char_token(TokenKind::Symbol(Symbol::Comma)),

            _ if OPERATOR_CHARS.contains(c) => self.consume_operator(),

            ' ' | '\t' | '\n' | '\r' => self.one_char_token(TokenKind::Whitespace),

            _ => return Err(LexError::UnexpectedChar(c, Span::new(idx, 1))),
        };

        Ok(Some(token))
    }

    /// Take every character that could be considered part of an identifier
    /// and produce an `IdentOrKeyword` token. Module-qualified names such as
    /// `Dict.Dict` or `Html.text` are kept together as one token.
    fn consume_ident_or_keyword(&mut self) -> Token {
        let start = self.pos;
        let column = self.column_of(start);
        let mut res = String::new();

        loop {
            let segment_start = res.len();

            while let Some(c) = self.next_if(|c| c.is_alphanumeric() || c == '_') {
                res.push(c);
            }

            let segment_is_upper = res[segment_start..]
                .chars()
                .next()
                .map_or(false, char::is_uppercase);

            let continues = self.peek() == Some('.')
                && self.peek_nth(1).map_or(false, char::is_alphabetic);

            if segment_is_upper && continues {
                // nb. consumes the dot
                res.push(self.next().unwrap_or('.'));
            } else {
                break;
            }
        }

        self.token(TokenKind::IdentOrKeyword(res), start, column)
    }

    /// Take every character that could be considered part of a number
    /// and produce an appropriate token (`Float` or `Integer`).
    fn consume_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let column = self.column_of(start);
        let mut num_str = String::new();

        if self.lookahead_is("0x") {
            self.next();
            self.next();

            while let Some(c) = self.next_if(|c| c.is_ascii_hexdigit()) {
                num_str.push(c);
            }

            let span = Span::new(start, self.pos - start);

            return match i64::from_str_radix(&num_str, 16) {
                Ok(res) => Ok(self.token(
                    TokenKind::Literal(LiteralKind::Integer(res)),
                    start,
                    column,
                )),

                Err(err) => Err(LexError::CouldntParseInt(format!("0x{}", num_str), err, span)),
            };
        }

        while let Some(c) = self.next_if(|c| c.is_ascii_digit()) {
            num_str.push(c);
        }

        let has_fraction = self.peek() == Some('.')
            && self.peek_nth(1).map_or(false, |c| c.is_ascii_digit());

        let has_exponent = self.peek() == Some('e');

        if has_fraction || has_exponent {
            // This is really a float! Keep going!
            while let Some(c) = self.next_if(|c| c.is_ascii_digit() || c == '.' || c == 'e') {
                num_str.push(c);

                if c == 'e' {
                    if let Some(sign) = self.next_if(|c| c == '-' || c == '+') {
                        num_str.push(sign);
                    }
                }
            }

            let span = Span::new(start, self.pos - start);

            match num_str.parse::<f64>() {
                Ok(res) => Ok(self.token(
                    TokenKind::Literal(LiteralKind::Float(res)),
                    start,
                    column,
                )),

                Err(err) => Err(LexError::CouldntParseFloat(num_str, err, span)),
            }
        } else {
            let span = Span::new(start, self.pos - start);

            match num_str.parse::<i64>() {
                Ok(res) => Ok(self.token(
                    TokenKind::Literal(LiteralKind::Integer(res)),
                    start,
                    column,
                )),

                Err(err) => Err(LexError::CouldntParseInt(num_str, err, span)),
            }
        }
    }

    /// Consumes the character after a backslash and returns what it stands for.
    fn consume_escape(&mut self, escape_start: usize) -> Result<char, LexError> {
        let c = match self.next() {
            Some(c) => c,
            None => {
                return Err(LexError::UnexpectedEOF(
                    "an escape sequence",
                    Span::new(escape_start, self.pos - escape_start),
                ))
            },
        };

        match c {
            'n' => Ok('\n'),
            'r' => Ok('\r'),
            't' => Ok('\t'),
            '"' => Ok('"'),
            '\'' => Ok('\''),
            '\\' => Ok('\\'),

            'u' if self.peek() == Some('{') => {
                self.next();
                let mut hex = String::new();

                while let Some(c) = self.next_if(|c| c != '}' && c != '\n') {
                    hex.push(c);
                }

                let closed = self.next_if(|c| c == '}').is_some();
                let span = Span::new(escape_start, self.pos - escape_start);

                u32::from_str_radix(&hex, 16)
                    .ok()
                    .filter(|_| closed)
                    .and_then(std::char::from_u32)
                    .ok_or_else(|| LexError::InvalidEscape(format!("u{{{}}}", hex), span))
            },

            _ => Err(LexError::InvalidEscape(
                c.to_string(),
                Span::new(escape_start, self.pos - escape_start),
            )),
        }
    }

    /// Take every character that could be considered part of a string
    /// and produce a `String` token. Handles both `"..."` and `"""..."""`.
    fn consume_string(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let column = self.column_of(start);
        let triple = self.lookahead_is("\"\"\"");
        let quote_len = if triple { 3 } else { 1 };
        let mut res = String::new();

        for _ in 0..quote_len {
            self.next();
        }

        loop {
            if triple && self.lookahead_is("\"\"\"") {
                for _ in 0..quote_len {
                    self.next();
                }

                break;
            }

            let idx = self.pos;

            match self.next() {
                Some('"') if !triple => break,
                Some('\\') => res.push(self.consume_escape(idx)?),
                Some('\n') if !triple => {
                    return Err(LexError::UnexpectedEOF(
                        "a string literal",
                        Span::new(start, idx - start),
                    ))
                },
                Some(c) => res.push(c),

                None => {
                    return Err(LexError::UnexpectedEOF(
                        "a string literal",
                        Span::new(start, self.pos - start),
                    ))
                },
            }
        }

        Ok(self.token(TokenKind::Literal(LiteralKind::String(res)), start, column))
    }

    /// Lexes a character literal such as `'a'` or `'\n'`.
    fn consume_char(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let column = self.column_of(start);
        // Discards the opening quote
        self.next();
        let mut contents = Vec::new();

        loop {
            let idx = self.pos;

            match self.next() {
                Some('\'') => break,
                Some('\\') => contents.push(self.consume_escape(idx)?),
                Some('\n') | None => {
                    return Err(LexError::UnexpectedEOF(
                        "a character literal",
                        Span::new(start, idx - start),
                    ))
                },
                Some(c) => contents.push(c),
            }
        }

        match contents.as_slice() {
            [c] => Ok(self.token(TokenKind::Literal(LiteralKind::Char(*c)), start, column)),
            _ => Err(LexError::BadCharLiteral(Span::new(start, self.pos - start))),
        }
    }

    /// Skips a (possibly nested) `{- ... -}` comment, doc comments included.
    fn consume_block_comment(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let column = self.column_of(start);
        let mut depth = 0usize;

        loop {
            if self.lookahead_is("{-") {
                self.next();
                self.next();
                depth += 1;
            } else if self.lookahead_is("-}") {
                self.next();
                self.next();
                depth -= 1;

                if depth == 0 {
                    break;
                }
            } else if self.next().is_none() {
                return Err(LexError::UnexpectedEOF(
                    "a block comment",
                    Span::new(start, 2),
                ));
            }
        }

        Ok(self.token(TokenKind::Whitespace, start, column))
    }

    fn consume_line_comment(&mut self) -> Token {
        let start = self.pos;
        let column = self.column_of(start);
        while self.next_if(|c| c != '\n' && c != '\r').is_some() {}
        self.token(TokenKind::Whitespace, start, column)
    }

    /// Shaders are opaque to us; keep their source as a string literal.
    fn consume_shader(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let column = self.column_of(start);
        let mut res = String::new();

        for _ in 0.."[glsl|".len() {
            self.next();
        }

        while !self.lookahead_is("|]") {
            match self.next() {
                Some(c) => res.push(c),
                None => {
                    return Err(LexError::UnexpectedEOF(
                        "a shader block",
                        Span::new(start, "[glsl|".len()),
                    ))
                },
            }
        }

        self.next();
        self.next();

        Ok(self.token(TokenKind::Literal(LiteralKind::String(res)), start, column))
    }

    fn consume_operator(&mut self) -> Token {
        let start = self.pos;
        let column = self.column_of(start);
        let mut op = String::new();

        while let Some(c) = self.next_if(|c| OPERATOR_CHARS.contains(c)) {
            op.push(c);
        }

        self.token(TokenKind::operator(op), start, column)
    }
}

/// Turn a source stream into a `Vec` of `Token`s
pub fn lex(source: &str) -> Result<Vec<Token>, LexError> {
    let mut lexer = Lexer::new(source);
    let mut res = Vec::new();

    while let Some(token) = lexer.lex_one_token()? {
        if token.kind != TokenKind::Whitespace {
            res.push(token);
        }
    }

    Ok(res)
}
