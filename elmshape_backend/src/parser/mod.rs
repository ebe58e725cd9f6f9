pub(crate) mod ast;
mod expected;
pub(crate) mod keyword;

#[cfg(test)]
mod tests;

use thiserror::Error;

use self::{ast::*, expected::Expected, keyword::Keyword};
use crate::{
    errors::Span,
    lexer::{
        token::{DelimKind, Symbol, Token, TokenKind},
        LexError,
    },
};

/// A problem with the shape of the source text.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
#[error("{message}")]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
    pub notes: Vec<String>,
}

impl SyntaxError {
    fn new(message: impl ToString, span: Span) -> Self {
        Self {
            message: message.to_string(),
            span,
            notes: Vec::new(),
        }
    }

    fn note(mut self, note: impl ToString) -> Self {
        self.notes.push(note.to_string());
        self
    }
}

impl From<LexError> for SyntaxError {
    fn from(err: LexError) -> Self {
        let span = err.span();
        let res = SyntaxError::new(&err, span);

        match err {
            LexError::CouldntParseInt(_, source, _) => {
                res.note(format!("str::parse says: {}", source))
            },

            LexError::CouldntParseFloat(_, source, _) => {
                res.note(format!("str::parse says: {}", source))
            },

            _ => res,
        }
    }
}

/// Holds the parser's state.
struct Parser {
    tokens: Vec<Token>,
    /// Index of the next token.
    cursor: usize,
    /// A set of expected tokens for diagnostic purposes.
    /// This is to allow for diagnostics such as
    /// `unexpected token `=`, expected `:``.
    expected_items: Vec<Expected>,
    /// Span of the most recently consumed token.
    last_span: Span,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            expected_items: Vec::new(),
            last_span: Span::empty(),
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.peek_nth(0)
    }

    fn peek_nth(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.cursor + n)
    }

    #[cfg(test)]
    fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    /// Checks if the token `n` places ahead matches `expected`,
    /// without noting it for diagnostics.
    fn nth_is(&self, n: usize, expected: Expected) -> bool {
        self.peek_nth(n).map_or(false, |token| expected.matches(&token.kind))
    }

    /// `infix` only begins an infix declaration when an associativity
    /// follows; otherwise it's the name of a value.
    fn next_is_infix(&self) -> bool {
        self.peek_nth(1).map_or(false, |token| match &token.kind {
            TokenKind::IdentOrKeyword(id) => matches!(id.as_str(), "left" | "right" | "non"),
            _ => false,
        })
    }

    /// Get the next token.
    /// This exists because it has some other responsibilities,
    /// like clearing `expected_items`.
    fn bump(&mut self) -> Option<Token> {
        self.expected_items.clear();
        let token = self.tokens.get(self.cursor).cloned()?;
        self.cursor += 1;
        self.last_span = token.span;
        Some(token)
    }

    /// Builds an error of the form `unexpected token {token.kind}`
    /// or `unexpected end of file`. The offending token is left in place
    /// so that error recovery can decide what to skip.
    fn unexpected(&mut self) -> SyntaxError {
        let mut error = match self.peek() {
            Some(token) => {
                SyntaxError::new(format!("unexpected token `{}`", token.kind), token.span)
            },

            // Uh oh, this is probably EOF
            None => SyntaxError::new("unexpected end of file", self.last_span),
        };

        if !self.expected_items.is_empty() {
            let expected_string = self
                .expected_items
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<String>>()
                .join(", ");

            error = error.note(format!("expected {}", expected_string));
            self.expected_items.clear();
        }

        error
    }

    /// Notes that `expected` would have been accepted here.
    fn expect_later(&mut self, expected: Expected) {
        if !self.expected_items.contains(&expected) {
            self.expected_items.push(expected);
        }
    }

    /// Checks if the next token matches this expectation.
    fn check_next(&mut self, expected: Expected) -> bool {
        self.expect_later(expected);

        match self.peek() {
            Some(Token { kind, .. }) => expected.matches(kind),
            _ => false,
        }
    }

    /// Like [`check_next`], but never matches a token that begins
    /// a new top-level declaration.
    ///
    /// [`check_next`]: Parser::check_next()
    fn check_next_inside(&mut self, expected: Expected) -> bool {
        let at_boundary = self.peek().map_or(true, Token::starts_declaration);
        self.check_next(expected) && !at_boundary
    }

    /// Grabs a token and eats it for dinner.
    /// Returns `false` and doesn't eat the token if it's not the edible kind.
    fn eat(&mut self, kind_to_eat: Expected) -> bool {
        let res = self.check_next_inside(kind_to_eat);

        if res {
            self.bump();
        }

        res
    }

    /// Eats the next token if its `TokenKind` matches
    /// `expected`. Otherwise, returns an `unexpected` error.
    fn expect_item(&mut self, expected: Expected) -> Result<Token, SyntaxError> {
        if !self.check_next(expected) {
            return Err(self.unexpected());
        }

        match self.bump() {
            Some(token) => Ok(token),
            None => Err(self.unexpected()),
        }
    }

    /// Expects a name that may not be qualified with a module.
    fn expect_unqualified_upper(&mut self) -> Result<(String, Span), SyntaxError> {
        let token = self.expect_item(Expected::UpperIdent)?;
        let span = token.span;
        let name = token.kind.unwrap_ident();

        if name.contains('.') {
            return Err(SyntaxError::new(
                format!("expected an unqualified name, found `{}`", name),
                span,
            )
            .note("names being declared cannot have a module prefix"));
        }

        Ok((name, span))
    }

    /// Skips tokens until the next one that begins a declaration.
    fn skip_to_next_declaration(&mut self) {
        while self.peek().map_or(false, |token| !token.starts_declaration()) {
            self.bump();
        }
    }

    /// Skips a balanced group starting at the next (opening) delimiter.
    fn skip_balanced(&mut self, delim: DelimKind) -> Result<(), SyntaxError> {
        self.expect_item(Expected::OpenDelim(delim))?;
        let mut depth = 1usize;

        while depth > 0 {
            match self.bump() {
                Some(Token {
                    kind: TokenKind::OpenDelim(kind),
                    ..
                }) if kind == delim => depth += 1,

                Some(Token {
                    kind: TokenKind::CloseDelim(kind),
                    ..
                }) if kind == delim => depth -= 1,

                Some(_) => {},
                None => return Err(self.unexpected()),
            }
        }

        Ok(())
    }

    /// The entry point for the parser.
    /// Parses a whole file, collecting an error for every
    /// declaration that could not be parsed.
    fn parse_file(&mut self) -> Result<File, Vec<SyntaxError>> {
        let mut res = File::new();
        let mut errors = Vec::new();

        let has_header = self.check_next(Expected::Keyword(Keyword::Module))
            || ((self.check_next(Expected::Keyword(Keyword::Effect))
                || self.check_next(Expected::Keyword(Keyword::Port)))
                && self.nth_is(1, Expected::Keyword(Keyword::Module)));

        if has_header {
            match self.parse_module_header() {
                Ok(header) => res.module = Some(header),
                Err(err) => {
                    errors.push(err);
                    self.skip_to_next_declaration();
                },
            }
        }

        while self.check_next(Expected::Keyword(Keyword::Import)) {
            match self.parse_import() {
                Ok(import) => res.imports.push(import),
                Err(err) => {
                    errors.push(err);
                    self.skip_to_next_declaration();
                },
            }
        }

        while self.peek().is_some() {
            let start = self.cursor;

            match self.parse_declaration() {
                Ok(declaration) => res.declarations.push(declaration),

                Err(err) => {
                    errors.push(err);

                    // Always make progress, even if the offending token
                    // was the first token of the declaration
                    if self.cursor == start {
                        self.bump();
                    }

                    self.skip_to_next_declaration();
                },
            }
        }

        if errors.is_empty() {
            Ok(res)
        } else {
            Err(errors)
        }
    }

    /// Parses `module A exposing (..)`, `port module A exposing (..)`,
    /// or `effect module A where { ... } exposing (..)`.
    fn parse_module_header(&mut self) -> Result<ModuleHeader, SyntaxError> {
        let first = self.peek().map(|token| token.span).unwrap_or_default();

        // nb. the header's first token sits in column 0, which `eat` refuses
        let kind = if self.check_next(Expected::Keyword(Keyword::Port)) {
            self.bump();
            ModuleKind::Port
        } else if self.check_next(Expected::Keyword(Keyword::Effect)) {
            self.bump();
            ModuleKind::Effect
        } else {
            ModuleKind::Normal
        };

        if kind == ModuleKind::Normal {
            self.expect_item(Expected::Keyword(Keyword::Module))?;
        } else if !self.eat(Expected::Keyword(Keyword::Module)) {
            return Err(self.unexpected());
        }

        let name = self.expect_item(Expected::UpperIdent)?.kind.unwrap_ident();

        if kind == ModuleKind::Effect && self.eat(Expected::Keyword(Keyword::Where)) {
            self.skip_balanced(DelimKind::Brace)?;
        }

        let exposing = self.parse_exposing()?;
        let mut span = first;
        span.grow_to_contain(&self.last_span);

        Ok(ModuleHeader {
            kind,
            name,
            exposing,
            span,
        })
    }

    /// Parses `exposing (..)` or `exposing (a, B, C(..), (|>))`.
    fn parse_exposing(&mut self) -> Result<Exposing, SyntaxError> {
        self.expect_item(Expected::Keyword(Keyword::Exposing))?;
        self.expect_item(Expected::OpenDelim(DelimKind::Paren))?;

        if self.eat(Expected::Symbol(Symbol::DotDot)) {
            self.expect_item(Expected::CloseDelim(DelimKind::Paren))?;
            return Ok(Exposing::All);
        }

        let mut items = Vec::new();

        loop {
            let item = if self.check_next(Expected::LowerIdent) {
                ExposedItem::Value(self.expect_item(Expected::LowerIdent)?.kind.unwrap_ident())
            } else if self.check_next(Expected::UpperIdent) {
                let (name, _) = self.expect_unqualified_upper()?;

                let open = if self.eat(Expected::OpenDelim(DelimKind::Paren)) {
                    self.expect_item(Expected::Symbol(Symbol::DotDot))?;
                    self.expect_item(Expected::CloseDelim(DelimKind::Paren))?;
                    true
                } else {
                    false
                };

                ExposedItem::Type { name, open }
            } else if self.check_next(Expected::OpenDelim(DelimKind::Paren)) {
                ExposedItem::Operator(self.parse_parenthesized_operator()?)
            } else {
                return Err(self.unexpected());
            };

            items.push(item);

            if !self.eat(Expected::Symbol(Symbol::Comma)) {
                break;
            }
        }

        self.expect_item(Expected::CloseDelim(DelimKind::Paren))?;
        Ok(Exposing::Explicit(items))
    }

    /// Parses an operator in parentheses, ex. `(|>)`.
    fn parse_parenthesized_operator(&mut self) -> Result<String, SyntaxError> {
        self.expect_item(Expected::OpenDelim(DelimKind::Paren))?;

        let operator = match self.peek().map(|token| &token.kind) {
            Some(TokenKind::Operator(_)) | Some(TokenKind::Symbol(_)) => {
                self.bump().map(|token| token.kind.to_string())
            },

            _ => None,
        };

        match operator {
            Some(operator) => {
                self.expect_item(Expected::CloseDelim(DelimKind::Paren))?;
                Ok(operator)
            },

            None => {
                self.expect_later(Expected::Operator);
                Err(self.unexpected())
            },
        }
    }

    /// Parses `import A.B as C exposing (..)`.
    fn parse_import(&mut self) -> Result<Import, SyntaxError> {
        let mut span = self.expect_item(Expected::Keyword(Keyword::Import))?.span;
        let module_name = self.expect_item(Expected::UpperIdent)?.kind.unwrap_ident();

        let alias = if self.eat(Expected::Keyword(Keyword::As)) {
            Some(self.expect_unqualified_upper()?.0)
        } else {
            None
        };

        let exposing = if self.check_next_inside(Expected::Keyword(Keyword::Exposing)) {
            Some(self.parse_exposing()?)
        } else {
            None
        };

        span.grow_to_contain(&self.last_span);
        self.expect_declaration_end()?;

        Ok(Import {
            module_name,
            alias,
            exposing,
            span,
        })
    }

    /// Checks that nothing trails the construct that was just parsed.
    fn expect_declaration_end(&mut self) -> Result<(), SyntaxError> {
        match self.peek() {
            Some(token) if !token.starts_declaration() => Err(self.unexpected()),
            _ => Ok(()),
        }
    }

    fn parse_declaration(&mut self) -> Result<Declaration, SyntaxError> {
        match self.peek() {
            Some(token) if !token.starts_declaration() => {
                return Err(SyntaxError::new(
                    format!("unexpected token `{}`", token.kind),
                    token.span,
                )
                .note("top-level declarations must start at the beginning of a line"));
            },

            _ => {},
        }

        let start = self.peek().map(|token| token.span).unwrap_or_default();

        let kind = if self.check_next(Expected::Keyword(Keyword::Type)) {
            self.parse_type_declaration()?
        } else if self.check_next(Expected::Keyword(Keyword::Port)) {
            self.parse_port()?
        } else if self.check_next(Expected::Keyword(Keyword::Infix)) && self.next_is_infix() {
            self.parse_infix()?
        } else if self.check_next(Expected::LowerIdent) {
            self.parse_function()?
        } else {
            self.expect_later(Expected::Declaration);
            return Err(self.unexpected());
        };

        let mut span = start;
        span.grow_to_contain(&self.last_span);

        Ok(Declaration::new(kind, span))
    }

    /// Parses the type variables following a declared type's name.
    fn parse_generics(&mut self) -> Result<Vec<String>, SyntaxError> {
        let mut generics = Vec::new();

        while self.check_next_inside(Expected::LowerIdent) {
            generics.push(self.expect_item(Expected::LowerIdent)?.kind.unwrap_ident());
        }

        Ok(generics)
    }

    /// Parses either `type alias Name a = ...` or `type Name a = A | B`.
    fn parse_type_declaration(&mut self) -> Result<DeclarationKind, SyntaxError> {
        self.expect_item(Expected::Keyword(Keyword::Type))?;

        if self.eat(Expected::Keyword(Keyword::Alias)) {
            let (name, _) = self.expect_unqualified_upper()?;
            let generics = self.parse_generics()?;
            self.expect_item(Expected::Symbol(Symbol::SingleEquals))?;
            let annotation = self.parse_type_annotation()?;
            self.expect_declaration_end()?;

            return Ok(DeclarationKind::TypeAlias(TypeAlias {
                name,
                generics,
                annotation,
            }));
        }

        let (name, _) = self.expect_unqualified_upper()?;
        let generics = self.parse_generics()?;
        let mut constructors = Vec::new();

        // `type Name` without any constructors is accepted here;
        // whether that makes sense is for validation to decide
        if self.eat(Expected::Symbol(Symbol::SingleEquals)) {
            loop {
                constructors.push(self.parse_value_constructor()?);

                if !self.eat(Expected::Symbol(Symbol::Pipe)) {
                    break;
                }
            }
        }

        self.expect_declaration_end()?;

        Ok(DeclarationKind::CustomType(CustomType {
            name,
            generics,
            constructors,
        }))
    }

    fn parse_value_constructor(&mut self) -> Result<ValueConstructor, SyntaxError> {
        let (name, mut span) = self.expect_unqualified_upper()?;
        let mut arguments = Vec::new();

        while self.check_type_atom_next() {
            let argument = self.parse_type_atom()?;
            span.grow_to_contain(&argument.span);
            arguments.push(argument);
        }

        Ok(ValueConstructor {
            name,
            arguments,
            span,
        })
    }

    /// Parses `port name : annotation`.
    fn parse_port(&mut self) -> Result<DeclarationKind, SyntaxError> {
        self.expect_item(Expected::Keyword(Keyword::Port))?;
        let name = self.expect_item(Expected::LowerIdent)?.kind.unwrap_ident();
        self.expect_item(Expected::Symbol(Symbol::Colon))?;
        let annotation = self.parse_type_annotation()?;
        self.expect_declaration_end()?;

        Ok(DeclarationKind::Port(Port { name, annotation }))
    }

    /// Parses `infix left 0 (|>) = apR`.
    fn parse_infix(&mut self) -> Result<DeclarationKind, SyntaxError> {
        self.expect_item(Expected::Keyword(Keyword::Infix))?;

        let direction_token = self.expect_item(Expected::LowerIdent)?;
        let direction = match direction_token.kind.to_string().as_str() {
            "left" => InfixDirection::Left,
            "right" => InfixDirection::Right,
            "non" => InfixDirection::Non,

            other => {
                return Err(SyntaxError::new(
                    format!("unknown associativity `{}`", other),
                    direction_token.span,
                )
                .note("expected `left`, `right`, or `non`"))
            },
        };

        let precedence = self.expect_item(Expected::Integer)?.kind.unwrap_integer();
        let operator = self.parse_parenthesized_operator()?;
        self.expect_item(Expected::Symbol(Symbol::SingleEquals))?;
        let function = self.expect_item(Expected::LowerIdent)?.kind.unwrap_ident();
        self.expect_declaration_end()?;

        Ok(DeclarationKind::Infix(Infix {
            direction,
            precedence,
            operator,
            function,
        }))
    }

    /// Parses a value or function, along with its signature if it has one.
    /// The body is not interesting to us, so it is skipped.
    fn parse_function(&mut self) -> Result<DeclarationKind, SyntaxError> {
        let name_token = self.expect_item(Expected::LowerIdent)?;
        let name = name_token.kind.unwrap_ident();

        let signature = if self.eat(Expected::Symbol(Symbol::Colon)) {
            let annotation = self.parse_type_annotation()?;
            self.expect_declaration_end()?;

            // The definition must follow its signature directly
            let defines_same_name = self
                .peek()
                .map_or(false, |token| token.kind == TokenKind::IdentOrKeyword(name.clone()));

            if !defines_same_name {
                let error = SyntaxError::new(
                    format!("the type annotation for `{}` is not followed by its definition", name),
                    name_token.span,
                );

                return Err(match self.peek() {
                    Some(token) => error.note(format!("found `{}` instead", token.kind)),
                    None => error.note("found the end of the file instead"),
                });
            }

            self.bump();
            Some(annotation)
        } else {
            None
        };

        if !self.eat(Expected::Symbol(Symbol::SingleEquals)) {
            // Arguments or patterns; these end at the first `=`
            loop {
                match self.peek() {
                    Some(token) if token.starts_declaration() => {
                        return Err(self.unexpected());
                    },

                    Some(Token {
                        kind: TokenKind::Symbol(Symbol::SingleEquals),
                        ..
                    }) => {
                        self.bump();
                        break;
                    },

                    Some(_) => {
                        self.bump();
                    },

                    None => return Err(self.unexpected()),
                }
            }
        }

        if self.peek().map_or(true, Token::starts_declaration) {
            self.expect_later(Expected::Declaration);
            return Err(SyntaxError::new(
                format!("`{}` has no body", name),
                self.last_span,
            ));
        }

        self.skip_to_next_declaration();

        Ok(DeclarationKind::Function(Function { name, signature }))
    }

    /// Checks if the next token can start a type argument.
    fn check_type_atom_next(&mut self) -> bool {
        self.check_next_inside(Expected::LowerIdent)
            || self.check_next_inside(Expected::UpperIdent)
            || self.check_next_inside(Expected::OpenDelim(DelimKind::Paren))
            || self.check_next_inside(Expected::OpenDelim(DelimKind::Brace))
    }

    /// Parses a full type annotation, including function types.
    /// Function arrows are right-associative.
    fn parse_type_annotation(&mut self) -> Result<TypeAnnotation, SyntaxError> {
        let lhs = self.parse_type_application()?;

        if self.eat(Expected::Symbol(Symbol::Arrow)) {
            let rhs = self.parse_type_annotation()?;
            let mut span = lhs.span;
            span.grow_to_contain(&rhs.span);

            Ok(TypeAnnotation::new(
                TypeAnnotationKind::FunctionType(Box::new(lhs), Box::new(rhs)),
                span,
            ))
        } else {
            Ok(lhs)
        }
    }

    /// Parses a named type with its arguments, ex. `Dict String (List a)`,
    /// or a single atom.
    fn parse_type_application(&mut self) -> Result<TypeAnnotation, SyntaxError> {
        if !self.check_next_inside(Expected::UpperIdent) {
            return self.parse_type_atom();
        }

        let name_token = self.expect_item(Expected::UpperIdent)?;
        let mut span = name_token.span;
        let name = TypeName::from_qualified(&name_token.kind.unwrap_ident(), span);
        let mut arguments = Vec::new();

        while self.check_type_atom_next() {
            let argument = self.parse_type_atom()?;
            span.grow_to_contain(&argument.span);
            arguments.push(argument);
        }

        Ok(TypeAnnotation::new(
            TypeAnnotationKind::Typed(name, arguments),
            span,
        ))
    }

    /// Parses a type that can be used as an argument without parentheses.
    fn parse_type_atom(&mut self) -> Result<TypeAnnotation, SyntaxError> {
        if self.check_next_inside(Expected::LowerIdent) {
            let token = self.expect_item(Expected::LowerIdent)?;

            Ok(TypeAnnotation::new(
                TypeAnnotationKind::GenericType(token.kind.unwrap_ident()),
                token.span,
            ))
        } else if self.check_next_inside(Expected::UpperIdent) {
            let token = self.expect_item(Expected::UpperIdent)?;
            let name = TypeName::from_qualified(&token.kind.unwrap_ident(), token.span);

            Ok(TypeAnnotation::new(
                TypeAnnotationKind::Typed(name, Vec::new()),
                token.span,
            ))
        } else if self.check_next_inside(Expected::OpenDelim(DelimKind::Paren)) {
            self.parse_parenthesized_type()
        } else if self.check_next_inside(Expected::OpenDelim(DelimKind::Brace)) {
            self.parse_record_type()
        } else {
            self.expect_later(Expected::TypeAnnotation);
            Err(self.unexpected())
        }
    }

    /// Parses `()`, `( a )`, or `( a, b, ... )`.
    fn parse_parenthesized_type(&mut self) -> Result<TypeAnnotation, SyntaxError> {
        let mut span = self
            .expect_item(Expected::OpenDelim(DelimKind::Paren))?
            .span;

        if self.eat(Expected::CloseDelim(DelimKind::Paren)) {
            span.grow_to_contain(&self.last_span);
            return Ok(TypeAnnotation::new(TypeAnnotationKind::Unit, span));
        }

        let first = self.parse_type_annotation()?;

        if !self.check_next_inside(Expected::Symbol(Symbol::Comma)) {
            let close = self.expect_item(Expected::CloseDelim(DelimKind::Paren))?;
            span.grow_to_contain(&close.span);

            // Parentheses only group; keep the inner annotation
            return Ok(TypeAnnotation::new(first.kind, span));
        }

        let mut elements = vec![first];

        while self.eat(Expected::Symbol(Symbol::Comma)) {
            elements.push(self.parse_type_annotation()?);
        }

        let close = self.expect_item(Expected::CloseDelim(DelimKind::Paren))?;
        span.grow_to_contain(&close.span);

        Ok(TypeAnnotation::new(TypeAnnotationKind::Tupled(elements), span))
    }

    /// Parses `{}`, `{ a : A, b : B }`, or `{ r | a : A }`.
    fn parse_record_type(&mut self) -> Result<TypeAnnotation, SyntaxError> {
        let mut span = self
            .expect_item(Expected::OpenDelim(DelimKind::Brace))?
            .span;

        if self.eat(Expected::CloseDelim(DelimKind::Brace)) {
            span.grow_to_contain(&self.last_span);
            return Ok(TypeAnnotation::new(TypeAnnotationKind::Record(Vec::new()), span));
        }

        let extends_generic = self.check_next(Expected::LowerIdent)
            && self.peek_nth(1).map_or(false, |token| {
                token.kind == TokenKind::Symbol(Symbol::Pipe)
            });

        let base = if extends_generic {
            let base = self.expect_item(Expected::LowerIdent)?.kind.unwrap_ident();
            self.expect_item(Expected::Symbol(Symbol::Pipe))?;
            Some(base)
        } else {
            None
        };

        let mut fields = Vec::new();

        loop {
            let name_token = self.expect_item(Expected::LowerIdent)?;
            let mut field_span = name_token.span;
            let name = name_token.kind.unwrap_ident();
            self.expect_item(Expected::Symbol(Symbol::Colon))?;
            let annotation = self.parse_type_annotation()?;
            field_span.grow_to_contain(&annotation.span);

            fields.push(RecordField {
                name,
                annotation,
                span: field_span,
            });

            if !self.eat(Expected::Symbol(Symbol::Comma)) {
                break;
            }
        }

        let close = self.expect_item(Expected::CloseDelim(DelimKind::Brace))?;
        span.grow_to_contain(&close.span);

        let kind = match base {
            Some(base) => TypeAnnotationKind::GenericRecord(base, fields),
            None => TypeAnnotationKind::Record(fields),
        };

        Ok(TypeAnnotation::new(kind, span))
    }
}

/// Parses a token stream into a [`File`]. Every declaration that fails
/// to parse contributes one error; parsing resumes at the next declaration.
pub fn parse(tokens: Vec<Token>) -> Result<File, Vec<SyntaxError>> {
    Parser::new(tokens).parse_file()
}
