//! Reads the type declarations of an Elm module and normalizes them into a
//! small, validated type model that can be handed to a code generator.
//!
//! ```
//! let types = elmshape_backend::parse("type alias Id = String").unwrap();
//! assert_eq!(types[0].to_string(), "type alias Id = String");
//! ```

mod errors;
mod lexer;
mod name_resolution;
mod parser;
mod validate;

#[cfg(test)]
mod tests;

use elmshape_log::trace;
use thiserror::Error;

pub use errors::{DiagnosticBuilder, DiagnosticsContext, Span};
pub use lexer::LexError;
pub use parser::SyntaxError;
pub use validate::{
    Accumulate, BaseType, Constructor, Construct, Container, Field, Generics, TypeAnnotation,
    TypeDef, ValidType, Validated, ValidationError, ValidationErrorKind,
};

use parser::ast::File;

/// Lexes, parses, and resolves names. Lex errors are fatal, so they show up
/// as a single syntax error.
fn frontend(source: &str) -> Result<File, Vec<SyntaxError>> {
    trace!("lexing {} characters", source.chars().count());
    let tokens = lexer::lex(source).map_err(|err| vec![SyntaxError::from(err)])?;

    trace!("parsing {} tokens", tokens.len());
    let mut file = parser::parse(tokens)?;

    trace!("resolving names in module {}", file.module_name());
    name_resolution::resolve(&mut file);

    Ok(file)
}

/// Why a source file couldn't be turned into a list of types.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Failure {
    /// The source isn't well-formed. Nothing was validated.
    #[error("the source could not be parsed")]
    Syntax(Vec<SyntaxError>),
    /// The source parsed, but describes something the type model can't hold.
    #[error("the declarations could not be validated")]
    Invalid(Vec<ValidationError>),
}

impl Failure {
    /// How many errors were found.
    pub fn len(&self) -> usize {
        match self {
            Failure::Syntax(errors) => errors.len(),
            Failure::Invalid(errors) => errors.len(),
        }
    }

    /// Always false, since a failure holds at least one error.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Renders every error as `line:column: message`, one per line.
    pub fn render(&self, source: &str) -> String {
        let lines: Vec<String> = match self {
            Failure::Syntax(errors) => errors
                .iter()
                .map(|error| {
                    let (line, col) = error.span.line_col(source);

                    if error.notes.is_empty() {
                        format!("{}:{}: {}", line, col, error)
                    } else {
                        format!("{}:{}: {} ({})", line, col, error, error.notes.join("; "))
                    }
                })
                .collect(),

            Failure::Invalid(errors) => errors
                .iter()
                .map(|error| {
                    let (line, col) = error.span.line_col(source);
                    format!("{}:{}: {}", line, col, error)
                })
                .collect(),
        };

        lines.join("\n")
    }

    /// Builds an annotated snippet for every error.
    pub fn diagnostics<'ctx, 'src>(
        &self,
        ctx: &'ctx DiagnosticsContext<'src>,
    ) -> Vec<DiagnosticBuilder<'ctx, 'src>> {
        match self {
            Failure::Syntax(errors) => errors
                .iter()
                .map(|error| {
                    let builder = if error.span.is_empty() {
                        ctx.build_error(error).with_eof_span()
                    } else {
                        ctx.build_error_span(error.span, error)
                    };

                    error
                        .notes
                        .iter()
                        .fold(builder, |builder, note| builder.note(note))
                })
                .collect(),

            Failure::Invalid(errors) => errors
                .iter()
                .map(|error| {
                    let builder = ctx
                        .build_error(error)
                        .span_label(error.span, error.kind.label());

                    match error.kind.help() {
                        Some(help) => builder.help(help),
                        None => builder,
                    }
                })
                .collect(),
        }
    }
}

/// Normalizes every declaration in `source`, keeping the structured errors
/// on failure.
///
/// Syntax errors stop everything; otherwise every declaration is validated
/// and every problem found is reported.
pub fn check(source: &str) -> Result<Vec<ValidType>, Failure> {
    let file = frontend(source).map_err(Failure::Syntax)?;
    validate::validate(&file).map_err(Failure::Invalid)
}

/// Normalizes every declaration in `source`. On failure, returns every
/// error found as `line:column: message`, one per line.
pub fn parse(source: &str) -> Result<Vec<ValidType>, String> {
    check(source).map_err(|failure| failure.render(source))
}
