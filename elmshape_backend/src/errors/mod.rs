mod builder;
mod span;

pub use self::builder::DiagnosticBuilder;
pub use self::span::Span;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Level {
    Error,
    Help,
    Note,
}

/// Holds the source being diagnosed so that spans can be
/// rendered as annotated snippets.
pub struct DiagnosticsContext<'src> {
    source: &'src str,
    origin: Option<String>,
    colour: bool,
}

impl<'src> DiagnosticsContext<'src> {
    pub fn new(source: &'src str, origin: Option<String>) -> Self {
        Self {
            source,
            origin,
            colour: true,
        }
    }

    /// Turns coloured output on or off for every diagnostic built from this context.
    pub fn with_colour(mut self, colour: bool) -> Self {
        self.colour = colour;
        self
    }

    pub fn build_error(&self, message: impl ToString) -> DiagnosticBuilder<'_, 'src> {
        DiagnosticBuilder::new(message.to_string(), Level::Error, self)
    }

    pub fn build_error_span(
        &self,
        span: Span,
        message: impl ToString,
    ) -> DiagnosticBuilder<'_, 'src> {
        self.build_error(message).with_span(span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_works() {
        let ctx = DiagnosticsContext::new("type alias U = ()", None).with_colour(false);
        let rendered = ctx
            .build_error("the unit type is not supported")
            .span_label(Span::new(15, 2), "unit type")
            .help("use a record or a custom type instead")
            .note("nothing can be generated for `()`")
            .render();

        assert!(rendered.contains("error: the unit type is not supported"));
        assert!(rendered.contains("unit type"));
        assert!(rendered.contains("help: use a record or a custom type instead"));
    }

    /// Builders borrow the context for `'ctx` but the source for `'src`,
    /// so they can be collected and rendered later.
    fn build_per_line<'ctx, 'src>(
        ctx: &'ctx DiagnosticsContext<'src>,
    ) -> Vec<DiagnosticBuilder<'ctx, 'src>> {
        let mut start = 0;
        let mut res = Vec::new();

        for line in ctx.source.split('\n') {
            let length = line.chars().count();
            let message = format!("line of {} characters", length);
            res.push(ctx.build_error_span(Span::new(start, length), message));
            start += length + 1;
        }

        res
    }

    #[test]
    fn builders_outlive_the_context_borrow() {
        let source = String::from("type alias A = Int\ntype alias B = ()");
        let ctx = DiagnosticsContext::new(&source, None).with_colour(false);

        let rendered: Vec<String> = build_per_line(&ctx)
            .into_iter()
            .map(DiagnosticBuilder::render)
            .collect();

        assert_eq!(rendered.len(), 2);
        assert!(rendered[0].contains("error: line of 18 characters"));
        assert!(rendered[1].contains("error: line of 17 characters"));
    }

    #[test]
    fn eof_span_on_empty_source() {
        let ctx = DiagnosticsContext::new("", Some("Empty.elm".to_owned())).with_colour(false);
        let rendered = ctx.build_error("unexpected end of file").with_eof_span().render();

        assert!(rendered.contains("unexpected end of file"));
    }
}
