use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};

use super::{span::Span, DiagnosticsContext, Level};

impl From<Level> for AnnotationType {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => AnnotationType::Error,
            Level::Help => AnnotationType::Help,
            Level::Note => AnnotationType::Note,
        }
    }
}

/// A highlighted span of source, optionally with some text beside it.
struct Label {
    text: Option<String>,
    span: Span,
}

/// A `help: ...` or `note: ...` line below the snippet.
struct Footer {
    level: Level,
    text: String,
}

#[must_use = "must emit or render the diagnostic for it to be seen"]
pub struct DiagnosticBuilder<'ctx, 'src> {
    title: String,
    level: Level,
    labels: Vec<Label>,
    footers: Vec<Footer>,
    context: &'ctx DiagnosticsContext<'src>,
}

impl<'ctx, 'src> DiagnosticBuilder<'ctx, 'src> {
    pub(super) fn new(
        title: String,
        level: Level,
        context: &'ctx DiagnosticsContext<'src>,
    ) -> Self {
        Self {
            title,
            level,
            labels: Vec::new(),
            footers: Vec::new(),
            context,
        }
    }

    /// Highlights `span` with a short message beside it.
    pub fn span_label(mut self, span: Span, message: impl ToString) -> Self {
        self.labels.push(Label {
            text: Some(message.to_string()),
            span,
        });
        self
    }

    /// Highlights `span` without a message.
    pub fn with_span(mut self, span: Span) -> Self {
        self.labels.push(Label { text: None, span });
        self
    }

    /// Highlights the last character, for problems at the end of the file.
    /// Does nothing for an empty source.
    pub fn with_eof_span(self) -> Self {
        match self.context.source.chars().count() {
            0 => self,
            len => self.with_span(Span::new(len - 1, 1)),
        }
    }

    pub fn help(mut self, message: impl ToString) -> Self {
        self.footers.push(Footer {
            level: Level::Help,
            text: message.to_string(),
        });
        self
    }

    pub fn note(mut self, message: impl ToString) -> Self {
        self.footers.push(Footer {
            level: Level::Note,
            text: message.to_string(),
        });
        self
    }

    /// Renders the diagnostic as an annotated source snippet.
    pub fn render(self) -> String {
        let annotation_type = AnnotationType::from(self.level);

        let annotations = self
            .labels
            .iter()
            .map(|label| SourceAnnotation {
                label: label.text.as_deref().unwrap_or(""),
                range: (label.span.start, label.span.end()),
                annotation_type,
            })
            .collect();

        let footer = self
            .footers
            .iter()
            .map(|footer| Annotation {
                label: Some(&footer.text),
                id: None,
                annotation_type: footer.level.into(),
            })
            .collect();

        let snippet = Snippet {
            title: Some(Annotation {
                label: Some(&self.title),
                id: None,
                annotation_type,
            }),
            footer,
            slices: vec![Slice {
                source: self.context.source,
                line_start: 1,
                origin: self.context.origin.as_deref(),
                fold: true,
                annotations,
            }],
            opt: FormatOptions {
                color: self.context.colour,
                ..Default::default()
            },
        };

        DisplayList::from(snippet).to_string()
    }

    pub fn emit(self) {
        eprintln!("{}", self.render());
    }
}
