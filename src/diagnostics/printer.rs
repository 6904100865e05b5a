//! Builder-pattern printer for rendering diagnostics as underlined source.
//!
//! This is an optional rendering layer kept outside the core: `parse`/
//! `analyze` never call into this module. It exists so the crate is
//! usable end to end without a caller having to invent a formatter.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use super::message::{DiagnosticMessage, Severity};

pub struct DiagnosticsPrinter<'d> {
    messages: &'d [DiagnosticMessage],
    source: &'d [u8],
    path: Option<&'d str>,
    colored: bool,
}

impl<'d> DiagnosticsPrinter<'d> {
    pub(super) fn new(messages: &'d [DiagnosticMessage], source: &'d [u8]) -> Self {
        Self { messages, source, path: None, colored: false }
    }

    pub fn path(mut self, path: &'d str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.messages.is_empty() {
            return Ok(());
        }

        let Ok(source) = std::str::from_utf8(self.source) else {
            return self.format_plain(w);
        };

        let renderer = if self.colored { Renderer::styled() } else { Renderer::plain() };

        for (i, diag) in self.messages.iter().enumerate() {
            let range = adjust_range(diag.slice.range(), source.len());

            let mut snippet = Snippet::source(source)
                .line_start(1)
                .annotation(AnnotationKind::Primary.span(range).label(&diag.message));

            if let Some(p) = self.path {
                snippet = snippet.path(p);
            }

            let level = severity_to_level(diag.severity);
            let title_group = level.primary_title(&diag.message).element(snippet);
            let report: Vec<Group> = vec![title_group];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }

    fn format_plain(&self, w: &mut impl Write) -> std::fmt::Result {
        for (i, diag) in self.messages.iter().enumerate() {
            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", diag)?;
        }
        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: std::ops::Range<usize>, limit: usize) -> std::ops::Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range
}
