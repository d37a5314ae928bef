//! The tagged line type shared by all renderers.

use std::fmt;

/// The role of a line within the report.
///
/// Renderers dispatch on this variant, never on markers embedded in the
/// text; the text of a line is always clean display content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The single document heading.
    Title,
    /// A section heading (one per rack, one for the AP block).
    Subtitle,
    /// A regular label/value line.
    Body,
    /// Vertical separation between sections.
    Blank,
}

impl LineKind {
    /// A string identifier for the kind, used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineKind::Title => "title",
            LineKind::Subtitle => "subtitle",
            LineKind::Body => "body",
            LineKind::Blank => "blank",
        }
    }
}

/// One line of a report: a role plus its display text.
///
/// Blank lines carry an empty string. A body line's text may contain `\n`,
/// which renderers treat as a soft break inside the same paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    kind: LineKind,
    text: String,
}

impl ReportLine {
    pub fn title(text: impl Into<String>) -> Self {
        Self { kind: LineKind::Title, text: text.into() }
    }

    pub fn subtitle(text: impl Into<String>) -> Self {
        Self { kind: LineKind::Subtitle, text: text.into() }
    }

    pub fn body(text: impl Into<String>) -> Self {
        Self { kind: LineKind::Body, text: text.into() }
    }

    pub fn blank() -> Self {
        Self { kind: LineKind::Blank, text: String::new() }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
