//! Page geometry and the fixed paragraph styles.

use rackcheck_report::LineKind;

/// US Letter with one-inch margins, in points.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub margin: f32,
}

pub(crate) const LETTER: PageGeometry = PageGeometry { width: 612.0, height: 792.0, margin: 72.0 };

impl PageGeometry {
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }
}

/// Vertical space consumed by a blank line, 0.1 inch.
pub(crate) const BLANK_SPACER: f32 = 7.2;

/// Base-14 fonts registered in every document's resource dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// The internal resource name referenced by `Tf`.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    pub fn base_font(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct ParagraphStyle {
    pub font: Font,
    pub size: f32,
    pub leading: f32,
    pub space_after: f32,
    pub centered: bool,
}

pub(crate) const TITLE: ParagraphStyle = ParagraphStyle {
    font: Font::HelveticaBold,
    size: 14.0,
    leading: 16.8,
    space_after: 20.0,
    centered: true,
};

pub(crate) const SUBTITLE: ParagraphStyle = ParagraphStyle {
    font: Font::HelveticaBold,
    size: 12.0,
    leading: 14.4,
    space_after: 10.0,
    centered: false,
};

pub(crate) const BODY: ParagraphStyle = ParagraphStyle {
    font: Font::Helvetica,
    size: 10.0,
    leading: 14.0,
    space_after: 4.0,
    centered: false,
};

/// The paragraph style for a line role; `None` for blanks, which are pure
/// vertical space.
pub(crate) fn style_for(kind: LineKind) -> Option<&'static ParagraphStyle> {
    match kind {
        LineKind::Title => Some(&TITLE),
        LineKind::Subtitle => Some(&SUBTITLE),
        LineKind::Body => Some(&BODY),
        LineKind::Blank => None,
    }
}

/// Approximate rendered width of a run of text.
///
/// Helvetica metrics are not consulted; a flat per-glyph factor keeps the
/// wrap estimate conservative (text wraps slightly early rather than
/// overflowing the margin).
pub(crate) fn approx_text_width(text: &str, size: f32) -> f32 {
    text.chars().count() as f32 * size * 0.6
}
