//! Sequential layout of tagged lines into page content streams.

use crate::styles::{self, PageGeometry, ParagraphStyle, approx_text_width};
use crate::writer;
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use rackcheck_render_core::{ExportFormat, RenderError, ReportRenderer};
use rackcheck_report::ReportLine;

pub struct PdfRenderer {
    geometry: PageGeometry,
}

impl PdfRenderer {
    pub fn new() -> Self {
        Self { geometry: styles::LETTER }
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for PdfRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn render(&self, lines: &[ReportLine]) -> Result<Vec<u8>, RenderError> {
        let mut layout = PageLayout::new(self.geometry);
        for line in lines {
            match styles::style_for(line.kind()) {
                Some(style) => layout.add_paragraph(line.text(), style),
                None => layout.add_spacer(styles::BLANK_SPACER),
            }
        }
        let pages = layout.finish();
        log::debug!("laid out {} lines across {} pages", lines.len(), pages.len());
        writer::write_document(pages, &self.geometry)
    }
}

/// Accumulates content operations page by page, breaking to a new page
/// whenever the next text line would cross the bottom margin.
struct PageLayout {
    geom: PageGeometry,
    pages: Vec<Content>,
    ops: Vec<Operation>,
    /// Offset of the next line's top edge from the top of the page.
    y: f32,
}

impl PageLayout {
    fn new(geom: PageGeometry) -> Self {
        Self { geom, pages: Vec::new(), ops: Vec::new(), y: geom.margin }
    }

    fn add_paragraph(&mut self, text: &str, style: &ParagraphStyle) {
        // An embedded newline is a soft break: the paragraph continues on
        // the next line without paragraph spacing.
        for segment in text.split('\n') {
            for visual_line in wrap(segment, style, self.geom.content_width()) {
                self.break_page_if_needed(style.leading);
                self.emit_text_line(&visual_line, style);
                self.y += style.leading;
            }
        }
        self.y += style.space_after;
    }

    /// Blank lines consume vertical space but never force a page of their
    /// own; a run of trailing blanks simply ends the document.
    fn add_spacer(&mut self, height: f32) {
        self.y += height;
    }

    fn break_page_if_needed(&mut self, needed: f32) {
        if self.y + needed > self.geom.height - self.geom.margin && !self.ops.is_empty() {
            let ops = std::mem::take(&mut self.ops);
            self.pages.push(Content { operations: ops });
            self.y = self.geom.margin;
        }
    }

    fn emit_text_line(&mut self, text: &str, style: &ParagraphStyle) {
        let x = if style.centered {
            let line_width = approx_text_width(text, style.size);
            (self.geom.margin + (self.geom.content_width() - line_width) / 2.0).max(self.geom.margin)
        } else {
            self.geom.margin
        };
        let baseline = self.geom.height - self.y - style.size;

        self.ops.push(Operation::new("BT", vec![]));
        self.ops.push(Operation::new(
            "Tf",
            vec![style.font.resource_name().into(), style.size.into()],
        ));
        self.ops.push(Operation::new("Td", vec![x.into(), baseline.into()]));
        self.ops.push(Operation::new(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        ));
        self.ops.push(Operation::new("ET", vec![]));
    }

    fn finish(mut self) -> Vec<Content> {
        if !self.ops.is_empty() || self.pages.is_empty() {
            self.pages.push(Content { operations: self.ops });
        }
        self.pages
    }
}

/// Greedy word wrap against the approximate glyph width. A single word
/// wider than the line is emitted as-is rather than hard-broken.
fn wrap(text: &str, style: &ParagraphStyle, max_width: f32) -> Vec<String> {
    if text.is_empty() {
        return vec![String::new()];
    }
    let mut out = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate_width = approx_text_width(&current, style.size)
            + approx_text_width(" ", style.size)
            + approx_text_width(word, style.size);
        if candidate_width > max_width {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            current.push(' ');
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() { vec![String::new()] } else { out }
}

/// Encodes text for a WinAnsi (CP1252) `Tj` operand.
///
/// Latin-1 code points map straight through; the CP1252 punctuation block
/// is mapped explicitly (the report labels contain an en dash); anything
/// else degrades to `?`.
fn to_win_ansi(s: &str) -> Vec<u8> {
    s.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80, // €
            '\u{2018}' => 0x91, // '
            '\u{2019}' => 0x92, // '
            '\u{201C}' => 0x93, // "
            '\u{201D}' => 0x94, // "
            '\u{2022}' => 0x95, // •
            '\u{2013}' => 0x96, // –
            '\u{2014}' => 0x97, // —
            '\u{2026}' => 0x85, // …
            c if (c as u32) <= 255 => c as u8,
            _ => b'?',
        })
        .collect()
}
