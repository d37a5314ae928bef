//! Plain-text export backend.
//!
//! The simplest consumer of the line sequence: every line contributes its
//! text, blanks contribute empty lines, and the title/subtitle roles carry
//! no extra markup.

use rackcheck_render_core::{ExportFormat, RenderError, ReportRenderer};
use rackcheck_report::ReportLine;

#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

/// Joins the line texts with `\n`, without a trailing newline.
pub fn render_text(lines: &[ReportLine]) -> String {
    let mut out = String::new();
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(line.text());
    }
    out
}

impl ReportRenderer for TextRenderer {
    fn format(&self) -> ExportFormat {
        ExportFormat::Text
    }

    fn render(&self, lines: &[ReportLine]) -> Result<Vec<u8>, RenderError> {
        Ok(render_text(lines).into_bytes())
    }
}
