use crate::error::RenderError;
use crate::types::ExportFormat;
use rackcheck_report::ReportLine;

/// A trait for export backends, abstracting over the output format.
///
/// Renderers are stateless: `render` is a pure function of the line
/// sequence, so repeated calls on the same input produce identical bytes.
/// For well-formed lines the only failure mode is the backend being unable
/// to serialize its output buffer.
pub trait ReportRenderer {
    /// The format this backend produces.
    fn format(&self) -> ExportFormat;

    /// Renders the tagged line sequence into the final artifact bytes.
    fn render(&self, lines: &[ReportLine]) -> Result<Vec<u8>, RenderError>;
}
