//! Checklist export pipeline.
//!
//! Ties the pieces together: a [`TicketRecord`] is turned into the tagged
//! line sequence once, then handed to the renderer for the requested
//! format. Every export is a fresh, stateless transformation of the
//! record snapshot, so retrying is always safe and repeated exports are
//! reproducible.
//!
//! ```no_run
//! use rackcheck::{ExportFormat, TicketRecord, export_ticket, keys};
//!
//! let record = TicketRecord::new().with(keys::AGENCIA, "Agência Centro");
//! let pdf = export_ticket(&record, ExportFormat::Pdf)?;
//! # Ok::<(), rackcheck::ExportError>(())
//! ```

use chrono::NaiveDate;
use thiserror::Error;

pub use rackcheck_render_core::{ExportFormat, RenderError, ReportRenderer};
pub use rackcheck_render_docx::DocxRenderer;
pub use rackcheck_render_pdf::PdfRenderer;
pub use rackcheck_render_text::{TextRenderer, render_text};
pub use rackcheck_report::{LineKind, REPORT_TITLE, ReportLine, build_report_lines};
pub use rackcheck_store::{
    ChecklistStats, CompletedStore, RackStatusTallies, StoreError, TicketMap, YesNoTally,
};
pub use rackcheck_ticket::{FieldValue, TicketId, TicketRecord, YesNo, keys, rack_key};

/// A comprehensive error type for the export pipeline and its callers.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("archive error: {0}")]
    Store(#[from] StoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("ticket '{0}' not found in the archive")]
    TicketNotFound(TicketId),
}

/// The backend for an export format.
pub fn renderer_for(format: ExportFormat) -> Box<dyn ReportRenderer> {
    match format {
        ExportFormat::Text => Box::new(TextRenderer::new()),
        ExportFormat::Pdf => Box::new(PdfRenderer::new()),
        ExportFormat::Docx => Box::new(DocxRenderer::new()),
    }
}

/// Renders one ticket into the requested format.
pub fn export_ticket(
    record: &TicketRecord,
    format: ExportFormat,
) -> Result<Vec<u8>, ExportError> {
    let lines = build_report_lines(record);
    let bytes = renderer_for(format).render(&lines)?;
    log::debug!("exported {} report, {} bytes", format, bytes.len());
    Ok(bytes)
}

/// The download file name for an export:
/// `Checklist_<TICKET_ID_UPPERCASED>[_<YYYYMMDD>].<ext>`.
///
/// The live tool stamps the current date on exports of in-progress work;
/// archive exports omit the stamp.
pub fn export_file_name(
    ticket_id: &TicketId,
    format: ExportFormat,
    date: Option<NaiveDate>,
) -> String {
    match date {
        Some(date) => format!(
            "Checklist_{}_{}.{}",
            ticket_id.uppercased(),
            date.format("%Y%m%d"),
            format.extension()
        ),
        None => format!("Checklist_{}.{}", ticket_id.uppercased(), format.extension()),
    }
}
