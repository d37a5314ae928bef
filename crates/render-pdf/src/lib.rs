//! PDF export backend.
//!
//! Produces a single-column, paginated US Letter document directly with
//! `lopdf`: base-14 Helvetica fonts with WinAnsi encoding, one content
//! stream per page, and a fixed paragraph style per line role.

mod renderer;
mod styles;
mod writer;

pub use renderer::PdfRenderer;
