//! Core rendering abstractions for report export.
//!
//! This crate provides the pieces shared by every export backend:
//! - `ReportRenderer` trait for turning a line sequence into an artifact
//! - Error types for rendering operations
//! - `ExportFormat` with the extension/MIME metadata of each backend

mod error;
mod traits;
mod types;

pub use error::RenderError;
pub use traits::ReportRenderer;
pub use types::ExportFormat;
