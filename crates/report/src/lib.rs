//! Intermediate report representation.
//!
//! This crate defines the in-memory form of a checklist report after field
//! collection but before rendering: an ordered sequence of tagged lines.
//! Every export format consumes the same sequence, so formatting decisions
//! live in the renderers and the field-to-line mapping lives here, once.

mod builder;
mod line;

pub use builder::{REPORT_TITLE, build_report_lines};
pub use line::{LineKind, ReportLine};
