//! Persistence for completed checklists.
//!
//! The archive is one JSON document at a fixed path: top-level keys are
//! ticket codes, values are the flat field records. The whole file is read
//! on load and rewritten on save — last write wins, no locking. A missing
//! or unreadable file reads as "no completed tickets", never as an error.

mod error;
mod stats;
mod store;

pub use error::StoreError;
pub use stats::{ChecklistStats, RackStatusTallies, YesNoTally};
pub use store::{CompletedStore, TicketMap};
