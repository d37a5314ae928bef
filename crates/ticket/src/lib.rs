//! Core data types for field-survey tickets.
//!
//! A ticket is a flat mapping of named fields collected on site (agency
//! info, per-rack attributes, access-point attributes). The types here are
//! deliberately permissive: readers substitute defaults instead of failing,
//! so a partially filled or empty record is always exportable.

mod id;
mod record;
mod value;

pub use id::TicketId;
pub use record::{TicketRecord, keys, rack_key};
pub use value::{FieldValue, YesNo};
