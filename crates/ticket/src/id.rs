//! Newtype wrapper for ticket identifiers.
//!
//! Prevents mixing up ticket codes with other string-ish values (field
//! names, file names) and centralizes the normalization used when a code
//! becomes part of an export file name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A ticket code as entered by the technician, e.g. `CLAR-411`.
///
/// Surrounding whitespace is trimmed on construction; the original case is
/// preserved (the store keys tickets by the code as entered).
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(String);

impl TicketId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(id.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The uppercased form used in export file names.
    pub fn uppercased(&self) -> String {
        self.0.to_uppercase()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for TicketId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for TicketId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for TicketId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_and_uppercases() {
        let id = TicketId::new("  clar-411 ");
        assert_eq!(id.as_str(), "clar-411");
        assert_eq!(id.uppercased(), "CLAR-411");
    }
}
