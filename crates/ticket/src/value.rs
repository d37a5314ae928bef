//! Field values and the Sim/Não answer type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field value in a ticket record.
///
/// The persisted JSON stores counts as numbers and everything else as
/// strings; the untagged representation keeps both shapes round-trippable
/// without a schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Int(i64),
    Text(String),
}

impl FieldValue {
    /// The value as displayed in a report line. Integers render in decimal,
    /// text renders as-is.
    pub fn to_display(&self) -> String {
        match self {
            FieldValue::Int(n) => n.to_string(),
            FieldValue::Text(s) => s.clone(),
        }
    }

    /// Coerce to an integer count, accepting numeric strings.
    pub fn as_count(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            FieldValue::Text(s) => s.trim().parse().ok(),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Int(n as i64)
    }
}

impl From<YesNo> for FieldValue {
    fn from(v: YesNo) -> Self {
        FieldValue::Text(v.as_str().to_string())
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Int(n) => write!(f, "{n}"),
            FieldValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A Sim/Não answer from a radio-button field.
///
/// Anything that is not exactly "Sim" reads as `Nao` — the same permissive
/// default the rest of the record model uses for missing data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YesNo {
    Sim,
    #[default]
    Nao,
}

impl YesNo {
    pub fn from_answer(s: &str) -> Self {
        if s.trim() == "Sim" { YesNo::Sim } else { YesNo::Nao }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Sim => "Sim",
            YesNo::Nao => "Não",
        }
    }

    pub fn is_sim(&self) -> bool {
        matches!(self, YesNo::Sim)
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
