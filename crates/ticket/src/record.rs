//! The flat field-name → value record filled in for one ticket.

use crate::value::{FieldValue, YesNo};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Well-known field names.
///
/// Rack attributes are stored per index as `rack_<name>_<i>`; use
/// [`rack_key`] to build those.
pub mod keys {
    pub const AGENCIA: &str = "agencia";
    pub const CIDADE_UF: &str = "cidade_uf";
    pub const ENDERECO: &str = "endereco";
    pub const NUM_RACKS: &str = "num_racks";

    pub const RACK_LOCAL: &str = "local";
    pub const RACK_TAMANHO: &str = "tamanho";
    pub const RACK_US_DISPONIVEIS: &str = "us_disponiveis";
    pub const RACK_REGUAS: &str = "reguas";
    pub const RACK_TOMADAS_DISPONIVEIS: &str = "tomadas_disponiveis";
    pub const RACK_AMPLIACAO_REGUAS: &str = "ampliacao_reguas";
    pub const RACK_ESTADO: &str = "estado";
    pub const RACK_ORGANIZADO: &str = "organizado";
    pub const RACK_IDENTIFICADO: &str = "identificado";

    pub const AP_QUANTIDADE: &str = "ap_quantidade";
    pub const AP_SETOR: &str = "ap_setor";
    pub const AP_CONDICOES: &str = "ap_condicoes";
    pub const AP_DISTANCIA: &str = "ap_distancia";
}

/// Builds the storage key for a rack-indexed attribute, e.g.
/// `rack_key(keys::RACK_LOCAL, 2)` → `"rack_local_2"`.
pub fn rack_key(name: &str, index: u32) -> String {
    format!("rack_{name}_{index}")
}

/// A filled (or partially filled) checklist for one ticket.
///
/// Readers never fail on absent or malformed fields: text reads default to
/// the empty string, Sim/Não reads default to "Não", and the rack count
/// clamps to at least 1. Serializes as the plain JSON object used by the
/// completed-tickets file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl TicketRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Builder-style `set`, convenient for fixtures.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.set(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// The field as display text; absent fields read as empty.
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        match self.fields.get(key) {
            Some(FieldValue::Text(s)) => Cow::Borrowed(s.as_str()),
            Some(v) => Cow::Owned(v.to_display()),
            None => Cow::Borrowed(""),
        }
    }

    /// The field as a Sim/Não answer; absent or unrecognized reads as Não.
    pub fn yes_no(&self, key: &str) -> YesNo {
        match self.fields.get(key) {
            Some(FieldValue::Text(s)) => YesNo::from_answer(s),
            _ => YesNo::Nao,
        }
    }

    /// The declared rack count, clamped to at least 1.
    ///
    /// The live form cannot produce values below 1, but archived records
    /// have no such guard; absent, non-numeric, zero and negative values
    /// all read as a single rack.
    pub fn num_racks(&self) -> u32 {
        self.fields
            .get(keys::NUM_RACKS)
            .and_then(FieldValue::as_count)
            .filter(|n| *n >= 1)
            .map(|n| n.min(u32::MAX as i64) as u32)
            .unwrap_or(1)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl FromIterator<(String, FieldValue)> for TicketRecord {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self { fields: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_read_as_defaults() {
        let record = TicketRecord::new();
        assert_eq!(record.text(keys::AGENCIA), "");
        assert_eq!(record.yes_no(&rack_key(keys::RACK_ESTADO, 1)), YesNo::Nao);
        assert_eq!(record.num_racks(), 1);
    }

    #[test]
    fn num_racks_clamps_to_one() {
        for bad in [
            FieldValue::Int(0),
            FieldValue::Int(-3),
            FieldValue::Text("".into()),
            FieldValue::Text("muitos".into()),
        ] {
            let record = TicketRecord::new().with(keys::NUM_RACKS, bad);
            assert_eq!(record.num_racks(), 1);
        }
        let record = TicketRecord::new().with(keys::NUM_RACKS, 3i64);
        assert_eq!(record.num_racks(), 3);
        let record = TicketRecord::new().with(keys::NUM_RACKS, "2");
        assert_eq!(record.num_racks(), 2);
    }

    #[test]
    fn record_deserializes_from_flat_json_object() {
        let json = r#"{"agencia": "Agência Centro", "num_racks": 2, "rack_estado_1": "Sim"}"#;
        let record: TicketRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.text(keys::AGENCIA), "Agência Centro");
        assert_eq!(record.num_racks(), 2);
        assert_eq!(record.yes_no(&rack_key(keys::RACK_ESTADO, 1)), YesNo::Sim);
        assert_eq!(record.yes_no(&rack_key(keys::RACK_ESTADO, 2)), YesNo::Nao);
    }
}
