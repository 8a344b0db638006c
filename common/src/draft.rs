//! Draft records: the in-progress state of a create/edit form.
//!
//! A draft keeps every input as the raw text the user typed, keyed by field
//! name, plus the identifier of the record being edited (if any). Coercion to
//! the wire shape happens once, at submit time, following the field kinds
//! declared in the entity descriptor:
//!
//! - blank input means "absent": an error for required fields, `null` otherwise;
//! - `Integer` and `Float` inputs must parse, or the draft is rejected;
//! - `Date` and `DateTime` inputs pass through as trimmed ISO strings.

use std::collections::BTreeMap;

use serde_json::{Map, Number, Value};
use thiserror::Error as ThisError;

use crate::display::{to_date_input, to_datetime_local};
use crate::model::descriptor::{EntityDescriptor, FieldKind, FieldSpec};
use crate::model::{Entity, RecordId, value_text};

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field} {reason}")]
    Invalid { field: &'static str, reason: &'static str },
}

impl DraftError {
    /// Missing fields abort the submit silently; invalid ones are reported.
    pub fn is_missing(&self) -> bool {
        matches!(self, DraftError::Missing(_))
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    /// `None` for a record that has not been created yet.
    pub id: Option<RecordId>,
    pub values: BTreeMap<&'static str, String>,
}

impl Draft {
    /// The empty-record template for an entity.
    pub fn empty(descriptor: &'static EntityDescriptor) -> Self {
        Self {
            id: None,
            values: descriptor.fields.iter().map(|f| (f.name, String::new())).collect(),
        }
    }

    /// Loads a persisted record into a draft, rendering each field the way
    /// its input expects it.
    pub fn from_record<E: Entity>(record: &E) -> Self {
        let fields = record.to_fields();
        let values = E::DESCRIPTOR
            .fields
            .iter()
            .map(|spec| {
                let raw = fields.get(spec.name).and_then(value_text).unwrap_or_default();
                let text = match spec.kind {
                    FieldKind::Date => to_date_input(&raw),
                    FieldKind::DateTime => to_datetime_local(&raw),
                    _ => raw,
                };
                (spec.name, text)
            })
            .collect();
        Self { id: record.id(), values }
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Updates one input in place. Unknown fields are ignored.
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        if let Some(slot) = self.values.get_mut(field) {
            *slot = value.into();
        }
    }

    /// Coerces the draft into the JSON body sent on create or update.
    ///
    /// The identifier is never part of the body; it travels in the path.
    pub fn to_payload(&self, descriptor: &EntityDescriptor) -> Result<Map<String, Value>, DraftError> {
        let mut payload = Map::new();
        for spec in descriptor.fields {
            let value = coerce(spec, self.value(spec.name))?;
            payload.insert(spec.name.to_string(), value);
        }
        Ok(payload)
    }
}

/// Coerces a single raw input according to its field spec.
pub fn coerce(spec: &FieldSpec, raw: &str) -> Result<Value, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return if spec.required { Err(DraftError::Missing(spec.label)) } else { Ok(Value::Null) };
    }

    match spec.kind {
        FieldKind::Text | FieldKind::Date | FieldKind::DateTime => Ok(Value::String(raw.to_string())),
        FieldKind::Integer => raw
            .parse::<i64>()
            .map(|n| Value::Number(n.into()))
            .map_err(|_| DraftError::Invalid { field: spec.label, reason: "must be a whole number" }),
        FieldKind::Float => raw
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number)
            .ok_or(DraftError::Invalid { field: spec.label, reason: "must be a number" }),
    }
}

/// Parses an optional numeric input: blank is `Ok(None)`.
pub fn parse_optional<T: std::str::FromStr>(
    label: &'static str,
    raw: &str,
    reason: &'static str,
) -> Result<Option<T>, DraftError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>().map(Some).map_err(|_| DraftError::Invalid { field: label, reason })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DebrisRecord, Mission, TrackingRecord};
    use serde_json::json;

    #[test]
    fn empty_draft_has_one_blank_input_per_field() {
        let draft = Draft::empty(DebrisRecord::DESCRIPTOR);
        assert!(draft.is_new());
        assert_eq!(draft.values.len(), 5);
        assert!(draft.values.values().all(String::is_empty));
    }

    #[test]
    fn payload_coerces_numbers_and_passes_dates_through() {
        let mut draft = Draft::empty(TrackingRecord::DESCRIPTOR);
        draft.set("satellite_id", "7");
        draft.set("station_id", " 2 ");
        draft.set("timestamp", "2025-03-01T12:30");
        draft.set("latitude", "-33.5");

        let payload = draft.to_payload(TrackingRecord::DESCRIPTOR).unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({
                "satellite_id": 7,
                "station_id": 2,
                "timestamp": "2025-03-01T12:30",
                "latitude": -33.5,
                "longitude": null,
                "altitude_km": null,
            })
        );
    }

    #[test]
    fn blank_required_field_is_missing() {
        let mut draft = Draft::empty(Mission::DESCRIPTOR);
        draft.set("mission_name", "Artemis II");
        draft.set("launch_date", "2025-09-01");

        let err = draft.to_payload(Mission::DESCRIPTOR).unwrap_err();
        assert_eq!(err, DraftError::Missing("Status"));
        assert!(err.is_missing());
    }

    #[test]
    fn zero_is_a_value_not_a_blank() {
        let mut draft = Draft::empty(DebrisRecord::DESCRIPTOR);
        draft.set("description", "Paint fleck");
        draft.set("latitude", "0");
        draft.set("longitude", "0.0");
        draft.set("size_meters", "0.01");
        draft.set("risk_level", "Low");
        let payload = draft.to_payload(DebrisRecord::DESCRIPTOR).unwrap();
        assert_eq!(payload["latitude"], json!(0.0));
    }

    #[test]
    fn unparseable_number_is_invalid() {
        let mut draft = Draft::empty(TrackingRecord::DESCRIPTOR);
        draft.set("satellite_id", "4.5");
        draft.set("station_id", "1");
        draft.set("timestamp", "2025-03-01T12:30");
        let err = draft.to_payload(TrackingRecord::DESCRIPTOR).unwrap_err();
        assert_eq!(err.to_string(), "Satellite ID must be a whole number");
        assert!(!err.is_missing());
    }

    #[test]
    fn unknown_fields_are_not_added() {
        let mut draft = Draft::empty(Mission::DESCRIPTOR);
        draft.set("mission_id", "12");
        assert!(!draft.values.contains_key("mission_id"));
    }

    #[test]
    fn from_record_formats_inputs() {
        let record = TrackingRecord {
            track_id: Some(11),
            satellite_id: 3,
            station_id: 1,
            timestamp: "2025-03-01T12:30:45".into(),
            latitude: Some(10.25),
            longitude: None,
            altitude_km: Some(550.0),
        };
        let draft = Draft::from_record(&record);
        assert_eq!(draft.id, Some(11));
        assert_eq!(draft.value("timestamp"), "2025-03-01T12:30");
        assert_eq!(draft.value("latitude"), "10.25");
        assert_eq!(draft.value("longitude"), "");
        assert_eq!(draft.value("satellite_id"), "3");
    }

    #[test]
    fn optional_parse_accepts_blank() {
        assert_eq!(parse_optional::<f64>("Mass", "  ", "must be a number"), Ok(None));
        assert_eq!(parse_optional::<i64>("Stages", "2", "must be a whole number"), Ok(Some(2)));
        assert!(parse_optional::<i64>("Stages", "two", "must be a whole number").is_err());
    }
}
