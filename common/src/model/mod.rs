//! Record types served by the REST API.
//!
//! Each record is flat: a numeric identifier assigned by the backend, scalar
//! fields, and foreign keys expressed as plain identifiers. The identifier is
//! `None` only for drafts that were never persisted.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub mod debris;
pub mod descriptor;
pub mod ground_station;
pub mod log_record;
pub mod mission;
pub mod prediction;
pub mod satellite;
pub mod tracking;

pub use debris::DebrisRecord;
pub use descriptor::EntityDescriptor;
pub use ground_station::GroundStation;
pub use log_record::LogRecord;
pub use mission::Mission;
pub use prediction::PredictionRecord;
pub use satellite::Satellite;
pub use tracking::TrackingRecord;

pub type RecordId = i64;

/// A record type managed by one dashboard panel.
pub trait Entity: Clone + PartialEq + Debug + Serialize + DeserializeOwned + 'static {
    const DESCRIPTOR: &'static EntityDescriptor;

    fn id(&self) -> Option<RecordId>;

    /// The record as a JSON object keyed by field name.
    fn to_fields(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }

    /// Text form of one field; `None` when absent, null or blank.
    fn field_text(&self, field: &str) -> Option<String> {
        self.to_fields().get(field).and_then(value_text)
    }
}

/// Renders a scalar JSON value as text. Null and blank strings are `None`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Descriptors of every entity, in navigation order.
pub fn all_descriptors() -> [&'static EntityDescriptor; 7] {
    [
        Mission::DESCRIPTOR,
        Satellite::DESCRIPTOR,
        TrackingRecord::DESCRIPTOR,
        GroundStation::DESCRIPTOR,
        DebrisRecord::DESCRIPTOR,
        PredictionRecord::DESCRIPTOR,
        LogRecord::DESCRIPTOR,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_descriptor_lists_its_id_first_in_the_table() {
        for descriptor in all_descriptors() {
            assert_eq!(descriptor.columns[0].field, descriptor.id_field, "{}", descriptor.key);
            assert!(descriptor.collection_path.ends_with('/'), "{}", descriptor.key);
            assert!(descriptor.fields.iter().all(|f| f.name != descriptor.id_field));
        }
    }

    #[test]
    fn item_paths_follow_the_collection() {
        assert_eq!(Mission::DESCRIPTOR.item_path(5), "/missions/5");
        assert_eq!(PredictionRecord::DESCRIPTOR.item_path(2), "/predictions/predictions/2");
        assert_eq!(GroundStation::DESCRIPTOR.item_path(9), "/ground-stations/9");
        assert_eq!(Satellite::DESCRIPTOR.list_path(), "/satellites/with-mission");
        assert_eq!(DebrisRecord::DESCRIPTOR.list_path(), "/space-debris/");
    }

    #[test]
    fn required_fields_match_the_data_model() {
        let required = |d: &EntityDescriptor| d.required_fields().map(|f| f.name).collect::<Vec<_>>();
        assert_eq!(required(Mission::DESCRIPTOR), ["mission_name", "launch_date", "status"]);
        assert_eq!(required(TrackingRecord::DESCRIPTOR), ["satellite_id", "station_id", "timestamp"]);
        assert_eq!(required(GroundStation::DESCRIPTOR), ["station_name", "location"]);
        assert_eq!(
            required(DebrisRecord::DESCRIPTOR),
            ["description", "latitude", "longitude", "size_meters", "risk_level"]
        );
        assert_eq!(
            required(PredictionRecord::DESCRIPTOR),
            ["satellite_id", "status_prediction", "lifespan_months", "collision_risk"]
        );
        assert_eq!(required(LogRecord::DESCRIPTOR), ["log_message", "log_level"]);
    }

    #[test]
    fn only_status_and_log_level_are_closed_lists() {
        let closed: Vec<_> = all_descriptors()
            .into_iter()
            .flat_map(|d| d.fields.iter())
            .filter(|f| !f.choices.is_empty() && !f.free_text)
            .map(|f| f.name)
            .collect();
        assert_eq!(closed, ["status", "log_level"]);

        let orbit = Satellite::DESCRIPTOR.fields.iter().find(|f| f.name == "orbit_type").unwrap();
        assert!(orbit.free_text);
        assert!(orbit.choices.contains(&"LEO"));
    }

    #[test]
    fn closed_list_keeps_an_unlisted_stored_value() {
        let level = LogRecord::DESCRIPTOR.fields.iter().find(|f| f.name == "log_level").unwrap();
        assert_eq!(level.options_for("Debug"), ["Info", "Warning", "Error", "Debug"]);
        assert_eq!(level.options_for(""), ["Info", "Warning", "Error", "Debug"]);
        assert_eq!(level.options_for("TRACE"), ["TRACE", "Info", "Warning", "Error", "Debug"]);
    }

    #[test]
    fn every_descriptor_has_an_overview_blurb() {
        for descriptor in all_descriptors() {
            assert!(!descriptor.blurb.is_empty(), "{}", descriptor.key);
        }
    }

    #[test]
    fn field_text_skips_nulls_and_blanks() {
        let mission = Mission {
            mission_id: Some(1),
            mission_name: "Artemis II".into(),
            launch_date: "2025-09-01".into(),
            mission_type: None,
            status: Some(" ".into()),
        };
        assert_eq!(mission.field_text("mission_id").as_deref(), Some("1"));
        assert_eq!(mission.field_text("mission_type"), None);
        assert_eq!(mission.field_text("status"), None);
        assert_eq!(mission.field_text("unknown"), None);
    }
}
