//! Aggregate tiles derived from the cached collection.
//!
//! Tiles are recomputed from the records on every render; a tile's count is
//! always `count(records where field matches)`.

use std::collections::BTreeMap;

use crate::model::Entity;
use crate::model::descriptor::{SummarySpec, TileMatch};

/// Group label for records whose field is empty.
pub const UNSPECIFIED: &str = "Unspecified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub label: &'static str,
    pub count: usize,
    pub accent: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub label: &'static str,
    /// `(value, count)` pairs ordered by value.
    pub groups: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub heading: &'static str,
    pub total: Tile,
    pub tiles: Vec<Tile>,
    pub breakdowns: Vec<Breakdown>,
}

impl TileMatch {
    pub fn matches(&self, value: Option<&str>) -> bool {
        match (self, value) {
            (TileMatch::Equals(expected), Some(v)) => v == *expected,
            (TileMatch::NoneOf(excluded), Some(v)) => !excluded.contains(&v),
            (_, None) => false,
        }
    }
}

pub fn summarize<E: Entity>(records: &[E]) -> Summary {
    let spec: &SummarySpec = &E::DESCRIPTOR.summary;

    let tiles = match spec.field {
        Some(field) => {
            let values: Vec<Option<String>> = records.iter().map(|r| r.field_text(field)).collect();
            spec.tiles
                .iter()
                .map(|tile| Tile {
                    label: tile.label,
                    count: values.iter().filter(|v| tile.matches.matches(v.as_deref())).count(),
                    accent: tile.accent,
                })
                .collect()
        }
        None => Vec::new(),
    };

    let breakdowns = spec
        .breakdowns
        .iter()
        .map(|b| Breakdown { label: b.label, groups: group_by(records, b.field) })
        .collect();

    Summary {
        heading: spec.heading,
        total: Tile { label: spec.total_label, count: records.len(), accent: "accent-blue" },
        tiles,
        breakdowns,
    }
}

/// Counts records per distinct value of a field.
pub fn group_by<E: Entity>(records: &[E], field: &str) -> Vec<(String, usize)> {
    let mut groups: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let key = record.field_text(field).unwrap_or_else(|| UNSPECIFIED.to_string());
        *groups.entry(key).or_default() += 1;
    }
    groups.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DebrisRecord, GroundStation, Mission, Satellite};

    fn debris(id: i64, risk: &str) -> DebrisRecord {
        DebrisRecord {
            debris_id: Some(id),
            description: format!("fragment {id}"),
            latitude: 0.0,
            longitude: 0.0,
            size_meters: 0.5,
            risk_level: risk.into(),
        }
    }

    fn satellite(id: i64, orbit: Option<&str>) -> Satellite {
        Satellite {
            satellite_id: Some(id),
            satellite_name: format!("SAT-{id}"),
            mission_id: Some(1),
            orbit_type: orbit.map(str::to_string),
            launch_date: None,
            mission_name: None,
        }
    }

    #[test]
    fn risk_tiles_count_exact_matches() {
        let records = vec![debris(1, "High"), debris(2, "Low"), debris(3, "High"), debris(4, "Critical")];
        let summary = summarize(&records);
        assert_eq!(summary.total.count, 4);
        let counts: Vec<_> = summary.tiles.iter().map(|t| (t.label, t.count)).collect();
        assert_eq!(
            counts,
            [("High Risk Debris", 2), ("Medium Risk Debris", 0), ("Low Risk Debris", 1)]
        );
        let partitioned: usize = summary.tiles.iter().map(|t| t.count).sum();
        assert!(partitioned <= summary.total.count);
    }

    #[test]
    fn other_orbit_excludes_known_and_missing_values() {
        let records = vec![
            satellite(1, Some("LEO")),
            satellite(2, Some("HEO")),
            satellite(3, None),
            satellite(4, Some("GEO")),
        ];
        let summary = summarize(&records);
        let other = summary.tiles.iter().find(|t| t.label == "Other Orbits").unwrap();
        assert_eq!(other.count, 1);
    }

    #[test]
    fn mission_breakdowns_group_every_value() {
        let mission = |id, status: &str, kind: Option<&str>| Mission {
            mission_id: Some(id),
            mission_name: format!("M{id}"),
            launch_date: "2025-01-01".into(),
            mission_type: kind.map(str::to_string),
            status: Some(status.into()),
        };
        let records = vec![
            mission(1, "Active", Some("Crewed")),
            mission(2, "Planned", None),
            mission(3, "Active", Some("Robotic")),
        ];
        let summary = summarize(&records);
        assert_eq!(
            summary.breakdowns[0].groups,
            [("Active".to_string(), 2), ("Planned".to_string(), 1)]
        );
        assert_eq!(
            summary.breakdowns[1].groups,
            [("Crewed".to_string(), 1), ("Robotic".to_string(), 1), (UNSPECIFIED.to_string(), 1)]
        );
    }

    #[test]
    fn entities_without_a_partition_only_have_a_total() {
        let stations = vec![GroundStation {
            station_id: Some(1),
            station_name: "Goldstone".into(),
            location: "California".into(),
            contact_frequency: Some(2290.0),
        }];
        let summary = summarize(&stations);
        assert_eq!(summary.total.count, 1);
        assert!(summary.tiles.is_empty());
    }
}
