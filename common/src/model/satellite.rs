use serde::{Deserialize, Serialize};

use super::descriptor::{
    ColumnSpec, EntityDescriptor, FieldKind, FieldSpec, SummarySpec, TileMatch, TileSpec,
};
use super::{Entity, RecordId};

pub const ORBIT_TYPES: &[&str] = &["LEO", "MEO", "GEO"];

/// A satellite, optionally joined with its mission's name when listed through
/// `/satellites/with-mission`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Satellite {
    #[serde(default)]
    pub satellite_id: Option<RecordId>,
    pub satellite_name: String,
    #[serde(default)]
    pub mission_id: Option<RecordId>,
    #[serde(default)]
    pub orbit_type: Option<String>,
    #[serde(default)]
    pub launch_date: Option<String>,
    /// Display-only column from the joined view; never sent back.
    #[serde(default)]
    pub mission_name: Option<String>,
}

static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    key: "satellites",
    title: "Satellites",
    singular: "Satellite",
    blurb: "Track and manage satellite information",
    id_field: "satellite_id",
    collection_path: "/satellites/",
    list_override: Some("/satellites/with-mission"),
    fields: &[
        FieldSpec::required("satellite_name", "Satellite Name", FieldKind::Text),
        FieldSpec::required("mission_id", "Mission ID", FieldKind::Integer),
        FieldSpec::optional("launch_date", "Launch Date", FieldKind::Date),
        FieldSpec::optional("orbit_type", "Orbit Type", FieldKind::Text).with_suggestions(ORBIT_TYPES),
    ],
    columns: &[
        ColumnSpec::plain("satellite_id", "Satellite ID"),
        ColumnSpec::plain("satellite_name", "Satellite Name"),
        ColumnSpec::plain("launch_date", "Launch Date"),
        ColumnSpec::plain("orbit_type", "Orbit Type"),
        ColumnSpec::plain("mission_name", "Mission"),
    ],
    summary: SummarySpec {
        heading: "Satellite Orbit Distribution",
        total_label: "Total Satellites",
        field: Some("orbit_type"),
        tiles: &[
            TileSpec { label: "LEO Satellites", matches: TileMatch::Equals("LEO"), accent: "accent-purple" },
            TileSpec { label: "GEO Satellites", matches: TileMatch::Equals("GEO"), accent: "accent-green" },
            TileSpec { label: "MEO Satellites", matches: TileMatch::Equals("MEO"), accent: "accent-red" },
            TileSpec { label: "Other Orbits", matches: TileMatch::NoneOf(ORBIT_TYPES), accent: "accent-yellow" },
        ],
        breakdowns: &[],
    },
    recent: None,
};

impl Entity for Satellite {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn id(&self) -> Option<RecordId> {
        self.satellite_id
    }
}
