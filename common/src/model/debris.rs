use serde::{Deserialize, Serialize};

use super::descriptor::{
    ColumnSpec, EntityDescriptor, FieldKind, FieldSpec, SummarySpec, TileMatch, TileSpec,
};
use super::{Entity, RecordId};

pub const RISK_LEVELS: &[&str] = &["High", "Medium", "Low"];

/// A tracked piece of orbital debris.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebrisRecord {
    #[serde(default)]
    pub debris_id: Option<RecordId>,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub size_meters: f64,
    pub risk_level: String,
}

static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    key: "space-debris",
    title: "Space Debris",
    singular: "Debris Record",
    blurb: "Identify and track orbital debris for safer operations",
    id_field: "debris_id",
    collection_path: "/space-debris/",
    list_override: None,
    fields: &[
        FieldSpec::required("description", "Description", FieldKind::Text),
        FieldSpec::required("latitude", "Latitude", FieldKind::Float),
        FieldSpec::required("longitude", "Longitude", FieldKind::Float),
        FieldSpec::required("size_meters", "Size (meters)", FieldKind::Float),
        FieldSpec::required("risk_level", "Risk Level", FieldKind::Text).with_suggestions(RISK_LEVELS),
    ],
    columns: &[
        ColumnSpec::plain("debris_id", "Debris ID"),
        ColumnSpec::plain("description", "Description"),
        ColumnSpec::plain("latitude", "Latitude"),
        ColumnSpec::plain("longitude", "Longitude"),
        ColumnSpec::plain("size_meters", "Size (meters)"),
        ColumnSpec::plain("risk_level", "Risk Level"),
    ],
    summary: SummarySpec {
        heading: "Space Debris Risk Assessment",
        total_label: "Total Debris Records",
        field: Some("risk_level"),
        tiles: &[
            TileSpec { label: "High Risk Debris", matches: TileMatch::Equals("High"), accent: "accent-red" },
            TileSpec { label: "Medium Risk Debris", matches: TileMatch::Equals("Medium"), accent: "accent-yellow" },
            TileSpec { label: "Low Risk Debris", matches: TileMatch::Equals("Low"), accent: "accent-green" },
        ],
        breakdowns: &[],
    },
    recent: None,
};

impl Entity for DebrisRecord {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn id(&self) -> Option<RecordId> {
        self.debris_id
    }
}
