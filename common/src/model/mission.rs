use serde::{Deserialize, Serialize};

use super::descriptor::{
    BreakdownSpec, ColumnSpec, EntityDescriptor, FieldKind, FieldSpec, SummarySpec, TileMatch,
    TileSpec,
};
use super::{Entity, RecordId};

pub const MISSION_STATUSES: &[&str] = &["Planned", "Active", "Completed", "Failed"];

/// A space mission, served at `/missions/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    #[serde(default)]
    pub mission_id: Option<RecordId>,
    pub mission_name: String,
    /// `YYYY-MM-DD`.
    pub launch_date: String,
    #[serde(default)]
    pub mission_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    key: "missions",
    title: "Missions",
    singular: "Mission",
    blurb: "Manage space missions and their details",
    id_field: "mission_id",
    collection_path: "/missions/",
    list_override: None,
    fields: &[
        FieldSpec::required("mission_name", "Mission Name", FieldKind::Text),
        FieldSpec::required("launch_date", "Launch Date", FieldKind::Date),
        FieldSpec::optional("mission_type", "Mission Type", FieldKind::Text),
        FieldSpec::required("status", "Status", FieldKind::Text).with_choices(MISSION_STATUSES),
    ],
    columns: &[
        ColumnSpec::plain("mission_id", "Mission ID"),
        ColumnSpec::plain("mission_name", "Mission Name"),
        ColumnSpec::plain("launch_date", "Launch Date"),
        ColumnSpec::plain("mission_type", "Mission Type"),
        ColumnSpec::plain("status", "Status"),
    ],
    summary: SummarySpec {
        heading: "Mission Analytics",
        total_label: "Total Missions",
        field: Some("status"),
        tiles: &[
            TileSpec { label: "Active Missions", matches: TileMatch::Equals("Active"), accent: "accent-green" },
            TileSpec { label: "Completed Missions", matches: TileMatch::Equals("Completed"), accent: "accent-blue" },
            TileSpec { label: "Planned Missions", matches: TileMatch::Equals("Planned"), accent: "accent-purple" },
            TileSpec { label: "Failed Missions", matches: TileMatch::Equals("Failed"), accent: "accent-red" },
        ],
        breakdowns: &[
            BreakdownSpec { field: "status", label: "Missions by Status" },
            BreakdownSpec { field: "mission_type", label: "Missions by Type" },
        ],
    },
    recent: None,
};

impl Entity for Mission {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn id(&self) -> Option<RecordId> {
        self.mission_id
    }
}
