use serde::{Deserialize, Serialize};

use super::descriptor::{
    CellFormat, ColumnSpec, EntityDescriptor, FieldKind, FieldSpec, SummarySpec, TileMatch,
    TileSpec,
};
use super::{Entity, RecordId};

pub const LOG_LEVELS: &[&str] = &["Info", "Warning", "Error", "Debug"];

/// A system log entry. The timestamp is assigned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(default)]
    pub log_id: Option<RecordId>,
    pub log_message: String,
    pub log_level: String,
    #[serde(default, alias = "timestamp")]
    pub log_time: Option<String>,
}

static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    key: "system-logs",
    title: "System Logs",
    singular: "Log",
    blurb: "Monitor system health and activity",
    id_field: "log_id",
    collection_path: "/logs/",
    list_override: None,
    fields: &[
        FieldSpec::required("log_message", "Message", FieldKind::Text),
        FieldSpec::required("log_level", "Level", FieldKind::Text).with_choices(LOG_LEVELS),
    ],
    columns: &[
        ColumnSpec::plain("log_id", "Log ID"),
        ColumnSpec::plain("log_message", "Message"),
        ColumnSpec::plain("log_level", "Level"),
        ColumnSpec::formatted("log_time", "Timestamp", CellFormat::Timestamp),
    ],
    summary: SummarySpec {
        heading: "Log Summary",
        total_label: "Total Logs",
        field: Some("log_level"),
        tiles: &[
            TileSpec { label: "Errors", matches: TileMatch::Equals("Error"), accent: "accent-red" },
            TileSpec { label: "Warnings", matches: TileMatch::Equals("Warning"), accent: "accent-yellow" },
            TileSpec { label: "Info", matches: TileMatch::Equals("Info"), accent: "accent-green" },
        ],
        breakdowns: &[],
    },
    recent: None,
};

impl Entity for LogRecord {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn id(&self) -> Option<RecordId> {
        self.log_id
    }
}
