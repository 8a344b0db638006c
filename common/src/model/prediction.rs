use serde::{Deserialize, Serialize};

use super::debris::RISK_LEVELS;
use super::descriptor::{
    CellFormat, ColumnSpec, EntityDescriptor, FieldKind, FieldSpec, SummarySpec, TileMatch,
    TileSpec,
};
use super::{Entity, RecordId};

/// A lifespan and collision-risk forecast for one satellite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(default)]
    pub prediction_id: Option<RecordId>,
    pub satellite_id: RecordId,
    pub status_prediction: String,
    pub lifespan_months: i64,
    pub collision_risk: String,
    /// Assigned by the backend on create.
    #[serde(default)]
    pub prediction_date: Option<String>,
}

static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    key: "predictions",
    title: "Predictions",
    singular: "Prediction",
    blurb: "AI-driven insights for future events",
    id_field: "prediction_id",
    collection_path: "/predictions/predictions/",
    list_override: None,
    fields: &[
        FieldSpec::required("satellite_id", "Satellite ID", FieldKind::Integer),
        FieldSpec::required("status_prediction", "Status Prediction", FieldKind::Text),
        FieldSpec::required("lifespan_months", "Lifespan (months)", FieldKind::Integer),
        FieldSpec::required("collision_risk", "Collision Risk", FieldKind::Text).with_suggestions(RISK_LEVELS),
    ],
    columns: &[
        ColumnSpec::plain("prediction_id", "Prediction ID"),
        ColumnSpec::plain("satellite_id", "Satellite ID"),
        ColumnSpec::formatted("prediction_date", "Prediction Date", CellFormat::Timestamp),
        ColumnSpec::plain("status_prediction", "Status"),
        ColumnSpec::plain("lifespan_months", "Lifespan (months)"),
        ColumnSpec::plain("collision_risk", "Collision Risk"),
    ],
    summary: SummarySpec {
        heading: "Prediction Overview",
        total_label: "Total Predictions",
        field: Some("collision_risk"),
        tiles: &[
            TileSpec { label: "High Collision Risk", matches: TileMatch::Equals("High"), accent: "accent-red" },
            TileSpec { label: "Low Collision Risk", matches: TileMatch::Equals("Low"), accent: "accent-green" },
            TileSpec { label: "Medium Collision Risk", matches: TileMatch::Equals("Medium"), accent: "accent-yellow" },
        ],
        breakdowns: &[],
    },
    recent: None,
};

impl Entity for PredictionRecord {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn id(&self) -> Option<RecordId> {
        self.prediction_id
    }
}
