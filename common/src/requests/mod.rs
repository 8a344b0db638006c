use serde::{Deserialize, Serialize};

use crate::model::RecordId;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Request payload for the mission success scorer.
/// Omitted optional inputs fall back to the scorer's own defaults.
pub struct MissionSuccessRequest {
    pub payload_mass_kg: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission_duration_days: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_vehicle_reliability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_stages: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Success probability in `[0, 1]`.
pub struct MissionSuccessResponse {
    pub mission_success_chance: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Request payload for the satellite collision scorer.
pub struct CollisionRequest {
    pub satellite_id: RecordId,
    pub orbit_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub launch_year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_at_prediction_months: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maintenance_cost_usd_per_year: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_health_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CollisionResponse {
    pub collision_risk: String,
    pub lifespan_months: i64,
    /// Present when the scorer persisted the forecast itself.
    #[serde(default)]
    pub saved_prediction_id: Option<RecordId>,
}
