//! AI scoring passthroughs shown on the Missions and Predictions panels.
//!
//! Both scorers are opaque services: the dashboard collects a handful of
//! numeric inputs as raw text, validates them locally, posts them and shows
//! the answer. Scoring keeps its own in-progress/error state so a failed
//! score never touches the list or form state of the hosting panel.

use crate::draft::{DraftError, parse_optional};
use crate::error::ApiError;
use crate::gateway::{ApiRequest, Gateway, send_checked};
use crate::model::{Entity, PredictionRecord, RecordId, Satellite};
use crate::requests::{CollisionRequest, CollisionResponse, MissionSuccessRequest, MissionSuccessResponse};

pub const MISSION_SUCCESS_PATH: &str = "/ai/predict/mission_success";
pub const SATELLITE_COLLISION_PATH: &str = "/ai/predict/satellite_collision";

#[derive(Debug, Clone, PartialEq)]
pub struct ScoringState<T> {
    pub in_progress: bool,
    pub error: Option<String>,
    pub result: Option<T>,
}

impl<T> Default for ScoringState<T> {
    fn default() -> Self {
        Self { in_progress: false, error: None, result: None }
    }
}

/// A result only ever describes the latest request: starting a new one or
/// failing drops whatever was shown before.
impl<T> ScoringState<T> {
    pub fn begin(&mut self) {
        self.in_progress = true;
        self.error = None;
        self.result = None;
    }

    pub fn reject(&mut self, err: impl ToString) {
        self.in_progress = false;
        self.error = Some(err.to_string());
        self.result = None;
    }

    pub fn finish(&mut self, outcome: Result<T, ApiError>) {
        self.in_progress = false;
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err.to_string());
            }
        }
    }
}

/// Raw inputs of the mission success scorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MissionSuccessForm {
    pub payload_mass_kg: String,
    pub mission_duration_days: String,
    pub launch_vehicle_reliability: String,
    pub num_stages: String,
}

impl MissionSuccessForm {
    pub fn to_request(&self) -> Result<MissionSuccessRequest, DraftError> {
        let payload_mass_kg = parse_optional::<f64>("Payload mass", &self.payload_mass_kg, "must be a number")?
            .ok_or(DraftError::Missing("Payload mass"))?;
        Ok(MissionSuccessRequest {
            payload_mass_kg,
            mission_duration_days: parse_optional(
                "Mission duration",
                &self.mission_duration_days,
                "must be a number",
            )?,
            launch_vehicle_reliability: parse_optional(
                "Launch vehicle reliability",
                &self.launch_vehicle_reliability,
                "must be a number",
            )?,
            num_stages: parse_optional("Number of stages", &self.num_stages, "must be a whole number")?,
        })
    }
}

/// Raw inputs of the collision scorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionForm {
    pub satellite_id: String,
    pub orbit_type: String,
    pub launch_year: String,
    pub age_at_prediction_months: String,
    pub maintenance_cost_usd_per_year: String,
    pub component_health_score: String,
}

impl CollisionForm {
    pub fn to_request(&self) -> Result<CollisionRequest, DraftError> {
        let orbit_type = self.orbit_type.trim();
        let satellite_id = parse_optional::<RecordId>("Satellite", &self.satellite_id, "must be selected")?;
        if orbit_type.is_empty() {
            return Err(DraftError::Missing("Orbit type"));
        }
        let satellite_id = satellite_id.ok_or(DraftError::Missing("Satellite"))?;
        Ok(CollisionRequest {
            satellite_id,
            orbit_type: orbit_type.to_string(),
            launch_year: parse_optional("Launch year", &self.launch_year, "must be a whole number")?,
            age_at_prediction_months: parse_optional(
                "Age at prediction",
                &self.age_at_prediction_months,
                "must be a whole number",
            )?,
            maintenance_cost_usd_per_year: parse_optional(
                "Maintenance cost",
                &self.maintenance_cost_usd_per_year,
                "must be a number",
            )?,
            component_health_score: parse_optional(
                "Component health score",
                &self.component_health_score,
                "must be a number",
            )?,
        })
    }
}

pub async fn score_mission<G: Gateway>(
    gateway: &G,
    request: &MissionSuccessRequest,
) -> Result<MissionSuccessResponse, ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    send_checked(gateway, ApiRequest::post(MISSION_SUCCESS_PATH, body)).await?.json()
}

/// Scores one satellite. The answer is paired with the satellite it was
/// computed for, so a later save can never attach it to another one.
pub async fn score_collision<G: Gateway>(
    gateway: &G,
    request: &CollisionRequest,
) -> Result<(RecordId, CollisionResponse), ApiError> {
    let body = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    let score = send_checked(gateway, ApiRequest::post(SATELLITE_COLLISION_PATH, body)).await?.json()?;
    Ok((request.satellite_id, score))
}

/// Options for the satellite picker; read from the plain collection, not the
/// joined view.
pub async fn satellite_choices<G: Gateway>(gateway: &G) -> Result<Vec<Satellite>, ApiError> {
    send_checked(gateway, ApiRequest::get(Satellite::DESCRIPTOR.collection_path)).await?.json()
}

/// The prediction record a collision score is saved as.
pub fn prediction_from_score(satellite_id: RecordId, score: &CollisionResponse) -> PredictionRecord {
    PredictionRecord {
        prediction_id: None,
        satellite_id,
        status_prediction: score.collision_risk.clone(),
        lifespan_months: score.lifespan_months,
        collision_risk: score.collision_risk.clone(),
        prediction_date: None,
    }
}

/// Persists a collision score as a prediction record.
///
/// The predictions panel refetches its collection once this succeeds.
pub async fn save_collision_prediction<G: Gateway>(
    gateway: &G,
    satellite_id: RecordId,
    score: &CollisionResponse,
) -> Result<(), ApiError> {
    let record = prediction_from_score(satellite_id, score);
    let mut body = serde_json::to_value(&record).map_err(|e| ApiError::Decode(e.to_string()))?;
    if let Some(fields) = body.as_object_mut() {
        fields.remove("prediction_id");
        fields.remove("prediction_date");
    }
    send_checked(gateway, ApiRequest::post(PredictionRecord::DESCRIPTOR.collection_path, body)).await?;
    log::info!("saved {} prediction for satellite {}", score.collision_risk, satellite_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Method;
    use crate::testing::FakeGateway;
    use serde_json::json;

    #[test]
    fn payload_mass_is_required() {
        let form = MissionSuccessForm { num_stages: "2".into(), ..Default::default() };
        assert_eq!(form.to_request(), Err(DraftError::Missing("Payload mass")));

        let form = MissionSuccessForm { payload_mass_kg: "heavy".into(), ..Default::default() };
        assert!(matches!(form.to_request(), Err(DraftError::Invalid { .. })));
    }

    #[test]
    fn blank_optional_inputs_are_left_out_of_the_body() {
        let form = MissionSuccessForm {
            payload_mass_kg: "1500".into(),
            num_stages: "3".into(),
            ..Default::default()
        };
        let body = serde_json::to_value(form.to_request().unwrap()).unwrap();
        assert_eq!(body, json!({"payload_mass_kg": 1500.0, "num_stages": 3}));
    }

    #[test]
    fn collision_needs_orbit_and_satellite() {
        let form = CollisionForm { orbit_type: "LEO".into(), ..Default::default() };
        assert!(form.to_request().unwrap_err().is_missing());

        let form = CollisionForm { satellite_id: "3".into(), ..Default::default() };
        assert!(form.to_request().unwrap_err().is_missing());

        let form = CollisionForm {
            satellite_id: "3".into(),
            orbit_type: "LEO".into(),
            component_health_score: "0.25".into(),
            ..Default::default()
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.satellite_id, 3);
        assert_eq!(request.component_health_score, Some(0.25));
        assert_eq!(request.launch_year, None);
    }

    #[tokio::test]
    async fn mission_score_round_trip() {
        let gateway = FakeGateway::new().reply(200, json!({"mission_success_chance": 0.87}));
        let request = MissionSuccessRequest {
            payload_mass_kg: 1200.0,
            mission_duration_days: None,
            launch_vehicle_reliability: Some(0.95),
            num_stages: None,
        };

        let mut state = ScoringState::default();
        state.begin();
        state.finish(score_mission(&gateway, &request).await);

        assert!(!state.in_progress);
        assert_eq!(state.result.map(|r| r.mission_success_chance), Some(0.87));
        assert_eq!(gateway.calls(), [(Method::Post, MISSION_SUCCESS_PATH.to_string())]);
    }

    #[tokio::test]
    async fn scorer_failure_lands_in_the_scoring_state() {
        let gateway = FakeGateway::new().reply(500, json!({"detail": "model not loaded"}));
        let request = CollisionRequest {
            satellite_id: 1,
            orbit_type: "GEO".into(),
            launch_year: None,
            age_at_prediction_months: None,
            maintenance_cost_usd_per_year: None,
            component_health_score: None,
        };

        let mut state = ScoringState::default();
        state.begin();
        state.finish(score_collision(&gateway, &request).await);

        assert_eq!(state.error.as_deref(), Some("model not loaded"));
        assert_eq!(state.result, None);
    }

    fn collision_request(satellite_id: RecordId) -> CollisionRequest {
        CollisionRequest {
            satellite_id,
            orbit_type: "LEO".into(),
            launch_year: None,
            age_at_prediction_months: None,
            maintenance_cost_usd_per_year: None,
            component_health_score: None,
        }
    }

    #[tokio::test]
    async fn failed_rescore_drops_the_previous_answer() {
        let gateway = FakeGateway::new()
            .reply(200, json!({"collision_risk": "High", "lifespan_months": 40}))
            .reply(500, json!({"detail": "model not loaded"}));

        let mut state = ScoringState::default();
        state.begin();
        state.finish(score_collision(&gateway, &collision_request(1)).await);
        let (scored_for, score) = state.result.clone().unwrap();
        assert_eq!(scored_for, 1);
        assert_eq!(score.collision_risk, "High");

        state.begin();
        assert_eq!(state.result, None);
        state.finish(score_collision(&gateway, &collision_request(2)).await);

        assert_eq!(state.result, None);
        assert_eq!(state.error.as_deref(), Some("model not loaded"));
    }

    #[test]
    fn rejected_input_clears_the_shown_answer() {
        let mut state = ScoringState::default();
        state.finish(Ok(0.5_f64));
        state.reject(DraftError::Missing("Payload mass"));
        assert_eq!(state.result, None);
        assert!(!state.in_progress);
    }

    #[tokio::test]
    async fn saving_a_score_posts_a_prediction_record() {
        let gateway = FakeGateway::new().reply(200, json!({"message": "Prediction created", "prediction_id": 11}));
        let score = CollisionResponse {
            collision_risk: "High".into(),
            lifespan_months: 40,
            saved_prediction_id: None,
        };

        save_collision_prediction(&gateway, 4, &score).await.unwrap();

        assert_eq!(gateway.calls(), [(Method::Post, "/predictions/predictions/".to_string())]);
        assert_eq!(
            gateway.requests()[0].body,
            Some(json!({"satellite_id": 4, "status_prediction": "High",
                        "lifespan_months": 40, "collision_risk": "High"}))
        );
    }

    #[tokio::test]
    async fn failed_save_is_reported() {
        let gateway = FakeGateway::new().reply(422, json!({"detail": [{"msg": "field required"}]}));
        let score = CollisionResponse {
            collision_risk: "Low".into(),
            lifespan_months: 12,
            saved_prediction_id: None,
        };
        let err = save_collision_prediction(&gateway, 4, &score).await.unwrap_err();
        assert_eq!(err.to_string(), "HTTP error! status: 422");
    }

    #[tokio::test]
    async fn picker_reads_the_plain_satellite_collection() {
        let gateway = FakeGateway::new()
            .reply(200, json!([{"satellite_id": 2, "satellite_name": "Aqua", "mission_id": 1}]));
        let satellites = satellite_choices(&gateway).await.unwrap();
        assert_eq!(satellites[0].satellite_name, "Aqua");
        assert_eq!(gateway.calls(), [(Method::Get, "/satellites/".to_string())]);
    }
}
