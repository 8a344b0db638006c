//! Async CRUD round-trips for one entity type.
//!
//! These functions only talk to the gateway and return plain results; the
//! caller feeds them back into `EntityManager` through its `finish_*`
//! methods. Sequencing lives here: a refetch after a mutation is issued only
//! once the mutation's success response has been observed.

use crate::error::ApiError;
use crate::gateway::{ApiRequest, ApiResponse, Gateway, send_checked};
use crate::model::{Entity, RecordId};

/// How the cache is brought back in sync after a successful create/update.
#[derive(Debug, Clone, PartialEq)]
pub enum Reconciliation<E> {
    /// The response carried the full record; patch it into the cache.
    Patched(E),
    /// The response did not carry the record; the collection was refetched.
    Refetched(Vec<E>),
    /// The mutation succeeded but the follow-up refetch did not.
    RefetchFailed(ApiError),
}

pub async fn fetch_all<E: Entity, G: Gateway>(gateway: &G) -> Result<Vec<E>, ApiError> {
    let response = send_checked(gateway, ApiRequest::get(E::DESCRIPTOR.list_path())).await?;
    let records: Vec<E> = response.json()?;
    log::debug!("loaded {} {}", records.len(), E::DESCRIPTOR.key);
    Ok(records)
}

/// Sends a create or update, then reconciles.
pub async fn save<E: Entity, G: Gateway>(
    gateway: &G,
    request: ApiRequest,
) -> Result<Reconciliation<E>, ApiError> {
    let response = send_checked(gateway, request).await?;

    if let Some(record) = returned_record::<E>(&response) {
        return Ok(Reconciliation::Patched(record));
    }

    match fetch_all::<E, G>(gateway).await {
        Ok(records) => Ok(Reconciliation::Refetched(records)),
        Err(err) => {
            log::error!("failed to re-fetch {}: {}", E::DESCRIPTOR.key, err);
            Ok(Reconciliation::RefetchFailed(err))
        }
    }
}

/// The record echoed by a mutation, if the body is one.
///
/// Collections listed through a joined view never patch: the mutation
/// response lacks the joined columns.
fn returned_record<E: Entity>(response: &ApiResponse) -> Option<E> {
    if E::DESCRIPTOR.list_override.is_some() {
        return None;
    }
    response.json::<E>().ok().filter(|record| record.id().is_some())
}

pub async fn remove<E: Entity, G: Gateway>(gateway: &G, id: RecordId) -> Result<(), ApiError> {
    send_checked(gateway, ApiRequest::delete(E::DESCRIPTOR.item_path(id))).await?;
    log::info!("deleted {} {}", E::DESCRIPTOR.singular, id);
    Ok(())
}

/// Single-record lookup. A 404 is a normal "not found" outcome.
pub async fn find<E: Entity, G: Gateway>(gateway: &G, id: RecordId) -> Result<Option<E>, ApiError> {
    match send_checked(gateway, ApiRequest::get(E::DESCRIPTOR.item_path(id))).await {
        Ok(response) => response.json().map(Some),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Method;
    use crate::model::{LogRecord, Mission, Satellite};
    use crate::testing::FakeGateway;
    use serde_json::json;

    #[tokio::test]
    async fn full_record_in_response_is_patched_without_refetch() {
        let gateway = FakeGateway::new().reply(
            200,
            json!({"mission_id": 12, "mission_name": "Artemis II", "launch_date": "2025-09-01",
                   "mission_type": null, "status": "Planned"}),
        );
        let request = ApiRequest::post("/missions/", json!({"mission_name": "Artemis II"}));

        let outcome = save::<Mission, _>(&gateway, request).await.unwrap();
        match outcome {
            Reconciliation::Patched(mission) => assert_eq!(mission.mission_id, Some(12)),
            other => panic!("expected a patch, got {other:?}"),
        }
        assert_eq!(gateway.calls(), [(Method::Post, "/missions/".to_string())]);
    }

    #[tokio::test]
    async fn acknowledgement_only_response_triggers_refetch() {
        let gateway = FakeGateway::new()
            .reply(200, json!({"message": "Log created successfully", "log_id": 3}))
            .reply(200, json!([{"log_id": 3, "log_message": "Boot", "log_level": "Info",
                                 "log_time": "2025-01-01 00:00:00"}]));
        let request = ApiRequest::post("/logs/", json!({"log_message": "Boot", "log_level": "Info"}));

        let outcome = save::<LogRecord, _>(&gateway, request).await.unwrap();
        assert!(matches!(outcome, Reconciliation::Refetched(ref logs) if logs.len() == 1));
        assert_eq!(
            gateway.calls(),
            [(Method::Post, "/logs/".to_string()), (Method::Get, "/logs/".to_string())]
        );
    }

    #[tokio::test]
    async fn joined_listing_always_refetches_from_the_joined_view() {
        let gateway = FakeGateway::new()
            .reply(200, json!({"satellite_id": 4, "satellite_name": "Hubble", "mission_id": 1}))
            .reply(200, json!([{"satellite_id": 4, "satellite_name": "Hubble", "mission_id": 1,
                                 "mission_name": "HST"}]));
        let request = ApiRequest::put("/satellites/4", json!({"satellite_name": "Hubble"}));

        let outcome = save::<Satellite, _>(&gateway, request).await.unwrap();
        match outcome {
            Reconciliation::Refetched(list) => assert_eq!(list[0].mission_name.as_deref(), Some("HST")),
            other => panic!("expected a refetch, got {other:?}"),
        }
        assert_eq!(gateway.calls()[1], (Method::Get, "/satellites/with-mission".to_string()));
    }

    #[tokio::test]
    async fn failed_mutation_does_not_refetch() {
        let gateway = FakeGateway::new().reply(400, json!({"detail": "Invalid launch date"}));
        let request = ApiRequest::put("/missions/2", json!({}));

        let err = save::<Mission, _>(&gateway, request).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid launch date");
        assert_eq!(gateway.requests().len(), 1);
    }

    #[tokio::test]
    async fn refetch_failure_is_reported_separately() {
        let gateway = FakeGateway::new()
            .reply(200, json!({"message": "Log updated successfully"}))
            .fail("connection reset");
        let request = ApiRequest::put("/logs/1", json!({"log_message": "x", "log_level": "Info"}));

        let outcome = save::<LogRecord, _>(&gateway, request).await.unwrap();
        assert_eq!(
            outcome,
            Reconciliation::RefetchFailed(ApiError::Transport("connection reset".into()))
        );
    }

    #[tokio::test]
    async fn find_treats_404_as_absent() {
        let gateway = FakeGateway::new().reply(404, json!({"detail": "Mission not found"}));
        assert_eq!(find::<Mission, _>(&gateway, 99).await, Ok(None));
        assert_eq!(gateway.calls(), [(Method::Get, "/missions/99".to_string())]);
    }

    #[tokio::test]
    async fn find_reports_other_statuses() {
        let gateway = FakeGateway::new().reply(500, json!({"detail": "ORA-12541: no listener"}));
        let err = find::<Mission, _>(&gateway, 1).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "ORA-12541: no listener");
    }

    #[tokio::test]
    async fn unexpected_list_body_is_a_decode_error() {
        let gateway = FakeGateway::new().reply_text(200, "<!doctype html><html></html>");
        let err = fetch_all::<Mission, _>(&gateway).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn remove_uses_the_item_path() {
        let gateway = FakeGateway::new().reply(200, json!({"message": "Mission 5 deleted successfully."}));
        remove::<Mission, _>(&gateway, 5).await.unwrap();
        assert_eq!(gateway.calls(), [(Method::Delete, "/missions/5".to_string())]);
    }
}
