use serde::{Deserialize, Serialize};

use super::descriptor::{
    CellFormat, ColumnSpec, EntityDescriptor, FieldKind, FieldSpec, RecentSpec, SummarySpec,
};
use super::{Entity, RecordId};
use crate::RECENT_TRACKING_CARDS;

/// One observed position of a satellite, recorded by a ground station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackingRecord {
    #[serde(default)]
    pub track_id: Option<RecordId>,
    pub satellite_id: RecordId,
    pub station_id: RecordId,
    /// ISO datetime.
    pub timestamp: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub altitude_km: Option<f64>,
}

static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    key: "tracking",
    title: "Satellite Tracking",
    singular: "Tracking Record",
    blurb: "Monitor satellite positions and trajectories",
    id_field: "track_id",
    collection_path: "/satellite_tracking/",
    list_override: None,
    fields: &[
        FieldSpec::required("satellite_id", "Satellite ID", FieldKind::Integer),
        FieldSpec::required("station_id", "Station ID", FieldKind::Integer),
        FieldSpec::required("timestamp", "Timestamp", FieldKind::DateTime),
        FieldSpec::optional("latitude", "Latitude", FieldKind::Float),
        FieldSpec::optional("longitude", "Longitude", FieldKind::Float),
        FieldSpec::optional("altitude_km", "Altitude (km)", FieldKind::Float),
    ],
    columns: &[
        ColumnSpec::plain("track_id", "Track ID"),
        ColumnSpec::plain("satellite_id", "Satellite ID"),
        ColumnSpec::plain("station_id", "Station ID"),
        ColumnSpec::formatted("timestamp", "Timestamp", CellFormat::Timestamp),
        ColumnSpec::formatted("latitude", "Latitude", CellFormat::Fixed2),
        ColumnSpec::formatted("longitude", "Longitude", CellFormat::Fixed2),
        ColumnSpec::formatted("altitude_km", "Altitude (km)", CellFormat::Fixed2),
    ],
    summary: SummarySpec {
        heading: "Tracking Overview",
        total_label: "Total Tracking Records",
        field: None,
        tiles: &[],
        breakdowns: &[],
    },
    recent: Some(RecentSpec {
        heading: "Recent Tracking Activity",
        timestamp_field: "timestamp",
        count: RECENT_TRACKING_CARDS,
    }),
};

impl Entity for TrackingRecord {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn id(&self) -> Option<RecordId> {
        self.track_id
    }
}
