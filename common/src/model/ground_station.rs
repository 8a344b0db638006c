use serde::{Deserialize, Serialize};

use super::descriptor::{ColumnSpec, EntityDescriptor, FieldKind, FieldSpec, SummarySpec};
use super::{Entity, RecordId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundStation {
    #[serde(default)]
    pub station_id: Option<RecordId>,
    pub station_name: String,
    pub location: String,
    /// MHz.
    #[serde(default)]
    pub contact_frequency: Option<f64>,
}

static DESCRIPTOR: EntityDescriptor = EntityDescriptor {
    key: "ground-stations",
    title: "Ground Stations",
    singular: "Ground Station",
    blurb: "Manage ground station facilities",
    id_field: "station_id",
    collection_path: "/ground-stations/",
    list_override: None,
    fields: &[
        FieldSpec::required("station_name", "Station Name", FieldKind::Text),
        FieldSpec::required("location", "Location", FieldKind::Text),
        FieldSpec::optional("contact_frequency", "Contact Frequency", FieldKind::Float),
    ],
    columns: &[
        ColumnSpec::plain("station_id", "Station ID"),
        ColumnSpec::plain("station_name", "Station Name"),
        ColumnSpec::plain("location", "Location"),
        ColumnSpec::plain("contact_frequency", "Contact Frequency"),
    ],
    summary: SummarySpec {
        heading: "Ground Station Network",
        total_label: "Total Ground Stations",
        field: None,
        tiles: &[],
        breakdowns: &[],
    },
    recent: None,
};

impl Entity for GroundStation {
    const DESCRIPTOR: &'static EntityDescriptor = &DESCRIPTOR;

    fn id(&self) -> Option<RecordId> {
        self.station_id
    }
}
