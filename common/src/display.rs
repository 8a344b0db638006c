//! View-model shaping: cell text, timestamp formatting, recent-first ordering.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::Entity;
use crate::model::descriptor::{CellFormat, ColumnSpec, RecentSpec};

/// Placeholder for empty cells.
pub const NOT_AVAILABLE: &str = "N/A";

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parses the timestamp shapes the backend emits. Offsets are normalised to UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(raw) {
        return Some(with_offset.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// `YYYY-MM-DD HH:MM:SS`, or the raw text when it is not a timestamp.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Value for a `datetime-local` input.
pub fn to_datetime_local(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format(DATETIME_LOCAL_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Value for a `date` input.
pub fn to_date_input(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.date().format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Text shown in one table cell.
pub fn cell_text<E: Entity>(record: &E, column: &ColumnSpec) -> String {
    let Some(raw) = record.field_text(column.field) else {
        return NOT_AVAILABLE.to_string();
    };
    match column.format {
        CellFormat::Plain => raw,
        CellFormat::Timestamp => format_timestamp(&raw),
        CellFormat::Fixed2 => raw.parse::<f64>().map(|v| format!("{:.2}", v)).unwrap_or(raw),
    }
}

/// Newest records first, by the strip's timestamp field. Records whose
/// timestamp does not parse sort last, keeping their relative order.
pub fn most_recent<'a, E: Entity>(records: &'a [E], spec: &RecentSpec) -> Vec<&'a E> {
    let mut ordered: Vec<&E> = records.iter().collect();
    ordered.sort_by_key(|r| {
        Reverse(
            r.field_text(spec.timestamp_field)
                .as_deref()
                .and_then(parse_timestamp),
        )
    });
    ordered.truncate(spec.count);
    ordered
}

/// A probability in `[0, 1]` as a percentage with two decimals.
pub fn percent(chance: f64) -> String {
    format!("{:.2}%", chance * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::descriptor::RecentSpec;
    use crate::model::{Entity, LogRecord, TrackingRecord};

    fn track(id: i64, timestamp: &str) -> TrackingRecord {
        TrackingRecord {
            track_id: Some(id),
            satellite_id: 1,
            station_id: 1,
            timestamp: timestamp.into(),
            latitude: Some(12.3456),
            longitude: None,
            altitude_km: Some(408.0),
        }
    }

    #[test]
    fn timestamps_are_normalised_for_display() {
        assert_eq!(format_timestamp("2025-03-01T12:30:45.123"), "2025-03-01 12:30:45");
        assert_eq!(format_timestamp("2025-03-01 08:00:00"), "2025-03-01 08:00:00");
        assert_eq!(format_timestamp("2025-03-01T12:30:45+02:00"), "2025-03-01 10:30:45");
        assert_eq!(format_timestamp("soon"), "soon");
    }

    #[test]
    fn inputs_get_their_native_formats() {
        assert_eq!(to_datetime_local("2025-03-01T12:30:45"), "2025-03-01T12:30");
        assert_eq!(to_date_input("2025-09-01T00:00:00"), "2025-09-01");
        assert_eq!(to_date_input("2025-09-01"), "2025-09-01");
        assert_eq!(to_date_input(""), "");
    }

    #[test]
    fn cells_fall_back_to_not_available() {
        let record = track(1, "2025-03-01T12:30:45");
        let columns = TrackingRecord::DESCRIPTOR.columns;
        let cells: Vec<String> = columns.iter().map(|c| cell_text(&record, c)).collect();
        assert_eq!(cells, ["1", "1", "1", "2025-03-01 12:30:45", "12.35", "N/A", "408.00"]);

        let log = LogRecord { log_id: Some(4), log_message: "Boot".into(), log_level: "Info".into(), log_time: None };
        assert_eq!(cell_text(&log, &LogRecord::DESCRIPTOR.columns[3]), "N/A");
    }

    #[test]
    fn most_recent_orders_newest_first_and_truncates() {
        let records = vec![
            track(1, "2025-01-01T00:00:00"),
            track(2, "garbage"),
            track(3, "2025-03-01T00:00:00"),
            track(4, "2025-02-01 00:00:00"),
        ];
        let spec = RecentSpec { heading: "Recent", timestamp_field: "timestamp", count: 3 };
        let ids: Vec<_> = most_recent(&records, &spec).iter().map(|r| r.id()).collect();
        assert_eq!(ids, [Some(3), Some(4), Some(1)]);
    }

    #[test]
    fn percent_has_two_decimals() {
        assert_eq!(percent(0.8765), "87.65%");
        assert_eq!(percent(1.0), "100.00%");
    }
}
