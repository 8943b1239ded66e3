use super::decode_path;
use crate::config::CleaningConfig;
use crate::model::{Operator, PathRecord};
use chrono::NaiveDateTime;
use geo::LineString;
use kdam::tqdm;
use serde::Serialize;
use std::fmt::Display;

/// a decoded GPS trace of one rental
#[derive(Debug, Clone, PartialEq)]
pub struct PathTrace {
    pub vehicle_id: String,
    pub operator: Operator,
    pub start_time: NaiveDateTime,
    pub geometry: LineString<f64>,
}

/// how many path records were lost and why
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathDecodeReport {
    pub records: usize,
    pub missing_identity: usize,
    pub undecodable: usize,
    pub outside_area: usize,
    pub retained: usize,
}

impl Display for PathDecodeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "decoded {} of {} paths ({} without vehicle or start time, {} without usable geometry, {} outside the study area)",
            self.retained, self.records, self.missing_identity, self.undecodable, self.outside_area
        )
    }
}

/// decodes path records into traces. a record is kept only with a vehicle id, a
/// readable start time, a geometry of at least two positions and at least one
/// vertex inside the study area.
pub fn decode_traces(
    records: &[PathRecord],
    config: &CleaningConfig,
) -> (Vec<PathTrace>, PathDecodeReport) {
    let mut report = PathDecodeReport {
        records: records.len(),
        ..Default::default()
    };
    let mut traces = vec![];
    let iter = tqdm!(records.iter(), total = records.len(), desc = "decode paths");
    for record in iter {
        let format = config.timestamp_format(&record.operator);
        let identity = record.vehicle_id.as_ref().zip(
            record
                .start_time
                .as_deref()
                .and_then(|s| format.parse(s)),
        );
        let Some((vehicle_id, start_time)) = identity else {
            report.missing_identity += 1;
            continue;
        };
        let Some(geometry) = record.path.as_deref().and_then(decode_path) else {
            report.undecodable += 1;
            continue;
        };
        if !geometry
            .coords()
            .any(|c| config.bounding_box.contains_coord(c))
        {
            report.outside_area += 1;
            continue;
        }
        traces.push(PathTrace {
            vehicle_id: vehicle_id.clone(),
            operator: record.operator,
            start_time,
            geometry,
        });
    }
    eprintln!();
    report.retained = traces.len();
    (traces, report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(vehicle: Option<&str>, start: &str, path: &str) -> PathRecord {
        PathRecord {
            vehicle_id: vehicle.map(String::from),
            start_time: Some(start.to_string()),
            end_time: None,
            path: Some(path.to_string()),
            operator: Operator::Lime,
        }
    }

    #[test]
    fn test_decode_traces() {
        let records = vec![
            record(Some("A"), "2024-01-03 09:00:00", "[[7.6, 45.0], [7.61, 45.01]]"),
            record(None, "2024-01-03 09:00:00", "[[7.6, 45.0], [7.61, 45.01]]"),
            record(Some("B"), "2024-01-03 09:00:00", "[[7.6, 45.0]]"),
            record(Some("C"), "2024-01-03 09:00:00", "[[9.19, 45.46], [9.2, 45.47]]"),
            record(Some("D"), "yesterday", "[[7.6, 45.0], [7.61, 45.01]]"),
        ];
        let (traces, report) = decode_traces(&records, &CleaningConfig::default());
        assert_eq!(traces.len(), 1);
        assert_eq!(traces[0].vehicle_id, "A");
        assert_eq!(report.missing_identity, 2);
        assert_eq!(report.undecodable, 1);
        assert_eq!(report.outside_area, 1);
        assert_eq!(report.retained, 1);
    }
}
