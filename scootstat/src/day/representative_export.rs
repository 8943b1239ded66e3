use super::{PathTrace, RepresentativeDay, YearMonth};
use chrono::NaiveDate;
use geojson::{Feature, FeatureCollection, JsonObject};
use serde_json::json;
use std::collections::HashMap;

/// builds the map layer of traces started on a representative day. each feature
/// carries the vehicle id, the operator, the month and the representative date.
pub fn representative_feature_collection(
    traces: &[PathTrace],
    days: &[RepresentativeDay],
) -> FeatureCollection {
    let selected: HashMap<NaiveDate, YearMonth> = days.iter().map(|d| (d.date, d.month)).collect();
    let features = traces
        .iter()
        .filter_map(|trace| {
            let date = trace.start_time.date();
            let month = selected.get(&date)?;
            let mut properties = JsonObject::new();
            properties.insert(String::from("vehicle_id"), json!(trace.vehicle_id));
            properties.insert(String::from("operator"), json!(trace.operator.tag()));
            properties.insert(String::from("month"), json!(month.to_string()));
            properties.insert(String::from("date"), json!(date.to_string()));
            Some(Feature {
                bbox: None,
                geometry: Some(geojson::Geometry::new(geojson::Value::from(&trace.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            })
        })
        .collect::<Vec<_>>();
    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operator;
    use geo::line_string;

    #[test]
    fn test_only_representative_days_are_exported() {
        let at = |d: u32| {
            NaiveDate::from_ymd_opt(2024, 1, d)
                .and_then(|d| d.and_hms_opt(9, 0, 0))
                .expect("valid time")
        };
        let trace = |v: &str, d: u32| PathTrace {
            vehicle_id: v.to_string(),
            operator: Operator::Bird,
            start_time: at(d),
            geometry: line_string![(x: 7.6, y: 45.0), (x: 7.61, y: 45.01)],
        };
        let day = RepresentativeDay {
            month: YearMonth { year: 2024, month: 1 },
            date: at(3).date(),
            trips: 2,
            monthly_mean: 2.0,
            fallback: false,
        };
        let fc = representative_feature_collection(&[trace("a", 3), trace("b", 4), trace("c", 3)], &[day]);
        assert_eq!(fc.features.len(), 2);
        let first = &fc.features[0];
        assert_eq!(first.property("vehicle_id"), Some(&json!("a")));
        assert_eq!(first.property("operator"), Some(&json!("BIRD")));
        assert_eq!(first.property("month"), Some(&json!("2024-01")));
        assert_eq!(first.property("date"), Some(&json!("2024-01-03")));
    }
}
