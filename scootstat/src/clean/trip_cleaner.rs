use super::field_codec::{parse_bool, parse_f64};
use super::{CleaningReport, CleaningStage};
use crate::config::CleaningConfig;
use crate::model::{CanonicalColumn as C, NormalizedRow, Trip};
use chrono::NaiveDateTime;
use itertools::Itertools;

/// applies the cleaning stages to normalized rows of any mix of operators.
#[derive(Debug, Clone, Default)]
pub struct TripCleaner {
    config: CleaningConfig,
}

/// a row that passed the identity stage
struct TimedRow<'a> {
    row: &'a NormalizedRow,
    vehicle_id: String,
    start_time: NaiveDateTime,
    end_time: NaiveDateTime,
}

/// a row with derived duration, distance and speed
struct MeasuredRow<'a> {
    timed: TimedRow<'a>,
    duration_min: f64,
    duration_sec: f64,
    distance_km: f64,
    distance_m: f64,
    speed_m_s: f64,
}

impl TripCleaner {
    pub fn new(config: CleaningConfig) -> TripCleaner {
        TripCleaner { config }
    }

    /// runs every stage in order over `rows`. timestamps are parsed with the rule of
    /// each row's operator. rows failing a stage are dropped and counted, never
    /// reported as errors.
    ///
    /// # Returns
    ///
    /// the surviving trips in input order along with the per-stage row counts.
    pub fn clean(&self, rows: &[NormalizedRow]) -> (Vec<Trip>, CleaningReport) {
        let mut report = CleaningReport::default();

        // 1. vehicle id and both timestamps present and readable
        let before = rows.len();
        let timed = rows
            .iter()
            .filter_map(|row| self.timed_row(row))
            .collect_vec();
        report.record(CleaningStage::MissingIdentity, before, timed.len());

        // 2. strictly increasing timestamps
        let before = timed.len();
        let ordered = timed
            .into_iter()
            .filter(|t| t.end_time > t.start_time)
            .collect_vec();
        report.record(CleaningStage::NonIncreasingTimes, before, ordered.len());

        // 3. positive duration
        let before = ordered.len();
        let positive = ordered
            .into_iter()
            .map(measured_row)
            .filter(|m| m.duration_sec > 0.0)
            .collect_vec();
        report.record(CleaningStage::NonPositiveDuration, before, positive.len());

        // 4. plausible speed, bounds included
        let before = positive.len();
        let (min_speed, max_speed) = (self.config.min_speed_m_s, self.config.max_speed_m_s);
        let plausible = positive
            .into_iter()
            .filter(|m| min_speed <= m.speed_m_s && m.speed_m_s <= max_speed)
            .collect_vec();
        report.record(CleaningStage::SpeedOutOfRange, before, plausible.len());

        // 5. all four coordinates inside the study area
        let before = plausible.len();
        let located = plausible
            .into_iter()
            .filter_map(|m| self.located_trip(m))
            .collect_vec();
        report.record(CleaningStage::OutsideBoundingBox, before, located.len());

        // 6. exact duplicates, first occurrence kept
        let before = located.len();
        let trips = located
            .into_iter()
            .unique_by(|t| t.dedup_key())
            .collect_vec();
        report.record(CleaningStage::Duplicate, before, trips.len());

        (trips, report)
    }

    fn timed_row<'a>(&self, row: &'a NormalizedRow) -> Option<TimedRow<'a>> {
        let format = self.config.timestamp_format(&row.operator);
        let vehicle_id = row.get(C::VehicleId)?.trim().to_string();
        let start_time = format.parse(row.get(C::StartTime)?)?;
        let end_time = format.parse(row.get(C::EndTime)?)?;
        Some(TimedRow {
            row,
            vehicle_id,
            start_time,
            end_time,
        })
    }

    fn located_trip(&self, m: MeasuredRow<'_>) -> Option<Trip> {
        let row = m.timed.row;
        let start_lat = parse_f64(row.get(C::StartLat))?;
        let start_lon = parse_f64(row.get(C::StartLon))?;
        let end_lat = parse_f64(row.get(C::EndLat))?;
        let end_lon = parse_f64(row.get(C::EndLon))?;
        let bbox = &self.config.bounding_box;
        if !(bbox.contains(start_lat, start_lon) && bbox.contains(end_lat, end_lon)) {
            return None;
        }
        Some(Trip {
            operator: row.operator,
            vehicle_id: m.timed.vehicle_id,
            start_time: m.timed.start_time,
            end_time: m.timed.end_time,
            start_lat,
            start_lon,
            end_lat,
            end_lon,
            distance_km: m.distance_km,
            duration_min: m.duration_min,
            reserved: parse_bool(row.get(C::Reserved)),
            start_battery: parse_f64(row.get(C::StartBattery)),
            end_battery: parse_f64(row.get(C::EndBattery)),
            organization_id: row.get(C::OrganizationId).map(|s| s.trim().to_string()),
            duration_sec: m.duration_sec,
            distance_m: m.distance_m,
            speed_m_s: m.speed_m_s,
        })
    }
}

/// derives seconds, meters and speed. an unreadable duration or distance becomes
/// NaN, which fails the comparison of the stage that inspects it.
fn measured_row(timed: TimedRow<'_>) -> MeasuredRow<'_> {
    let duration_min = parse_f64(timed.row.get(C::DurationMin)).unwrap_or(f64::NAN);
    let distance_km = parse_f64(timed.row.get(C::DistanceKm)).unwrap_or(f64::NAN);
    let duration_sec = duration_min * 60.0;
    let distance_m = distance_km * 1000.0;
    MeasuredRow {
        timed,
        duration_min,
        duration_sec,
        distance_km,
        distance_m,
        speed_m_s: distance_m / duration_sec,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Operator;

    #[allow(clippy::too_many_arguments)]
    fn row(
        op: Operator,
        veh: Option<&str>,
        start: &str,
        end: &str,
        dist_km: &str,
        dur_min: &str,
        lat0: f64,
        lon0: f64,
        lat1: f64,
        lon1: f64,
    ) -> NormalizedRow {
        let mut r = NormalizedRow::empty(op);
        r.set(C::VehicleId, veh.map(String::from));
        r.set(C::StartTime, Some(start.to_string()));
        r.set(C::EndTime, Some(end.to_string()));
        r.set(C::DistanceKm, Some(dist_km.to_string()));
        r.set(C::DurationMin, Some(dur_min.to_string()));
        r.set(C::StartLat, Some(lat0.to_string()));
        r.set(C::StartLon, Some(lon0.to_string()));
        r.set(C::EndLat, Some(lat1.to_string()));
        r.set(C::EndLon, Some(lon1.to_string()));
        r
    }

    fn valid(veh: &str) -> NormalizedRow {
        row(
            Operator::Lime,
            Some(veh),
            "2024-01-01T09:00",
            "2024-01-01T09:10",
            "1.0",
            "10",
            45.0,
            7.6,
            45.0,
            7.6,
        )
    }

    #[test]
    fn test_single_valid_trip_is_retained() {
        let (trips, report) = TripCleaner::default().clean(&[valid("A")]);
        assert_eq!(trips.len(), 1);
        let trip = &trips[0];
        assert_eq!(trip.vehicle_id, "A");
        assert_eq!(trip.duration_sec, 600.0);
        assert_eq!(trip.distance_m, 1000.0);
        assert!((trip.speed_m_s - 1000.0 / 600.0).abs() < 1e-9);
        assert_eq!(report.input_rows(), 1);
        assert_eq!(report.output_rows(), 1);
    }

    #[test]
    fn test_each_stage_rejects_its_rows() {
        let rows = vec![
            valid("A"),
            // 1. missing vehicle id
            row(Operator::Lime, None, "2024-01-01T09:00", "2024-01-01T09:10", "1", "10", 45.0, 7.6, 45.0, 7.6),
            // 2. end equals start
            row(Operator::Lime, Some("B"), "2024-01-01T09:00", "2024-01-01T09:00", "1", "10", 45.0, 7.6, 45.0, 7.6),
            // 3. zero duration
            row(Operator::Lime, Some("C"), "2024-01-01T09:00", "2024-01-01T09:10", "1", "0", 45.0, 7.6, 45.0, 7.6),
            // 4. 10 km in 10 minutes
            row(Operator::Lime, Some("D"), "2024-01-01T09:00", "2024-01-01T09:10", "10", "10", 45.0, 7.6, 45.0, 7.6),
            // 5. destination in Milan
            row(Operator::Lime, Some("E"), "2024-01-01T09:00", "2024-01-01T09:10", "1", "10", 45.0, 7.6, 45.46, 9.19),
            // 6. duplicate of the first row
            valid("A"),
        ];
        let (trips, report) = TripCleaner::default().clean(&rows);
        assert_eq!(trips.len(), 1);
        let stages = report.stages.iter().map(|s| s.stage).collect_vec();
        assert_eq!(stages, CleaningStage::ALL.to_vec());
        for stage in CleaningStage::ALL {
            assert_eq!(report.rejected(stage), Some(1), "stage {stage}");
        }
        for pair in report.stages.windows(2) {
            assert_eq!(pair[0].rows_after, pair[1].rows_before);
        }
    }

    #[test]
    fn test_survivors_satisfy_invariants() {
        let mut rows = vec![];
        for i in 0..40 {
            let minutes = (i % 7) as f64 * 3.0;
            let km = (i % 5) as f64 * 0.8;
            let lat = 44.85 + (i % 6) as f64 * 0.05;
            rows.push(row(
                Operator::Bird,
                Some(&format!("V{i}")),
                "2024-03-05 10:00:00",
                if i % 9 == 0 { "2024-03-05 09:00:00" } else { "2024-03-05 10:30:00" },
                &km.to_string(),
                &minutes.to_string(),
                lat,
                7.65,
                45.05,
                7.7,
            ));
        }
        let (trips, _) = TripCleaner::default().clean(&rows);
        assert!(!trips.is_empty());
        for t in trips.iter() {
            assert!(t.end_time > t.start_time);
            assert!(0.56 - 1e-9 <= t.speed_m_s && t.speed_m_s <= 6.94 + 1e-9);
            for (lat, lon) in [(t.start_lat, t.start_lon), (t.end_lat, t.end_lon)] {
                assert!((44.9..=45.1).contains(&lat) && (7.5..=7.8).contains(&lon));
            }
        }
    }

    #[test]
    fn test_operator_specific_timestamps() {
        let void = row(Operator::Void, Some("V1"), "20240101090000", "20240101091000", "1,0", "10", 45.0, 7.6, 45.0, 7.6);
        // fixed-width text is not a readable calendar timestamp for other operators
        let bird = row(Operator::Bird, Some("B1"), "20240101090000", "20240101091000", "1.0", "10", 45.0, 7.6, 45.0, 7.6);
        let (trips, report) = TripCleaner::default().clean(&[void, bird]);
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].operator, Operator::Void);
        assert_eq!(report.rejected(CleaningStage::MissingIdentity), Some(1));
    }

    #[test]
    fn test_missing_distance_fails_speed_filter() {
        let mut r = valid("A");
        r.set(C::DistanceKm, None);
        let (trips, report) = TripCleaner::default().clean(&[r]);
        assert!(trips.is_empty());
        assert_eq!(report.rejected(CleaningStage::NonPositiveDuration), Some(0));
        assert_eq!(report.rejected(CleaningStage::SpeedOutOfRange), Some(1));
    }

    #[test]
    fn test_speed_bounds_are_inclusive() {
        let at_speed = |veh: &str, km: &str| {
            row(Operator::Lime, Some(veh), "2024-01-01T09:00", "2024-01-01T09:10", km, "10", 45.0, 7.6, 45.0, 7.6)
        };
        // 0.56 and 6.94 m/s exactly, then just under the lower bound
        let rows = vec![at_speed("LOW", "0.336"), at_speed("HIGH", "4.164"), at_speed("SLOW", "0.3")];
        let (trips, report) = TripCleaner::default().clean(&rows);
        let kept = trips.iter().map(|t| t.vehicle_id.as_str()).collect_vec();
        assert_eq!(kept, vec!["LOW", "HIGH"]);
        assert_eq!(report.rejected(CleaningStage::SpeedOutOfRange), Some(1));
    }

    #[test]
    fn test_organization_id_does_not_split_duplicates() {
        let mut first = valid("A");
        first.set(C::OrganizationId, Some("ORG-1".to_string()));
        let mut second = valid("A");
        second.set(C::OrganizationId, Some("ORG-2".to_string()));
        let (trips, report) = TripCleaner::default().clean(&[first, second]);
        assert_eq!(trips.len(), 1);
        assert_eq!(report.rejected(CleaningStage::Duplicate), Some(1));
    }

    #[test]
    fn test_null_marker_vehicle_id_is_missing() {
        let (trips, report) = TripCleaner::default().clean(&[valid("NaN"), valid("A")]);
        assert_eq!(trips.len(), 1);
        assert_eq!(report.rejected(CleaningStage::MissingIdentity), Some(1));
    }
}
