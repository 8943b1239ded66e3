use super::OperatorInput;
use crate::aggregate::{
    parking_by_zone, parking_intervals, profitability as operator_profitability, zone_activity,
    zone_operator_origins, MobilityTrends, OdMatrices, OdMatrix, TransitIndex, TransitMapPoint,
};
use crate::clean::TripCleaner;
use crate::config::PipelineConfig;
use crate::day::{
    count_daily, decode_traces, representative_feature_collection, RepresentativeDaySelector,
};
use crate::io::{read_ops, write_ops};
use crate::model::{NormalizedRow, PathRecord, Trip, ZonedTrip};
use crate::normalize::{extract_paths, normalize_tables, ColumnMappingTable};
use crate::sample::seeded_sample;
use crate::zone::{read_zones, ZoneMatcher};
use crate::ScootstatError;
use itertools::Itertools;
use std::path::Path;

pub fn clean(
    inputs: &[OperatorInput],
    output_directory: &Path,
    config: &PipelineConfig,
) -> Result<(), ScootstatError> {
    let mapping = ColumnMappingTable::default();
    let mut tables = vec![];
    let mut paths: Vec<PathRecord> = vec![];
    for input in inputs.iter() {
        log::info!("reading {input}");
        let table = read_ops::read_raw_table(Path::new(&input.path), &input.operator)?;
        paths.extend(extract_paths(&table, input.operator, &mapping)?);
        tables.push((input.operator, table));
    }
    let rows = normalize_tables(&tables, &mapping)?;

    let cleaner = TripCleaner::new(config.cleaning.clone());
    let (trips, report) = cleaner.clean(&rows);
    log::info!("cleaning report:\n{report}");

    write_ops::create_dirs(output_directory)?;
    let normalized = rows.iter().map(|r| r.to_record()).collect_vec();
    write_ops::write_records(
        &output_directory.join("normalized_trips.csv"),
        &NormalizedRow::record_header(),
        &normalized,
    )?;
    write_ops::write_csv(&output_directory.join("trips.csv"), &trips)?;
    write_ops::write_csv(&output_directory.join("paths.csv"), &paths)?;
    write_ops::write_csv(&output_directory.join("cleaning_report.csv"), &report.stages)?;
    Ok(())
}

pub fn zones(
    trips_file: &Path,
    zones_file: &Path,
    output_directory: &Path,
    config: &PipelineConfig,
) -> Result<(), ScootstatError> {
    let zoned = read_zoned_trips(trips_file, zones_file, config)?.1;

    write_ops::create_dirs(output_directory)?;
    let rows = zoned.iter().map(|t| t.as_row()).collect_vec();
    write_ops::write_csv(&output_directory.join("zoned_trips.csv"), &rows)?;

    let matrices = OdMatrices::build(&zoned, &config.aggregation);
    log::info!(
        "od matrices: {} trips, {} at peak hours, {} off peak",
        matrices.total.total(),
        matrices.peak.total(),
        matrices.off_peak.total()
    );
    write_crosstab(&output_directory.join("od_total.csv"), &matrices.total)?;
    write_crosstab(&output_directory.join("od_peak.csv"), &matrices.peak)?;
    write_crosstab(&output_directory.join("od_off_peak.csv"), &matrices.off_peak)?;
    let top_pairs = matrices.total.top_pairs(config.aggregation.top_n);
    write_ops::write_csv(&output_directory.join("od_top_pairs.csv"), &top_pairs)?;

    let activity = zone_activity(&zoned);
    let top_origins = activity
        .iter()
        .take(config.aggregation.top_n)
        .cloned()
        .collect_vec();
    write_ops::write_csv(&output_directory.join("zone_activity.csv"), &activity)?;
    write_ops::write_csv(&output_directory.join("zone_top_origins.csv"), &top_origins)?;
    write_ops::write_csv(
        &output_directory.join("zone_operator_origins.csv"),
        &zone_operator_origins(&zoned),
    )?;
    Ok(())
}

pub fn transit(
    trips_file: &Path,
    zones_file: &Path,
    stops_file: &Path,
    output_directory: &Path,
    config: &PipelineConfig,
) -> Result<(), ScootstatError> {
    let (matcher, zoned) = read_zoned_trips(trips_file, zones_file, config)?;
    let stops = read_ops::read_transit_stops(stops_file)?;
    let index = TransitIndex::new(&stops, &matcher, config.aggregation.transit_radius_m)?;
    let (classes, summary) = index.classify_all(&zoned);
    log::info!("transit proximity:\n{summary}");

    write_ops::create_dirs(output_directory)?;
    let summary_rows = summary
        .rows()
        .into_iter()
        .map(|(metric, trips, percent)| vec![metric, trips.to_string(), format!("{percent:.2}")])
        .collect_vec();
    write_ops::write_records(
        &output_directory.join("transit_summary.csv"),
        &["metric", "trips", "percent"],
        &summary_rows,
    )?;

    let points = zoned
        .iter()
        .zip(classes)
        .map(|(trip, class)| TransitMapPoint::new(trip, class))
        .collect_vec();
    let sample = seeded_sample(
        &points,
        config.rendering.max_map_points,
        config.rendering.sample_seed,
    );
    write_ops::write_csv(&output_directory.join("transit_map_points.csv"), &sample)?;
    Ok(())
}

pub fn parking(
    trips_file: &Path,
    zones_file: &Path,
    output_directory: &Path,
    config: &PipelineConfig,
) -> Result<(), ScootstatError> {
    let trips = read_ops::read_trips(trips_file)?;
    let intervals = parking_intervals(&trips, config.aggregation.parking_cap_minutes);
    if intervals.is_empty() {
        log::warn!("no parking intervals found in {} trips", trips.len());
    } else {
        let total = intervals.iter().map(|i| i.minutes).sum::<f64>();
        log::info!(
            "{} parking intervals, mean duration {:.1} minutes",
            intervals.len(),
            total / intervals.len() as f64
        );
    }

    let matcher = ZoneMatcher::new(read_zones(zones_file, &config.zones)?)?;
    let by_zone = parking_by_zone(&intervals, &matcher, &config.aggregation);

    write_ops::create_dirs(output_directory)?;
    write_ops::write_csv(&output_directory.join("parking_by_zone.csv"), &by_zone)?;
    Ok(())
}

pub fn representative_days(
    paths_file: &Path,
    output_file: &Path,
    config: &PipelineConfig,
) -> Result<(), ScootstatError> {
    let records = read_ops::read_paths(paths_file)?;
    let (traces, report) = decode_traces(&records, &config.cleaning);
    log::info!("{report}");

    // days are counted over decoded traces, the same set the export draws from
    let counts = count_daily(traces.iter().map(|t| t.start_time.date()));
    let selector = RepresentativeDaySelector::from(&config.representative_day);
    let days = selector.select(&counts);
    for day in days.iter() {
        log::info!(
            "{}: representative day {} ({} weekday) with {} trips, monthly mean {:.1}",
            day.month,
            day.date,
            if day.fallback { "fallback" } else { "preferred" },
            day.trips,
            day.monthly_mean
        );
    }

    let collection = representative_feature_collection(&traces, &days);
    write_ops::write_geojson(output_file, &collection)?;
    let summary_file = output_file.with_extension("csv");
    write_ops::write_csv(&summary_file, &days)?;
    Ok(())
}

pub fn trends(trips_file: &Path, output_directory: &Path) -> Result<(), ScootstatError> {
    let trips = read_ops::read_trips(trips_file)?;
    let trends = MobilityTrends::from_trips(&trips);

    write_ops::create_dirs(output_directory)?;
    let by_year = trends
        .by_year
        .iter()
        .map(|(year, n)| vec![year.to_string(), n.to_string()])
        .collect_vec();
    write_ops::write_records(
        &output_directory.join("trips_by_year.csv"),
        &["year", "trips"],
        &by_year,
    )?;
    let by_month = trends
        .by_month
        .iter()
        .map(|(month, n)| vec![month.to_string(), n.to_string()])
        .collect_vec();
    write_ops::write_records(
        &output_directory.join("trips_by_month.csv"),
        &["month", "trips"],
        &by_month,
    )?;
    let by_week = trends
        .by_week
        .iter()
        .map(|(week, n)| vec![week.to_string(), n.to_string()])
        .collect_vec();
    write_ops::write_records(
        &output_directory.join("trips_by_week.csv"),
        &["week", "trips"],
        &by_week,
    )?;

    let (header, pivot) = trends.usage_pivot();
    write_ops::write_records(
        &output_directory.join("usage_weekday_hour.csv"),
        &header,
        &pivot,
    )?;

    let vehicles = trends
        .vehicles_per_operator
        .iter()
        .map(|(op, n)| vec![op.to_string(), n.to_string()])
        .collect_vec();
    write_ops::write_records(
        &output_directory.join("vehicles_per_operator.csv"),
        &["operator", "vehicles"],
        &vehicles,
    )?;
    Ok(())
}

pub fn profitability(
    trips_file: &Path,
    output_file: &Path,
    config: &PipelineConfig,
) -> Result<(), ScootstatError> {
    let trips = read_ops::read_trips(trips_file)?;
    let rows = operator_profitability(&trips, &config.revenue);
    for row in rows.iter() {
        log::info!(
            "{}: revenue {:.0}, total cost {:.0}, profit {:.0}",
            row.operator,
            row.revenue,
            row.total_cost,
            row.profit
        );
    }
    write_ops::write_csv(output_file, &rows)
}

/// reads cleaned trips and the zone layer, then keeps the trips with both ends in a zone.
fn read_zoned_trips(
    trips_file: &Path,
    zones_file: &Path,
    config: &PipelineConfig,
) -> Result<(ZoneMatcher, Vec<ZonedTrip>), ScootstatError> {
    let trips: Vec<Trip> = read_ops::read_trips(trips_file)?;
    let matcher = ZoneMatcher::new(read_zones(zones_file, &config.zones)?)?;
    let (zoned, report) = matcher.match_trips(&trips);
    log::info!("zone join report:\n{report}");
    Ok((matcher, zoned))
}

fn write_crosstab(path: &Path, matrix: &OdMatrix) -> Result<(), ScootstatError> {
    let (header, rows) = matrix.crosstab();
    write_ops::write_records(path, &header, &rows)
}
