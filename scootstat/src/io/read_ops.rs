use crate::model::{Operator, PathRecord, RawTable, TransitStop, Trip};
use crate::ScootstatError;
use geo::Point;
use kdam::tqdm;
use serde::de::DeserializeOwned;
use std::path::Path;

/// reads an operator export with its header row. every cell is kept as text.
pub fn read_raw_table(path: &Path, operator: &Operator) -> Result<RawTable, ScootstatError> {
    let filepath = path.to_string_lossy().to_string();
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| ScootstatError::CsvReadError {
            filepath: filepath.clone(),
            source: e,
        })?;
    let headers = reader
        .headers()
        .map_err(|e| ScootstatError::CsvReadError {
            filepath: filepath.clone(),
            source: e,
        })?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').to_string())
        .collect::<Vec<_>>();
    let desc = format!("read {operator} export");
    let rows = tqdm!(reader.records(), desc = desc)
        .map(|r| {
            r.map(|record| record.iter().map(String::from).collect::<Vec<_>>())
                .map_err(|e| ScootstatError::CsvReadError {
                    filepath: filepath.clone(),
                    source: e,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    eprintln!();
    log::info!("read {} rows from {}", rows.len(), filepath);
    Ok(RawTable::new(headers, rows))
}

/// reads a CSV written by this tool back into typed rows.
pub fn read_csv_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, ScootstatError> {
    let filepath = path.to_string_lossy().to_string();
    let reader = csv::ReaderBuilder::new()
        .from_path(path)
        .map_err(|e| ScootstatError::CsvReadError {
            filepath: filepath.clone(),
            source: e,
        })?;
    reader
        .into_deserialize::<T>()
        .map(|r| {
            r.map_err(|e| ScootstatError::CsvReadError {
                filepath: filepath.clone(),
                source: e,
            })
        })
        .collect()
}

pub fn read_trips(path: &Path) -> Result<Vec<Trip>, ScootstatError> {
    let trips = read_csv_rows::<Trip>(path)?;
    log::info!("read {} trips from {}", trips.len(), path.display());
    Ok(trips)
}

pub fn read_paths(path: &Path) -> Result<Vec<PathRecord>, ScootstatError> {
    let paths = read_csv_rows::<PathRecord>(path)?;
    log::info!("read {} path records from {}", paths.len(), path.display());
    Ok(paths)
}

/// reads transit stops from a GeoJSON FeatureCollection of points. features with
/// another geometry type are skipped. the `stop_id` property is kept when present.
pub fn read_transit_stops(path: &Path) -> Result<Vec<TransitStop>, ScootstatError> {
    let filepath = path.to_string_lossy().to_string();
    let text = std::fs::read_to_string(path)?;
    let geojson = text
        .parse::<geojson::GeoJson>()
        .map_err(|e| ScootstatError::GeoJsonError {
            filepath: filepath.clone(),
            source: e,
        })?;
    let geojson::GeoJson::FeatureCollection(collection) = geojson else {
        return Err(ScootstatError::InvalidUserInput(format!(
            "transit stops in '{filepath}' must be a FeatureCollection"
        )));
    };
    let mut skipped = 0;
    let stops = collection
        .features
        .iter()
        .filter_map(|feature| {
            let value = feature.geometry.as_ref().map(|g| &g.value);
            match value {
                Some(geojson::Value::Point(position)) if position.len() >= 2 => {
                    let stop_id = feature.property("stop_id").map(|v| match v.as_str() {
                        Some(s) => s.to_string(),
                        None => v.to_string(),
                    });
                    Some(TransitStop {
                        stop_id,
                        location: Point::new(position[0], position[1]),
                    })
                }
                _ => {
                    skipped += 1;
                    None
                }
            }
        })
        .collect::<Vec<_>>();
    if skipped > 0 {
        log::warn!("skipped {skipped} non-point features in {filepath}");
    }
    log::info!("read {} transit stops from {}", stops.len(), filepath);
    Ok(stops)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_transit_stops() {
        let dir = std::env::temp_dir().join("scootstat-read-ops-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("stops.geojson");
        let text = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"stop_id": "S1"}, "geometry": {"type": "Point", "coordinates": [7.62, 45.02]}},
            {"type": "Feature", "properties": {"stop_id": 2}, "geometry": {"type": "Point", "coordinates": [7.63, 45.03]}},
            {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[7.6, 45.0], [7.61, 45.01]]}}
        ]}"#;
        std::fs::write(&path, text).expect("write");
        let stops = read_transit_stops(&path).expect("reads");
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].stop_id.as_deref(), Some("S1"));
        assert_eq!(stops[1].stop_id.as_deref(), Some("2"));
        assert_eq!(stops[0].location, Point::new(7.62, 45.02));
    }

    #[test]
    fn test_read_raw_table() {
        let dir = std::env::temp_dir().join("scootstat-read-ops-test");
        std::fs::create_dir_all(&dir).expect("temp dir");
        let path = dir.join("void.csv");
        std::fs::write(&path, "\u{feff}Targa veicolo,KM Tot\nXY1,\"1,5\"\nXY2,2\n").expect("write");
        let table = read_raw_table(&path, &Operator::Void).expect("reads");
        assert_eq!(table.column_index("Targa veicolo"), Some(0));
        assert_eq!(table.len(), 2);
        assert_eq!(table.rows[0][1], "1,5");
    }
}
