use crate::config::ZoneLayerConfig;
use crate::model::Zone;
use crate::ScootstatError;
use geo::{Geometry, MapCoords, MultiPolygon};
use std::path::Path;
use wkt::TryFromWkt;

/// reads the zone boundary CSV and reprojects every polygon to WGS84.
/// the municipal files are latin-1 encoded; UTF-8 input is accepted as well.
pub fn read_zones(path: &Path, config: &ZoneLayerConfig) -> Result<Vec<Zone>, ScootstatError> {
    let bytes = std::fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|b| *b as char).collect(),
    };
    let zones = parse_zone_table(&text, config)?;
    log::info!("read {} zones from {}", zones.len(), path.display());
    Ok(zones)
}

/// parses zone rows from CSV text. each configured delimiter is tried in turn until
/// the header contains both the name and geometry columns. rows whose geometry is
/// not a WKT (multi)polygon are skipped.
pub fn parse_zone_table(text: &str, config: &ZoneLayerConfig) -> Result<Vec<Zone>, ScootstatError> {
    for delimiter in config.delimiters.iter() {
        if !delimiter.is_ascii() {
            return Err(ScootstatError::ConfigurationError(format!(
                "zone delimiter '{delimiter}' is not a single-byte character"
            )));
        }
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(*delimiter as u8)
            .flexible(true)
            .from_reader(text.as_bytes());
        let headers = reader
            .headers()
            .map_err(|e| ScootstatError::CsvReadError {
                filepath: String::from("zone table"),
                source: e,
            })?
            .clone();
        let position = |name: &str| headers.iter().position(|h| h.trim() == name);
        let (Some(name_idx), Some(geom_idx)) = (
            position(&config.name_column),
            position(&config.geometry_column),
        ) else {
            log::debug!("zone table is not separated by '{delimiter}'");
            continue;
        };

        let mut zones = vec![];
        let mut skipped = 0;
        for record in reader.records() {
            let record = record.map_err(|e| ScootstatError::CsvReadError {
                filepath: String::from("zone table"),
                source: e,
            })?;
            let name = record.get(name_idx).unwrap_or_default().trim().to_string();
            let wkt = record.get(geom_idx).unwrap_or_default();
            match parse_multipolygon(wkt) {
                Ok(geometry) => {
                    let wgs84 = geometry.map_coords(|c| config.crs.to_wgs84(c));
                    zones.push(Zone::new(name, wgs84));
                }
                Err(e) => {
                    log::warn!("skipping zone '{name}': {e}");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            log::warn!("{skipped} zone rows had unreadable geometries");
        }
        return Ok(zones);
    }
    Err(ScootstatError::ConfigurationError(format!(
        "zone table has no '{}' and '{}' columns with any of the delimiters {:?}",
        config.name_column, config.geometry_column, config.delimiters
    )))
}

fn parse_multipolygon(wkt: &str) -> Result<MultiPolygon<f64>, ScootstatError> {
    let geometry: Geometry<f64> = Geometry::try_from_wkt_str(wkt.trim())
        .map_err(|e| ScootstatError::InvalidWkt(format!("{e}")))?;
    match geometry {
        Geometry::Polygon(p) => Ok(MultiPolygon(vec![p])),
        Geometry::MultiPolygon(mp) => Ok(mp),
        _ => Err(ScootstatError::InvalidWkt(format!(
            "expected POLYGON or MULTIPOLYGON, found '{}'",
            wkt.chars().take(24).collect::<String>()
        ))),
    }
}
