use crate::ScootstatError;
use serde::Serialize;
use std::path::Path;

/// helper function to "mkdir -p path" - make all directories along a path
pub fn create_dirs<P>(path: P) -> Result<(), ScootstatError>
where
    P: AsRef<Path>,
{
    let dirspath = path.as_ref();
    if !dirspath.is_dir() {
        std::fs::create_dir_all(dirspath).map_err(|e| {
            let msg = format!(
                "error building output directory '{}': {e}",
                dirspath.to_str().unwrap_or_default()
            );
            ScootstatError::InvalidUserInput(msg)
        })
    } else {
        Ok(())
    }
}

/// creates the parent directory of a file path, if any
fn create_parent_dirs(path: &Path) -> Result<(), ScootstatError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_dirs(parent),
        _ => Ok(()),
    }
}

/// writes serializable rows with a header derived from the row type.
pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<(), ScootstatError> {
    create_parent_dirs(path)?;
    let filepath = path.to_string_lossy().to_string();
    let to_error = |e: csv::Error| ScootstatError::CsvWriteError {
        filepath: filepath.clone(),
        source: e,
    };
    let mut writer = csv::Writer::from_path(path).map_err(to_error)?;
    for row in rows.iter() {
        writer.serialize(row).map_err(to_error)?;
    }
    writer.flush()?;
    log::info!("wrote {} rows to {}", rows.len(), filepath);
    Ok(())
}

/// writes pre-formatted string records below an explicit header.
pub fn write_records<H, R>(path: &Path, header: &[H], records: &[R]) -> Result<(), ScootstatError>
where
    H: AsRef<[u8]>,
    R: AsRef<[String]>,
{
    create_parent_dirs(path)?;
    let filepath = path.to_string_lossy().to_string();
    let to_error = |e: csv::Error| ScootstatError::CsvWriteError {
        filepath: filepath.clone(),
        source: e,
    };
    let mut writer = csv::Writer::from_path(path).map_err(to_error)?;
    writer.write_record(header).map_err(to_error)?;
    for record in records.iter() {
        writer.write_record(record.as_ref()).map_err(to_error)?;
    }
    writer.flush()?;
    log::info!("wrote {} rows to {}", records.len(), filepath);
    Ok(())
}

pub fn write_geojson(
    path: &Path,
    collection: &geojson::FeatureCollection,
) -> Result<(), ScootstatError> {
    create_parent_dirs(path)?;
    let file = std::fs::File::create(path)?;
    serde_json::to_writer(std::io::BufWriter::new(file), collection)?;
    log::info!(
        "wrote {} features to {}",
        collection.features.len(),
        path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        zone: String,
        trips: usize,
        mean: Option<f64>,
    }

    #[test]
    fn test_write_csv_creates_directories() {
        let dir = std::env::temp_dir().join("scootstat-write-ops-test").join("nested");
        let path = dir.join("rows.csv");
        let rows = vec![
            Row { zone: String::from("A"), trips: 3, mean: Some(1.5) },
            Row { zone: String::from("B"), trips: 0, mean: None },
        ];
        write_csv(&path, &rows).expect("writes");
        let text = std::fs::read_to_string(&path).expect("reads back");
        assert_eq!(text, "zone,trips,mean\nA,3,1.5\nB,0,\n");
    }

    #[test]
    fn test_write_records() {
        let path = std::env::temp_dir()
            .join("scootstat-write-ops-test")
            .join("records.csv");
        let records = vec![vec![String::from("A"), String::from("1")]];
        write_records(&path, &["origin_zone", "A"], &records).expect("writes");
        let text = std::fs::read_to_string(&path).expect("reads back");
        assert_eq!(text, "origin_zone,A\nA,1\n");
    }
}
