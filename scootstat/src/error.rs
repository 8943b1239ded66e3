use crate::model::{CanonicalColumn, Operator};

#[derive(thiserror::Error, Debug)]
pub enum ScootstatError {
    #[error("invalid configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading configuration file '{filepath}': {source}")]
    ConfigReadError {
        filepath: String,
        source: config::ConfigError,
    },
    #[error("{operator} export is missing required columns after normalization: {missing:?}")]
    MissingRequiredColumns {
        operator: Operator,
        missing: Vec<CanonicalColumn>,
    },
    #[error("the {0} reference layer is empty, cannot perform a spatial join")]
    EmptyReferenceLayer(String),
    #[error("failure reading '{filepath}': {source}")]
    CsvReadError { filepath: String, source: csv::Error },
    #[error("failure writing '{filepath}': {source}")]
    CsvWriteError { filepath: String, source: csv::Error },
    #[error("failure decoding GeoJSON in '{filepath}': {source}")]
    GeoJsonError {
        filepath: String,
        source: geojson::Error,
    },
    #[error("unable to deserialize WKT into geometry: {0}")]
    InvalidWkt(String),
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("I/O failure: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("invalid user input: {0}")]
    InvalidUserInput(String),
}
