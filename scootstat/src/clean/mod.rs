//! drops implausible rentals in a fixed sequence of filters and reports how many
//! rows each filter removed.
mod cleaning_report;
mod cleaning_stage;
mod field_codec;
mod timestamp_codec;
mod trip_cleaner;

pub use cleaning_report::{CleaningReport, StageCount};
pub use cleaning_stage::CleaningStage;
pub use timestamp_codec::TimestampFormat;
pub use trip_cleaner::TripCleaner;
