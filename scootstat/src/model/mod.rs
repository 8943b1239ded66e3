mod canonical_column;
mod normalized_row;
mod operator;
mod path_record;
mod raw_table;
mod transit_stop;
mod trip;
mod zone;
mod zoned_trip;

pub use canonical_column::CanonicalColumn;
pub use normalized_row::{is_null_text, NormalizedRow};
pub use operator::Operator;
pub use path_record::PathRecord;
pub use raw_table::RawTable;
pub use transit_stop::TransitStop;
pub use trip::{Trip, VehicleKey};
pub use zone::Zone;
pub use zoned_trip::{ZonedTrip, ZonedTripRow};
