//! point-in-polygon assignment of trip endpoints to the statistical zones of the city.
mod zone_match_report;
mod zone_matcher;
mod zone_reader;

pub use zone_match_report::ZoneMatchReport;
pub use zone_matcher::{ZoneLookup, ZoneMatcher};
pub use zone_reader::{parse_zone_table, read_zones};
