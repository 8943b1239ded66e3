//! selection of one statistically typical weekday per month and the GPS traces
//! recorded on it.
mod daily_count;
mod fallback_scope;
mod path_geometry;
mod path_trace;
mod representative_day;
mod representative_day_selector;
mod representative_export;
mod year_month;

pub use daily_count::{count_daily, DailyCount};
pub use fallback_scope::FallbackScope;
pub use path_geometry::decode_path;
pub use path_trace::{decode_traces, PathDecodeReport, PathTrace};
pub use representative_day::RepresentativeDay;
pub use representative_day_selector::RepresentativeDaySelector;
pub use representative_export::representative_feature_collection;
pub use year_month::YearMonth;
