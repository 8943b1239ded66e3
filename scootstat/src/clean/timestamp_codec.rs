use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// fixed-width numeric encoding, e.g. `20240101091500`
pub const FIXED_WIDTH_FORMAT: &str = "%Y%m%d%H%M%S";

/// layouts accepted by the flexible parser, tried in order. slash dates read
/// month first and fall back to day first when the month would be out of range.
const FLEXIBLE_FORMATS: [&str; 10] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// offset-carrying layouts; `%#z` takes `+01`, `+0100` and `+01:00`
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%#z", "%Y-%m-%dT%H:%M:%S%.f%#z"];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"];

/// how an operator writes its rental timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    FixedWidth,
    Flexible,
}

impl TimestampFormat {
    /// parses a timestamp, returning None for anything that cannot be read. timezone
    /// offsets are dropped, keeping the local wall-clock time.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match self {
            TimestampFormat::FixedWidth => {
                // spreadsheet exports sometimes turn the number into a float
                let digits = value.strip_suffix(".0").unwrap_or(value);
                NaiveDateTime::parse_from_str(digits, FIXED_WIDTH_FORMAT).ok()
            }
            TimestampFormat::Flexible => parse_flexible(value),
        }
    }
}

fn parse_flexible(value: &str) -> Option<NaiveDateTime> {
    if let Some(utc) = value.strip_suffix(" UTC").or_else(|| value.strip_suffix('Z')) {
        return parse_flexible(utc.trim_end());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }
    OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.naive_local())
        .or_else(|| {
            FLEXIBLE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        })
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}
