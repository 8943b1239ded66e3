use super::Operator;
use serde::{Deserialize, Serialize};

/// the raw GPS trace of one rental, kept apart from the canonical trip table.
/// timestamps stay as exported text until the trace is analyzed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub vehicle_id: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub path: Option<String>,
    pub operator: Operator,
}
