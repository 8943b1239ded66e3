use super::ColumnMappingTable;
use crate::model::{is_null_text, CanonicalColumn, Operator, PathRecord, RawTable};
use crate::ScootstatError;

/// pairs the raw GPS trace of every row with the vehicle id, the rental timestamps
/// and the operator. exports without a trace column produce no records.
pub fn extract_paths(
    table: &RawTable,
    operator: Operator,
    mappings: &ColumnMappingTable,
) -> Result<Vec<PathRecord>, ScootstatError> {
    let resolved = mappings.resolve(&operator, table)?;
    let Some(path_idx) = resolved.path else {
        log::debug!("{operator} export has no path column");
        return Ok(vec![]);
    };
    let text = |v: Option<&str>| {
        v.filter(|s| !is_null_text(s))
            .map(|s| s.trim().to_string())
    };
    let records = table
        .rows
        .iter()
        .map(|row| PathRecord {
            vehicle_id: text(resolved.value(row, CanonicalColumn::VehicleId)),
            start_time: text(resolved.value(row, CanonicalColumn::StartTime)),
            end_time: text(resolved.value(row, CanonicalColumn::EndTime)),
            path: text(row.get(path_idx).map(|s| s.as_str())),
            operator,
        })
        .collect();
    Ok(records)
}
