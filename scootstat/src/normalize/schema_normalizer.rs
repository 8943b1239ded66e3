use super::ColumnMappingTable;
use crate::model::{CanonicalColumn, NormalizedRow, Operator, RawTable};
use crate::ScootstatError;

/// renames one operator export into canonical rows. canonical columns the operator
/// does not publish are left null. the raw path column never enters the result,
/// see [`super::extract_paths`].
///
/// # Arguments
///
/// * `table` - the export as read from disk
/// * `operator` - provider that produced the export, selects the mapping
/// * `mappings` - per-operator column renaming rules
///
/// # Returns
///
/// one [`NormalizedRow`] per raw row, in input order, or an error when the export
/// lacks a column every analysis depends on.
pub fn normalize_table(
    table: &RawTable,
    operator: Operator,
    mappings: &ColumnMappingTable,
) -> Result<Vec<NormalizedRow>, ScootstatError> {
    let resolved = mappings.resolve(&operator, table)?;
    let unmapped = resolved.unmapped();
    if !unmapped.is_empty() {
        log::debug!("{operator} export does not publish {unmapped:?}, filling with nulls");
    }
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut normalized = NormalizedRow::empty(operator);
            for column in CanonicalColumn::ALL {
                let value = resolved.value(row, column).map(String::from);
                normalized.set(column, value);
            }
            normalized
        })
        .collect();
    Ok(rows)
}

/// normalizes several exports and concatenates them in the order given.
pub fn normalize_tables(
    tables: &[(Operator, RawTable)],
    mappings: &ColumnMappingTable,
) -> Result<Vec<NormalizedRow>, ScootstatError> {
    let mut result = vec![];
    for (operator, table) in tables.iter() {
        let rows = normalize_table(table, *operator, mappings)?;
        log::info!("normalized {} {} rows", rows.len(), operator);
        result.extend(rows);
    }
    Ok(result)
}
