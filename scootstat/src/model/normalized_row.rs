use super::{CanonicalColumn, Operator};

/// cell text that csv exports use to mark a missing value
const NULL_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// true for blank cells and the usual null markers, compared after trimming.
pub fn is_null_text(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || NULL_TOKENS.contains(&value)
}

/// one operator row renamed into the canonical schema. values are kept as
/// text until the cleaner parses them; `None` is the null marker.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRow {
    pub operator: Operator,
    values: [Option<String>; CanonicalColumn::ALL.len()],
}

impl NormalizedRow {
    /// a row where every canonical column is null
    pub fn empty(operator: Operator) -> NormalizedRow {
        NormalizedRow {
            operator,
            values: Default::default(),
        }
    }

    pub fn get(&self, column: CanonicalColumn) -> Option<&str> {
        self.values[column.index()].as_deref()
    }

    /// sets a column value. blank text and null markers such as `NaN` are stored as null.
    pub fn set(&mut self, column: CanonicalColumn, value: Option<String>) {
        self.values[column.index()] = value.filter(|v| !is_null_text(v));
    }

    /// the values in canonical column order followed by the operator tag.
    pub fn to_record(&self) -> Vec<String> {
        self.values
            .iter()
            .map(|v| v.clone().unwrap_or_default())
            .chain(std::iter::once(self.operator.tag().to_string()))
            .collect()
    }

    /// header matching [`NormalizedRow::to_record`]
    pub fn record_header() -> Vec<&'static str> {
        CanonicalColumn::ALL
            .iter()
            .map(|c| c.name())
            .chain(std::iter::once("operator"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_markers_are_stored_as_null() {
        let mut row = NormalizedRow::empty(Operator::Lime);
        for marker in ["", "  ", "NaN", "nan", " NA ", "N/A", "NULL", "null", "None", "<NA>", "#N/A"] {
            row.set(CanonicalColumn::VehicleId, Some(marker.to_string()));
            assert_eq!(row.get(CanonicalColumn::VehicleId), None, "marker {marker:?}");
        }
        row.set(CanonicalColumn::VehicleId, Some("NA-104".to_string()));
        assert_eq!(row.get(CanonicalColumn::VehicleId), Some("NA-104"));
        row.set(CanonicalColumn::DistanceKm, Some("0".to_string()));
        assert_eq!(row.get(CanonicalColumn::DistanceKm), Some("0"));
    }

    #[test]
    fn test_record_follows_header() {
        let mut row = NormalizedRow::empty(Operator::Bird);
        row.set(CanonicalColumn::VehicleId, Some("B7".to_string()));
        let record = row.to_record();
        let header = NormalizedRow::record_header();
        assert_eq!(record.len(), header.len());
        assert_eq!(header.last(), Some(&"operator"));
        let idx = CanonicalColumn::VehicleId.index();
        assert_eq!(record[idx], "B7");
        assert_eq!(header[idx], CanonicalColumn::VehicleId.name());
    }
}
