use crate::model::{CanonicalColumn, Operator, RawTable};
use crate::ScootstatError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// raw column holding the GPS trace of a rental. never part of the canonical table.
pub const PATH_COLUMN: &str = "PERCORSO";

/// one (source-name, canonical-name) pair of an operator's mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnAlias {
    pub source: String,
    pub canonical: CanonicalColumn,
}

impl ColumnAlias {
    fn new(source: &str, canonical: CanonicalColumn) -> ColumnAlias {
        ColumnAlias {
            source: source.to_string(),
            canonical,
        }
    }
}

/// per-operator renaming rules. supporting another export layout is a matter of
/// adding entries here, the normalizer itself has no operator-specific logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnMappingTable(pub HashMap<Operator, Vec<ColumnAlias>>);

/// column positions of one export after applying its operator's mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedColumns {
    positions: [Option<usize>; CanonicalColumn::ALL.len()],
    pub path: Option<usize>,
}

impl ResolvedColumns {
    pub fn position(&self, column: CanonicalColumn) -> Option<usize> {
        self.positions[column.index()]
    }

    /// canonical columns that were not found in the export header
    pub fn unmapped(&self) -> Vec<CanonicalColumn> {
        CanonicalColumn::ALL
            .into_iter()
            .filter(|c| self.position(*c).is_none())
            .collect()
    }

    /// reads a canonical column from a raw row, if mapped and present.
    pub fn value<'a>(&self, row: &'a [String], column: CanonicalColumn) -> Option<&'a str> {
        self.position(column)
            .and_then(|idx| row.get(idx))
            .map(|v| v.as_str())
    }
}

impl ColumnMappingTable {
    pub fn aliases(&self, operator: &Operator) -> Option<&[ColumnAlias]> {
        self.0.get(operator).map(|v| v.as_slice())
    }

    /// matches an operator's aliases against the header of one export. when several
    /// aliases target the same canonical column, the first one present wins.
    ///
    /// # Errors
    ///
    /// fails when the operator has no mapping or when a required column
    /// (vehicle id, start and end timestamps) cannot be found at all.
    pub fn resolve(
        &self,
        operator: &Operator,
        table: &RawTable,
    ) -> Result<ResolvedColumns, ScootstatError> {
        let aliases = self.aliases(operator).ok_or_else(|| {
            ScootstatError::ConfigurationError(format!(
                "no column mapping configured for operator {operator}"
            ))
        })?;
        let mut positions = [None; CanonicalColumn::ALL.len()];
        for alias in aliases {
            let slot = &mut positions[alias.canonical.index()];
            if slot.is_none() {
                *slot = table.column_index(&alias.source);
            }
        }
        let resolved = ResolvedColumns {
            positions,
            path: table.column_index(PATH_COLUMN),
        };
        let missing = CanonicalColumn::REQUIRED
            .into_iter()
            .filter(|c| resolved.position(*c).is_none())
            .collect::<Vec<_>>();
        if missing.is_empty() {
            Ok(resolved)
        } else {
            Err(ScootstatError::MissingRequiredColumns {
                operator: *operator,
                missing,
            })
        }
    }
}

impl Default for ColumnMappingTable {
    fn default() -> Self {
        use CanonicalColumn as C;

        // LIME already publishes the municipal open-data schema
        let municipal = vec![
            ColumnAlias::new("ID_VEICOLO", C::VehicleId),
            ColumnAlias::new("DATAORA_INIZIO", C::StartTime),
            ColumnAlias::new("DATAORA_FINE", C::EndTime),
            ColumnAlias::new("LATITUDINE_INIZIO_CORSA", C::StartLat),
            ColumnAlias::new("LONGITUTIDE_INIZIO_CORSA", C::StartLon),
            ColumnAlias::new("LATITUDINE_FINE_CORSA", C::EndLat),
            ColumnAlias::new("LONGITUTIDE_FINE_CORSA", C::EndLon),
            ColumnAlias::new("DISTANZA_KM", C::DistanceKm),
            ColumnAlias::new("DURATA_MIN", C::DurationMin),
            ColumnAlias::new("RISERVATO", C::Reserved),
        ];
        let lime = municipal
            .iter()
            .cloned()
            .chain([
                ColumnAlias::new("BATTERIA_INIZIO_CORSA", C::StartBattery),
                ColumnAlias::new("BATTERIA_FINE_CORSA", C::EndBattery),
                ColumnAlias::new("ID_ORGANIZZAZIONE", C::OrganizationId),
            ])
            .collect();
        let void = vec![
            ColumnAlias::new("Targa veicolo", C::VehicleId),
            ColumnAlias::new("Data inizio corsa", C::StartTime),
            ColumnAlias::new("Data fine corsa", C::EndTime),
            ColumnAlias::new("Lat inizio corsa_coordinate", C::StartLat),
            ColumnAlias::new("Lon inizio corsa_coordinate", C::StartLon),
            ColumnAlias::new("Lat fine corsa_coordinate", C::EndLat),
            ColumnAlias::new("Lon fine corsa_coordinate", C::EndLon),
            ColumnAlias::new("KM Tot", C::DistanceKm),
            ColumnAlias::new("Tempo Tot", C::DurationMin),
            ColumnAlias::new("Prenotazione", C::Reserved),
            ColumnAlias::new("Batteria inizio", C::StartBattery),
            ColumnAlias::new("Batteria fine", C::EndBattery),
        ];
        let bird = municipal;

        ColumnMappingTable(HashMap::from([
            (Operator::Lime, lime),
            (Operator::Void, void),
            (Operator::Bird, bird),
        ]))
    }
}
