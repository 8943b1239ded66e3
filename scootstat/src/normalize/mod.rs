//! renames each operator's export columns into the canonical trip schema.
mod column_mapping;
mod path_extraction;
mod schema_normalizer;

pub use column_mapping::{ColumnAlias, ColumnMappingTable, ResolvedColumns, PATH_COLUMN};
pub use path_extraction::extract_paths;
pub use schema_normalizer::{normalize_table, normalize_tables};
