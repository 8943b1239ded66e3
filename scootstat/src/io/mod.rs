//! reading operator exports and reference layers, writing result tables.
pub mod read_ops;
pub mod write_ops;
