//! Catalog module - the table of known vessels

mod vessel_table;

pub use vessel_table::{VesselTable, VesselRow, VesselRowKey, SortOrder};
