//! Result export for variation-group analyses.
//!
//! Pure projection (append group rows to a grid) is separated from the
//! file writers so callers can keep everything in memory when they want to.

pub mod append;
pub mod files;

pub use append::append_group_rows;
pub use files::{read_analysis_json, write_analysis_json, write_grid_csv};
