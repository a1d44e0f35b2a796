#![deny(unsafe_code)]

//! Classification engine for variation-group analysis.
//!
//! Pure, synchronous value transformations over [`varigrid_model`] inputs:
//! feature extraction, per-column pattern signatures, grouping with
//! deterministic ids and colors, and consistency-preserving renames.
//! Nothing here performs I/O; "no data" conditions yield empty collections
//! rather than errors.

pub mod extract;
pub mod group;
pub mod palette;
pub mod pattern;
pub mod relabel;

pub use extract::{FeatureLayout, extract_features};
pub use group::{AnalyzeOptions, analyze};
pub use pattern::{ABSENT_MARK, APPLY_MARK, MARK_DELIMITER, build_pattern};
pub use relabel::relabel;
