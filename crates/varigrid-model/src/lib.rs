pub mod analysis;
pub mod column;
pub mod config;
pub mod error;
pub mod feature;
pub mod grid;
pub mod selection;

pub use analysis::{
    AxisAnalysis, GroupId, GroupLabeling, PatternSignature, VariationAnalysis, VariationGroup,
};
pub use column::ColumnRef;
pub use config::{AnalysisConfig, RawConfig};
pub use error::{ModelError, Result};
pub use feature::{Feature, Item};
pub use grid::{CellValue, Grid};
pub use selection::{Selection, SelectionEntry};
