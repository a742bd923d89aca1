//! Shared data types passed between the analysis engine and its collaborators.

pub mod source;
pub mod year_key;

pub use source::{MediaLink, QualityHistogram, SourceRow};
pub use year_key::{ScheduleVariant, YearKey, YearKeyParseError};
