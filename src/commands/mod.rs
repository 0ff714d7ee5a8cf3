//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod convert;
pub mod models;

// Re-export main command functions
pub use convert::{build_report, execute_convert, validate_args};
pub use models::{ConvertArgs, ConvertSummary, HeroLabels, HeroSource, ReportKind};
