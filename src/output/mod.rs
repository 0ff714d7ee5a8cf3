//! Output writers for pick reports.
//!
//! All reports are written as CSV with a header row and the row label
//! (date or hero) in the first column.

pub mod csv_report;

// Re-export main functions
pub use csv_report::{validate_path, write_normalized, write_report, write_series, write_table};
