//! Pick table and the transforms applied to it.
//!
//! This module holds:
//! - The dense `PickTable` (dates × heroes)
//! - Pure pipeline stages (filter, sums, relabel, normalize)
//! - The `Report` enum naming the single view written per run

pub mod pick_table;
pub mod transforms;

// Re-export main types and functions
pub use pick_table::{day_index_to_date, format_date, HeroColumn, PickTable};
pub use transforms::{
    normalize, picks_by_date, picks_by_hero, remove_low_counts, substitute_names,
    NormalizedTable, PickSeries,
};

/// The one view produced by a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Full table of integer counts
    Table(PickTable),
    
    /// Full table of per-day proportions
    Normalized(NormalizedTable),
    
    /// Single-column series (picks by date or by hero)
    Series(PickSeries),
}

impl Report {
    /// Number of data rows the report will write
    pub fn row_count(&self) -> usize {
        match self {
            Report::Table(table) => table.row_count(),
            Report::Normalized(table) => table.rows.len(),
            Report::Series(series) => series.row_count(),
        }
    }
}
