//! Pipeline stages over the pick table.
//!
//! Every stage takes its input by value (or by reference for reductions)
//! and returns a new value; nothing is mutated behind the caller's back.

use super::pick_table::{format_date, saturating_sum, HeroColumn, PickTable};
use crate::heroes::HeroDirectory;
use crate::utils::config::{DATE_HEADER, HERO_HEADER, LOW_COUNT_CUTOFF};
use crate::utils::error::TransformError;
use chrono::NaiveDate;
use log::{debug, warn};

/// Single-column output: one value per row label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickSeries {
    /// Header of the label column (`date` or `hero`)
    pub index_header: &'static str,
    pub labels: Vec<String>,
    pub values: Vec<u64>,
}

impl PickSeries {
    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.values.len()
    }
}

/// Pick table with each row divided by its total
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTable {
    pub dates: Vec<NaiveDate>,
    pub heroes: Vec<HeroColumn>,
    pub rows: Vec<Vec<f64>>,
}

/// First date kept by `remove_low_counts`
pub fn low_count_cutoff() -> NaiveDate {
    let (year, month, day) = LOW_COUNT_CUTOFF;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Drop every row dated before the low-count cutoff
///
/// **Public** - rows on or after the cutoff are kept unchanged
pub fn remove_low_counts(table: PickTable) -> PickTable {
    let cutoff = low_count_cutoff();
    let PickTable { dates, heroes, rows } = table;
    let before = dates.len();
    
    let (dates, rows): (Vec<_>, Vec<_>) = dates
        .into_iter()
        .zip(rows)
        .filter(|(date, _)| *date >= cutoff)
        .unzip();
    
    debug!("Removed {} rows dated before {}", before - dates.len(), cutoff);
    
    PickTable::new(dates, heroes, rows)
}

/// Total picks per date (row-wise sums)
pub fn picks_by_date(table: &PickTable) -> PickSeries {
    PickSeries {
        index_header: DATE_HEADER,
        labels: table.dates.iter().map(|date| format_date(*date)).collect(),
        values: table.rows.iter().map(saturating_sum).collect(),
    }
}

/// Total picks per hero (column-wise sums), keyed by column label
pub fn picks_by_hero(table: &PickTable) -> PickSeries {
    let mut values = vec![0u64; table.column_count()];
    for row in &table.rows {
        for (total, cell) in values.iter_mut().zip(row) {
            *total = total.saturating_add(*cell);
        }
    }
    
    PickSeries {
        index_header: HERO_HEADER,
        labels: table.heroes.iter().map(|hero| hero.label.clone()).collect(),
        values,
    }
}

/// Replace numeric column labels with hero display names
///
/// **Public** - column order is preserved, never re-sorted
///
/// # Errors
/// * `TransformError::UnknownHero` - a column id has no directory entry
pub fn substitute_names(
    table: PickTable,
    directory: &HeroDirectory,
) -> Result<PickTable, TransformError> {
    let PickTable { dates, heroes, rows } = table;
    
    let heroes = heroes
        .into_iter()
        .map(|hero| {
            let name = directory
                .name_of(hero.id)
                .ok_or(TransformError::UnknownHero(hero.id))?;
            Ok(hero.with_label(name))
        })
        .collect::<Result<Vec<_>, TransformError>>()?;
    
    Ok(PickTable::new(dates, heroes, rows))
}

/// Divide every cell by its row total
///
/// Rows that sum to zero stay all zeros rather than becoming NaN.
pub fn normalize(table: PickTable) -> NormalizedTable {
    let PickTable { dates, heroes, rows } = table;
    
    let rows: Vec<Vec<f64>> = rows
        .into_iter()
        .zip(&dates)
        .map(|(row, date)| {
            let total = saturating_sum(&row);
            if total == 0 {
                warn!("No picks recorded on {}, row left as zeros", date);
                return vec![0.0; row.len()];
            }
            let total = total as f64;
            row.into_iter().map(|cell| cell as f64 / total).collect()
        })
        .collect();
    
    NormalizedTable { dates, heroes, rows }
}
