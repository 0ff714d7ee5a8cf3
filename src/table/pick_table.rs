//! Dense pick table: rows are calendar dates, columns are heroes.

use crate::utils::config::{DATE_FORMAT, DAY_INDEX_OFFSET, EPOCH_YEAR};
use chrono::{Duration, NaiveDate};

/// A hero column: numeric id plus the label written to CSV
///
/// The label starts out as the decimal id and is replaced by the
/// display name when hero names are substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroColumn {
    pub id: u32,
    pub label: String,
}

impl HeroColumn {
    /// Create a column labelled by its numeric id
    pub fn new(id: u32) -> Self {
        Self {
            id,
            label: id.to_string(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// Dense table of integer pick counts
///
/// **Public** - the value passed between pipeline stages
///
/// Every row in `rows` holds exactly one cell per entry in `heroes`,
/// and `rows[i]` belongs to `dates[i]`. Tables from `build_table` keep
/// their grand total within `u64`; sums over hand-built tables saturate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickTable {
    /// Row labels, ascending
    pub dates: Vec<NaiveDate>,
    
    /// Column labels, ascending by hero id
    pub heroes: Vec<HeroColumn>,
    
    /// Cell values, one row per date
    pub rows: Vec<Vec<u64>>,
}

impl PickTable {
    /// Create a table from already-aligned parts
    pub fn new(dates: Vec<NaiveDate>, heroes: Vec<HeroColumn>, rows: Vec<Vec<u64>>) -> Self {
        debug_assert_eq!(dates.len(), rows.len());
        debug_assert!(rows.iter().all(|row| row.len() == heroes.len()));
        
        Self { dates, heroes, rows }
    }

    pub fn row_count(&self) -> usize {
        self.dates.len()
    }

    pub fn column_count(&self) -> usize {
        self.heroes.len()
    }

    /// Sum of every cell in the table
    pub fn total_picks(&self) -> u64 {
        saturating_sum(self.rows.iter().flatten())
    }

    /// Column labels in column order
    pub fn labels(&self) -> Vec<&str> {
        self.heroes.iter().map(|hero| hero.label.as_str()).collect()
    }

    /// First and last date in the table
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.dates.first(), self.dates.last()) {
            (Some(first), Some(last)) => Some((*first, *last)),
            _ => None,
        }
    }
}

/// Sum pick counts, clamping at `u64::MAX`
pub(crate) fn saturating_sum<'a>(cells: impl IntoIterator<Item = &'a u64>) -> u64 {
    cells
        .into_iter()
        .fold(0u64, |total, cell| total.saturating_add(*cell))
}

/// Convert a day-index into a calendar date
///
/// **Public** - day-index 1 is 1970-01-01
///
/// # Returns
/// `None` if the resulting date is outside chrono's supported range
pub fn day_index_to_date(day_index: i64) -> Option<NaiveDate> {
    let epoch = NaiveDate::from_ymd_opt(EPOCH_YEAR, 1, 1)?;
    let offset = Duration::try_days(day_index.checked_sub(DAY_INDEX_OFFSET)?)?;
    epoch.checked_add_signed(offset)
}

/// Format a date the way it is written to CSV
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
