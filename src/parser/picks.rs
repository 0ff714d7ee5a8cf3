//! Pick matrix parser.
//!
//! Reads the raw JSON matrix and orients it into a dense `PickTable`:
//! rows are dates, columns are hero ids, missing cells are zero and the
//! sentinel day/hero keys are dropped.

use super::schema::{InputLayout, RawPicks};
use crate::table::{day_index_to_date, HeroColumn, PickTable};
use crate::utils::config::{MISSING_DAY_INDEX, MISSING_HERO_ID};
use crate::utils::error::ParseError;
use log::{debug, info};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read the raw pick matrix from a JSON file
///
/// **Public** - main entry point for input loading
///
/// # Errors
/// * `ParseError::Io` - file cannot be opened
/// * `ParseError::JsonError` - file is not a two-level JSON object
pub fn load_picks(input_path: impl AsRef<Path>) -> Result<RawPicks, ParseError> {
    let input_path = input_path.as_ref();
    
    info!("Reading pick matrix from: {}", input_path.display());
    
    let file = File::open(input_path)?;
    let raw: RawPicks = serde_json::from_reader(BufReader::new(file))?;
    
    debug!("Loaded {} outer keys, {} cells", raw.key_count(), raw.cell_count());
    
    Ok(raw)
}

/// Parse the raw pick matrix from a JSON string
pub fn parse_picks(json: &str) -> Result<RawPicks, ParseError> {
    Ok(serde_json::from_str(json)?)
}

/// Build the dense pick table from the raw matrix
///
/// **Public** - orientation and clean-up in one pass
///
/// # Arguments
/// * `raw` - Matrix as read from disk
/// * `layout` - Which key of the matrix is the outer one
///
/// # Returns
/// Table with dates ascending, hero ids ascending, zero-filled cells,
/// and without day-index 0 or hero id 0
///
/// # Errors
/// * `ParseError::InvalidKey` - a key is not an integer
/// * `ParseError::InvalidCount` - a value is negative or not a number
/// * `ParseError::DateOutOfRange` - a day-index cannot be represented as a date
/// * `ParseError::CountOverflow` - the picks kept in the table sum past `u64::MAX`
pub fn build_table(raw: &RawPicks, layout: InputLayout) -> Result<PickTable, ParseError> {
    let mut day_indices: BTreeSet<i64> = BTreeSet::new();
    let mut hero_ids: BTreeSet<u32> = BTreeSet::new();
    let mut cells: BTreeMap<(i64, u32), u64> = BTreeMap::new();
    
    // Every row, column and table sum is bounded by this total
    let mut total_picks: u64 = 0;
    
    for (outer, inner) in &raw.entries {
        // An outer key with no cells still contributes an all-zero row or column
        match layout {
            InputLayout::HeroFirst => {
                hero_ids.insert(parse_hero_id(outer)?);
            }
            InputLayout::DayFirst => {
                day_indices.insert(parse_day_index(outer)?);
            }
        }
        
        for (key, value) in inner {
            let (hero_key, day_key) = layout.hero_and_day(outer, key);
            let hero_id = parse_hero_id(hero_key)?;
            let day_index = parse_day_index(day_key)?;
            let count = coerce_count(value, hero_id, day_index)?;
            
            hero_ids.insert(hero_id);
            day_indices.insert(day_index);
            
            // Sentinel cells are dropped below and never counted
            if hero_id == MISSING_HERO_ID || day_index == MISSING_DAY_INDEX {
                continue;
            }
            
            total_picks = total_picks.checked_add(count).ok_or_else(|| {
                ParseError::CountOverflow(format!(
                    "adding {} picks for hero {} on day {}",
                    count, hero_id, day_index
                ))
            })?;
            *cells.entry((day_index, hero_id)).or_insert(0) += count;
        }
    }
    
    // Drop the "missing date" row and "missing hero" column
    let dropped_day = day_indices.remove(&MISSING_DAY_INDEX);
    let dropped_hero = hero_ids.remove(&MISSING_HERO_ID);
    debug!(
        "Sentinels dropped: day 0 = {}, hero 0 = {}",
        dropped_day, dropped_hero
    );
    
    let heroes: Vec<HeroColumn> = hero_ids.iter().copied().map(HeroColumn::new).collect();
    
    let mut dates = Vec::with_capacity(day_indices.len());
    let mut rows = Vec::with_capacity(day_indices.len());
    for &day_index in &day_indices {
        let date = day_index_to_date(day_index).ok_or(ParseError::DateOutOfRange(day_index))?;
        let row: Vec<u64> = hero_ids
            .iter()
            .map(|&hero_id| cells.get(&(day_index, hero_id)).copied().unwrap_or(0))
            .collect();
        
        dates.push(date);
        rows.push(row);
    }
    
    debug!("Built table: {} dates × {} heroes", dates.len(), heroes.len());
    
    Ok(PickTable::new(dates, heroes, rows))
}

/// Parse a hero id key
///
/// **Private** - internal helper for build_table
fn parse_hero_id(key: &str) -> Result<u32, ParseError> {
    key.trim().parse().map_err(|_| ParseError::InvalidKey {
        key: key.to_string(),
        kind: "hero id",
    })
}

/// Parse a day-index key
///
/// **Private** - internal helper for build_table
fn parse_day_index(key: &str) -> Result<i64, ParseError> {
    key.trim().parse().map_err(|_| ParseError::InvalidKey {
        key: key.to_string(),
        kind: "day index",
    })
}

/// Coerce a JSON cell to an integer pick count
///
/// `null` counts as a missing cell (zero). Fractional counts are
/// truncated toward zero; floats at or past 2^64 are rejected.
fn coerce_count(value: &Value, hero_id: u32, day_index: i64) -> Result<u64, ParseError> {
    let invalid = || ParseError::InvalidCount {
        hero_id,
        day_index,
        value: value.to_string(),
    };
    
    match value {
        Value::Null => Ok(0),
        Value::Number(number) => {
            if let Some(count) = number.as_u64() {
                Ok(count)
            } else {
                match number.as_f64() {
                    Some(count) if count >= 0.0 && count < u64::MAX as f64 => {
                        Ok(count.trunc() as u64)
                    }
                    _ => Err(invalid()),
                }
            }
        }
        _ => Err(invalid()),
    }
}
