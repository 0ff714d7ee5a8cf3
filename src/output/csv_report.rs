//! CSV report writer.
//!
//! Writes the pick table, the normalized table, or a single-column
//! series to a comma-separated file with a header row.

use crate::table::{format_date, NormalizedTable, PickSeries, PickTable, Report};
use crate::utils::config::{DATE_HEADER, PICKS_HEADER};
use crate::utils::error::OutputError;
use csv::Writer;
use log::{debug, info};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write a report to a CSV file
///
/// **Public** - main entry point for CSV output
///
/// # Arguments
/// * `report` - The view produced by the pipeline
/// * `output_path` - Path to output CSV file
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error while creating the file
/// * `OutputError::Csv` - I/O error while writing records
///
/// # Example
/// ```ignore
/// let series = picks_by_date(&table);
/// write_report(&Report::Series(series), "picks_by_date.csv")?;
/// ```
pub fn write_report(report: &Report, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();
    
    info!("Writing CSV to: {}", output_path.display());
    
    validate_path(output_path)?;
    create_parent_dirs(output_path)?;
    
    let file = File::create(output_path)
        .map_err(OutputError::WriteFailed)?;
    
    match report {
        Report::Table(table) => write_table(table, file)?,
        Report::Normalized(table) => write_normalized(table, file)?,
        Report::Series(series) => write_series(series, file)?,
    }
    
    info!("CSV written successfully ({} rows, {} bytes)",
          report.row_count(),
          calculate_file_size(output_path));
    
    Ok(())
}

/// Write the integer pick table: `date,<hero labels...>`
pub fn write_table<W: Write>(table: &PickTable, writer: W) -> Result<(), OutputError> {
    let mut csv = Writer::from_writer(writer);
    
    csv.write_record(header(DATE_HEADER, table.labels()))?;
    for (date, row) in table.dates.iter().zip(&table.rows) {
        let record = std::iter::once(format_date(*date))
            .chain(row.iter().map(u64::to_string));
        csv.write_record(record)?;
    }
    
    csv.flush()?;
    Ok(())
}

/// Write the normalized table: same layout as `write_table`, float cells
pub fn write_normalized<W: Write>(table: &NormalizedTable, writer: W) -> Result<(), OutputError> {
    let mut csv = Writer::from_writer(writer);
    
    let labels = table.heroes.iter().map(|hero| hero.label.as_str());
    csv.write_record(header(DATE_HEADER, labels))?;
    for (date, row) in table.dates.iter().zip(&table.rows) {
        let record = std::iter::once(format_date(*date))
            .chain(row.iter().map(f64::to_string));
        csv.write_record(record)?;
    }
    
    csv.flush()?;
    Ok(())
}

/// Write a single-column series: `<index header>,picks`
pub fn write_series<W: Write>(series: &PickSeries, writer: W) -> Result<(), OutputError> {
    let mut csv = Writer::from_writer(writer);
    
    csv.write_record([series.index_header, PICKS_HEADER])?;
    for (label, value) in series.labels.iter().zip(&series.values) {
        csv.write_record([label.as_str(), value.to_string().as_str()])?;
    }
    
    csv.flush()?;
    Ok(())
}

fn header<'a>(
    index_header: &'a str,
    labels: impl IntoIterator<Item = &'a str>,
) -> Vec<&'a str> {
    std::iter::once(index_header).chain(labels).collect()
}

/// Validate that output path is writable
///
/// **Public** - also used by argument validation before any work is done
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }
    
    // Check if we're trying to overwrite a directory
    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }
    
    Ok(())
}

fn create_parent_dirs(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent)
                .map_err(|e| OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                )))?;
        }
    }
    
    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path)
        .map(|m| m.len())
        .unwrap_or(0)
}
