//! Convert command implementation.
//!
//! The convert command:
//! 1. Loads the JSON pick matrix and builds the dense table
//! 2. Optionally removes the low-count period
//! 3. Builds the requested report (relabelling heroes when needed)
//! 4. Writes the CSV file

use super::models::{ConvertArgs, ConvertSummary, HeroLabels, HeroSource, ReportKind};
use crate::heroes::{load_directory_file, HeroClient, HeroDirectory};
use crate::output::{validate_path, write_report};
use crate::parser::{build_table, load_picks};
use crate::table::{
    normalize, picks_by_date, picks_by_hero, remove_low_counts, substitute_names, PickTable,
    Report,
};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Instant;

/// Execute the convert command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Convert command arguments
///
/// # Returns
/// Summary of the table and the report written
///
/// # Errors
/// * Input read or JSON parse failures
/// * Hero directory request failures (not in picks-by-date mode)
/// * Hero ids missing from the directory
/// * File write errors
///
/// # Example
/// ```ignore
/// let args = ConvertArgs {
///     input: PathBuf::from("picks.json"),
///     output: PathBuf::from("picks.csv"),
///     remove_low_counts: true,
///     ..Default::default()
/// };
///
/// execute_convert(args)?;
/// ```
pub fn execute_convert(args: ConvertArgs) -> Result<ConvertSummary> {
    let start_time = Instant::now();
    
    info!("Starting conversion: {} -> {}", args.input.display(), args.output.display());
    
    // Step 1: Load and clean the matrix
    info!("Step 1/4: Loading pick matrix...");
    let table = load_table(&args)?;
    
    info!("Input cleaned: {} dates, {} heroes, {} picks",
          table.row_count(),
          table.column_count(),
          table.total_picks());
    
    // Step 2: Low-count filter
    let table = if args.remove_low_counts {
        info!("Step 2/4: Removing low-count days...");
        let filtered = remove_low_counts(table);
        info!("{} dates remain", filtered.row_count());
        filtered
    } else {
        info!("Step 2/4: Keeping low-count days (not requested)");
        table
    };
    
    let mut summary = ConvertSummary {
        kind: args.report_kind(),
        rows_written: 0,
        dates: table.row_count(),
        heroes: table.column_count(),
        total_picks: table.total_picks(),
        first_date: table.date_range().map(|(first, _)| first),
        last_date: table.date_range().map(|(_, last)| last),
    };
    
    // Step 3: Build the report
    info!("Step 3/4: Building {}...", summary.kind);
    let report = build_report(table, &args)?;
    summary.rows_written = report.row_count();
    
    // Step 4: Write CSV
    info!("Step 4/4: Writing output file...");
    write_report(&report, &args.output)
        .with_context(|| format!("Failed to write CSV to {}", args.output.display()))?;
    
    info!("✓ Exported {} to: {}", summary.kind, args.output.display());
    
    if args.print_summary {
        println!("\n{}", "=".repeat(60));
        println!("CONVERSION SUMMARY");
        println!("{}", "=".repeat(60));
        println!("{}", summary);
        println!("{}", "=".repeat(60));
    }
    
    let elapsed = start_time.elapsed();
    info!("Conversion completed in {:.2}s", elapsed.as_secs_f64());
    
    Ok(summary)
}

/// Read the input file and build the cleaned table
///
/// **Private** - internal helper for execute_convert
fn load_table(args: &ConvertArgs) -> Result<PickTable> {
    let raw = load_picks(&args.input)
        .with_context(|| format!("Failed to load pick matrix from {}", args.input.display()))?;
    
    debug!("Input layout: {:?}", args.input_layout);
    
    let table = build_table(&raw, args.input_layout)
        .context("Failed to build pick table")?;
    
    Ok(table)
}

/// Build the report this run asked for from a cleaned table
///
/// **Public** - the pipeline stages after filtering, without any file output
///
/// Picks by date returns before hero names are resolved, so it never
/// touches the hero directory. Picks by hero uses the (possibly
/// relabelled) columns and skips normalization.
pub fn build_report(table: PickTable, args: &ConvertArgs) -> Result<Report> {
    if args.report_kind() == ReportKind::PicksByDate {
        return Ok(Report::Series(picks_by_date(&table)));
    }
    
    let table = match args.heroes {
        HeroLabels::Names => {
            let directory = load_directory(&args.heroes_source)?;
            let named = substitute_names(table, &directory)
                .context("Failed to replace hero ids with names")?;
            info!("Heroes ids replaced with heroes names");
            named
        }
        HeroLabels::Numbers => table,
    };
    
    let report = match args.report_kind() {
        ReportKind::PicksByHero => Report::Series(picks_by_hero(&table)),
        ReportKind::Normalized => Report::Normalized(normalize(table)),
        _ => Report::Table(table),
    };
    
    Ok(report)
}

/// Load the hero directory from its configured source
///
/// **Private** - internal helper for build_report
fn load_directory(source: &HeroSource) -> Result<HeroDirectory> {
    let directory = match source {
        HeroSource::Url(url) => {
            let client = HeroClient::new(url.as_str())
                .context("Failed to create hero directory client")?;
            client
                .fetch_directory()
                .with_context(|| format!("Failed to fetch hero directory from {}", url))?
        }
        HeroSource::File(path) => load_directory_file(path)
            .with_context(|| format!("Failed to load hero directory from {}", path.display()))?,
    };
    
    debug!("Hero directory holds {} heroes", directory.hero_count());
    
    Ok(directory)
}

/// Validate convert arguments
///
/// **Public** - can be called before execute_convert for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &ConvertArgs) -> Result<()> {
    // Output modes
    if args.picks_by_date && args.picks_by_hero {
        anyhow::bail!("--picks-by-date and --picks-by-hero cannot be used together");
    }
    
    if args.normalize && (args.picks_by_date || args.picks_by_hero) {
        anyhow::bail!("--normalize only applies to the full picks table");
    }
    
    // Input file
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }
    
    if !args.input.is_file() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }
    
    // Output file
    validate_path(&args.output)
        .context("Invalid output path")?;
    
    if args.output == args.input {
        anyhow::bail!("Output path must differ from the input path");
    }
    
    // Hero directory source
    if let HeroSource::Url(url) = &args.heroes_source {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!("Hero directory URL must start with http:// or https://");
        }
    }
    
    Ok(())
}
