//! OpenDota Picks CLI
//!
//! Converts a JSON matrix of daily hero picks into CSV reports.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use opendota_picks::commands::{execute_convert, validate_args, ConvertArgs, HeroLabels, HeroSource};
use opendota_picks::parser::InputLayout;
use opendota_picks::utils::config::{DEFAULT_HEROES_URL, HEROES_URL_ENV};

/// OpenDota Picks - export daily hero picks from JSON to CSV
#[derive(Parser, Debug)]
#[command(name = "opendota-picks")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON pick matrix to read
    #[arg(value_name = "JSON_INPUT_FILE")]
    input: PathBuf,
    
    /// CSV file to write
    #[arg(value_name = "CSV_OUTPUT_FILE")]
    output: PathBuf,
    
    /// Record heroes by name or number
    #[arg(long, value_enum, default_value_t = HeroLabels::Names)]
    heroes: HeroLabels,
    
    /// Normalize picks as proportion of picks per day
    #[arg(short, long)]
    normalize: bool,
    
    /// Remove early records (pre 2011-11-22) as they have lower volumes of recorded matches
    #[arg(long)]
    remove_low_counts: bool,
    
    /// Export the number of picks for each day
    #[arg(long, conflicts_with_all = ["picks_by_hero", "normalize", "heroes"])]
    picks_by_date: bool,
    
    /// Export the number of picks for each hero
    #[arg(long, conflicts_with = "normalize")]
    picks_by_hero: bool,
    
    /// Nesting order of the input JSON
    #[arg(long, value_enum, default_value_t = InputLayout::HeroFirst)]
    input_layout: InputLayout,
    
    /// Hero directory endpoint
    #[arg(long, env = HEROES_URL_ENV, default_value = DEFAULT_HEROES_URL)]
    heroes_url: String,
    
    /// Read the hero directory from a local JSON file instead of the endpoint
    #[arg(long, value_name = "PATH")]
    heroes_file: Option<PathBuf>,
    
    /// Print a summary of the conversion to stdout
    #[arg(long)]
    summary: bool,
    
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    
    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();
    
    let heroes_source = match cli.heroes_file {
        Some(path) => HeroSource::File(path),
        None => HeroSource::Url(cli.heroes_url),
    };
    
    let args = ConvertArgs {
        input: cli.input,
        output: cli.output,
        heroes: cli.heroes,
        normalize: cli.normalize,
        remove_low_counts: cli.remove_low_counts,
        picks_by_date: cli.picks_by_date,
        picks_by_hero: cli.picks_by_hero,
        input_layout: cli.input_layout,
        heroes_source,
        print_summary: cli.summary,
    };
    
    // Validate args first
    validate_args(&args)?;
    
    execute_convert(args)?;
    
    Ok(())
}
