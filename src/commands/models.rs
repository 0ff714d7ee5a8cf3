use crate::parser::InputLayout;
use crate::utils::config::DEFAULT_HEROES_URL;
use chrono::NaiveDate;
use std::fmt;
use std::path::PathBuf;

/// How hero columns are labelled in the output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum HeroLabels {
    /// Display names from the hero directory
    #[default]
    Names,
    
    /// Numeric hero ids
    Numbers,
}

/// Where the hero directory is loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroSource {
    /// HTTP endpoint returning the OpenDota hero list
    Url(String),
    
    /// Local JSON file with the same shape
    File(PathBuf),
}

impl Default for HeroSource {
    fn default() -> Self {
        HeroSource::Url(DEFAULT_HEROES_URL.to_string())
    }
}

/// Arguments for the convert command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ConvertArgs {
    /// JSON pick matrix to read
    pub input: PathBuf,
    
    /// CSV file to write
    pub output: PathBuf,
    
    /// Label heroes by name or by id
    pub heroes: HeroLabels,
    
    /// Divide each day's picks by that day's total
    pub normalize: bool,
    
    /// Drop days before 2011-11-22
    pub remove_low_counts: bool,
    
    /// Export total picks per date only
    pub picks_by_date: bool,
    
    /// Export total picks per hero only
    pub picks_by_hero: bool,
    
    /// Nesting order of the input JSON
    pub input_layout: InputLayout,
    
    /// Hero directory source (only used with `HeroLabels::Names`)
    pub heroes_source: HeroSource,
    
    /// Print a run summary to stdout
    pub print_summary: bool,
}

impl Default for ConvertArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::new(),
            output: PathBuf::new(),
            heroes: HeroLabels::Names,
            normalize: false,
            remove_low_counts: false,
            picks_by_date: false,
            picks_by_hero: false,
            input_layout: InputLayout::HeroFirst,
            heroes_source: HeroSource::default(),
            print_summary: false,
        }
    }
}

impl ConvertArgs {
    /// The single report this run produces
    pub fn report_kind(&self) -> ReportKind {
        if self.picks_by_date {
            ReportKind::PicksByDate
        } else if self.picks_by_hero {
            ReportKind::PicksByHero
        } else if self.normalize {
            ReportKind::Normalized
        } else {
            ReportKind::Table
        }
    }
}

/// Which view of the table is written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Table,
    Normalized,
    PicksByDate,
    PicksByHero,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReportKind::Table => "picks table",
            ReportKind::Normalized => "normalized picks table",
            ReportKind::PicksByDate => "picks by date",
            ReportKind::PicksByHero => "picks by hero",
        };
        f.write_str(name)
    }
}

/// Outcome of a conversion run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub kind: ReportKind,
    
    /// Data rows written (excluding the header)
    pub rows_written: usize,
    
    /// Dates and heroes in the table after filtering
    pub dates: usize,
    pub heroes: usize,
    
    pub total_picks: u64,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl fmt::Display for ConvertSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report:      {}", self.kind)?;
        writeln!(f, "Rows:        {}", self.rows_written)?;
        writeln!(f, "Dates:       {}", self.dates)?;
        writeln!(f, "Heroes:      {}", self.heroes)?;
        writeln!(f, "Total Picks: {}", self.total_picks)?;
        match (self.first_date, self.last_date) {
            (Some(first), Some(last)) => write!(f, "Date Range:  {} to {}", first, last),
            _ => write!(f, "Date Range:  (empty)"),
        }
    }
}
