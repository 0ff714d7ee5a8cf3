//! Configuration and constants for the CLI.

use std::time::Duration;

/// Default hero directory endpoint (OpenDota public API)
pub const DEFAULT_HEROES_URL: &str = "http://api.opendota.com/api/heroes/";

/// Environment variable overriding the hero directory endpoint
pub const HEROES_URL_ENV: &str = "OPENDOTA_HEROES_URL";

/// Default timeout for the hero directory request
pub const DEFAULT_HEROES_TIMEOUT: Duration = Duration::from_secs(30);

// Day-index 1 is 1970-01-01, so the epoch is applied with a one day offset
pub const EPOCH_YEAR: i32 = 1970;
pub const DAY_INDEX_OFFSET: i64 = 1;

// Sentinel keys written by the condenser for matches without a date or hero
pub const MISSING_DAY_INDEX: i64 = 0;
pub const MISSING_HERO_ID: u32 = 0;

/// First day with reliable match volume (year, month, day).
/// Earlier records are dropped by `--remove-low-counts`.
pub const LOW_COUNT_CUTOFF: (i32, u32, u32) = (2011, 11, 22);

/// Date format used for CSV row labels
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// CSV header names
pub const DATE_HEADER: &str = "date";
pub const HERO_HEADER: &str = "hero";
pub const PICKS_HEADER: &str = "picks";
