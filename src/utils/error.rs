//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading the hero directory
#[derive(Error, Debug)]
pub enum HeroApiError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    
    #[error("Invalid hero directory response: {0}")]
    InvalidResponse(String),
    
    #[error("Failed to read hero directory file: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("Hero directory is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors that can occur while parsing the pick matrix
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input file: {0}")]
    Io(#[from] std::io::Error),
    
    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
    
    #[error("Invalid key {key:?}: expected an integer {kind}")]
    InvalidKey { key: String, kind: &'static str },
    
    #[error("Invalid pick count for hero {hero_id} on day {day_index}: {value}")]
    InvalidCount {
        hero_id: u32,
        day_index: i64,
        value: String,
    },
    
    #[error("Day index {0} is outside the supported date range")]
    DateOutOfRange(i64),
    
    #[error("Pick counts overflow a 64-bit total: {0}")]
    CountOverflow(String),
}

/// Errors that can occur while transforming the pick table
#[derive(Error, Debug)]
pub enum TransformError {
    #[error("Hero id {0} is missing from the hero directory")]
    UnknownHero(u32),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),
    
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
    
    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
