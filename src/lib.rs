//! OpenDota Picks
//!
//! Converts a JSON matrix of daily hero pick counts into CSV reports:
//! the full dates × heroes table, picks by date, or picks by hero.
//!
//! This crate provides the core implementation for the
//! `opendota-picks` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! opendota-picks picks.json picks.csv --remove-low-counts --normalize
//! opendota-picks picks.json by_date.csv --picks-by-date
//! opendota-picks --help
//! ```

pub mod commands;
pub mod heroes;
pub mod output;
pub mod parser;
pub mod table;
pub mod utils;
