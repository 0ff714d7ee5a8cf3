//! Pick matrix parsing and schema definitions.
//!
//! This module handles:
//! - Reading the raw JSON matrix
//! - Orienting it (hero-first or day-first) into a dense table
//! - Coercing counts to integers

pub mod picks;
pub mod schema;

// Re-export main types
pub use picks::{build_table, load_picks, parse_picks};
pub use schema::{InputLayout, RawPicks};
