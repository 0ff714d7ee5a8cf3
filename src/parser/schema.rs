//! Input schema definitions for the pick matrix.
//!
//! The input is a two-level JSON object of pick counts. Which key is
//! the outer one depends on the tool that produced the file.

use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw pick matrix as read from disk
///
/// Keys are kept as strings until the table is built, so that key
/// errors can name the offending key. Values are kept as raw JSON
/// numbers (or `null`) and coerced to integers later.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct RawPicks {
    pub entries: BTreeMap<String, BTreeMap<String, serde_json::Value>>,
}

impl RawPicks {
    /// Number of outer keys
    pub fn key_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of non-missing cells
    pub fn cell_count(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }
}

/// Nesting order of the input JSON
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum InputLayout {
    /// `{ "<heroId>": { "<dayIndex>": count } }`
    #[default]
    HeroFirst,
    
    /// `{ "<dayIndex>": { "<heroId>": count } }`, as written by the match condenser
    DayFirst,
}

impl InputLayout {
    /// Split an (outer, inner) key pair into (hero key, day key)
    pub fn hero_and_day<'a>(&self, outer: &'a str, inner: &'a str) -> (&'a str, &'a str) {
        match self {
            InputLayout::HeroFirst => (outer, inner),
            InputLayout::DayFirst => (inner, outer),
        }
    }
}
