//! Types for the OpenDota hero directory.
//!
//! Based on the `/api/heroes` response: a JSON array of hero objects.

use serde::Deserialize;
use std::collections::HashMap;

/// One hero entry from the directory
///
/// Only `id` and `localized_name` are read; the API returns more
/// fields (internal name, roles, attack type, ...) which are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct HeroEntry {
    pub id: u32,
    pub localized_name: String,
}

/// Hero id to display name lookup
#[derive(Debug, Clone, Default)]
pub struct HeroDirectory {
    names: HashMap<u32, String>,
}

impl HeroDirectory {
    /// Build a directory from API entries
    ///
    /// Later entries win when an id appears twice.
    pub fn from_entries(entries: impl IntoIterator<Item = HeroEntry>) -> Self {
        let names = entries
            .into_iter()
            .map(|entry| (entry.id, entry.localized_name))
            .collect();
        
        Self { names }
    }

    /// Display name for a hero id
    pub fn name_of(&self, hero_id: u32) -> Option<&str> {
        self.names.get(&hero_id).map(String::as_str)
    }

    /// Number of heroes in the directory
    pub fn hero_count(&self) -> usize {
        self.names.len()
    }
}

impl FromIterator<(u32, String)> for HeroDirectory {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}
