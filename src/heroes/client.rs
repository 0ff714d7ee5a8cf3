//! Hero directory loading: HTTP fetch from OpenDota or a local JSON file.

use super::types::{HeroDirectory, HeroEntry};
use crate::utils::config::DEFAULT_HEROES_TIMEOUT;
use crate::utils::error::HeroApiError;
use log::{debug, info};
use reqwest::blocking::Client;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// HTTP client for the hero directory endpoint
pub struct HeroClient {
    client: Client,
    url: String,
}

impl HeroClient {
    /// Create a new hero directory client
    pub fn new(url: impl Into<String>) -> Result<Self, HeroApiError> {
        let client = Client::builder()
            .timeout(DEFAULT_HEROES_TIMEOUT)
            .build()
            .map_err(HeroApiError::RequestFailed)?;
        
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the hero directory
    ///
    /// **Public** - single blocking GET, no retries
    ///
    /// # Errors
    /// * `HeroApiError::RequestFailed` - connection failure or undecodable body
    /// * `HeroApiError::InvalidResponse` - non-success HTTP status or empty list
    pub fn fetch_directory(&self) -> Result<HeroDirectory, HeroApiError> {
        info!("Fetching hero directory from: {}", self.url);
        
        let response = self
            .client
            .get(&self.url)
            .send()
            .map_err(HeroApiError::RequestFailed)?;
        
        // Check HTTP status
        if !response.status().is_success() {
            return Err(HeroApiError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }
        
        let entries: Vec<HeroEntry> = response
            .json()
            .map_err(HeroApiError::RequestFailed)?;
        
        debug!("Hero directory response: {} entries", entries.len());
        
        into_directory(entries)
    }
}

/// Load the hero directory from a JSON file with the API's shape
///
/// **Public** - offline alternative to `HeroClient::fetch_directory`
pub fn load_directory_file(path: impl AsRef<Path>) -> Result<HeroDirectory, HeroApiError> {
    let path = path.as_ref();
    
    info!("Loading hero directory from: {}", path.display());
    
    let file = File::open(path)?;
    let entries: Vec<HeroEntry> = serde_json::from_reader(BufReader::new(file))?;
    
    into_directory(entries)
}

fn into_directory(entries: Vec<HeroEntry>) -> Result<HeroDirectory, HeroApiError> {
    if entries.is_empty() {
        return Err(HeroApiError::InvalidResponse(
            "Hero directory is empty".to_string(),
        ));
    }
    
    Ok(HeroDirectory::from_entries(entries))
}
