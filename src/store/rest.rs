// PostgREST-style HTTP store
//
// Talks to a managed backend exposing the individuals table under
// `/rest/v1/{table}`. Each lookup is one blocking GET filtered by id.

use super::EntityStore;
use crate::error::{Error, Result};
use crate::model::Individual;
use log::debug;
use std::time::Duration;

/// Columns requested for every lookup
const SELECT_COLUMNS: &str = "id,name,morph,gender,image_url,sire_id,dam_id,sire_name,dam_name";

/// Connection settings for [`RestStore`]
#[derive(Debug, Clone)]
pub struct RestStoreConfig {
    /// Base URL of the backend, e.g. `https://project.example.co`
    pub url: String,
    /// Anonymous or service key sent as `apikey` and bearer token
    pub api_key: Option<String>,
    pub table: String,
    pub timeout: Duration,
}

impl RestStoreConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: None,
            table: "geckos".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

/// Store backed by a PostgREST endpoint
pub struct RestStore {
    config: RestStoreConfig,
    client: reqwest::blocking::Client,
}

impl RestStore {
    pub fn new(config: RestStoreConfig) -> Result<Self> {
        if config.url.trim().is_empty() {
            return Err(Error::config_validation("store url must not be empty"));
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { config, client })
    }

    /// Endpoint for a single-record lookup
    fn lookup_url(&self, id: &str) -> String {
        format!(
            "{}/rest/v1/{}?id=eq.{}&select={}",
            self.config.url.trim_end_matches('/'),
            self.config.table,
            urlencoding::encode(id),
            SELECT_COLUMNS
        )
    }
}

impl EntityStore for RestStore {
    fn fetch_by_id(&self, id: &str) -> Result<Individual> {
        let url = self.lookup_url(id);
        debug!("GET {}", url);

        let mut request = self.client.get(&url).header("Accept", "application/json");
        if let Some(key) = &self.config.api_key {
            request = request
                .header("apikey", key)
                .header("Authorization", format!("Bearer {}", key));
        }

        let response = request
            .send()
            .map_err(|e| Error::store(format!("request for '{}' failed: {}", id, e)))?;

        if !response.status().is_success() {
            return Err(Error::store(format!(
                "backend returned status {} for '{}'",
                response.status(),
                id
            )));
        }

        let rows: Vec<Individual> = response
            .json()
            .map_err(|e| Error::store(format!("unreadable response for '{}': {}", id, e)))?;

        rows.into_iter()
            .find(|row| row.id == id)
            .ok_or_else(|| Error::not_found(id))
    }
}
