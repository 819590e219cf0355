use alembic_catalog::Item;
use tracing::{debug, error, info, instrument};

use crate::error::PotterDbError;
use crate::normalize::normalize_potions;

pub const DEFAULT_BASE_URL: &str = "https://api.potterdb.com/v1";

/// Client for the PotterDB API.
pub struct PotterDbClient {
    http: reqwest::Client,
    base_url: String,
}

impl Default for PotterDbClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PotterDbClient {
    /// Creates a client for the public PotterDB instance.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_http_client(reqwest::Client::new(), base_url)
    }

    /// Creates a client around a preconfigured `reqwest::Client`.
    pub fn with_http_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn potions_url(&self) -> String {
        format!("{}/potions", self.base_url)
    }

    /// Fetches and normalizes the potion list with a single GET.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn fetch_potions(&self) -> Result<Vec<Item>, PotterDbError> {
        debug!("Sending request to PotterDB");

        let response = self
            .http
            .get(self.potions_url())
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(PotterDbError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        debug!("Received successful response");

        let body: serde_json::Value = serde_json::from_str(&text)?;
        normalize_potions(&body)
    }
}

/// Fetches the potion list for a session.
///
/// Any failure is logged and yields an empty list.
pub async fn load_potions(client: &PotterDbClient) -> Vec<Item> {
    match client.fetch_potions().await {
        Ok(items) => {
            info!(count = items.len(), "Fetched potions");
            items
        }
        Err(e) => {
            error!(error = %e, "Error fetching potions");
            Vec::new()
        }
    }
}

/// Pulls a message out of a JSON:API `errors` body, falling back to the raw text.
fn api_error_message(text: &str) -> String {
    serde_json::from_str::<serde_json::Value>(text)
        .ok()
        .and_then(|body| {
            let first = body.get("errors")?.get(0)?;
            first
                .get("detail")
                .or_else(|| first.get("title"))?
                .as_str()
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                "Unknown error".to_string()
            } else {
                trimmed.to_string()
            }
        })
}
