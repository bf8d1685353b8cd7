//! HTTP client for the backend's history listing.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::{HistoryError, HistoryResponse, ScheduleEntry};

/// Path of the schedule-listing endpoint.
pub const HISTORY_PATH: &str = "/api/historial-completo";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Anything that can produce the raw list of scheduled albums.
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Fetch every scheduled entry, in whatever order the source keeps them.
    async fn fetch_entries(&self) -> Result<Vec<ScheduleEntry>, HistoryError>;
}

/// Client for the game backend.
pub struct HistoryClient {
    http: Client,
    base_url: String,
}

impl HistoryClient {
    /// Create a client for the backend at `base_url` (its origin).
    pub fn new(base_url: impl Into<String>) -> Result<Self, HistoryError> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom overall request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HistoryError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// The backend origin this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of the history endpoint.
    pub fn history_url(&self) -> String {
        format!("{}{}", self.base_url, HISTORY_PATH)
    }

    /// Fetch all scheduled albums.
    ///
    /// An absent `albumes` field yields an empty list; `success: false` is
    /// a data error.
    pub async fn fetch_entries(&self) -> Result<Vec<ScheduleEntry>, HistoryError> {
        let url = self.history_url();
        debug!(url = %url, "fetching album history");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(HistoryError::HttpStatus { status, body });
        }

        let body = response.text().await?;
        let parsed: HistoryResponse = serde_json::from_str(&body)?;

        if !parsed.success {
            let reason = parsed
                .error
                .or(parsed.message)
                .unwrap_or_else(|| "backend reported success: false".to_string());
            return Err(HistoryError::Data(reason));
        }

        if let Some(message) = &parsed.message {
            info!(message = %message, "backend note on album history");
        }
        if let Some(error) = &parsed.error {
            warn!(error = %error, "backend recovered from an error while listing albums");
        }

        let entries = parsed.entries.unwrap_or_default();
        debug!(count = entries.len(), total = ?parsed.total, "received album history");

        Ok(entries)
    }
}

#[async_trait]
impl EntrySource for HistoryClient {
    async fn fetch_entries(&self) -> Result<Vec<ScheduleEntry>, HistoryError> {
        HistoryClient::fetch_entries(self).await
    }
}
