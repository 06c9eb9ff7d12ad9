//! HTTP client for the Pulse backend REST API.
//!
//! Wraps `reqwest` with typed responses and error mapping. Reads are retried
//! on transient failures; writes (settings, groups, scrape trigger) are sent
//! once.

use std::time::Duration;

use pulse_core::{AppConfig, Group, RawRecord};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ClientError;
use crate::retry::retry_with_backoff;
use crate::types::{
    DataPayload, GroupsResponse, HealthStatus, ScrapeAck, ScrapeRequest, Settings, SettingsUpdate,
    SettingsUpdateResponse,
};

/// Longest error body excerpt kept in [`ClientError::UnexpectedStatus`].
const MAX_DETAIL_CHARS: usize = 200;

/// Client for the backend's `/api/*` endpoints.
///
/// Use [`PulseClient::from_config`] in the binary or
/// [`PulseClient::with_base_url`] to point at a mock server in tests.
pub struct PulseClient {
    client: Client,
    base_url: Url,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl PulseClient {
    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ClientError::InvalidBaseUrl`] if `api_url` does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, ClientError> {
        Self::with_base_url(
            &config.api_url,
            config.request_timeout_secs,
            &config.user_agent,
            config.max_retries,
            config.retry_backoff_base_ms,
        )
    }

    /// Creates a client with an explicit base URL and retry policy.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the `reqwest::Client` cannot be built,
    /// or [`ClientError::InvalidBaseUrl`] if `base_url` is not an absolute
    /// http(s) URL.
    pub fn with_base_url(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_ms: u64,
    ) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Trailing slash so a path prefix such as `/pulse` is kept when
        // endpoint segments are appended.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() || !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: "expected an absolute http(s) URL".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
            max_retries,
            backoff_base_ms,
        })
    }

    /// Checks backend liveness (`GET /api/health`).
    ///
    /// # Errors
    ///
    /// - [`ClientError::Http`] on network failure after retries.
    /// - [`ClientError::UnexpectedStatus`] on a non-2xx status.
    /// - [`ClientError::Deserialize`] if the body is not a health document.
    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.endpoint(&["api", "health"])?;
        self.get_json(url, "health").await
    }

    /// Fetches stored settings, including the keyword groups (`GET /api/settings`).
    ///
    /// # Errors
    ///
    /// Same as [`PulseClient::health`].
    pub async fn settings(&self) -> Result<Settings, ClientError> {
        let url = self.endpoint(&["api", "settings"])?;
        self.get_json(url, "settings").await
    }

    /// Saves the sheet URL and, when given, a new scraper token.
    ///
    /// # Errors
    ///
    /// - [`ClientError::UnexpectedStatus`] with the backend's `detail` when
    ///   the save is refused.
    /// - [`ClientError::Http`] / [`ClientError::Deserialize`] as usual.
    pub async fn update_settings(
        &self,
        sheet_url: &str,
        apify_token: Option<&str>,
    ) -> Result<Settings, ClientError> {
        let url = self.endpoint(&["api", "settings"])?;
        let body = SettingsUpdate {
            sheet_url,
            apify_token,
        };
        let response = self.client.post(url).json(&body).send().await?;
        let saved: SettingsUpdateResponse = read_json(response, "update_settings").await?;
        tracing::info!(sheet_url, "settings saved");
        Ok(saved.config)
    }

    /// Creates or replaces a keyword group. Returns the full updated list.
    ///
    /// # Errors
    ///
    /// - [`ClientError::InvalidGroup`] if the group fails validation; nothing
    ///   is sent.
    /// - [`ClientError::Http`] / [`ClientError::UnexpectedStatus`] /
    ///   [`ClientError::Deserialize`] as usual.
    pub async fn add_group(&self, group: &Group) -> Result<Vec<Group>, ClientError> {
        group.validate()?;
        let url = self.endpoint(&["api", "groups"])?;
        let response = self.client.post(url).json(group).send().await?;
        let updated: GroupsResponse = read_json(response, "add_group").await?;
        tracing::info!(group = %group.name, total = updated.groups.len(), "group saved");
        Ok(updated.groups)
    }

    /// Deletes a keyword group by name. Returns the full updated list.
    ///
    /// # Errors
    ///
    /// [`ClientError::Http`] / [`ClientError::UnexpectedStatus`] /
    /// [`ClientError::Deserialize`].
    pub async fn delete_group(&self, name: &str) -> Result<Vec<Group>, ClientError> {
        let url = self.endpoint(&["api", "groups", name])?;
        let response = self.client.delete(url).send().await?;
        let updated: GroupsResponse = read_json(response, "delete_group").await?;
        tracing::info!(group = name, total = updated.groups.len(), "group removed");
        Ok(updated.groups)
    }

    /// Fetches the full record snapshot (`GET /api/data`).
    ///
    /// Entries are returned untyped; non-object entries become empty records.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Backend`] if the body carries an `error` field (e.g.
    ///   the sheet could not be read).
    /// - [`ClientError::Http`] / [`ClientError::UnexpectedStatus`] /
    ///   [`ClientError::Deserialize`] as usual.
    pub async fn fetch_records(&self) -> Result<Vec<RawRecord>, ClientError> {
        let url = self.endpoint(&["api", "data"])?;
        let payload: DataPayload = self.get_json(url, "data").await?;

        if let Some(error) = payload.error {
            return Err(ClientError::Backend(error));
        }

        let records: Vec<RawRecord> = payload.videos.into_iter().map(RawRecord::from).collect();
        tracing::debug!(count = records.len(), "fetched records");
        Ok(records)
    }

    /// Asks the backend to start a scrape job.
    ///
    /// Returns as soon as the job is accepted; results land later and show up
    /// in a subsequent [`PulseClient::fetch_records`].
    ///
    /// # Errors
    ///
    /// - [`ClientError::ScrapeRejected`] if the backend answers `success: false`.
    /// - [`ClientError::Http`] / [`ClientError::UnexpectedStatus`] /
    ///   [`ClientError::Deserialize`] as usual.
    pub async fn trigger_scrape(&self, request: &ScrapeRequest) -> Result<ScrapeAck, ClientError> {
        let url = self.endpoint(&["api", "scrape", "async"])?;
        let response = self.client.post(url).json(request).send().await?;
        let ack: ScrapeAck = read_json(response, "scrape").await?;

        if !ack.success {
            let reason = ack
                .error
                .or(ack.message)
                .unwrap_or_else(|| "scraping failed".to_owned());
            return Err(ClientError::ScrapeRejected(reason));
        }

        tracing::info!(
            kind = ?request.scrape_type,
            input = %request.search_input,
            count = request.video_count,
            "scrape job accepted"
        );
        Ok(ack)
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot be a base".to_owned(),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        context: &str,
    ) -> Result<T, ClientError> {
        retry_with_backoff(self.max_retries, self.backoff_base_ms, || {
            let request = self.client.get(url.clone());
            async move {
                let response = request.send().await?;
                read_json(response, context).await
            }
        })
        .await
    }
}

/// Checks the status and decodes the body, keeping the backend's error detail.
async fn read_json<T: DeserializeOwned>(response: Response, context: &str) -> Result<T, ClientError> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            url,
            detail: error_detail(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| ClientError::Deserialize {
        context: context.to_owned(),
        source: e,
    })
}

/// FastAPI-style `{"detail": "..."}` message, or a trimmed excerpt of the body.
fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_owned))
        .unwrap_or_else(|| body.trim().chars().take(MAX_DETAIL_CHARS).collect())
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
