//! Wire types for the backend's JSON endpoints.

use pulse_core::Group;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `GET /api/health` response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub credentials_found: bool,
}

impl HealthStatus {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Stored backend settings (`GET /api/settings`).
#[derive(Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub sheet_url: String,
    #[serde(default)]
    pub apify_token: String,
    #[serde(default)]
    pub groups: Vec<Group>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("sheet_url", &self.sheet_url)
            .field(
                "apify_token",
                &if self.apify_token.is_empty() {
                    ""
                } else {
                    "[redacted]"
                },
            )
            .field("groups", &self.groups)
            .finish()
    }
}

/// `POST /api/settings` body. A `None` token leaves the stored one untouched.
#[derive(Debug, Serialize)]
pub(crate) struct SettingsUpdate<'a> {
    pub sheet_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apify_token: Option<&'a str>,
}

/// `POST /api/settings` response.
#[derive(Debug, Deserialize)]
pub(crate) struct SettingsUpdateResponse {
    pub config: Settings,
}

/// Response of both group mutation endpoints: the full updated list.
#[derive(Debug, Deserialize)]
pub(crate) struct GroupsResponse {
    #[serde(default)]
    pub groups: Vec<Group>,
}

/// `GET /api/data` response. Records are kept untyped on purpose.
#[derive(Debug, Deserialize)]
pub(crate) struct DataPayload {
    #[serde(default)]
    pub videos: Vec<Value>,
    #[serde(default)]
    pub error: Option<String>,
}

/// What the scraper should search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScrapeKind {
    Hashtag,
    Username,
    Keyword,
}

impl std::str::FromStr for ScrapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hashtag" => Ok(ScrapeKind::Hashtag),
            "username" | "user" => Ok(ScrapeKind::Username),
            "keyword" | "search" => Ok(ScrapeKind::Keyword),
            other => Err(format!(
                "unknown scrape kind '{other}'; expected hashtag, username, or keyword"
            )),
        }
    }
}

/// `POST /api/scrape/async` body.
#[derive(Clone, Serialize)]
pub struct ScrapeRequest {
    pub scrape_type: ScrapeKind,
    pub search_input: String,
    pub video_count: u32,
    /// Only videos published on or after this date (`YYYY-MM-DD`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since_date: Option<String>,
    pub apify_token: String,
    pub sheet_url: String,
    pub scrape_comments: bool,
    pub comments_limit: u32,
}

impl std::fmt::Debug for ScrapeRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScrapeRequest")
            .field("scrape_type", &self.scrape_type)
            .field("search_input", &self.search_input)
            .field("video_count", &self.video_count)
            .field("since_date", &self.since_date)
            .field("apify_token", &"[redacted]")
            .field("sheet_url", &self.sheet_url)
            .field("scrape_comments", &self.scrape_comments)
            .field("comments_limit", &self.comments_limit)
            .finish()
    }
}

/// Acknowledgement from the scrape trigger.
///
/// `success` only means the job was accepted, not that data has landed.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeAck {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrape_kind_parses_aliases() {
        assert_eq!("Hashtag".parse::<ScrapeKind>().unwrap(), ScrapeKind::Hashtag);
        assert_eq!("user".parse::<ScrapeKind>().unwrap(), ScrapeKind::Username);
        assert_eq!("search".parse::<ScrapeKind>().unwrap(), ScrapeKind::Keyword);
        assert!("video".parse::<ScrapeKind>().is_err());
    }

    #[test]
    fn scrape_request_serializes_wire_names() {
        let req = ScrapeRequest {
            scrape_type: ScrapeKind::Hashtag,
            search_input: "roadtrip".to_string(),
            video_count: 50,
            since_date: None,
            apify_token: "tok".to_string(),
            sheet_url: String::new(),
            scrape_comments: false,
            comments_limit: 0,
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["scrape_type"], "Hashtag");
        assert_eq!(value["video_count"], 50);
        assert!(value.get("since_date").is_none());
    }

    #[test]
    fn scrape_request_debug_redacts_token() {
        let req = ScrapeRequest {
            scrape_type: ScrapeKind::Keyword,
            search_input: "ev".to_string(),
            video_count: 10,
            since_date: Some("2026-01-01".to_string()),
            apify_token: "apify_api_secret".to_string(),
            sheet_url: String::new(),
            scrape_comments: true,
            comments_limit: 20,
        };
        assert!(!format!("{req:?}").contains("apify_api_secret"));
    }

    #[test]
    fn settings_tolerate_missing_fields() {
        let settings: Settings = serde_json::from_str("{}").unwrap();
        assert!(settings.sheet_url.is_empty());
        assert!(settings.groups.is_empty());
    }

    #[test]
    fn health_status_checks_label() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"healthy","credentials_found":true}"#).unwrap();
        assert!(health.is_healthy());
        assert!(health.credentials_found);
    }
}
