use thiserror::Error;

/// Errors returned by the backend client.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid backend URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Non-2xx response. `detail` carries the backend's `detail` message when present.
    #[error("unexpected HTTP status {status} from {url}: {detail}")]
    UnexpectedStatus {
        status: u16,
        url: String,
        detail: String,
    },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// 2xx response whose body reports an `error`.
    #[error("backend error: {0}")]
    Backend(String),

    /// The scrape job collaborator refused the request.
    #[error("scrape rejected: {0}")]
    ScrapeRejected(String),

    #[error(transparent)]
    InvalidGroup(#[from] pulse_core::CoreError),
}
