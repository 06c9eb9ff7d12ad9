//! Async client for the Pulse analytics backend.
//!
//! Covers the endpoints the dashboard talks to: health, settings, keyword
//! groups, the record feed, and the asynchronous scrape trigger. Records come
//! back untyped ([`pulse_core::RawRecord`]); interpreting them is the job of
//! `pulse-analytics`.

pub mod client;
pub mod error;
pub mod types;

mod retry;

pub use client::PulseClient;
pub use error::ClientError;
pub use types::{HealthStatus, ScrapeAck, ScrapeKind, ScrapeRequest, Settings};
