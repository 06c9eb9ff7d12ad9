//! Where the CLI gets its records and groups from.
//!
//! Either the live backend, or a local JSON snapshot paired with an optional
//! YAML groups file for offline runs.

use std::path::Path;

use anyhow::Context;
use pulse_client::PulseClient;
use pulse_core::{AppConfig, Group, RawRecord};
use serde_json::Value;

/// Raw records plus the groups to filter them with.
#[derive(Debug, Default)]
pub(crate) struct Snapshot {
    pub raw: Vec<RawRecord>,
    pub groups: Vec<Group>,
}

/// Build a backend client from configuration.
///
/// # Errors
///
/// Returns an error if `PULSE_API_URL` is not a usable base URL.
pub(crate) fn connect(config: &AppConfig) -> anyhow::Result<PulseClient> {
    PulseClient::from_config(config)
        .with_context(|| format!("failed to create client for {}", config.api_url))
}

/// Load a snapshot from `input` when given, otherwise from the backend.
///
/// # Errors
///
/// Returns an error if the file or backend cannot be read, or the payload is
/// not a record list.
pub(crate) async fn load(config: &AppConfig, input: Option<&Path>) -> anyhow::Result<Snapshot> {
    match input {
        Some(path) => load_file(config, path),
        None => load_backend(config).await,
    }
}

fn load_file(config: &AppConfig, path: &Path) -> anyhow::Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let raw = parse_snapshot(&text)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;

    let groups = match &config.groups_path {
        Some(groups_path) => pulse_core::load_groups(groups_path)?.groups,
        None => Vec::new(),
    };

    tracing::debug!(
        records = raw.len(),
        groups = groups.len(),
        path = %path.display(),
        "loaded local snapshot"
    );
    Ok(Snapshot { raw, groups })
}

async fn load_backend(config: &AppConfig) -> anyhow::Result<Snapshot> {
    let client = connect(config)?;
    let (settings, raw) = tokio::try_join!(client.settings(), client.fetch_records())
        .with_context(|| format!("failed to load data from {}", config.api_url))?;

    Ok(Snapshot {
        raw,
        groups: settings.groups,
    })
}

/// Accepts `{"videos": [...]}` as served by `/api/data`, or a bare array.
pub(crate) fn parse_snapshot(text: &str) -> anyhow::Result<Vec<RawRecord>> {
    let value: Value = serde_json::from_str(text)?;
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Object(mut map) => {
            if let Some(Value::String(error)) = map.get("error") {
                anyhow::bail!("snapshot carries a backend error: {error}");
            }
            match map.remove("videos") {
                Some(Value::Array(entries)) => entries,
                _ => anyhow::bail!("expected a \"videos\" array"),
            }
        }
        _ => anyhow::bail!("expected a JSON array or an object with \"videos\""),
    };
    Ok(entries.into_iter().map(RawRecord::from).collect())
}
