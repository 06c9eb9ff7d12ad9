//! `scrape` handler: hand a search to the backend's scraper and return.

use anyhow::Context;
use chrono::NaiveDate;
use pulse_client::{ScrapeKind, ScrapeRequest, Settings};
use pulse_core::AppConfig;

use crate::data;

#[derive(Debug, Clone)]
pub(crate) struct ScrapeOptions {
    pub kind: ScrapeKind,
    pub query: String,
    pub count: u32,
    pub since: Option<NaiveDate>,
    pub comments: bool,
    pub comments_limit: u32,
}

/// Trigger a scrape job. Results appear in later `report` runs.
///
/// The token and sheet URL come from the environment when set, otherwise
/// from the backend's stored settings.
///
/// # Errors
///
/// Returns an error if the query is blank, no token is available, or the
/// backend refuses the job.
pub(crate) async fn run_scrape(config: &AppConfig, options: &ScrapeOptions) -> anyhow::Result<()> {
    let client = data::connect(config)?;
    let stored = if config.apify_token.is_some() && config.sheet_url.is_some() {
        Settings::default()
    } else {
        client.settings().await.context("failed to load stored settings")?
    };

    let request = build_request(config, &stored, options)?;
    let ack = client.trigger_scrape(&request).await?;

    println!(
        "{}",
        ack.message
            .as_deref()
            .unwrap_or("scrape started; refresh the report in a few minutes")
    );
    Ok(())
}

pub(crate) fn build_request(
    config: &AppConfig,
    stored: &Settings,
    options: &ScrapeOptions,
) -> anyhow::Result<ScrapeRequest> {
    let search_input = options.query.trim().to_string();
    if search_input.is_empty() {
        anyhow::bail!("--query must not be blank");
    }
    if options.count == 0 {
        anyhow::bail!("--count must be at least 1");
    }

    let apify_token = config
        .apify_token
        .clone()
        .filter(|t| !t.trim().is_empty())
        .or_else(|| Some(stored.apify_token.clone()).filter(|t| !t.trim().is_empty()))
        .context(
            "no scraper token configured; set APIFY_TOKEN or run `pulse settings set --apify-token`",
        )?;
    let sheet_url = config
        .sheet_url
        .clone()
        .unwrap_or_else(|| stored.sheet_url.clone());

    Ok(ScrapeRequest {
        scrape_type: options.kind,
        search_input,
        video_count: options.count,
        since_date: options.since.map(|d| d.format("%Y-%m-%d").to_string()),
        apify_token,
        sheet_url,
        scrape_comments: options.comments,
        comments_limit: if options.comments {
            options.comments_limit
        } else {
            0
        },
    })
}
