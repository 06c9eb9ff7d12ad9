//! Working-set aggregates: sentiment percentages, daily engagement series and
//! headline totals.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use pulse_core::{ContentRecord, Sentiment};
use serde::Serialize;

/// Share of records per sentiment label, as whole percentages.
///
/// Each value is rounded on its own, so the three may sum to 99 or 101.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub positive: u32,
    pub neutral: u32,
    pub negative: u32,
}

impl SentimentSummary {
    #[must_use]
    pub fn percentage(&self, sentiment: Sentiment) -> u32 {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Neutral => self.neutral,
            Sentiment::Negative => self.negative,
        }
    }
}

/// Compute the sentiment distribution of `records`.
///
/// An empty set yields all zeros.
#[must_use]
pub fn sentiment_summary(records: &[ContentRecord]) -> SentimentSummary {
    let total = records.len().max(1);
    let count = |s: Sentiment| records.iter().filter(|r| r.sentiment == s).count();

    SentimentSummary {
        positive: rounded_percent(count(Sentiment::Positive), total),
        neutral: rounded_percent(count(Sentiment::Neutral), total),
        negative: rounded_percent(count(Sentiment::Negative), total),
    }
}

/// `round(part / total * 100)` with halves rounded up, in integer arithmetic.
fn rounded_percent(part: usize, total: usize) -> u32 {
    let part = part as u128;
    let total = total as u128;
    let pct = (200 * part + total) / (2 * total);
    u32::try_from(pct).unwrap_or(u32::MAX)
}

/// Engagement summed over all records published on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// Bucket `records` by the date portion of `created_at` and sum engagement.
///
/// Records without a `created_at` are skipped. Buckets are ordered by calendar
/// date; date strings that cannot be parsed sort last, in the order they first
/// appeared.
#[must_use]
pub fn time_series(records: &[ContentRecord]) -> Vec<TimeSeriesPoint> {
    let mut points: Vec<TimeSeriesPoint> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let Some(date) = record.created_date() else {
            continue;
        };

        let slot = *index.entry(date).or_insert_with(|| {
            points.push(TimeSeriesPoint {
                date: date.to_string(),
                views: 0,
                likes: 0,
                comments: 0,
                shares: 0,
            });
            points.len() - 1
        });

        let point = &mut points[slot];
        point.views = point.views.saturating_add(record.metrics.views);
        point.likes = point.likes.saturating_add(record.metrics.likes);
        point.comments = point.comments.saturating_add(record.metrics.comments);
        point.shares = point.shares.saturating_add(record.metrics.shares);
    }

    // Stable: equal keys keep first-appearance order.
    points.sort_by_cached_key(|p| {
        let parsed = parse_calendar_date(&p.date);
        (parsed.is_none(), parsed)
    });
    points
}

/// Parse the date forms the backend and spreadsheet exports are known to emit.
fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d.%m.%Y", "%b %d %Y"];
    const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    let raw = raw.trim();
    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
    {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.date())
}

/// Headline numbers shown above the charts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EngagementTotals {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
    /// Mean sentiment score scaled to `0..=100`; `0.0` for an empty set.
    pub avg_sentiment_pct: f64,
}

impl EngagementTotals {
    #[must_use]
    pub fn from_records(records: &[ContentRecord]) -> Self {
        let mut totals = records.iter().fold(Self::default(), |mut acc, r| {
            acc.views = acc.views.saturating_add(r.metrics.views);
            acc.likes = acc.likes.saturating_add(r.metrics.likes);
            acc.comments = acc.comments.saturating_add(r.metrics.comments);
            acc.shares = acc.shares.saturating_add(r.metrics.shares);
            acc.saves = acc.saves.saturating_add(r.metrics.saves);
            acc
        });

        if !records.is_empty() {
            let score_sum: f64 = records.iter().map(|r| r.sentiment_score).sum();
            #[allow(clippy::cast_precision_loss)]
            let denom = records.len() as f64;
            totals.avg_sentiment_pct = score_sum / denom * 100.0;
        }
        totals
    }
}
