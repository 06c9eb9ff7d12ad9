//! Normalization from raw backend records to [`pulse_core::ContentRecord`].
//!
//! The backend relays spreadsheet rows, so any field may be missing, `null`,
//! a string where a number is expected, or the reverse. Every conversion here
//! degrades to a documented default instead of failing.

use pulse_core::{ContentRecord, Metrics, RawRecord, Sentiment};
use serde_json::Value;

const AVATAR_BASE_URL: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";
const PLACEHOLDER_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1518609878373-06d740f60d8b?w=300&h=400&fit=crop";
const UNKNOWN_AUTHOR: &str = "unknown";
const DEFAULT_SENTIMENT_SCORE: f64 = 0.5;

/// Normalizes a raw backend record into a [`ContentRecord`]. Never fails.
#[must_use]
pub fn normalize_record(raw: &RawRecord) -> ContentRecord {
    let handle = text(&raw.author)
        .map(|a| a.trim().to_string())
        .filter(|a| !a.is_empty());

    let author = match handle.as_deref() {
        Some(h) if h.starts_with('@') => h.to_string(),
        Some(h) => format!("@{h}"),
        None => format!("@{UNKNOWN_AUTHOR}"),
    };
    let avatar_seed = handle
        .as_deref()
        .map_or(UNKNOWN_AUTHOR, |h| h.trim_start_matches('@'));

    let sentiment = match &raw.sentiment {
        Value::String(s) => Sentiment::from_label(s).unwrap_or_default(),
        _ => Sentiment::default(),
    };

    ContentRecord {
        id: text(&raw.video_id).unwrap_or_default(),
        caption: text(&raw.caption).unwrap_or_default(),
        author,
        author_avatar: format!("{AVATAR_BASE_URL}{avatar_seed}"),
        metrics: Metrics {
            views: count(&raw.views),
            likes: count(&raw.likes),
            comments: count(&raw.comments),
            shares: count(&raw.shares),
            saves: count(&raw.saves),
        },
        sentiment,
        sentiment_score: score(&raw.sentiment_score),
        created_at: text(&raw.publish_date).unwrap_or_default(),
        hashtags: hashtags(&raw.hashtags),
        thumbnail_url: text(&raw.thumbnail_url)
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_THUMBNAIL.to_string()),
    }
}

/// Normalizes every record, preserving order.
#[must_use]
pub fn normalize_records(raw: &[RawRecord]) -> Vec<ContentRecord> {
    let records: Vec<ContentRecord> = raw.iter().map(normalize_record).collect();
    tracing::debug!(count = records.len(), "normalized raw records");
    records
}

/// Strings pass through; numbers are rendered as text. Anything else is absent.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Non-negative integer coercion: negatives clamp to 0, fractions truncate,
/// strings use their leading integer (`"12abc"` → 12), everything else is 0.
fn count(value: &Value) -> u64 {
    match value {
        Value::Number(n) => {
            if let Some(v) = n.as_u64() {
                v
            } else if n.as_i64().is_some() {
                0
            } else {
                n.as_f64().map_or(0, float_count)
            }
        }
        Value::String(s) => leading_integer(s),
        _ => 0,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn float_count(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 {
        // `as` saturates at u64::MAX.
        v.trunc() as u64
    } else {
        0
    }
}

fn leading_integer(raw: &str) -> u64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 || negative {
        return 0;
    }

    rest[..digits_len].parse::<u64>().unwrap_or(u64::MAX)
}

fn score(value: &Value) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed
        .filter(|v| v.is_finite())
        .map_or(DEFAULT_SENTIMENT_SCORE, |v| v.clamp(0.0, 1.0))
}

fn hashtags(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => s
            .split(',')
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}
