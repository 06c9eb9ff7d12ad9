use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::CoreError;

/// Sentiment label attached to a piece of content by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Recognize one of the three labels, ignoring surrounding whitespace and case.
    #[must_use]
    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Sentiment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sentiment::from_label(s).ok_or_else(|| CoreError::InvalidSentiment(s.to_string()))
    }
}

/// Engagement counters for one record. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metrics {
    pub views: u64,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
    pub saves: u64,
}

/// One analyzed piece of content, after normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Opaque, stable identifier from the backend (`video_id`).
    pub id: String,
    pub caption: String,
    /// Display handle, always prefixed with `@`.
    pub author: String,
    pub author_avatar: String,
    pub metrics: Metrics,
    pub sentiment: Sentiment,
    /// Score in `[0.0, 1.0]`.
    pub sentiment_score: f64,
    /// Verbatim publish timestamp, e.g. `"2026-02-05 10:00:00"`. Empty when unknown.
    pub created_at: String,
    /// Lowercase tags in source order.
    pub hashtags: Vec<String>,
    pub thumbnail_url: String,
}

impl ContentRecord {
    /// Date portion of `created_at`: the text before the first space.
    ///
    /// Returns `None` when `created_at` is empty.
    #[must_use]
    pub fn created_date(&self) -> Option<&str> {
        if self.created_at.is_empty() {
            return None;
        }
        Some(
            self.created_at
                .split_once(' ')
                .map_or(self.created_at.as_str(), |(date, _)| date),
        )
    }

    /// Lowercased caption followed by the space-joined hashtags.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.caption, self.hashtags.join(" ")).to_lowercase()
    }

    #[must_use]
    pub fn has_hashtag(&self, tag: &str) -> bool {
        self.hashtags.iter().any(|t| t == tag)
    }
}

/// A record exactly as the backend sends it.
///
/// Every field is optional and may hold any JSON type; deserializing any JSON
/// object into this shape cannot fail. Interpretation happens in the
/// normalizer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub video_id: Value,
    pub caption: Value,
    pub author: Value,
    pub views: Value,
    pub likes: Value,
    pub comments: Value,
    pub shares: Value,
    pub saves: Value,
    pub sentiment: Value,
    pub sentiment_score: Value,
    pub publish_date: Value,
    pub hashtags: Value,
    pub thumbnail_url: Value,
}

impl From<Value> for RawRecord {
    /// Non-object values become an all-null record.
    fn from(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            RawRecord::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record_created_at(created_at: &str) -> ContentRecord {
        ContentRecord {
            id: "1".to_string(),
            caption: "Morning Run".to_string(),
            author: "@runner".to_string(),
            author_avatar: String::new(),
            metrics: Metrics::default(),
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.5,
            created_at: created_at.to_string(),
            hashtags: vec!["fitness".to_string(), "5k".to_string()],
            thumbnail_url: String::new(),
        }
    }

    #[test]
    fn sentiment_from_label_is_case_insensitive() {
        assert_eq!(Sentiment::from_label(" Positive "), Some(Sentiment::Positive));
        assert_eq!(Sentiment::from_label("NEGATIVE"), Some(Sentiment::Negative));
        assert_eq!(Sentiment::from_label("mixed"), None);
    }

    #[test]
    fn sentiment_from_str_reports_bad_input() {
        let err = "angry".parse::<Sentiment>().unwrap_err();
        assert_eq!(err, CoreError::InvalidSentiment("angry".to_string()));
    }

    #[test]
    fn sentiment_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Sentiment::Negative).unwrap(), "\"negative\"");
    }

    #[test]
    fn created_date_takes_text_before_first_space() {
        let record = record_created_at("2026-02-05 10:00:00");
        assert_eq!(record.created_date(), Some("2026-02-05"));
    }

    #[test]
    fn created_date_without_time_is_whole_value() {
        let record = record_created_at("2026-02-05");
        assert_eq!(record.created_date(), Some("2026-02-05"));
    }

    #[test]
    fn created_date_empty_is_none() {
        assert_eq!(record_created_at("").created_date(), None);
    }

    #[test]
    fn search_text_joins_caption_and_tags_lowercased() {
        let record = record_created_at("");
        assert_eq!(record.search_text(), "morning run fitness 5k");
    }

    #[test]
    fn raw_record_tolerates_unknown_and_missing_fields() {
        let raw = RawRecord::from(json!({ "views": "12", "extra": [1, 2] }));
        assert_eq!(raw.views, json!("12"));
        assert_eq!(raw.caption, Value::Null);
    }

    #[test]
    fn raw_record_from_non_object_is_empty() {
        assert_eq!(RawRecord::from(json!("not a record")), RawRecord::default());
        assert_eq!(RawRecord::from(json!(null)), RawRecord::default());
    }
}
