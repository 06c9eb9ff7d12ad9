//! Chart-driven cross-filter: working set → detail set.

use pulse_core::{ContentRecord, Sentiment};

/// Secondary filters set by clicking the sentiment or timeline charts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub sentiment: Option<Sentiment>,
    /// Compared against the full `created_at` value, not its date portion.
    pub date: Option<String>,
}

impl Selection {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.sentiment.is_some() || self.date.is_some()
    }

    pub fn clear(&mut self) {
        self.sentiment = None;
        self.date = None;
    }

    #[must_use]
    pub fn accepts(&self, record: &ContentRecord) -> bool {
        self.sentiment.is_none_or(|s| record.sentiment == s)
            && self.date.as_deref().is_none_or(|d| record.created_at == d)
    }

    #[must_use]
    pub fn apply(&self, working_set: &[ContentRecord]) -> Vec<ContentRecord> {
        if !self.is_active() {
            return working_set.to_vec();
        }
        working_set
            .iter()
            .filter(|r| self.accepts(r))
            .cloned()
            .collect()
    }
}

/// Narrow `working_set` to records matching every selection that is set.
#[must_use]
pub fn apply_selection(
    working_set: &[ContentRecord],
    sentiment: Option<Sentiment>,
    date: Option<&str>,
) -> Vec<ContentRecord> {
    Selection {
        sentiment,
        date: date.map(str::to_string),
    }
    .apply(working_set)
}

#[cfg(test)]
mod tests {
    use pulse_core::Metrics;

    use super::*;

    fn record(id: &str, sentiment: Sentiment, created_at: &str) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            caption: String::new(),
            author: "@someone".to_string(),
            author_avatar: String::new(),
            metrics: Metrics::default(),
            sentiment,
            sentiment_score: 0.5,
            created_at: created_at.to_string(),
            hashtags: vec![],
            thumbnail_url: String::new(),
        }
    }

    fn working_set() -> Vec<ContentRecord> {
        vec![
            record("1", Sentiment::Positive, "2026-02-05 10:00"),
            record("2", Sentiment::Negative, "2026-02-05 10:00"),
            record("3", Sentiment::Positive, "2026-02-05 22:00"),
            record("4", Sentiment::Positive, "2026-02-06 08:00"),
        ]
    }

    fn ids(records: &[ContentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn no_selection_returns_working_set() {
        let set = working_set();
        assert_eq!(apply_selection(&set, None, None), set);
    }

    #[test]
    fn sentiment_only() {
        let set = working_set();
        let out = apply_selection(&set, Some(Sentiment::Positive), None);
        assert_eq!(ids(&out), vec!["1", "3", "4"]);
    }

    #[test]
    fn date_is_compared_exactly_not_by_prefix() {
        let set = working_set();
        let out = apply_selection(&set, None, Some("2026-02-05 10:00"));
        assert_eq!(ids(&out), vec!["1", "2"]);
        assert!(apply_selection(&set, None, Some("2026-02-05")).is_empty());
    }

    #[test]
    fn sentiment_and_date_compose_with_and() {
        let set = working_set();
        let out = apply_selection(&set, Some(Sentiment::Positive), Some("2026-02-05 10:00"));
        assert_eq!(ids(&out), vec!["1"]);
    }

    #[test]
    fn clear_restores_full_working_set() {
        let set = working_set();
        let mut selection = Selection {
            sentiment: Some(Sentiment::Negative),
            date: Some("2026-02-06 08:00".to_string()),
        };
        assert!(selection.apply(&set).is_empty());
        selection.clear();
        assert!(!selection.is_active());
        assert_eq!(selection.apply(&set), set);
    }
}
