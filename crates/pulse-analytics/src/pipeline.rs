//! Group filter pass: full record list → working set.

use pulse_core::{ContentRecord, Group, ALL_DATA};

use crate::matcher::{KeywordMatcher, RecordMatcher};

/// Look up the group a view name refers to.
///
/// Returns `None` for `"All Data"` and for names no group carries; both mean
/// "unfiltered". When several groups share a name the first wins.
#[must_use]
pub fn resolve_group<'a>(groups: &'a [Group], active_group: &str) -> Option<&'a Group> {
    if active_group == ALL_DATA {
        return None;
    }
    groups.iter().find(|g| g.name == active_group)
}

/// Produce the working set for `active_group`, preserving record order.
///
/// Inputs are never modified; the result is a fresh list.
#[must_use]
pub fn filter_records(
    records: &[ContentRecord],
    groups: &[Group],
    active_group: &str,
) -> Vec<ContentRecord> {
    let Some(group) = resolve_group(groups, active_group) else {
        if active_group != ALL_DATA {
            tracing::debug!(
                group = active_group,
                "active group not found; showing all data"
            );
        }
        return records.to_vec();
    };

    let working_set = filter_with(records, &KeywordMatcher::new(group));
    tracing::debug!(
        group = %group.name,
        kept = working_set.len(),
        total = records.len(),
        "applied group filter"
    );
    working_set
}

/// Keep the records accepted by `matcher`, preserving order.
#[must_use]
pub fn filter_with<M>(records: &[ContentRecord], matcher: &M) -> Vec<ContentRecord>
where
    M: RecordMatcher + ?Sized,
{
    records
        .iter()
        .filter(|r| matcher.matches(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use pulse_core::{Metrics, Sentiment};

    use super::*;

    fn record(id: &str, caption: &str) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            caption: caption.to_string(),
            author: "@someone".to_string(),
            author_avatar: String::new(),
            metrics: Metrics::default(),
            sentiment: Sentiment::Neutral,
            sentiment_score: 0.5,
            created_at: String::new(),
            hashtags: vec![],
            thumbnail_url: String::new(),
        }
    }

    fn cars_group() -> Group {
        Group {
            name: "Cars".to_string(),
            keywords: vec!["car".to_string()],
            exclude_keywords: vec![],
            exact_match: true,
        }
    }

    fn ids(records: &[ContentRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn all_data_returns_everything() {
        let records = vec![record("1", "car"), record("2", "boat")];
        let out = filter_records(&records, &[cars_group()], ALL_DATA);
        assert_eq!(out, records);
    }

    #[test]
    fn unknown_group_falls_back_to_everything() {
        let records = vec![record("1", "car"), record("2", "boat")];
        let out = filter_records(&records, &[cars_group()], "Boats");
        assert_eq!(out, records);
    }

    #[test]
    fn group_filter_preserves_order() {
        let records = vec![
            record("1", "red car"),
            record("2", "boat"),
            record("3", "blue car"),
            record("4", "carpet"),
        ];
        let out = filter_records(&records, &[cars_group()], "Cars");
        assert_eq!(ids(&out), vec!["1", "3"]);
    }

    #[test]
    fn resolve_group_prefers_first_duplicate() {
        let mut second = cars_group();
        second.keywords = vec!["boat".to_string()];
        let groups = vec![cars_group(), second];
        let resolved = resolve_group(&groups, "Cars").unwrap();
        assert_eq!(resolved.keywords, vec!["car"]);
    }

    #[test]
    fn resolve_group_all_data_is_none_even_if_a_group_uses_the_name() {
        let mut shadow = cars_group();
        shadow.name = ALL_DATA.to_string();
        assert!(resolve_group(&[shadow], ALL_DATA).is_none());
    }

    #[test]
    fn filter_with_accepts_custom_matcher() {
        struct HasViews;
        impl RecordMatcher for HasViews {
            fn matches(&self, record: &ContentRecord) -> bool {
                record.metrics.views > 0
            }
        }

        let mut popular = record("1", "x");
        popular.metrics.views = 10;
        let records = vec![popular, record("2", "y")];
        assert_eq!(ids(&filter_with(&records, &HasViews)), vec!["1"]);
    }
}
