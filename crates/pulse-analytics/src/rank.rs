//! Leaderboards derived from the working set.
//!
//! Both rankings sort with a stable sort over first-appearance order, so ties
//! never reorder between passes.

use std::collections::{HashMap, HashSet};

use pulse_core::ContentRecord;
use serde::Serialize;

pub const TOP_HASHTAGS: usize = 15;
pub const TOP_CONTRIBUTORS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashtagCount {
    pub tag: String,
    /// Number of records carrying the tag (a record counts once).
    pub count: usize,
}

/// Most frequent hashtags, highest count first, at most `limit` entries.
#[must_use]
pub fn top_hashtags(records: &[ContentRecord], limit: usize) -> Vec<HashtagCount> {
    let mut ranked: Vec<HashtagCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let mut seen_in_record = HashSet::new();
        for tag in &record.hashtags {
            if !seen_in_record.insert(tag.as_str()) {
                continue;
            }
            let slot = *index.entry(tag.as_str()).or_insert_with(|| {
                ranked.push(HashtagCount {
                    tag: tag.clone(),
                    count: 0,
                });
                ranked.len() - 1
            });
            ranked[slot].count += 1;
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contributor {
    pub author: String,
    pub views: u64,
    pub record_count: usize,
    /// Avatar of the author's first record in the working set.
    pub avatar: String,
}

/// Authors with the most summed views, highest first, at most `limit` entries.
#[must_use]
pub fn top_contributors(records: &[ContentRecord], limit: usize) -> Vec<Contributor> {
    let mut ranked: Vec<Contributor> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        let slot = *index.entry(record.author.as_str()).or_insert_with(|| {
            ranked.push(Contributor {
                author: record.author.clone(),
                views: 0,
                record_count: 0,
                avatar: record.author_avatar.clone(),
            });
            ranked.len() - 1
        });
        let entry = &mut ranked[slot];
        entry.views = entry.views.saturating_add(record.metrics.views);
        entry.record_count += 1;
    }

    ranked.sort_by(|a, b| b.views.cmp(&a.views));
    ranked.truncate(limit);
    ranked
}
