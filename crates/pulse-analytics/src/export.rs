//! CSV rendering of the detail set.
//!
//! Only the caption is quoted. Hashtags are joined with `", "` and left
//! unquoted, which matches the export format downstream spreadsheets already
//! ingest.

use chrono::NaiveDate;
use pulse_core::ContentRecord;

pub const CSV_HEADERS: [&str; 10] = [
    "ID", "Author", "Caption", "Views", "Likes", "Comments", "Shares", "Sentiment", "Date",
    "Hashtags",
];

/// Render `records` as CSV: a header row, then one row per record, joined by `\n`.
#[must_use]
pub fn to_csv(records: &[ContentRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    for r in records {
        let row = [
            r.id.clone(),
            r.author.clone(),
            quote(&r.caption),
            r.metrics.views.to_string(),
            r.metrics.likes.to_string(),
            r.metrics.comments.to_string(),
            r.metrics.shares.to_string(),
            r.sentiment.to_string(),
            r.created_at.clone(),
            r.hashtags.join(", "),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// File name for an export of `active_group` taken on `date`.
///
/// Whitespace runs in the group name collapse to a single `_`.
#[must_use]
pub fn export_file_name(active_group: &str, date: NaiveDate) -> String {
    let mut slug = String::with_capacity(active_group.len());
    let mut in_whitespace = false;
    for c in active_group.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('_');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    format!("pulse_export_{slug}_{}.csv", date.format("%Y-%m-%d"))
}
