//! Client-side analytics pipeline for Pulse.
//!
//! Turns raw backend records plus the user's keyword groups into the views the
//! dashboard renders: a filtered working set, sentiment percentages, a daily
//! engagement series, hashtag and contributor leaderboards, and the detail set
//! narrowed by chart selections. Everything here is pure and synchronous; the
//! same inputs always produce the same outputs.

pub mod aggregate;
pub mod dashboard;
pub mod export;
pub mod matcher;
pub mod normalize;
pub mod pipeline;
pub mod rank;
pub mod selection;
pub mod session;

pub use aggregate::{sentiment_summary, time_series, EngagementTotals, SentimentSummary, TimeSeriesPoint};
pub use dashboard::{DashboardQuery, DashboardView};
pub use export::{export_file_name, to_csv, CSV_HEADERS};
pub use matcher::{matches, KeywordMatcher, RecordMatcher};
pub use normalize::{normalize_record, normalize_records};
pub use pipeline::{filter_records, filter_with, resolve_group};
pub use rank::{top_contributors, top_hashtags, Contributor, HashtagCount, TOP_CONTRIBUTORS, TOP_HASHTAGS};
pub use selection::{apply_selection, Selection};
pub use session::DashboardSession;
