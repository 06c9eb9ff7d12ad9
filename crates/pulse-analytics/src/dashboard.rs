//! One full recomputation of every dashboard view.

use pulse_core::{ContentRecord, Group, RawRecord, ALL_DATA};
use serde::Serialize;

use crate::aggregate::{sentiment_summary, time_series, EngagementTotals, SentimentSummary, TimeSeriesPoint};
use crate::normalize::normalize_records;
use crate::pipeline::{filter_records, resolve_group};
use crate::rank::{top_contributors, top_hashtags, Contributor, HashtagCount, TOP_CONTRIBUTORS, TOP_HASHTAGS};
use crate::selection::Selection;

/// All UI state that influences a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardQuery {
    pub active_group: String,
    pub selection: Selection,
}

impl Default for DashboardQuery {
    fn default() -> Self {
        Self {
            active_group: ALL_DATA.to_string(),
            selection: Selection::default(),
        }
    }
}

impl DashboardQuery {
    #[must_use]
    pub fn for_group(active_group: &str) -> Self {
        Self {
            active_group: active_group.to_string(),
            ..Self::default()
        }
    }
}

/// Every derived view for one set of inputs.
///
/// Aggregates and rankings describe the working set; `detail_set` is what the
/// table, gallery and export show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Name of the view actually applied: the requested group, or `"All Data"`
    /// when the request did not resolve to a known group.
    pub active_group: String,
    pub working_set: Vec<ContentRecord>,
    pub detail_set: Vec<ContentRecord>,
    pub totals: EngagementTotals,
    pub sentiment: SentimentSummary,
    pub timeline: Vec<TimeSeriesPoint>,
    pub hashtags: Vec<HashtagCount>,
    pub contributors: Vec<Contributor>,
}

impl DashboardView {
    /// Recompute all views from normalized records.
    #[must_use]
    pub fn compute(records: &[ContentRecord], groups: &[Group], query: &DashboardQuery) -> Self {
        let active_group = resolve_group(groups, &query.active_group)
            .map_or_else(|| ALL_DATA.to_string(), |g| g.name.clone());

        let working_set = filter_records(records, groups, &query.active_group);
        let detail_set = query.selection.apply(&working_set);

        Self {
            active_group,
            totals: EngagementTotals::from_records(&working_set),
            sentiment: sentiment_summary(&working_set),
            timeline: time_series(&working_set),
            hashtags: top_hashtags(&working_set, TOP_HASHTAGS),
            contributors: top_contributors(&working_set, TOP_CONTRIBUTORS),
            detail_set,
            working_set,
        }
    }

    /// Normalize `raw` and recompute all views.
    #[must_use]
    pub fn from_raw(raw: &[RawRecord], groups: &[Group], query: &DashboardQuery) -> Self {
        Self::compute(&normalize_records(raw), groups, query)
    }
}
