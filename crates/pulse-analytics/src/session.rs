//! Mutable UI state between passes.

use pulse_core::{Group, Sentiment, ALL_DATA};

use crate::dashboard::DashboardQuery;

/// Holds the active group and chart selections across user actions.
///
/// The pure pipeline never sees this type, only the [`DashboardQuery`]
/// snapshot it hands out.
#[derive(Debug, Clone, Default)]
pub struct DashboardSession {
    query: DashboardQuery,
}

impl DashboardSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &DashboardQuery {
        &self.query
    }

    #[must_use]
    pub fn active_group(&self) -> &str {
        &self.query.active_group
    }

    pub fn set_active_group(&mut self, name: &str) {
        self.query.active_group = name.to_string();
    }

    pub fn select_sentiment(&mut self, sentiment: Option<Sentiment>) {
        self.query.selection.sentiment = sentiment;
    }

    pub fn select_date(&mut self, date: Option<String>) {
        self.query.selection.date = date;
    }

    pub fn clear_selection(&mut self) {
        self.query.selection.clear();
    }

    /// Reconcile with a freshly loaded group list.
    ///
    /// Falls back to `"All Data"` when the active group no longer exists.
    /// Returns `true` if the active group was reset.
    pub fn sync_groups(&mut self, groups: &[Group]) -> bool {
        if self.query.active_group == ALL_DATA
            || groups.iter().any(|g| g.name == self.query.active_group)
        {
            return false;
        }
        tracing::info!(
            group = %self.query.active_group,
            "active group was removed; switching to all data"
        );
        self.query.active_group = ALL_DATA.to_string();
        true
    }
}
