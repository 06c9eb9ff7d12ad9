//! `report` and `export` handlers: one dashboard pass, printed or written.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::Utc;
use pulse_analytics::{export_file_name, to_csv, DashboardSession, DashboardView};
use pulse_core::{Sentiment, ALL_DATA};

use crate::data::Snapshot;
use crate::ViewArgs;

/// Run one pass over `snapshot` with the group and selection from `args`.
///
/// An unknown group falls back to all data with a notice on stderr.
pub(crate) fn build_view(snapshot: &Snapshot, args: &ViewArgs) -> DashboardView {
    let mut session = DashboardSession::new();
    session.set_active_group(args.group.as_deref().unwrap_or(ALL_DATA));
    session.select_sentiment(args.sentiment);
    session.select_date(args.date.clone());

    if session.sync_groups(&snapshot.groups) {
        eprintln!(
            "group '{}' not found; showing {ALL_DATA}",
            args.group.as_deref().unwrap_or_default()
        );
    }

    DashboardView::from_raw(&snapshot.raw, &snapshot.groups, session.query())
}

/// Print the dashboard metrics for the requested view.
pub(crate) fn run_report(snapshot: &Snapshot, args: &ViewArgs) {
    let view = build_view(snapshot, args);
    print!("{}", render_report(&view));
}

/// Write the detail set as CSV to `output`, or to the default export name.
///
/// # Errors
///
/// Returns an error if the detail set is empty or the file cannot be written.
pub(crate) fn run_export(
    snapshot: &Snapshot,
    args: &ViewArgs,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let view = build_view(snapshot, args);
    if view.detail_set.is_empty() {
        anyhow::bail!("no data to export");
    }

    let path = output.map_or_else(
        || PathBuf::from(export_file_name(&view.active_group, Utc::now().date_naive())),
        Path::to_path_buf,
    );
    std::fs::write(&path, to_csv(&view.detail_set))
        .with_context(|| format!("failed to write {}", path.display()))?;

    tracing::info!(rows = view.detail_set.len(), path = %path.display(), "export written");
    println!("exported {} records to {}", view.detail_set.len(), path.display());
    Ok(())
}

/// Plain-text rendering of a dashboard view.
pub(crate) fn render_report(view: &DashboardView) -> String {
    let mut out = String::new();
    let t = &view.totals;

    // Writing to a String cannot fail.
    let _ = writeln!(out, "Group: {}", view.active_group);
    let _ = writeln!(out, "Records: {}", view.working_set.len());
    let _ = writeln!(
        out,
        "Views {}  Likes {}  Comments {}  Shares {}  Saves {}",
        t.views, t.likes, t.comments, t.shares, t.saves
    );
    let _ = writeln!(out, "Avg sentiment: {:.1}%", t.avg_sentiment_pct);

    out.push_str("\nSENTIMENT\n");
    for sentiment in Sentiment::ALL {
        let _ = writeln!(
            out,
            "{:<10}{:>4}%",
            sentiment.as_str(),
            view.sentiment.percentage(sentiment)
        );
    }

    if !view.timeline.is_empty() {
        out.push_str("\nTIMELINE\n");
        let _ = writeln!(
            out,
            "{:<12}{:>12}{:>10}{:>10}{:>10}",
            "DATE", "VIEWS", "LIKES", "COMMENTS", "SHARES"
        );
        for point in &view.timeline {
            let _ = writeln!(
                out,
                "{:<12}{:>12}{:>10}{:>10}{:>10}",
                point.date, point.views, point.likes, point.comments, point.shares
            );
        }
    }

    if !view.hashtags.is_empty() {
        out.push_str("\nTOP HASHTAGS\n");
        for h in &view.hashtags {
            let _ = writeln!(out, "#{:<24}{:>6}", h.tag, h.count);
        }
    }

    if !view.contributors.is_empty() {
        out.push_str("\nTOP CONTRIBUTORS\n");
        for c in &view.contributors {
            let _ = writeln!(
                out,
                "{:<24}{:>12} views{:>6} posts",
                c.author, c.views, c.record_count
            );
        }
    }

    if view.detail_set.len() != view.working_set.len() {
        let _ = writeln!(
            out,
            "\nSelection matches {} of {} records",
            view.detail_set.len(),
            view.working_set.len()
        );
    }

    out
}
