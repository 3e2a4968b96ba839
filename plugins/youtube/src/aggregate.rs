//! Joins search summaries with their metrics into display records.

use crate::format::format_count;
use crate::kind::{KindProfile, render};
use crate::youtube_api::{Metrics, MetricsById, SearchResultSummary};

/// One row of output, ready for the launcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub action_url: String,
    /// Shown in place of the subtitle while the modifier key is held.
    pub secondary: Option<String>,
}

/// Builds one [`DisplayRecord`] per summary, in the summaries' order.
///
/// Summaries without metrics are rendered as if every count were zero. Summaries whose title is
/// blank are dropped.
pub fn aggregate(
    summaries: Vec<SearchResultSummary>,
    metrics: &MetricsById,
    profile: &KindProfile,
) -> Vec<DisplayRecord> {
    let mut records = Vec::with_capacity(summaries.len());
    for summary in summaries {
        if summary.title.trim().is_empty() {
            tracing::debug!(id = %summary.id, "dropping result without a title");
            continue;
        }

        let counts = metrics.get(&summary.id).copied().unwrap_or_else(|| {
            tracing::debug!(id = %summary.id, "no metrics for result; using zero");
            Metrics::default()
        });
        let lookup = |name: &str| placeholder(name, &summary, &counts);

        records.push(DisplayRecord {
            subtitle: render(profile.subtitle, lookup),
            action_url: render(profile.action_url, lookup),
            secondary: profile.secondary.map(|template| render(template, lookup)),
            title: summary.title.clone(),
            id: summary.id.clone(),
        });
    }
    records
}

fn placeholder(name: &str, summary: &SearchResultSummary, counts: &Metrics) -> Option<String> {
    Some(match name {
        "id" => summary.id.clone(),
        "title" => summary.title.clone(),
        "owner" => summary.owner_name.clone(),
        "elapsed" => summary.elapsed.clone(),
        "description" => summary.description.clone(),
        "views" => format_count(counts.views),
        "viewers" => format_count(counts.concurrent_viewers),
        "subscribers" => format_count(counts.subscribers),
        "videos" => format_count(counts.videos),
        _ => return None,
    })
}
