//! Shared types for the YouTube API client.

use std::collections::HashMap;

/// Paging details for lists of resources.
///
/// See: <https://developers.google.com/youtube/v3/docs/pageInfo>
#[derive(Debug, serde::Deserialize)]
pub struct PageInfo {
    /// The total number of results in the result set.
    #[serde(rename = "totalResults", default)]
    pub total_results: u64,
}

/// The counts fetched for one result in the follow-up lookup.
///
/// Only the counts relevant to the result's kind are filled in; the rest stay zero.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub views: u64,
    pub concurrent_viewers: u64,
    pub subscribers: u64,
    pub videos: u64,
}

/// Metrics keyed by resource id.
pub type MetricsById = HashMap<String, Metrics>;

/// Parses one of the API's numbers-as-strings, treating anything unusable as zero.
pub(crate) fn count(value: Option<&str>) -> u64 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}
