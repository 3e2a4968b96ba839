//! YouTube Channels API types and functionality.

use crate::youtube_api::types::{Metrics, MetricsById, count};
use serde::Deserialize;

/// A `channel` resource contains information about a YouTube channel.
///
/// Only the statistics part is modelled; everything else the search snippet already provides.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#resource>
#[derive(Debug, Deserialize)]
pub struct Channel {
    /// The ID that YouTube uses to uniquely identify the channel.
    pub id: String,
    pub statistics: Option<ChannelStatistics>,
}

/// Statistics for the channel.
///
/// See: <https://developers.google.com/youtube/v3/docs/channels#statistics>
#[derive(Debug, Deserialize)]
pub struct ChannelStatistics {
    /// The number of times the channel has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
    /// The number of subscribers that the channel has, rounded down to three significant figures.
    #[serde(rename = "subscriberCount")]
    pub subscriber_count: Option<String>,
    /// The number of public videos uploaded to the channel.
    #[serde(rename = "videoCount")]
    pub video_count: Option<String>,
}

impl Channel {
    pub fn metrics(&self) -> Metrics {
        let Some(stats) = &self.statistics else {
            return Metrics::default();
        };
        Metrics {
            views: count(stats.view_count.as_deref()),
            subscribers: count(stats.subscriber_count.as_deref()),
            videos: count(stats.video_count.as_deref()),
            ..Metrics::default()
        }
    }
}

/// Collects per-channel metrics from the items of a `channels.list` response.
pub(crate) fn collect_metrics(items: &[serde_json::Value]) -> MetricsById {
    items
        .iter()
        .filter_map(|item| match Channel::deserialize(item) {
            Ok(channel) => Some((channel.id.clone(), channel.metrics())),
            Err(error) => {
                tracing::debug!(%error, "skipping malformed channel resource");
                None
            }
        })
        .collect()
}
