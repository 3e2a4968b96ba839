//! YouTube Videos API types and functionality.

use crate::youtube_api::types::{Metrics, MetricsById, count};
use serde::Deserialize;

/// A `video` resource represents a YouTube video.
///
/// Only the parts requested by the metrics lookup are modelled.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#resource>
#[derive(Debug, Deserialize)]
pub struct Video {
    /// The ID that YouTube uses to uniquely identify the video.
    pub id: String,
    /// Present when the request asked for `part=statistics`.
    pub statistics: Option<VideoStatistics>,
    /// Present for live and upcoming broadcasts when the request asked for
    /// `part=liveStreamingDetails`.
    #[serde(rename = "liveStreamingDetails")]
    pub live_streaming_details: Option<LiveStreamingDetails>,
}

/// Statistics about the video.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#statistics>
#[derive(Debug, Deserialize)]
pub struct VideoStatistics {
    /// The number of times the video has been viewed.
    #[serde(rename = "viewCount")]
    pub view_count: Option<String>,
}

/// Metadata about a live video broadcast.
///
/// See: <https://developers.google.com/youtube/v3/docs/videos#liveStreamingDetails>
#[derive(Debug, Deserialize)]
pub struct LiveStreamingDetails {
    /// The number of viewers currently watching the broadcast.
    ///
    /// Absent once the broadcast has ended, or if the owner hides the viewer count.
    #[serde(rename = "concurrentViewers")]
    pub concurrent_viewers: Option<String>,
}

impl Video {
    pub fn metrics(&self) -> Metrics {
        Metrics {
            views: count(
                self.statistics
                    .as_ref()
                    .and_then(|s| s.view_count.as_deref()),
            ),
            concurrent_viewers: count(
                self.live_streaming_details
                    .as_ref()
                    .and_then(|d| d.concurrent_viewers.as_deref()),
            ),
            ..Metrics::default()
        }
    }
}

/// Collects per-video metrics from the items of a `videos.list` response.
pub(crate) fn collect_metrics(items: &[serde_json::Value]) -> MetricsById {
    items
        .iter()
        .filter_map(|item| match Video::deserialize(item) {
            Ok(video) => Some((video.id.clone(), video.metrics())),
            Err(error) => {
                tracing::debug!(%error, "skipping malformed video resource");
                None
            }
        })
        .collect()
}
