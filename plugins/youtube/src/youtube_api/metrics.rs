//! Extraction of per-result metrics from the batched follow-up lookup.

use crate::kind::{DetailEndpoint, DetailLookup};
use crate::youtube_api::types::MetricsById;
use crate::youtube_api::{channels, videos};

/// Extracts metrics keyed by id from a `videos.list` or `channels.list` payload.
///
/// The search itself already succeeded by the time this runs, so a payload without `items`
/// yields an empty map rather than an error. Counts that are missing or not numeric become zero.
pub fn parse_metrics(json: &serde_json::Value, lookup: &DetailLookup) -> MetricsById {
    let Some(items) = json.get("items").and_then(serde_json::Value::as_array) else {
        tracing::warn!(
            endpoint = lookup.endpoint.path(),
            "metrics response has no items; counts will show as 0"
        );
        return MetricsById::new();
    };

    match lookup.endpoint {
        DetailEndpoint::Videos => videos::collect_metrics(items),
        DetailEndpoint::Channels => channels::collect_metrics(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::{CHANNEL, LIVE, VIDEO};
    use crate::youtube_api::types::Metrics;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn video_views() {
        let payload = json!({
            "kind": "youtube#videoListResponse",
            "items": [
                { "id": "a", "statistics": { "viewCount": "1500", "likeCount": "10" } },
                { "id": "b", "statistics": { "viewCount": "lots" } },
                { "id": "c", "statistics": {} },
                { "id": "d" },
            ]
        });

        let metrics = parse_metrics(&payload, VIDEO.detail.as_ref().unwrap());
        assert_eq!(metrics.len(), 4);
        assert_eq!(metrics["a"].views, 1500);
        assert_eq!(metrics["b"].views, 0);
        assert_eq!(metrics["c"].views, 0);
        assert_eq!(metrics["d"], Metrics::default());
    }

    #[test]
    fn live_viewers() {
        let payload = json!({
            "items": [{
                "id": "a",
                "liveStreamingDetails": {
                    "actualStartTime": "2026-10-16T10:00:00Z",
                    "concurrentViewers": "4321"
                }
            }]
        });

        let metrics = parse_metrics(&payload, LIVE.detail.as_ref().unwrap());
        assert_eq!(metrics["a"].concurrent_viewers, 4321);
        assert_eq!(metrics["a"].views, 0);
    }

    #[test]
    fn channel_statistics() {
        let payload = json!({
            "kind": "youtube#channelListResponse",
            "items": [{
                "id": "UC1",
                "statistics": {
                    "viewCount": "2000000",
                    "subscriberCount": "15000",
                    "hiddenSubscriberCount": false,
                    "videoCount": "x"
                }
            }]
        });

        let metrics = parse_metrics(&payload, CHANNEL.detail.as_ref().unwrap());
        assert_eq!(
            metrics["UC1"],
            Metrics {
                views: 2_000_000,
                subscribers: 15_000,
                videos: 0,
                concurrent_viewers: 0,
            }
        );
    }

    #[test]
    fn missing_items_is_empty() {
        let lookup = VIDEO.detail.as_ref().unwrap();
        assert!(parse_metrics(&json!({}), lookup).is_empty());
        assert!(parse_metrics(&json!({ "items": null }), lookup).is_empty());
    }

    #[test]
    fn items_without_ids_are_ignored() {
        let payload = json!({ "items": [{ "statistics": { "viewCount": "5" } }, "junk"] });
        assert!(parse_metrics(&payload, VIDEO.detail.as_ref().unwrap()).is_empty());
    }
}
