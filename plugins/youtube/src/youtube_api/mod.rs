//! A small client for the public search surface of the YouTube Data API v3.
//!
//! # Two-call search
//!
//! A search costs exactly two requests, regardless of how many results come back:
//!
//! 1. [`YouTubeClient::search`] calls `search.list`, which returns a lightweight *snippet* per
//!    result (id, title, channel title, publish time). [`parse_summaries`] turns that into
//!    [`SearchResultSummary`] values.
//! 2. [`YouTubeClient::lookup_details`] calls `videos.list` or `channels.list` once with every id
//!    from step 1, comma-separated. [`parse_metrics`] extracts the counts (views, concurrent
//!    viewers, subscribers, video count) keyed by id.
//!
//! Failures of either call are classified by [`classify_api_error`] when the API sends its error
//! envelope.

pub mod channels;
pub mod client;
pub mod error;
pub mod metrics;
pub mod search;
pub mod types;
pub mod videos;

// Re-export main types for convenience
pub use client::{DEFAULT_BASE_URL, SearchRequest, YouTubeClient};
pub use error::{ApiError, classify_api_error};
pub use metrics::parse_metrics;
pub use search::{SearchResultSummary, parse_summaries};
pub use types::{Metrics, MetricsById, PageInfo};
