//! Searches YouTube and prints the results as an Alfred script filter.
//!
//! A search runs through [`SearchPipeline`]: one `search.list` call, then one batched
//! `videos.list` or `channels.list` call for the counts shown in each row. What differs between
//! video, live, playlist, and channel searches is captured by a [`kind::KindProfile`].

pub mod aggregate;
pub mod alfred;
pub mod config;
pub mod error;
pub mod format;
pub mod kind;
pub mod pipeline;
pub mod youtube_api;

pub use config::Config;
pub use error::SearchError;
pub use kind::SearchKind;
pub use pipeline::SearchPipeline;
pub use youtube_api::YouTubeClient;
