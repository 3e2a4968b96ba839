//! YouTube Search API types and snippet extraction.

use crate::error::{Result, SearchError};
use crate::format::{UNKNOWN_ELAPSED, decode_entities, format_elapsed, parse_published};
use crate::kind::{IdField, KindProfile, SearchKind};
use crate::youtube_api::types::PageInfo;
use jiff::Timestamp;
use serde::Deserialize;

/// A search result contains information about a YouTube video, channel, or playlist that matches
/// the search parameters.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#resource>
#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub id: Option<SearchResultId>,
    pub snippet: Option<SearchResultSnippet>,
}

/// Identifies the resource that matched. Exactly one member is set, depending on its type.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResultId {
    #[serde(rename = "videoId")]
    pub video_id: Option<String>,
    #[serde(rename = "channelId")]
    pub channel_id: Option<String>,
    #[serde(rename = "playlistId")]
    pub playlist_id: Option<String>,
}

impl SearchResultId {
    pub fn get(&self, field: IdField) -> Option<&str> {
        match field {
            IdField::VideoId => self.video_id.as_deref(),
            IdField::ChannelId => self.channel_id.as_deref(),
            IdField::PlaylistId => self.playlist_id.as_deref(),
        }
    }
}

/// Basic details about a search result.
///
/// See: <https://developers.google.com/youtube/v3/docs/search#snippet>
#[derive(Debug, Deserialize)]
pub struct SearchResultSnippet {
    /// When the resource was created, in ISO 8601 format.
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// The title of the channel that published the resource.
    #[serde(rename = "channelTitle")]
    pub channel_title: Option<String>,
}

/// The lightweight, display-ready summary of one search hit, before metrics are attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultSummary {
    pub id: String,
    pub kind: SearchKind,
    pub title: String,
    pub owner_name: String,
    /// `None` when the API's `publishedAt` didn't parse.
    pub published_at: Option<Timestamp>,
    /// How long ago the resource was published, e.g. `3 days ago`.
    pub elapsed: String,
    /// The snippet description exactly as the API sent it.
    pub description: String,
}

/// Why a search result was left out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipReason {
    Malformed,
    MissingId,
    MissingSnippet,
    MissingTitle,
    MissingChannelTitle,
    MissingPublishedAt,
}

/// Extracts result summaries from a `search.list` payload, in result order.
///
/// A payload without an `items` array is a broken API contract and fails with
/// [`SearchError::MissingItems`]. Nothing else at the top level is required. Items are decoded
/// into a [`SearchResult`] one at a time, so results that are malformed or lack an id of the
/// requested kind, a title, a channel title, or a publish time are skipped on their own.
///
/// See: <https://developers.google.com/youtube/v3/docs/search/list>
pub fn parse_summaries(
    json: &serde_json::Value,
    profile: &KindProfile,
    now: Timestamp,
) -> Result<Vec<SearchResultSummary>> {
    let items = json
        .get("items")
        .and_then(serde_json::Value::as_array)
        .ok_or(SearchError::MissingItems)?;

    let page_info = json
        .get("pageInfo")
        .and_then(|page_info| PageInfo::deserialize(page_info).ok());
    if let Some(page_info) = page_info {
        tracing::debug!(
            total_results = page_info.total_results,
            returned_items = items.len(),
            "fetched search results"
        );
    }

    let mut summaries = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match summarize(item, profile, now) {
            Ok(summary) => summaries.push(summary),
            Err(reason) => tracing::debug!(index, ?reason, "skipping search result"),
        }
    }
    Ok(summaries)
}

fn summarize(
    item: &serde_json::Value,
    profile: &KindProfile,
    now: Timestamp,
) -> Result<SearchResultSummary, SkipReason> {
    let item = SearchResult::deserialize(item).map_err(|_| SkipReason::Malformed)?;
    let id = item
        .id
        .as_ref()
        .and_then(|id| id.get(profile.id_field))
        .ok_or(SkipReason::MissingId)?
        .to_string();
    let snippet = item.snippet.ok_or(SkipReason::MissingSnippet)?;
    let title = snippet.title.ok_or(SkipReason::MissingTitle)?;
    let channel_title = snippet
        .channel_title
        .ok_or(SkipReason::MissingChannelTitle)?;
    let published = snippet
        .published_at
        .ok_or(SkipReason::MissingPublishedAt)?;
    let published_at = parse_published(&published);

    let mut owner_name = decode_entities(&channel_title);
    if owner_name.is_empty() {
        if let Some(label) = profile.empty_owner_label {
            owner_name = label.to_string();
        }
    }

    Ok(SearchResultSummary {
        id,
        kind: profile.kind,
        title: decode_entities(&title),
        owner_name,
        published_at,
        elapsed: published_at.map_or_else(
            || UNKNOWN_ELAPSED.to_string(),
            |timestamp| format_elapsed(timestamp, now),
        ),
        description: snippet.description.unwrap_or_default(),
    })
}
