//! Core YouTube API client functionality.

use crate::error::{Result, SearchError};
use crate::kind::{DetailLookup, KindProfile};
use crate::youtube_api::error::{ApiError, classify_api_error, is_error_envelope};
use http::Method;
use std::time::Duration;
use tracing::instrument;

/// Where the YouTube Data API v3 lives.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Parameters for a single `search.list` request.
#[derive(Debug, Clone, Copy)]
pub struct SearchRequest<'a> {
    pub query: &'a str,
    /// Maximum number of results to return (1-50).
    pub max_results: u32,
    /// Result ordering, e.g. `relevance` or `viewCount`.
    pub order: &'a str,
}

/// Client for the public, key-authenticated parts of the YouTube Data API v3.
///
/// Every call is a single attempt: there is no retry, and failures surface as [`SearchError`].
#[derive(Debug, Clone)]
pub struct YouTubeClient {
    /// API key sent as the `key` parameter.
    api_key: String,
    /// Base URL that endpoint paths are appended to.
    base_url: String,
    /// HTTP client for API requests
    client: reqwest::Client,
}

impl YouTubeClient {
    /// Creates a client whose requests give up after `timeout`.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| SearchError::Transport {
                endpoint: "client setup".to_string(),
                source,
            })?;
        Ok(Self::with_client(client, api_key, base_url))
    }

    /// Creates a client on top of an existing HTTP client.
    pub fn with_client(
        client: reqwest::Client,
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Makes a key-authenticated request to the YouTube API and returns the JSON body.
    ///
    /// This consolidates the shared logic across requests:
    /// - API key parameter
    /// - transport failures
    /// - bodies that aren't JSON
    /// - error envelopes and non-success statuses, classified into [`ApiError`]
    #[instrument(skip(self, query_params), level = tracing::Level::TRACE)]
    pub(crate) async fn make_request(
        &self,
        method: Method,
        endpoint: &str,
        query_params: &[(&str, &str)],
    ) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.base_url, endpoint);

        let response = self
            .client
            .request(method, &url)
            .query(query_params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|source| SearchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let status_code = response.status();
        let body = response
            .text()
            .await
            .map_err(|source| SearchError::Transport {
                endpoint: endpoint.to_string(),
                source,
            })?;

        let json: serde_json::Value = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(_) if !status_code.is_success() => {
                tracing::debug!(%status_code, body = %body, "non-JSON error response");
                return Err(ApiError::Unparsable.into());
            }
            Err(source) => {
                return Err(SearchError::Decode {
                    endpoint: endpoint.to_string(),
                    source,
                });
            }
        };

        if is_error_envelope(&json) || !status_code.is_success() {
            let error = classify_api_error(&json);
            tracing::debug!(%status_code, %error, "YouTube API reported an error");
            return Err(error.into());
        }

        Ok(json)
    }

    /// Calls `search.list` for the given kind of resource.
    ///
    /// # API Reference
    ///
    /// <https://developers.google.com/youtube/v3/docs/search/list>
    #[instrument(skip(self, profile), fields(kind = %profile.kind))]
    pub async fn search(
        &self,
        profile: &KindProfile,
        request: SearchRequest<'_>,
    ) -> Result<serde_json::Value> {
        let max_results = request.max_results.to_string();
        let mut query_params = vec![
            ("part", "snippet"),
            ("maxResults", max_results.as_str()),
            ("order", request.order),
            ("q", request.query),
            ("type", profile.search_type),
            ("safeSearch", "none"),
        ];
        query_params.extend_from_slice(profile.extra_params);

        self.make_request(Method::GET, "search", &query_params).await
    }

    /// Looks up a batch of resources by id in a single call.
    ///
    /// # API Reference
    ///
    /// * <https://developers.google.com/youtube/v3/docs/videos/list>
    /// * <https://developers.google.com/youtube/v3/docs/channels/list>
    #[instrument(skip(self, ids), fields(endpoint = lookup.endpoint.path(), count = ids.len()))]
    pub async fn lookup_details(
        &self,
        lookup: &DetailLookup,
        ids: &[&str],
    ) -> Result<serde_json::Value> {
        let ids = ids.join(",");
        let query_params = [("part", lookup.part), ("id", ids.as_str())];

        self.make_request(Method::GET, lookup.endpoint.path(), &query_params).await
    }
}
