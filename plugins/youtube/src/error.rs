use crate::youtube_api::ApiError;
use thiserror::Error;

/// Everything that can stop a search from producing results.
///
/// All variants are terminal: nothing is retried.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced a response body.
    #[error("request to {endpoint} failed")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response body was not JSON.
    #[error("response from {endpoint} is not valid JSON")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    /// The search response is JSON but has no `items` array.
    #[error("search response has no `items` array")]
    MissingItems,

    /// The API reported an error.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The results could not be written out.
    #[error("failed to write results")]
    Output(#[source] std::io::Error),
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;
