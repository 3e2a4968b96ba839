//! Classification of the error envelope the YouTube Data API returns on failure.
//!
//! A failed call responds with a body shaped like:
//!
//! ```json
//! {
//!   "error": {
//!     "code": 403,
//!     "message": "The request cannot be completed because you have exceeded your <a href=\"/youtube/v3/getting-started#quota\">quota</a>.",
//!     "errors": [
//!       { "reason": "quotaExceeded", "extendedHelp": "https://..." }
//!     ]
//!   }
//! }
//! ```
//!
//! See: <https://developers.google.com/youtube/v3/docs/errors>

use serde::Deserialize;
use std::fmt;

const UNKNOWN_REASON: &str = "unknown reason";
const NO_HELP: &str = "no further help available";

/// A terminal, API-reported failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The response carried a well-formed error envelope.
    Reported {
        /// The HTTP-like status code reported by the API.
        code: u16,
        /// Human-readable message with any embedded markup removed.
        message: String,
        /// Machine-readable reason of the first error entry, e.g. `quotaExceeded`.
        reason: String,
        /// Link to further documentation about the error.
        help: String,
    },
    /// The API signalled a failure in a shape we don't recognize.
    Unparsable,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Reported {
                code,
                message,
                reason,
                help,
            } => write!(f, "YouTube API error {code} ({reason}): {message} [{help}]"),
            ApiError::Unparsable => write!(f, "unparsable YouTube API error"),
        }
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    code: u16,
    message: String,
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    reason: Option<String>,
    #[serde(rename = "extendedHelp")]
    extended_help: Option<String>,
}

/// Returns true if `json` carries a top-level `error` member.
pub fn is_error_envelope(json: &serde_json::Value) -> bool {
    json.get("error").is_some()
}

/// Turns an API error payload into an [`ApiError`].
///
/// Payloads that lack a numeric `code`, a `message`, or a non-empty `errors` array are reported as
/// [`ApiError::Unparsable`].
pub fn classify_api_error(json: &serde_json::Value) -> ApiError {
    let envelope = match ErrorEnvelope::deserialize(json) {
        Ok(envelope) => envelope,
        Err(error) => {
            tracing::debug!(%error, "error envelope did not match expected shape");
            return ApiError::Unparsable;
        }
    };

    let ErrorBody {
        code,
        message,
        errors,
    } = envelope.error;
    let Some(first) = errors.into_iter().next() else {
        return ApiError::Unparsable;
    };

    ApiError::Reported {
        code,
        message: strip_tags(&message),
        reason: first.reason.unwrap_or_else(|| UNKNOWN_REASON.to_string()),
        help: first.extended_help.unwrap_or_else(|| NO_HELP.to_string()),
    }
}

/// Removes anything that looks like an angle-bracket tag, keeping the text between tags.
fn strip_tags(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        match rest[open..].find('>') {
            Some(close) => rest = &rest[open + close + 1..],
            None => {
                // unterminated; not a tag
                out.push_str(&rest[open..]);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn quota_exceeded() {
        let payload = json!({
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your <a href=\"/youtube/v3/getting-started#quota\">quota</a>.",
                "errors": [{
                    "message": "The request cannot be completed because you have exceeded your quota.",
                    "domain": "youtube.quota",
                    "reason": "quotaExceeded"
                }]
            }
        });

        assert!(is_error_envelope(&payload));
        assert_eq!(
            classify_api_error(&payload),
            ApiError::Reported {
                code: 403,
                message: "The request cannot be completed because you have exceeded your quota."
                    .to_string(),
                reason: "quotaExceeded".to_string(),
                help: NO_HELP.to_string(),
            }
        );
    }

    #[test]
    fn extended_help_is_carried() {
        let payload = json!({
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "errors": [{
                    "reason": "badRequest",
                    "extendedHelp": "https://developers.google.com/youtube/v3/docs/errors"
                }]
            }
        });

        let ApiError::Reported { code, reason, help, .. } = classify_api_error(&payload) else {
            panic!("expected a reported error");
        };
        assert_eq!(code, 400);
        assert_eq!(reason, "badRequest");
        assert_eq!(help, "https://developers.google.com/youtube/v3/docs/errors");
    }

    #[test]
    fn missing_reason_gets_placeholder() {
        let payload = json!({
            "error": { "code": 500, "message": "Backend Error", "errors": [{}] }
        });

        let ApiError::Reported { reason, .. } = classify_api_error(&payload) else {
            panic!("expected a reported error");
        };
        assert_eq!(reason, UNKNOWN_REASON);
    }

    #[test]
    fn unexpected_shapes_are_unparsable() {
        for payload in [
            json!({ "error": "nope" }),
            json!({ "error": { "code": "403", "message": "m", "errors": [{}] } }),
            json!({ "error": { "code": 403, "message": "m", "errors": [] } }),
            json!({ "error": { "code": 403, "errors": [{ "reason": "r" }] } }),
            json!({ "items": [] }),
        ] {
            assert_eq!(classify_api_error(&payload), ApiError::Unparsable, "{payload}");
        }
    }

    #[test]
    fn tags_are_stripped() {
        assert_eq!(strip_tags("a <b>bold</b> move"), "a bold move");
        assert_eq!(strip_tags("no markup"), "no markup");
        assert_eq!(strip_tags("1 < 2"), "1 < 2");
    }
}
