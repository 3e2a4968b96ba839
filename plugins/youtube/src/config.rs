//! Settings supplied by the Alfred workflow environment.

use crate::error::{Result, SearchError};
use crate::youtube_api::DEFAULT_BASE_URL;
use std::time::Duration;

pub const API_KEY_VAR: &str = "YOUTUBE_API_KEY";
pub const MAX_RESULTS_VAR: &str = "YOUTUBE_MAX_RESULTS";
pub const ORDER_VAR: &str = "YOUTUBE_ORDER";
pub const BASE_URL_VAR: &str = "YOUTUBE_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "YOUTUBE_TIMEOUT_SECS";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Orderings accepted by `search.list`.
const ORDERS: &[&str] = &["date", "rating", "relevance", "title", "videoCount", "viewCount"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    /// 1 through 50, as the API allows.
    pub max_results: u32,
    pub order: String,
    pub base_url: String,
    /// Upper bound on each request, connect through body.
    pub timeout: Duration,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required =
            |name: &str| get(name).ok_or_else(|| SearchError::Config(format!("{name} is not set")));

        let api_key = required(API_KEY_VAR)?;

        let max_results = required(MAX_RESULTS_VAR)?;
        let max_results = max_results
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|n| (1..=50).contains(n))
            .ok_or_else(|| {
                SearchError::Config(format!(
                    "{MAX_RESULTS_VAR} must be a number from 1 to 50, got '{max_results}'"
                ))
            })?;

        let order = required(ORDER_VAR)?.trim().to_string();
        if !ORDERS.contains(&order.as_str()) {
            return Err(SearchError::Config(format!(
                "{ORDER_VAR} must be one of {}, got '{order}'",
                ORDERS.join(", ")
            )));
        }

        let timeout = match get(TIMEOUT_VAR) {
            None => DEFAULT_TIMEOUT,
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(SearchError::Config(format!(
                        "{TIMEOUT_VAR} must be a positive number of seconds, got '{secs}'"
                    )));
                }
            },
        };

        Ok(Config {
            api_key,
            max_results,
            order,
            base_url: get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout,
        })
    }
}
