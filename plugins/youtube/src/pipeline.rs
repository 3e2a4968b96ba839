//! The two-call search pipeline shared by every kind of search.

use crate::aggregate::aggregate;
use crate::alfred::ScriptFilter;
use crate::config::Config;
use crate::error::{Result, SearchError};
use crate::kind::SearchKind;
use crate::youtube_api::{
    MetricsById, SearchRequest, YouTubeClient, parse_metrics, parse_summaries,
};
use jiff::Timestamp;
use std::io::Write;

/// Where a pipeline run is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Searching,
    EnrichingMetrics { results: usize },
    Done { records: usize },
    Errored,
}

impl Stage {
    fn advance(&mut self, next: Stage) {
        tracing::debug!(from = ?*self, to = ?next, "pipeline stage change");
        *self = next;
    }
}

/// Runs searches against the YouTube API and shapes the results for Alfred.
#[derive(Debug)]
pub struct SearchPipeline<'a> {
    client: &'a YouTubeClient,
    max_results: u32,
    order: &'a str,
    now: Option<Timestamp>,
}

impl<'a> SearchPipeline<'a> {
    pub fn new(client: &'a YouTubeClient, config: &'a Config) -> Self {
        Self {
            client,
            max_results: config.max_results,
            order: &config.order,
            now: None,
        }
    }

    /// Computes relative publish times against `now` rather than the current time.
    pub fn at(mut self, now: Timestamp) -> Self {
        self.now = Some(now);
        self
    }

    /// Searches for `query` and returns the Alfred results.
    ///
    /// Issues at most two requests: the search itself, then one batched lookup of metrics for
    /// every result. Any failure ends the run.
    ///
    /// The lookup is skipped when the search found nothing, since an empty `id` batch can't
    /// return metrics, and for playlists, whose results show no counts. Both cases aggregate
    /// against an empty metrics map, which is what the lookup would have produced.
    pub async fn run(&self, kind: SearchKind, query: &str) -> Result<ScriptFilter> {
        let mut stage = Stage::Searching;
        match self.drive(&mut stage, kind, query).await {
            Ok(filter) => {
                stage.advance(Stage::Done {
                    records: filter.items.len(),
                });
                Ok(filter)
            }
            Err(error) => {
                tracing::debug!(failed_in = ?stage, %error, "search failed");
                stage.advance(Stage::Errored);
                Err(error)
            }
        }
    }

    /// Like [`Self::run`], but writes the results as JSON to `out`.
    ///
    /// Nothing is written unless the whole search succeeds.
    pub async fn run_to<W: Write>(&self, kind: SearchKind, query: &str, mut out: W) -> Result<()> {
        let filter = self.run(kind, query).await?;
        serde_json::to_writer(&mut out, &filter).map_err(|e| SearchError::Output(e.into()))?;
        out.flush().map_err(SearchError::Output)
    }

    async fn drive(
        &self,
        stage: &mut Stage,
        kind: SearchKind,
        query: &str,
    ) -> Result<ScriptFilter> {
        let profile = kind.profile();
        let now = self.now.unwrap_or_else(Timestamp::now);

        let response = self
            .client
            .search(
                profile,
                SearchRequest {
                    query,
                    max_results: self.max_results,
                    order: self.order,
                },
            )
            .await?;
        let summaries = parse_summaries(&response, profile, now)?;

        stage.advance(Stage::EnrichingMetrics {
            results: summaries.len(),
        });
        let metrics = match &profile.detail {
            None => MetricsById::new(),
            Some(_) if summaries.is_empty() => {
                tracing::debug!("no results; skipping metrics lookup");
                MetricsById::new()
            }
            Some(lookup) => {
                let ids: Vec<&str> = summaries.iter().map(|s| s.id.as_str()).collect();
                let response = self.client.lookup_details(lookup, &ids).await?;
                parse_metrics(&response, lookup)
            }
        };

        Ok(aggregate(summaries, &metrics, profile).into_iter().collect())
    }
}
