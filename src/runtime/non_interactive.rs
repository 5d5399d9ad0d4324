use futures::stream::{self, StreamExt};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::cli::OutputFormat;
use crate::directory::Directory;
use crate::resolver::{IntentResolver, Resolution};

/// Result of resolving one utterance outside the chat loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnReport {
    /// The utterance as given
    pub utterance: String,
    #[serde(flatten)]
    pub resolution: Resolution,
    /// Wall time spent resolving, in milliseconds
    pub duration_ms: u128,
}

/// Runner for single utterances and batches
pub struct NonInteractiveRunner<'a, D> {
    resolver: &'a IntentResolver<D>,
}

impl<'a, D: Directory> NonInteractiveRunner<'a, D> {
    pub fn new(resolver: &'a IntentResolver<D>) -> Self {
        Self { resolver }
    }

    /// Resolve a single utterance
    pub async fn execute(&self, utterance: String) -> TurnReport {
        let start_time = Instant::now();
        let resolution = self.resolver.resolve_turn(&utterance).await;
        TurnReport {
            utterance,
            resolution,
            duration_ms: start_time.elapsed().as_millis(),
        }
    }

    /// Resolve many utterances, at most `concurrency` at a time. Reports come
    /// back in input order.
    pub async fn execute_batch(
        &self,
        utterances: Vec<String>,
        concurrency: usize,
    ) -> Vec<TurnReport> {
        stream::iter(utterances)
            .map(|utterance| self.execute(utterance))
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    /// Format one report according to the output format
    pub fn format_report(&self, report: &TurnReport, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(report).unwrap_or_else(|e| {
                format!("{{\"error\": \"Failed to serialize result: {}\"}}", e)
            }),
            OutputFormat::Text => report.resolution.response.clone(),
        }
    }

    /// Format a batch: JSON array, or `> utterance` / reply pairs
    pub fn format_batch(&self, reports: &[TurnReport], format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(reports).unwrap_or_else(|e| {
                format!("{{\"error\": \"Failed to serialize result: {}\"}}", e)
            }),
            OutputFormat::Text => reports
                .iter()
                .map(|r| format!("> {}\n{}", r.utterance, r.resolution.response))
                .collect::<Vec<_>>()
                .join("\n\n"),
        }
    }
}

/// Split batch input into utterances, skipping blank lines
pub fn read_utterances(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}
