use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::app::KeywordConfig;
use crate::constants::{ROUTE_KEYWORDS, SCHEDULE_KEYWORDS, STOP_KEYWORDS};
use crate::utils::{fold, tokenize};

/// What the user is asking about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    /// Which route serves a city
    Route,
    /// When a route departs
    Schedule,
    /// Nearest stop
    Stop,
}

impl Intent {
    /// Whether answering requires the stop list of the chosen route
    pub fn needs_stops(self) -> bool {
        matches!(self, Intent::Schedule | Intent::Stop)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Intent::Route => "ROUTE",
            Intent::Schedule => "SCHEDULE",
            Intent::Stop => "STOP",
        };
        f.write_str(label)
    }
}

/// Trigger words per intent, stored folded
#[derive(Debug, Clone)]
pub struct KeywordSets {
    route: Vec<String>,
    schedule: Vec<String>,
    stop: Vec<String>,
}

impl KeywordSets {
    pub fn new<S: AsRef<str>>(route: &[S], schedule: &[S], stop: &[S]) -> Self {
        let folded = |words: &[S]| -> Vec<String> {
            words.iter().map(|w| fold(w.as_ref().trim())).collect()
        };
        Self {
            route: folded(route),
            schedule: folded(schedule),
            stop: folded(stop),
        }
    }

    pub fn from_config(config: &KeywordConfig) -> Self {
        Self::new(
            config.route.as_slice(),
            config.schedule.as_slice(),
            config.stop.as_slice(),
        )
    }
}

impl Default for KeywordSets {
    fn default() -> Self {
        Self::new(ROUTE_KEYWORDS, SCHEDULE_KEYWORDS, STOP_KEYWORDS)
    }
}

/// Keyword-based intent classifier.
///
/// Precedence is fixed: SCHEDULE overrides ROUTE, STOP overrides both.
#[derive(Debug, Clone, Default)]
pub struct IntentClassifier {
    keywords: KeywordSets,
}

impl IntentClassifier {
    pub fn new(keywords: KeywordSets) -> Self {
        Self { keywords }
    }

    pub fn classify(&self, utterance: &str) -> Option<Intent> {
        let tokens: HashSet<String> = tokenize(utterance).into_iter().collect();
        self.classify_tokens(&tokens)
    }

    pub(crate) fn classify_tokens(&self, tokens: &HashSet<String>) -> Option<Intent> {
        let hit = |words: &[String]| words.iter().any(|w| tokens.contains(w));

        let mut intent = None;
        if hit(&self.keywords.route) {
            intent = Some(Intent::Route);
        }
        if hit(&self.keywords.schedule) {
            intent = Some(Intent::Schedule);
        }
        if hit(&self.keywords.stop) {
            intent = Some(Intent::Stop);
        }
        intent
    }
}
