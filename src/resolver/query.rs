use serde::{Deserialize, Serialize};

use super::classifier::Intent;
use super::gazetteer::City;

/// Deterministic reading of one utterance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedQuery {
    pub origin: Option<City>,
    pub destination: Option<City>,
    pub intent: Option<Intent>,
}

impl ParsedQuery {
    /// Region passed to the route lookup.
    ///
    /// ROUTE and SCHEDULE fall back to the destination; STOP uses the
    /// origin only.
    pub fn lookup_region(&self) -> Option<&City> {
        match self.intent? {
            Intent::Route | Intent::Schedule => {
                self.origin.as_ref().or(self.destination.as_ref())
            }
            Intent::Stop => self.origin.as_ref(),
        }
    }
}

/// Last stage a turn reached before responding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Classified,
    RoutesFetched,
    StopsFetched,
}

/// Full outcome of resolving one utterance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resolution {
    pub query: ParsedQuery,
    pub stage: Stage,
    pub routes_found: usize,
    pub stops_found: usize,
    /// Directory failures swallowed during this turn
    pub failures: Vec<String>,
    pub response: String,
}

impl Resolution {
    pub(crate) fn classified(query: ParsedQuery) -> Self {
        Self {
            query,
            stage: Stage::Classified,
            routes_found: 0,
            stops_found: 0,
            failures: Vec::new(),
            response: String::new(),
        }
    }

    /// Whether a directory call failed while resolving
    pub fn degraded(&self) -> bool {
        !self.failures.is_empty()
    }
}
