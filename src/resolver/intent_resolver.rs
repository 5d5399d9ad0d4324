use std::collections::HashSet;
use tracing::{debug, warn};

use super::classifier::{IntentClassifier, KeywordSets};
use super::extractor::EntityExtractor;
use super::gazetteer::Gazetteer;
use super::query::{ParsedQuery, Resolution, Stage};
use super::synthesizer::synthesize;
use crate::app::Config;
use crate::constants::FALLBACK_RESPONSE;
use crate::directory::Directory;
use crate::utils::tokenize;

/// Turns one utterance into one reply.
///
/// Holds no per-turn state, so a shared reference can resolve many turns
/// concurrently.
pub struct IntentResolver<D> {
    extractor: EntityExtractor,
    classifier: IntentClassifier,
    directory: D,
}

impl<D: Directory> IntentResolver<D> {
    pub fn new(gazetteer: Gazetteer, keywords: KeywordSets, directory: D) -> Self {
        Self {
            extractor: EntityExtractor::new(gazetteer),
            classifier: IntentClassifier::new(keywords),
            directory,
        }
    }

    /// Build a resolver from the `[gazetteer]` and `[keywords]` sections
    pub fn from_config(config: &Config, directory: D) -> Self {
        Self::new(
            Gazetteer::from_config(&config.gazetteer),
            KeywordSets::from_config(&config.keywords),
            directory,
        )
    }

    pub fn directory(&self) -> &D {
        &self.directory
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        self.extractor.gazetteer()
    }

    /// Extract entities and classify intent. No I/O.
    pub fn parse(&self, utterance: &str) -> ParsedQuery {
        let tokens: HashSet<String> = tokenize(utterance).into_iter().collect();
        let entities = self.extractor.extract_tokens(&tokens);
        ParsedQuery {
            origin: entities.origin,
            destination: entities.destination,
            intent: self.classifier.classify_tokens(&tokens),
        }
    }

    /// Resolve an utterance to its reply. Never fails: directory errors end
    /// in the fallback message.
    pub async fn resolve(&self, utterance: &str) -> String {
        self.resolve_turn(utterance).await.response
    }

    /// Resolve an utterance, keeping the intermediate results
    pub async fn resolve_turn(&self, utterance: &str) -> Resolution {
        let query = self.parse(utterance);
        debug!(
            intent = ?query.intent,
            origin = ?query.origin,
            destination = ?query.destination,
            "classified utterance"
        );

        let mut resolution = Resolution::classified(query);
        let Some(intent) = resolution.query.intent else {
            resolution.response = FALLBACK_RESPONSE.to_string();
            return resolution;
        };

        let region = resolution
            .query
            .lookup_region()
            .map(|city| city.name().to_string());
        let routes = match self.directory.list_routes_by_region(region).await {
            Ok(routes) => routes,
            Err(e) => {
                warn!(error = %e, %intent, "route lookup failed");
                resolution.failures.push(e.to_string());
                resolution.response = FALLBACK_RESPONSE.to_string();
                return resolution;
            }
        };
        resolution.stage = Stage::RoutesFetched;
        resolution.routes_found = routes.len();

        let mut stops = Vec::new();
        if intent.needs_stops() {
            if let Some(route) = routes.first() {
                match self.directory.list_stops_by_route(route.id.clone()).await {
                    Ok(found) => {
                        resolution.stage = Stage::StopsFetched;
                        resolution.stops_found = found.len();
                        stops = found;
                    }
                    Err(e) => {
                        warn!(error = %e, route = %route.id, "stop lookup failed");
                        resolution.failures.push(e.to_string());
                    }
                }
            }
        }

        resolution.response = synthesize(&resolution.query, &routes, &stops);
        resolution
    }
}
