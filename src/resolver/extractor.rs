use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::gazetteer::{City, Gazetteer};
use crate::utils::tokenize;

/// Origin/destination pair found in an utterance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub origin: Option<City>,
    pub destination: Option<City>,
}

/// Finds at most two city mentions in an utterance.
///
/// Roles are assigned in gazetteer order, not sentence order:
/// `"granada managua"` yields origin Managua, destination Granada.
#[derive(Debug, Clone, Default)]
pub struct EntityExtractor {
    gazetteer: Gazetteer,
}

impl EntityExtractor {
    pub fn new(gazetteer: Gazetteer) -> Self {
        Self { gazetteer }
    }

    pub fn gazetteer(&self) -> &Gazetteer {
        &self.gazetteer
    }

    pub fn extract(&self, utterance: &str) -> Entities {
        let tokens: HashSet<String> = tokenize(utterance).into_iter().collect();
        self.extract_tokens(&tokens)
    }

    pub(crate) fn extract_tokens(&self, tokens: &HashSet<String>) -> Entities {
        let mut entities = Entities::default();

        for (city, key) in self.gazetteer.entries() {
            if !tokens.contains(key) {
                continue;
            }
            if entities.origin.is_none() {
                entities.origin = Some(city.clone());
            } else if entities.destination.is_none() && entities.origin.as_ref() != Some(city) {
                entities.destination = Some(city.clone());
            }
            if entities.destination.is_some() {
                break;
            }
        }

        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(entities: &Entities) -> (Option<&str>, Option<&str>) {
        (
            entities.origin.as_ref().map(City::name),
            entities.destination.as_ref().map(City::name),
        )
    }

    #[test]
    fn test_no_cities() {
        let extractor = EntityExtractor::default();
        assert_eq!(extractor.extract("hola buenos días"), Entities::default());
    }

    #[test]
    fn test_single_city_is_origin() {
        let extractor = EntityExtractor::default();
        let entities = extractor.extract("quiero ir a Granada");
        assert_eq!(names(&entities), (Some("Granada"), None));
    }

    #[test]
    fn test_roles_follow_gazetteer_order() {
        let extractor = EntityExtractor::default();
        let entities = extractor.extract("de granada a managua");
        assert_eq!(names(&entities), (Some("Managua"), Some("Granada")));
    }

    #[test]
    fn test_repeated_city_does_not_fill_destination() {
        let extractor = EntityExtractor::default();
        let entities = extractor.extract("managua Managua MANAGUA");
        assert_eq!(names(&entities), (Some("Managua"), None));
    }

    #[test]
    fn test_at_most_two_cities() {
        let extractor = EntityExtractor::default();
        let entities = extractor.extract("rivas masaya leon esteli");
        assert_eq!(names(&entities), (Some("Estelí"), Some("León")));
    }

    #[test]
    fn test_extraction_is_stable() {
        let extractor = EntityExtractor::default();
        let text = "ruta jinotega chinandega matagalpa";
        let first = extractor.extract(text);
        for _ in 0..5 {
            assert_eq!(extractor.extract(text), first);
        }
        assert_ne!(first.origin, first.destination);
    }

    #[test]
    fn test_custom_gazetteer() {
        let extractor = EntityExtractor::new(Gazetteer::new(["Ocotal", "Somoto"]));
        let entities = extractor.extract("somoto ocotal managua");
        assert_eq!(names(&entities), (Some("Ocotal"), Some("Somoto")));
    }
}
