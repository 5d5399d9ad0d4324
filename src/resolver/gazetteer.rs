use serde::{Deserialize, Serialize};
use std::fmt;

use crate::app::GazetteerConfig;
use crate::constants::DEFAULT_CITIES;
use crate::utils::fold;

/// A recognized city, always carrying its canonical gazetteer spelling
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct City(String);

impl City {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered, immutable set of known city names.
///
/// Order matters: entity extraction walks the cities in this order.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    // (canonical city, folded lookup key)
    entries: Vec<(City, String)>,
}

impl Gazetteer {
    /// Build a gazetteer from names in priority order. Blank names and
    /// names that fold to an already-present entry are skipped.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<(City, String)> = Vec::new();
        for name in names {
            let name = name.as_ref().trim();
            let key = fold(name);
            if key.is_empty() || entries.iter().any(|(_, k)| *k == key) {
                continue;
            }
            entries.push((City(name.to_string()), key));
        }
        Self { entries }
    }

    pub fn from_config(config: &GazetteerConfig) -> Self {
        Self::new(&config.cities)
    }

    /// Whether `token` names a known city (case- and accent-insensitive,
    /// whole token only)
    pub fn is_known_city(&self, token: &str) -> bool {
        self.lookup(token).is_some()
    }

    /// Canonical city for `token`, if any
    pub fn lookup(&self, token: &str) -> Option<&City> {
        let key = fold(token);
        self.entries
            .iter()
            .find(|(_, k)| *k == key)
            .map(|(city, _)| city)
    }

    /// All cities in gazetteer order
    pub fn all_cities(&self) -> impl Iterator<Item = &City> {
        self.entries.iter().map(|(city, _)| city)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&City, &str)> {
        self.entries.iter().map(|(city, key)| (city, key.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new(DEFAULT_CITIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        let gazetteer = Gazetteer::default();
        let names: Vec<&str> = gazetteer.all_cities().map(City::name).collect();
        assert_eq!(
            names,
            vec![
                "Managua",
                "Estelí",
                "León",
                "Matagalpa",
                "Chinandega",
                "Masaya",
                "Jinotega",
                "Rivas",
                "Granada"
            ]
        );
    }

    #[test]
    fn test_lookup_is_case_and_accent_insensitive() {
        let gazetteer = Gazetteer::default();
        assert_eq!(gazetteer.lookup("LEON").map(City::name), Some("León"));
        assert_eq!(gazetteer.lookup("estelí").map(City::name), Some("Estelí"));
        assert!(gazetteer.is_known_city("granada"));
    }

    #[test]
    fn test_lookup_is_whole_word() {
        let gazetteer = Gazetteer::default();
        assert!(!gazetteer.is_known_city("managuas"));
        assert!(!gazetteer.is_known_city("rivas,"));
        assert!(!gazetteer.is_known_city("mana"));
    }

    #[test]
    fn test_duplicates_and_blanks_are_skipped() {
        let gazetteer = Gazetteer::new(["León", "leon", " ", "Rivas"]);
        assert_eq!(gazetteer.len(), 2);
    }
}
