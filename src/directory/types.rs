use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier of a directory record.
///
/// The directory emits integer ids for routes and string ids for stops;
/// both shapes are accepted and rendered verbatim in query strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Numeric(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Numeric(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Numeric(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

/// Integers become numeric ids, anything else is kept as text
impl FromStr for RecordId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(n) => RecordId::Numeric(n),
            Err(_) => RecordId::Text(s.to_string()),
        })
    }
}

/// A transit route as listed by the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(alias = "route_id")]
    pub id: RecordId,
    /// Display name used in responses. Some feeds publish it as `null`.
    #[serde(default, alias = "route_long_name")]
    pub long_name: Option<String>,
    #[serde(default, alias = "route_short_name", skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl Route {
    pub fn new(id: impl Into<RecordId>, long_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            long_name: Some(long_name.into()),
            short_name: None,
            region: None,
        }
    }
}

/// A stop served by a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stop {
    #[serde(default, alias = "stop_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(alias = "stop_name")]
    pub name: String,
    /// Departure time as published, e.g. `7:00`
    #[serde(default, rename = "hora", alias = "hour", skip_serializing_if = "Option::is_none")]
    pub hour: Option<String>,
    #[serde(default, alias = "stop_lat", skip_serializing_if = "Option::is_none")]
    pub lat: Option<f64>,
    #[serde(default, alias = "stop_lon", skip_serializing_if = "Option::is_none")]
    pub lon: Option<f64>,
}

impl Stop {
    pub fn new(name: impl Into<String>, hour: Option<&str>) -> Self {
        Self {
            id: None,
            name: name.into(),
            hour: hour.map(str::to_string),
            lat: None,
            lon: None,
        }
    }
}
