use super::classifier::Intent;
use super::query::ParsedQuery;
use crate::constants::{FALLBACK_RESPONSE, HOURS_SEPARATOR};
use crate::directory::{Route, Stop};

/// Render the reply for one turn.
///
/// Only the first route and the first stop are ever named; the schedule
/// reply lists the hours of every stop that has one. A first route without
/// a name cannot be offered, whatever the later routes carry.
pub fn synthesize(query: &ParsedQuery, routes: &[Route], stops: &[Stop]) -> String {
    match (query.intent, routes.first()) {
        (Some(intent @ (Intent::Route | Intent::Schedule)), Some(route)) => {
            let Some(route_name) = route.long_name.as_deref() else {
                return FALLBACK_RESPONSE.to_string();
            };
            if intent == Intent::Schedule {
                if let Some(first_stop) = stops.first() {
                    return format!(
                        "Podés tomar la ruta {} desde {}. Sale a las {}.",
                        route_name,
                        first_stop.name,
                        join_hours(stops)
                    );
                }
            }
            format!("Podés tomar la ruta {}.", route_name)
        }
        (Some(Intent::Stop), Some(_)) => match stops.first() {
            Some(stop) => format!("La parada más cercana es {}.", stop.name),
            None => FALLBACK_RESPONSE.to_string(),
        },
        _ => FALLBACK_RESPONSE.to_string(),
    }
}

fn join_hours(stops: &[Stop]) -> String {
    stops
        .iter()
        .filter_map(|s| s.hour.as_deref())
        .filter(|h| !h.is_empty())
        .collect::<Vec<_>>()
        .join(HOURS_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn query(intent: Option<Intent>) -> ParsedQuery {
        ParsedQuery {
            intent,
            ..ParsedQuery::default()
        }
    }

    #[test]
    fn test_route_reply() {
        let routes = vec![Route::new(1, "Ruta 1"), Route::new(2, "Ruta 2")];
        assert_eq!(
            synthesize(&query(Some(Intent::Route)), &routes, &[]),
            "Podés tomar la ruta Ruta 1."
        );
    }

    #[test]
    fn test_unnamed_later_routes_are_ignored() {
        let unnamed = Route {
            long_name: None,
            ..Route::new(2, "")
        };
        let routes = vec![Route::new(1, "Ruta 1"), unnamed];
        assert_eq!(
            synthesize(&query(Some(Intent::Route)), &routes, &[]),
            "Podés tomar la ruta Ruta 1."
        );
    }

    #[test]
    fn test_unnamed_first_route_falls_back() {
        let unnamed = Route {
            long_name: None,
            ..Route::new(1, "")
        };
        let routes = vec![unnamed, Route::new(2, "Ruta 2")];
        let stops = vec![Stop::new("Parada Central", Some("7:00"))];
        assert_eq!(
            synthesize(&query(Some(Intent::Route)), &routes, &[]),
            FALLBACK_RESPONSE
        );
        assert_eq!(
            synthesize(&query(Some(Intent::Schedule)), &routes, &stops),
            FALLBACK_RESPONSE
        );
        assert_eq!(
            synthesize(&query(Some(Intent::Stop)), &routes, &stops),
            "La parada más cercana es Parada Central."
        );
    }

    #[test]
    fn test_route_reply_ignores_stops() {
        let routes = vec![Route::new(1, "Ruta 1")];
        let stops = vec![Stop::new("Parada Central", Some("7:00"))];
        assert_eq!(
            synthesize(&query(Some(Intent::Route)), &routes, &stops),
            "Podés tomar la ruta Ruta 1."
        );
    }

    #[test]
    fn test_schedule_reply_joins_hours() {
        let routes = vec![Route::new(1, "Ruta 1")];
        let stops = vec![
            Stop::new("Parada Central", Some("7:00")),
            Stop::new("Parada Media", None),
            Stop::new("Parada Norte", Some("7:30")),
            Stop::new("Parada Vacía", Some("")),
        ];
        assert_eq!(
            synthesize(&query(Some(Intent::Schedule)), &routes, &stops),
            "Podés tomar la ruta Ruta 1 desde Parada Central. Sale a las 7:00 y 7:30."
        );
    }

    #[test]
    fn test_schedule_without_stops_falls_back_to_route_reply() {
        let routes = vec![Route::new(1, "Ruta 1")];
        assert_eq!(
            synthesize(&query(Some(Intent::Schedule)), &routes, &[]),
            "Podés tomar la ruta Ruta 1."
        );
    }

    #[test]
    fn test_schedule_with_no_known_hours() {
        let routes = vec![Route::new(1, "Ruta 1")];
        let stops = vec![Stop::new("Parada Central", None)];
        assert_eq!(
            synthesize(&query(Some(Intent::Schedule)), &routes, &stops),
            "Podés tomar la ruta Ruta 1 desde Parada Central. Sale a las ."
        );
    }

    #[test]
    fn test_stop_reply() {
        let routes = vec![Route::new(2, "Ruta 2")];
        let stops = vec![Stop::new("Parada Sur", None), Stop::new("Parada Este", None)];
        assert_eq!(
            synthesize(&query(Some(Intent::Stop)), &routes, &stops),
            "La parada más cercana es Parada Sur."
        );
    }

    #[test]
    fn test_fallbacks() {
        let routes = vec![Route::new(2, "Ruta 2")];
        let stops = vec![Stop::new("Parada Sur", None)];

        assert_eq!(synthesize(&query(None), &routes, &stops), FALLBACK_RESPONSE);
        assert_eq!(synthesize(&query(Some(Intent::Route)), &[], &[]), FALLBACK_RESPONSE);
        assert_eq!(synthesize(&query(Some(Intent::Stop)), &[], &stops), FALLBACK_RESPONSE);
        assert_eq!(synthesize(&query(Some(Intent::Stop)), &routes, &[]), FALLBACK_RESPONSE);
    }
}
