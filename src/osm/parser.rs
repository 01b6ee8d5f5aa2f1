use crate::api::OverpassResponse;
use crate::domain::Place;

/// Extract named places from an Overpass response
///
/// A feature qualifies only if it carries a non-empty `name` tag and
/// a node position; everything else is silently dropped. Response
/// order is preserved and nothing is de-duplicated.
pub fn parse_places(response: &OverpassResponse) -> Vec<Place> {
    let mut places = Vec::new();

    for element in &response.elements {
        let tags = match &element.tags {
            Some(t) => t,
            None => continue,
        };

        let name = match tags.get("name") {
            Some(n) if !n.is_empty() => n,
            _ => continue,
        };

        let (lat, lon) = match (element.lat, element.lon) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => continue,
        };

        places.push(Place::new(name.clone(), lat, lon));
    }

    places
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::overpass::Element;
    use std::collections::HashMap;

    fn named(name: &str, lat: f64, lon: f64) -> Element {
        let mut tags = HashMap::new();
        tags.insert("name".to_string(), name.to_string());
        Element {
            tags: Some(tags),
            lat: Some(lat),
            lon: Some(lon),
        }
    }

    #[test]
    fn test_unnamed_features_are_dropped() {
        let response = OverpassResponse {
            elements: vec![
                named("Cafe X", 23.741, 90.386),
                Element {
                    tags: None,
                    lat: Some(23.75),
                    lon: Some(90.39),
                },
            ],
        };

        let places = parse_places(&response);
        assert_eq!(places.len(), 1);
        assert_eq!(places[0].name, "Cafe X");
        assert_eq!(places[0].lat, 23.741);
        assert_eq!(places[0].lon, 90.386);
    }

    #[test]
    fn test_empty_name_is_dropped() {
        let response = OverpassResponse {
            elements: vec![named("", 23.741, 90.386)],
        };

        assert!(parse_places(&response).is_empty());
    }

    #[test]
    fn test_missing_position_is_dropped() {
        let mut element = named("Hotel Y", 0.0, 0.0);
        element.lat = None;

        let response = OverpassResponse {
            elements: vec![element],
        };

        assert!(parse_places(&response).is_empty());
    }

    #[test]
    fn test_response_order_preserved() {
        let response = OverpassResponse {
            elements: vec![
                named("First", 23.74, 90.38),
                named("Second", 23.75, 90.39),
                named("Third", 23.76, 90.40),
            ],
        };

        let places = parse_places(&response);
        let names: Vec<&str> = places
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
