use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;

use crate::config::OverpassConfig;

const USER_AGENT: &str = "poimap/0.1.0";

/// Why a category fetch failed. Callers that want the original
/// behavior can map any error to an empty collection, but the cause
/// stays distinguishable from "the area genuinely has no results".
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to Overpass API failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Overpass API returned error status: {0}")]
    Status(reqwest::StatusCode),
    #[error("failed to decode Overpass JSON response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Raw Overpass API response
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

/// A single node element from Overpass
#[derive(Debug, Deserialize)]
pub struct Element {
    #[serde(default)]
    pub tags: Option<HashMap<String, String>>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
}

/// Overpass QL query for point features tagged with the given amenity
/// within `radius_m` of the center. The tag value goes in verbatim;
/// Overpass itself decides whether it matches anything.
fn build_query(center: (f64, f64), radius_m: u32, amenity_tag: &str, timeout_secs: u64) -> String {
    let (lat, lon) = center;
    format!(
        r#"[out:json][timeout:{timeout_secs}];
node(around:{radius_m},{lat},{lon})["amenity"="{amenity_tag}"];
out;"#
    )
}

/// Fetch nearby point features for one amenity category
///
/// # Arguments
/// * `center` - (lat, lon) center point
/// * `radius_m` - Search radius in meters
/// * `amenity_tag` - Amenity tag value (e.g. "restaurant")
///
/// One blocking POST per call, no caching, no retry.
pub fn fetch_amenities(
    center: (f64, f64),
    radius_m: u32,
    amenity_tag: &str,
    config: &OverpassConfig,
) -> Result<OverpassResponse, FetchError> {
    let query = build_query(center, radius_m, amenity_tag, config.timeout_secs);

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        // Client timeout slightly higher than the server-side one
        .timeout(Duration::from_secs(config.timeout_secs + 5))
        .build()
        .map_err(FetchError::Transport)?;

    // IMPORTANT: Overpass API expects form-encoded POST data, not raw body
    // The query must be sent as: data=<query>
    let response = client
        .post(&config.url)
        .form(&[("data", query.as_str())])
        .send()
        .map_err(FetchError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    response.json().map_err(FetchError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query() {
        let query = build_query((23.74, 90.385), 1500, "restaurant", 25);

        assert!(query.starts_with("[out:json]"));
        assert!(query.contains("around:1500,23.74,90.385"));
        assert!(query.contains(r#"["amenity"="restaurant"]"#));
    }

    #[test]
    fn test_parse_overpass_response() {
        let json = r#"{
            "elements": [
                {"type": "node", "id": 1, "lat": 23.741, "lon": 90.386, "tags": {"name": "Cafe X", "amenity": "restaurant"}},
                {"type": "node", "id": 2, "lat": 23.742, "lon": 90.387}
            ]
        }"#;

        let response: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.elements.len(), 2);
        assert_eq!(
            response.elements[0].tags.as_ref().unwrap().get("name"),
            Some(&"Cafe X".to_string())
        );
        assert!(response.elements[1].tags.is_none());
    }

    #[test]
    fn test_missing_elements_key_parses_as_empty() {
        let response: OverpassResponse = serde_json::from_str("{}").unwrap();
        assert!(response.elements.is_empty());
    }

    #[test]
    fn test_transport_error_is_typed() {
        // Discard port, nothing listens there; the connection is refused
        let config = OverpassConfig {
            url: "http://127.0.0.1:9/api/interpreter".to_string(),
            timeout_secs: 1,
        };

        let err = fetch_amenities((23.74, 90.385), 1500, "restaurant", &config).unwrap_err();
        assert!(matches!(err, FetchError::Transport(_)));
    }

    #[test]
    fn test_status_error_names_status() {
        let err = FetchError::Status(reqwest::StatusCode::GATEWAY_TIMEOUT);
        assert!(err.to_string().contains("504"));
    }
}
