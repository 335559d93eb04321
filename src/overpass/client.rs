//! HTTP client for the Overpass API.

use std::collections::HashMap;
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Raw Overpass response envelope.
#[derive(Debug, Deserialize)]
pub struct OverpassResponse {
    pub elements: Vec<OverpassElement>,
}

/// One element of an Overpass response. Fields are populated depending on
/// the element type and the output verb used by the query.
#[derive(Debug, Deserialize)]
pub struct OverpassElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(default)]
    pub nodes: Vec<i64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Thin wrapper over reqwest for posting OverpassQL queries.
pub struct OverpassClient {
    client: Client,
    endpoint: Url,
}

impl OverpassClient {
    /// Create a client against an Overpass endpoint.
    ///
    /// The endpoint is validated up front so a typo in configuration fails
    /// at startup rather than on the first query.
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .with_context(|| format!("invalid Overpass endpoint: {endpoint}"))?;

        let client = Client::builder()
            .user_agent("Wayside/0.1 (street description lookup)")
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { client, endpoint })
    }

    /// POST an OverpassQL query and decode the JSON response.
    pub async fn run_query(&self, query: &str) -> Result<OverpassResponse> {
        debug!("overpass query: {}", query);

        let response = self
            .client
            .post(self.endpoint.clone())
            .body(query.to_string())
            .send()
            .await
            .context("Overpass request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Overpass returned {status}: {body}");
        }

        let parsed: OverpassResponse = response
            .json()
            .await
            .context("failed to parse Overpass response")?;

        debug!("overpass returned {} elements", parsed.elements.len());
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_malformed_endpoint() {
        assert!(OverpassClient::new("not a url", Duration::from_secs(1)).is_err());
        assert!(
            OverpassClient::new("https://overpass-api.de/api/interpreter", Duration::from_secs(1))
                .is_ok()
        );
    }

    #[test]
    fn test_element_deserialization() {
        let json = r#"{
            "elements": [
                {"type": "node", "id": 1, "lat": 40.7, "lon": -73.9},
                {"type": "way", "id": 2, "nodes": [1, 3], "tags": {"highway": "residential", "name": "Main St"}}
            ]
        }"#;

        let parsed: OverpassResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.elements.len(), 2);
        assert_eq!(parsed.elements[0].kind, "node");
        assert_eq!(parsed.elements[0].lat, Some(40.7));
        assert_eq!(parsed.elements[1].nodes, vec![1, 3]);
        assert_eq!(
            parsed.elements[1].tags.get("name").map(String::as_str),
            Some("Main St")
        );
    }
}
