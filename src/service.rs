//! Lookup orchestration.
//!
//! One invocation runs the stages in strict sequence: fetch the road
//! network, resolve the nearest edge, look up a landmark (optional,
//! best-effort), format. The graph lives only for the duration of the
//! call; nothing is shared between invocations.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use crate::config::Config;
use crate::describe::{describe, map_link};
use crate::error::LookupError;
use crate::landmark::find_landmark;
use crate::models::{GeoPoint, Landmark, ResolvedEdge};
use crate::overpass::{fetch_graph, OverpassClient};
use crate::resolve::resolve;

/// Everything a caller needs to present one lookup result.
#[derive(Debug, Clone, Serialize)]
pub struct StreetDescription {
    pub resolved: ResolvedEdge,
    pub landmark: Landmark,
    pub description: String,
    pub map_link: String,
}

/// Single-query street lookup against configured providers.
pub struct LookupService {
    client: OverpassClient,
    config: Config,
}

impl LookupService {
    pub fn new(config: Config) -> Result<Self> {
        let client = OverpassClient::new(&config.overpass_url, config.http_timeout())?;
        Ok(Self { client, config })
    }

    /// Describe the street segment nearest to `point`.
    ///
    /// Graph provider failures are fatal; landmark provider failures
    /// degrade to an `Unknown` landmark and the description still
    /// succeeds. With `with_landmark` off, the landmark stage is skipped
    /// entirely and the output carries the same `Unknown` form.
    pub async fn locate(
        &self,
        point: GeoPoint,
        with_landmark: bool,
    ) -> Result<StreetDescription, LookupError> {
        let graph = fetch_graph(
            &self.client,
            point,
            self.config.graph_radius_m,
            self.config.network,
        )
        .await?;

        let resolved = resolve(&graph, point)?;
        info!(
            "resolved ({}, {}) to {} between {} and {}",
            point.lat, point.lon, resolved.main_street, resolved.from_street, resolved.to_street
        );

        let landmark = if with_landmark {
            find_landmark(
                &self.client,
                point,
                self.config.landmark_radius_m,
                &self.config.poi_filter,
            )
            .await
        } else {
            Landmark::Unknown
        };

        Ok(StreetDescription {
            description: describe(&resolved, &landmark),
            map_link: map_link(point),
            resolved,
            landmark,
        })
    }
}
