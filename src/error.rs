//! Error taxonomy for the lookup pipeline.

use thiserror::Error;

/// Errors surfaced by the lookup pipeline.
///
/// Every variant carries the offending coordinates so callers can display a
/// meaningful message without re-threading query context.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Malformed coordinate input, caught at the input boundary before any
    /// network or graph work happens.
    #[error("invalid coordinates {input:?}: expected \"lat, lng\" as two decimal numbers")]
    InvalidInput { input: String },

    /// The provider returned a well-formed response but no usable street
    /// network for the query region.
    #[error("no streets found in this area around ({lat}, {lng})")]
    EmptyGraph { lat: f64, lng: f64 },

    /// Transport or service failure from the road-network provider. Fatal to
    /// the query: without a graph there is nothing to describe.
    #[error("road network provider failed near ({lat}, {lng}): {message}")]
    ProviderUnavailable { lat: f64, lng: f64, message: String },
}

impl LookupError {
    pub fn provider(lat: f64, lng: f64, message: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            lat,
            lng,
            message: message.into(),
        }
    }
}
