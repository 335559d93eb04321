//! HTTP API for street lookups.
//!
//! Exposes the same single-query lookup as the CLI behind a small JSON API.

use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wayside::config::Config;
use wayside::models::GeoPoint;
use wayside::{LookupError, LookupService, StreetDescription};

#[derive(Parser, Debug)]
#[command(name = "wayside-server")]
#[command(about = "Street description lookup server")]
struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:3000")]
    listen: String,

    /// Optional TOML config file
    #[arg(long)]
    config: Option<String>,
}

/// Application state shared across handlers
struct AppState {
    service: LookupService,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    info!("Wayside Lookup Server");
    info!("Using Overpass endpoint {}", config.overpass_url);

    let service = LookupService::new(config)?;
    let state = Arc::new(AppState { service });

    // Build router
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/v1/describe", get(describe_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    info!("Starting server on {}", args.listen);

    let listener = tokio::net::TcpListener::bind(&args.listen).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Deserialize)]
struct DescribeQueryParams {
    /// Point latitude
    lat: f64,
    /// Point longitude
    lng: f64,
    /// Include the landmark lookup (default true)
    landmark: Option<bool>,
}

/// One street lookup
async fn describe_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DescribeQueryParams>,
) -> Result<Json<StreetDescription>, (StatusCode, String)> {
    let point = GeoPoint::new(params.lat, params.lng);
    let with_landmark = params.landmark.unwrap_or(true);

    let result = state
        .service
        .locate(point, with_landmark)
        .await
        .map_err(|e| {
            tracing::error!("Lookup failed: {}", e);
            (status_for(&e), e.to_string())
        })?;

    Ok(Json(result))
}

fn status_for(error: &LookupError) -> StatusCode {
    match error {
        LookupError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
        LookupError::EmptyGraph { .. } => StatusCode::NOT_FOUND,
        LookupError::ProviderUnavailable { .. } => StatusCode::BAD_GATEWAY,
    }
}
