//! Gallery server - static hosting with a live manifest
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /photos.json` - Manifest generated from the photos folder per request
//! - everything else - static files from the site root

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use stallgallery_core::{DirectorySource, GalleryConfig, GalleryError, PhotoSet, PhotoSource};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppState {
    config: Arc<GalleryConfig>,
}

impl AppState {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Error body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn photos_manifest(
    State(state): State<AppState>,
) -> Result<Json<PhotoSet>, (StatusCode, Json<ErrorResponse>)> {
    let config = state.config();
    let source = DirectorySource::new(config.photos_dir(), config.categories.clone());

    match source.load().await {
        Ok(photos) => Ok(Json(photos)),
        // Configured categories are still listed, each with no photos
        Err(GalleryError::PhotosDirMissing(dir)) if config.categories.is_some() => {
            warn!("Photos directory not found: {}", dir.display());
            let categories = config.categories.iter().flatten();
            Ok(Json(
                categories
                    .map(|category| (category.clone(), Vec::<String>::new()))
                    .collect(),
            ))
        }
        Err(e) => {
            warn!("Failed to scan photos: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            ))
        }
    }
}

/// Build the router for a site rooted at `config.root`
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(state.config().root());

    Router::new()
        .route("/health", get(health_check))
        .route("/photos.json", get(photos_manifest))
        .fallback_service(static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the site until the process is stopped
pub async fn run_server(config: GalleryConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(AppState::new(config));

    info!("Starting gallery server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
