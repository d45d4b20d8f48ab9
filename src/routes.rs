use crate::{
  handlers::{health_handler, playtime_handler},
  state::AppState,
};
use axum::{Router, routing::get};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

pub fn app(state: Arc<AppState>) -> Router {
  Router::new()
    .route("/api/playtime", get(playtime_handler))
    .route("/health", get(health_handler))
    .layer(
      ServiceBuilder::new()
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new().deflate(true).gzip(true))
        // The static front-end is served from another origin.
        .layer(CorsLayer::permissive()),
    )
    .with_state(state)
}
