use crate::{
  models::{ErrorBody, ErrorCode, HealthResponse, PlaytimeResponse},
  state::AppState,
};
use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct PlaytimeQuery {
  uuid: Option<String>,
}

pub async fn playtime_handler(
  State(state): State<Arc<AppState>>,
  Query(query): Query<PlaytimeQuery>,
) -> Response {
  // An empty parameter counts as missing, same as no parameter at all.
  let Some(uuid) = query.uuid.filter(|u| !u.is_empty()) else {
    return (
      StatusCode::BAD_REQUEST,
      Json(ErrorBody {
        error: ErrorCode::UuidParamRequired,
      }),
    )
      .into_response();
  };

  match state.resolver.resolve(&uuid).await {
    Ok(seconds) => Json(PlaytimeResponse { seconds }).into_response(),
    Err(e) => e.into_response(),
  }
}

/// Liveness only; deliberately ignores whether the stats dir is configured.
pub async fn health_handler() -> impl IntoResponse {
  Json(HealthResponse { ok: true })
}
