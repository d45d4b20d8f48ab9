use crate::models::{ErrorBody, ErrorCode};
use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

/// Ways a playtime resolution can fail.
///
/// Callers need to tell "no data for this player yet" apart from "the store
/// is broken", so these never collapse into a single generic failure.
#[derive(Debug, Error)]
pub enum ResolveError {
  #[error("identifier does not match either accepted uuid form")]
  InvalidIdentifier,
  #[error("statistics directory is not configured")]
  StoreNotConfigured,
  #[error("no statistics record for this player")]
  RecordNotFound,
  #[error("failed to read statistics record: {0}")]
  StoreRead(#[source] std::io::Error),
  #[error("statistics record is not valid json: {0}")]
  MalformedRecord(#[source] serde_json::Error),
  #[error("record carries no usable playtime measurement")]
  PlaytimeUnavailable,
}

impl ResolveError {
  pub fn status_and_code(&self) -> (StatusCode, ErrorCode) {
    match self {
      Self::InvalidIdentifier => (StatusCode::BAD_REQUEST, ErrorCode::InvalidUuidFormat),
      Self::StoreNotConfigured => (
        StatusCode::INTERNAL_SERVER_ERROR,
        ErrorCode::StatsDirNotConfigured,
      ),
      Self::RecordNotFound => (StatusCode::NOT_FOUND, ErrorCode::StatsNotFound),
      Self::StoreRead(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::ServerError),
      Self::MalformedRecord(_) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorCode::InvalidStatsJson),
      Self::PlaytimeUnavailable => (StatusCode::NOT_FOUND, ErrorCode::PlaytimeNotAvailable),
    }
  }
}

impl IntoResponse for ResolveError {
  fn into_response(self) -> Response {
    match &self {
      // A player without a record is an expected outcome, not an anomaly.
      Self::RecordNotFound | Self::PlaytimeUnavailable => tracing::debug!("{self}"),
      Self::StoreRead(_) | Self::MalformedRecord(_) => {
        tracing::error!("playtime lookup failed: {self}");
      }
      _ => tracing::debug!("{self}"),
    }
    let (status, code) = self.status_and_code();
    (status, Json(ErrorBody { error: code })).into_response()
  }
}
