use serde::Serialize;
use strum::{Display, EnumString};

/// Wire error codes carried in the JSON error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ErrorCode {
  UuidParamRequired,
  InvalidUuidFormat,
  StatsDirNotConfigured,
  StatsNotFound,
  InvalidStatsJson,
  PlaytimeNotAvailable,
  ServerError,
}

#[derive(Debug, Serialize)]
pub struct PlaytimeResponse {
  pub seconds: u64,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
  pub error: ErrorCode,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
  pub ok: bool,
}
