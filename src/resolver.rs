use crate::{error::ResolveError, player_id::PlayerId};
use serde_json::Value;
use std::{io, path::PathBuf};

const CUSTOM_SECTION: &str = "minecraft:custom";
/// Key written by 1.20+ servers.
const PLAY_TIME_KEY: &str = "minecraft:play_time";
/// Pre-1.20 key. Old records are never migrated, so both stay supported.
const LEGACY_PLAY_TIME_KEY: &str = "minecraft:play_one_minute";

const TICKS_PER_SECOND: f64 = 20.0;

/// Reads per-player statistics records and derives total playtime.
///
/// Stateless apart from the configured directory, so any number of
/// concurrent resolutions can run without coordination. Records are
/// produced and updated by the game server; this side only ever reads.
#[derive(Debug, Clone)]
pub struct PlaytimeResolver {
  stats_dir: Option<PathBuf>,
}

impl PlaytimeResolver {
  pub fn new(stats_dir: Option<PathBuf>) -> Self {
    Self { stats_dir }
  }

  /// Resolves the total playtime in seconds for `identifier`.
  ///
  /// The identifier is validated and normalized before any file access.
  pub async fn resolve(&self, identifier: &str) -> Result<u64, ResolveError> {
    let id: PlayerId = identifier.parse()?;
    let dir = self
      .stats_dir
      .as_ref()
      .ok_or(ResolveError::StoreNotConfigured)?;
    let path = dir.join(id.record_file_name());

    let raw = match tokio::fs::read_to_string(&path).await {
      Ok(raw) => raw,
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(ResolveError::RecordNotFound),
      Err(e) => return Err(ResolveError::StoreRead(e)),
    };

    let record: Value = serde_json::from_str(&raw).map_err(ResolveError::MalformedRecord)?;
    playtime_seconds(&record).ok_or(ResolveError::PlaytimeUnavailable)
  }
}

/// Extracts the playtime measurement from a parsed statistics record.
///
/// The current key takes precedence; the legacy key is only consulted when
/// the current one is absent or null. Negative ticks clamp to zero.
fn playtime_seconds(record: &Value) -> Option<u64> {
  let custom = record.get("stats")?.get(CUSTOM_SECTION)?.as_object()?;
  let ticks = [PLAY_TIME_KEY, LEGACY_PLAY_TIME_KEY]
    .iter()
    .find_map(|key| custom.get(*key).filter(|v| !v.is_null()))?
    .as_f64()?;
  if !ticks.is_finite() {
    return None;
  }
  Some((ticks / TICKS_PER_SECOND).floor().max(0.0) as u64)
}
