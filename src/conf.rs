use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::{env, path::PathBuf};

const DEFAULT_PORT: u16 = 3001;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
  pub port: u16,
  /// Directory of per-player statistics records. Optional: the process
  /// starts without it, but every resolve call then fails fast.
  pub stats_dir: Option<PathBuf>,
}

impl Config {
  /// Reads the environment, letting CLI flags win where both are given.
  pub fn load(port: Option<u16>, stats_dir: Option<PathBuf>) -> anyhow::Result<Self> {
    let env_port = match env::var("PORT") {
      Ok(v) => Some(v.parse().context("PORT is not a valid port number")?),
      Err(_) => None,
    };
    let env_dir = env::var("WORLD_STATS_DIR")
      .ok()
      .filter(|v| !v.is_empty())
      .map(PathBuf::from);

    Ok(Self {
      port: port.or(env_port).unwrap_or(DEFAULT_PORT),
      stats_dir: stats_dir.or(env_dir),
    })
  }
}
