use anyhow::Result;
use clap::Parser;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use vatra_playtime::{conf::Config, resolver::PlaytimeResolver, routes, state::AppState};

/// Playtime API for the VatraMC fan site: reads the game server's
/// per-player statistics files and answers playtime queries.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
  /// Listen port (falls back to $PORT, then 3001)
  #[arg(long)]
  port: Option<u16>,
  /// Directory holding <uuid>.json statistics records
  /// (falls back to $WORLD_STATS_DIR)
  #[arg(long)]
  stats_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "info,tower_http=info".into()),
    )
    .init();

  let cli = Cli::parse();
  let conf = Config::load(cli.port, cli.stats_dir)?;

  match &conf.stats_dir {
    Some(dir) => tracing::info!("using stats dir {}", dir.display()),
    None => {
      tracing::warn!("stats dir not set; /api/playtime will answer errors until configured")
    }
  }

  let state = Arc::new(AppState {
    resolver: PlaytimeResolver::new(conf.stats_dir.clone()),
  });

  let addr = SocketAddr::from(([0, 0, 0, 0], conf.port));
  let listener = tokio::net::TcpListener::bind(addr).await?;
  tracing::info!("playtime api listening on http://{addr}");
  axum::serve(listener, routes::app(state)).await?;
  Ok(())
}
