use axum::{
  Router,
  body::{Body, to_bytes},
  http::{Request, StatusCode},
};
use serde_json::{Value, json};
use std::{fs, path::PathBuf, sync::Arc};
use tempfile::tempdir;
use tower::ServiceExt;
use vatra_playtime::{resolver::PlaytimeResolver, routes, state::AppState};

const ID: &str = "069a79f4-44e9-4726-a5be-fca90e38aaf5";

fn app_with(stats_dir: Option<PathBuf>) -> Router {
  routes::app(Arc::new(AppState {
    resolver: PlaytimeResolver::new(stats_dir),
  }))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
  let resp = app
    .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
    .await
    .unwrap();
  let status = resp.status();
  let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
  (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn health_reports_ok_even_without_stats_dir() {
  let (status, body) = get(app_with(None), "/health").await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({"ok": true}));
}

#[tokio::test]
async fn playtime_round_trip() {
  let dir = tempdir().unwrap();
  fs::write(
    dir.path().join(format!("{ID}.json")),
    r#"{"stats":{"minecraft:custom":{"minecraft:play_time":72000}}}"#,
  )
  .unwrap();

  let app = app_with(Some(dir.path().to_path_buf()));
  let (status, body) = get(app, &format!("/api/playtime?uuid={ID}")).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({"seconds": 3600}));
}

#[tokio::test]
async fn missing_uuid_param_is_a_bad_request() {
  let dir = tempdir().unwrap();
  let app = app_with(Some(dir.path().to_path_buf()));
  let (status, body) = get(app, "/api/playtime").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({"error": "uuid_param_required"}));
}

#[tokio::test]
async fn empty_uuid_param_counts_as_missing() {
  let dir = tempdir().unwrap();
  let app = app_with(Some(dir.path().to_path_buf()));
  let (status, body) = get(app, "/api/playtime?uuid=").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({"error": "uuid_param_required"}));
}

#[tokio::test]
async fn invalid_uuid_is_a_bad_request() {
  let dir = tempdir().unwrap();
  let app = app_with(Some(dir.path().to_path_buf()));
  let (status, body) = get(app, "/api/playtime?uuid=steve").await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(body, json!({"error": "invalid_uuid_format"}));
}

#[tokio::test]
async fn unconfigured_stats_dir_is_a_server_side_error() {
  let app = app_with(None);
  let (status, body) = get(app, &format!("/api/playtime?uuid={ID}")).await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body, json!({"error": "stats_dir_not_configured"}));
}

#[tokio::test]
async fn unknown_player_is_not_found() {
  let dir = tempdir().unwrap();
  let app = app_with(Some(dir.path().to_path_buf()));
  let (status, body) = get(app, &format!("/api/playtime?uuid={ID}")).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({"error": "stats_not_found"}));
}

#[tokio::test]
async fn corrupt_record_is_a_server_side_error() {
  let dir = tempdir().unwrap();
  fs::write(dir.path().join(format!("{ID}.json")), "{oops").unwrap();
  let app = app_with(Some(dir.path().to_path_buf()));
  let (status, body) = get(app, &format!("/api/playtime?uuid={ID}")).await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert_eq!(body, json!({"error": "invalid_stats_json"}));
}

#[tokio::test]
async fn record_without_playtime_is_not_available() {
  let dir = tempdir().unwrap();
  fs::write(
    dir.path().join(format!("{ID}.json")),
    r#"{"stats":{"minecraft:custom":{}}}"#,
  )
  .unwrap();
  let app = app_with(Some(dir.path().to_path_buf()));
  let (status, body) = get(app, &format!("/api/playtime?uuid={ID}")).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({"error": "playtime_not_available"}));
}
