use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use calrelay_models::relay::{RelayResult, RelayStatus};
use calrelay_models::settings::{ExecutableSettings, ExecutablesSettings};
use tempfile::TempDir;
use tower::ServiceExt;

use super::test_utils::*;
use crate::{Endpoint, RelayRoutes, create_router};

const ECHO_ARGS: &str = r#"printf '%s\n' "$#" "$@""#;

async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Option<RelayResult>) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&bytes).ok())
}

fn router_with(dir: &TempDir, reminder_body: &str, song_body: &str, timeout: Duration) -> Router {
    let reminder = script(dir.path(), "SetReminder", reminder_body);
    let search_song = script(dir.path(), "SearchSong", song_body);

    create_router(Arc::new(routes(&reminder, &search_song, timeout)))
}

const REMINDER_BODY: &str = r#"{
    "title": "Team Meeting",
    "date": "2026-01-15",
    "start_time": "14:00",
    "end_time": "15:00",
    "description": "Discuss Q1 goals"
}"#;

#[tokio::test]
async fn set_reminder_passes_five_fields_in_order() {
    let dir = TempDir::new().unwrap();
    let router = router_with(&dir, ECHO_ARGS, "exit 0", Duration::from_secs(10));

    let (status, result) = post_json(router, "/setreminder", REMINDER_BODY).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        result,
        Some(RelayResult::success(
            "5\nTeam Meeting\n2026-01-15\n14:00\n15:00\nDiscuss Q1 goals\n"
        ))
    );
}

#[tokio::test]
async fn set_reminder_failure_returns_stderr() {
    let dir = TempDir::new().unwrap();
    let router = router_with(
        &dir,
        "printf 'bad input' >&2; exit 1",
        "exit 0",
        Duration::from_secs(10),
    );

    let (_, result) = post_json(router, "/setreminder", REMINDER_BODY).await;

    assert_eq!(result, Some(RelayResult::error("bad input")));
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn set_reminder_timeout_returns_calendar_message_and_stops_process() {
    let dir = TempDir::new().unwrap();
    let pid_file = dir.path().join("pid");
    let router = router_with(
        &dir,
        &format!("echo $$ > '{}'; exec sleep 30", pid_file.display()),
        "exit 0",
        Duration::from_millis(500),
    );

    let (_, result) = post_json(router, "/setreminder", REMINDER_BODY).await;

    assert_eq!(
        result,
        Some(RelayResult::error("Calendar operation timed out"))
    );
    let pid: u32 = std::fs::read_to_string(&pid_file)
        .unwrap()
        .trim()
        .parse()
        .unwrap();
    assert!(!is_running(pid));
}

#[tokio::test]
async fn search_song_without_artist_passes_one_argument() {
    let dir = TempDir::new().unwrap();
    let router = router_with(&dir, "exit 0", ECHO_ARGS, Duration::from_secs(10));

    let (_, result) = post_json(router, "/searchsong", r#"{"song":"Yesterday"}"#).await;

    assert_eq!(result, Some(RelayResult::success("1\nYesterday\n")));
}

#[tokio::test]
async fn search_song_with_artist_passes_song_then_artist() {
    let dir = TempDir::new().unwrap();
    let router = router_with(&dir, "exit 0", ECHO_ARGS, Duration::from_secs(10));

    let (_, result) = post_json(
        router,
        "/searchsong",
        r#"{"song":"Yesterday","artist":"The Beatles"}"#,
    )
    .await;

    assert_eq!(
        result,
        Some(RelayResult::success("2\nYesterday\nThe Beatles\n"))
    );
}

#[tokio::test]
async fn search_song_timeout_uses_its_own_message() {
    let dir = TempDir::new().unwrap();
    let router = router_with(&dir, "exit 0", "exec sleep 30", Duration::from_millis(300));

    let (_, result) = post_json(router, "/searchsong", r#"{"song":"Yesterday"}"#).await;

    assert_eq!(
        result,
        Some(RelayResult::error("Search song operation timed out"))
    );
}

#[tokio::test]
async fn missing_executable_maps_to_unexpected_error() {
    let routes = routes(
        std::path::Path::new("/definitely/not/here/SetReminder"),
        std::path::Path::new("/definitely/not/here/SearchSong"),
        Duration::from_secs(1),
    );

    let (status, result) = post_json(
        create_router(Arc::new(routes)),
        "/searchsong",
        r#"{"song":"Yesterday"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result = result.unwrap();
    assert_eq!(result.status, RelayStatus::Error);
    assert!(result.output.starts_with("An unexpected error occurred:"));
}

#[tokio::test]
async fn malformed_body_is_rejected_before_running_anything() {
    let routes = routes(
        std::path::Path::new("/definitely/not/here/SetReminder"),
        std::path::Path::new("/definitely/not/here/SearchSong"),
        Duration::from_secs(1),
    );
    let router = create_router(Arc::new(routes));

    let (status, _) = post_json(router, "/setreminder", r#"{"title":"only"}"#).await;

    assert!(status.is_client_error());
}

#[test]
fn routes_from_settings_keep_endpoint_timeout_messages() {
    let settings = ExecutablesSettings {
        reminder: ExecutableSettings {
            path: "./SetReminder".into(),
            timeout_secs: 3,
        },
        search_song: ExecutableSettings {
            path: "./SearchSong".into(),
            timeout_secs: 15,
        },
    };

    let routes = RelayRoutes::from_settings(&settings);

    let reminder = routes.route(Endpoint::SetReminder);
    assert_eq!(reminder.timeout, Duration::from_secs(3));
    assert_eq!(reminder.timeout_message, "Calendar operation timed out");

    let search = routes.route(Endpoint::SearchSong);
    assert_eq!(search.executable, std::path::PathBuf::from("./SearchSong"));
    assert_eq!(search.timeout, Duration::from_secs(15));
    assert_eq!(search.timeout_message, "Search song operation timed out");
}
