use std::net::SocketAddr;
use std::time::Duration;

use axum::{Json, Router, http::StatusCode, routing::post};
use calrelay_models::relay::{RelayResult, SEARCH_SONG_PATH, SET_REMINDER_PATH};
use calrelay_models::song::SongSearchRequest;
use tokio::net::TcpListener;

use crate::relay_client::{HttpRelayClient, RelayClient, RelayClientError};
use crate::tests::test_utils::meeting;

async fn spawn_relay(router: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    address
}

fn client(address: SocketAddr, timeout: Duration) -> HttpRelayClient {
    HttpRelayClient::with_timeouts(&format!("http://{address}/"), timeout, timeout).unwrap()
}

#[tokio::test]
async fn posts_reminder_fields_and_reads_result() {
    let router = Router::new().route(
        SET_REMINDER_PATH,
        post(|Json(body): Json<serde_json::Value>| async move {
            Json(RelayResult::success(body["title"].as_str().unwrap_or_default()))
        }),
    );
    let address = spawn_relay(router).await;

    let result = client(address, Duration::from_secs(5))
        .set_reminder(&meeting())
        .await
        .unwrap();

    assert_eq!(result, RelayResult::success("Team Meeting"));
}

#[tokio::test]
async fn omits_absent_artist_from_body() {
    let router = Router::new().route(
        SEARCH_SONG_PATH,
        post(|Json(body): Json<serde_json::Value>| async move {
            Json(RelayResult::success(body.to_string()))
        }),
    );
    let address = spawn_relay(router).await;

    let request = SongSearchRequest {
        song: "Yesterday".to_string(),
        artist: None,
    };
    let result = client(address, Duration::from_secs(5))
        .search_song(&request)
        .await
        .unwrap();

    assert_eq!(result.output, r#"{"song":"Yesterday"}"#);
}

#[tokio::test]
async fn slow_relay_is_reported_as_timeout() {
    let router = Router::new().route(
        SET_REMINDER_PATH,
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(RelayResult::success("too late"))
        }),
    );
    let address = spawn_relay(router).await;

    let result = client(address, Duration::from_millis(200))
        .set_reminder(&meeting())
        .await;

    assert!(matches!(result, Err(RelayClientError::Timeout)));
}

#[tokio::test]
async fn server_error_is_reported_as_invalid_response() {
    let router = Router::new().route(
        SET_REMINDER_PATH,
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let address = spawn_relay(router).await;

    let result = client(address, Duration::from_secs(5))
        .set_reminder(&meeting())
        .await;

    assert!(matches!(result, Err(RelayClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn closed_port_is_reported_as_transport_error() {
    let address = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };

    let result = client(address, Duration::from_secs(5))
        .set_reminder(&meeting())
        .await;

    assert!(matches!(result, Err(RelayClientError::Transport(_))));
}
