use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::post};
use calrelay_models::reminder::ReminderRequest;
use calrelay_models::song::SongSearchRequest;

use crate::handlers;
use crate::routes::{Endpoint, RelayRoutes};

pub fn create_router(routes: Arc<RelayRoutes>) -> Router {
    Router::new()
        .route(
            Endpoint::SetReminder.path(),
            post(handlers::relay::<ReminderRequest>),
        )
        .route(
            Endpoint::SearchSong.path(),
            post(handlers::relay::<SongSearchRequest>),
        )
        .with_state(routes)
}

/// Serves the relay on `bind_address` until `shutdown` resolves.
pub async fn serve<F>(bind_address: SocketAddr, routes: RelayRoutes, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    if !bind_address.ip().is_loopback() {
        log::warn!(
            "Relay is bound to non-loopback address {}; its endpoints have no authentication",
            bind_address
        );
    }

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log::info!("Relay service listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(Arc::new(routes)))
        .with_graceful_shutdown(shutdown)
        .await?;

    log::info!("Relay service has shut down.");
    Ok(())
}
