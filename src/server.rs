use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::sync::Mutex;

use crate::{Res, api, types::AuthorizationResponse};

/// Serves `/callback` and `/health` until the task is aborted.
pub async fn start_api_server(
    server_addr: &str,
    state: Arc<Mutex<Option<AuthorizationResponse>>>,
) -> Res<()> {
    let app = Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback).layer(Extension(state)));

    let addr = SocketAddr::from_str(server_addr)
        .map_err(|e| format!("Failed to parse server address {server_addr}: {e}"))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
