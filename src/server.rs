use axum::{Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{Res, api, info, types::AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(api::health))
        .route("/callback", get(api::callback))
        .with_state(state)
}

/// Binds `addr` and serves the helper until the process is stopped.
pub async fn start_api_server(addr: &str, state: AppState) -> Res<()> {
    let addr = SocketAddr::from_str(addr)
        .map_err(|e| format!("Failed to parse server address {}: {}", addr, e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
