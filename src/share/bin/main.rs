include!("../../lib.rs");

use std::net::SocketAddr;
use axum::{
    middleware,
    routing::post,
    Router,
};
use crate::core::controller::{require_login, track_elapsed, AppState};
use crate::core::domain::Configuration;
use crate::core::platform::ClientStore;
use crate::share::controller::{get_book, share_book};
use crate::utils::http::{build_http_client, setup_tracing};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let profile = std::env::var("BOOKSHARE_PROFILE").unwrap_or_else(|_| "dev".to_string());
    let store = if profile == "prod" { ClientStore::Http } else { ClientStore::Local };
    let config = Configuration::new(profile.as_str());
    let http = build_http_client(config.http_timeout_secs)?;
    let state = AppState::new(config, store, http);

    let app = Router::new()
        .route("/book/share", post(share_book))
        .route("/book/info", post(get_book))
        .route_layer(middleware::from_fn(require_login))
        .layer(middleware::from_fn(track_elapsed))
        .with_state(state);

    let addr: SocketAddr = std::env::var("BOOKSHARE_LISTEN")
        .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
        .parse()?;
    tracing::info!(%addr, profile = profile.as_str(), "starting book share service");
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;
    Ok(())
}
