use std::{net::SocketAddr, str::FromStr};

use axum::{Extension, Router, routing::get};

use crate::{Res, api, spotify::LinkResolver};

pub fn router(resolver: LinkResolver) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/resolve", get(api::resolve))
        .route("/infer", get(api::infer))
        .route("/player", get(api::player))
        .layer(Extension(resolver))
}

pub async fn start_api_server(addr: &str, resolver: LinkResolver) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router(resolver)).await?;
    Ok(())
}
