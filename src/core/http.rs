//! Liveness endpoint using Axum: one static route so a hosting platform can
//! see the process is alive while the poll loop blocks on I/O.

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

pub const LIVENESS_PATH: &str = "/";
pub const LIVENESS_BODY: &str = "Signal bot is running";

pub async fn liveness() -> &'static str {
    LIVENESS_BODY
}

pub fn create_router() -> Router {
    Router::new().route(LIVENESS_PATH, get(liveness)).layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
        ),
    )
}

pub async fn start_server(port: u16) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(("0.0.0.0", port)).await?;
    info!(port = port, "Liveness server listening on port {}", port);
    serve(listener).await
}

/// Serve the liveness router on an already bound listener.
pub async fn serve(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, create_router()).await
}
