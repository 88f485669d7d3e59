use crate::server::{routes, static_files};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tokio::signal;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::info;

/// Build the Axum application
pub fn build_app(state: AppState) -> Router {
    let body_limit = state.body_limit_bytes;

    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/analyze", post(routes::api_analyze));

    Router::new()
        .route("/", get(routes::index))
        .route("/analyze", post(routes::analyze_form))
        .route("/metrics", get(routes::metrics))
        .nest("/api", api_routes)
        .route("/assets/*path", get(static_files::serve_asset))
        .fallback(static_files::not_found)
        .layer(RequestBodyLimitLayer::new(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server until Ctrl+C or SIGTERM
pub async fn run_server(state: AppState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(state);

    info!("Starting question difficulty analyzer on {}", addr);
    info!("Open http://{} in your browser", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
