use crate::api::{data_routes, member_routes};
use crate::infrastructure::config::ServerSettings;
use crate::state::AppState;
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

async fn liveness() -> &'static str {
    "OK"
}

/// Builds the application router: document API, roster API and health.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health/live", get(liveness))
        .route("/health/ready", get(liveness))
        .merge(data_routes())
        .merge(member_routes())
        .with_state(state)
}

/// Serves `app` on an already bound listener until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the server fails while running.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> anyhow::Result<()> {
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Runs the HTTP server with the Prometheus endpoint until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the recorder cannot be installed, the address cannot
/// be bound, or the server fails while running.
pub async fn run_server(config: &ServerSettings, state: Arc<AppState>) -> anyhow::Result<()> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| anyhow::anyhow!("Failed to install Prometheus recorder: {e}"))?;

    let app = build_router(state).route(
        "/metrics",
        get(move || std::future::ready(handle.render())),
    );

    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Taskforce server listening on {}", addr);

    serve(listener, app, shutdown_signal()).await
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
