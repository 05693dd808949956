pub mod axis;
pub mod config;
pub mod error;
pub mod grading;
pub mod routes;
pub mod state;
pub mod submission;
pub mod token;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tokio::signal;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::grading::GraderRegistry;
use crate::state::{AppState, SharedState};

pub use crate::axis::Axis;
pub use crate::error::AppError;
pub use crate::grading::{FnGrader, GradeOutcome, GradeResponse, Grader};
pub use crate::submission::{GradeableCollection, Gradeables};

pub fn build_app(config: Config, graders: GraderRegistry) -> Router {
    let max_body_size = config.max_body_size;
    let state: SharedState = Arc::new(AppState { config, graders });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .with_state(state)
}

/// Install the global tracing subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &Config) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .try_init();
}

/// Serve the registered graders until Ctrl+C or SIGTERM.
pub async fn serve(config: Config, graders: GraderRegistry) -> std::io::Result<()> {
    let addr = SocketAddr::new(config.host, config.port);
    tracing::info!(
        "Starting sketchgrade with {} problem(s)",
        graders.list().len()
    );
    let app = build_app(config, graders);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn health() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
