use crate::config::AppConfig;
use crate::io::local::LocalTemplateSource;
use crate::middleware::assets::{StaticFiles, static_files};
use crate::services::render::TemplateRenderer;
use anyhow::{Context, bail};
use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tower_http::catch_panic::CatchPanicLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod error;
pub mod features;
pub mod io;
pub mod middleware;
pub mod services;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<TemplateRenderer>,
    pub config: Arc<AppConfig>,
    pub static_files: StaticFiles,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let renderer = TemplateRenderer::new(
            Box::new(LocalTemplateSource),
            config.views_dir.clone(),
            config.template_cache,
        );

        Self {
            renderer: Arc::new(renderer),
            static_files: static_files(&config.public_dir),
            config: Arc::new(config),
            started_at: Instant::now(),
        }
    }
}

/// Routes wrapped in the request pipeline. The last `layer` call is the outermost stage.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .merge(features::pages::pages_router())
        .merge(features::demo::demo_router())
        .nest("/api", features::api::api_router())
        .fallback(middleware::not_found::unmatched_route)
        .layer(CatchPanicLayer::custom(middleware::boundary::panic_response))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::not_found::not_found_fallback,
        ))
        .layer(from_fn(middleware::logger::log_requests))
        .layer(from_fn_with_state(state.clone(), middleware::state::inject_state))
        .layer(from_fn_with_state(state.clone(), middleware::assets::serve_static))
        .layer(from_fn(middleware::security::security_headers))
        .layer(from_fn_with_state(
            state.clone(),
            middleware::boundary::error_boundary,
        ))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // determine environment variables, RUST_LOG included
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cascade_server=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // templates are required to serve anything useful, so refuse to start without them
    if !config.views_dir.is_dir() {
        bail!(
            "Template directory {} does not exist",
            config.views_dir.display()
        );
    }

    tracing::info!(
        mode = %config.mode,
        views = %config.views_dir.display(),
        public = %config.public_dir.display(),
        template_cache = config.template_cache,
        "Configuration loaded"
    );

    let state = AppState::new(config.clone());
    let partials = state.renderer.load_partials().await;
    tracing::info!(partials, "Templates ready");

    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    tracing::info!(address = %listener.local_addr()?, "Server listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("SIGINT received, shutting down"),
        _ = terminate => tracing::info!("SIGTERM received, shutting down"),
    }
}
