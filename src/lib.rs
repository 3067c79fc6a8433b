pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod search;

use api::{AppState, create_api_router};
use axum::Router;
use config::Config;
use report::GroqClient;
use search::GitHubSearchClient;
use std::io::IsTerminal;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa_rapidoc::RapiDoc;

/// Initialize the tracing subscriber for logging
/// Uses journald when running as a service (no terminal), fmt when running interactively
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "trend_report=info,tower_http=warn".into());

    if std::io::stdout().is_terminal() {
        // Running in a terminal, use formatted output
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    } else {
        // Running as a service, use journald
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_journald::layer().expect("Failed to connect to journald"))
            .init();
    }
}

/// Build the HTTP application (summary endpoint plus API docs) around `state`
pub fn build_app(state: Arc<AppState>) -> Router {
    let (api_router, api_doc) = create_api_router(state).split_for_parts();

    let doc_routes = Router::new()
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", api_doc).path("/api-docs"));

    Router::new()
        .merge(api_router)
        .merge(doc_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Application state wired to the real GitHub and Groq clients
pub fn production_state(config: Config) -> Arc<AppState> {
    let http_client = reqwest::Client::new();

    Arc::new(AppState {
        search: Arc::new(GitHubSearchClient::new(http_client.clone(), &config.github)),
        reports: Arc::new(GroqClient::new(http_client, &config.llm)),
        config,
    })
}

/// Run the trend report relay
pub async fn run_service(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("trend-report version {}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load(config_path).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to load config, using defaults");
        Config::default().with_secrets_from_env()
    });

    if config.github.token.is_none() {
        tracing::warn!("No GitHub token configured, searches will be unauthenticated");
    }
    if config.llm.api_key.is_none() {
        tracing::warn!("No completion API key configured, report generation will fail");
    }

    tracing::info!(
        host = %config.server.host,
        port = config.server.port,
        github = %config.github.api_url,
        llm = %config.llm.base_url,
        model = %config.llm.model,
        "Starting server"
    );

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = build_app(production_state(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("API documentation available at http://{}/api-docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
