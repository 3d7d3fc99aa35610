use std::sync::Arc;

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use blogsmith::config::AppConfig;
use blogsmith::provider::CompletionClient;
use blogsmith::routes::api_routes::router;
use blogsmith::service::blog_service::BlogService;
use blogsmith::store::feedback_store::FeedbackStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (development convenience)
    dotenvy::dotenv().ok();

    // Initialise tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogsmith=debug,tower_http=debug".into()),
        )
        .init();

    let config = Arc::new(AppConfig::from_env());

    // ── Dependency wiring ─────────────────────────────────────────────────────
    let provider = CompletionClient::new(&config.provider_api_url, &config.model);
    let feedback = FeedbackStore::new();
    let service = BlogService::new(config.clone(), provider, feedback);

    // ── Router ────────────────────────────────────────────────────────────────
    // CORS is deliberately permissive: any origin, GET + POST, Content-Type
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let app = router(service, config.feedback_enabled)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // ── Listen ────────────────────────────────────────────────────────────────
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{addr}/");

    axum::serve(listener, app).await?;
    Ok(())
}
