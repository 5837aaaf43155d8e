use std::sync::Arc;

use tower_http::cors::CorsLayer;

use pitchai::auth::{AuthProvider, AuthRouteState, HttpAuthProvider, LocalAuthProvider, auth_routes};
use pitchai::config::AppConfig;
use pitchai::content::content_routes;
use pitchai::demo::{MemoryClipboard, TypingSequencer, builtin_templates, demo_routes};
use pitchai::onboarding::{OnboardingManager, OnboardingRouteState, onboarding_routes};
use pitchai::store::{LibSqlStore, SettingsStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();

    eprintln!("📨 PitchAI v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   API: http://0.0.0.0:{}/api", config.port);
    eprintln!("   Demo WS: ws://0.0.0.0:{}/ws/demo", config.port);

    // ── Settings store ──────────────────────────────────────────────────
    let store: Arc<dyn SettingsStore> = Arc::new(
        LibSqlStore::new_local(std::path::Path::new(&config.db_path))
            .await
            .unwrap_or_else(|e| {
                eprintln!("Error: Failed to open settings store at {}: {}", config.db_path, e);
                std::process::exit(1);
            }),
    );
    eprintln!("   Store: {}", config.db_path);

    // ── Auth provider ───────────────────────────────────────────────────
    let provider: Arc<dyn AuthProvider> = match &config.auth_base_url {
        Some(url) => {
            eprintln!("   Auth: {}", url);
            Arc::new(HttpAuthProvider::new(url.clone()))
        }
        None => {
            eprintln!("   Auth: local (set PITCHAI_AUTH_URL for a real provider)");
            Arc::new(LocalAuthProvider)
        }
    };

    // ── Demo sequencer ──────────────────────────────────────────────────
    let sequencer = TypingSequencer::new(
        builtin_templates(),
        config.typing,
        Arc::new(MemoryClipboard::new()),
    );
    // Begin the reveal so the first WS client sees the demo mid-typing.
    let _reveal = sequencer.start();

    // ── Onboarding ──────────────────────────────────────────────────────
    let manager = Arc::new(OnboardingManager::new(Arc::clone(&store)));
    if manager.is_complete().await.unwrap_or(false) {
        tracing::info!("onboarding already complete, callers route to /dashboard");
    }

    let app = demo_routes(sequencer)
        .merge(onboarding_routes(OnboardingRouteState {
            manager: Arc::clone(&manager),
        }))
        .merge(auth_routes(AuthRouteState { provider, manager }))
        .merge(content_routes())
        .route("/health", axum::routing::get(health))
        .layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "PitchAI server started");
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "status": "ok",
        "service": "pitchai"
    }))
}
