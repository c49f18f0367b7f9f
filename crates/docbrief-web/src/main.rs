use std::net::SocketAddr;
use std::sync::Arc;

mod error;
mod handlers;
mod state;
mod upload;

use docbrief_core::{Config, MemoryStore, SummaryPipeline, TokenSigner};
use docbrief_llm::ChatClient;
use docbrief_pdf::PdfTextExtractor;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(?config, "starting docbrief");
    if config.api_key.is_none() {
        tracing::warn!("no chat-completion API key configured; /summarize will fail");
    }

    let chat = ChatClient::new(config.api_key.clone())
        .with_model(config.model.clone())
        .with_base_url(config.llm_base_url.clone())
        .with_timeout(config.llm_timeout);
    let pipeline = SummaryPipeline::new(Arc::new(PdfTextExtractor::new()), Arc::new(chat));

    let signer = config
        .auth_enabled
        .then(|| TokenSigner::new(&config.token_secret, config.token_ttl_secs));

    let state = Arc::new(AppState {
        store: Arc::new(MemoryStore::new()),
        pipeline,
        signer,
    });

    // Uploads are whole documents; cap them well below anything pathological.
    let body_limit = axum::extract::DefaultBodyLimit::max(25 * 1024 * 1024);
    let cors = tower_http::cors::CorsLayer::permissive();

    let mut app = axum::Router::new().route(
        "/summarize",
        axum::routing::post(handlers::summarize::summarize),
    );
    if config.auth_enabled {
        app = app
            .route("/register", axum::routing::post(handlers::auth::register))
            .route("/login", axum::routing::post(handlers::auth::login))
            .route("/me", axum::routing::get(handlers::auth::me))
            .route(
                "/summaries",
                axum::routing::get(handlers::summarize::history),
            );
    }
    let app = app.layer(body_limit).layer(cors).with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, auth = config.auth_enabled, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
