use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tracing::info;

use jarvis_backend::config::Config;
use jarvis_backend::routes;
use jarvis_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jarvis_backend=info,tower_http=info".into()),
        )
        .init();

    // Fails fast when OPENAI_API_KEY is missing.
    let config = Config::from_env()?;

    let state = Arc::new(AppState::new(&config));

    let cors = CorsLayer::very_permissive();

    let app = routes::create_router().with_state(state).layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(model = %config.model, "J.A.R.V.I.S relay online at http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
