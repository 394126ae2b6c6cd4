use std::sync::Arc;
use std::time::Duration;

use beastboard::api::router::create_router;
use beastboard::config::AppConfig;
use beastboard::flash::HistoryClient;
use beastboard::markets::MarketRegistry;
use beastboard::{metrics, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let addr = format!("{}:{}", config.host, config.port);

    let registry = Arc::new(MarketRegistry::builtin());
    tracing::info!(markets = registry.len(), "Market registry loaded");

    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http_timeout_secs))
        .build()?;
    let history = Arc::new(HistoryClient::new(http, config.history_base_url.clone()));

    let metrics_handle = metrics::init_metrics();

    let state = AppState {
        config,
        registry,
        history,
        metrics_handle,
    };
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {addr}");
    axum::serve(listener, router).await?;

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();
}
