use depin_dashboard::{build_router, config::AppConfig, services::coingecko::CoinGeckoService, AppState, PRICES_PATH};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,depin_dashboard=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!("Using CoinGecko at {}", config.coingecko_base_url);
    let coingecko = CoinGeckoService::new(config.coingecko_api_key, config.coingecko_base_url);

    let app = build_router(AppState { coingecko });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    tracing::info!("Serving {} on {}", PRICES_PATH, listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
