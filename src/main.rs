use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use tagerpro::config::AppConfig;
use tagerpro::llm::{ChatProvider, OpenAiClient};
use tagerpro::routes::configure_routes;
use tagerpro::store::{Store, StoreConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store_config = StoreConfig::from_connection_string(&config.database_url)?;
    let store = Store::new(store_config).await?;
    tracing::info!("connected to database");

    let provider: Arc<dyn ChatProvider> = Arc::new(OpenAiClient::new(config.ai.clone())?);

    let routes = configure_routes(store, provider);

    tracing::info!(port = config.port, "starting server");
    warp::serve(routes).run(([0, 0, 0, 0], config.port)).await;

    Ok(())
}
