use std::net::SocketAddr;

use msgboard::config::AppConfig;
use msgboard::routes::configure_routes;
use msgboard::store::{MessageStore, StoreConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "msgboard=info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    // Open the store for the lifetime of the process
    let store_config = StoreConfig::from_connection_string(&config.database_url)?;
    let store = MessageStore::new(store_config).await?;

    let routes = configure_routes(store);

    let addr: SocketAddr = ([127, 0, 0, 1], config.port).into();
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    warp::serve(routes)
        .incoming(listener)
        .graceful(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .run()
        .await;

    Ok(())
}
