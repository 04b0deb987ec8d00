use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use inventory_api_rust::{
    app,
    config::Config,
    constants::API_NAME,
    repository::{mongo, MongoCarRepository, MongoDealershipRepository, MongoReviewRepository},
    seed::{SeedLoader, SeedPlan},
    state::AppState,
};
use mongodb::Client;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("{} Starting inventory API on port {}", API_NAME, config.server_port);

    // Connections are established lazily; only a malformed URI fails here.
    let client = Client::with_uri_str(&config.mongodb_uri)
        .await
        .context("Invalid MongoDB connection string")?;
    let database = client.database(&config.database_name);

    let cars = Arc::new(MongoCarRepository::new(&database));
    let dealerships = Arc::new(MongoDealershipRepository::new(&database));
    let reviews = Arc::new(MongoReviewRepository::new(&database));

    let seed_loader = SeedLoader::new(
        SeedPlan::from(&config),
        cars.clone(),
        dealerships.clone(),
        reviews.clone(),
    );

    // Seeding runs alongside the listener; requests may see partial data meanwhile.
    tokio::spawn(async move {
        match mongo::ping(&database).await {
            Ok(()) => {
                tracing::info!("{} MongoDB connected", API_NAME);
                seed_loader.run().await;
            }
            Err(e) => tracing::error!("{} MongoDB connection error: {}", API_NAME, e),
        }
    });

    let app = app(AppState::new(cars, dealerships, reviews));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("{} Server listening on {}", API_NAME, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("{} Server shut down", API_NAME);
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("{} Failed to install Ctrl+C handler: {}", API_NAME, e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("{} Failed to install signal handler: {}", API_NAME, e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("{} Shutdown signal received", API_NAME);
}
