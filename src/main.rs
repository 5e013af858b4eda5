use anyhow::Context;
use portfolio_server::config::{ConfigService, ServerConfig};
use portfolio_server::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_config(&ConfigService::from_env())?;
    portfolio_server::logging::init(config.log_format);

    tracing::info!("Starting portfolio server...");

    let service = match &config.seed_file {
        Some(path) => InMemoryPortfolioService::from_seed_file(path)
            .await
            .with_context(|| format!("loading {}", path.display()))?,
        None => {
            tracing::warn!(
                "{} not set; serving an empty portfolio",
                ServerConfig::SEED_FILE
            );
            InMemoryPortfolioService::new()
        }
    };

    let container = ContainerBuilder::new()
        .provide::<dyn PortfolioService>(Arc::new(service))
        .build();
    let router = build_router(container)?;

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
