use catalog_server::utils::init_logger;
use catalog_server::{Config, Server};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    init_logger(&config);

    tracing::info!("Starting catalog-server (env: {})", config.environment);

    Server::new(config).run().await?;

    Ok(())
}
