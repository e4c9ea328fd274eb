use shop_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. .env and configuration
    dotenv::dotenv().ok();
    let config = Config::from_env();

    // 2. Logging
    setup_environment(&config);
    print_banner();
    tracing::info!(environment = %config.environment, "Shop server starting...");

    // 3. Server state (open the database, reconcile the seed catalog)
    let state = ServerState::initialize(&config)?;

    // 4. HTTP server
    let server = Server::with_state(config, state);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
