//! Gateway process bootstrap: config, logging, shared state, server.

use std::sync::Arc;

use shopgate::config::AppConfig;
use shopgate::gateway::{self, state::AppState};
use shopgate::logging::init_logging;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = init_logging(&config);

    tracing::info!("starting gateway (env: {})", env);
    tracing::info!(
        "downstream services: orders={} payments={} products={}",
        config.services.orders_url,
        config.services.payments_url,
        config.services.products_url
    );

    let state = Arc::new(AppState::new(&config.jwt_secret, config.services.clone())?);
    gateway::run_server(&config.gateway.host, config.gateway.port, state).await;
    Ok(())
}
