mod chain;
mod config;
mod error;
mod logging;
mod server;
mod tools;
mod units;

use std::process;
use std::sync::Arc;
use std::time::Duration;

use rmcp::{transport::stdio, ServiceExt};
use tracing::{error, info};

use crate::chain::MonadClient;
use crate::config::Config;
use crate::server::MonadServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    config.validate()?;

    logging::init_logging(&config.server.log_level, config.server.log_json_format)?;
    config.log_startup_info();

    let client = match MonadClient::new(
        &config.network.rpc_url,
        config.network.chain_id,
        Duration::from_secs(config.network.http_timeout),
    ) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to build RPC client");
            process::exit(1);
        }
    };

    let server = MonadServer::new(Arc::new(config), Arc::new(client));

    info!("starting Monad MCP server on stdio");
    let service = match server.serve(stdio()).await {
        Ok(service) => service,
        Err(e) => {
            error!(error = %e, "failed to establish MCP transport");
            process::exit(1);
        }
    };

    let quit_reason = service.waiting().await?;
    info!(reason = ?quit_reason, "MCP server shut down");

    Ok(())
}
