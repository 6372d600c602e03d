use std::env;
use tracing::info;

/// Monad testnet chain id.
pub const MONAD_TESTNET_CHAIN_ID: u64 = 10143;

/// Default Monad testnet RPC endpoint.
pub const MONAD_TESTNET_RPC_URL: &str = "https://testnet-rpc.monad.xyz";

/// Server identity and logging settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub name: String,
    pub version: String,
    pub log_level: String,
    pub log_json_format: bool,
}

/// Static description of the target network.
///
/// Constructed once at startup and shared read-only by all handlers.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub chain_id: u64,
    pub chain_name: String,
    pub currency_symbol: String,
    pub currency_decimals: u8,
    pub rpc_url: String,
    /// Per-request HTTP timeout, in seconds.
    pub http_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub network: NetworkConfig,
    /// Private key for the sending account. Optional: its absence only
    /// fails `send-mon` calls, never startup.
    pub private_key: Option<String>,
}

impl Config {
    /// Load configuration from the environment (and `.env`, if present).
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let server = ServerConfig {
            name: env::var("SERVER_NAME").unwrap_or_else(|_| "monad-mcp-server".to_string()),
            version: env::var("SERVER_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_json_format: env::var("LOG_JSON_FORMAT")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
        };

        let network = NetworkConfig {
            chain_id: MONAD_TESTNET_CHAIN_ID,
            chain_name: "Monad Testnet".to_string(),
            currency_symbol: "MON".to_string(),
            currency_decimals: 18,
            rpc_url: env::var("MONAD_RPC_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| MONAD_TESTNET_RPC_URL.to_string()),
            http_timeout: env::var("HTTP_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
        };

        let private_key = env::var("MONAD_PRIVATE_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Config {
            server,
            network,
            private_key,
        })
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.network.rpc_url.is_empty() {
            anyhow::bail!("MONAD_RPC_URL must not be empty");
        }

        if !self.network.rpc_url.starts_with("http://")
            && !self.network.rpc_url.starts_with("https://")
        {
            anyhow::bail!(
                "MONAD_RPC_URL must be an http(s) endpoint, got '{}'",
                self.network.rpc_url
            );
        }

        if self.network.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than zero");
        }

        Ok(())
    }

    /// Log a startup summary. Secrets are never printed; the RPC URL is
    /// masked past any query string since keys are often embedded there.
    pub fn log_startup_info(&self) {
        let masked_url = match self.network.rpc_url.split_once('?') {
            Some((base, _)) => format!("{}?***", base),
            None => self.network.rpc_url.clone(),
        };

        info!(
            server = %self.server.name,
            version = %self.server.version,
            chain = %self.network.chain_name,
            chain_id = self.network.chain_id,
            rpc_url = %masked_url,
            http_timeout_secs = self.network.http_timeout,
            private_key_configured = self.private_key.is_some(),
            "configuration loaded"
        );
    }
}
