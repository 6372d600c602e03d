use crate::chain::ChainRpc;
use crate::config::Config;
use crate::error::ToolError;
use crate::units::format_units;
use ethers::types::Address;
use tracing::debug;

/// Arguments for the `check-balance` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckBalanceRequest {
    /// Address to query: 0x followed by exactly 40 hex characters.
    pub address: String,
}

/// Fetch the native balance of `address` and format it in whole MON.
pub async fn check_balance(
    client: &dyn ChainRpc,
    config: &Config,
    address: Address,
) -> Result<String, ToolError> {
    let balance = client.get_balance(address).await?;
    debug!(address = ?address, balance_wei = %balance, "balance fetched");

    Ok(format!(
        "Balance for {:?}: {} {}",
        address,
        format_units(balance, config.network.currency_decimals),
        config.network.currency_symbol
    ))
}
