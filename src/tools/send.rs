use crate::chain::ChainRpc;
use crate::config::Config;
use crate::error::ToolError;
use crate::units::{format_units, parse_units};
use ethers::prelude::*;
use tracing::{debug, info};

/// Arguments for the `send-mon` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SendMonRequest {
    /// Destination address: 0x followed by exactly 40 hex characters.
    #[serde(rename = "toAddress")]
    pub to_address: String,
    /// Amount of MON to send, as a decimal string (e.g. "0.1").
    pub amount: String,
}

/// Sign and submit a native MON transfer.
///
/// Preconditions run in a fixed order, each short-circuiting: credential,
/// then amount parsing and positivity, then sender balance. Callers depend
/// on which error text appears first, so the order must not change.
pub async fn send_mon(
    client: &dyn ChainRpc,
    config: &Config,
    to: Address,
    amount: &str,
) -> Result<String, ToolError> {
    let key = config
        .private_key
        .as_deref()
        .ok_or(ToolError::MissingCredential)?;
    let wallet: LocalWallet = key.parse().map_err(|_| {
        ToolError::Validation("configured private key is not a valid secp256k1 key".to_string())
    })?;

    let value = parse_units(amount, config.network.currency_decimals).map_err(ToolError::Validation)?;
    if value.is_zero() {
        return Err(ToolError::Validation(format!(
            "amount must be greater than zero, got '{}'",
            amount
        )));
    }

    let sender = wallet.address();
    let balance = client.get_balance(sender).await?;
    debug!(sender = ?sender, balance_wei = %balance, value_wei = %value, "checked sender balance");
    if balance < value {
        return Err(ToolError::InsufficientFunds {
            requested: amount.to_string(),
            available: format_units(balance, config.network.currency_decimals),
        });
    }

    let gas_price = client.get_gas_price().await?;
    let tx_hash = client.send_transfer(&wallet, to, value, gas_price).await?;

    info!(to = ?to, amount = %amount, tx_hash = ?tx_hash, "transfer submitted");

    Ok(format!(
        "Sent {} {} to {:?}. Transaction hash: {:?}",
        amount, config.network.currency_symbol, to, tx_hash
    ))
}
