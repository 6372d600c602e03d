use crate::chain::ChainRpc;
use crate::error::ToolError;
use crate::units::format_gwei;
use ethers::types::U256;
use futures::future::join_all;
use tracing::debug;

/// Number of most recent blocks sampled for the average gas price.
pub const AVERAGE_WINDOW: u64 = 5;

/// Arguments for the `get-gas-price` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetGasPriceRequest {
    /// Average the base fee over the five most recent blocks instead of
    /// returning the instantaneous gas price.
    #[serde(default)]
    pub average: bool,
}

/// Fetch the current gas price, or the unweighted mean base fee of the
/// five most recent blocks when `average` is set.
pub async fn get_gas_price(
    client: &dyn ChainRpc,
    request: GetGasPriceRequest,
) -> Result<String, ToolError> {
    if !request.average {
        let price = client.get_gas_price().await?;
        return Ok(format!("Current gas price: {} gwei", format_gwei(price)));
    }

    let latest = client.get_block_number().await?;
    let oldest = latest.saturating_sub(AVERAGE_WINDOW - 1);
    debug!(oldest, latest, "sampling blocks for average gas price");

    // Independent lookups, issued concurrently; order does not matter
    // since the results are only summed.
    let sampled = join_all((oldest..=latest).map(|number| client.get_block_base_fee(number))).await;

    let total = sampled.len();
    let mut sum = U256::zero();
    let mut count = 0u64;
    for base_fee in sampled {
        if let Some(fee) = base_fee? {
            sum += fee;
            count += 1;
        }
    }

    if count == 0 {
        return Err(ToolError::NoBaseFee(total));
    }

    let mean = sum / U256::from(count);
    Ok(format!(
        "Average gas price over the last {} blocks: {} gwei",
        count,
        format_gwei(mean)
    ))
}
