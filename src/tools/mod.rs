//! The three Monad tool handlers.
//!
//! Each handler is a free function over the [`ChainRpc`](crate::chain::ChainRpc)
//! trait so tests run against an offline fake client:
//! - `gas_price`: current or five-block-average gas price
//! - `balance`: native MON balance of an address
//! - `send`: sign and submit a MON transfer

pub mod balance;
pub mod gas_price;
pub mod send;

pub use balance::{check_balance, CheckBalanceRequest};
pub use gas_price::{get_gas_price, GetGasPriceRequest};
pub use send::{send_mon, SendMonRequest};

use ethers::types::Address;

/// Validate and parse an address argument.
///
/// Accepts exactly `0x` followed by 40 hex characters; everything else is
/// rejected before any handler logic or network call runs.
pub fn parse_address(input: &str) -> Result<Address, String> {
    let hex = input
        .strip_prefix("0x")
        .ok_or_else(|| format!("address '{}' must start with 0x", input))?;

    if hex.len() != 40 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(format!(
            "address '{}' must be 0x followed by exactly 40 hex characters",
            input
        ));
    }

    input
        .parse()
        .map_err(|_| format!("address '{}' could not be parsed", input))
}
