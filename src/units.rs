use ethers::types::U256;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Decimals of the native MON token.
pub const MON_DECIMALS: u8 = 18;

/// Decimals of the gwei gas unit.
pub const GWEI_DECIMALS: u8 = 9;

/// Format a raw amount as a decimal string with the given number of
/// decimals, trimming trailing zeros. Exact; never goes through floats.
pub fn format_units(amount: U256, decimals: u8) -> String {
    if decimals == 0 {
        return amount.to_string();
    }

    let divisor = U256::from(10).pow(U256::from(decimals));
    let integer_part = amount / divisor;
    let fractional_part = amount % divisor;

    if fractional_part.is_zero() {
        integer_part.to_string()
    } else {
        let frac_str = format!("{:0width$}", fractional_part, width = decimals as usize);
        let frac_trimmed = frac_str.trim_end_matches('0');
        if frac_trimmed.is_empty() {
            integer_part.to_string()
        } else {
            format!("{}.{}", integer_part, frac_trimmed)
        }
    }
}

/// Parse a decimal amount string into its smallest-unit representation.
///
/// Uses `rust_decimal` so the full precision of the input survives the
/// conversion. Negative amounts and amounts with more fractional digits
/// than `decimals` are rejected.
pub fn parse_units(amount_str: &str, decimals: u8) -> Result<U256, String> {
    let decimal = Decimal::from_str(amount_str)
        .map_err(|e| format!("could not parse amount '{}': {}", amount_str, e))?;

    if decimal.is_sign_negative() {
        return Err(format!("amount '{}' must not be negative", amount_str));
    }

    let decimal_str = decimal.to_string();

    let (integer_part, fractional_part) = if let Some(dot_pos) = decimal_str.find('.') {
        let (int_part, frac_part_with_dot) = decimal_str.split_at(dot_pos);
        (int_part, &frac_part_with_dot[1..])
    } else {
        (decimal_str.as_str(), "")
    };

    if fractional_part.len() > decimals as usize {
        return Err(format!(
            "amount '{}' has more than {} decimal places",
            amount_str, decimals
        ));
    }

    let padding_zeros = decimals as usize - fractional_part.len();
    let final_str = format!(
        "{}{}{}",
        integer_part,
        fractional_part,
        "0".repeat(padding_zeros)
    );

    U256::from_dec_str(&final_str).map_err(|e| format!("amount too large to convert: {}", e))
}

/// Format a wei amount as MON (18 decimals).
pub fn format_mon(amount: U256) -> String {
    format_units(amount, MON_DECIMALS)
}

/// Format a wei amount as gwei (9 decimals).
pub fn format_gwei(amount: U256) -> String {
    format_units(amount, GWEI_DECIMALS)
}
