// src/utils.rs
use anyhow::{Result, bail};
use ethers::types::U256;

/// Renders a raw token amount as a decimal string, trimming trailing zeros
/// from the fractional part ("1.5" rather than "1.500000000000000000").
pub fn u256_to_human(value: U256, decimals: u8) -> String {
    if decimals == 0 {
        return value.to_string();
    }
    let divisor = U256::exp10(decimals as usize);
    let integer = value / divisor;
    let mut fraction = (value % divisor).to_string();
    let width = decimals as usize;
    while fraction.len() < width {
        fraction.insert(0, '0');
    }
    while fraction.ends_with('0') && !fraction.is_empty() {
        fraction.pop();
    }
    if fraction.is_empty() {
        integer.to_string()
    } else {
        format!("{}.{}", integer, fraction)
    }
}

/// Parses a decimal string back into a raw token amount. The fractional part
/// must fit in `decimals` digits; anything finer has no on-chain
/// representation.
pub fn human_to_u256(value: &str, decimals: u8) -> Result<U256> {
    let (integer, fraction) = match value.split_once('.') {
        Some((i, f)) => (i, f),
        None => (value, ""),
    };
    if integer.is_empty() && fraction.is_empty() {
        bail!("empty amount");
    }
    if fraction.len() > decimals as usize {
        bail!(
            "amount {} has more than {} fractional digits",
            value,
            decimals
        );
    }
    let integer: U256 = if integer.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(integer)?
    };
    let mut fraction = fraction.to_string();
    while fraction.len() < decimals as usize {
        fraction.push('0');
    }
    let fraction: U256 = if fraction.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(&fraction)?
    };
    match integer
        .checked_mul(U256::exp10(decimals as usize))
        .and_then(|scaled| scaled.checked_add(fraction))
    {
        Some(raw) => Ok(raw),
        None => bail!("amount {} overflows the uint256 range", value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanizes_whole_and_fractional_amounts() {
        let one_and_a_half = U256::from(1_500_000_000_000_000_000u64);
        assert_eq!(u256_to_human(one_and_a_half, 18), "1.5");
        assert_eq!(u256_to_human(U256::from(42u64), 0), "42");
        assert_eq!(u256_to_human(U256::zero(), 18), "0");
        // Leading zeros in the fraction must survive.
        assert_eq!(u256_to_human(U256::from(1_000_005u64), 6), "1.000005");
    }

    #[test]
    fn parses_human_amounts() {
        assert_eq!(
            human_to_u256("1.5", 18).unwrap(),
            U256::from(1_500_000_000_000_000_000u64)
        );
        assert_eq!(human_to_u256("42", 0).unwrap(), U256::from(42u64));
        assert_eq!(human_to_u256(".5", 1).unwrap(), U256::from(5u64));
    }

    #[test]
    fn rejects_overlong_fraction() {
        assert!(human_to_u256("1.0000001", 6).is_err());
        assert!(human_to_u256("", 6).is_err());
    }

    #[test]
    fn rejects_amounts_that_overflow_uint256() {
        // Parses as a valid decimal but cannot be scaled by 10^18 without
        // leaving the uint256 range; must be an error, not a panic.
        let huge = "9".repeat(60);
        assert!(human_to_u256(&huge, 18).is_err());
        // The largest representable value still parses.
        let max = U256::MAX;
        assert_eq!(human_to_u256(&max.to_string(), 0).unwrap(), max);
    }

    #[test]
    fn human_round_trips_through_parse() {
        let value = U256::from(123_456_789_000_000u64);
        let text = u256_to_human(value, 9);
        assert_eq!(human_to_u256(&text, 9).unwrap(), value);
    }
}
