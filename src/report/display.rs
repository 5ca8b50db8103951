//! Human-readable figures derived from a report.
//!
//! Amounts are re-parsed into `BigUint` and divided exactly; floating point
//! only appears in percentages.

use crate::utils::config::ETHER_DECIMALS;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Format a wei amount as ether with at most `max_digits` fractional digits
///
/// The fraction is truncated, then trailing zeros are trimmed.
pub fn format_ether(wei: &BigUint, max_digits: usize) -> String {
    let divisor = BigUint::from(10u32).pow(ETHER_DECIMALS);
    let whole = wei / &divisor;
    let fraction = wei % &divisor;

    let fraction_str = format!("{:0>width$}", fraction.to_string(), width = ETHER_DECIMALS as usize);
    let digits = max_digits.min(ETHER_DECIMALS as usize);
    let fraction_str = fraction_str[..digits].trim_end_matches('0');

    if fraction_str.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, fraction_str)
    }
}

/// `part / total` as a percentage with one decimal place
pub fn percentage(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", part as f64 / total as f64 * 100.0)
}

/// Share of `total` taken by `part`, for big amounts
pub fn amount_percentage(part: &BigUint, total: &BigUint) -> String {
    if total.is_zero() {
        return "0.0".to_string();
    }
    // Scale before dividing so the ratio keeps three significant places
    let per_mille = (part * 1000u32) / total;
    let per_mille = per_mille.to_u64().unwrap_or(u64::MAX);
    format!("{}.{}", per_mille / 10, per_mille % 10)
}

/// Average fee per transaction (integer division), zero when `count` is zero
pub fn average_fee(total_fee: &BigUint, count: u64) -> BigUint {
    if count == 0 {
        return BigUint::zero();
    }
    total_fee / count
}
