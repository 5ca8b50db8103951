//! Output JSON schema for analysis reports.
//!
//! Every fee and gas amount is an exact base-10 string so that consumers
//! can re-parse it without precision loss.

use crate::classifier::MethodCategory;
use crate::utils::error::ReportError;
use chrono::{DateTime, Utc};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Final, immutable result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Schema version for compatibility checking
    pub version: String,

    pub wallet_address: String,

    /// Chain the transactions were fetched from
    pub chain_id: u64,

    /// Requested dates, exactly as given
    pub start_date: String,
    pub end_date: String,

    pub total_transactions: u64,
    pub total_successful: u64,
    pub total_failed: u64,

    /// Sum of all fees in wei
    pub total_overall_fee: String,

    /// One entry for every category, even when its count is zero
    pub method_stats: BTreeMap<MethodCategory, MethodStatsReport>,

    pub combined_special_methods: CombinedSpecialMethods,

    pub created_at: DateTime<Utc>,
}

/// Serialized form of one category's statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MethodStatsReport {
    pub count: u64,
    pub total_fee: String,
    pub total_gas: String,
    pub successful: u64,
    pub failed: u64,
}

/// Lock requests and fulfilled proofs summed together
///
/// Gas is deliberately absent: only fees and counts are combined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedSpecialMethods {
    pub total_fee: String,
    pub total_count: u64,
    pub total_successful: u64,
    pub total_failed: u64,
}

/// Parse a decimal amount string back into an exact integer
pub fn parse_amount(field: &str, value: &str) -> Result<BigUint, ReportError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ReportError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
        });
    }

    BigUint::parse_bytes(value.as_bytes(), 10).ok_or_else(|| ReportError::InvalidAmount {
        field: field.to_string(),
        value: value.to_string(),
    })
}

impl AnalysisReport {
    /// Stats for one category (zero stats are always present in a valid report)
    pub fn stats(&self, category: MethodCategory) -> Option<&MethodStatsReport> {
        self.method_stats.get(&category)
    }

    /// Overall fee as an exact integer
    pub fn total_overall_fee_wei(&self) -> Result<BigUint, ReportError> {
        parse_amount("totalOverallFee", &self.total_overall_fee)
    }

    /// Re-check the count and fee invariants of a (possibly loaded) report
    ///
    /// # Errors
    /// The first violated invariant
    pub fn check_consistency(&self) -> Result<(), ReportError> {
        if !sums_to(&[self.total_successful, self.total_failed], self.total_transactions) {
            return Err(ReportError::Inconsistent(format!(
                "successful ({}) + failed ({}) != total ({})",
                self.total_successful, self.total_failed, self.total_transactions
            )));
        }

        let mut counts = Vec::with_capacity(MethodCategory::COUNT);
        let mut fee_sum = BigUint::default();

        for category in MethodCategory::ALL {
            let stats = self
                .stats(category)
                .ok_or_else(|| ReportError::MissingCategory(category.to_string()))?;

            if !sums_to(&[stats.successful, stats.failed], stats.count) {
                return Err(ReportError::Inconsistent(format!(
                    "{}: successful + failed != count",
                    category
                )));
            }

            parse_amount(&format!("{}.totalGas", category), &stats.total_gas)?;
            fee_sum += parse_amount(&format!("{}.totalFee", category), &stats.total_fee)?;
            counts.push(stats.count);
        }

        if !sums_to(&counts, self.total_transactions) {
            return Err(ReportError::Inconsistent(format!(
                "category counts do not sum to total {}",
                self.total_transactions
            )));
        }

        if fee_sum != self.total_overall_fee_wei()? {
            return Err(ReportError::Inconsistent(format!(
                "category fees sum to {} but total is {}",
                fee_sum, self.total_overall_fee
            )));
        }

        self.check_combined()
    }

    fn check_combined(&self) -> Result<(), ReportError> {
        let mut counts = Vec::new();
        let mut successful = Vec::new();
        let mut failed = Vec::new();
        let mut fee = BigUint::default();

        for category in MethodCategory::SPECIAL {
            if let Some(stats) = self.stats(category) {
                counts.push(stats.count);
                successful.push(stats.successful);
                failed.push(stats.failed);
                fee += parse_amount("totalFee", &stats.total_fee)?;
            }
        }

        let combined = &self.combined_special_methods;
        let combined_fee = parse_amount("combinedSpecialMethods.totalFee", &combined.total_fee)?;

        if !sums_to(&counts, combined.total_count)
            || !sums_to(&successful, combined.total_successful)
            || !sums_to(&failed, combined.total_failed)
            || combined_fee != fee
        {
            return Err(ReportError::Inconsistent(
                "combined special methods do not match their categories".to_string(),
            ));
        }

        Ok(())
    }
}

/// Whether `parts` add up to `total`
///
/// Summed in `u128` so counts read from a tampered file cannot wrap.
fn sums_to(parts: &[u64], total: u64) -> bool {
    parts.iter().map(|&p| u128::from(p)).sum::<u128>() == u128::from(total)
}
