//! Per-method accumulators and the aggregation fold.
//!
//! Fees and gas are summed as `BigUint` for the whole fold. Failed
//! transactions still pay gas, so they contribute to every fee total.

use crate::classifier::{classify_selector, MethodCategory};
use crate::explorer::Transaction;
use log::debug;
use num_bigint::BigUint;
use num_traits::Zero;

/// Accumulator for one method category
///
/// Invariant: `successful + failed == count`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodStats {
    pub count: u64,

    /// Sum of `gas_used * fee_rate`, in wei
    pub total_fee: BigUint,

    pub total_gas: BigUint,
    pub successful: u64,
    pub failed: u64,
}

impl MethodStats {
    /// Record a single transaction
    pub fn record(&mut self, fee: &BigUint, gas_used: &BigUint, successful: bool) {
        self.count += 1;
        self.total_fee += fee;
        self.total_gas += gas_used;

        if successful {
            self.successful += 1;
        } else {
            self.failed += 1;
        }
    }

    /// Add another accumulator field-wise
    pub fn merge(&mut self, other: &MethodStats) {
        self.count += other.count;
        self.total_fee += &other.total_fee;
        self.total_gas += &other.total_gas;
        self.successful += other.successful;
        self.failed += other.failed;
    }

    /// No transaction has been recorded
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// One [`MethodStats`] per category, indexed by the category itself
///
/// Lookup cannot miss: the table always holds every category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MethodStatsTable {
    stats: [MethodStats; MethodCategory::COUNT],
}

impl MethodStatsTable {
    pub fn get(&self, category: MethodCategory) -> &MethodStats {
        &self.stats[category.index()]
    }

    pub fn get_mut(&mut self, category: MethodCategory) -> &mut MethodStats {
        &mut self.stats[category.index()]
    }

    /// Iterate in report order
    pub fn iter(&self) -> impl Iterator<Item = (MethodCategory, &MethodStats)> {
        MethodCategory::ALL.into_iter().zip(self.stats.iter())
    }

    /// Categories with at least one recorded transaction, in report order
    pub fn active_categories(&self) -> impl Iterator<Item = MethodCategory> + '_ {
        self.iter()
            .filter(|(_, stats)| !stats.is_empty())
            .map(|(category, _)| category)
    }

    /// Field-wise sum of the given categories
    pub fn combined(&self, categories: &[MethodCategory]) -> MethodStats {
        categories.iter().fold(MethodStats::default(), |mut acc, c| {
            acc.merge(self.get(*c));
            acc
        })
    }
}

/// Result of folding a transaction list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    pub method_stats: MethodStatsTable,
    pub total_overall_fee: BigUint,
    pub total_successful: u64,
    pub total_failed: u64,
    pub total_transactions: u64,
}

impl Aggregation {
    /// Classify and record a single transaction
    pub fn record(&mut self, tx: &Transaction) {
        let category = classify_selector(tx.call_data());
        let gas_used = tx.gas_used();
        let fee = &gas_used * tx.fee_rate();
        let successful = tx.is_successful();

        self.method_stats
            .get_mut(category)
            .record(&fee, &gas_used, successful);

        self.total_overall_fee += &fee;
        self.total_transactions += 1;
        if successful {
            self.total_successful += 1;
        } else {
            self.total_failed += 1;
        }
    }

    /// Combine a partial aggregation (e.g. from another shard of the list)
    pub fn merge(&mut self, other: &Aggregation) {
        for (category, stats) in other.method_stats.iter() {
            self.method_stats.get_mut(category).merge(stats);
        }
        self.total_overall_fee += &other.total_overall_fee;
        self.total_successful += other.total_successful;
        self.total_failed += other.total_failed;
        self.total_transactions += other.total_transactions;
    }

    /// Sum of every category's fee; equals `total_overall_fee`
    pub fn category_fee_sum(&self) -> BigUint {
        self.method_stats
            .iter()
            .fold(BigUint::zero(), |acc, (_, s)| acc + &s.total_fee)
    }
}

/// Fold a transaction list into per-method and overall statistics
///
/// **Public** - main entry point for aggregation
///
/// # Arguments
/// * `transactions` - Transactions already filtered to the analysis window
///
/// # Returns
/// Fresh aggregation; the result does not depend on input order
pub fn aggregate_transactions(transactions: &[Transaction]) -> Aggregation {
    debug!("Aggregating {} transactions", transactions.len());

    let mut aggregation = Aggregation::default();
    for tx in transactions {
        aggregation.record(tx);
    }

    debug!(
        "Aggregated: {} ok / {} failed, {} wei in fees",
        aggregation.total_successful, aggregation.total_failed, aggregation.total_overall_fee
    );
    debug!(
        "Methods seen: {}",
        aggregation
            .method_stats
            .active_categories()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    );

    aggregation
}
