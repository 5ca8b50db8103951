//! Aggregation of classified transactions into gas-fee statistics.
//!
//! This module folds a transaction list into:
//! - Per-method counts, fees and gas
//! - Overall success/failure and fee totals

pub mod stats;

// Re-export main types and functions
pub use stats::{aggregate_transactions, Aggregation, MethodStats, MethodStatsTable};
