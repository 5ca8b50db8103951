//! Transaction source: the single I/O collaborator of an analysis run.
//!
//! The core only depends on [`TransactionSource`]; [`EtherscanClient`] is the
//! production implementation backed by the explorer's `account/txlist` API.

pub mod client;
pub mod types;

use crate::utils::error::SourceError;
use crate::window::TimeWindow;

pub use client::EtherscanClient;
pub use types::{parse_biguint, ExplorerResponse, Transaction};

/// Supplies a wallet's transactions for a time window
pub trait TransactionSource {
    /// Fetch every transaction of `wallet` with a timestamp inside `window`
    ///
    /// An empty list is a valid answer, not an error.
    fn fetch_transactions(
        &self,
        wallet: &str,
        window: &TimeWindow,
    ) -> Result<Vec<Transaction>, SourceError>;
}
