//! HTTP client for the Etherscan-compatible explorer API.

use super::types::{ExplorerResponse, Transaction};
use super::TransactionSource;
use crate::utils::config::{SourceConfig, END_BLOCK, START_BLOCK};
use crate::utils::error::SourceError;
use crate::window::TimeWindow;
use log::{debug, info};
use reqwest::blocking::Client;

/// Message the explorer sends with status "0" when an address has no history
const NO_TRANSACTIONS_MESSAGE: &str = "No transactions found";

/// Explorer client fetching a wallet's full transaction list in one request
pub struct EtherscanClient {
    client: Client,
    config: SourceConfig,
    api_key: String,
}

impl EtherscanClient {
    /// Create a new explorer client
    pub fn new(config: SourceConfig, api_key: impl Into<String>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(SourceError::RequestFailed)?;

        Ok(Self {
            client,
            config,
            api_key: api_key.into(),
        })
    }

    /// Query parameters for `account/txlist`
    fn query(&self, wallet: &str) -> Vec<(&'static str, String)> {
        vec![
            ("chainid", self.config.chain_id.to_string()),
            ("module", "account".to_string()),
            ("action", "txlist".to_string()),
            ("address", wallet.to_string()),
            ("startblock", START_BLOCK.to_string()),
            ("endblock", END_BLOCK.to_string()),
            ("sort", "desc".to_string()),
            ("apikey", self.api_key.clone()),
        ]
    }
}

impl TransactionSource for EtherscanClient {
    fn fetch_transactions(
        &self,
        wallet: &str,
        window: &TimeWindow,
    ) -> Result<Vec<Transaction>, SourceError> {
        info!(
            "Fetching transactions for {} on chain {}",
            wallet, self.config.chain_id
        );

        let response = self
            .client
            .get(&self.config.api_url)
            .query(&self.query(wallet))
            .send()
            .map_err(SourceError::RequestFailed)?;

        if !response.status().is_success() {
            return Err(SourceError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().unwrap_or_default()
            )));
        }

        let body: ExplorerResponse = response.json().map_err(SourceError::RequestFailed)?;

        let transactions = transactions_from_response(body)?;
        let total = transactions.len();
        let in_window = filter_window(transactions, window);

        debug!(
            "Explorer returned {} transactions, {} inside the window",
            total,
            in_window.len()
        );

        Ok(in_window)
    }
}

/// Unwrap the explorer envelope into transaction records
///
/// **Private** - internal helper, separated from I/O for testing
fn transactions_from_response(body: ExplorerResponse) -> Result<Vec<Transaction>, SourceError> {
    if body.status != "1" {
        let message = body
            .message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "Unknown error".to_string());

        // An address without history is an empty result, not an upstream failure
        if message.starts_with(NO_TRANSACTIONS_MESSAGE)
            && body.result.as_array().is_some_and(|r| r.is_empty())
        {
            return Ok(Vec::new());
        }

        return Err(SourceError::Upstream(message));
    }

    serde_json::from_value(body.result)
        .map_err(|e| SourceError::InvalidResponse(format!("Malformed transaction list: {}", e)))
}

/// Keep only transactions inside the inclusive window
fn filter_window(transactions: Vec<Transaction>, window: &TimeWindow) -> Vec<Transaction> {
    transactions
        .into_iter()
        .filter(|tx| window.contains(tx.timestamp))
        .collect()
}
