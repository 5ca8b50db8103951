//! Analyze command implementation.
//!
//! One analysis run:
//! 1. Validates the wallet address
//! 2. Turns the dates into an inclusive UTC window
//! 3. Fetches the wallet's transactions (the only I/O)
//! 4. Aggregates them per method
//! 5. Assembles the report
//!
//! Failures never escape [`analyze_gas_fees`]; they become an unsuccessful
//! [`AnalysisOutcome`] carrying the error message.

use crate::aggregator::aggregate_transactions;
use crate::explorer::{EtherscanClient, TransactionSource};
use crate::report::{assemble_report, AnalysisReport, ReportHeader};
use crate::utils::config::SourceConfig;
use crate::utils::error::AnalysisError;
use crate::window::TimeWindow;
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Inputs of one analysis run
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// `0x` followed by 40 hex digits
    pub wallet_address: String,

    /// `YYYY-MM-DD`, inclusive
    pub start_date: String,

    /// `YYYY-MM-DD`, inclusive through 23:59:59 UTC
    pub end_date: String,

    /// Explorer API key
    pub credential: String,

    pub source: SourceConfig,
}

/// Uniform result shape handed to the CLI or any other caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub success: bool,
    pub message: String,
    pub data: Option<AnalysisReport>,
}

impl AnalysisOutcome {
    fn completed(report: AnalysisReport) -> Self {
        Self {
            success: true,
            message: format!(
                "Analysis completed successfully. Found {} transactions.",
                report.total_transactions
            ),
            data: Some(report),
        }
    }

    fn failed(err: &AnalysisError) -> Self {
        Self {
            success: false,
            message: err.to_string(),
            data: None,
        }
    }
}

/// Run an analysis against the configured explorer
///
/// **Public** - main entry point; never fails, see [`AnalysisOutcome`]
pub fn analyze_gas_fees(request: &AnalysisRequest) -> AnalysisOutcome {
    // Reject bad input before building a client
    if let Err(err) = validate_request(request) {
        return normalize(Err(err));
    }

    match EtherscanClient::new(request.source.clone(), request.credential.clone()) {
        Ok(client) => analyze_with_source(request, &client),
        Err(err) => normalize(Err(err.into())),
    }
}

/// Run an analysis against any transaction source
pub fn analyze_with_source(
    request: &AnalysisRequest,
    source: &dyn TransactionSource,
) -> AnalysisOutcome {
    normalize(run_analysis(request, source))
}

fn normalize(result: Result<AnalysisReport, AnalysisError>) -> AnalysisOutcome {
    match result {
        Ok(report) => AnalysisOutcome::completed(report),
        Err(AnalysisError::EmptyResult) => {
            info!("No transactions in the requested window");
            AnalysisOutcome::failed(&AnalysisError::EmptyResult)
        }
        Err(err) => {
            error!("Gas analysis error: {}", err);
            AnalysisOutcome::failed(&err)
        }
    }
}

/// Validate the request and build its time window, without any I/O
fn validate_request(request: &AnalysisRequest) -> Result<TimeWindow, AnalysisError> {
    validate_wallet_address(&request.wallet_address)?;
    Ok(TimeWindow::from_dates(&request.start_date, &request.end_date)?)
}

fn run_analysis(
    request: &AnalysisRequest,
    source: &dyn TransactionSource,
) -> Result<AnalysisReport, AnalysisError> {
    let start_time = Instant::now();
    let window = validate_request(request)?;

    info!(
        "Analyzing {} from {} to {}",
        request.wallet_address, request.start_date, request.end_date
    );

    let transactions = source.fetch_transactions(&request.wallet_address, &window)?;

    if transactions.is_empty() {
        return Err(AnalysisError::EmptyResult);
    }

    let aggregation = aggregate_transactions(&transactions);

    let header = ReportHeader {
        wallet_address: &request.wallet_address,
        start_date: &request.start_date,
        end_date: &request.end_date,
        chain_id: request.source.chain_id,
    };
    let report = assemble_report(&header, &aggregation);

    debug!("Analysis completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Check that an address is `0x` followed by exactly 40 hex digits
///
/// **Public** - can be called for early validation
pub fn validate_wallet_address(address: &str) -> Result<(), AnalysisError> {
    let valid = address
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()));

    if valid {
        Ok(())
    } else {
        Err(AnalysisError::InvalidAddress(address.to_string()))
    }
}
