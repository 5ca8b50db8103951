use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a saved report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    report
        .check_consistency()
        .context("Report failed consistency checks")?;

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Wallet: {}", report.wallet_address);
    println!("  Period: {} → {}", report.start_date, report.end_date);
    println!("  Transactions: {}", report.total_transactions);
    println!("  Total Fee (wei): {}", report.total_overall_fee);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Base Gas Analyzer Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string              - Schema version (e.g., '1.0.0')");
        println!("  walletAddress: string        - Analyzed wallet");
        println!("  chainId: number              - Chain the data came from");
        println!("  startDate / endDate: string  - Requested period (YYYY-MM-DD)");
        println!("  totalTransactions: number    - Transactions in the period");
        println!("  totalSuccessful: number      - Transactions that succeeded");
        println!("  totalFailed: number          - Transactions that failed (fees still paid)");
        println!("  totalOverallFee: string      - Sum of fees in wei (decimal)");
        println!("  methodStats: object          - One entry per method category");
        println!("    count: number");
        println!("    totalFee: string           - Wei (decimal)");
        println!("    totalGas: string           - Gas units (decimal)");
        println!("    successful / failed: number");
        println!("  combinedSpecialMethods: object - LOCK_REQUEST + SUBMIT_ROOT_AND_FULFILL");
        println!("    totalFee: string, totalCount / totalSuccessful / totalFailed: number");
        println!("  createdAt: string            - ISO 8601 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Base Gas Analyzer v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Method-based gas fee analysis for EVM wallets.");
}
