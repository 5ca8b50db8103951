//! Base Gas Analyzer CLI
//!
//! Classifies a wallet's transactions by method and reports gas fees,
//! success rates and counts per method over a date range.

use anyhow::{Context, Result};
use base_gas_analyzer::commands::{
    analyze_gas_fees, display_schema, display_version, validate_report_file, AnalysisRequest,
};
use base_gas_analyzer::output::{generate_text_summary, report_to_string, write_report};
use base_gas_analyzer::utils::config::{
    SourceConfig, DEFAULT_API_URL, DEFAULT_CHAIN_ID, DEFAULT_HTTP_TIMEOUT,
};
use base_gas_analyzer::window::default_dates;
use chrono::Utc;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use std::path::PathBuf;

/// Base Gas Analyzer - method-based gas fee reports
#[derive(Parser, Debug)]
#[command(name = "base-gas")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze a wallet's gas fees by method
    Analyze {
        /// Wallet address (0x + 40 hex digits)
        #[arg(short, long)]
        wallet: String,

        /// First day of the period, YYYY-MM-DD (default: 7 days ago)
        #[arg(short, long)]
        start: Option<String>,

        /// Last day of the period, YYYY-MM-DD (default: today)
        #[arg(short, long)]
        end: Option<String>,

        /// Explorer API key
        #[arg(long, env = "ETHERSCAN_API_KEY", hide_env_values = true)]
        api_key: String,

        /// Chain to query
        #[arg(long, env = "BASE_GAS_CHAIN_ID", default_value_t = DEFAULT_CHAIN_ID)]
        chain_id: u64,

        /// Explorer API base URL
        #[arg(long, env = "BASE_GAS_API_URL", default_value = DEFAULT_API_URL)]
        api_url: String,

        /// Output path for the JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Print the JSON report to stdout
        #[arg(long, conflicts_with = "summary")]
        json: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Analyze {
            wallet,
            start,
            end,
            api_key,
            chain_id,
            api_url,
            output,
            summary,
            json,
        } => {
            let (default_start, default_end) = default_dates(Utc::now().date_naive());
            let request = AnalysisRequest {
                wallet_address: wallet,
                start_date: start.unwrap_or(default_start),
                end_date: end.unwrap_or(default_end),
                credential: api_key,
                source: SourceConfig {
                    api_url,
                    chain_id,
                    timeout: DEFAULT_HTTP_TIMEOUT,
                },
            };

            run_analyze(&request, output, summary, json)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Run the analysis and emit its outputs
///
/// **Private** - internal command implementation
fn run_analyze(
    request: &AnalysisRequest,
    output: Option<PathBuf>,
    summary: bool,
    json: bool,
) -> Result<()> {
    let outcome = analyze_gas_fees(request);

    let report = match outcome.data {
        Some(report) if outcome.success => report,
        _ => anyhow::bail!(outcome.message),
    };

    // Keep stdout pure JSON when the report goes there
    if json {
        info!("{}", outcome.message);
    } else {
        println!("{}", outcome.message);
    }

    if let Some(path) = output {
        write_report(&report, &path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if json {
        println!("{}", report_to_string(&report).context("Failed to serialize report")?);
    }

    if summary {
        println!("\n{}", "=".repeat(80));
        println!("GAS FEE REPORT");
        println!("{}", "=".repeat(80));
        println!("{}", generate_text_summary(&report)?);
        println!("{}", "=".repeat(80));
    }

    Ok(())
}
