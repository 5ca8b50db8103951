//! Plain-text summary of an analysis report for the terminal.

use crate::classifier::MethodCategory;
use crate::report::{
    amount_percentage, average_fee, format_ether, parse_amount, percentage, AnalysisReport,
};
use crate::utils::error::ReportError;

/// Digits shown for ether amounts in the overview
const OVERVIEW_DIGITS: usize = 5;

/// Digits shown for per-method amounts
const DETAIL_DIGITS: usize = 8;

/// Render the overview, special-methods spotlight and per-method table
///
/// **Public** - used by the analyze command when `--summary` is set
///
/// # Errors
/// `ReportError::InvalidAmount` if an amount string is not a decimal integer
pub fn generate_text_summary(report: &AnalysisReport) -> Result<String, ReportError> {
    let total_fee = report.total_overall_fee_wei()?;
    let mut lines = Vec::new();

    lines.push("  📊 OVERVIEW".to_string());
    lines.push(format!("  Wallet:           {}", report.wallet_address));
    lines.push(format!("  Period:           {} → {}", report.start_date, report.end_date));
    lines.push(format!("  Transactions:     {}", report.total_transactions));
    lines.push(format!(
        "  Total ETH Fees:   {}",
        format_ether(&total_fee, OVERVIEW_DIGITS)
    ));
    lines.push(format!(
        "  Success Rate:     {}%",
        percentage(report.total_successful, report.total_transactions)
    ));
    lines.push(format!(
        "  Avg Fee/TX (ETH): {}",
        format_ether(&average_fee(&total_fee, report.total_transactions), 6)
    ));

    lines.push(String::new());
    lines.push("  🎯 SPECIAL METHODS".to_string());
    for category in MethodCategory::SPECIAL {
        if let Some(stats) = report.stats(category) {
            let fee = parse_amount("totalFee", &stats.total_fee)?;
            lines.push(format!(
                "  {:<18} {:<12} {:>6} tx  {:>14} ETH",
                category.label(),
                category.selector().unwrap_or(""),
                stats.count,
                format_ether(&fee, DETAIL_DIGITS)
            ));
        }
    }

    let combined = &report.combined_special_methods;
    let combined_fee = parse_amount("combinedSpecialMethods.totalFee", &combined.total_fee)?;
    lines.push(format!(
        "  {:<31} {:>6} tx  {:>14} ETH  ({}% ok, {}% of fees)",
        "Combined",
        combined.total_count,
        format_ether(&combined_fee, DETAIL_DIGITS),
        percentage(combined.total_successful, combined.total_count),
        amount_percentage(&combined_fee, &total_fee)
    ));

    lines.push(String::new());
    lines.push("  ⛽ BY METHOD".to_string());
    lines.push(format!(
        "  {:<22} {:>7} {:>14} {:>7} {:>8} {:>14}",
        "Method", "Count", "Fee (ETH)", "Fee %", "OK %", "Avg (ETH)"
    ));
    lines.push(format!("  {}", "-".repeat(77)));

    for category in MethodCategory::ALL {
        let Some(stats) = report.stats(category) else {
            continue;
        };
        let fee = parse_amount(&format!("{}.totalFee", category), &stats.total_fee)?;

        lines.push(format!(
            "  {:<22} {:>7} {:>14} {:>6}% {:>7}% {:>14}",
            category.label(),
            stats.count,
            format_ether(&fee, DETAIL_DIGITS),
            amount_percentage(&fee, &total_fee),
            percentage(stats.successful, stats.count),
            format_ether(&average_fee(&fee, stats.count), DETAIL_DIGITS)
        ));
    }

    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate_transactions;
    use crate::explorer::Transaction;
    use crate::report::{assemble_report, ReportHeader};

    fn report() -> AnalysisReport {
        let txs = vec![
            Transaction::fixture("0xb4206dd2", 15_000_000, 50_000_000_000, true, 0),
            Transaction::fixture("0x8e3b6945", 15_000_000, 50_000_000_000, false, 0),
        ];
        let header = ReportHeader {
            wallet_address: "0x3333333333333333333333333333333333333333",
            start_date: "2024-03-01",
            end_date: "2024-03-31",
            chain_id: 8453,
        };
        assemble_report(&header, &aggregate_transactions(&txs))
    }

    #[test]
    fn test_summary_contains_sections() {
        let summary = generate_text_summary(&report()).unwrap();
        assert!(summary.contains("OVERVIEW"));
        assert!(summary.contains("SPECIAL METHODS"));
        assert!(summary.contains("BY METHOD"));
        assert!(summary.contains("Total ETH Fees:   1.5"));
        assert!(summary.contains("Success Rate:     50.0%"));
        assert!(summary.contains("0xb4206dd2"));
    }

    #[test]
    fn test_summary_lists_every_category() {
        let summary = generate_text_summary(&report()).unwrap();
        for category in MethodCategory::ALL {
            assert!(summary.contains(category.label()), "missing {}", category.label());
        }
    }

    #[test]
    fn test_summary_rejects_bad_amount() {
        let mut report = report();
        report.total_overall_fee = "1.5".to_string();
        assert!(generate_text_summary(&report).is_err());
    }
}
