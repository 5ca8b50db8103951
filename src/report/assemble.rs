//! Build the final report from an aggregation.

use super::schema::{AnalysisReport, CombinedSpecialMethods, MethodStatsReport};
use crate::aggregator::{Aggregation, MethodStats};
use crate::classifier::MethodCategory;
use crate::utils::config::SCHEMA_VERSION;
use chrono::{DateTime, Utc};

/// What the report was asked about
#[derive(Debug, Clone)]
pub struct ReportHeader<'a> {
    pub wallet_address: &'a str,
    pub start_date: &'a str,
    pub end_date: &'a str,
    pub chain_id: u64,
}

/// Assemble a report stamped with the current time
///
/// **Public** - main entry point for report assembly
pub fn assemble_report(header: &ReportHeader<'_>, aggregation: &Aggregation) -> AnalysisReport {
    assemble_report_at(header, aggregation, Utc::now())
}

/// Assemble a report with an explicit creation time
pub fn assemble_report_at(
    header: &ReportHeader<'_>,
    aggregation: &Aggregation,
    created_at: DateTime<Utc>,
) -> AnalysisReport {
    let method_stats = aggregation
        .method_stats
        .iter()
        .map(|(category, stats)| (category, to_stats_report(stats)))
        .collect();

    let special = aggregation.method_stats.combined(&MethodCategory::SPECIAL);

    AnalysisReport {
        version: SCHEMA_VERSION.to_string(),
        wallet_address: header.wallet_address.to_string(),
        chain_id: header.chain_id,
        start_date: header.start_date.to_string(),
        end_date: header.end_date.to_string(),
        total_transactions: aggregation.total_transactions,
        total_successful: aggregation.total_successful,
        total_failed: aggregation.total_failed,
        total_overall_fee: aggregation.total_overall_fee.to_string(),
        method_stats,
        combined_special_methods: CombinedSpecialMethods {
            total_fee: special.total_fee.to_string(),
            total_count: special.count,
            total_successful: special.successful,
            total_failed: special.failed,
        },
        created_at,
    }
}

fn to_stats_report(stats: &MethodStats) -> MethodStatsReport {
    MethodStatsReport {
        count: stats.count,
        total_fee: stats.total_fee.to_string(),
        total_gas: stats.total_gas.to_string(),
        successful: stats.successful,
        failed: stats.failed,
    }
}
