//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod utils;

// Re-export main command functions
pub use analyze::{
    analyze_gas_fees, analyze_with_source, validate_wallet_address, AnalysisOutcome,
    AnalysisRequest,
};
pub use utils::{display_schema, display_version, validate_report_file};
