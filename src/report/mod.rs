//! Report assembly, schema and display helpers.

pub mod assemble;
pub mod display;
pub mod schema;

// Re-export main types
pub use assemble::{assemble_report, assemble_report_at, ReportHeader};
pub use display::{amount_percentage, average_fee, format_ether, percentage};
pub use schema::{parse_amount, AnalysisReport, CombinedSpecialMethods, MethodStatsReport};
