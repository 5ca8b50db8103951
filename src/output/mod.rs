//! Output writers for analysis reports.
//!
//! This module handles:
//! - JSON reports (write and read back)
//! - Text summaries for the terminal

pub mod json;
pub mod text;

// Re-export main functions
pub use json::{read_report, report_to_string, write_report};
pub use text::generate_text_summary;
