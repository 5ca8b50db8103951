//! Base Gas Analyzer
//!
//! Method-based gas fee analysis for a single wallet on an EVM network.
//! Each transaction is classified by its 4-byte call-data selector and
//! fees, gas and success counts are aggregated per method with exact
//! integer arithmetic.
//!
//! ## Getting Started
//!
//! ```bash
//! base-gas analyze --wallet 0x... --start 2024-01-01 --end 2024-01-31 --api-key KEY
//! ```
//!
//! The library entry point is [`commands::analyze_gas_fees`].

pub mod aggregator;
pub mod classifier;
pub mod commands;
pub mod explorer;
pub mod output;
pub mod report;
pub mod utils;
pub mod window;
