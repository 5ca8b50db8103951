//! Configuration and constants for the analyzer.

use std::time::Duration;

/// Default timeout for explorer requests
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Current report schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Etherscan v2 multichain endpoint
pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/v2/api";

/// BASE mainnet
pub const DEFAULT_CHAIN_ID: u64 = 8453;

// The explorer wants an explicit block range even when filtering by time
pub const START_BLOCK: u64 = 0;
pub const END_BLOCK: u64 = 99_999_999;

/// Seconds added to a midnight instant to reach 23:59:59 of the same day
pub const END_OF_DAY_OFFSET: i64 = 24 * 60 * 60 - 1;

/// 1 ether = 10^18 wei
pub const ETHER_DECIMALS: u32 = 18;

/// Days covered by the default analysis window
pub const DEFAULT_WINDOW_DAYS: i64 = 7;

/// Runtime settings for the transaction source
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Explorer API base URL
    pub api_url: String,

    /// Chain the explorer should query
    pub chain_id: u64,

    /// HTTP timeout for the single bulk request
    pub timeout: Duration,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}
