//! Types for the block explorer's `account/txlist` response.
//!
//! The explorer encodes every numeric field as a string. Integer fields are
//! decoded straight into `BigUint` so that nothing passes through a
//! fixed-width or floating representation.

use num_bigint::BigUint;
use serde::{Deserialize, Deserializer};

/// Envelope returned by the explorer API
#[derive(Debug, Deserialize)]
pub struct ExplorerResponse {
    /// "1" on success, "0" otherwise
    pub status: String,

    #[serde(default)]
    pub message: Option<String>,

    /// Transaction list on success, error detail string otherwise
    #[serde(default)]
    pub result: serde_json::Value,
}

/// A single transaction record as supplied by the explorer
///
/// Only the fields the analysis reads are kept; everything else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub hash: Option<String>,

    /// Call data as the explorer names it
    #[serde(default)]
    pub input: Option<String>,

    /// Call data as raw RPC objects name it
    #[serde(default)]
    pub data: Option<String>,

    #[serde(rename = "gasUsed", default, deserialize_with = "deserialize_opt_biguint")]
    pub gas_used: Option<BigUint>,

    #[serde(rename = "gasPrice", default, deserialize_with = "deserialize_opt_biguint")]
    pub gas_price: Option<BigUint>,

    /// Overrides `gas_price` when present
    #[serde(
        rename = "effectiveGasPrice",
        default,
        deserialize_with = "deserialize_opt_biguint"
    )]
    pub effective_gas_price: Option<BigUint>,

    /// "0" when execution did not error
    #[serde(rename = "isError", default)]
    pub is_error: Option<String>,

    /// "1" when the receipt reports success
    #[serde(rename = "txreceipt_status", default)]
    pub receipt_status: Option<String>,

    #[serde(rename = "timeStamp", default, deserialize_with = "deserialize_timestamp")]
    pub timestamp: i64,
}

impl Transaction {
    /// Gas actually paid per unit: effective price if reported, nominal otherwise
    pub fn fee_rate(&self) -> BigUint {
        self.effective_gas_price
            .as_ref()
            .or(self.gas_price.as_ref())
            .cloned()
            .unwrap_or_default()
    }

    /// Gas used, zero when absent
    pub fn gas_used(&self) -> BigUint {
        self.gas_used.clone().unwrap_or_default()
    }

    /// Fee paid for this transaction in wei
    pub fn fee(&self) -> BigUint {
        self.gas_used() * self.fee_rate()
    }

    /// Call data, preferring `input` and falling back to `data` when it is empty
    pub fn call_data(&self) -> Option<&str> {
        self.input
            .as_deref()
            .filter(|d| !d.is_empty())
            .or(self.data.as_deref())
    }

    /// Synthetic record for fixtures and mock sources
    ///
    /// The receipt always reports success; `successful` only drives `isError`.
    /// Set `receipt_status` afterwards to model a reverted receipt.
    pub fn fixture(input: &str, gas_used: u64, gas_price: u64, successful: bool, timestamp: i64) -> Self {
        Self {
            hash: None,
            input: Some(input.to_string()),
            data: None,
            gas_used: Some(BigUint::from(gas_used)),
            gas_price: Some(BigUint::from(gas_price)),
            effective_gas_price: None,
            is_error: Some(if successful { "0" } else { "1" }.to_string()),
            receipt_status: Some("1".to_string()),
            timestamp,
        }
    }

    /// Successful iff no execution error AND the receipt reports success
    pub fn is_successful(&self) -> bool {
        self.is_error.as_deref() == Some("0") && self.receipt_status.as_deref() == Some("1")
    }
}

/// Parse an unsigned integer from a decimal or `0x`-prefixed hex string
///
/// Returns `None` for empty input and `Some(Err)` for garbage.
pub fn parse_biguint(raw: &str) -> Option<Result<BigUint, String>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some("") => Some(BigUint::default()),
        Some(hex) => BigUint::parse_bytes(hex.as_bytes(), 16),
        None => BigUint::parse_bytes(raw.as_bytes(), 10),
    };

    Some(parsed.ok_or_else(|| format!("invalid unsigned integer: {:?}", raw)))
}

/// Accept a string, a JSON number, or null
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Text(String),
    Number(u64),
}

fn deserialize_opt_biguint<'de, D>(deserializer: D) -> Result<Option<BigUint>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawNumber::Number(n)) => Ok(Some(BigUint::from(n))),
        Some(RawNumber::Text(s)) => parse_biguint(&s)
            .transpose()
            .map_err(serde::de::Error::custom),
    }
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawNumber>::deserialize(deserializer)? {
        None => Ok(0),
        Some(RawNumber::Number(n)) => i64::try_from(n).map_err(serde::de::Error::custom),
        Some(RawNumber::Text(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0);
            }
            s.parse::<i64>()
                .map_err(|e| serde::de::Error::custom(format!("invalid timeStamp {:?}: {}", s, e)))
        }
    }
}
