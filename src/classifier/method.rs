//! Method categories and the 4-byte selector classifier.
//!
//! A transaction's call data starts with `0x` followed by the 4-byte
//! selector of the invoked method. Anything shorter than that is treated
//! as a plain value transfer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of `0x` + 8 hex digits
const SELECTOR_LEN: usize = 10;

/// Marker the explorer uses for empty call data
const EMPTY_DATA: &str = "0x";

/// Known selectors and the category each one maps to
const KNOWN_SELECTORS: &[(&str, MethodCategory)] = &[
    ("0xb4206dd2", MethodCategory::LockRequest),
    ("0x8e3b6945", MethodCategory::SubmitRootAndFulfill),
    ("0xa9059cbb", MethodCategory::Erc20Transfer),
    ("0x23b872dd", MethodCategory::Erc20TransferFrom),
    ("0x095ea7b3", MethodCategory::Erc20Approve),
];

/// Closed set of method categories a transaction can fall into
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MethodCategory {
    LockRequest,
    SubmitRootAndFulfill,
    NativeEthTransfer,
    Erc20Transfer,
    Erc20TransferFrom,
    Erc20Approve,
    OtherMethods,
}

impl MethodCategory {
    /// Number of categories
    pub const COUNT: usize = 7;

    /// Every category, in report order
    pub const ALL: [MethodCategory; Self::COUNT] = [
        MethodCategory::LockRequest,
        MethodCategory::SubmitRootAndFulfill,
        MethodCategory::NativeEthTransfer,
        MethodCategory::Erc20Transfer,
        MethodCategory::Erc20TransferFrom,
        MethodCategory::Erc20Approve,
        MethodCategory::OtherMethods,
    ];

    /// The two categories summed into the combined special-methods summary
    pub const SPECIAL: [MethodCategory; 2] = [
        MethodCategory::LockRequest,
        MethodCategory::SubmitRootAndFulfill,
    ];

    /// Position of this category in [`MethodCategory::ALL`]
    pub fn index(self) -> usize {
        match self {
            MethodCategory::LockRequest => 0,
            MethodCategory::SubmitRootAndFulfill => 1,
            MethodCategory::NativeEthTransfer => 2,
            MethodCategory::Erc20Transfer => 3,
            MethodCategory::Erc20TransferFrom => 4,
            MethodCategory::Erc20Approve => 5,
            MethodCategory::OtherMethods => 6,
        }
    }

    /// Wire name used as the report key
    pub fn as_str(self) -> &'static str {
        match self {
            MethodCategory::LockRequest => "LOCK_REQUEST",
            MethodCategory::SubmitRootAndFulfill => "SUBMIT_ROOT_AND_FULFILL",
            MethodCategory::NativeEthTransfer => "NATIVE_ETH_TRANSFER",
            MethodCategory::Erc20Transfer => "ERC20_TRANSFER",
            MethodCategory::Erc20TransferFrom => "ERC20_TRANSFER_FROM",
            MethodCategory::Erc20Approve => "ERC20_APPROVE",
            MethodCategory::OtherMethods => "OTHER_METHODS",
        }
    }

    /// Human-readable label for summaries
    pub fn label(self) -> &'static str {
        match self {
            MethodCategory::LockRequest => "Lock Requests",
            MethodCategory::SubmitRootAndFulfill => "Fulfilled Proofs",
            MethodCategory::NativeEthTransfer => "Native ETH Transfer",
            MethodCategory::Erc20Transfer => "ERC20 Transfer",
            MethodCategory::Erc20TransferFrom => "ERC20 Transfer From",
            MethodCategory::Erc20Approve => "ERC20 Approve",
            MethodCategory::OtherMethods => "Other Methods",
        }
    }

    /// Selector that identifies this category, if it has a single one
    pub fn selector(self) -> Option<&'static str> {
        KNOWN_SELECTORS
            .iter()
            .find(|(_, category)| *category == self)
            .map(|(selector, _)| *selector)
    }
}

impl fmt::Display for MethodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify call data by its 4-byte selector
///
/// **Public** - total over every input; never fails
///
/// # Arguments
/// * `data` - Call data (`input`) of the transaction, if any
///
/// # Returns
/// The method category for this call data
pub fn classify_selector(data: Option<&str>) -> MethodCategory {
    let data = match data {
        Some(d) if d != EMPTY_DATA && d.len() >= SELECTOR_LEN => d,
        _ => return MethodCategory::NativeEthTransfer,
    };

    // Call data from the explorer is ASCII hex; a non-ASCII prefix cannot match anyway
    let selector = match data.get(..SELECTOR_LEN) {
        Some(prefix) => prefix.to_ascii_lowercase(),
        None => return MethodCategory::OtherMethods,
    };

    KNOWN_SELECTORS
        .iter()
        .find(|(known, _)| *known == selector)
        .map(|(_, category)| *category)
        .unwrap_or(MethodCategory::OtherMethods)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_short_data_is_native_transfer() {
        assert_eq!(classify_selector(None), MethodCategory::NativeEthTransfer);
        assert_eq!(classify_selector(Some("")), MethodCategory::NativeEthTransfer);
        assert_eq!(classify_selector(Some("0x")), MethodCategory::NativeEthTransfer);
        assert_eq!(classify_selector(Some("0xb4206d")), MethodCategory::NativeEthTransfer);
        // Short garbage is still a native transfer
        assert_eq!(classify_selector(Some("zzzzzzzzz")), MethodCategory::NativeEthTransfer);
    }

    #[test]
    fn test_known_selectors() {
        assert_eq!(classify_selector(Some("0xb4206dd2")), MethodCategory::LockRequest);
        assert_eq!(
            classify_selector(Some("0x8e3b6945000000000000000000000000000000000000000000000000")),
            MethodCategory::SubmitRootAndFulfill
        );
        assert_eq!(classify_selector(Some("0xa9059cbb00ff")), MethodCategory::Erc20Transfer);
        assert_eq!(classify_selector(Some("0x23b872dd")), MethodCategory::Erc20TransferFrom);
        assert_eq!(classify_selector(Some("0x095ea7b3")), MethodCategory::Erc20Approve);
    }

    #[test]
    fn test_selector_is_case_insensitive() {
        assert_eq!(classify_selector(Some("0xB4206DD2abcdef")), MethodCategory::LockRequest);
        assert_eq!(classify_selector(Some("0xA9059CBB")), MethodCategory::Erc20Transfer);
    }

    #[test]
    fn test_unknown_selector_is_other() {
        assert_eq!(classify_selector(Some("0xdeadbeef")), MethodCategory::OtherMethods);
        assert_eq!(classify_selector(Some("not-hex-at-all")), MethodCategory::OtherMethods);
    }

    #[test]
    fn test_non_ascii_prefix_does_not_panic() {
        assert_eq!(classify_selector(Some("0xé4206dd2ab")), MethodCategory::OtherMethods);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, category) in MethodCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_wire_names_match_serde() {
        for category in MethodCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }

    #[test]
    fn test_special_selectors() {
        assert_eq!(MethodCategory::LockRequest.selector(), Some("0xb4206dd2"));
        assert_eq!(MethodCategory::SubmitRootAndFulfill.selector(), Some("0x8e3b6945"));
        assert_eq!(MethodCategory::OtherMethods.selector(), None);
    }
}
