use base_gas_analyzer::classifier::MethodCategory;
use base_gas_analyzer::commands::{analyze_with_source, AnalysisRequest};
use base_gas_analyzer::explorer::{Transaction, TransactionSource};
use base_gas_analyzer::utils::config::SourceConfig;
use base_gas_analyzer::utils::error::SourceError;
use base_gas_analyzer::window::{parse_date, TimeWindow};
use pretty_assertions::assert_eq;
use std::cell::{Cell, RefCell};

const WALLET: &str = "0xAbCdEf0123456789abcdef0123456789ABCDEF01";

/// In-memory source that records how it was called
struct MockSource {
    transactions: Vec<Transaction>,
    fail_with: Option<String>,
    calls: Cell<usize>,
    last_window: RefCell<Option<TimeWindow>>,
}

impl MockSource {
    fn with(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            fail_with: None,
            calls: Cell::new(0),
            last_window: RefCell::new(None),
        }
    }

    fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::with(Vec::new())
        }
    }
}

impl TransactionSource for MockSource {
    fn fetch_transactions(
        &self,
        _wallet: &str,
        window: &TimeWindow,
    ) -> Result<Vec<Transaction>, SourceError> {
        self.calls.set(self.calls.get() + 1);
        *self.last_window.borrow_mut() = Some(*window);

        if let Some(message) = &self.fail_with {
            return Err(SourceError::Upstream(message.clone()));
        }

        Ok(self
            .transactions
            .iter()
            .filter(|tx| window.contains(tx.timestamp))
            .cloned()
            .collect())
    }
}

fn request(start: &str, end: &str) -> AnalysisRequest {
    AnalysisRequest {
        wallet_address: WALLET.to_string(),
        start_date: start.to_string(),
        end_date: end.to_string(),
        credential: "test-key".to_string(),
        source: SourceConfig::default(),
    }
}

fn in_window() -> i64 {
    parse_date("2024-01-15").unwrap() + 3_600
}

#[test]
fn test_single_lock_request() {
    let source = MockSource::with(vec![Transaction::fixture(
        "0xb4206dd2000000000000",
        21_000,
        1_000_000_000,
        true,
        in_window(),
    )]);

    let outcome = analyze_with_source(&request("2024-01-01", "2024-01-31"), &source);

    assert!(outcome.success);
    assert_eq!(
        outcome.message,
        "Analysis completed successfully. Found 1 transactions."
    );

    let report = outcome.data.unwrap();
    let lock = report.stats(MethodCategory::LockRequest).unwrap();
    assert_eq!(lock.count, 1);
    assert_eq!(lock.total_fee, "21000000000000");
    assert_eq!(lock.successful, 1);
    assert_eq!(report.total_overall_fee, "21000000000000");
    assert_eq!(report.wallet_address, WALLET);
    assert!(report.check_consistency().is_ok());
}

#[test]
fn test_failed_transaction_contributes_fee() {
    let source = MockSource::with(vec![Transaction::fixture(
        "0xb4206dd2",
        21_000,
        1_000_000_000,
        false,
        in_window(),
    )]);

    let report = analyze_with_source(&request("2024-01-01", "2024-01-31"), &source)
        .data
        .unwrap();

    let lock = report.stats(MethodCategory::LockRequest).unwrap();
    assert_eq!(lock.failed, 1);
    assert_eq!(lock.successful, 0);
    assert_eq!(lock.total_fee, "21000000000000");
    assert_eq!(report.total_failed, 1);
    assert_eq!(report.total_overall_fee, "21000000000000");
}

#[test]
fn test_empty_window_is_not_success() {
    let source = MockSource::with(vec![Transaction::fixture(
        "0x",
        21_000,
        1,
        true,
        parse_date("2023-06-01").unwrap(),
    )]);

    let outcome = analyze_with_source(&request("2024-01-01", "2024-01-31"), &source);

    assert!(!outcome.success);
    assert!(outcome.message.contains("No transactions found"));
    assert!(outcome.data.is_none());
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn test_inverted_range_fails_before_fetch() {
    let source = MockSource::with(Vec::new());

    let outcome = analyze_with_source(&request("2024-02-01", "2024-01-01"), &source);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Start date must be before end date");
    assert!(outcome.data.is_none());
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_invalid_address_fails_before_fetch() {
    let source = MockSource::with(Vec::new());
    let mut req = request("2024-01-01", "2024-01-31");
    req.wallet_address = "0x123".to_string();

    let outcome = analyze_with_source(&req, &source);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Invalid wallet address format");
    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_invalid_dates_fail_before_fetch() {
    let source = MockSource::with(Vec::new());

    let bad_format = analyze_with_source(&request("2024-1", "2024-01-31"), &source);
    assert_eq!(
        bad_format.message,
        "Invalid date format: 2024-1. Please use YYYY-MM-DD format."
    );

    let bad_date = analyze_with_source(&request("2024-01-01", "2024-02-30"), &source);
    assert_eq!(
        bad_date.message,
        "Invalid date: 2024-02-30. Please check the date values."
    );

    assert_eq!(source.calls.get(), 0);
}

#[test]
fn test_upstream_error_message_preserved() {
    let source = MockSource::failing("Invalid API Key");

    let outcome = analyze_with_source(&request("2024-01-01", "2024-01-31"), &source);

    assert!(!outcome.success);
    assert_eq!(outcome.message, "Etherscan API error: Invalid API Key");
    assert!(outcome.data.is_none());
    assert_eq!(source.calls.get(), 1);
}

#[test]
fn test_window_passed_to_source() {
    let source = MockSource::with(vec![Transaction::fixture("0x", 1, 1, true, in_window())]);

    analyze_with_source(&request("2024-01-15", "2024-01-15"), &source);

    let window = source.last_window.borrow().unwrap();
    assert_eq!(window.start, 1_705_276_800);
    assert_eq!(window.end, 1_705_276_800 + 86_399);
}

#[test]
fn test_single_day_window_is_allowed() {
    let source = MockSource::with(vec![Transaction::fixture("0x", 1, 1, true, in_window())]);
    let outcome = analyze_with_source(&request("2024-01-15", "2024-01-15"), &source);
    assert!(outcome.success);
}

#[test]
fn test_large_fee_precision() {
    let source = MockSource::with(vec![Transaction::fixture(
        "0x",
        15_000_000,
        50_000_000_000,
        true,
        in_window(),
    )]);

    let report = analyze_with_source(&request("2024-01-01", "2024-01-31"), &source)
        .data
        .unwrap();

    assert_eq!(report.total_overall_fee, "750000000000000000");
    assert_eq!(
        report.stats(MethodCategory::NativeEthTransfer).unwrap().total_fee,
        "750000000000000000"
    );
}

#[test]
fn test_report_has_every_category_and_combined_summary() {
    let t = in_window();
    let source = MockSource::with(vec![
        Transaction::fixture("0xb4206dd2", 100_000, 2_000_000_000, true, t),
        Transaction::fixture("0x8e3b6945", 300_000, 2_000_000_000, true, t),
        Transaction::fixture("0x8e3b6945", 300_000, 2_000_000_000, false, t),
        Transaction::fixture("0xa9059cbb", 50_000, 2_000_000_000, true, t),
    ]);

    let report = analyze_with_source(&request("2024-01-01", "2024-01-31"), &source)
        .data
        .unwrap();

    assert_eq!(report.method_stats.len(), MethodCategory::COUNT);
    let combined = &report.combined_special_methods;
    assert_eq!(combined.total_count, 3);
    assert_eq!(combined.total_successful, 2);
    assert_eq!(combined.total_failed, 1);
    assert_eq!(combined.total_fee, "1400000000000000");
    assert!(report.check_consistency().is_ok());
}
