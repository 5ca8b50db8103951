//! Transaction classification by method selector.

pub mod method;

pub use method::{classify_selector, MethodCategory};
