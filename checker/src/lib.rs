//! String validation library
//!
//! Turns unstructured text into typed values:
//! - Integers, long integers, floating and arbitrary-precision decimals
//! - Characters and strings with exact-length constraints
//! - Card numbers, e-mail addresses and US region codes
//! - ISO-8601 dates, date-times and times of day
//!
//! Numeric, character and temporal checks accept an inclusive range; reversed
//! bounds are swapped rather than rejected. Failures are ordinary values, and
//! an optional [`DiagnosticSink`] renders a human-readable message for each.
//!
//! # Examples
//!
//! ```
//! use checker::StringChecker;
//!
//! let checker = StringChecker::without_diagnostics();
//!
//! assert_eq!(checker.parse_int_between(" 42 ", 100, 1), Ok(42));
//! assert!(checker.is_email("a@b.com"));
//! assert!(!checker.is_card_number("1234-5678-1234-567"));
//! ```
//!
//! ## Runtime-selected checks
//! ```
//! use checker::{Captured, Check, StringChecker};
//!
//! let checker = StringChecker::default();
//! let check: Check = "date:2020-01-01..2020-12-31".parse().unwrap();
//!
//! let captured = checker.check(&check, "2020-06-15").unwrap();
//! assert!(matches!(captured, Captured::Date(_)));
//! ```

pub mod captured;
pub mod check;
pub mod config;
pub mod diagnostics;
pub mod errors;
pub mod region;
pub mod string_checker;

pub use captured::Captured;
pub use check::Check;
pub use check::Rule;
pub use config::CheckerConfig;
pub use config::DiagnosticTarget;
pub use diagnostics::CollectingSink;
pub use diagnostics::ConsoleSink;
pub use diagnostics::DiagnosticSink;
pub use diagnostics::LogSink;
pub use errors::CheckFailure;
pub use errors::CheckSpecError;
pub use string_checker::StringChecker;
