use std::fmt;
use std::sync::Arc;

use crate::captured::Captured;
use crate::check::Check;
use crate::check::Rule;
use crate::config::CheckerConfig;
use crate::config::DiagnosticTarget;
use crate::diagnostics;
use crate::diagnostics::ConsoleSink;
use crate::diagnostics::DiagnosticSink;
use crate::diagnostics::LogSink;
use crate::errors::CheckFailure;

mod numeric;
mod temporal;
mod text;

pub(crate) use temporal::date_from_text;
pub(crate) use temporal::date_time_from_text;
pub(crate) use temporal::time_from_text;

/// Validates raw text and converts it into typed values.
///
/// Every check follows the same order: reject blank input, parse, then apply
/// the optional constraint. Failures are returned as [`CheckFailure`] values
/// and never panic. The checker keeps no record of previous results, so one
/// instance can be cloned or shared between threads freely.
///
/// Diagnostics are shown through the injected [`DiagnosticSink`] only when the
/// checker is verbose. A checker without a sink is always silent.
#[derive(Clone)]
pub struct StringChecker {
    sink: Option<Arc<dyn DiagnosticSink>>,
    verbose: bool,
}

impl StringChecker {
    /// Create a checker from configuration.
    ///
    /// # Arguments
    /// * `config` - Default verbosity and diagnostic target
    ///
    /// # Returns
    /// Checker writing to the console or the log, or never writing at all
    pub fn new(config: &CheckerConfig) -> Self {
        let sink: Option<Arc<dyn DiagnosticSink>> = match config.diagnostics {
            DiagnosticTarget::Console => Some(Arc::new(ConsoleSink)),
            DiagnosticTarget::Log => Some(Arc::new(LogSink)),
            DiagnosticTarget::Disabled => None,
        };

        Self {
            sink,
            verbose: !config.silent_by_default,
        }
    }

    /// Create a checker that reports to a host-provided sink.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>, silent_by_default: bool) -> Self {
        Self {
            sink: Some(sink),
            verbose: !silent_by_default,
        }
    }

    /// Create a checker with no sink.
    pub fn without_diagnostics() -> Self {
        Self {
            sink: None,
            verbose: false,
        }
    }

    /// Same sink, diagnostics on.
    pub fn verbose(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            verbose: true,
        }
    }

    /// Same sink, diagnostics off.
    pub fn silent(&self) -> Self {
        Self {
            sink: self.sink.clone(),
            verbose: false,
        }
    }

    /// Whether a failed check will reach a sink.
    pub fn is_verbose(&self) -> bool {
        self.verbose && self.sink.is_some()
    }

    /// Run a check selected at runtime.
    ///
    /// # Arguments
    /// * `check` - Kind of value expected and its constraint
    /// * `input` - Raw text to interpret
    ///
    /// # Returns
    /// The captured value, whose variant always matches the check kind
    ///
    /// # Errors
    /// * `CheckFailure` - The input is blank, malformed or violates the constraint
    pub fn check(&self, check: &Check, input: &str) -> Result<Captured, CheckFailure> {
        match check {
            Check::Int(rule) => match rule {
                Rule::Any => self.parse_int(input),
                Rule::Digits(digits) => self.parse_int_digits(input, *digits),
                Rule::Between(from, to) => self.parse_int_between(input, *from, *to),
            }
            .map(Captured::Int),
            Check::Long(rule) => match rule {
                Rule::Any => self.parse_long(input),
                Rule::Digits(digits) => self.parse_long_digits(input, *digits),
                Rule::Between(from, to) => self.parse_long_between(input, *from, *to),
            }
            .map(Captured::Long),
            Check::Double(rule) => match rule {
                Rule::Any => self.parse_double(input),
                Rule::Digits(digits) => self.parse_double_digits(input, *digits),
                Rule::Between(from, to) => self.parse_double_between(input, *from, *to),
            }
            .map(Captured::Double),
            Check::Decimal(rule) => match rule {
                Rule::Any => self.parse_decimal(input),
                Rule::Digits(digits) => self.parse_decimal_digits(input, *digits),
                Rule::Between(from, to) => self.parse_decimal_between(input, from, to),
            }
            .map(Captured::Decimal),
            Check::Char(bounds) => match bounds {
                None => self.parse_character(input),
                Some((from, to)) => self.parse_character_between(input, *from, *to),
            }
            .map(Captured::Char),
            Check::Text(length) => match length {
                None => self.parse_valid_string(input),
                Some(length) => self.parse_string_of_length(input, *length),
            }
            .map(Captured::Text),
            Check::CardNumber => self.parse_card_number(input).map(Captured::Text),
            Check::Email => self.parse_email(input).map(Captured::Text),
            Check::Date(bounds) => match bounds {
                None => self.parse_date(input),
                Some((from, to)) => self.parse_date_between(input, *from, *to),
            }
            .map(Captured::Date),
            Check::DateTime(bounds) => match bounds {
                None => self.parse_date_time(input),
                Some((from, to)) => self.parse_date_time_between(input, *from, *to),
            }
            .map(Captured::DateTime),
            Check::Time(bounds) => match bounds {
                None => self.parse_time(input),
                Some((from, to)) => self.parse_time_between(input, *from, *to),
            }
            .map(Captured::Time),
            Check::Region => self.parse_state_abbreviation(input).map(Captured::Text),
        }
    }

    /// Boolean form of [`check`](Self::check).
    pub fn matches(&self, check: &Check, input: &str) -> bool {
        self.check(check, input).is_ok()
    }

    fn finish<T>(&self, kind: &'static str, result: Result<T, CheckFailure>) -> Result<T, CheckFailure> {
        if let Err(failure) = &result {
            tracing::debug!(check = kind, %failure, "Check failed");
            if self.verbose {
                if let Some(sink) = &self.sink {
                    diagnostics::emit(sink.as_ref(), &failure.to_string());
                }
            }
        }
        result
    }
}

impl Default for StringChecker {
    /// Silent by default, console output when asked to be verbose.
    fn default() -> Self {
        Self::new(&CheckerConfig::default())
    }
}

impl fmt::Debug for StringChecker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StringChecker")
            .field("has_sink", &self.sink.is_some())
            .field("verbose", &self.verbose)
            .finish()
    }
}

/// Reject null-equivalent input: empty or whitespace only.
pub(crate) fn non_blank(input: &str) -> Result<&str, CheckFailure> {
    if input.trim().is_empty() {
        Err(CheckFailure::Blank)
    } else {
        Ok(input)
    }
}

/// Inclusive range test. Swaps `from` and `to` when given in reverse order.
pub(crate) fn within<T>(value: T, from: T, to: T) -> Result<T, CheckFailure>
where
    T: PartialOrd + fmt::Display,
{
    let (low, high) = if to < from { (to, from) } else { (from, to) };

    if value >= low && value <= high {
        Ok(value)
    } else {
        Err(CheckFailure::OutOfRange {
            from: low.to_string(),
            to: high.to_string(),
        })
    }
}
