use thiserror::Error;

use crate::region::REGION_CODES;

/// Reason a single check rejected its input.
///
/// The `Display` text is the diagnostic shown to the user when the checker
/// runs verbosely. It never carries parser internals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFailure {
    #[error("You did not provide an input.")]
    Blank,

    #[error("Your input was not an integer. Please enter a number without a decimal.")]
    NotInteger,

    #[error("Your input was not a decimal number.")]
    NotDecimal,

    #[error("Your input was not a big decimal number.")]
    NotBigDecimal,

    #[error("The number does not have exactly {expected} digits.")]
    WrongDigitCount { expected: usize },

    #[error("Excluding the decimal point, the number does not have exactly {expected} digits.")]
    WrongDigitCountExcludingPoint { expected: usize },

    #[error("Your input was not between {from} and {to}.")]
    OutOfRange { from: String, to: String },

    #[error("The string does not have exactly {expected} characters.")]
    WrongLength { expected: usize },

    #[error("{input} is not a valid credit or debit card number containing 16 digits")]
    NotCardNumber { input: String },

    #[error(
        "{input} is not a valid e-mail containing only one @ followed by a string containing at least one period."
    )]
    NotEmail { input: String },

    #[error("Incorrectly formatted date: {input}")]
    NotDate { input: String },

    #[error("Incorrectly formatted date and time: {input}")]
    NotDateTime { input: String },

    #[error("Incorrectly formatted time: {input}")]
    NotTime { input: String },

    #[error(
        "{input} is not a valid US State, Commonwealth, or Territory. Acceptable values are: {codes}",
        codes = REGION_CODES.join(" ")
    )]
    UnknownRegion { input: String },
}

/// Error for parsing a textual check descriptor such as `int:1..10`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckSpecError {
    #[error("Unknown check kind: {0}")]
    UnknownKind(String),

    #[error("Check {kind} does not accept constraint {constraint}")]
    UnsupportedConstraint { kind: String, constraint: String },

    #[error("Invalid bound {bound} for check {kind}")]
    InvalidBound { kind: String, bound: String },
}
