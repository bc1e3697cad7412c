use std::str::FromStr;

use bigdecimal::BigDecimal;

use super::non_blank;
use super::within;
use super::StringChecker;
use crate::errors::CheckFailure;

impl StringChecker {
    /// Parse a base-10 `i32`, ignoring surrounding whitespace.
    pub fn parse_int(&self, input: &str) -> Result<i32, CheckFailure> {
        self.finish("int", int(input))
    }

    /// Parse an `i32` whose trimmed text is exactly `digits` characters long.
    ///
    /// A leading sign counts toward the length, so `-12` has three digits.
    pub fn parse_int_digits(&self, input: &str, digits: usize) -> Result<i32, CheckFailure> {
        self.finish(
            "int",
            int(input).and_then(|value| digit_count(input, digits).map(|_| value)),
        )
    }

    /// Parse an `i32` within `from..=to`. Reversed bounds are swapped.
    pub fn parse_int_between(&self, input: &str, from: i32, to: i32) -> Result<i32, CheckFailure> {
        self.finish("int", int(input).and_then(|value| within(value, from, to)))
    }

    pub fn is_int(&self, input: &str) -> bool {
        self.parse_int(input).is_ok()
    }

    pub fn is_int_digits(&self, input: &str, digits: usize) -> bool {
        self.parse_int_digits(input, digits).is_ok()
    }

    pub fn is_int_between(&self, input: &str, from: i32, to: i32) -> bool {
        self.parse_int_between(input, from, to).is_ok()
    }

    /// Parse a base-10 `i64`, ignoring surrounding whitespace.
    pub fn parse_long(&self, input: &str) -> Result<i64, CheckFailure> {
        self.finish("long", long(input))
    }

    /// Same digit-count rule as [`parse_int_digits`](Self::parse_int_digits).
    pub fn parse_long_digits(&self, input: &str, digits: usize) -> Result<i64, CheckFailure> {
        self.finish(
            "long",
            long(input).and_then(|value| digit_count(input, digits).map(|_| value)),
        )
    }

    pub fn parse_long_between(&self, input: &str, from: i64, to: i64) -> Result<i64, CheckFailure> {
        self.finish("long", long(input).and_then(|value| within(value, from, to)))
    }

    pub fn is_long(&self, input: &str) -> bool {
        self.parse_long(input).is_ok()
    }

    pub fn is_long_digits(&self, input: &str, digits: usize) -> bool {
        self.parse_long_digits(input, digits).is_ok()
    }

    pub fn is_long_between(&self, input: &str, from: i64, to: i64) -> bool {
        self.parse_long_between(input, from, to).is_ok()
    }

    /// Parse a finite `f64`, ignoring surrounding whitespace.
    ///
    /// `inf`, `NaN` and values too large to represent are rejected.
    pub fn parse_double(&self, input: &str) -> Result<f64, CheckFailure> {
        self.finish("double", double(input))
    }

    /// Parse an `f64` with exactly `digits` characters, not counting one
    /// decimal point.
    pub fn parse_double_digits(&self, input: &str, digits: usize) -> Result<f64, CheckFailure> {
        self.finish(
            "double",
            double(input).and_then(|value| decimal_digit_count(input, digits).map(|_| value)),
        )
    }

    pub fn parse_double_between(&self, input: &str, from: f64, to: f64) -> Result<f64, CheckFailure> {
        self.finish("double", double(input).and_then(|value| within(value, from, to)))
    }

    pub fn is_double(&self, input: &str) -> bool {
        self.parse_double(input).is_ok()
    }

    pub fn is_double_digits(&self, input: &str, digits: usize) -> bool {
        self.parse_double_digits(input, digits).is_ok()
    }

    pub fn is_double_between(&self, input: &str, from: f64, to: f64) -> bool {
        self.parse_double_between(input, from, to).is_ok()
    }

    /// Parse an arbitrary-precision decimal, ignoring surrounding whitespace.
    pub fn parse_decimal(&self, input: &str) -> Result<BigDecimal, CheckFailure> {
        self.finish("decimal", decimal(input))
    }

    pub fn parse_decimal_digits(
        &self,
        input: &str,
        digits: usize,
    ) -> Result<BigDecimal, CheckFailure> {
        self.finish(
            "decimal",
            decimal(input).and_then(|value| decimal_digit_count(input, digits).map(|_| value)),
        )
    }

    /// Bounds are compared by numeric value, so `1.50` lies within `1.5..2`.
    pub fn parse_decimal_between(
        &self,
        input: &str,
        from: &BigDecimal,
        to: &BigDecimal,
    ) -> Result<BigDecimal, CheckFailure> {
        self.finish(
            "decimal",
            decimal(input).and_then(|value| within(value, from.clone(), to.clone())),
        )
    }

    pub fn is_decimal(&self, input: &str) -> bool {
        self.parse_decimal(input).is_ok()
    }

    pub fn is_decimal_digits(&self, input: &str, digits: usize) -> bool {
        self.parse_decimal_digits(input, digits).is_ok()
    }

    pub fn is_decimal_between(&self, input: &str, from: &BigDecimal, to: &BigDecimal) -> bool {
        self.parse_decimal_between(input, from, to).is_ok()
    }
}

fn int(input: &str) -> Result<i32, CheckFailure> {
    non_blank(input)?
        .trim()
        .parse()
        .map_err(|_| CheckFailure::NotInteger)
}

fn long(input: &str) -> Result<i64, CheckFailure> {
    non_blank(input)?
        .trim()
        .parse()
        .map_err(|_| CheckFailure::NotInteger)
}

fn double(input: &str) -> Result<f64, CheckFailure> {
    non_blank(input)?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or(CheckFailure::NotDecimal)
}

fn decimal(input: &str) -> Result<BigDecimal, CheckFailure> {
    BigDecimal::from_str(non_blank(input)?.trim()).map_err(|_| CheckFailure::NotBigDecimal)
}

fn digit_count(input: &str, digits: usize) -> Result<(), CheckFailure> {
    if input.trim().chars().count() == digits {
        Ok(())
    } else {
        Err(CheckFailure::WrongDigitCount { expected: digits })
    }
}

fn decimal_digit_count(input: &str, digits: usize) -> Result<(), CheckFailure> {
    let trimmed = input.trim();
    let length = trimmed.chars().count();

    if trimmed.contains('.') {
        if length - 1 == digits {
            Ok(())
        } else {
            Err(CheckFailure::WrongDigitCountExcludingPoint { expected: digits })
        }
    } else if length == digits {
        Ok(())
    } else {
        Err(CheckFailure::WrongDigitCount { expected: digits })
    }
}
