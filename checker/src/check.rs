use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;

use crate::errors::CheckSpecError;
use crate::string_checker::date_from_text;
use crate::string_checker::date_time_from_text;
use crate::string_checker::time_from_text;

/// Constraint applied to a numeric check after parsing succeeds.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule<T> {
    Any,
    /// Exact digit count of the trimmed input.
    Digits(usize),
    /// Inclusive range. Reversed bounds are swapped, not rejected.
    Between(T, T),
}

/// Descriptor for one check, selectable at runtime.
///
/// Parsed from text of the form `kind`, `kind:count` or `kind:from..to`,
/// for example `int`, `long:10`, `date:2020-01-01..2020-12-31` or `region`.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    Int(Rule<i32>),
    Long(Rule<i64>),
    Double(Rule<f64>),
    Decimal(Rule<BigDecimal>),
    Char(Option<(char, char)>),
    /// Non-blank text, optionally of an exact character count.
    Text(Option<usize>),
    CardNumber,
    Email,
    Date(Option<(NaiveDate, NaiveDate)>),
    DateTime(Option<(NaiveDateTime, NaiveDateTime)>),
    Time(Option<(NaiveTime, NaiveTime)>),
    Region,
}

impl Check {
    /// Short name used in descriptors and log events.
    pub fn kind(&self) -> &'static str {
        match self {
            Check::Int(_) => "int",
            Check::Long(_) => "long",
            Check::Double(_) => "double",
            Check::Decimal(_) => "decimal",
            Check::Char(_) => "char",
            Check::Text(_) => "string",
            Check::CardNumber => "card",
            Check::Email => "email",
            Check::Date(_) => "date",
            Check::DateTime(_) => "datetime",
            Check::Time(_) => "time",
            Check::Region => "region",
        }
    }
}

enum Constraint<'a> {
    None,
    Count(&'a str),
    Range(&'a str, &'a str),
}

impl<'a> Constraint<'a> {
    fn parse(text: Option<&'a str>) -> Self {
        match text {
            None => Constraint::None,
            Some(text) => match text.split_once("..") {
                Some((from, to)) => Constraint::Range(from.trim(), to.trim()),
                None => Constraint::Count(text.trim()),
            },
        }
    }
}

fn bound<T, E>(
    kind: &str,
    text: &str,
    parse: impl Fn(&str) -> Result<T, E>,
) -> Result<T, CheckSpecError> {
    parse(text).map_err(|_| CheckSpecError::InvalidBound {
        kind: kind.to_string(),
        bound: text.to_string(),
    })
}

fn numeric_rule<T: FromStr>(kind: &str, constraint: Constraint<'_>) -> Result<Rule<T>, CheckSpecError> {
    match constraint {
        Constraint::None => Ok(Rule::Any),
        Constraint::Count(count) => Ok(Rule::Digits(bound(kind, count, str::parse::<usize>)?)),
        Constraint::Range(from, to) => Ok(Rule::Between(
            bound(kind, from, str::parse::<T>)?,
            bound(kind, to, str::parse::<T>)?,
        )),
    }
}

fn range_only<T>(
    kind: &str,
    constraint: Constraint<'_>,
    parse: impl Fn(&str) -> Result<T, crate::errors::CheckFailure>,
) -> Result<Option<(T, T)>, CheckSpecError> {
    match constraint {
        Constraint::None => Ok(None),
        Constraint::Range(from, to) => Ok(Some((
            bound(kind, from, &parse)?,
            bound(kind, to, &parse)?,
        ))),
        Constraint::Count(count) => Err(unsupported(kind, count)),
    }
}

fn unsupported(kind: &str, constraint: &str) -> CheckSpecError {
    CheckSpecError::UnsupportedConstraint {
        kind: kind.to_string(),
        constraint: constraint.to_string(),
    }
}

fn single_char(text: &str) -> Result<char, ()> {
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(()),
    }
}

impl FromStr for Check {
    type Err = CheckSpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, constraint_text) = match s.trim().split_once(':') {
            Some((kind, rest)) => (kind, Some(rest)),
            None => (s.trim(), None),
        };
        let kind = kind.trim().to_lowercase();
        let constraint = Constraint::parse(constraint_text);

        let no_constraint = |check: Check| match constraint_text {
            None => Ok(check),
            Some(text) => Err(unsupported(&kind, text)),
        };

        match kind.as_str() {
            "int" => Ok(Check::Int(numeric_rule(&kind, constraint)?)),
            "long" => Ok(Check::Long(numeric_rule(&kind, constraint)?)),
            "double" => Ok(Check::Double(numeric_rule(&kind, constraint)?)),
            "decimal" => Ok(Check::Decimal(numeric_rule(&kind, constraint)?)),
            "char" => match constraint {
                Constraint::None => Ok(Check::Char(None)),
                Constraint::Range(from, to) => Ok(Check::Char(Some((
                    bound(&kind, from, single_char)?,
                    bound(&kind, to, single_char)?,
                )))),
                Constraint::Count(count) => Err(unsupported(&kind, count)),
            },
            "string" => match constraint {
                Constraint::None => Ok(Check::Text(None)),
                Constraint::Count(count) => Ok(Check::Text(Some(bound(
                    &kind,
                    count,
                    str::parse::<usize>,
                )?))),
                Constraint::Range(from, to) => Err(unsupported(&kind, &format!("{}..{}", from, to))),
            },
            "card" => no_constraint(Check::CardNumber),
            "email" => no_constraint(Check::Email),
            "region" => no_constraint(Check::Region),
            "date" => Ok(Check::Date(range_only(&kind, constraint, date_from_text)?)),
            "datetime" => Ok(Check::DateTime(range_only(&kind, constraint, date_time_from_text)?)),
            "time" => Ok(Check::Time(range_only(&kind, constraint, time_from_text)?)),
            _ => Err(CheckSpecError::UnknownKind(kind.clone())),
        }
    }
}
