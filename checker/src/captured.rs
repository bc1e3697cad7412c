use std::fmt;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;

/// Typed value produced by a successful check.
///
/// Exactly one variant is ever populated, matching the kind of check that
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Captured {
    Int(i32),
    Long(i64),
    Double(f64),
    Decimal(BigDecimal),
    Char(char),
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Time(NaiveTime),
}

impl Default for Captured {
    fn default() -> Self {
        Captured::Int(0)
    }
}

impl Captured {
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Captured::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Captured::Long(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Captured::Double(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Captured::Decimal(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            Captured::Char(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Captured::Text(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Captured::Date(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_date_time(&self) -> Option<NaiveDateTime> {
        match self {
            Captured::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<NaiveTime> {
        match self {
            Captured::Time(value) => Some(*value),
            _ => None,
        }
    }
}

impl fmt::Display for Captured {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Captured::Int(value) => write!(f, "{}", value),
            Captured::Long(value) => write!(f, "{}", value),
            Captured::Double(value) => write!(f, "{}", value),
            Captured::Decimal(value) => write!(f, "{}", value),
            Captured::Char(value) => write!(f, "{}", value),
            Captured::Text(value) => write!(f, "{}", value),
            Captured::Date(value) => write!(f, "{}", value),
            Captured::DateTime(value) => write!(f, "{}", value.format("%Y-%m-%dT%H:%M:%S%.f")),
            Captured::Time(value) => write!(f, "{}", value),
        }
    }
}
