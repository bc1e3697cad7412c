use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::NaiveTime;
use chrono::Timelike;

use super::non_blank;
use super::within;
use super::StringChecker;
use crate::errors::CheckFailure;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];
const DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

impl StringChecker {
    /// Parse an ISO-8601 calendar date such as `2020-12-11`.
    pub fn parse_date(&self, input: &str) -> Result<NaiveDate, CheckFailure> {
        self.finish("date", date_from_text(input))
    }

    pub fn parse_date_between(
        &self,
        input: &str,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<NaiveDate, CheckFailure> {
        self.finish(
            "date",
            date_from_text(input).and_then(|value| within(value, from, to)),
        )
    }

    pub fn is_date(&self, input: &str) -> bool {
        self.parse_date(input).is_ok()
    }

    pub fn is_date_between(&self, input: &str, from: NaiveDate, to: NaiveDate) -> bool {
        self.parse_date_between(input, from, to).is_ok()
    }

    /// Parse an ISO-8601 local date-time such as `2020-12-11T10:15` or
    /// `2020-12-11T10:15:30.5`.
    pub fn parse_date_time(&self, input: &str) -> Result<NaiveDateTime, CheckFailure> {
        self.finish("datetime", date_time_from_text(input))
    }

    pub fn parse_date_time_between(
        &self,
        input: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<NaiveDateTime, CheckFailure> {
        self.finish(
            "datetime",
            date_time_from_text(input).and_then(|value| within(value, from, to)),
        )
    }

    pub fn is_date_time(&self, input: &str) -> bool {
        self.parse_date_time(input).is_ok()
    }

    pub fn is_date_time_between(&self, input: &str, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        self.parse_date_time_between(input, from, to).is_ok()
    }

    /// Parse an ISO-8601 time of day: `HH:MM`, optionally with seconds and
    /// a fraction.
    pub fn parse_time(&self, input: &str) -> Result<NaiveTime, CheckFailure> {
        self.finish("time", time_from_text(input))
    }

    pub fn parse_time_between(
        &self,
        input: &str,
        from: NaiveTime,
        to: NaiveTime,
    ) -> Result<NaiveTime, CheckFailure> {
        self.finish(
            "time",
            time_from_text(input).and_then(|value| within(value, from, to)),
        )
    }

    pub fn is_time(&self, input: &str) -> bool {
        self.parse_time(input).is_ok()
    }

    pub fn is_time_between(&self, input: &str, from: NaiveTime, to: NaiveTime) -> bool {
        self.parse_time_between(input, from, to).is_ok()
    }
}

pub(crate) fn date_from_text(input: &str) -> Result<NaiveDate, CheckFailure> {
    let trimmed = non_blank(input)?.trim();
    let not_date = || CheckFailure::NotDate {
        input: trimmed.to_string(),
    };

    if !is_date_shape(trimmed) {
        return Err(not_date());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| not_date())
}

pub(crate) fn date_time_from_text(input: &str) -> Result<NaiveDateTime, CheckFailure> {
    let trimmed = non_blank(input)?.trim();
    let shaped = trimmed
        .split_once('T')
        .is_some_and(|(date, time)| is_date_shape(date) && is_time_shape(time));

    shaped
        .then(|| {
            DATE_TIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        })
        .flatten()
        .filter(|value| !is_leap_second(value.nanosecond()))
        .ok_or_else(|| CheckFailure::NotDateTime {
            input: trimmed.to_string(),
        })
}

pub(crate) fn time_from_text(input: &str) -> Result<NaiveTime, CheckFailure> {
    let trimmed = non_blank(input)?.trim();

    is_time_shape(trimmed)
        .then(|| {
            TIME_FORMATS
                .iter()
                .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
        })
        .flatten()
        .filter(|value| !is_leap_second(value.nanosecond()))
        .ok_or_else(|| CheckFailure::NotTime {
            input: trimmed.to_string(),
        })
}

/// chrono stores second 60 as an overflowing nanosecond count.
fn is_leap_second(nanosecond: u32) -> bool {
    nanosecond >= 1_000_000_000
}

fn digits(text: &str) -> bool {
    text.bytes().all(|b| b.is_ascii_digit())
}

/// `YYYY-MM-DD`, every field zero-padded.
fn is_date_shape(text: &str) -> bool {
    text.len() == 10
        && text.is_char_boundary(4)
        && digits(&text[..4])
        && text.as_bytes()[4] == b'-'
        && text.is_char_boundary(7)
        && digits(&text[5..7])
        && text.as_bytes()[7] == b'-'
        && digits(&text[8..])
}

/// `HH:MM`, optionally followed by `:SS` and then `.` with one to nine
/// fraction digits.
fn is_time_shape(text: &str) -> bool {
    let two_digits = |field: &str| field.len() == 2 && digits(field);

    let mut fields = text.splitn(3, ':');
    let (Some(hour), Some(minute)) = (fields.next(), fields.next()) else {
        return false;
    };
    if !two_digits(hour) || !two_digits(minute) {
        return false;
    }

    match fields.next() {
        None => true,
        Some(rest) => match rest.split_once('.') {
            None => two_digits(rest),
            Some((second, fraction)) => {
                two_digits(second)
                    && (1..=9).contains(&fraction.len())
                    && digits(fraction)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> StringChecker {
        StringChecker::without_diagnostics()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_parsing() {
        assert_eq!(checker().parse_date(" 2020-12-11 "), Ok(date(2020, 12, 11)));
        assert!(!checker().is_date("2020-02-30"));
        assert!(!checker().is_date("12/11/2020"));
        assert!(!checker().is_date("2020-1-5"));
        assert!(!checker().is_date("20-01-05"));
        assert_eq!(
            checker().parse_date("tomorrow"),
            Err(CheckFailure::NotDate {
                input: "tomorrow".to_string()
            })
        );
    }

    #[test]
    fn test_date_range_inclusive_and_swapped() {
        let from = date(2020, 1, 1);
        let to = date(2020, 12, 31);

        assert!(checker().is_date_between("2020-01-01", from, to));
        assert!(checker().is_date_between("2020-12-31", to, from));
        assert!(!checker().is_date_between("2021-01-01", from, to));
    }

    #[test]
    fn test_date_time_with_and_without_seconds() {
        let expected = date(2020, 12, 11).and_hms_opt(10, 15, 0).unwrap();

        assert_eq!(checker().parse_date_time("2020-12-11T10:15"), Ok(expected));
        assert_eq!(checker().parse_date_time("2020-12-11T10:15:00"), Ok(expected));
        assert!(checker().is_date_time("2020-12-11T10:15:30.250"));
        assert!(!checker().is_date_time("2020-12-11 10:15"));
        assert!(!checker().is_date_time("2020-12-11"));
        assert!(!checker().is_date_time("2020-1-5T8:0"));
        assert!(!checker().is_date_time("2020-12-11T10:15:"));
        assert!(!checker().is_date_time("2020-12-31T23:59:60"));
    }

    #[test]
    fn test_date_time_range() {
        let from = date(2020, 12, 11).and_hms_opt(9, 0, 0).unwrap();
        let to = date(2020, 12, 11).and_hms_opt(17, 0, 0).unwrap();

        assert!(checker().is_date_time_between("2020-12-11T17:00", from, to));
        assert!(!checker().is_date_time_between("2020-12-11T17:00:01", to, from));
    }

    #[test]
    fn test_time_parsing_and_range() {
        let open = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        let close = NaiveTime::from_hms_opt(17, 30, 0).unwrap();

        assert_eq!(checker().parse_time("08:00"), Ok(open));
        assert!(checker().is_time("23:59:59"));
        assert!(!checker().is_time("24:00"));
        assert!(!checker().is_time("noon"));
        assert!(!checker().is_time("8:0"));
        assert!(!checker().is_time("08:00:5"));
        assert!(!checker().is_time("08:00.5"));
        assert!(!checker().is_time("23:59:60"));
        assert!(checker().is_time("23:59:59.123456789"));
        assert!(checker().is_time_between("17:30", close, open));
        assert!(!checker().is_time_between("07:59:59", open, close));
    }
}
