use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::{Display, Formatter};
use tracing::trace;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const RANGE_SEPARATOR: char = '~';

lazy_static! {
    static ref STRICT_DATE: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to create date regex");
}

/// Day-granular event dates. `start <= end` is not guaranteed, the source sends reversed
/// ranges every now and then and those are kept as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /**
    Parses `yyyy-MM-dd~yyyy-MM-dd`.

    Returns `None` when there is no `~`, when either side is empty or when either side is
    not a real calendar date. A bare date without `~` is not a one-day event.
    */
    pub fn parse(raw: &str) -> Option<Self> {
        let Some((start, end)) = raw.split_once(RANGE_SEPARATOR) else {
            trace!("No range separator in '{}'", raw);
            return None;
        };

        Some(Self::new(parse_date(start)?, parse_date(end)?))
    }

    pub fn is_within(&self, window_start: NaiveDate, window_end: NaiveDate) -> bool {
        self.start >= window_start && self.end <= window_end
    }
}

impl Display for DateRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.start.format(DATE_FORMAT),
            RANGE_SEPARATOR,
            self.end.format(DATE_FORMAT)
        )
    }
}

/// Strict `yyyy-MM-dd`, surrounding whitespace ignored
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();

    if !STRICT_DATE.is_match(raw) {
        trace!("'{}' is not a yyyy-MM-dd date", raw);
        return None;
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .inspect_err(|err| trace!("Failed to parse date '{}'. Err: {err}", raw))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test_log::test]
    fn should_parse_well_formed_range() {
        let range = DateRange::parse("2025-01-10~2025-01-12");

        assert_eq!(
            range,
            Some(DateRange::new(date(2025, 1, 10), date(2025, 1, 12)))
        );
    }

    #[test_log::test]
    fn should_parse_range_with_spaces_around_separator() {
        let range = DateRange::parse("2025-01-10 ~ 2025-01-12");

        assert_eq!(
            range,
            Some(DateRange::new(date(2025, 1, 10), date(2025, 1, 12)))
        );
    }

    #[test_log::test]
    fn should_keep_reversed_range() {
        let range = DateRange::parse("2025-03-01~2025-02-01").unwrap();

        assert_eq!(range.start, date(2025, 3, 1));
        assert_eq!(range.end, date(2025, 2, 1));
    }

    #[test_log::test]
    fn when_there_is_no_separator_should_fail() {
        assert_eq!(DateRange::parse("2025-01-10"), None);
    }

    #[test_log::test]
    fn when_a_side_is_empty_should_fail() {
        assert_eq!(DateRange::parse("2025-01-10~"), None);
        assert_eq!(DateRange::parse("~2025-01-10"), None);
        assert_eq!(DateRange::parse("~"), None);
        assert_eq!(DateRange::parse(""), None);
    }

    #[test_log::test]
    fn when_dates_are_not_real_should_fail() {
        assert_eq!(DateRange::parse("2025-13-50~2025-14-60"), None);
        assert_eq!(DateRange::parse("2025-02-30~2025-03-01"), None);
    }

    #[test_log::test]
    fn when_date_is_not_zero_padded_should_fail() {
        assert_eq!(DateRange::parse("2025-1-5~2025-01-06"), None);
    }

    #[test_log::test]
    fn when_there_are_two_separators_should_fail() {
        assert_eq!(DateRange::parse("2025-01-10~2025-01-12~2025-01-14"), None);
    }

    #[test_log::test]
    fn should_format_back_to_source_encoding() {
        let range = DateRange::new(date(2025, 1, 5), date(2025, 1, 6));

        assert_eq!(range.to_string(), "2025-01-05~2025-01-06");
    }

    #[test_log::test]
    fn window_bounds_should_be_inclusive() {
        let range = DateRange::new(date(2025, 1, 1), date(2025, 1, 31));

        assert!(range.is_within(date(2025, 1, 1), date(2025, 1, 31)));
        assert!(!range.is_within(date(2025, 1, 2), date(2025, 1, 31)));
        assert!(!range.is_within(date(2025, 1, 1), date(2025, 1, 30)));
    }
}
