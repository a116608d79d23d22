use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::Deref;
use std::str::FromStr;

use exn::ResultExt;
use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::error::{Error, ErrorKind};

const FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// A calendar date without time-of-day, encoded as `YYYY-MM-DD`.
///
/// ```rust
/// use fdcl_index::codec::CalendarDate;
/// let added: CalendarDate = "2015-03-09".parse().unwrap();
/// assert_eq!(added.to_string(), "2015-03-09");
/// assert!("2015-3-9".parse::<CalendarDate>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(Date);
impl CalendarDate {
    pub fn new(date: Date) -> Self {
        Self(date)
    }

    pub fn date(&self) -> Date {
        self.0
    }
}

impl FromStr for CalendarDate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ErrorKind::Format {
            codec: "date",
            value: s.to_string(),
        };
        // `[year]` also takes a sign or extra digits; only four bare digits are valid.
        if !has_date_shape(s) {
            exn::bail!(invalid());
        }
        Ok(Self(Date::parse(s, FORMAT).or_raise(invalid)?))
    }
}
/// Checks for `DDDD-DD-DD` with ASCII digits.
fn has_date_shape(s: &str) -> bool {
    s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        })
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        // Formatting only fails for components the description doesn't use.
        let formatted = self.0.format(FORMAT).map_err(|_| std::fmt::Error)?;
        f.write_str(&formatted)
    }
}

impl Deref for CalendarDate {
    type Target = Date;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<Date> for CalendarDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}
impl From<CalendarDate> for Date {
    fn from(value: CalendarDate) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::Month;

    #[rstest]
    #[case("2015-03-09", 2015, Month::March, 9)]
    #[case("2000-02-29", 2000, Month::February, 29)]
    #[case("0001-01-01", 1, Month::January, 1)]
    #[case("9999-12-31", 9999, Month::December, 31)]
    fn test_decode(#[case] input: &str, #[case] year: i32, #[case] month: Month, #[case] day: u8) {
        let expected = Date::from_calendar_date(year, month, day).unwrap();
        assert_eq!(input.parse::<CalendarDate>().unwrap().date(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("2015-3-9")]
    #[case("15-03-09")]
    #[case("2015/03/09")]
    #[case("2015-03-09T10:00:00")]
    #[case("2023-02-30")]
    #[case("2015-13-01")]
    #[case("yesterday")]
    #[case("+2015-03-09")]
    #[case("-0001-01-01")]
    #[case("02015-03-09")]
    #[case("２０１５-03-09")]
    fn test_decode_invalid(#[case] input: &str) {
        let err = input.parse::<CalendarDate>().unwrap_err();
        assert_eq!(*err, ErrorKind::Format { codec: "date", value: input.to_string() });
    }

    #[test]
    fn test_round_trip_every_day_of_a_leap_year() {
        let mut date = Date::from_calendar_date(2024, Month::January, 1).unwrap();
        while date.year() == 2024 {
            let original = CalendarDate::new(date);
            assert_eq!(original.to_string().parse::<CalendarDate>().unwrap(), original);
            date = date.next_day().unwrap();
        }
    }

    #[rstest]
    #[case(1970, Month::January, 1)]
    #[case(1, Month::June, 15)]
    #[case(9999, Month::December, 31)]
    fn test_round_trip_years(#[case] year: i32, #[case] month: Month, #[case] day: u8) {
        let original = CalendarDate::new(Date::from_calendar_date(year, month, day).unwrap());
        assert_eq!(original.to_string().parse::<CalendarDate>().unwrap(), original);
    }
}
