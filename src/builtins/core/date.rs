//! This module implements `PlainDate` and any directly related algorithms.

use crate::{
    era::Era,
    parsers::{self, checked_year, FormattableDate},
    BridgeError, BridgeResult, ErrorKind,
};
use alloc::string::String;
use core::str::FromStr;
use jiff::{civil::Date, Span};
use writeable::{LengthHint, Writeable};

use super::{saturating_i8, PlainDateTime, PlainTime};

/// 1970-01-01, day zero of the epoch day count.
const UNIX_EPOCH_DATE: Date = jiff::civil::date(1970, 1, 1);

/// A calendar date in the ISO 8601 (proleptic Gregorian) calendar, between
/// the years -9999 and 9999.
///
/// ```rust
/// use temporal_bridge::PlainDate;
///
/// let date: PlainDate = "2020-01-15".parse().unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (2020, 1, 15));
/// assert_eq!(date.days_in_month(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDate {
    pub(crate) civil: Date,
}

impl PlainDate {
    /// The earliest supported date, `-9999-01-01`.
    pub const MIN: Self = Self::new_unchecked(Date::MIN);
    /// The latest supported date, `9999-12-31`.
    pub const MAX: Self = Self::new_unchecked(Date::MAX);

    #[inline]
    pub(crate) const fn new_unchecked(civil: Date) -> Self {
        Self { civil }
    }

    /// Creates a new `PlainDate`, rejecting any invalid component.
    pub fn try_new(year: i32, month: u8, day: u8) -> BridgeResult<Self> {
        let year = checked_year(year)?;
        Date::new(year, saturating_i8(month), saturating_i8(day))
            .map(Self::new_unchecked)
            .map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))
    }

    /// Creates a `PlainDate` from a year and a one-based day of that year.
    pub fn try_from_ordinal(year: i32, day_of_year: u16) -> BridgeResult<Self> {
        let first = Self::try_new(year, 1, 1)?;
        if day_of_year == 0 || day_of_year > first.days_in_year() {
            return Err(BridgeError::range().with_message(alloc::format!(
                "day of year {day_of_year} is outside 1..={}.",
                first.days_in_year()
            )));
        }
        first
            .civil
            .checked_add(Span::new().days(i64::from(day_of_year - 1)))
            .map(Self::new_unchecked)
            .map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))
    }

    /// Creates a `PlainDate` from a count of days since 1970-01-01.
    pub fn from_epoch_days(days: i64) -> BridgeResult<Self> {
        Span::new()
            .try_days(days)
            .and_then(|span| UNIX_EPOCH_DATE.checked_add(span))
            .map(Self::new_unchecked)
            .map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))
    }

    /// Parses a UTF-8 encoded ISO 8601 date.
    pub fn from_utf8(s: &[u8]) -> BridgeResult<Self> {
        let s = core::str::from_utf8(s)
            .map_err(|_| BridgeError::parse().with_message("source text is not valid UTF-8."))?;
        Self::from_str(s)
    }

    /// Combines this date with a time.
    #[inline]
    #[must_use]
    pub fn at(&self, time: PlainTime) -> PlainDateTime {
        PlainDateTime::new(*self, time)
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        i32::from(self.civil.year())
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.civil.month() as u8
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.civil.day() as u8
    }

    /// Returns the ISO day of the week, Monday being 1 and Sunday 7.
    #[inline]
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        self.civil.weekday().to_monday_one_offset() as u8
    }

    #[inline]
    #[must_use]
    pub fn day_of_year(&self) -> u16 {
        self.civil.day_of_year() as u16
    }

    #[inline]
    #[must_use]
    pub fn days_in_month(&self) -> u8 {
        self.civil.days_in_month() as u8
    }

    #[inline]
    #[must_use]
    pub fn days_in_year(&self) -> u16 {
        self.civil.days_in_year() as u16
    }

    #[inline]
    #[must_use]
    pub fn in_leap_year(&self) -> bool {
        self.civil.in_leap_year()
    }

    /// Returns the count of days since 1970-01-01.
    #[must_use]
    pub fn to_epoch_days(&self) -> i64 {
        // NOTE: a span in days between any two supported dates is within
        // the limits of `Span`, so the difference cannot fail.
        self.civil
            .since(UNIX_EPOCH_DATE)
            .map_or(0, |span| i64::from(span.get_days()))
    }

    /// Returns the ISO era of this date.
    #[must_use]
    pub fn era(&self) -> Era {
        if self.year() >= 1 {
            Era::Ce
        } else {
            Era::Bce
        }
    }

    /// Returns the year counted within this date's era, where the year
    /// before 1 CE is 1 BCE.
    #[must_use]
    pub fn year_of_era(&self) -> i32 {
        let year = self.year();
        if year >= 1 {
            year
        } else {
            1 - year
        }
    }

    /// Returns the canonical ISO 8601 string.
    #[inline]
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.write_to_string().into_owned()
    }
}

impl Writeable for PlainDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableDate::from(self.civil).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableDate::from(self.civil).writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(PlainDate);

impl FromStr for PlainDate {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_date(s).map(Self::new_unchecked)
    }
}

impl From<PlainDateTime> for PlainDate {
    fn from(value: PlainDateTime) -> Self {
        value.date()
    }
}
