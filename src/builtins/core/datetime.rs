//! This module implements `PlainDateTime` and any directly related algorithms.

use crate::{
    parsers::{self, FormattableIso},
    BridgeError, BridgeResult,
};
use alloc::string::String;
use core::str::FromStr;
use jiff::civil::DateTime;
use writeable::{LengthHint, Writeable};

use super::{OffsetDateTime, PlainDate, PlainTime, UtcOffset};

/// A date and wall-clock time in the ISO 8601 calendar, with no zone or
/// offset attached.
///
/// ```rust
/// use temporal_bridge::PlainDateTime;
///
/// // A trailing offset, `Z` included, is accepted and discarded.
/// let dt: PlainDateTime = "2020-01-15T10:30:00+01:00".parse().unwrap();
/// assert_eq!(dt.hour(), 10);
/// assert_eq!(dt.to_string(), "2020-01-15T10:30");
/// assert_eq!("2020-01-15T10:30:00Z".parse::<PlainDateTime>().unwrap(), dt);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainDateTime {
    pub(crate) civil: DateTime,
}

impl PlainDateTime {
    #[inline]
    pub(crate) const fn new_unchecked(civil: DateTime) -> Self {
        Self { civil }
    }

    /// Creates a `PlainDateTime` from a date and a time.
    #[inline]
    #[must_use]
    pub const fn new(date: PlainDate, time: PlainTime) -> Self {
        Self::new_unchecked(DateTime::from_parts(date.civil, time.civil))
    }

    /// Creates a new `PlainDateTime`, rejecting any out of range component.
    pub fn try_new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> BridgeResult<Self> {
        let date = PlainDate::try_new(year, month, day)?;
        let time = PlainTime::try_new(hour, minute, second, nanosecond)?;
        Ok(Self::new(date, time))
    }

    /// Parses a UTF-8 encoded ISO 8601 local date-time.
    pub fn from_utf8(s: &[u8]) -> BridgeResult<Self> {
        let s = core::str::from_utf8(s)
            .map_err(|_| BridgeError::parse().with_message("source text is not valid UTF-8."))?;
        Self::from_str(s)
    }

    /// Returns the date component.
    #[inline]
    #[must_use]
    pub fn date(&self) -> PlainDate {
        PlainDate::new_unchecked(self.civil.date())
    }

    /// Returns the time component.
    #[inline]
    #[must_use]
    pub fn time(&self) -> PlainTime {
        PlainTime::new_unchecked(self.civil.time())
    }

    /// Attaches a UTC offset to this date-time.
    #[inline]
    #[must_use]
    pub fn with_offset(&self, offset: UtcOffset) -> OffsetDateTime {
        OffsetDateTime::new(*self, offset)
    }

    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date().year()
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.date().month()
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.date().day()
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.time().hour()
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.time().minute()
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.time().second()
    }

    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.time().nanosecond()
    }

    /// Returns the canonical ISO 8601 string.
    #[inline]
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.write_to_string().into_owned()
    }

    pub(crate) fn formattable(&self, offset: Option<i32>) -> FormattableIso {
        FormattableIso {
            date: Some(self.civil.date().into()),
            time: Some(self.civil.time().into()),
            offset: offset.map(|seconds| parsers::FormattableOffset { seconds }),
        }
    }
}

impl Writeable for PlainDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.formattable(None).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.formattable(None).writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(PlainDateTime);

impl FromStr for PlainDateTime {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_date_time(s).map(Self::new_unchecked)
    }
}
