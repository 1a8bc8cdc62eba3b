//! This module implements `TemporalField`, `ValueRange` and the per-type
//! field support rules.

use core::{fmt, str::FromStr};

use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{
    parsers::{MAX_OFFSET_SECONDS, MAX_YEAR},
    BridgeError, BridgeResult, Instant, OffsetDateTime, PlainDate, PlainDateTime, PlainTime,
};

/// A field of a date or time that a range can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalField {
    /// The nanosecond within the second, 0 through 999,999,999.
    NanoOfSecond,
    /// The microsecond within the second.
    MicroOfSecond,
    /// The millisecond within the second.
    MilliOfSecond,
    /// The second within the minute. Leap seconds are not represented.
    SecondOfMinute,
    /// The minute within the hour.
    MinuteOfHour,
    /// The hour on a 24 hour clock.
    HourOfDay,
    /// Morning (0) or afternoon (1).
    AmPmOfDay,
    /// The ISO day of the week, Monday (1) through Sunday (7).
    DayOfWeek,
    /// The day within the month; the range depends on the month and year.
    DayOfMonth,
    /// The one-based day within the year, up to 366 in leap years.
    DayOfYear,
    /// January (1) through December (12).
    MonthOfYear,
    /// The proleptic year, where year 0 is 1 BCE.
    Year,
    /// BCE (0) or CE (1).
    Era,
    /// Days since 1970-01-01.
    EpochDay,
    /// Seconds since 1970-01-01T00:00:00Z.
    InstantSeconds,
    /// The UTC offset in seconds.
    OffsetSeconds,
}

impl TemporalField {
    /// Every field, in declaration order.
    pub const ALL: [Self; 16] = [
        Self::NanoOfSecond,
        Self::MicroOfSecond,
        Self::MilliOfSecond,
        Self::SecondOfMinute,
        Self::MinuteOfHour,
        Self::HourOfDay,
        Self::AmPmOfDay,
        Self::DayOfWeek,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::MonthOfYear,
        Self::Year,
        Self::Era,
        Self::EpochDay,
        Self::InstantSeconds,
        Self::OffsetSeconds,
    ];

    /// Returns whether this field is a component of a time of day.
    #[must_use]
    pub const fn is_time_based(self) -> bool {
        matches!(
            self,
            Self::NanoOfSecond
                | Self::MicroOfSecond
                | Self::MilliOfSecond
                | Self::SecondOfMinute
                | Self::MinuteOfHour
                | Self::HourOfDay
                | Self::AmPmOfDay
        )
    }

    /// Returns whether this field is a component of a calendar date.
    #[must_use]
    pub const fn is_date_based(self) -> bool {
        matches!(
            self,
            Self::DayOfWeek
                | Self::DayOfMonth
                | Self::DayOfYear
                | Self::MonthOfYear
                | Self::Year
                | Self::Era
                | Self::EpochDay
        )
    }

    /// Returns the widest range of this field, independent of any value.
    #[must_use]
    pub fn range(self) -> ValueRange {
        match self {
            Self::NanoOfSecond => ValueRange::new(0, 999_999_999),
            Self::MicroOfSecond => ValueRange::new(0, 999_999),
            Self::MilliOfSecond => ValueRange::new(0, 999),
            Self::SecondOfMinute | Self::MinuteOfHour => ValueRange::new(0, 59),
            Self::HourOfDay => ValueRange::new(0, 23),
            Self::AmPmOfDay | Self::Era => ValueRange::new(0, 1),
            Self::DayOfWeek => ValueRange::new(1, 7),
            Self::DayOfMonth => ValueRange::new(1, 31),
            Self::DayOfYear => ValueRange::new(1, 366),
            Self::MonthOfYear => ValueRange::new(1, 12),
            Self::Year => ValueRange::new(-i64::from(MAX_YEAR), i64::from(MAX_YEAR)),
            Self::EpochDay => {
                ValueRange::new(PlainDate::MIN.to_epoch_days(), PlainDate::MAX.to_epoch_days())
            }
            Self::InstantSeconds => {
                ValueRange::new(Instant::MIN.epoch_seconds(), Instant::MAX.epoch_seconds())
            }
            Self::OffsetSeconds => {
                ValueRange::new(-MAX_OFFSET_SECONDS as i64, MAX_OFFSET_SECONDS as i64)
            }
        }
    }

    /// Returns the range of this field refined by a specific date.
    fn range_for_date(self, date: &PlainDate) -> ValueRange {
        match self {
            Self::DayOfMonth => ValueRange::new(1, i64::from(date.days_in_month())),
            Self::DayOfYear => ValueRange::new(1, i64::from(date.days_in_year())),
            _ => self.range(),
        }
    }

    fn unsupported(self) -> BridgeError {
        BridgeError::unsupported_field().with_message(match self {
            Self::NanoOfSecond => "unsupported field: nano-of-second",
            Self::MicroOfSecond => "unsupported field: micro-of-second",
            Self::MilliOfSecond => "unsupported field: milli-of-second",
            Self::SecondOfMinute => "unsupported field: second-of-minute",
            Self::MinuteOfHour => "unsupported field: minute-of-hour",
            Self::HourOfDay => "unsupported field: hour-of-day",
            Self::AmPmOfDay => "unsupported field: am-pm-of-day",
            Self::DayOfWeek => "unsupported field: day-of-week",
            Self::DayOfMonth => "unsupported field: day-of-month",
            Self::DayOfYear => "unsupported field: day-of-year",
            Self::MonthOfYear => "unsupported field: month-of-year",
            Self::Year => "unsupported field: year",
            Self::Era => "unsupported field: era",
            Self::EpochDay => "unsupported field: epoch-day",
            Self::InstantSeconds => "unsupported field: instant-seconds",
            Self::OffsetSeconds => "unsupported field: offset-seconds",
        })
    }

    /// Returns this field's external name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NanoOfSecond => "nano-of-second",
            Self::MicroOfSecond => "micro-of-second",
            Self::MilliOfSecond => "milli-of-second",
            Self::SecondOfMinute => "second-of-minute",
            Self::MinuteOfHour => "minute-of-hour",
            Self::HourOfDay => "hour-of-day",
            Self::AmPmOfDay => "am-pm-of-day",
            Self::DayOfWeek => "day-of-week",
            Self::DayOfMonth => "day-of-month",
            Self::DayOfYear => "day-of-year",
            Self::MonthOfYear => "month-of-year",
            Self::Year => "year",
            Self::Era => "era",
            Self::EpochDay => "epoch-day",
            Self::InstantSeconds => "instant-seconds",
            Self::OffsetSeconds => "offset-seconds",
        }
    }
}

/// A parsing error for `TemporalField`.
#[derive(Debug, Clone, Copy)]
pub struct ParseTemporalFieldError;

impl fmt::Display for ParseTemporalFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid TemporalField")
    }
}

impl FromStr for TemporalField {
    type Err = ParseTemporalFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or(ParseTemporalFieldError)
    }
}

impl fmt::Display for TemporalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The inclusive range of valid values of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    min: i64,
    max: i64,
}

impl ValueRange {
    /// Creates a new range. `min` must not exceed `max`.
    #[inline]
    #[must_use]
    pub const fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Returns the smallest valid value.
    #[inline]
    #[must_use]
    pub const fn min(&self) -> i64 {
        self.min
    }

    /// Returns the largest valid value.
    #[inline]
    #[must_use]
    pub const fn max(&self) -> i64 {
        self.max
    }

    /// Returns whether `value` lies within this range.
    #[inline]
    #[must_use]
    pub const fn is_valid_value(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Writeable for ValueRange {
    fn write_to<W: fmt::Write + ?Sized>(&self, sink: &mut W) -> fmt::Result {
        self.min.write_to(sink)?;
        sink.write_str(" - ")?;
        self.max.write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.min.writeable_length_hint() + 3 + self.max.writeable_length_hint()
    }
}

impl_display_with_writeable!(ValueRange);

// ==== Field support ====

impl PlainDate {
    /// Returns the valid range of `field` for this date.
    ///
    /// Fails with an unsupported field error for time-based and
    /// instant-based fields.
    pub fn range(&self, field: TemporalField) -> BridgeResult<ValueRange> {
        if !field.is_date_based() {
            return Err(field.unsupported());
        }
        Ok(field.range_for_date(self))
    }
}

impl PlainTime {
    /// Returns the valid range of `field` for this time.
    ///
    /// Fails with an unsupported field error for anything but time-based
    /// fields.
    pub fn range(&self, field: TemporalField) -> BridgeResult<ValueRange> {
        if !field.is_time_based() {
            return Err(field.unsupported());
        }
        Ok(field.range())
    }
}

impl PlainDateTime {
    /// Returns the valid range of `field` for this date-time.
    pub fn range(&self, field: TemporalField) -> BridgeResult<ValueRange> {
        if field.is_time_based() {
            return self.time().range(field);
        }
        self.date().range(field)
    }
}

impl OffsetDateTime {
    /// Returns the valid range of `field` for this date-time, including the
    /// instant and offset fields.
    pub fn range(&self, field: TemporalField) -> BridgeResult<ValueRange> {
        match field {
            TemporalField::InstantSeconds | TemporalField::OffsetSeconds => Ok(field.range()),
            _ => self.date_time().range(field),
        }
    }
}

impl Instant {
    /// Returns the valid range of `field` for this instant.
    ///
    /// Only the sub-second fields and `InstantSeconds` apply to an instant.
    pub fn range(&self, field: TemporalField) -> BridgeResult<ValueRange> {
        match field {
            TemporalField::NanoOfSecond
            | TemporalField::MicroOfSecond
            | TemporalField::MilliOfSecond
            | TemporalField::InstantSeconds => Ok(field.range()),
            _ => Err(field.unsupported()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn day_of_month_follows_the_month() {
        let january = PlainDate::try_new(2020, 1, 15).unwrap();
        let range = january.range(TemporalField::DayOfMonth).unwrap();
        assert_eq!((range.min(), range.max()), (1, 31));
        assert!(range.is_valid_value(31));
        assert!(!range.is_valid_value(32));
        assert_eq!(range.to_string(), "1 - 31");

        let february = PlainDate::try_new(2021, 2, 1).unwrap();
        assert_eq!(february.range(TemporalField::DayOfMonth).unwrap().max(), 28);
        let leap = PlainDate::try_new(2020, 2, 1).unwrap();
        assert_eq!(leap.range(TemporalField::DayOfMonth).unwrap().max(), 29);
        assert_eq!(leap.range(TemporalField::DayOfYear).unwrap().max(), 366);
    }

    #[test]
    fn support_matrix() {
        let date = PlainDate::try_new(2020, 1, 15).unwrap();
        let time = PlainTime::try_new(10, 30, 0, 0).unwrap();
        let date_time = date.at(time);
        let offset_date_time = "2020-01-15T10:30+01:00".parse::<OffsetDateTime>().unwrap();
        let instant = offset_date_time.to_instant().unwrap();

        for field in TemporalField::ALL {
            assert_eq!(date.range(field).is_ok(), field.is_date_based(), "{field}");
            assert_eq!(time.range(field).is_ok(), field.is_time_based(), "{field}");
            assert_eq!(
                date_time.range(field).is_ok(),
                field.is_date_based() || field.is_time_based(),
                "{field}"
            );
            assert!(offset_date_time.range(field).is_ok(), "{field}");
        }

        assert!(instant.range(TemporalField::InstantSeconds).is_ok());
        assert!(instant.range(TemporalField::MilliOfSecond).is_ok());
        let err = instant.range(TemporalField::DayOfMonth).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedField);
        assert_eq!(err.message(), "unsupported field: day-of-month");
    }

    #[test]
    fn field_names() {
        for field in TemporalField::ALL {
            assert_eq!(field.name().parse::<TemporalField>().unwrap(), field);
        }
        assert!("DayOfMonth".parse::<TemporalField>().is_err());
    }

    #[test]
    fn widest_ranges_match_the_limits() {
        let year = TemporalField::Year.range();
        assert_eq!((year.min(), year.max()), (-9999, 9999));
        let epoch_day = TemporalField::EpochDay.range();
        assert_eq!(epoch_day.max(), 2_932_896);
        assert!(PlainDate::from_epoch_days(epoch_day.min()).is_ok());
        assert!(PlainDate::from_epoch_days(epoch_day.min() - 1).is_err());
        let seconds = TemporalField::InstantSeconds.range();
        assert!(Instant::try_new(seconds.min(), 0).is_ok());
        assert!(Instant::try_new(seconds.max() + 1, 0).is_err());
    }

    #[test]
    fn negative_ranges_display() {
        assert_eq!(TemporalField::OffsetSeconds.range().to_string(), "-64800 - 64800");
    }
}
