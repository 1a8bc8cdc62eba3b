//! An implementation of `Instant`, an exact point on the UTC time line.

use crate::{
    parsers::{self, write_nanosecond, write_padded_u8, FormattableDate},
    BridgeError, BridgeResult, ErrorKind,
};
use alloc::string::String;
use core::str::FromStr;
use jiff::{civil::DateTime, tz::Offset, Timestamp};
use writeable::{LengthHint, Writeable};

use super::{OffsetDateTime, PlainDateTime, UtcOffset};

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// An exact time on the UTC time line, with nanosecond precision.
///
/// The supported range leaves room for any offset to be applied to
/// [`Instant::MIN`] and [`Instant::MAX`] without leaving the years
/// -9999 through 9999.
///
/// ```rust
/// use temporal_bridge::Instant;
///
/// let instant: Instant = "2020-01-15T10:30:00+01:00".parse().unwrap();
/// assert_eq!(instant.epoch_seconds(), 1_579_080_600);
/// assert_eq!(instant.to_string(), "2020-01-15T09:30:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    timestamp: Timestamp,
}

impl Instant {
    /// The earliest supported instant.
    pub const MIN: Self = Self::new_unchecked(Timestamp::MIN);
    /// The latest supported instant.
    pub const MAX: Self = Self::new_unchecked(Timestamp::MAX);
    /// 1970-01-01T00:00:00Z.
    pub const EPOCH: Self = Self::new_unchecked(Timestamp::UNIX_EPOCH);

    #[inline]
    pub(crate) const fn new_unchecked(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Creates an `Instant` from epoch seconds and a nano-of-second.
    pub fn try_new(seconds: i64, nanosecond: u32) -> BridgeResult<Self> {
        if nanosecond >= NANOS_PER_SECOND {
            return Err(BridgeError::range().with_message("nanosecond must be below one second."));
        }
        // NOTE: `nanosecond` is below one second, so it fits an `i32`.
        Timestamp::new(seconds, nanosecond as i32)
            .map(Self::new_unchecked)
            .map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))
    }

    /// Creates an `Instant` from milliseconds since the epoch.
    pub fn from_epoch_milliseconds(millis: i64) -> BridgeResult<Self> {
        // NOTE: `rem_euclid(1000)` is always within 0..1000.
        let nanosecond = millis.rem_euclid(1_000) as u32 * 1_000_000;
        Self::try_new(millis.div_euclid(1_000), nanosecond)
    }

    /// Parses a UTF-8 encoded ISO 8601 date-time with a required offset.
    pub fn from_utf8(s: &[u8]) -> BridgeResult<Self> {
        let s = core::str::from_utf8(s)
            .map_err(|_| BridgeError::parse().with_message("source text is not valid UTF-8."))?;
        Self::from_str(s)
    }

    /// Returns the whole seconds since the epoch, rounded toward negative
    /// infinity.
    #[inline]
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        let seconds = self.timestamp.as_second();
        if self.timestamp.subsec_nanosecond() < 0 {
            seconds - 1
        } else {
            seconds
        }
    }

    /// Returns the nano-of-second, counted forward from
    /// [`Instant::epoch_seconds`].
    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        // NOTE: `rem_euclid` of one second is always non-negative.
        self.timestamp
            .subsec_nanosecond()
            .rem_euclid(NANOS_PER_SECOND as i32) as u32
    }

    /// Returns the milliseconds since the epoch, rounded toward negative
    /// infinity.
    #[inline]
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        self.epoch_seconds() * 1_000 + i64::from(self.nanosecond() / 1_000_000)
    }

    /// Returns this instant as a date-time at the given offset.
    pub fn to_offset_date_time(&self, offset: UtcOffset) -> BridgeResult<OffsetDateTime> {
        let local = offset.to_jiff()?.to_datetime(self.timestamp);
        Ok(PlainDateTime::new_unchecked(local).with_offset(offset))
    }

    /// Returns the canonical ISO 8601 string, always in UTC.
    #[inline]
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.write_to_string().into_owned()
    }

    fn utc(&self) -> DateTime {
        Offset::UTC.to_datetime(self.timestamp)
    }
}

impl Writeable for Instant {
    // Unlike local date-times, an instant always prints its seconds.
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let utc = self.utc();
        FormattableDate::from(utc.date()).write_to(sink)?;
        sink.write_char('T')?;
        // NOTE: every component of a civil time is non-negative.
        write_padded_u8(utc.hour() as u8, sink)?;
        sink.write_char(':')?;
        write_padded_u8(utc.minute() as u8, sink)?;
        sink.write_char(':')?;
        write_padded_u8(utc.second() as u8, sink)?;
        let precision = fraction_digits(self.nanosecond());
        if precision != 0 {
            sink.write_char('.')?;
            write_nanosecond(self.nanosecond(), precision, sink)?;
        }
        sink.write_char('Z')
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let date = FormattableDate::from(self.utc().date());
        let fraction = match fraction_digits(self.nanosecond()) {
            0 => 0,
            d => d + 1,
        };
        date.writeable_length_hint() + 10 + fraction
    }
}

fn fraction_digits(nanosecond: u32) -> usize {
    match nanosecond {
        0 => 0,
        n if n % 1_000_000 == 0 => 3,
        n if n % 1_000 == 0 => 6,
        _ => 9,
    }
}

writeable::impl_display_with_writeable!(Instant);

impl FromStr for Instant {
    type Err = BridgeError;

    /// Parses a date-time with an offset. A date-time that is well formed
    /// but lands outside of the supported range fails with a range error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date_time, offset) = parsers::parse_offset_date_time(s)?;
        let offset = UtcOffset::from_seconds(offset.seconds())?;
        offset
            .to_jiff()?
            .to_timestamp(date_time)
            .map(Self::new_unchecked)
            .map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))
    }
}

impl From<Instant> for OffsetDateTime {
    fn from(value: Instant) -> Self {
        PlainDateTime::new_unchecked(value.utc()).with_offset(UtcOffset::UTC)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn parse_converts_to_utc() {
        let instant = "2020-01-15T10:30:00+01:00".parse::<Instant>().unwrap();
        assert_eq!(instant.to_string(), "2020-01-15T09:30:00Z");
        let instant = "1969-12-31T23:59:59.5Z".parse::<Instant>().unwrap();
        assert_eq!(instant.epoch_seconds(), -1);
        assert_eq!(instant.nanosecond(), 500_000_000);
        assert_eq!(instant.epoch_milliseconds(), -500);
        assert_eq!(instant.to_string(), "1969-12-31T23:59:59.500Z");
    }

    #[test]
    fn offset_is_required() {
        let err = "2020-01-15T10:30:00".parse::<Instant>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn out_of_range_is_a_range_error() {
        let err = "9999-12-31T23:59:59-01:00".parse::<Instant>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        let err = "+10000-01-01T00:00Z".parse::<Instant>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(Instant::try_new(Instant::MAX.epoch_seconds() + 1, 0).is_err());
        assert!(Instant::try_new(Instant::MIN.epoch_seconds() - 1, 0).is_err());
        assert!(Instant::try_new(0, 1_000_000_000).is_err());
    }

    #[test]
    fn limits_and_offsets() {
        for limit in [Instant::MIN, Instant::MAX] {
            assert_eq!(limit.to_string().parse::<Instant>().unwrap(), limit);
            let far = limit.to_offset_date_time(UtcOffset::MAX).unwrap();
            assert_eq!(far.to_instant().unwrap(), limit);
        }
        assert!(Instant::MIN.to_string().starts_with("-9999-01-0"));
        assert!(Instant::MAX.to_string().starts_with("9999-12-"));
        assert_eq!(Instant::MAX.nanosecond(), 999_999_999);
        assert_eq!(Instant::EPOCH.to_string(), "1970-01-01T00:00:00Z");

        let instant = Instant::from_epoch_milliseconds(1_500).unwrap();
        let odt = instant
            .to_offset_date_time(UtcOffset::from_seconds(-3600).unwrap())
            .unwrap();
        assert_eq!(odt.to_string(), "1969-12-31T23:00:01.500-01:00");
        assert_eq!(odt.to_instant().unwrap(), instant);
        assert_eq!(OffsetDateTime::from(instant).to_string(), "1970-01-01T00:00:01.500Z");
    }
}
