//! This module implements `PlainTime` and any directly related algorithms.

use crate::{
    parsers::{self, FormattableTime},
    BridgeError, BridgeResult, ErrorKind,
};
use alloc::string::String;
use core::str::FromStr;
use jiff::civil::Time;
use writeable::{LengthHint, Writeable};

use super::saturating_i8;

/// A wall-clock time of day with nanosecond precision and no date or zone.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PlainTime {
    pub(crate) civil: Time,
}

impl PlainTime {
    /// Midnight, `00:00`.
    pub const MIDNIGHT: Self = Self::new_unchecked(Time::midnight());

    #[inline]
    pub(crate) const fn new_unchecked(civil: Time) -> Self {
        Self { civil }
    }

    /// Creates a new `PlainTime`, rejecting any out of range component.
    ///
    /// `nanosecond` is the nano-of-second, in `0..1_000_000_000`.
    pub fn try_new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> BridgeResult<Self> {
        let nanosecond = i32::try_from(nanosecond).unwrap_or(i32::MAX);
        Time::new(
            saturating_i8(hour),
            saturating_i8(minute),
            saturating_i8(second),
            nanosecond,
        )
        .map(Self::new_unchecked)
        .map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))
    }

    /// Parses a UTF-8 encoded ISO 8601 time.
    pub fn from_utf8(s: &[u8]) -> BridgeResult<Self> {
        let s = core::str::from_utf8(s)
            .map_err(|_| BridgeError::parse().with_message("source text is not valid UTF-8."))?;
        Self::from_str(s)
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.civil.hour() as u8
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.civil.minute() as u8
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.civil.second() as u8
    }

    /// Returns the milli-of-second.
    #[inline]
    #[must_use]
    pub fn millisecond(&self) -> u16 {
        (self.nanosecond() / 1_000_000) as u16
    }

    /// Returns the micro-of-second.
    #[inline]
    #[must_use]
    pub fn microsecond(&self) -> u32 {
        self.nanosecond() / 1_000
    }

    /// Returns the nano-of-second.
    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.civil.subsec_nanosecond() as u32
    }

    /// Returns the number of seconds elapsed since midnight.
    #[inline]
    #[must_use]
    pub fn second_of_day(&self) -> u32 {
        u32::from(self.hour()) * 3600 + u32::from(self.minute()) * 60 + u32::from(self.second())
    }

    /// Returns the canonical ISO 8601 string.
    #[inline]
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.write_to_string().into_owned()
    }
}

impl Writeable for PlainTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        FormattableTime::from(self.civil).write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        FormattableTime::from(self.civil).writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(PlainTime);

impl FromStr for PlainTime {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_time(s).map(Self::new_unchecked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    fn assert_time(time: PlainTime, values: (u8, u8, u8, u32)) {
        assert_eq!(
            (time.hour(), time.minute(), time.second(), time.nanosecond()),
            values
        );
    }

    #[test]
    fn basic_parse_time() {
        assert_time("12:05".parse().unwrap(), (12, 5, 0, 0));
        assert_time("12:05:24".parse().unwrap(), (12, 5, 24, 0));
        assert_time("12:05:24.123456789".parse().unwrap(), (12, 5, 24, 123_456_789));
        assert!("12:05:24-05:00".parse::<PlainTime>().is_err());
        assert!("T12:05".parse::<PlainTime>().is_err());
    }

    #[test]
    fn sub_second_accessors() {
        let time = PlainTime::try_new(1, 2, 3, 123_456_789).unwrap();
        assert_eq!(time.millisecond(), 123);
        assert_eq!(time.microsecond(), 123_456);
        assert_eq!(time.second_of_day(), 3723);
        assert_eq!(PlainTime::default(), PlainTime::MIDNIGHT);
        assert!(PlainTime::try_new(24, 0, 0, 0).is_err());
        assert!(PlainTime::try_new(0, 0, 0, 1_000_000_000).is_err());
    }

    #[test]
    fn canonical_strings() {
        for s in ["00:00", "10:15:30", "10:15:30.100", "23:59:59.999999999"] {
            assert_eq!(s.parse::<PlainTime>().unwrap().to_string(), s);
        }
        assert_eq!("10:15:00".parse::<PlainTime>().unwrap().to_string(), "10:15");
        assert_eq!("10:15:30.1".parse::<PlainTime>().unwrap().to_string(), "10:15:30.100");
    }
}
