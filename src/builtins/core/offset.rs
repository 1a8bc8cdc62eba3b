//! This module implements `UtcOffset`, `OffsetDateTime` and any directly
//! related algorithms.

use crate::{
    parsers::{self, FormattableOffset, MAX_OFFSET_SECONDS},
    BridgeError, BridgeResult, ErrorKind,
};
use alloc::string::String;
use core::str::FromStr;
use jiff::tz::Offset;
use writeable::{LengthHint, Writeable};

use super::{Instant, PlainDate, PlainDateTime, PlainTime};

/// A fixed offset from UTC, with second precision, within ±18 hours.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self(0);
    /// The smallest supported offset, `-18:00`.
    pub const MIN: Self = Self(-MAX_OFFSET_SECONDS);
    /// The largest supported offset, `+18:00`.
    pub const MAX: Self = Self(MAX_OFFSET_SECONDS);

    /// Creates an offset from a signed number of seconds east of UTC.
    pub fn from_seconds(seconds: i32) -> BridgeResult<Self> {
        if !(-MAX_OFFSET_SECONDS..=MAX_OFFSET_SECONDS).contains(&seconds) {
            return Err(BridgeError::range().with_message("UTC offset must be within ±18:00."));
        }
        Ok(Self(seconds))
    }

    /// Returns the offset in seconds east of UTC.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.0
    }

    /// Returns whether this is the zero offset.
    #[inline]
    #[must_use]
    pub const fn is_utc(&self) -> bool {
        self.0 == 0
    }

    pub(crate) fn to_jiff(self) -> BridgeResult<Offset> {
        Offset::from_seconds(self.0).map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))
    }

    fn formattable(&self) -> FormattableOffset {
        FormattableOffset { seconds: self.0 }
    }
}

impl Writeable for UtcOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.formattable().write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.formattable().writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(UtcOffset);

impl FromStr for UtcOffset {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parsers::parse_offset(s).map(|offset| Self(offset.seconds()))
    }
}

/// A date-time with a fixed UTC offset.
///
/// ```rust
/// use temporal_bridge::OffsetDateTime;
///
/// let odt: OffsetDateTime = "2020-01-15T10:30:00+01:00".parse().unwrap();
/// assert_eq!(odt.offset().seconds(), 3600);
/// assert_eq!(odt.to_instant().unwrap().to_string(), "2020-01-15T09:30:00Z");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OffsetDateTime {
    date_time: PlainDateTime,
    offset: UtcOffset,
}

impl OffsetDateTime {
    /// Creates an `OffsetDateTime` from a local date-time and its offset.
    #[inline]
    #[must_use]
    pub const fn new(date_time: PlainDateTime, offset: UtcOffset) -> Self {
        Self { date_time, offset }
    }

    /// Parses a UTF-8 encoded ISO 8601 date-time with a required offset.
    pub fn from_utf8(s: &[u8]) -> BridgeResult<Self> {
        let s = core::str::from_utf8(s)
            .map_err(|_| BridgeError::parse().with_message("source text is not valid UTF-8."))?;
        Self::from_str(s)
    }

    /// Returns the local date-time.
    #[inline]
    #[must_use]
    pub fn date_time(&self) -> PlainDateTime {
        self.date_time
    }

    #[inline]
    #[must_use]
    pub fn date(&self) -> PlainDate {
        self.date_time.date()
    }

    #[inline]
    #[must_use]
    pub fn time(&self) -> PlainTime {
        self.date_time.time()
    }

    #[inline]
    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the number of seconds since the epoch of the exact time this
    /// value denotes.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.date().to_epoch_days() * 86_400 + i64::from(self.time().second_of_day())
            - i64::from(self.offset.seconds())
    }

    /// Converts this value to the exact time it denotes.
    ///
    /// Fails with a range error when the exact time falls outside of
    /// [`Instant::MIN`] and [`Instant::MAX`].
    pub fn to_instant(&self) -> BridgeResult<Instant> {
        self.offset
            .to_jiff()?
            .to_timestamp(self.date_time.civil)
            .map(Instant::new_unchecked)
            .map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))
    }

    /// Returns the canonical ISO 8601 string.
    #[inline]
    #[must_use]
    pub fn to_iso_string(&self) -> String {
        self.write_to_string().into_owned()
    }
}

impl Writeable for OffsetDateTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        self.date_time
            .formattable(Some(self.offset.seconds()))
            .write_to(sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        self.date_time
            .formattable(Some(self.offset.seconds()))
            .writeable_length_hint()
    }
}

writeable::impl_display_with_writeable!(OffsetDateTime);

impl FromStr for OffsetDateTime {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (date_time, offset) = parsers::parse_offset_date_time(s)?;
        Ok(Self::new(
            PlainDateTime::new_unchecked(date_time),
            UtcOffset(offset.seconds()),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn offsets() {
        assert_eq!("+05:30".parse::<UtcOffset>().unwrap().seconds(), 19_800);
        assert_eq!("Z".parse::<UtcOffset>().unwrap(), UtcOffset::UTC);
        assert_eq!(UtcOffset::from_seconds(-3600).unwrap().to_string(), "-01:00");
        assert_eq!(UtcOffset::MAX.to_string(), "+18:00");
        assert_eq!(
            UtcOffset::from_seconds(18 * 3600 + 1).unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn offset_date_time_round_trip() {
        for s in ["2020-01-15T10:30+01:00", "2020-01-15T10:30:05.5-05:30", "1969-12-31T23:59Z"] {
            let odt = s.parse::<OffsetDateTime>().unwrap();
            let written = odt.to_string();
            assert_eq!(written.parse::<OffsetDateTime>().unwrap(), odt, "{s}");
        }
        assert_eq!(
            "2020-01-15T10:30:05.5-05:30".parse::<OffsetDateTime>().unwrap().to_string(),
            "2020-01-15T10:30:05.500-05:30"
        );
    }

    #[test]
    fn offset_is_required() {
        let err = "2020-01-15T10:30:00".parse::<OffsetDateTime>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn epoch_seconds() {
        let odt = "1970-01-01T01:00+01:00".parse::<OffsetDateTime>().unwrap();
        assert_eq!(odt.epoch_seconds(), 0);
        let odt = "1970-01-01T00:00-00:00:01".parse::<OffsetDateTime>().unwrap();
        assert_eq!(odt.epoch_seconds(), 1);
        assert_eq!(odt.to_instant().unwrap().epoch_seconds(), 1);
        let odt = "-0001-12-31T23:59:59Z".parse::<OffsetDateTime>().unwrap();
        assert_eq!(odt.to_string(), "-0001-12-31T23:59:59Z");
        assert_eq!(odt.to_instant().unwrap().epoch_seconds(), odt.epoch_seconds());
    }

    #[test]
    fn instant_out_of_range() {
        let odt = "9999-12-31T23:00:00-01:00".parse::<OffsetDateTime>().unwrap();
        assert_eq!(odt.to_instant().unwrap_err().kind(), ErrorKind::Range);
    }
}
