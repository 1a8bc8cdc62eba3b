//! This module implements the default ISO 8601 grammars and their canonical
//! string output.
//!
//! Parsing is done by `ixdtf`, which accepts the RFC 9557 and ISO 8601
//! date-time grammar. Bracketed annotations (time zones, calendars and any
//! other key) are rejected, since none of the values here can carry them.
//! The parsed records are then checked against the civil types of `jiff`.

use alloc::{borrow::Cow, format, string::String};

use ixdtf::{
    encoding::Utf8,
    parsers::{IxdtfParser, TimeZoneParser},
    records::{Annotation, DateRecord, TimeRecord, UtcOffsetRecord, UtcOffsetRecordOrZ},
    ParseError,
};
use jiff::civil::{Date, DateTime, Time};
use writeable::{impl_display_with_writeable, LengthHint, Writeable};

use crate::{BridgeError, BridgeResult, ErrorKind};

mod timezone;

pub(crate) use timezone::{is_region_or_fixed_offset, is_valid_identifier};

/// The largest accepted UTC offset magnitude, in seconds (18 hours).
pub(crate) const MAX_OFFSET_SECONDS: i32 = 18 * 3600;

/// The widest year the civil types can hold.
pub(crate) const MAX_YEAR: i16 = 9999;

/// A UTC offset designator as it appeared in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParsedOffset {
    /// The `Z` designator.
    Z,
    /// A numeric offset in seconds.
    Seconds(i32),
}

impl ParsedOffset {
    pub(crate) fn seconds(self) -> i32 {
        match self {
            Self::Z => 0,
            Self::Seconds(s) => s,
        }
    }
}

/// The checked values of one parsed ISO 8601 string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParsedIso {
    pub(crate) date: Option<Date>,
    pub(crate) time: Option<Time>,
    pub(crate) offset: Option<ParsedOffset>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseVariant {
    DateTime,
    Time,
}

// ==== Grammar ====

/// Parses a full date string such as `2020-01-15`, `-0001-01-01` or
/// `+002020-01-15`.
pub(crate) fn parse_date(source: &str) -> BridgeResult<Date> {
    let parsed = parse_iso(source, ParseVariant::DateTime)?;
    if parsed.time.is_some() {
        return Err(BridgeError::parse().with_message("a local date must not carry a time."));
    }
    required_date(parsed)
}

/// Parses a full time string such as `10:15` or `10:15:30.5`.
pub(crate) fn parse_time(source: &str) -> BridgeResult<Time> {
    if source.starts_with(['T', 't']) {
        return Err(BridgeError::parse()
            .with_message("a local time must not start with the time designator."));
    }
    let parsed = parse_iso(source, ParseVariant::Time)?;
    if parsed.offset.is_some() {
        return Err(BridgeError::parse().with_message("a local time must not carry a UTC offset."));
    }
    required_time(parsed)
}

/// Parses a local date-time string. A trailing `Z` or numeric UTC offset is
/// accepted and discarded.
pub(crate) fn parse_date_time(source: &str) -> BridgeResult<DateTime> {
    let parsed = parse_date_time_record(source)?;
    Ok(DateTime::from_parts(required_date(parsed)?, required_time(parsed)?))
}

/// Parses a date-time string that must carry either `Z` or a numeric
/// offset.
pub(crate) fn parse_offset_date_time(source: &str) -> BridgeResult<(DateTime, ParsedOffset)> {
    let parsed = parse_date_time_record(source)?;
    let date_time = DateTime::from_parts(required_date(parsed)?, required_time(parsed)?);
    let offset = parsed
        .offset
        .ok_or_else(|| BridgeError::parse().with_message("a UTC offset is required."))?;
    Ok((date_time, offset))
}

/// Parses a standalone `Z` or `±HH[:MM[:SS]]` offset string.
pub(crate) fn parse_offset(source: &str) -> BridgeResult<ParsedOffset> {
    if source.eq_ignore_ascii_case("z") {
        return Ok(ParsedOffset::Z);
    }
    let record = TimeZoneParser::from_str(source)
        .parse_offset()
        .map_err(map_parse_error)?;
    offset_seconds(record).map(ParsedOffset::Seconds)
}

/// Parses any date or date-time string, leaving it to the caller to decide
/// which components are required.
pub(crate) fn parse_date_time_record(source: &str) -> BridgeResult<ParsedIso> {
    parse_iso(source, ParseVariant::DateTime)
}

fn required_date(parsed: ParsedIso) -> BridgeResult<Date> {
    parsed
        .date
        .ok_or_else(|| BridgeError::parse().with_message("a date is required."))
}

fn required_time(parsed: ParsedIso) -> BridgeResult<Time> {
    parsed
        .time
        .ok_or_else(|| BridgeError::parse().with_message("a time is required."))
}

fn parse_iso(source: &str, variant: ParseVariant) -> BridgeResult<ParsedIso> {
    fn cast_handler<'a>(
        _: &mut IxdtfParser<'a, Utf8>,
        handler: impl FnMut(Annotation<'a, Utf8>) -> Option<Annotation<'a, Utf8>>,
    ) -> impl FnMut(Annotation<'a, Utf8>) -> Option<Annotation<'a, Utf8>> {
        handler
    }

    let source = match variant {
        ParseVariant::DateTime => widen_signed_year(source),
        ParseVariant::Time => Cow::Borrowed(source),
    };
    let mut has_annotation = false;
    let mut parser = IxdtfParser::from_str(&source);
    let handler = cast_handler(&mut parser, |_: Annotation<Utf8>| {
        has_annotation = true;
        None
    });

    let record = match variant {
        ParseVariant::DateTime => parser.parse_with_annotation_handler(handler),
        ParseVariant::Time => parser.parse_time_with_annotation_handler(handler),
    }
    .map_err(map_parse_error)?;

    if has_annotation || record.tz.is_some() || record.calendar.is_some() {
        return Err(BridgeError::parse().with_message("bracketed annotations are not supported."));
    }

    Ok(ParsedIso {
        date: record.date.map(date_from_record).transpose()?,
        time: record.time.map(time_from_record).transpose()?,
        offset: record
            .offset
            .map(|offset| match offset {
                UtcOffsetRecordOrZ::Z => Ok(ParsedOffset::Z),
                UtcOffsetRecordOrZ::Offset(offset) => offset_seconds(offset).map(ParsedOffset::Seconds),
            })
            .transpose()?,
    })
}

/// Widens a signed year of four or five digits to the six digit extended
/// form `ixdtf` expects, so `-0001-01-01` reads as `-000001-01-01`.
fn widen_signed_year(source: &str) -> Cow<'_, str> {
    let Some(sign @ ('+' | '-')) = source.chars().next() else {
        return Cow::Borrowed(source);
    };
    let digits = source[1..].bytes().take_while(u8::is_ascii_digit).count();
    if !(4..6).contains(&digits) {
        return Cow::Borrowed(source);
    }
    let mut widened = String::with_capacity(source.len() + 6 - digits);
    widened.push(sign);
    for _ in digits..6 {
        widened.push('0');
    }
    widened.push_str(&source[1..]);
    Cow::Owned(widened)
}

/// Narrows `year` to the years the civil types hold, failing with a range
/// error otherwise.
pub(crate) fn checked_year(year: i32) -> BridgeResult<i16> {
    i16::try_from(year)
        .ok()
        .filter(|year| (-MAX_YEAR..=MAX_YEAR).contains(year))
        .ok_or_else(|| {
            BridgeError::range().with_message(format!(
                "year {year} is outside the supported range -9999..=9999."
            ))
        })
}

fn date_from_record(record: DateRecord) -> BridgeResult<Date> {
    let year = checked_year(record.year)?;
    // NOTE: `ixdtf` bounds the month to 1..=12 and the day to 1..=31.
    Date::new(year, record.month as i8, record.day as i8)
        .map_err(|err| BridgeError::from_jiff(ErrorKind::Parse, &err))
}

fn time_from_record(record: TimeRecord) -> BridgeResult<Time> {
    let nanosecond = match record.fraction {
        Some(fraction) => fraction.to_nanoseconds().ok_or_else(|| {
            BridgeError::parse().with_message("fractional seconds are limited to nine digits.")
        })?,
        None => 0,
    };
    // NOTE: `ixdtf` bounds every component to two digits and the fraction
    // to nine, so each value fits its target type.
    Time::new(
        record.hour as i8,
        record.minute as i8,
        record.second as i8,
        nanosecond as i32,
    )
    .map_err(|err| BridgeError::from_jiff(ErrorKind::Parse, &err))
}

fn offset_seconds(record: UtcOffsetRecord) -> BridgeResult<i32> {
    if record
        .fraction()
        .is_some_and(|fraction| fraction.to_nanoseconds() != Some(0))
    {
        return Err(BridgeError::parse().with_message("sub-second UTC offsets are not supported."));
    }
    let total = i32::from(record.hour()) * 3600
        + i32::from(record.minute()) * 60
        + i32::from(record.second().unwrap_or(0));
    if total > MAX_OFFSET_SECONDS {
        return Err(BridgeError::parse().with_message("offset exceeds 18 hours."));
    }
    Ok(total * i32::from(record.sign() as i8))
}

pub(crate) fn map_parse_error(err: ParseError) -> BridgeError {
    BridgeError::parse().with_message(format!("{err}"))
}

// ==== Canonical output ====

#[derive(Debug)]
pub struct FormattableDate(pub i32, pub u8, pub u8);

impl From<Date> for FormattableDate {
    fn from(date: Date) -> Self {
        // NOTE: month and day are always positive.
        Self(i32::from(date.year()), date.month() as u8, date.day() as u8)
    }
}

impl Writeable for FormattableDate {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_year(self.0, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.1, sink)?;
        sink.write_char('-')?;
        write_padded_u8(self.2, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        LengthHint::exact(6 + year_length(self.0))
    }
}

/// The canonical time output: `HH:MM`, with `:SS` when the seconds or
/// fraction are non-zero, and the fraction in groups of three digits.
#[derive(Debug)]
pub struct FormattableTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl From<Time> for FormattableTime {
    fn from(time: Time) -> Self {
        // NOTE: every component of a `Time` is non-negative.
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
            nanosecond: time.subsec_nanosecond() as u32,
        }
    }
}

impl FormattableTime {
    fn fraction_digits(&self) -> usize {
        match self.nanosecond {
            0 => 0,
            n if n % 1_000_000 == 0 => 3,
            n if n % 1_000 == 0 => 6,
            _ => 9,
        }
    }
}

impl Writeable for FormattableTime {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        write_padded_u8(self.hour, sink)?;
        sink.write_char(':')?;
        write_padded_u8(self.minute, sink)?;
        if self.second == 0 && self.nanosecond == 0 {
            return Ok(());
        }
        sink.write_char(':')?;
        write_padded_u8(self.second, sink)?;
        let precision = self.fraction_digits();
        if precision == 0 {
            return Ok(());
        }
        sink.write_char('.')?;
        write_nanosecond(self.nanosecond, precision, sink)
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.second == 0 && self.nanosecond == 0 {
            return LengthHint::exact(5);
        }
        match self.fraction_digits() {
            0 => LengthHint::exact(8),
            d => LengthHint::exact(9 + d),
        }
    }
}

/// A `Z` or `±HH:MM[:SS]` offset.
#[derive(Debug)]
pub struct FormattableOffset {
    pub seconds: i32,
}

impl Writeable for FormattableOffset {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if self.seconds == 0 {
            return sink.write_char('Z');
        }
        let sign = if self.seconds < 0 { '-' } else { '+' };
        sink.write_char(sign)?;
        let total = self.seconds.unsigned_abs();
        // NOTE: offsets are bounded by 18 hours.
        write_padded_u8((total / 3600) as u8, sink)?;
        sink.write_char(':')?;
        write_padded_u8(((total / 60) % 60) as u8, sink)?;
        if total % 60 != 0 {
            sink.write_char(':')?;
            write_padded_u8((total % 60) as u8, sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        if self.seconds == 0 {
            LengthHint::exact(1)
        } else if self.seconds % 60 == 0 {
            LengthHint::exact(6)
        } else {
            LengthHint::exact(9)
        }
    }
}

#[derive(Debug, Default)]
pub struct FormattableIso {
    pub date: Option<FormattableDate>,
    pub time: Option<FormattableTime>,
    pub offset: Option<FormattableOffset>,
}

impl Writeable for FormattableIso {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        if let Some(date) = &self.date {
            date.write_to(sink)?;
        }
        if let Some(time) = &self.time {
            if self.date.is_some() {
                sink.write_char('T')?;
            }
            time.write_to(sink)?;
        }
        if let Some(offset) = &self.offset {
            offset.write_to(sink)?;
        }
        Ok(())
    }

    fn writeable_length_hint(&self) -> LengthHint {
        let date_length = self
            .date
            .as_ref()
            .map(|d| d.writeable_length_hint())
            .unwrap_or(LengthHint::exact(0));
        let time_length = self
            .time
            .as_ref()
            .map(|t| t.writeable_length_hint() + self.date.is_some() as usize)
            .unwrap_or(LengthHint::exact(0));
        let offset_length = self
            .offset
            .as_ref()
            .map(|o| o.writeable_length_hint())
            .unwrap_or(LengthHint::exact(0));
        date_length + time_length + offset_length
    }
}

impl_display_with_writeable!(FormattableIso);
impl_display_with_writeable!(FormattableDate);
impl_display_with_writeable!(FormattableTime);
impl_display_with_writeable!(FormattableOffset);

pub(crate) fn write_padded_u8<W: core::fmt::Write + ?Sized>(
    num: u8,
    sink: &mut W,
) -> core::fmt::Result {
    if num < 10 {
        sink.write_char('0')?;
    }
    num.write_to(sink)
}

/// Writes the leading `precision` digits of a nine digit nanosecond value.
pub(crate) fn write_nanosecond<W: core::fmt::Write + ?Sized>(
    nanoseconds: u32,
    precision: usize,
    sink: &mut W,
) -> core::fmt::Result {
    let digits = u32_to_digits(nanoseconds);
    for digit in digits.iter().take(precision.min(9)) {
        digit.write_to(sink)?;
    }
    Ok(())
}

fn u32_to_digits(mut value: u32) -> [u8; 9] {
    let mut output = [0; 9];
    let mut i = 9;
    while i != 0 {
        output[i - 1] = (value % 10) as u8;
        value /= 10;
        i -= 1;
    }
    output
}

/// Writes a year padded to four digits, with a `-` for negative years and a
/// `+` only for years past 9999.
pub(crate) fn write_year<W: core::fmt::Write + ?Sized>(year: i32, sink: &mut W) -> core::fmt::Result {
    if year < 0 {
        sink.write_char('-')?;
    } else if year > 9999 {
        sink.write_char('+')?;
    }
    write_zero_padded(year.unsigned_abs(), 4, sink)
}

fn year_length(year: i32) -> usize {
    let digits = year
        .unsigned_abs()
        .checked_ilog10()
        .map_or(1, |log| log as usize + 1)
        .max(4);
    digits + usize::from(!(0..=9999).contains(&year))
}

/// Writes `value` left padded with zeros to at least `width` digits.
pub(crate) fn write_zero_padded<W: core::fmt::Write + ?Sized>(
    value: u32,
    width: usize,
    sink: &mut W,
) -> core::fmt::Result {
    let mut length = 1;
    let mut rest = value / 10;
    while rest != 0 {
        length += 1;
        rest /= 10;
    }
    for _ in length..width {
        sink.write_char('0')?;
    }
    value.write_to(sink)
}
