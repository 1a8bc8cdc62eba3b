//! This module implements `Formatter`, the caller owned reference used to
//! parse and format civil values with a non-default grammar.
//!
//! A `Formatter` is either one of the predefined ISO 8601 formatters or a
//! compiled `strftime`-like pattern (see the directive table in
//! [`Formatter::pattern`]).
//!
//! ```rust
//! use temporal_bridge::{format::Formatter, PlainDate};
//!
//! let formatter = Formatter::pattern("%d/%m/%Y").unwrap();
//! let date = formatter.parse_date("15/01/2020").unwrap();
//! assert_eq!(date, PlainDate::try_new(2020, 1, 15).unwrap());
//! assert_eq!(formatter.format_date(&date).unwrap(), "15/01/2020");
//! ```

use alloc::string::String;
use core::{fmt, str::FromStr};

use jiff::{
    civil::{Date, DateTime, Time},
    fmt::strtime::{self, BrokenDownTime},
    tz::Offset,
};
use writeable::Writeable;

use crate::{
    parsers::{
        self, write_nanosecond, write_padded_u8, write_year, FormattableDate, FormattableOffset,
        ParsedIso,
    },
    BridgeError, BridgeResult, ErrorKind, OffsetDateTime, PlainDate, PlainDateTime, PlainTime,
    UtcOffset,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormatterKind {
    IsoLocalDate,
    IsoLocalTime,
    IsoLocalDateTime,
    IsoOffsetDateTime,
    BasicIsoDate,
    Pattern(String),
}

/// A reusable parser and printer of civil values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
    kind: FormatterKind,
}

impl Formatter {
    /// `YYYY-MM-DD`. Parsing also takes a signed year of four to six digits.
    pub const ISO_LOCAL_DATE: Self = Self::new(FormatterKind::IsoLocalDate);
    /// `HH:MM[:SS[.fraction]]`. Formatting always writes the seconds.
    pub const ISO_LOCAL_TIME: Self = Self::new(FormatterKind::IsoLocalTime);
    /// An ISO local date and time joined by `T`. No offset is accepted.
    pub const ISO_LOCAL_DATE_TIME: Self = Self::new(FormatterKind::IsoLocalDateTime);
    /// An ISO local date-time followed by `Z` or `±HH:MM[:SS]`.
    pub const ISO_OFFSET_DATE_TIME: Self = Self::new(FormatterKind::IsoOffsetDateTime);
    /// `YYYYMMDD` with an optional `Z` or `±HHMM` offset.
    pub const BASIC_ISO_DATE: Self = Self::new(FormatterKind::BasicIsoDate);

    const fn new(kind: FormatterKind) -> Self {
        Self { kind }
    }

    /// Compiles a `strftime`-like pattern, interpreted by
    /// [`jiff::fmt::strtime`].
    ///
    /// | Directive | Meaning |
    /// |---|---|
    /// | `%Y`, `%y` | Year, and two digit year within 1969-2068. |
    /// | `%m`, `%d`, `%e`, `%j` | Month, day, space padded day, day of year. |
    /// | `%B`, `%b`, `%A`, `%a` | English month and weekday names. |
    /// | `%H`, `%I`, `%p` | Hour, 12 hour clock hour, `AM`/`PM`. |
    /// | `%M`, `%S`, `%f` | Minute, second, fractional seconds. |
    /// | `%z`, `%:z` | UTC offset as `±HHMM` or `±HH:MM`. |
    /// | `%F`, `%T`, `%%` | `%Y-%m-%d`, `%H:%M:%S`, and a literal `%`. |
    ///
    /// Any other character is matched literally. A directive `jiff` does
    /// not know fails with [`ErrorKind::Parse`][crate::ErrorKind::Parse].
    pub fn pattern(pattern: &str) -> BridgeResult<Self> {
        let mut reference = BrokenDownTime::from(jiff::civil::date(1970, 1, 1).at(0, 0, 0, 0));
        reference.set_offset(Some(Offset::UTC));
        strtime::format(pattern, reference)
            .map_err(|err| BridgeError::from_jiff(ErrorKind::Parse, &err))?;
        Ok(Self::new(FormatterKind::Pattern(pattern.into())))
    }

    /// Returns the predefined formatter with the given name, for example
    /// `ISO_LOCAL_DATE`.
    pub fn predefined(name: &str) -> Option<Self> {
        let kind = match name {
            "ISO_LOCAL_DATE" => FormatterKind::IsoLocalDate,
            "ISO_LOCAL_TIME" => FormatterKind::IsoLocalTime,
            "ISO_LOCAL_DATE_TIME" => FormatterKind::IsoLocalDateTime,
            "ISO_OFFSET_DATE_TIME" => FormatterKind::IsoOffsetDateTime,
            "BASIC_ISO_DATE" => FormatterKind::BasicIsoDate,
            _ => return None,
        };
        Some(Self::new(kind))
    }

    /// Returns the pattern source, or `None` for a predefined formatter.
    pub fn pattern_str(&self) -> Option<&str> {
        match &self.kind {
            FormatterKind::Pattern(pattern) => Some(pattern),
            _ => None,
        }
    }

    fn name(&self) -> &str {
        match &self.kind {
            FormatterKind::IsoLocalDate => "ISO_LOCAL_DATE",
            FormatterKind::IsoLocalTime => "ISO_LOCAL_TIME",
            FormatterKind::IsoLocalDateTime => "ISO_LOCAL_DATE_TIME",
            FormatterKind::IsoOffsetDateTime => "ISO_OFFSET_DATE_TIME",
            FormatterKind::BasicIsoDate => "BASIC_ISO_DATE",
            FormatterKind::Pattern(pattern) => pattern,
        }
    }

    // ==== Parsing ====

    fn parse(&self, text: &str) -> BridgeResult<Parsed> {
        let parsed = match &self.kind {
            FormatterKind::IsoLocalDate => ParsedIso {
                date: Some(parsers::parse_date(text)?),
                ..ParsedIso::default()
            },
            FormatterKind::IsoLocalTime => ParsedIso {
                time: Some(parsers::parse_time(text)?),
                ..ParsedIso::default()
            },
            FormatterKind::IsoLocalDateTime => {
                let parsed = parsers::parse_date_time_record(text)?;
                if parsed.time.is_none() || parsed.offset.is_some() {
                    return Err(BridgeError::parse()
                        .with_message("expected a local date-time without an offset."));
                }
                parsed
            }
            FormatterKind::IsoOffsetDateTime => {
                let (date_time, offset) = parsers::parse_offset_date_time(text)?;
                ParsedIso {
                    date: Some(date_time.date()),
                    time: Some(date_time.time()),
                    offset: Some(offset),
                }
            }
            FormatterKind::BasicIsoDate => parse_basic_iso_date(text)?,
            FormatterKind::Pattern(pattern) => {
                return strtime::parse(pattern, text)
                    .map(Parsed::Pattern)
                    .map_err(|err| BridgeError::from_jiff(ErrorKind::Parse, &err));
            }
        };
        Ok(Parsed::Iso(parsed))
    }

    /// Parses `text` into a date.
    ///
    /// Date-time formatters may be used as long as the text determines a
    /// full date; the time of day is then validated and discarded.
    pub fn parse_date(&self, text: &str) -> BridgeResult<PlainDate> {
        self.parse(text)?.date().map(PlainDate::new_unchecked)
    }

    /// Parses `text` into a time of day.
    pub fn parse_time(&self, text: &str) -> BridgeResult<PlainTime> {
        self.parse(text)?.time().map(PlainTime::new_unchecked)
    }

    /// Parses `text` into a local date-time.
    pub fn parse_date_time(&self, text: &str) -> BridgeResult<PlainDateTime> {
        let parsed = self.parse(text)?;
        let date_time = DateTime::from_parts(parsed.date()?, parsed.time()?);
        Ok(PlainDateTime::new_unchecked(date_time))
    }

    /// Parses `text` into a date-time with a UTC offset.
    pub fn parse_offset_date_time(&self, text: &str) -> BridgeResult<OffsetDateTime> {
        let parsed = self.parse(text)?;
        let date_time = DateTime::from_parts(parsed.date()?, parsed.time()?);
        let offset = UtcOffset::from_seconds(parsed.offset()?)
            .map_err(|_| BridgeError::parse().with_message("offset exceeds 18 hours."))?;
        Ok(PlainDateTime::new_unchecked(date_time).with_offset(offset))
    }

    // ==== Formatting ====

    fn format(&self, input: &FormatInput) -> BridgeResult<String> {
        let mut out = String::new();
        match &self.kind {
            FormatterKind::Pattern(pattern) => return input.format_pattern(pattern),
            FormatterKind::IsoLocalDate => write_iso_date(input.date()?, &mut out),
            FormatterKind::IsoLocalTime => write_iso_time(input.time()?, &mut out),
            FormatterKind::IsoLocalDateTime => {
                let (date, time) = (input.date()?, input.time()?);
                write_iso_date(date, &mut out)
                    .and_then(|()| fmt::Write::write_char(&mut out, 'T'))
                    .and_then(|()| write_iso_time(time, &mut out))
            }
            FormatterKind::IsoOffsetDateTime => {
                let (date, time, offset) = (input.date()?, input.time()?, input.offset()?);
                write_iso_date(date, &mut out)
                    .and_then(|()| fmt::Write::write_char(&mut out, 'T'))
                    .and_then(|()| write_iso_time(time, &mut out))
                    .and_then(|()| FormattableOffset { seconds: offset }.write_to(&mut out))
            }
            FormatterKind::BasicIsoDate => {
                let date = input.date()?;
                if date.year() < 0 {
                    return Err(BridgeError::range()
                        .with_message("BASIC_ISO_DATE only supports years 0000-9999."));
                }
                // NOTE: month and day are always positive.
                write_year(i32::from(date.year()), &mut out)
                    .and_then(|()| write_padded_u8(date.month() as u8, &mut out))
                    .and_then(|()| write_padded_u8(date.day() as u8, &mut out))
                    .and_then(|()| match input.offset {
                        Some(offset) => write_basic_offset(offset, &mut out),
                        None => Ok(()),
                    })
            }
        }
        .map_err(|_| BridgeError::general("failed to write a formatted value"))?;
        Ok(out)
    }

    /// Formats a date. Fails with
    /// [`ErrorKind::UnsupportedField`][crate::ErrorKind::UnsupportedField]
    /// when the formatter needs a time or an offset.
    pub fn format_date(&self, date: &PlainDate) -> BridgeResult<String> {
        self.format(&FormatInput {
            date: Some(date.civil),
            ..FormatInput::default()
        })
    }

    /// Formats a time of day.
    pub fn format_time(&self, time: &PlainTime) -> BridgeResult<String> {
        self.format(&FormatInput {
            time: Some(time.civil),
            ..FormatInput::default()
        })
    }

    /// Formats a local date-time.
    pub fn format_date_time(&self, date_time: &PlainDateTime) -> BridgeResult<String> {
        self.format(&FormatInput {
            date: Some(date_time.civil.date()),
            time: Some(date_time.civil.time()),
            offset: None,
        })
    }

    /// Formats a date-time with its UTC offset.
    pub fn format_offset_date_time(&self, value: &OffsetDateTime) -> BridgeResult<String> {
        let civil = value.date_time().civil;
        self.format(&FormatInput {
            date: Some(civil.date()),
            time: Some(civil.time()),
            offset: Some(value.offset().seconds()),
        })
    }
}

impl fmt::Display for Formatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Formatter {
    type Err = BridgeError;

    /// Accepts a predefined formatter name or a pattern.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match Self::predefined(s) {
            Some(formatter) => Ok(formatter),
            None => Self::pattern(s),
        }
    }
}

/// The components read by one parse, before the caller picks the ones it
/// needs.
#[derive(Debug)]
enum Parsed {
    Iso(ParsedIso),
    Pattern(BrokenDownTime),
}

impl Parsed {
    fn date(&self) -> BridgeResult<Date> {
        match self {
            Self::Iso(parsed) => parsed.date.ok_or_else(|| missing("date")),
            Self::Pattern(parsed) => parsed
                .to_date()
                .map_err(|err| BridgeError::from_jiff(ErrorKind::Parse, &err)),
        }
    }

    fn time(&self) -> BridgeResult<Time> {
        match self {
            Self::Iso(parsed) => parsed.time.ok_or_else(|| missing("time")),
            // A time needs at least an hour.
            Self::Pattern(parsed) if parsed.hour().is_none() => Err(missing("time")),
            Self::Pattern(parsed) => parsed
                .to_time()
                .map_err(|err| BridgeError::from_jiff(ErrorKind::Parse, &err)),
        }
    }

    fn offset(&self) -> BridgeResult<i32> {
        match self {
            Self::Iso(parsed) => parsed.offset.map(|offset| offset.seconds()),
            Self::Pattern(parsed) => parsed.offset().map(|offset| offset.seconds()),
        }
        .ok_or_else(|| missing("UTC offset"))
    }
}

fn missing(component: &str) -> BridgeError {
    BridgeError::parse().with_message(alloc::format!("the text does not determine a {component}."))
}

/// The value handed to a formatter, with the components it carries.
#[derive(Debug, Default)]
struct FormatInput {
    date: Option<Date>,
    time: Option<Time>,
    offset: Option<i32>,
}

impl FormatInput {
    fn date(&self) -> BridgeResult<Date> {
        self.date.ok_or_else(|| unsupported("date"))
    }

    fn time(&self) -> BridgeResult<Time> {
        self.time.ok_or_else(|| unsupported("time"))
    }

    fn offset(&self) -> BridgeResult<i32> {
        self.offset.ok_or_else(|| unsupported("UTC offset"))
    }

    fn format_pattern(&self, pattern: &str) -> BridgeResult<String> {
        let mut broken_down = match (self.date, self.time) {
            (Some(date), Some(time)) => BrokenDownTime::from(DateTime::from_parts(date, time)),
            (Some(date), None) => BrokenDownTime::from(date),
            (None, Some(time)) => BrokenDownTime::from(time),
            (None, None) => return Err(unsupported("date or time")),
        };
        if let Some(seconds) = self.offset {
            let offset = Offset::from_seconds(seconds)
                .map_err(|err| BridgeError::from_jiff(ErrorKind::Range, &err))?;
            broken_down.set_offset(Some(offset));
        }
        strtime::format(pattern, broken_down)
            .map_err(|err| BridgeError::from_jiff(ErrorKind::UnsupportedField, &err))
    }
}

fn unsupported(component: &str) -> BridgeError {
    BridgeError::unsupported_field()
        .with_message(alloc::format!("the formatter requires a {component}."))
}

/// `YYYYMMDD`, then nothing, `Z`, or a `±HHMM` offset.
fn parse_basic_iso_date(text: &str) -> BridgeResult<ParsedIso> {
    let bytes = text.as_bytes();
    if bytes.len() < 8 || !bytes[..8].iter().all(u8::is_ascii_digit) {
        return Err(BridgeError::parse().with_message("expected eight digits of YYYYMMDD."));
    }
    let (date, offset) = text.split_at(8);
    let offset = match offset.len() {
        0 => None,
        1 | 5 => Some(parsers::parse_offset(offset)?),
        _ => {
            return Err(BridgeError::parse().with_message("expected `Z` or a `±HHMM` offset."));
        }
    };
    Ok(ParsedIso {
        date: Some(parsers::parse_date(date)?),
        time: None,
        offset,
    })
}

fn write_iso_date(date: Date, out: &mut String) -> fmt::Result {
    FormattableDate::from(date).write_to(out)
}

/// Writes `HH:MM:SS` and the shortest exact fraction.
fn write_iso_time(time: Time, out: &mut String) -> fmt::Result {
    // NOTE: every component of a civil time is non-negative.
    write_padded_u8(time.hour() as u8, out)?;
    out.push(':');
    write_padded_u8(time.minute() as u8, out)?;
    out.push(':');
    write_padded_u8(time.second() as u8, out)?;
    let nanosecond = time.subsec_nanosecond() as u32;
    if nanosecond != 0 {
        let mut precision = 9;
        let mut rest = nanosecond;
        while rest % 10 == 0 {
            rest /= 10;
            precision -= 1;
        }
        out.push('.');
        write_nanosecond(nanosecond, precision, out)?;
    }
    Ok(())
}

fn write_basic_offset(offset: i32, out: &mut String) -> fmt::Result {
    if offset == 0 {
        out.push('Z');
        return Ok(());
    }
    out.push(if offset < 0 { '-' } else { '+' });
    let total = offset.unsigned_abs();
    // NOTE: offsets are bounded by 18 hours.
    write_padded_u8((total / 3600) as u8, out)?;
    write_padded_u8(((total / 60) % 60) as u8, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::string::ToString;

    #[test]
    fn day_month_year_pattern() {
        let formatter = Formatter::pattern("%d/%m/%Y").unwrap();
        let date = formatter.parse_date("15/01/2020").unwrap();
        assert_eq!(date, PlainDate::try_new(2020, 1, 15).unwrap());
        assert_eq!(formatter.format_date(&date).unwrap(), "15/01/2020");
        assert_eq!(formatter.to_string(), "%d/%m/%Y");
        assert_eq!(formatter.pattern_str(), Some("%d/%m/%Y"));

        let err = formatter.parse_date("2020-01-15").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
        let err = formatter.parse_time("15/01/2020").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn underdetermined_patterns() {
        let formatter = Formatter::pattern("%Y-%m").unwrap();
        let err = formatter.parse_date("2020-01").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn predefined_parse() {
        let date = Formatter::ISO_LOCAL_DATE.parse_date("2020-01-15").unwrap();
        assert_eq!(date.to_string(), "2020-01-15");

        let time = Formatter::ISO_LOCAL_TIME.parse_time("10:30:00.5").unwrap();
        assert_eq!(time.millisecond(), 500);

        let dt = Formatter::ISO_LOCAL_DATE_TIME
            .parse_date_time("2020-01-15T10:30")
            .unwrap();
        assert_eq!((dt.day(), dt.hour()), (15, 10));
        // The date of a date-time can be extracted on its own.
        let date = Formatter::ISO_LOCAL_DATE_TIME
            .parse_date("2020-01-15T10:30")
            .unwrap();
        assert_eq!(date.day(), 15);
        assert!(Formatter::ISO_LOCAL_DATE_TIME
            .parse_date_time("2020-01-15T10:30+01:00")
            .is_err());

        let odt = Formatter::ISO_OFFSET_DATE_TIME
            .parse_offset_date_time("2020-01-15T10:30:00+01:00")
            .unwrap();
        assert_eq!(odt.offset().seconds(), 3600);

        let basic = Formatter::BASIC_ISO_DATE.parse_date("20200115").unwrap();
        assert_eq!(basic, PlainDate::try_new(2020, 1, 15).unwrap());
        let parsed = Formatter::BASIC_ISO_DATE.parse("20200115+0130").unwrap();
        assert_eq!(parsed.offset().unwrap(), 5400);
        let parsed = Formatter::BASIC_ISO_DATE.parse("20200115Z").unwrap();
        assert_eq!(parsed.offset().unwrap(), 0);
        assert!(Formatter::BASIC_ISO_DATE.parse_date("2020-01-15").is_err());
        assert!(Formatter::BASIC_ISO_DATE.parse_date("20200115+01:30").is_err());
        assert!(Formatter::BASIC_ISO_DATE.parse_date("20200230").is_err());
        // A date alone never determines a time.
        let err = Formatter::BASIC_ISO_DATE
            .parse_offset_date_time("20200115Z")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn predefined_format() {
        let dt = PlainDateTime::try_new(2020, 1, 15, 10, 30, 0, 0).unwrap();
        assert_eq!(
            Formatter::ISO_LOCAL_DATE_TIME.format_date_time(&dt).unwrap(),
            "2020-01-15T10:30:00"
        );
        let time = PlainTime::try_new(10, 30, 5, 120_000_000).unwrap();
        assert_eq!(Formatter::ISO_LOCAL_TIME.format_time(&time).unwrap(), "10:30:05.12");

        let odt = dt.with_offset(UtcOffset::from_seconds(-5400).unwrap());
        assert_eq!(
            Formatter::ISO_OFFSET_DATE_TIME
                .format_offset_date_time(&odt)
                .unwrap(),
            "2020-01-15T10:30:00-01:30"
        );
        assert_eq!(
            Formatter::BASIC_ISO_DATE.format_offset_date_time(&odt).unwrap(),
            "20200115-0130"
        );
        assert_eq!(
            Formatter::BASIC_ISO_DATE.format_date(&dt.date()).unwrap(),
            "20200115"
        );

        let err = Formatter::ISO_LOCAL_TIME.format_date(&dt.date()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedField);
        let err = Formatter::ISO_OFFSET_DATE_TIME
            .format_date_time(&dt)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedField);

        let bce = PlainDate::try_new(-1, 1, 1).unwrap();
        assert_eq!(Formatter::ISO_LOCAL_DATE.format_date(&bce).unwrap(), "-0001-01-01");
        let err = Formatter::BASIC_ISO_DATE.format_date(&bce).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn pattern_times_and_offsets() {
        let formatter = Formatter::pattern("%Y-%m-%d %H:%M:%S %z").unwrap();
        let odt = formatter
            .parse_offset_date_time("2020-01-15 10:30:05 -0130")
            .unwrap();
        assert_eq!(odt.to_string(), "2020-01-15T10:30:05-01:30");
        assert_eq!(
            formatter.format_offset_date_time(&odt).unwrap(),
            "2020-01-15 10:30:05 -0130"
        );
        let err = formatter
            .format_date_time(&odt.date_time())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedField);

        let clock = Formatter::pattern("%I:%M %p").unwrap();
        let time = clock.parse_time("02:15 PM").unwrap();
        assert_eq!((time.hour(), time.minute()), (14, 15));
        assert_eq!(clock.format_time(&time).unwrap(), "02:15 PM");
        let err = clock.format_date(&PlainDate::MIN).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedField);

        let two_digit = Formatter::pattern("%y%m%d").unwrap();
        assert_eq!(two_digit.parse_date("680101").unwrap().year(), 2068);
        assert_eq!(two_digit.parse_date("690101").unwrap().year(), 1969);
    }

    #[test]
    fn names() {
        for name in [
            "ISO_LOCAL_DATE",
            "ISO_LOCAL_TIME",
            "ISO_LOCAL_DATE_TIME",
            "ISO_OFFSET_DATE_TIME",
            "BASIC_ISO_DATE",
        ] {
            let formatter: Formatter = name.parse().unwrap();
            assert_eq!(formatter.to_string(), name);
            assert_eq!(formatter.pattern_str(), None);
        }
        let formatter: Formatter = "%H:%M".parse().unwrap();
        assert_eq!(formatter.pattern_str(), Some("%H:%M"));
        let err = "%J".parse::<Formatter>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }
}
