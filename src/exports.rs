//! De-overloaded entry points.
//!
//! Each function here is the single external form of one operation and one
//! signature, so a guest runtime that cannot resolve overloads can bind every
//! operation by name. [`crate::dispatch`] exposes the same set through a
//! name keyed table.

use alloc::string::String;

use crate::{
    bridge::{BridgeIterator, EnumerationCategory},
    era::{Era, TextStyle},
    fields::{TemporalField, ValueRange},
    format::Formatter,
    BridgeResult, Instant, Locale, OffsetDateTime, PlainDate, PlainDateTime, PlainTime,
};

// ==== Parsing ====

/// Parses an ISO 8601 date, `YYYY-MM-DD` or a signed year of four to six
/// digits such as `-0001-01-01`. Years outside -9999..=9999 fail with a
/// range error.
pub fn local_date_parse(text: &str) -> BridgeResult<PlainDate> {
    text.parse()
}

/// Parses a date with a caller supplied formatter.
pub fn local_date_parse_with_formatter(text: &str, formatter: &Formatter) -> BridgeResult<PlainDate> {
    formatter.parse_date(text)
}

/// Parses an ISO 8601 time, `HH:MM[:SS[.fraction]]`.
pub fn local_time_parse(text: &str) -> BridgeResult<PlainTime> {
    text.parse()
}

/// Parses a time with a caller supplied formatter.
pub fn local_time_parse_with_formatter(text: &str, formatter: &Formatter) -> BridgeResult<PlainTime> {
    formatter.parse_time(text)
}

/// Parses an ISO 8601 local date-time. A trailing `Z` or numeric offset is
/// accepted and discarded.
pub fn local_date_time_parse(text: &str) -> BridgeResult<PlainDateTime> {
    text.parse()
}

/// Parses a local date-time with a caller supplied formatter.
pub fn local_date_time_parse_with_formatter(
    text: &str,
    formatter: &Formatter,
) -> BridgeResult<PlainDateTime> {
    formatter.parse_date_time(text)
}

/// Parses an ISO 8601 date-time that carries `Z` or a numeric offset.
pub fn offset_date_time_parse(text: &str) -> BridgeResult<OffsetDateTime> {
    text.parse()
}

/// Parses an ISO 8601 date-time with an offset into the instant it denotes.
pub fn instant_parse(text: &str) -> BridgeResult<Instant> {
    text.parse()
}

// ==== Field ranges ====

/// Returns the valid values of `field` for a date.
pub fn local_date_range(value: &PlainDate, field: TemporalField) -> BridgeResult<ValueRange> {
    value.range(field)
}

/// Returns the valid values of `field` for a time.
pub fn local_time_range(value: &PlainTime, field: TemporalField) -> BridgeResult<ValueRange> {
    value.range(field)
}

/// Returns the valid values of `field` for a local date-time.
pub fn local_date_time_range(value: &PlainDateTime, field: TemporalField) -> BridgeResult<ValueRange> {
    value.range(field)
}

/// Returns the valid values of `field` for an offset date-time.
pub fn offset_date_time_range(
    value: &OffsetDateTime,
    field: TemporalField,
) -> BridgeResult<ValueRange> {
    value.range(field)
}

/// Returns the valid values of `field` for an instant.
pub fn instant_range(value: &Instant, field: TemporalField) -> BridgeResult<ValueRange> {
    value.range(field)
}

// ==== Era names ====

/// Returns the localized display name of `era`.
pub fn era_get_display_name(era: Era, style: TextStyle, locale: &Locale) -> BridgeResult<String> {
    era.display_name(style, locale).map(String::from)
}

// ==== Enumerations ====

/// Captures the available time zone identifiers into a new iterator.
pub fn new_available_zone_ids_iterator() -> BridgeResult<BridgeIterator> {
    BridgeIterator::create(EnumerationCategory::AvailableZoneIds)
}

/// Captures the locales with era display data into a new iterator.
pub fn new_available_locales_iterator() -> BridgeResult<BridgeIterator> {
    BridgeIterator::create(EnumerationCategory::AvailableLocales)
}

/// Returns the identifier of the host system's time zone.
#[cfg(feature = "sys")]
pub fn system_zone_id() -> BridgeResult<String> {
    crate::sys::system_zone_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;
    use alloc::{string::ToString, vec::Vec};

    #[test]
    fn parse_entry_points() {
        let date = local_date_parse("2020-01-15").unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2020, 1, 15));

        let dt = local_date_time_parse("2020-01-15T10:30:00+01:00").unwrap();
        assert_eq!((dt.hour(), dt.minute()), (10, 30));

        let time = local_time_parse("23:59:59.999999999").unwrap();
        assert_eq!(time.nanosecond(), 999_999_999);

        let odt = offset_date_time_parse("2020-01-15T10:30:00+01:00").unwrap();
        assert_eq!(odt.offset().seconds(), 3600);

        let instant = instant_parse("1970-01-01T01:00:00+01:00").unwrap();
        assert_eq!(instant.epoch_seconds(), 0);

        for text in ["not-a-date", "2020-02-30", "2020-01-15T25:00"] {
            assert_eq!(local_date_parse(text).unwrap_err().kind(), ErrorKind::Parse);
        }
        let utc = local_date_time_parse("2020-01-15T10:30Z").unwrap();
        assert_eq!(utc.to_string(), "2020-01-15T10:30");
        assert_eq!(
            local_date_parse("+10000-01-01").unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn formatter_entry_points() {
        let formatter = Formatter::pattern("%d/%m/%Y").unwrap();
        let date = local_date_parse_with_formatter("15/01/2020", &formatter).unwrap();
        assert_eq!(date.to_string(), "2020-01-15");

        let formatter = Formatter::pattern("%I:%M %p").unwrap();
        let time = local_time_parse_with_formatter("07:15 PM", &formatter).unwrap();
        assert_eq!(time.to_string(), "19:15");

        let dt = local_date_time_parse_with_formatter(
            "20200115 103000",
            &Formatter::pattern("%Y%m%d %H%M%S").unwrap(),
        )
        .unwrap();
        assert_eq!(dt.to_string(), "2020-01-15T10:30");
    }

    #[test]
    fn range_entry_points() {
        let date = local_date_parse("2020-02-10").unwrap();
        let range = local_date_range(&date, TemporalField::DayOfMonth).unwrap();
        assert_eq!(range.to_string(), "1 - 29");

        let time = local_time_parse("10:00").unwrap();
        assert_eq!(
            local_time_range(&time, TemporalField::Year).unwrap_err().kind(),
            ErrorKind::UnsupportedField
        );

        let instant = instant_parse("2020-01-15T10:30:00Z").unwrap();
        assert_eq!(
            instant_range(&instant, TemporalField::DayOfMonth)
                .unwrap_err()
                .kind(),
            ErrorKind::UnsupportedField
        );
        assert!(instant_range(&instant, TemporalField::NanoOfSecond).is_ok());

        let odt = offset_date_time_parse("2020-01-15T10:30:00-05:00").unwrap();
        assert!(offset_date_time_range(&odt, TemporalField::OffsetSeconds)
            .unwrap()
            .is_valid_value(-18_000));
        assert!(local_date_time_range(&odt.date_time(), TemporalField::OffsetSeconds).is_err());
    }

    #[test]
    fn era_names() {
        assert_eq!(
            era_get_display_name(Era::Ce, TextStyle::Full, &"en".parse().unwrap()).unwrap(),
            "Anno Domini"
        );
        assert_eq!(
            era_get_display_name(Era::Ce, TextStyle::Full, &"tlh".parse().unwrap())
                .unwrap_err()
                .kind(),
            ErrorKind::UnsupportedLocale
        );
    }

    #[cfg(feature = "compiled_data")]
    #[test]
    fn enumeration_entry_points() {
        let mut zones = new_available_zone_ids_iterator().unwrap();
        assert!(zones.has_next());
        let first = zones.next().unwrap();
        assert!(!first.is_empty());

        let mut locales = new_available_locales_iterator().unwrap();
        let mut all = Vec::new();
        while locales.has_next() {
            all.push(locales.next().unwrap());
        }
        assert!(all.iter().any(|locale| locale == "en"));
    }
}
