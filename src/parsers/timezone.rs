use ixdtf::{parsers::TimeZoneParser, records::TimeZoneRecord};

/// Prefixes that may precede a numeric offset in a zone identifier.
const OFFSET_PREFIXES: [&str; 3] = ["UTC", "GMT", "UT"];

/// Returns whether `source` is a syntactically valid zone identifier: an
/// IANA style name, or a numeric offset that may follow a `UTC`, `GMT` or
/// `UT` prefix.
///
/// This is a syntax check only; it does not consult any zone database.
#[inline]
pub(crate) fn is_valid_identifier(source: &str) -> bool {
    let prefixed_offset = OFFSET_PREFIXES.iter().find_map(|prefix| {
        source
            .strip_prefix(prefix)
            .filter(|rest| rest.starts_with(['+', '-']))
    });
    match prefixed_offset {
        Some(offset) => TimeZoneParser::from_str(offset).parse_offset().is_ok(),
        None => TimeZoneParser::from_str(source).parse_identifier().is_ok(),
    }
}

/// Returns whether `source` names a region (`Area/Location`), is `UTC`, or
/// is a bare numeric offset such as `+02:00`.
///
/// Single component legacy aliases such as `Cuba` or `EST5EDT` fail this
/// check.
pub(crate) fn is_region_or_fixed_offset(source: &str) -> bool {
    if source == "UTC" {
        return true;
    }
    match TimeZoneParser::from_str(source).parse_identifier() {
        Ok(TimeZoneRecord::Name(name)) => name.contains(&b'/'),
        Ok(_) => true,
        Err(_) => false,
    }
}
