//! The civil date and time types behind every entry point.

mod date;
mod datetime;
mod instant;
mod offset;
mod time;

#[doc(inline)]
pub use date::PlainDate;
#[doc(inline)]
pub use datetime::PlainDateTime;
#[doc(inline)]
pub use instant::Instant;
#[doc(inline)]
pub use offset::{OffsetDateTime, UtcOffset};
#[doc(inline)]
pub use time::PlainTime;

/// Narrows a component for `jiff`. Values past `i8::MAX` saturate, and
/// `jiff` then rejects them as out of range.
#[inline]
pub(crate) fn saturating_i8(value: u8) -> i8 {
    i8::try_from(value).unwrap_or(i8::MAX)
}
