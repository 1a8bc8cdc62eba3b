//! The `temporal_bridge` crate re-exposes ISO 8601 date and time parsing,
//! time zone identifier enumeration, temporal field range queries and
//! localized era names to guest runtimes whose calling convention cannot
//! resolve overloaded methods or consume native iterators.
//!
//! ```rust
//! use temporal_bridge::{exports, TemporalField};
//!
//! // Every operation has exactly one external name and one signature.
//! let date = exports::local_date_parse("2020-01-15").unwrap();
//! assert_eq!((date.year(), date.month(), date.day()), (2020, 1, 15));
//!
//! let range = exports::local_date_range(&date, TemporalField::DayOfMonth).unwrap();
//! assert!(range.is_valid_value(31));
//! ```
//!
//! Bulk enumerations are consumed one element at a time through a
//! [`BridgeIterator`]:
//!
//! ```rust
//! # #[cfg(feature = "compiled_data")]
//! # {
//! use temporal_bridge::{BridgeIterator, EnumerationCategory};
//!
//! let mut zones = BridgeIterator::create(EnumerationCategory::AvailableZoneIds).unwrap();
//! let mut count = 0;
//! while zones.has_next() {
//!     let _id = zones.next().unwrap();
//!     count += 1;
//! }
//! assert!(count > 0);
//! assert!(zones.next().is_err());
//! # }
//! ```
//!
//! Guests that can only pass scalars call entry points by name through a
//! [`dispatch::Dispatcher`], which keeps iterators behind integer handles.
#![no_std]
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::redundant_pub_crate,
    clippy::too_many_lines,
    clippy::missing_errors_doc,
    clippy::option_if_let_else,

    // Integer narrowing is checked at each call site.
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
)]

extern crate alloc;
extern crate core;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod logging;

pub mod bridge;
pub mod dispatch;
pub mod era;
pub mod error;
pub mod exports;
pub mod fields;
pub mod format;
pub mod parsers;
pub mod provider;

#[cfg(feature = "sys")]
pub mod sys;

mod builtins;

/// Re-export of `Locale` from `icu_locale`.
pub use icu_locale::Locale;

#[doc(inline)]
pub use error::{BridgeError, ErrorKind};

/// The bridge result type
pub type BridgeResult<T> = Result<T, BridgeError>;

#[doc(inline)]
pub use bridge::{BridgeIterator, EnumerationCategory, IteratorArena, IteratorHandle, IteratorState};
#[doc(inline)]
pub use era::{Era, TextStyle};
#[doc(inline)]
pub use fields::{TemporalField, ValueRange};
#[doc(inline)]
pub use format::Formatter;

pub use crate::builtins::{
    Instant, OffsetDateTime, PlainDate, PlainDateTime, PlainTime, UtcOffset,
};
