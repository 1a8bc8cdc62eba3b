//! A name keyed table of every entry point in [`crate::exports`].
//!
//! Guests that bind by string name call [`EntryPoint::from_name`] and then
//! [`EntryPoint::invoke`] with dynamically typed [`Value`] arguments.
//! Guests that can only hold scalars go through a [`Dispatcher`], which
//! keeps created iterators in an arena and hands out [`IteratorHandle`]s.
//!
//! ```rust
//! use temporal_bridge::dispatch::{EntryPoint, Value};
//!
//! let entry = EntryPoint::from_name("localDateParse").unwrap();
//! let Value::Date(date) = entry.invoke(&[Value::from("2020-01-15")]).unwrap() else {
//!     unreachable!()
//! };
//! assert_eq!(date.day(), 15);
//! ```

use alloc::{format, string::String};
use core::{fmt, str::FromStr};

use crate::{
    bridge::{BridgeIterator, EnumerationCategory, IteratorArena, IteratorHandle},
    era::{Era, TextStyle},
    exports,
    fields::{TemporalField, ValueRange},
    format::Formatter,
    BridgeError, BridgeResult, Instant, Locale, OffsetDateTime, PlainDate, PlainDateTime,
    PlainTime,
};

// ==== Value ====

/// A dynamically typed argument or return value.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum Value {
    Text(String),
    Date(PlainDate),
    Time(PlainTime),
    DateTime(PlainDateTime),
    OffsetDateTime(OffsetDateTime),
    Instant(Instant),
    Formatter(Formatter),
    Field(TemporalField),
    Era(Era),
    TextStyle(TextStyle),
    Locale(Locale),
    Range(ValueRange),
    Iterator(BridgeIterator),
    /// An iterator owned by a [`Dispatcher`].
    Handle(IteratorHandle),
    Bool(bool),
    /// The result of an operation that returns nothing.
    Unit,
}

impl Value {
    /// Returns the name of this value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Date(_) => "PlainDate",
            Self::Time(_) => "PlainTime",
            Self::DateTime(_) => "PlainDateTime",
            Self::OffsetDateTime(_) => "OffsetDateTime",
            Self::Instant(_) => "Instant",
            Self::Formatter(_) => "Formatter",
            Self::Field(_) => "TemporalField",
            Self::Era(_) => "Era",
            Self::TextStyle(_) => "TextStyle",
            Self::Locale(_) => "Locale",
            Self::Range(_) => "ValueRange",
            Self::Iterator(_) => "BridgeIterator",
            Self::Handle(_) => "IteratorHandle",
            Self::Bool(_) => "bool",
            Self::Unit => "unit",
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(String::from(value))
    }
}

/// Types that can be borrowed out of a [`Value`].
trait FromValue {
    const TYPE_NAME: &'static str;

    fn from_value(value: &Value) -> Option<&Self>;
}

macro_rules! value_conversions {
    ($($variant:ident($ty:ty) => $name:literal),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl FromValue for $ty {
                const TYPE_NAME: &'static str = $name;

                fn from_value(value: &Value) -> Option<&Self> {
                    match value {
                        Value::$variant(inner) => Some(inner),
                        _ => None,
                    }
                }
            }
        )+
    };
}

value_conversions! {
    Text(String) => "text",
    Date(PlainDate) => "PlainDate",
    Time(PlainTime) => "PlainTime",
    DateTime(PlainDateTime) => "PlainDateTime",
    OffsetDateTime(OffsetDateTime) => "OffsetDateTime",
    Instant(Instant) => "Instant",
    Formatter(Formatter) => "Formatter",
    Field(TemporalField) => "TemporalField",
    Era(Era) => "Era",
    TextStyle(TextStyle) => "TextStyle",
    Locale(Locale) => "Locale",
    Range(ValueRange) => "ValueRange",
    Iterator(BridgeIterator) => "BridgeIterator",
    Handle(IteratorHandle) => "IteratorHandle",
    Bool(bool) => "bool",
}

// ==== EntryPoint ====

/// Every external entry point, each with exactly one name and one
/// signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    LocalDateParse,
    LocalDateParseWithFormatter,
    LocalTimeParse,
    LocalTimeParseWithFormatter,
    LocalDateTimeParse,
    LocalDateTimeParseWithFormatter,
    OffsetDateTimeParse,
    InstantParse,
    LocalDateRange,
    LocalTimeRange,
    LocalDateTimeRange,
    OffsetDateTimeRange,
    InstantRange,
    EraGetDisplayName,
    NewAvailableZoneIdsIterator,
    NewAvailableLocalesIterator,
    /// Takes an [`IteratorHandle`]. Only a [`Dispatcher`] holds live
    /// handles.
    IteratorHasNext,
    IteratorNext,
    IteratorRelease,
    /// Only available with the `sys` feature; otherwise invoking it fails
    /// with an enumeration unavailable error.
    SystemZoneId,
}

impl EntryPoint {
    /// All entry points in declaration order.
    pub const ALL: [Self; 20] = [
        Self::LocalDateParse,
        Self::LocalDateParseWithFormatter,
        Self::LocalTimeParse,
        Self::LocalTimeParseWithFormatter,
        Self::LocalDateTimeParse,
        Self::LocalDateTimeParseWithFormatter,
        Self::OffsetDateTimeParse,
        Self::InstantParse,
        Self::LocalDateRange,
        Self::LocalTimeRange,
        Self::LocalDateTimeRange,
        Self::OffsetDateTimeRange,
        Self::InstantRange,
        Self::EraGetDisplayName,
        Self::NewAvailableZoneIdsIterator,
        Self::NewAvailableLocalesIterator,
        Self::IteratorHasNext,
        Self::IteratorNext,
        Self::IteratorRelease,
        Self::SystemZoneId,
    ];

    /// Returns the stable external name of this entry point.
    pub const fn name(self) -> &'static str {
        match self {
            Self::LocalDateParse => "localDateParse",
            Self::LocalDateParseWithFormatter => "localDateParseWithFormatter",
            Self::LocalTimeParse => "localTimeParse",
            Self::LocalTimeParseWithFormatter => "localTimeParseWithFormatter",
            Self::LocalDateTimeParse => "localDateTimeParse",
            Self::LocalDateTimeParseWithFormatter => "localDateTimeParseWithFormatter",
            Self::OffsetDateTimeParse => "offsetDateTimeParse",
            Self::InstantParse => "instantParse",
            Self::LocalDateRange => "localDateRange",
            Self::LocalTimeRange => "localTimeRange",
            Self::LocalDateTimeRange => "localDateTimeRange",
            Self::OffsetDateTimeRange => "offsetDateTimeRange",
            Self::InstantRange => "instantRange",
            Self::EraGetDisplayName => "eraGetDisplayName",
            Self::NewAvailableZoneIdsIterator => "newAvailableZoneIdsIterator",
            Self::NewAvailableLocalesIterator => "newAvailableLocalesIterator",
            Self::IteratorHasNext => "iteratorHasNext",
            Self::IteratorNext => "iteratorNext",
            Self::IteratorRelease => "iteratorRelease",
            Self::SystemZoneId => "systemZoneId",
        }
    }

    /// Looks an entry point up by its external name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|entry| entry.name() == name)
    }

    /// Returns the number of arguments this entry point takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::NewAvailableZoneIdsIterator
            | Self::NewAvailableLocalesIterator
            | Self::SystemZoneId => 0,
            Self::LocalDateParse
            | Self::LocalTimeParse
            | Self::LocalDateTimeParse
            | Self::OffsetDateTimeParse
            | Self::InstantParse
            | Self::IteratorHasNext
            | Self::IteratorNext
            | Self::IteratorRelease => 1,
            Self::LocalDateParseWithFormatter
            | Self::LocalTimeParseWithFormatter
            | Self::LocalDateTimeParseWithFormatter
            | Self::LocalDateRange
            | Self::LocalTimeRange
            | Self::LocalDateTimeRange
            | Self::OffsetDateTimeRange
            | Self::InstantRange => 2,
            Self::EraGetDisplayName => 3,
        }
    }

    fn check_arity(self, args: &[Value]) -> BridgeResult<()> {
        if args.len() != self.arity() {
            return Err(BridgeError::r#type().with_message(format!(
                "{} expects {} argument(s), got {}.",
                self.name(),
                self.arity(),
                args.len()
            )));
        }
        Ok(())
    }

    /// Calls this entry point without an arena.
    ///
    /// The iterator constructors return a [`Value::Iterator`] owned by the
    /// caller, and the handle based iterator entry points fail with
    /// [`ErrorKind::InvalidHandle`][crate::ErrorKind::InvalidHandle] since
    /// no handle is live here.
    ///
    /// Fails with [`ErrorKind::Type`][crate::ErrorKind::Type] if `args` has
    /// the wrong length or an argument has the wrong type. Any other error
    /// comes from the operation itself.
    pub fn invoke(self, args: &[Value]) -> BridgeResult<Value> {
        self.check_arity(args)?;
        let value = match self {
            Self::LocalDateParse => exports::local_date_parse(self.arg::<String>(args, 0)?)?.into(),
            Self::LocalDateParseWithFormatter => exports::local_date_parse_with_formatter(
                self.arg::<String>(args, 0)?,
                self.arg(args, 1)?,
            )?
            .into(),
            Self::LocalTimeParse => exports::local_time_parse(self.arg::<String>(args, 0)?)?.into(),
            Self::LocalTimeParseWithFormatter => exports::local_time_parse_with_formatter(
                self.arg::<String>(args, 0)?,
                self.arg(args, 1)?,
            )?
            .into(),
            Self::LocalDateTimeParse => {
                exports::local_date_time_parse(self.arg::<String>(args, 0)?)?.into()
            }
            Self::LocalDateTimeParseWithFormatter => {
                exports::local_date_time_parse_with_formatter(
                    self.arg::<String>(args, 0)?,
                    self.arg(args, 1)?,
                )?
                .into()
            }
            Self::OffsetDateTimeParse => {
                exports::offset_date_time_parse(self.arg::<String>(args, 0)?)?.into()
            }
            Self::InstantParse => exports::instant_parse(self.arg::<String>(args, 0)?)?.into(),
            Self::LocalDateRange => {
                exports::local_date_range(self.arg(args, 0)?, *self.arg(args, 1)?)?.into()
            }
            Self::LocalTimeRange => {
                exports::local_time_range(self.arg(args, 0)?, *self.arg(args, 1)?)?.into()
            }
            Self::LocalDateTimeRange => {
                exports::local_date_time_range(self.arg(args, 0)?, *self.arg(args, 1)?)?.into()
            }
            Self::OffsetDateTimeRange => {
                exports::offset_date_time_range(self.arg(args, 0)?, *self.arg(args, 1)?)?.into()
            }
            Self::InstantRange => {
                exports::instant_range(self.arg(args, 0)?, *self.arg(args, 1)?)?.into()
            }
            Self::EraGetDisplayName => exports::era_get_display_name(
                *self.arg(args, 0)?,
                *self.arg(args, 1)?,
                self.arg(args, 2)?,
            )?
            .into(),
            Self::NewAvailableZoneIdsIterator => exports::new_available_zone_ids_iterator()?.into(),
            Self::NewAvailableLocalesIterator => exports::new_available_locales_iterator()?.into(),
            Self::IteratorHasNext | Self::IteratorNext | Self::IteratorRelease => {
                let handle: &IteratorHandle = self.arg(args, 0)?;
                return Err(BridgeError::invalid_handle().with_message(format!(
                    "handle {} is not live outside of a Dispatcher.",
                    handle.as_raw()
                )));
            }
            Self::SystemZoneId => system_zone_id()?.into(),
        };
        Ok(value)
    }

    fn arg<'a, T: FromValue>(self, args: &'a [Value], index: usize) -> BridgeResult<&'a T> {
        let value = args.get(index).ok_or_else(|| {
            BridgeError::r#type().with_message(format!(
                "{} is missing argument {index}.",
                self.name()
            ))
        })?;
        T::from_value(value).ok_or_else(|| {
            BridgeError::r#type().with_message(format!(
                "{} expects {} for argument {index}, got {}.",
                self.name(),
                T::TYPE_NAME,
                value.type_name()
            ))
        })
    }
}

#[cfg(feature = "sys")]
fn system_zone_id() -> BridgeResult<String> {
    exports::system_zone_id()
}

#[cfg(not(feature = "sys"))]
fn system_zone_id() -> BridgeResult<String> {
    Err(BridgeError::enumeration_unavailable()
        .with_message("the system time zone requires the `sys` feature."))
}

// ==== Dispatcher ====

/// A stateful dispatcher that owns the iterators it creates.
///
/// Iterator constructors return a [`Value::Handle`], which the
/// `iteratorHasNext`, `iteratorNext` and `iteratorRelease` entry points
/// take back. Every other entry point behaves as [`EntryPoint::invoke`].
///
/// ```rust
/// use temporal_bridge::dispatch::{Dispatcher, Value};
///
/// let mut dispatcher = Dispatcher::new();
/// let handle = dispatcher.invoke_by_name("newAvailableLocalesIterator", &[]).unwrap();
/// let Value::Text(first) = dispatcher.invoke_by_name("iteratorNext", &[handle.clone()]).unwrap() else {
///     unreachable!()
/// };
/// assert!(!first.is_empty());
/// dispatcher.invoke_by_name("iteratorRelease", &[handle]).unwrap();
/// assert!(dispatcher.arena().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct Dispatcher {
    arena: IteratorArena,
}

impl Dispatcher {
    /// Creates a dispatcher with no live iterators.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the arena holding this dispatcher's iterators.
    #[inline]
    #[must_use]
    pub fn arena(&self) -> &IteratorArena {
        &self.arena
    }

    /// Calls `entry`, keeping any iterator it creates in the arena.
    pub fn invoke(&mut self, entry: EntryPoint, args: &[Value]) -> BridgeResult<Value> {
        entry.check_arity(args)?;
        let value = match entry {
            EntryPoint::NewAvailableZoneIdsIterator => {
                Value::Handle(self.arena.create(EnumerationCategory::AvailableZoneIds)?)
            }
            EntryPoint::NewAvailableLocalesIterator => {
                Value::Handle(self.arena.create(EnumerationCategory::AvailableLocales)?)
            }
            EntryPoint::IteratorHasNext => Value::Bool(self.arena.has_next(*entry.arg(args, 0)?)?),
            EntryPoint::IteratorNext => Value::Text(self.arena.next(*entry.arg(args, 0)?)?),
            EntryPoint::IteratorRelease => {
                self.arena.release(*entry.arg(args, 0)?)?;
                Value::Unit
            }
            _ => return entry.invoke(args),
        };
        Ok(value)
    }

    /// Looks `name` up and calls it. An unknown name fails with
    /// [`ErrorKind::Type`][crate::ErrorKind::Type].
    pub fn invoke_by_name(&mut self, name: &str, args: &[Value]) -> BridgeResult<Value> {
        let entry = EntryPoint::from_name(name).ok_or_else(|| {
            BridgeError::r#type().with_message(format!("no entry point is named {name:?}."))
        })?;
        self.invoke(entry, args)
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when a name does not match any entry point.
#[derive(Debug, Clone, Copy)]
pub struct ParseEntryPointError;

impl fmt::Display for ParseEntryPointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a known entry point name")
    }
}

impl FromStr for EntryPoint {
    type Err = ParseEntryPointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(ParseEntryPointError)
    }
}
