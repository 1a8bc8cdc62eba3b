//! This module implements `BridgeError`, the single error type returned by
//! every bridge operation.

use alloc::borrow::Cow;
use core::fmt;

/// The kind of failure raised by a bridge operation.
///
/// Each kind is distinguishable by the caller; there is no catch-all beyond
/// `Generic`, which is reserved for host environment faults that do not fit
/// anywhere else.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A generic error.
    #[default]
    Generic,
    /// An argument had the wrong type or count for a dispatched entry point.
    Type,
    /// A component value was outside of its valid range.
    Range,
    /// The input text did not conform to the expected or supplied format.
    Parse,
    /// The queried field does not apply to the value.
    UnsupportedField,
    /// No display data exists for the requested locale.
    UnsupportedLocale,
    /// `next` was called on an iterator with no remaining elements.
    ExhaustedIterator,
    /// The handle does not refer to a live iterator.
    InvalidHandle,
    /// The host environment could not produce an enumeration snapshot.
    EnumerationUnavailable,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Generic => "Error",
            Self::Type => "TypeError",
            Self::Range => "RangeError",
            Self::Parse => "ParseError",
            Self::UnsupportedField => "UnsupportedFieldError",
            Self::UnsupportedLocale => "UnsupportedLocaleError",
            Self::ExhaustedIterator => "ExhaustedIterator",
            Self::InvalidHandle => "InvalidHandle",
            Self::EnumerationUnavailable => "EnumerationUnavailable",
        })
    }
}

/// The error type for every operation in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl BridgeError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Creates a generic error with the provided message.
    #[inline]
    #[must_use]
    pub fn general(msg: &'static str) -> Self {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Creates a type error.
    #[inline]
    #[must_use]
    pub fn r#type() -> Self {
        Self::new(ErrorKind::Type)
    }

    /// Creates a range error.
    #[inline]
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Creates a parse error.
    #[inline]
    #[must_use]
    pub fn parse() -> Self {
        Self::new(ErrorKind::Parse)
    }

    /// Creates an unsupported field error.
    #[inline]
    #[must_use]
    pub fn unsupported_field() -> Self {
        Self::new(ErrorKind::UnsupportedField)
    }

    /// Creates an unsupported locale error.
    #[inline]
    #[must_use]
    pub fn unsupported_locale() -> Self {
        Self::new(ErrorKind::UnsupportedLocale)
    }

    /// Creates an exhausted iterator error.
    #[inline]
    #[must_use]
    pub fn exhausted_iterator() -> Self {
        Self::new(ErrorKind::ExhaustedIterator).with_message("no elements remain in the iterator")
    }

    /// Creates an invalid handle error.
    #[inline]
    #[must_use]
    pub fn invalid_handle() -> Self {
        Self::new(ErrorKind::InvalidHandle).with_message("handle does not refer to a live iterator")
    }

    /// Creates an enumeration unavailable error.
    #[inline]
    #[must_use]
    pub fn enumeration_unavailable() -> Self {
        Self::new(ErrorKind::EnumerationUnavailable)
    }

    /// Creates an error of `kind` that carries the message of an error
    /// raised by `jiff`.
    pub(crate) fn from_jiff(kind: ErrorKind, err: &jiff::Error) -> Self {
        Self::new(kind).with_message(alloc::format!("{err}"))
    }

    /// Adds a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        self.msg
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for BridgeError {}
