#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use diplomat_runtime::{DiplomatOption, DiplomatUtf8StrSlice};

    pub enum ErrorKind {
        Generic,
        Type,
        Range,
        Parse,
        UnsupportedField,
        UnsupportedLocale,
        ExhaustedIterator,
        InvalidHandle,
        EnumerationUnavailable,
    }

    /// The error returned by every fallible function.
    ///
    /// `msg` is only set for messages with a static lifetime.
    pub struct BridgeError {
        pub kind: ErrorKind,
        pub msg: DiplomatOption<DiplomatUtf8StrSlice<'static>>,
    }
}

use alloc::borrow::Cow;
use diplomat_runtime::DiplomatUtf8StrSlice;

impl From<temporal_bridge::ErrorKind> for ffi::ErrorKind {
    fn from(kind: temporal_bridge::ErrorKind) -> Self {
        use temporal_bridge::ErrorKind as Kind;
        match kind {
            Kind::Type => Self::Type,
            Kind::Range => Self::Range,
            Kind::Parse => Self::Parse,
            Kind::UnsupportedField => Self::UnsupportedField,
            Kind::UnsupportedLocale => Self::UnsupportedLocale,
            Kind::ExhaustedIterator => Self::ExhaustedIterator,
            Kind::InvalidHandle => Self::InvalidHandle,
            Kind::EnumerationUnavailable => Self::EnumerationUnavailable,
            _ => Self::Generic,
        }
    }
}

impl From<ffi::ErrorKind> for temporal_bridge::ErrorKind {
    fn from(kind: ffi::ErrorKind) -> Self {
        match kind {
            ffi::ErrorKind::Generic => Self::Generic,
            ffi::ErrorKind::Type => Self::Type,
            ffi::ErrorKind::Range => Self::Range,
            ffi::ErrorKind::Parse => Self::Parse,
            ffi::ErrorKind::UnsupportedField => Self::UnsupportedField,
            ffi::ErrorKind::UnsupportedLocale => Self::UnsupportedLocale,
            ffi::ErrorKind::ExhaustedIterator => Self::ExhaustedIterator,
            ffi::ErrorKind::InvalidHandle => Self::InvalidHandle,
            ffi::ErrorKind::EnumerationUnavailable => Self::EnumerationUnavailable,
        }
    }
}

impl From<temporal_bridge::BridgeError> for ffi::BridgeError {
    fn from(other: temporal_bridge::BridgeError) -> Self {
        let kind = other.kind().into();
        let msg = match other.into_message() {
            Cow::Borrowed(msg) => Some(DiplomatUtf8StrSlice::from(msg)),
            Cow::Owned(_) => None,
        };
        Self {
            kind,
            msg: msg.into(),
        }
    }
}
