//! The `ZoneIdProvider` trait and its implementations.
//!
//! A provider is the host environment source of the time zone identifier
//! snapshot captured by a [`BridgeIterator`][crate::BridgeIterator].

use alloc::{string::String, vec::Vec};

use crate::{BridgeError, BridgeResult};

#[cfg(feature = "std")]
mod fs;

#[cfg(feature = "std")]
#[doc(inline)]
pub use fs::FsZoneIdProvider;

/// The `ZoneIdProvider` trait provides the set of time zone identifiers a
/// data source recognizes.
pub trait ZoneIdProvider {
    /// Returns every zone identifier known to this provider.
    ///
    /// The order of the returned identifiers carries no meaning. Providers
    /// that cannot reach their data source must fail with
    /// [`ErrorKind::EnumerationUnavailable`][crate::ErrorKind::EnumerationUnavailable].
    fn available_zone_ids(&self) -> BridgeResult<Vec<String>>;
}

impl<P: ZoneIdProvider + ?Sized> ZoneIdProvider for &P {
    fn available_zone_ids(&self) -> BridgeResult<Vec<String>> {
        (**self).available_zone_ids()
    }
}

/// A fixed list of identifiers acts as its own provider.
impl<S: AsRef<str>> ZoneIdProvider for [S] {
    fn available_zone_ids(&self) -> BridgeResult<Vec<String>> {
        Ok(self.iter().map(|id| String::from(id.as_ref())).collect())
    }
}

/// A provider with no data source, for builds without zone data.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeverProvider;

impl ZoneIdProvider for NeverProvider {
    fn available_zone_ids(&self) -> BridgeResult<Vec<String>> {
        Err(BridgeError::enumeration_unavailable()
            .with_message("no time zone data source is available in this build."))
    }
}

/// A provider backed by the time zone database compiled into the binary.
#[cfg(feature = "compiled_data")]
#[derive(Debug, Default, Clone, Copy)]
pub struct CompiledZoneIdProvider;

#[cfg(feature = "compiled_data")]
impl ZoneIdProvider for CompiledZoneIdProvider {
    fn available_zone_ids(&self) -> BridgeResult<Vec<String>> {
        let ids: Vec<String> = jiff_tzdb::available().map(String::from).collect();
        trace!("compiled time zone database holds {} identifiers", ids.len());
        Ok(ids)
    }
}

/// The provider used when none is given explicitly.
#[cfg(feature = "compiled_data")]
pub type DefaultZoneIdProvider = CompiledZoneIdProvider;

/// The provider used when none is given explicitly.
#[cfg(all(feature = "std", not(feature = "compiled_data")))]
pub type DefaultZoneIdProvider = FsZoneIdProvider;

/// The provider used when none is given explicitly.
#[cfg(not(any(feature = "std", feature = "compiled_data")))]
pub type DefaultZoneIdProvider = NeverProvider;
