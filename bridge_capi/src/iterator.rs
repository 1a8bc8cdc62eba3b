#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use crate::error::ffi::BridgeError;
    use alloc::boxed::Box;
    use core::fmt::Write;
    use diplomat_runtime::DiplomatWrite;
    use temporal_bridge::bridge;

    #[diplomat::enum_convert(bridge::EnumerationCategory)]
    pub enum EnumerationCategory {
        AvailableZoneIds,
        AvailableLocales,
    }

    #[diplomat::enum_convert(bridge::IteratorState)]
    pub enum IteratorState {
        Created,
        Active,
        Exhausted,
    }

    /// A pull iterator over a snapshot of strings.
    ///
    /// The snapshot is captured once on creation; call `has_next` before
    /// each `next`.
    #[diplomat::opaque]
    pub struct StringIterator(pub(crate) bridge::BridgeIterator);

    impl StringIterator {
        pub fn create(category: EnumerationCategory) -> Result<Box<Self>, BridgeError> {
            bridge::BridgeIterator::create(category.into())
                .map(|x| Box::new(StringIterator(x)))
                .map_err(Into::into)
        }

        /// The `newAvailableZoneIdsIterator` entry point.
        pub fn available_zone_ids() -> Result<Box<Self>, BridgeError> {
            temporal_bridge::exports::new_available_zone_ids_iterator()
                .map(|x| Box::new(StringIterator(x)))
                .map_err(Into::into)
        }

        /// The `newAvailableLocalesIterator` entry point.
        pub fn available_locales() -> Result<Box<Self>, BridgeError> {
            temporal_bridge::exports::new_available_locales_iterator()
                .map(|x| Box::new(StringIterator(x)))
                .map_err(Into::into)
        }

        pub fn category(&self) -> EnumerationCategory {
            self.0.category().into()
        }

        pub fn state(&self) -> IteratorState {
            self.0.state().into()
        }

        pub fn has_next(&self) -> bool {
            self.0.has_next()
        }

        /// Writes the next element, failing with `ExhaustedIterator` once the
        /// snapshot is drained.
        pub fn next(&mut self, write: &mut DiplomatWrite) -> Result<(), BridgeError> {
            let next = self.0.next()?;
            // The write itself should always succeed.
            let _ = write.write_str(&next);
            Ok(())
        }

        pub fn remaining(&self) -> usize {
            self.0.remaining()
        }
    }
}
