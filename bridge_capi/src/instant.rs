#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use crate::error::ffi::BridgeError;
    use crate::fields::ffi::{TemporalField, ValueRange};
    use alloc::boxed::Box;
    use diplomat_runtime::{DiplomatStr, DiplomatWrite};
    use writeable::Writeable;

    #[diplomat::opaque]
    pub struct Instant(pub(crate) temporal_bridge::Instant);

    impl Instant {
        pub fn try_create(epoch_seconds: i64, nanosecond: u32) -> Result<Box<Self>, BridgeError> {
            temporal_bridge::Instant::try_new(epoch_seconds, nanosecond)
                .map(|x| Box::new(Instant(x)))
                .map_err(Into::into)
        }

        pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> Result<Box<Self>, BridgeError> {
            temporal_bridge::Instant::from_epoch_milliseconds(epoch_milliseconds)
                .map(|x| Box::new(Instant(x)))
                .map_err(Into::into)
        }

        /// The `instantParse` entry point.
        pub fn from_utf8(s: &DiplomatStr) -> Result<Box<Self>, BridgeError> {
            temporal_bridge::Instant::from_utf8(s)
                .map(|x| Box::new(Instant(x)))
                .map_err(Into::into)
        }

        pub fn epoch_seconds(&self) -> i64 {
            self.0.epoch_seconds()
        }
        pub fn nanosecond(&self) -> u32 {
            self.0.nanosecond()
        }
        pub fn epoch_milliseconds(&self) -> i64 {
            self.0.epoch_milliseconds()
        }

        /// The `instantRange` entry point.
        pub fn range(&self, field: TemporalField) -> Result<ValueRange, BridgeError> {
            temporal_bridge::exports::instant_range(&self.0, field.into())
                .map(Into::into)
                .map_err(Into::into)
        }

        pub fn to_iso_string(&self, write: &mut DiplomatWrite) {
            let _ = self.0.write_to(write);
        }
    }
}
