#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use crate::error::ffi::BridgeError;
    use crate::fields::ffi::{TemporalField, ValueRange};
    use crate::formatter::ffi::Formatter;
    use alloc::boxed::Box;
    use diplomat_runtime::{DiplomatStr, DiplomatWrite};
    use writeable::Writeable;

    #[diplomat::opaque]
    pub struct PlainTime(pub(crate) temporal_bridge::PlainTime);

    impl PlainTime {
        pub fn try_create(
            hour: u8,
            minute: u8,
            second: u8,
            nanosecond: u32,
        ) -> Result<Box<Self>, BridgeError> {
            temporal_bridge::PlainTime::try_new(hour, minute, second, nanosecond)
                .map(|x| Box::new(PlainTime(x)))
                .map_err(Into::into)
        }

        /// The `localTimeParse` entry point.
        pub fn from_utf8(s: &DiplomatStr) -> Result<Box<Self>, BridgeError> {
            temporal_bridge::PlainTime::from_utf8(s)
                .map(|x| Box::new(PlainTime(x)))
                .map_err(Into::into)
        }

        /// The `localTimeParseWithFormatter` entry point.
        pub fn from_utf8_with_formatter(
            s: &DiplomatStr,
            formatter: &Formatter,
        ) -> Result<Box<Self>, BridgeError> {
            let s = crate::formatter::utf8(s)?;
            temporal_bridge::exports::local_time_parse_with_formatter(s, &formatter.0)
                .map(|x| Box::new(PlainTime(x)))
                .map_err(Into::into)
        }

        pub fn hour(&self) -> u8 {
            self.0.hour()
        }
        pub fn minute(&self) -> u8 {
            self.0.minute()
        }
        pub fn second(&self) -> u8 {
            self.0.second()
        }
        pub fn millisecond(&self) -> u16 {
            self.0.millisecond()
        }
        pub fn microsecond(&self) -> u32 {
            self.0.microsecond()
        }
        pub fn nanosecond(&self) -> u32 {
            self.0.nanosecond()
        }

        /// The `localTimeRange` entry point.
        pub fn range(&self, field: TemporalField) -> Result<ValueRange, BridgeError> {
            temporal_bridge::exports::local_time_range(&self.0, field.into())
                .map(Into::into)
                .map_err(Into::into)
        }

        pub fn to_iso_string(&self, write: &mut DiplomatWrite) {
            let _ = self.0.write_to(write);
        }
    }
}
