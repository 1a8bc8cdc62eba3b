#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use crate::error::ffi::BridgeError;
    use crate::fields::ffi::{TemporalField, ValueRange};
    use crate::formatter::ffi::Formatter;
    use crate::plain_date::ffi::PlainDate;
    use crate::plain_time::ffi::PlainTime;
    use alloc::boxed::Box;
    use diplomat_runtime::{DiplomatStr, DiplomatWrite};
    use writeable::Writeable;

    #[diplomat::opaque]
    pub struct PlainDateTime(pub(crate) temporal_bridge::PlainDateTime);

    impl PlainDateTime {
        pub fn from_date_and_time(date: &PlainDate, time: &PlainTime) -> Box<Self> {
            Box::new(PlainDateTime(temporal_bridge::PlainDateTime::new(
                date.0, time.0,
            )))
        }

        /// The `localDateTimeParse` entry point. A trailing numeric offset is
        /// accepted and discarded.
        pub fn from_utf8(s: &DiplomatStr) -> Result<Box<Self>, BridgeError> {
            temporal_bridge::PlainDateTime::from_utf8(s)
                .map(|x| Box::new(PlainDateTime(x)))
                .map_err(Into::into)
        }

        /// The `localDateTimeParseWithFormatter` entry point.
        pub fn from_utf8_with_formatter(
            s: &DiplomatStr,
            formatter: &Formatter,
        ) -> Result<Box<Self>, BridgeError> {
            let s = crate::formatter::utf8(s)?;
            temporal_bridge::exports::local_date_time_parse_with_formatter(s, &formatter.0)
                .map(|x| Box::new(PlainDateTime(x)))
                .map_err(Into::into)
        }

        pub fn date(&self) -> Box<PlainDate> {
            Box::new(PlainDate(self.0.date()))
        }
        pub fn time(&self) -> Box<PlainTime> {
            Box::new(PlainTime(self.0.time()))
        }

        /// The `localDateTimeRange` entry point.
        pub fn range(&self, field: TemporalField) -> Result<ValueRange, BridgeError> {
            temporal_bridge::exports::local_date_time_range(&self.0, field.into())
                .map(Into::into)
                .map_err(Into::into)
        }

        pub fn to_iso_string(&self, write: &mut DiplomatWrite) {
            let _ = self.0.write_to(write);
        }
    }
}
