#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use crate::error::ffi::BridgeError;
    use crate::fields::ffi::{TemporalField, ValueRange};
    use crate::formatter::ffi::Formatter;
    use crate::locale::ffi::Era;
    use alloc::boxed::Box;
    use diplomat_runtime::{DiplomatStr, DiplomatWrite};
    use writeable::Writeable;

    #[diplomat::opaque]
    pub struct PlainDate(pub(crate) temporal_bridge::PlainDate);

    impl PlainDate {
        pub fn try_create(year: i32, month: u8, day: u8) -> Result<Box<Self>, BridgeError> {
            temporal_bridge::PlainDate::try_new(year, month, day)
                .map(|x| Box::new(PlainDate(x)))
                .map_err(Into::into)
        }

        /// The `localDateParse` entry point.
        pub fn from_utf8(s: &DiplomatStr) -> Result<Box<Self>, BridgeError> {
            temporal_bridge::PlainDate::from_utf8(s)
                .map(|x| Box::new(PlainDate(x)))
                .map_err(Into::into)
        }

        /// The `localDateParseWithFormatter` entry point.
        pub fn from_utf8_with_formatter(
            s: &DiplomatStr,
            formatter: &Formatter,
        ) -> Result<Box<Self>, BridgeError> {
            let s = crate::formatter::utf8(s)?;
            temporal_bridge::exports::local_date_parse_with_formatter(s, &formatter.0)
                .map(|x| Box::new(PlainDate(x)))
                .map_err(Into::into)
        }

        pub fn year(&self) -> i32 {
            self.0.year()
        }
        pub fn month(&self) -> u8 {
            self.0.month()
        }
        pub fn day(&self) -> u8 {
            self.0.day()
        }
        pub fn day_of_week(&self) -> u8 {
            self.0.day_of_week()
        }
        pub fn day_of_year(&self) -> u16 {
            self.0.day_of_year()
        }
        pub fn era(&self) -> Era {
            self.0.era().into()
        }

        /// The `localDateRange` entry point.
        pub fn range(&self, field: TemporalField) -> Result<ValueRange, BridgeError> {
            temporal_bridge::exports::local_date_range(&self.0, field.into())
                .map(Into::into)
                .map_err(Into::into)
        }

        pub fn to_iso_string(&self, write: &mut DiplomatWrite) {
            // The write itself should always succeed.
            let _ = self.0.write_to(write);
        }
    }
}
