#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use crate::error::ffi::BridgeError;
    use crate::plain_date::ffi::PlainDate;
    use crate::plain_date_time::ffi::PlainDateTime;
    use crate::plain_time::ffi::PlainTime;
    use alloc::boxed::Box;
    use core::fmt::Write;
    use diplomat_runtime::{DiplomatStr, DiplomatWrite};

    /// A caller owned formatter, passed through to the parse entry points.
    #[diplomat::opaque]
    pub struct Formatter(pub(crate) temporal_bridge::Formatter);

    impl Formatter {
        /// Compiles a `strftime`-like pattern.
        pub fn try_from_pattern(pattern: &DiplomatStr) -> Result<Box<Self>, BridgeError> {
            let pattern = super::utf8(pattern)?;
            temporal_bridge::Formatter::pattern(pattern)
                .map(|x| Box::new(Formatter(x)))
                .map_err(Into::into)
        }

        /// Returns a predefined formatter such as `ISO_LOCAL_DATE`.
        pub fn predefined(name: &DiplomatStr) -> Option<Box<Self>> {
            let name = core::str::from_utf8(name).ok()?;
            temporal_bridge::Formatter::predefined(name).map(|x| Box::new(Formatter(x)))
        }

        pub fn format_date(
            &self,
            date: &PlainDate,
            write: &mut DiplomatWrite,
        ) -> Result<(), BridgeError> {
            let s = self.0.format_date(&date.0)?;
            // The write itself should always succeed.
            let _ = write.write_str(&s);
            Ok(())
        }

        pub fn format_time(
            &self,
            time: &PlainTime,
            write: &mut DiplomatWrite,
        ) -> Result<(), BridgeError> {
            let s = self.0.format_time(&time.0)?;
            let _ = write.write_str(&s);
            Ok(())
        }

        pub fn format_date_time(
            &self,
            date_time: &PlainDateTime,
            write: &mut DiplomatWrite,
        ) -> Result<(), BridgeError> {
            let s = self.0.format_date_time(&date_time.0)?;
            let _ = write.write_str(&s);
            Ok(())
        }

        #[allow(clippy::should_implement_trait)]
        pub fn clone(&self) -> Box<Formatter> {
            Box::new(Formatter(self.0.clone()))
        }
    }
}

/// Validates UTF-8 input for entry points that take text.
pub(crate) fn utf8(s: &[u8]) -> Result<&str, temporal_bridge::BridgeError> {
    core::str::from_utf8(s)
        .map_err(|_| temporal_bridge::BridgeError::parse().with_message("source text is not valid UTF-8."))
}
