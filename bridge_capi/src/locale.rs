#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use crate::error::ffi::BridgeError;
    use alloc::boxed::Box;
    use core::fmt::Write;
    use diplomat_runtime::{DiplomatStr, DiplomatWrite};
    use temporal_bridge::era;

    #[diplomat::opaque]
    pub struct Locale(pub(crate) icu_locale::Locale);

    #[diplomat::enum_convert(era::Era)]
    pub enum Era {
        Bce,
        Ce,
        Ah,
        BeforeRoc,
        Roc,
        BeforeBe,
        Be,
    }

    #[diplomat::enum_convert(era::TextStyle)]
    pub enum TextStyle {
        Full,
        Short,
        Narrow,
    }

    impl Locale {
        pub fn try_from_str(s: &DiplomatStr) -> Result<Box<Self>, BridgeError> {
            icu_locale::Locale::try_from_utf8(s)
                .map(|locale| Box::new(Self(locale)))
                .map_err(|_| {
                    temporal_bridge::BridgeError::unsupported_locale()
                        .with_message("not a well formed locale identifier.")
                        .into()
                })
        }

        pub fn to_string(&self, write: &mut DiplomatWrite) {
            let _ = write!(write, "{}", self.0);
        }

        pub fn era_display_name(
            &self,
            era: Era,
            style: TextStyle,
            write: &mut DiplomatWrite,
        ) -> Result<(), BridgeError> {
            let name = temporal_bridge::exports::era_get_display_name(era.into(), style.into(), &self.0)?;
            // The write itself should always succeed.
            let _ = write.write_str(&name);
            Ok(())
        }
    }
}
