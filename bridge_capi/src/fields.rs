#[diplomat::bridge]
#[diplomat::abi_rename = "temporal_bridge_{0}"]
#[diplomat::attr(auto, namespace = "temporal_bridge")]
pub mod ffi {
    use temporal_bridge::fields;

    #[diplomat::enum_convert(fields::TemporalField)]
    pub enum TemporalField {
        NanoOfSecond,
        MicroOfSecond,
        MilliOfSecond,
        SecondOfMinute,
        MinuteOfHour,
        HourOfDay,
        AmPmOfDay,
        DayOfWeek,
        DayOfMonth,
        DayOfYear,
        MonthOfYear,
        Year,
        Era,
        EpochDay,
        InstantSeconds,
        OffsetSeconds,
    }

    /// The inclusive minimum and maximum values of a field.
    pub struct ValueRange {
        pub min: i64,
        pub max: i64,
    }

    impl ValueRange {
        pub fn is_valid_value(self, value: i64) -> bool {
            fields::ValueRange::from(self).is_valid_value(value)
        }
    }
}

impl From<temporal_bridge::ValueRange> for ffi::ValueRange {
    fn from(other: temporal_bridge::ValueRange) -> Self {
        Self {
            min: other.min(),
            max: other.max(),
        }
    }
}

impl From<ffi::ValueRange> for temporal_bridge::ValueRange {
    fn from(other: ffi::ValueRange) -> Self {
        Self::new(other.min, other.max)
    }
}
