//! This module implements `Era`, `TextStyle` and localized era names.
//!
//! Display names come from a static table keyed by the language subtag of
//! the requested locale. A language missing a name for an era falls back to
//! the root (`und`) table, the way CLDR inheritance does.

use core::{fmt, str::FromStr};

use icu_locale::Locale;
use tinystr::{tinystr, TinyAsciiStr};

use crate::{BridgeError, BridgeResult};

/// An era of one of the supported calendar systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Era {
    /// Before the common era, in the ISO calendar.
    Bce,
    /// The common era, in the ISO calendar.
    Ce,
    /// Anno Hegirae, the single era of the Hijrah calendar.
    Ah,
    /// Before the Republic of China, in the Minguo calendar.
    BeforeRoc,
    /// The Republic of China era, in the Minguo calendar.
    Roc,
    /// Before the Buddhist era, in the Thai Buddhist calendar.
    BeforeBe,
    /// The Buddhist era, in the Thai Buddhist calendar.
    Be,
}

impl Era {
    /// Every era, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Bce,
        Self::Ce,
        Self::Ah,
        Self::BeforeRoc,
        Self::Roc,
        Self::BeforeBe,
        Self::Be,
    ];

    /// Returns the numeric value of this era within its calendar system.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Bce | Self::BeforeRoc | Self::BeforeBe => 0,
            Self::Ce | Self::Ah | Self::Roc | Self::Be => 1,
        }
    }

    /// Returns this era's external name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bce => "bce",
            Self::Ce => "ce",
            Self::Ah => "ah",
            Self::BeforeRoc => "before-roc",
            Self::Roc => "roc",
            Self::BeforeBe => "before-be",
            Self::Be => "be",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }

    /// Returns the localized name of this era.
    ///
    /// ```rust
    /// use temporal_bridge::{Era, Locale, TextStyle};
    ///
    /// let en: Locale = "en-US".parse().unwrap();
    /// assert_eq!(Era::Ce.display_name(TextStyle::Full, &en).unwrap(), "Anno Domini");
    /// assert_eq!(Era::Bce.display_name(TextStyle::Short, &en).unwrap(), "BC");
    /// ```
    pub fn display_name(self, style: TextStyle, locale: &Locale) -> BridgeResult<&'static str> {
        let language = locale.id.language.as_str();
        let table = ERA_NAMES
            .iter()
            .find(|(lang, _)| lang.as_str() == language)
            .map(|(_, table)| table)
            .ok_or_else(|| {
                BridgeError::unsupported_locale()
                    .with_message("no era display names exist for the locale's language.")
            })?;
        let names = table[self.index()].unwrap_or(ROOT[self.index()]);
        Ok(names[style as usize])
    }
}

/// A parsing error for `Era`.
#[derive(Debug, Clone, Copy)]
pub struct ParseEraError;

impl fmt::Display for ParseEraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid Era")
    }
}

impl FromStr for Era {
    type Err = ParseEraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|era| era.name() == s)
            .ok_or(ParseEraError)
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The width of a localized name.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    /// The full name, e.g. "Anno Domini".
    #[default]
    Full = 0,
    /// The abbreviated name, e.g. "AD".
    Short = 1,
    /// The narrowest name, e.g. "A".
    Narrow = 2,
}

/// A parsing error for `TextStyle`.
#[derive(Debug, Clone, Copy)]
pub struct ParseTextStyleError;

impl fmt::Display for ParseTextStyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid TextStyle")
    }
}

impl FromStr for TextStyle {
    type Err = ParseTextStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "short" => Ok(Self::Short),
            "narrow" => Ok(Self::Narrow),
            _ => Err(ParseTextStyleError),
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Full => "full",
            Self::Short => "short",
            Self::Narrow => "narrow",
        })
    }
}

// ==== Display name data ====

/// Full, short and narrow names of one era.
type Names = [&'static str; 3];

/// Names indexed by `Era` declaration order.
type EraTable = [Option<Names>; 7];

const ROOT: [Names; 7] = [
    ["BCE", "BCE", "BCE"],
    ["CE", "CE", "CE"],
    ["AH", "AH", "AH"],
    ["Before R.O.C.", "Before R.O.C.", "Before R.O.C."],
    ["Minguo", "Minguo", "Minguo"],
    ["BEFORE_BE", "BEFORE_BE", "BEFORE_BE"],
    ["BE", "BE", "BE"],
];

const UND: EraTable = [None; 7];

const EN: EraTable = [
    Some(["Before Christ", "BC", "B"]),
    Some(["Anno Domini", "AD", "A"]),
    None,
    None,
    None,
    None,
    None,
];

const FR: EraTable = [
    Some(["avant Jésus-Christ", "av. J.-C.", "av. J.-C."]),
    Some(["après Jésus-Christ", "ap. J.-C.", "ap. J.-C."]),
    Some(["ère de l’Hégire", "AH", "AH"]),
    Some(["avant RdC", "avant RdC", "avant RdC"]),
    Some(["RdC", "RdC", "RdC"]),
    None,
    Some(["ère bouddhique", "È.B.", "È.B."]),
];

const DE: EraTable = [
    Some(["v. Chr.", "v. Chr.", "v. Chr."]),
    Some(["n. Chr.", "n. Chr.", "n. Chr."]),
    None,
    Some(["vor Minguo", "vor Minguo", "vor Minguo"]),
    None,
    None,
    None,
];

const ES: EraTable = [
    Some(["antes de Cristo", "a. C.", "a. C."]),
    Some(["después de Cristo", "d. C.", "d. C."]),
    None,
    Some(["antes de R.O.C.", "antes de R.O.C.", "antes de R.O.C."]),
    None,
    None,
    Some(["era budista", "EB", "EB"]),
];

const AR: EraTable = [
    Some(["قبل الميلاد", "ق.م", "ق.م"]),
    Some(["ميلادي", "م", "م"]),
    Some(["هـ", "هـ", "هـ"]),
    None,
    None,
    None,
    Some(["التقويم البوذي", "التقويم البوذي", "التقويم البوذي"]),
];

static ERA_NAMES: [(TinyAsciiStr<3>, EraTable); 6] = [
    (tinystr!(3, "und"), UND),
    (tinystr!(3, "en"), EN),
    (tinystr!(3, "fr"), FR),
    (tinystr!(3, "de"), DE),
    (tinystr!(3, "es"), ES),
    (tinystr!(3, "ar"), AR),
];

/// Returns the language tags that carry era display names.
pub(crate) fn supported_languages() -> impl Iterator<Item = &'static str> {
    ERA_NAMES.iter().map(|(lang, _)| lang.as_str())
}
