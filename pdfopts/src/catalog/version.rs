//! Supported PDF output versions.
//!
//! Members are declared oldest first, so ordinal order is recency order and
//! the derived `Ord` compares versions (`VERSION_1_7 > VERSION_1_4`).

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, IntoStaticStr, VariantArray, VariantNames};

use super::{Catalog, impl_catalog};
use crate::config::RawValue;
use crate::error::{OptionsError, Result};

/// PDF version written into the output header.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    IntoStaticStr,
    VariantArray,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum PdfVersion {
    /// PDF 1.0.
    #[strum(to_string = "VERSION_1_0")]
    Version1_0,
    /// PDF 1.1.
    #[strum(to_string = "VERSION_1_1")]
    Version1_1,
    /// PDF 1.2.
    #[strum(to_string = "VERSION_1_2")]
    Version1_2,
    /// PDF 1.3.
    #[strum(to_string = "VERSION_1_3")]
    Version1_3,
    /// PDF 1.4.
    #[strum(to_string = "VERSION_1_4")]
    Version1_4,
    /// PDF 1.5, object streams and cross-reference streams.
    #[strum(to_string = "VERSION_1_5")]
    Version1_5,
    /// PDF 1.6.
    #[strum(to_string = "VERSION_1_6")]
    Version1_6,
    /// PDF 1.7 (ISO 32000-1).
    #[strum(to_string = "VERSION_1_7")]
    Version1_7,
    /// PDF 2.0 (ISO 32000-2).
    #[strum(to_string = "VERSION_2_0")]
    Version2_0,
}

impl_catalog!(PdfVersion, "PdfVersion", raw = PdfVersion::resolve_raw);

// Menus and callers rely on the 1.4 - 1.7 range being selectable.
const _: () = assert!(<PdfVersion as EnumCount>::COUNT >= 4);
const _: () = assert!(
    (PdfVersion::Version1_4 as usize) < (PdfVersion::Version1_7 as usize)
);

impl PdfVersion {
    /// Most recent supported version.
    pub fn latest() -> Self {
        Self::Version2_0
    }

    /// Major and minor version numbers.
    pub const fn major_minor(self) -> (u8, u8) {
        match self {
            Self::Version1_0 => (1, 0),
            Self::Version1_1 => (1, 1),
            Self::Version1_2 => (1, 2),
            Self::Version1_3 => (1, 3),
            Self::Version1_4 => (1, 4),
            Self::Version1_5 => (1, 5),
            Self::Version1_6 => (1, 6),
            Self::Version1_7 => (1, 7),
            Self::Version2_0 => (2, 0),
        }
    }

    /// Major version number.
    pub const fn major(self) -> u8 {
        self.major_minor().0
    }

    /// Minor version number.
    pub const fn minor(self) -> u8 {
        self.major_minor().1
    }

    /// Dotted version string, e.g. `"1.7"`.
    pub fn version_str(self) -> &'static str {
        match self {
            Self::Version1_0 => "1.0",
            Self::Version1_1 => "1.1",
            Self::Version1_2 => "1.2",
            Self::Version1_3 => "1.3",
            Self::Version1_4 => "1.4",
            Self::Version1_5 => "1.5",
            Self::Version1_6 => "1.6",
            Self::Version1_7 => "1.7",
            Self::Version2_0 => "2.0",
        }
    }

    /// File header line for this version, e.g. `"%PDF-1.7"`.
    pub fn header(self) -> String {
        format!("%PDF-{}", self.version_str())
    }

    /// Check whether this version is the same as or newer than `other`.
    pub fn is_at_least(self, other: Self) -> bool {
        self >= other
    }

    /// Look up a version by its dotted string (`"1.7"`).
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnknownEnumValue`] for unsupported versions.
    pub fn from_version_str(s: &str) -> Result<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|version| version.version_str() == s)
            .ok_or_else(|| OptionsError::unknown_value(Self::CATALOG, s))
    }

    /// Look up a version by its major and minor numbers.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnknownEnumValue`] for unsupported versions.
    pub fn from_major_minor(major: u8, minor: u8) -> Result<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|version| version.major_minor() == (major, minor))
            .ok_or_else(|| OptionsError::unknown_value(Self::CATALOG, format!("{major}.{minor}")))
    }

    /// Resolve a raw value, accepting `"VERSION_1_7"` or `"1.7"`.
    fn resolve_raw(raw: &RawValue) -> Result<Self> {
        match raw {
            RawValue::Text(text) => Self::from_name(text).or_else(|_| Self::from_version_str(text)),
            RawValue::Number(number) => {
                Err(OptionsError::unknown_value(Self::CATALOG, number.to_string()))
            }
        }
    }
}
