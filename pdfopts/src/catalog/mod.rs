//! Closed option catalogs.
//!
//! Each catalog is a fieldless enum whose member table is a `'static`
//! constant generated at compile time. The [`Catalog`] trait gives all of
//! them the same read-only surface:
//!
//! - ordered listing for selection menus ([`Catalog::values`])
//! - index lookup ([`Catalog::by_ordinal`])
//! - canonical-name lookup ([`Catalog::from_name`], [`Catalog::contains`])
//! - raw-value resolution for persisted or command-line input ([`Catalog::from_raw`])
//!
//! # Examples
//!
//! ```
//! use pdfopts::catalog::{Catalog, Rotation};
//!
//! let menu: Vec<&str> = Rotation::values().iter().map(|r| r.name()).collect();
//! assert_eq!(menu, ["DEGREES_0", "DEGREES_90", "DEGREES_180", "DEGREES_270"]);
//! assert!(Rotation::by_ordinal(4).is_err());
//! ```

pub mod outline;
pub mod rotation;
pub mod version;

pub use outline::OutlinePolicy;
pub use rotation::Rotation;
pub use version::PdfVersion;

use std::fmt;

use strum::{VariantArray, VariantNames};

use crate::config::RawValue;
use crate::error::{OptionsError, Result};

/// Read-only contract shared by every option catalog.
pub trait Catalog:
    VariantArray + VariantNames + Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Catalog name used in error messages.
    const CATALOG: &'static str;

    /// Position of this member in definition order.
    fn ordinal(self) -> usize;

    /// All members in definition order.
    ///
    /// Returns the same static table on every call.
    fn values() -> &'static [Self] {
        <Self as VariantArray>::VARIANTS
    }

    /// Canonical names in definition order.
    fn names() -> &'static [&'static str] {
        <Self as VariantNames>::VARIANTS
    }

    /// Number of members.
    fn len() -> usize {
        Self::values().len()
    }

    /// Canonical name of this member.
    fn name(self) -> &'static str {
        Self::names()[self.ordinal()]
    }

    /// Member at `index` in definition order.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::OutOfRange`] when `index >= len()`.
    fn by_ordinal(index: usize) -> Result<Self> {
        Self::values()
            .get(index)
            .copied()
            .ok_or_else(|| OptionsError::out_of_range(Self::CATALOG, index, Self::len()))
    }

    /// Member with the given canonical name (case-sensitive, exact).
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::UnknownEnumValue`] when no member matches.
    fn from_name(name: &str) -> Result<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|member| member.name() == name)
            .ok_or_else(|| OptionsError::unknown_value(Self::CATALOG, name))
    }

    /// Check whether `name` is a canonical member name (case-sensitive, exact).
    fn contains(name: &str) -> bool {
        Self::names().contains(&name)
    }

    /// Check that this value is one of the catalog's members.
    fn is_member(&self) -> bool {
        Self::values().contains(self)
    }

    /// Resolve a raw value from a persisted selection or the command line.
    ///
    /// The default accepts canonical names only.
    ///
    /// # Errors
    ///
    /// Returns a lookup error naming the rejected value.
    fn from_raw(raw: &RawValue) -> Result<Self> {
        match raw {
            RawValue::Text(text) => Self::from_name(text),
            RawValue::Number(number) => {
                Err(OptionsError::unknown_value(Self::CATALOG, number.to_string()))
            }
        }
    }
}

/// Wires a catalog enum into [`Catalog`], `FromStr` and the serde name
/// round-trip (`TryFrom<String>`).
macro_rules! impl_catalog {
    ($ty:ty, $catalog:literal) => {
        impl $crate::catalog::Catalog for $ty {
            const CATALOG: &'static str = $catalog;

            fn ordinal(self) -> usize {
                self as usize
            }
        }

        $crate::catalog::impl_catalog!(@conversions $ty);
    };
    ($ty:ty, $catalog:literal, raw = $resolver:path) => {
        impl $crate::catalog::Catalog for $ty {
            const CATALOG: &'static str = $catalog;

            fn ordinal(self) -> usize {
                self as usize
            }

            fn from_raw(raw: &$crate::config::RawValue) -> $crate::error::Result<Self> {
                $resolver(raw)
            }
        }

        $crate::catalog::impl_catalog!(@conversions $ty);
    };
    (@conversions $ty:ty) => {
        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::OptionsError;

            fn from_str(s: &str) -> $crate::error::Result<Self> {
                <Self as $crate::catalog::Catalog>::from_name(s)
            }
        }

        impl ::std::convert::TryFrom<String> for $ty {
            type Error = $crate::error::OptionsError;

            fn try_from(s: String) -> $crate::error::Result<Self> {
                <Self as $crate::catalog::Catalog>::from_name(&s)
            }
        }
    };
}

pub(crate) use impl_catalog;
