//! Legal page rotation angles.
//!
//! A page can only be rotated by a multiple of 90 degrees, so the catalog is
//! fixed at exactly four members. Lookups by angle are strict: 45 is an
//! error, not "close enough" to 0 or 90.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, IntoStaticStr, VariantArray, VariantNames};

use super::{Catalog, impl_catalog};
use crate::config::RawValue;
use crate::error::{OptionsError, Result};

/// Page rotation, clockwise.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumCount,
    IntoStaticStr,
    VariantArray,
    VariantNames,
    Serialize,
    Deserialize,
)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Rotation {
    /// No rotation.
    #[default]
    #[strum(to_string = "DEGREES_0")]
    Degrees0,
    /// Rotate 90 degrees clockwise.
    #[strum(to_string = "DEGREES_90")]
    Degrees90,
    /// Rotate 180 degrees.
    #[strum(to_string = "DEGREES_180")]
    Degrees180,
    /// Rotate 270 degrees clockwise (90 counter-clockwise).
    #[strum(to_string = "DEGREES_270")]
    Degrees270,
}

impl_catalog!(Rotation, "Rotation", raw = Rotation::resolve_raw);

const _: () = {
    let members = <Rotation as VariantArray>::VARIANTS;
    assert!(members.len() == 4);
    assert!(members[0].degrees() == 0);

    let mut i = 1;
    while i < members.len() {
        assert!(members[i].degrees() == members[i - 1].degrees() + 90);
        i += 1;
    }
};

impl Rotation {
    /// Rotation angle in degrees: 0, 90, 180 or 270.
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Degrees0 => 0,
            Self::Degrees90 => 90,
            Self::Degrees180 => 180,
            Self::Degrees270 => 270,
        }
    }

    /// Look up the rotation for an exact angle.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidAngle`] unless `degrees` is exactly
    /// 0, 90, 180 or 270.
    ///
    /// # Examples
    ///
    /// ```
    /// use pdfopts::catalog::Rotation;
    ///
    /// assert_eq!(Rotation::by_degrees(90).unwrap(), Rotation::Degrees90);
    /// assert!(Rotation::by_degrees(45).is_err());
    /// assert!(Rotation::by_degrees(360).is_err());
    /// ```
    pub fn by_degrees(degrees: i64) -> Result<Self> {
        Self::values()
            .iter()
            .copied()
            .find(|rotation| i64::from(rotation.degrees()) == degrees)
            .ok_or_else(|| OptionsError::invalid_angle(degrees))
    }

    /// Look up the rotation for any multiple of 90, reducing it modulo 360.
    ///
    /// `-90` gives `DEGREES_270`, `450` gives `DEGREES_90`.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::InvalidAngle`] with the original angle when it
    /// is not a multiple of 90.
    pub fn normalized(degrees: i64) -> Result<Self> {
        if degrees % 90 != 0 {
            return Err(OptionsError::invalid_angle(degrees));
        }
        Self::by_degrees(degrees.rem_euclid(360))
    }

    /// Combined rotation of applying `self` then `other`.
    pub fn rotate_by(self, other: Self) -> Self {
        Self::quarter_turns((self.ordinal() + other.ordinal()) % 4)
    }

    /// Rotation that undoes `self`.
    pub fn inverse(self) -> Self {
        Self::quarter_turns((4 - self.ordinal()) % 4)
    }

    /// Check whether width and height trade places under this rotation.
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Self::Degrees90 | Self::Degrees270)
    }

    fn quarter_turns(turns: usize) -> Self {
        match turns {
            0 => Self::Degrees0,
            1 => Self::Degrees90,
            2 => Self::Degrees180,
            _ => Self::Degrees270,
        }
    }

    /// Resolve a raw value: an angle, an angle in plain decimal text, or a
    /// canonical name.
    ///
    /// Text is an angle only when it is exactly the decimal rendering of an
    /// integer; `"+90"`, `"090"` and `" 90 "` fall through to the name lookup
    /// and are rejected.
    fn resolve_raw(raw: &RawValue) -> Result<Self> {
        match raw {
            RawValue::Number(degrees) => Self::by_degrees(*degrees),
            RawValue::Text(text) => match text.parse::<i64>() {
                Ok(degrees) if degrees.to_string() == *text => Self::by_degrees(degrees),
                _ => Self::from_name(text),
            },
        }
    }
}
