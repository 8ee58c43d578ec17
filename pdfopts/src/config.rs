//! Candidate configurations.
//!
//! A front end collects a user's choices either as typed catalog members
//! (picked from a menu) or as raw values (typed on a command line, read back
//! from a saved selection). This module models both so that
//! [`ConfigValidator`](crate::validation::ConfigValidator) can turn them into
//! a [`ValidatedConfig`](crate::validation::ValidatedConfig).
//!
//! Saved selections are small JSON documents:
//!
//! ```json
//! { "version": "VERSION_1_7", "outline_policy": "DISCARD", "rotation": 90 }
//! ```

use std::fmt;
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::{OutlinePolicy, PdfVersion, Rotation};
use crate::error::{ConfigField, OptionsError, Result};

/// Unresolved value as supplied by a user or a saved selection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Numeric value, e.g. a rotation angle.
    Number(i64),
    /// Textual value, e.g. a canonical name.
    Text(String),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for RawValue {
    fn from(number: i64) -> Self {
        Self::Number(number)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Proposed value for one configuration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Candidate<T> {
    /// Already a catalog member.
    Typed(T),
    /// Still needs a catalog lookup.
    Raw(RawValue),
}

impl<T> From<RawValue> for Candidate<T> {
    fn from(raw: RawValue) -> Self {
        Self::Raw(raw)
    }
}

impl<T> From<i64> for Candidate<T> {
    fn from(number: i64) -> Self {
        Self::Raw(RawValue::Number(number))
    }
}

impl<T> From<i32> for Candidate<T> {
    fn from(number: i32) -> Self {
        Self::Raw(RawValue::Number(i64::from(number)))
    }
}

impl<T> From<&str> for Candidate<T> {
    fn from(text: &str) -> Self {
        Self::Raw(RawValue::from(text))
    }
}

impl<T> From<String> for Candidate<T> {
    fn from(text: String) -> Self {
        Self::Raw(RawValue::Text(text))
    }
}

impl From<PdfVersion> for Candidate<PdfVersion> {
    fn from(version: PdfVersion) -> Self {
        Self::Typed(version)
    }
}

impl From<OutlinePolicy> for Candidate<OutlinePolicy> {
    fn from(policy: OutlinePolicy) -> Self {
        Self::Typed(policy)
    }
}

impl From<Rotation> for Candidate<Rotation> {
    fn from(rotation: Rotation) -> Self {
        Self::Typed(rotation)
    }
}

/// Proposed `(version, outline policy, rotation)` selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateConfig {
    /// Proposed output version.
    pub version: Candidate<PdfVersion>,
    /// Proposed outline policy.
    pub outline_policy: Candidate<OutlinePolicy>,
    /// Proposed page rotation.
    pub rotation: Candidate<Rotation>,
}

impl CandidateConfig {
    /// Build a candidate from anything convertible into per-field candidates.
    pub fn new(
        version: impl Into<Candidate<PdfVersion>>,
        outline_policy: impl Into<Candidate<OutlinePolicy>>,
        rotation: impl Into<Candidate<Rotation>>,
    ) -> Self {
        Self {
            version: version.into(),
            outline_policy: outline_policy.into(),
            rotation: rotation.into(),
        }
    }
}

/// Partially specified selection, as saved to disk or given as flags.
///
/// A key left out of the file is `None`. A key that is present must hold an
/// integer or a string; `null` and other JSON types are rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Selection {
    /// Output version (canonical name or dotted string).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_version"
    )]
    pub version: Option<RawValue>,
    /// Outline policy (canonical name).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_outline_policy"
    )]
    pub outline_policy: Option<RawValue>,
    /// Rotation (degrees or canonical name).
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_rotation"
    )]
    pub rotation: Option<RawValue>,
}

type FieldResult<E> = std::result::Result<Option<RawValue>, E>;

fn present_version<'de, D: Deserializer<'de>>(deserializer: D) -> FieldResult<D::Error> {
    present_field(deserializer, ConfigField::Version)
}

fn present_outline_policy<'de, D: Deserializer<'de>>(deserializer: D) -> FieldResult<D::Error> {
    present_field(deserializer, ConfigField::OutlinePolicy)
}

fn present_rotation<'de, D: Deserializer<'de>>(deserializer: D) -> FieldResult<D::Error> {
    present_field(deserializer, ConfigField::Rotation)
}

/// Read a key that appears in the document; only called when the key exists.
fn present_field<'de, D: Deserializer<'de>>(
    deserializer: D,
    field: ConfigField,
) -> FieldResult<D::Error> {
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(Some(RawValue::Text(text))),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(number) => Ok(Some(RawValue::Number(number))),
            None => Err(D::Error::custom(format!(
                "{field} must be an integer or a string, got {number}"
            ))),
        },
        other => Err(D::Error::custom(format!(
            "{field} must be an integer or a string, got {other}"
        ))),
    }
}

impl Selection {
    /// Parse a selection from JSON text.
    ///
    /// # Errors
    ///
    /// Returns the serde error for malformed JSON, unknown keys, or values
    /// that are neither numbers nor strings.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Read a saved selection from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`OptionsError::Io`] when the file cannot be read and
    /// [`OptionsError::InvalidConfigFile`] when it cannot be parsed.
    pub async fn load(path: &Path) -> Result<Self> {
        let contents = tokio::fs::read_to_string(path).await?;
        Self::from_json_str(&contents)
            .map_err(|err| OptionsError::invalid_config_file(path.to_path_buf(), err.to_string()))
    }

    /// Layer `overrides` on top of this selection; fields set in
    /// `overrides` win.
    pub fn merge(self, overrides: Selection) -> Self {
        Self {
            version: overrides.version.or(self.version),
            outline_policy: overrides.outline_policy.or(self.outline_policy),
            rotation: overrides.rotation.or(self.rotation),
        }
    }

    /// Turn the selection into a candidate configuration.
    ///
    /// A missing outline policy or rotation falls back to the catalog
    /// default (`RETAIN`, `DEGREES_0`). A missing version has no default and
    /// becomes an empty raw value, which validation rejects.
    pub fn into_candidate(self) -> CandidateConfig {
        CandidateConfig {
            version: self
                .version
                .map(Candidate::Raw)
                .unwrap_or_else(|| Candidate::Raw(RawValue::Text(String::new()))),
            outline_policy: self
                .outline_policy
                .map_or_else(|| Candidate::Typed(OutlinePolicy::default()), Candidate::Raw),
            rotation: self
                .rotation
                .map_or_else(|| Candidate::Typed(Rotation::default()), Candidate::Raw),
        }
    }
}
