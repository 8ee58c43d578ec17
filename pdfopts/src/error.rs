//! Error types for pdfopts.
//!
//! Every lookup or validation failure surfaces as a typed error that names
//! the catalog (or configuration field) involved and the value that was
//! rejected. Nothing in this crate substitutes a default for bad input.
//!
//! # Error Categories
//!
//! - **Lookup Errors**: index out of range, unknown canonical value, invalid angle
//! - **Configuration Errors**: a candidate selection failed validation
//! - **File Errors**: a persisted selection could not be read or parsed

use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Result type alias for pdfopts operations.
pub type Result<T> = std::result::Result<T, OptionsError>;

/// Main error type for pdfopts operations.
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    /// Index-based lookup outside the catalog's bounds.
    #[error("Index {index} is out of range for {catalog} (expected 0..{len})")]
    OutOfRange {
        /// Catalog that was indexed.
        catalog: &'static str,
        /// Requested index.
        index: usize,
        /// Number of members in the catalog.
        len: usize,
    },

    /// Requested rotation angle is not one of the legal angles.
    #[error("Invalid rotation angle: {degrees}. Must be one of 0, 90, 180, 270")]
    InvalidAngle {
        /// Rejected angle in degrees.
        degrees: i64,
    },

    /// Requested canonical value does not exist in the catalog.
    #[error("Unknown {catalog} value: '{value}'")]
    UnknownEnumValue {
        /// Catalog that was searched.
        catalog: &'static str,
        /// Rejected value.
        value: String,
    },

    /// A candidate configuration failed validation.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// A persisted selection file could not be parsed.
    #[error("Invalid configuration file: {}\n  Reason: {reason}", .path.display())]
    InvalidConfigFile {
        /// Path to the offending file.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Failed to serialize output as JSON.
    #[error("Failed to serialize JSON: {source}")]
    Json {
        /// Underlying serde error.
        #[from]
        source: serde_json::Error,
    },

    /// Generic I/O error.
    #[error("I/O error: {source}")]
    Io {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
}

impl OptionsError {
    /// Create an OutOfRange error.
    pub fn out_of_range(catalog: &'static str, index: usize, len: usize) -> Self {
        Self::OutOfRange {
            catalog,
            index,
            len,
        }
    }

    /// Create an InvalidAngle error.
    pub fn invalid_angle(degrees: impl Into<i64>) -> Self {
        Self::InvalidAngle {
            degrees: degrees.into(),
        }
    }

    /// Create an UnknownEnumValue error.
    pub fn unknown_value(catalog: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            catalog,
            value: value.into(),
        }
    }

    /// Create an InvalidConfigFile error.
    pub fn invalid_config_file(path: PathBuf, reason: impl Into<String>) -> Self {
        Self::InvalidConfigFile {
            path,
            reason: reason.into(),
        }
    }

    /// Check if this error came from a single catalog lookup.
    pub fn is_lookup_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. } | Self::InvalidAngle { .. } | Self::UnknownEnumValue { .. }
        )
    }

    /// Get the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 1,
            Self::OutOfRange { .. } => 2,
            Self::InvalidAngle { .. } => 2,
            Self::UnknownEnumValue { .. } => 2,
            Self::InvalidConfigFile { .. } => 3,
            Self::Io { .. } => 5,
            Self::Json { .. } => 6,
        }
    }
}

/// Field of a candidate configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigField {
    /// PDF output version.
    Version,
    /// Bookmark/outline retention policy.
    OutlinePolicy,
    /// Page rotation.
    Rotation,
}

impl ConfigField {
    /// Field name as used in persisted selections and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::OutlinePolicy => "outline_policy",
            Self::Rotation => "rotation",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-tagged validation failure.
///
/// Identifies exactly which field of a candidate configuration was rejected
/// and the raw value that was supplied for it.
#[derive(Debug, thiserror::Error)]
#[error("Invalid {field}: {value}\n  Reason: {cause}")]
pub struct ConfigurationError {
    /// Field that failed validation.
    pub field: ConfigField,
    /// Offending value, rendered as supplied.
    pub value: String,
    /// Lookup failure behind the rejection.
    #[source]
    pub cause: Box<OptionsError>,
}

impl ConfigurationError {
    /// Create a ConfigurationError.
    pub fn new(field: ConfigField, value: impl Into<String>, cause: OptionsError) -> Self {
        Self {
            field,
            value: value.into(),
            cause: Box::new(cause),
        }
    }
}
