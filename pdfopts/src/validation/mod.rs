//! Configuration validation for pdfopts.
//!
//! [`ConfigValidator`] is the single gate between user input and the PDF
//! operation layer. It checks each field of a candidate selection against
//! its catalog and either returns a [`ValidatedConfig`] or reports which
//! field was rejected and what value was supplied.
//!
//! Typed candidates are checked by equality against the catalog's members;
//! raw candidates go through the catalog's canonical-value lookup. The
//! validator is pure: no I/O, no output, no state.
//!
//! # Examples
//!
//! ```
//! use pdfopts::catalog::{OutlinePolicy, PdfVersion, Rotation};
//! use pdfopts::error::ConfigField;
//! use pdfopts::validation::ConfigValidator;
//!
//! let validator = ConfigValidator::new();
//!
//! let config = validator
//!     .validate(PdfVersion::Version1_7, OutlinePolicy::Discard, Rotation::Degrees90)
//!     .unwrap();
//! assert_eq!(config.rotation().degrees(), 90);
//!
//! let err = validator
//!     .validate(PdfVersion::Version1_7, OutlinePolicy::Discard, 45)
//!     .unwrap_err();
//! assert_eq!(err.field, ConfigField::Rotation);
//! assert_eq!(err.value, "45");
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, OutlinePolicy, PdfVersion, Rotation};
use crate::config::{Candidate, CandidateConfig};
use crate::error::{ConfigField, ConfigurationError, OptionsError};

/// Configuration whose every field is a confirmed catalog member.
///
/// Only produced by [`ConfigValidator`] or by deserializing canonical names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatedConfig {
    version: PdfVersion,
    outline_policy: OutlinePolicy,
    rotation: Rotation,
}

impl ValidatedConfig {
    /// Validated output version.
    pub fn version(&self) -> PdfVersion {
        self.version
    }

    /// Validated outline policy.
    pub fn outline_policy(&self) -> OutlinePolicy {
        self.outline_policy
    }

    /// Validated page rotation.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }
}

/// Validator for candidate configurations.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self
    }

    /// Validate a `(version, outline policy, rotation)` selection.
    ///
    /// Each argument may be a catalog member or a raw value.
    ///
    /// # Errors
    ///
    /// Returns the first failing field, checked in the order version,
    /// outline policy, rotation.
    pub fn validate(
        &self,
        version: impl Into<Candidate<PdfVersion>>,
        outline_policy: impl Into<Candidate<OutlinePolicy>>,
        rotation: impl Into<Candidate<Rotation>>,
    ) -> Result<ValidatedConfig, ConfigurationError> {
        self.validate_config(&CandidateConfig::new(version, outline_policy, rotation))
    }

    /// Validate a candidate configuration, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns the first failing field, checked in the order version,
    /// outline policy, rotation.
    pub fn validate_config(
        &self,
        candidate: &CandidateConfig,
    ) -> Result<ValidatedConfig, ConfigurationError> {
        Ok(ValidatedConfig {
            version: check(ConfigField::Version, &candidate.version)?,
            outline_policy: check(ConfigField::OutlinePolicy, &candidate.outline_policy)?,
            rotation: check(ConfigField::Rotation, &candidate.rotation)?,
        })
    }

    /// Validate a candidate configuration, reporting every failing field.
    ///
    /// # Errors
    ///
    /// Returns one error per rejected field, in field order. The vector is
    /// never empty.
    pub fn validate_all(
        &self,
        candidate: &CandidateConfig,
    ) -> Result<ValidatedConfig, Vec<ConfigurationError>> {
        let version = check(ConfigField::Version, &candidate.version);
        let outline_policy = check(ConfigField::OutlinePolicy, &candidate.outline_policy);
        let rotation = check(ConfigField::Rotation, &candidate.rotation);

        match (version, outline_policy, rotation) {
            (Ok(version), Ok(outline_policy), Ok(rotation)) => Ok(ValidatedConfig {
                version,
                outline_policy,
                rotation,
            }),
            (version, outline_policy, rotation) => Err([
                version.err(),
                outline_policy.err(),
                rotation.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}

/// Confirm one field's candidate belongs to its catalog.
fn check<T: Catalog>(
    field: ConfigField,
    candidate: &Candidate<T>,
) -> Result<T, ConfigurationError> {
    match candidate {
        Candidate::Typed(member) if member.is_member() => Ok(*member),
        Candidate::Typed(member) => Err(ConfigurationError::new(
            field,
            member.to_string(),
            OptionsError::unknown_value(T::CATALOG, member.to_string()),
        )),
        Candidate::Raw(raw) => {
            T::from_raw(raw).map_err(|cause| ConfigurationError::new(field, raw.to_string(), cause))
        }
    }
}
