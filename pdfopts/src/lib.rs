//! pdfopts - Typed option catalogs for PDF split/merge tools.
//!
//! This library defines the closed sets of values a user may pick when
//! configuring a PDF operation, and the validation gate that turns a user's
//! picks into a configuration the PDF layer can trust:
//!
//! - [`catalog::PdfVersion`] - supported output versions, ordered by recency
//! - [`catalog::OutlinePolicy`] - bookmark retention policies for merges
//! - [`catalog::Rotation`] - the four legal page rotations
//! - [`validation::ConfigValidator`] - field-by-field membership checks
//!
//! Catalog tables are compile-time constants; every type here is `Copy`,
//! `Send` and `Sync`, and nothing mutates after startup.
//!
//! # Examples
//!
//! ## Populating a menu
//!
//! ```
//! use pdfopts::catalog::{Catalog, OutlinePolicy};
//!
//! for policy in OutlinePolicy::values() {
//!     println!("{} - {}", policy.name(), policy.description());
//! }
//! ```
//!
//! ## Validating a selection
//!
//! ```
//! use pdfopts::catalog::{OutlinePolicy, PdfVersion, Rotation};
//! use pdfopts::ConfigValidator;
//!
//! let config = ConfigValidator::new()
//!     .validate("VERSION_1_7", OutlinePolicy::Discard, 90)
//!     .unwrap();
//! assert_eq!(config.version(), PdfVersion::Version1_7);
//! assert_eq!(config.rotation(), Rotation::Degrees90);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod output;
pub mod validation;

// Re-export commonly used types
pub use catalog::{Catalog, OutlinePolicy, PdfVersion, Rotation};
pub use config::{Candidate, CandidateConfig, RawValue, Selection};
pub use error::{ConfigField, ConfigurationError, OptionsError, Result};
pub use validation::{ConfigValidator, ValidatedConfig};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
