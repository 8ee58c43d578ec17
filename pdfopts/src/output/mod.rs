//! Output formatting and display for pdfopts.
//!
//! This module handles all user-facing output including:
//! - Formatted status messages
//! - Catalog selection menus
//! - Validation results and field errors
//! - Quiet and verbose modes
//!
//! Catalog and validation code never print; front ends route everything
//! through an [`OutputFormatter`].
//!
//! # Examples
//!
//! ```no_run
//! use pdfopts::catalog::Rotation;
//! use pdfopts::output::{OutputFormatter, menu_entries};
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.menu("Rotation", &menu_entries::<Rotation>());
//! ```

pub mod formatter;
pub mod menu;

pub use formatter::{MessageLevel, OutputFormatter};
pub use menu::{MenuEntry, MenuLabel, menu_entries};

use crate::catalog::Catalog;
use crate::error::ConfigurationError;
use crate::validation::ValidatedConfig;

/// Display a validated configuration to the user.
///
/// # Arguments
///
/// * `formatter` - Output formatter to use
/// * `config` - Configuration that passed validation
pub fn display_validated_config(formatter: &OutputFormatter, config: &ValidatedConfig) {
    formatter.success("Configuration is valid");
    formatter.info(&format!("  Version:        {}", config.version().name()));
    formatter.info(&format!(
        "  Outline policy: {}",
        config.outline_policy().name()
    ));
    formatter.info(&format!("  Rotation:       {}", config.rotation().name()));

    formatter.detail("PDF header", &config.version().header());
    formatter.detail("Outline", config.outline_policy().description());
    formatter.detail("Degrees", &config.rotation().degrees().to_string());
}

/// Display field errors from a failed validation.
///
/// # Arguments
///
/// * `formatter` - Output formatter to use
/// * `errors` - Field errors, in field order
pub fn display_configuration_errors(formatter: &OutputFormatter, errors: &[ConfigurationError]) {
    for err in errors {
        formatter.error(&format!(
            "Invalid {}: '{}' ({})",
            err.field, err.value, err.cause
        ));
    }

    if errors.len() > 1 {
        formatter.warning(&format!("{} field(s) failed validation", errors.len()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OutlinePolicy, PdfVersion};
    use crate::config::CandidateConfig;
    use crate::validation::ConfigValidator;

    #[test]
    fn test_display_validated_config() {
        let config = ConfigValidator::new()
            .validate(PdfVersion::Version1_7, OutlinePolicy::Discard, 90)
            .unwrap();
        display_validated_config(&OutputFormatter::verbose(), &config);
        display_validated_config(&OutputFormatter::quiet(), &config);
    }

    #[test]
    fn test_display_configuration_errors() {
        let errors = ConfigValidator::new()
            .validate_all(&CandidateConfig::new("VERSION_9_9", "KEEP", 45))
            .unwrap_err();
        assert_eq!(errors.len(), 3);
        display_configuration_errors(&OutputFormatter::quiet(), &errors);
    }
}
