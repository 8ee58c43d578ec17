//! CLI argument parsing for pdfopts.
//!
//! This module defines the command-line interface structure using `clap`.
//! It is also compiled into the build script to render the man page, so it
//! depends on nothing but `clap` and `std`.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Inspect and validate PDF operation options.
///
/// pdfopts lists the output versions, bookmark policies and rotations a
/// PDF split/merge operation accepts, and checks a selection before it is
/// handed to the PDF layer.
#[derive(Parser, Debug)]
#[command(name = "pdfopts")]
#[command(version)]
#[command(about = "Inspect and validate PDF operation options", long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Suppress all non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show ordinals and extra details
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the members of one or all catalogs
    ///
    /// Examples:
    ///   pdfopts list
    ///   pdfopts list rotation --json
    List(ListArgs),

    /// Validate a selection of version, outline policy and rotation
    ///
    /// Values on the command line override values read from --config.
    /// A missing outline policy defaults to RETAIN and a missing rotation
    /// to 0 degrees; the version is required.
    ///
    /// Examples:
    ///   pdfopts validate --pdf-version VERSION_1_7 --outline DISCARD --rotation 90
    ///   pdfopts validate --config selection.json --rotation 180
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Catalog to list (all when omitted)
    #[arg(value_enum, value_name = "CATALOG")]
    pub catalog: Option<CatalogKind>,

    /// Print entries as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// PDF output version (e.g. VERSION_1_7 or 1.7)
    #[arg(long = "pdf-version", value_name = "VERSION")]
    pub pdf_version: Option<String>,

    /// Bookmark/outline policy (e.g. RETAIN, DISCARD)
    #[arg(long, value_name = "POLICY")]
    pub outline: Option<String>,

    /// Page rotation in degrees (0, 90, 180, 270) or by name (DEGREES_90)
    #[arg(long, value_name = "DEGREES", allow_hyphen_values = true)]
    pub rotation: Option<String>,

    /// Read a saved JSON selection
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report every invalid field instead of stopping at the first
    #[arg(long)]
    pub all_errors: bool,

    /// Print the validated configuration as JSON
    #[arg(long)]
    pub json: bool,
}

/// Catalog selector for `list`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    /// PDF output versions
    Version,
    /// Bookmark/outline policies
    Outline,
    /// Page rotations
    Rotation,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_all() {
        let cli = Cli::try_parse_from(["pdfopts", "list"]).unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.catalog, None);
                assert!(!args.json);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_single_catalog() {
        let cli = Cli::try_parse_from(["pdfopts", "list", "rotation", "--json"]).unwrap();
        match cli.command {
            Command::List(args) => {
                assert_eq!(args.catalog, Some(CatalogKind::Rotation));
                assert!(args.json);
            }
            other => panic!("expected list, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_unknown_catalog() {
        assert!(Cli::try_parse_from(["pdfopts", "list", "compression"]).is_err());
    }

    #[test]
    fn test_parse_validate() {
        let cli = Cli::try_parse_from([
            "pdfopts",
            "validate",
            "--pdf-version",
            "VERSION_1_7",
            "--outline",
            "DISCARD",
            "--rotation",
            "45",
            "--all-errors",
        ])
        .unwrap();

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.pdf_version.as_deref(), Some("VERSION_1_7"));
                assert_eq!(args.outline.as_deref(), Some("DISCARD"));
                assert_eq!(args.rotation.as_deref(), Some("45"));
                assert!(args.all_errors);
                assert!(!args.json);
                assert!(args.config.is_none());
            }
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_rotation() {
        let cli = Cli::try_parse_from(["pdfopts", "validate", "--rotation", "-90"]).unwrap();
        match cli.command {
            Command::Validate(args) => assert_eq!(args.rotation.as_deref(), Some("-90")),
            other => panic!("expected validate, got {other:?}"),
        }
    }

    #[test]
    fn test_quiet_and_verbose_conflict() {
        assert!(Cli::try_parse_from(["pdfopts", "-q", "-v", "list"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pdfopts", "list", "--quiet"]).unwrap();
        assert!(cli.quiet);
    }
}
