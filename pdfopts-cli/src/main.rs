//! pdfopts - Inspect and validate PDF operation options.
//!
//! Lists the option catalogs as selection menus and validates a user's
//! selection before it reaches the PDF layer.

mod cli;

use clap::Parser;
use std::process;

use crate::cli::{CatalogKind, Cli, Command, ListArgs, ValidateArgs};
use pdfopts::catalog::{OutlinePolicy, PdfVersion, Rotation};
use pdfopts::config::{RawValue, Selection};
use pdfopts::error::OptionsError;
use pdfopts::output::{
    MenuEntry, OutputFormatter, display_configuration_errors, display_validated_config,
    menu_entries,
};
use pdfopts::validation::{ConfigValidator, ValidatedConfig};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Run the application and handle errors
    if let Err(err) = run(cli).await {
        // Field errors were already reported by the formatter.
        if !matches!(err, OptionsError::Configuration(_)) {
            eprintln!("Error: {err}");
        }
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), OptionsError> {
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);

    match cli.command {
        Command::List(args) => list(&formatter, &args),
        Command::Validate(args) => validate(&formatter, &args).await.map(|_| ()),
    }
}

/// Menus for the requested catalogs, with their titles.
fn catalog_menus(catalog: Option<CatalogKind>) -> Vec<(&'static str, Vec<MenuEntry>)> {
    let kinds = match catalog {
        Some(kind) => vec![kind],
        None => vec![
            CatalogKind::Version,
            CatalogKind::Outline,
            CatalogKind::Rotation,
        ],
    };

    kinds
        .into_iter()
        .map(|kind| match kind {
            CatalogKind::Version => ("PDF version", menu_entries::<PdfVersion>()),
            CatalogKind::Outline => ("Outline policy", menu_entries::<OutlinePolicy>()),
            CatalogKind::Rotation => ("Rotation", menu_entries::<Rotation>()),
        })
        .collect()
}

fn list(formatter: &OutputFormatter, args: &ListArgs) -> Result<(), OptionsError> {
    let menus = catalog_menus(args.catalog);

    if args.json {
        let mut json = serde_json::Map::new();
        for (title, entries) in menus {
            json.insert(title.to_string(), serde_json::to_value(entries)?);
        }
        println!("{}", serde_json::Value::Object(json));
        return Ok(());
    }

    for (title, entries) in &menus {
        formatter.menu(title, entries);
    }
    Ok(())
}

/// Collect flag values into a selection; each flag is kept as raw text.
fn selection_from_args(args: &ValidateArgs) -> Selection {
    Selection {
        version: args.pdf_version.clone().map(RawValue::Text),
        outline_policy: args.outline.clone().map(RawValue::Text),
        rotation: args.rotation.clone().map(RawValue::Text),
    }
}

async fn validate(
    formatter: &OutputFormatter,
    args: &ValidateArgs,
) -> Result<ValidatedConfig, OptionsError> {
    let saved = match &args.config {
        Some(path) => {
            formatter.debug(&format!("Reading selection from {}", path.display()));
            Selection::load(path).await?
        }
        None => Selection::default(),
    };

    let candidate = saved.merge(selection_from_args(args)).into_candidate();
    let validator = ConfigValidator::new();

    let config = match validator.validate_config(&candidate) {
        Ok(config) => config,
        Err(first) => {
            if args.all_errors {
                let errors = validator.validate_all(&candidate).err().unwrap_or_default();
                display_configuration_errors(formatter, &errors);
            } else {
                display_configuration_errors(formatter, std::slice::from_ref(&first));
            }
            return Err(first.into());
        }
    };

    if args.json {
        let json = serde_json::to_string_pretty(&config)?;
        println!("{json}");
    } else {
        display_validated_config(formatter, &config);
    }

    Ok(config)
}
